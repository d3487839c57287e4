use actix_web::{HttpResponse, Responder, get, web};
use log::error;

use crate::dto::sale::SalesQuery;
use crate::models::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::services::{ServiceError, api as api_service};

#[get("/v1/sales")]
pub async fn api_v1_sales(
    params: web::Query<SalesQuery>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match api_service::list_sales(repo.get_ref(), &user, params.into_inner()) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(ServiceError::Unauthorized) => HttpResponse::Unauthorized().finish(),
        Err(e) => {
            error!("Failed to list sales: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
