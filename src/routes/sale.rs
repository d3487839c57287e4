use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::dto::sale::SalesQuery;
use crate::forms::sale::RecordSaleForm;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::AuthConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, sale as sale_service};

#[get("/sales")]
pub async fn show_sales(
    params: web::Query<SalesQuery>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    auth_config: web::Data<AuthConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match sale_service::load_sales_page(repo.get_ref(), &user, params.into_inner()) {
        Ok(data) => {
            let mut context = base_context(
                &flash_messages,
                &user,
                "sales",
                &auth_config.auth_service_url,
            );
            context.insert("sales", &data.sales);
            if let Some(search_query) = &data.search_query {
                context.insert("search_query", search_query);
            }
            if let Some(date_from) = &data.date_from {
                context.insert("date_from", date_from);
            }
            if let Some(date_to) = &data.date_to {
                context.insert("date_to", date_to);
            }

            render_template(&tera, "sales/index.html", &context)
        }
        Err(ServiceError::Unauthorized) => redirect("/na"),
        Err(err) => {
            log::error!("Failed to list sales: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/sales/record")]
pub async fn record_sale(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<RecordSaleForm>,
) -> impl Responder {
    match sale_service::record_sale(repo.get_ref(), &user, form) {
        Ok(_) => {
            FlashMessage::success("Sale recorded.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("This shop is not available to you.").send();
            return redirect("/sales");
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Shop not found.").send();
        }
        Err(ServiceError::Form(message) | ServiceError::TypeConstraint(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to record sale: {err}");
            FlashMessage::error("Error while recording the sale.").send();
        }
    }

    redirect("/sales")
}
