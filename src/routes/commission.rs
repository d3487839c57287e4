use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::dto::commission::CommissionQuery;
use crate::forms::commission::{EarningStatusForm, SaveRateForm};
use crate::models::auth::AuthenticatedUser;
use crate::models::config::AuthConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, commission as commission_service};

#[get("/commissions")]
pub async fn show_commissions(
    params: web::Query<CommissionQuery>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    auth_config: web::Data<AuthConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match commission_service::load_commissions_page(repo.get_ref(), &user, params.into_inner()) {
        Ok(data) => {
            let mut context = base_context(
                &flash_messages,
                &user,
                "commissions",
                &auth_config.auth_service_url,
            );
            context.insert("rates", &data.rates);
            context.insert("earnings", &data.earnings);
            if let Some(period) = &data.period {
                context.insert("period", period);
            }

            render_template(&tera, "commissions/index.html", &context)
        }
        Err(ServiceError::Unauthorized) => redirect("/na"),
        Err(err) => {
            log::error!("Failed to list commissions: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/commissions/rates/save")]
pub async fn save_rate(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SaveRateForm>,
) -> impl Responder {
    match commission_service::save_rate(repo.get_ref(), &user, form) {
        Ok(_) => {
            FlashMessage::success("Commission rate saved.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            return redirect("/na");
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to save rate: {err}");
            FlashMessage::error("Error while saving the rate.").send();
        }
    }

    redirect("/commissions")
}

#[post("/commissions/earnings/status")]
pub async fn set_earning_status(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<EarningStatusForm>,
) -> impl Responder {
    match commission_service::set_earning_status(repo.get_ref(), &user, form) {
        Ok(_) => {
            FlashMessage::success("Earning status updated.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            return redirect("/na");
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Earning not found.").send();
        }
        Err(err) => {
            log::error!("Failed to update earning status: {err}");
            FlashMessage::error("Error while updating the earning.").send();
        }
    }

    redirect("/commissions")
}
