use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::dto::selfcare::ActivationsQuery;
use crate::forms::selfcare::{ActivationForm, BalanceQuery, BundleForm};
use crate::gateway::types::Activation;
use crate::gateway::{GatewayClient, ReportSession};
use crate::models::auth::AuthenticatedUser;
use crate::models::config::AuthConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, selfcare as selfcare_service};

#[get("/selfcare")]
pub async fn show_selfcare(
    params: web::Query<BalanceQuery>,
    user: AuthenticatedUser,
    gateway: web::Data<GatewayClient>,
    flash_messages: IncomingFlashMessages,
    auth_config: web::Data<AuthConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match selfcare_service::check_balance(gateway.get_ref(), &user, params.into_inner()).await {
        Ok(data) => {
            let mut context = base_context(
                &flash_messages,
                &user,
                "selfcare",
                &auth_config.auth_service_url,
            );
            if let Some(balance) = &data.balance {
                context.insert("balance", balance);
            }

            render_template(&tera, "selfcare/index.html", &context)
        }
        Err(ServiceError::Unauthorized) => redirect("/na"),
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/selfcare")
        }
        Err(ServiceError::Gateway(err)) => {
            FlashMessage::error(format!("Balance check failed: {err}")).send();
            redirect("/selfcare")
        }
        Err(err) => {
            log::error!("Failed to check balance: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/selfcare/bundle")]
pub async fn buy_bundle(
    user: AuthenticatedUser,
    gateway: web::Data<GatewayClient>,
    web::Form(form): web::Form<BundleForm>,
) -> impl Responder {
    match selfcare_service::purchase_bundle(gateway.get_ref(), &user, form).await {
        Ok(ack) => {
            let reference = ack.reference.unwrap_or_else(|| "accepted".to_string());
            FlashMessage::success(format!("Bundle purchased ({reference}).")).send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            return redirect("/na");
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(ServiceError::Gateway(err)) => {
            FlashMessage::error(format!("Bundle purchase failed: {err}")).send();
        }
        Err(err) => {
            log::error!("Failed to purchase bundle: {err}");
            FlashMessage::error("Error while purchasing the bundle.").send();
        }
    }

    redirect("/selfcare")
}

#[post("/selfcare/activate")]
pub async fn activate_sim(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    gateway: web::Data<GatewayClient>,
    web::Form(form): web::Form<ActivationForm>,
) -> impl Responder {
    match selfcare_service::submit_activation(repo.get_ref(), gateway.get_ref(), &user, form).await
    {
        Ok(ack) => {
            let reference = ack.reference.unwrap_or_else(|| "accepted".to_string());
            FlashMessage::success(format!("Activation submitted ({reference}).")).send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            return redirect("/na");
        }
        Err(ServiceError::Form(message) | ServiceError::TypeConstraint(message)) => {
            FlashMessage::error(message).send();
        }
        Err(ServiceError::Gateway(err)) => {
            FlashMessage::error(format!("Activation failed: {err}")).send();
        }
        Err(err) => {
            log::error!("Failed to submit activation: {err}");
            FlashMessage::error("Error while submitting the activation.").send();
        }
    }

    redirect("/selfcare")
}

#[get("/activations")]
pub async fn show_activations(
    params: web::Query<ActivationsQuery>,
    user: AuthenticatedUser,
    gateway: web::Data<GatewayClient>,
    session: web::Data<ReportSession<Activation>>,
    flash_messages: IncomingFlashMessages,
    auth_config: web::Data<AuthConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match selfcare_service::load_activations_page(
        gateway.get_ref(),
        session.get_ref(),
        &user,
        params.into_inner(),
    )
    .await
    {
        Ok(data) => {
            let mut context = base_context(
                &flash_messages,
                &user,
                "activations",
                &auth_config.auth_service_url,
            );
            context.insert("activations", &data.activations);
            if let Some(search_query) = &data.search_query {
                context.insert("search_query", search_query);
            }
            if let Some(date_from) = &data.date_from {
                context.insert("date_from", date_from);
            }
            if let Some(date_to) = &data.date_to {
                context.insert("date_to", date_to);
            }

            render_template(&tera, "activations/index.html", &context)
        }
        Err(ServiceError::Unauthorized) => redirect("/na"),
        Err(ServiceError::Gateway(err)) => {
            FlashMessage::error(format!("Activations report unavailable: {err}")).send();
            redirect("/")
        }
        Err(err) => {
            log::error!("Failed to load activations: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
