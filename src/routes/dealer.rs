use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::dealer::{AddDealerForm, AddShopForm, SaveDealerForm, SaveShopForm};
use crate::models::auth::AuthenticatedUser;
use crate::models::config::AuthConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, dealer as dealer_service};

#[get("/dealer/{dealer_id}")]
pub async fn show_dealer(
    dealer_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    auth_config: web::Data<AuthConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match dealer_service::load_dealer_page(repo.get_ref(), &user, dealer_id.into_inner()) {
        Ok(data) => {
            let mut context = base_context(
                &flash_messages,
                &user,
                "index",
                &auth_config.auth_service_url,
            );
            context.insert("dealer", &data.dealer);
            context.insert("shops", &data.shops);

            render_template(&tera, "dealer/index.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("This dealer is not available to you.").send();
            redirect("/")
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Dealer not found.").send();
            redirect("/")
        }
        Err(err) => {
            log::error!("Failed to load dealer: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/dealer/add")]
pub async fn add_dealer(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddDealerForm>,
) -> impl Responder {
    match dealer_service::add_dealer(repo.get_ref(), &user, form) {
        Ok(()) => {
            FlashMessage::success("Dealer added.").send();
            redirect("/")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/na")
        }
        Err(ServiceError::Form(message) | ServiceError::TypeConstraint(message)) => {
            FlashMessage::error(message).send();
            redirect("/")
        }
        Err(err) => {
            log::error!("Failed to add a dealer: {err}");
            FlashMessage::error("Error while adding the dealer.").send();
            redirect("/")
        }
    }
}

#[post("/dealer/save")]
pub async fn save_dealer(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SaveDealerForm>,
) -> impl Responder {
    let dealer_id = form.id;
    match dealer_service::save_dealer(repo.get_ref(), &user, form) {
        Ok(()) => {
            FlashMessage::success("Dealer updated.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("This dealer is not available to you.").send();
            return redirect("/");
        }
        Err(ServiceError::Form(message) | ServiceError::TypeConstraint(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to update dealer: {err}");
            FlashMessage::error("Error while updating the dealer.").send();
        }
    }

    redirect(&format!("/dealer/{dealer_id}"))
}

#[post("/dealer/{dealer_id}/deactivate")]
pub async fn deactivate_dealer(
    dealer_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match dealer_service::deactivate_dealer(repo.get_ref(), &user, dealer_id.into_inner()) {
        Ok(()) => {
            FlashMessage::success("Dealer deactivated.").send();
            redirect("/")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/na")
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Dealer not found.").send();
            redirect("/")
        }
        Err(err) => {
            log::error!("Failed to deactivate dealer: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/shop/add")]
pub async fn add_shop(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddShopForm>,
) -> impl Responder {
    let dealer_id = form.dealer_id;
    match dealer_service::add_shop(repo.get_ref(), &user, form) {
        Ok(()) => {
            FlashMessage::success("Shop added.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("This dealer is not available to you.").send();
            return redirect("/");
        }
        Err(ServiceError::Form(message) | ServiceError::TypeConstraint(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to add a shop: {err}");
            FlashMessage::error("Error while adding the shop.").send();
        }
    }

    redirect(&format!("/dealer/{dealer_id}"))
}

#[post("/shop/save")]
pub async fn save_shop(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SaveShopForm>,
) -> impl Responder {
    let dealer_id = form.dealer_id;
    match dealer_service::save_shop(repo.get_ref(), &user, form) {
        Ok(()) => {
            FlashMessage::success("Shop updated.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("This shop is not available to you.").send();
            return redirect("/");
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Shop not found.").send();
            return redirect("/");
        }
        Err(ServiceError::Form(message) | ServiceError::TypeConstraint(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to update shop: {err}");
            FlashMessage::error("Error while updating the shop.").send();
        }
    }

    redirect(&format!("/dealer/{dealer_id}"))
}
