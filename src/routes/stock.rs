use actix_multipart::form::MultipartForm;
use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::dto::stock::StockQuery;
use crate::forms::stock::{SwapImeiForm, TransferStockForm, UploadStockForm};
use crate::models::auth::AuthenticatedUser;
use crate::models::config::AuthConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, stock as stock_service};

#[get("/stock")]
pub async fn show_stock(
    params: web::Query<StockQuery>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    auth_config: web::Data<AuthConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match stock_service::load_stock_page(repo.get_ref(), &user, params.into_inner()) {
        Ok(data) => {
            let mut context = base_context(
                &flash_messages,
                &user,
                "stock",
                &auth_config.auth_service_url,
            );
            context.insert("stock", &data.items);
            context.insert("shops", &data.shops);
            if let Some(search_query) = &data.search_query {
                context.insert("search_query", search_query);
            }

            render_template(&tera, "stock/index.html", &context)
        }
        Err(ServiceError::Unauthorized) => redirect("/na"),
        Err(err) => {
            log::error!("Failed to list stock: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/stock/upload")]
pub async fn upload_stock(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    MultipartForm(mut form): MultipartForm<UploadStockForm>,
) -> impl Responder {
    match stock_service::upload_stock(repo.get_ref(), &user, &mut form) {
        Ok(added) => {
            FlashMessage::success(format!("{added} stock items registered.")).send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            return redirect("/na");
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to upload stock: {err}");
            FlashMessage::error("Error while registering stock.").send();
        }
    }

    redirect("/stock")
}

#[post("/stock/transfer")]
pub async fn transfer_stock(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    body: web::Bytes,
) -> impl Responder {
    let form = match TransferStockForm::from_urlencoded(body.as_ref()) {
        Ok(form) => form,
        Err(err) => {
            log::error!("Failed to parse transfer form: {err}");
            FlashMessage::error("Malformed transfer request.").send();
            return redirect("/stock");
        }
    };

    match stock_service::transfer_stock(repo.get_ref(), &user, form) {
        Ok(moved) => {
            FlashMessage::success(format!("{moved} items transferred.")).send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("This shop is not available to you.").send();
            return redirect("/stock");
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Shop not found.").send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to transfer stock: {err}");
            FlashMessage::error("Error while transferring stock.").send();
        }
    }

    redirect("/stock")
}

#[post("/stock/swap")]
pub async fn swap_imei(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SwapImeiForm>,
) -> impl Responder {
    match stock_service::swap_imei(repo.get_ref(), &user, form) {
        Ok((old, replacement)) => {
            FlashMessage::success(format!(
                "IMEI {} swapped for {}.",
                old.imei, replacement.imei
            ))
            .send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("This stock item is not available to you.").send();
            return redirect("/stock");
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("IMEI not found in stock.").send();
        }
        Err(ServiceError::Form(message) | ServiceError::TypeConstraint(message)) => {
            FlashMessage::error(message).send();
        }
        Err(ServiceError::Repository(err)) => {
            FlashMessage::error(format!("Swap rejected: {err}")).send();
        }
        Err(err) => {
            log::error!("Failed to swap stock: {err}");
            FlashMessage::error("Error while swapping stock.").send();
        }
    }

    redirect("/stock")
}
