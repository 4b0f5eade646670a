use actix_web::{post, web, HttpResponse};
use serde::Deserialize;
use tracing::info;
use validator::Validate;

use crate::db::Store;
use crate::error::AppResult;
use crate::routes::redirect_home;
use crate::services::wallet_service::WalletService;

// Formulaire d'ajout de wallet
#[derive(Deserialize, Validate)]
pub struct AddWalletForm {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
}

/// POST /add_wallet
#[post("/add_wallet")]
pub async fn add_wallet(
    form: web::Form<AddWalletForm>,
    store: web::Data<Store>,
) -> AppResult<HttpResponse> {
    if let Err(errors) = form.validate() {
        return Ok(HttpResponse::BadRequest().json(errors));
    }

    let db = store.session().await;
    let wallet = WalletService::create(&db, &form.name).await?;
    info!("👛 Wallet added: {} (id {})", wallet.name, wallet.id);

    Ok(redirect_home())
}

pub fn wallet_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(add_wallet);
}
