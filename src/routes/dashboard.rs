use actix_web::{get, web, HttpResponse};
use chrono::Utc;

use crate::db::Store;
use crate::error::{AppError, AppResult};
use crate::models::dto::InteractionView;
use crate::services::blockchain_service::BlockchainService;
use crate::services::dashboard_service::DashboardService;
use crate::services::interaction::aggregate;
use crate::services::transaction_service::TransactionService;
use crate::services::wallet_service::WalletService;

/// GET / - Wallets, blockchains, transactions et matrices d'interaction
#[get("/")]
pub async fn home(store: web::Data<Store>) -> AppResult<HttpResponse> {
    let db = store.session().await;
    let dashboard = DashboardService::build(&db, Utc::now().naive_utc()).await?;

    Ok(HttpResponse::Ok().json(dashboard))
}

/// GET /interactions/{wallet_id}/{blockchain_id} - Statistiques d'une seule paire
#[get("/interactions/{wallet_id}/{blockchain_id}")]
pub async fn get_interaction(
    path: web::Path<(i32, i32)>,
    store: web::Data<Store>,
) -> AppResult<HttpResponse> {
    let (wallet_id, blockchain_id) = path.into_inner();
    let db = store.session().await;

    WalletService::find_by_id(&db, wallet_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("wallet {}", wallet_id)))?;
    let blockchain = BlockchainService::find_by_id(&db, blockchain_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("blockchain {}", blockchain_id)))?;

    let txs = TransactionService::find_by_wallet_and_blockchain(&db, wallet_id, blockchain_id).await?;
    let stats = aggregate(&blockchain, &txs);

    Ok(HttpResponse::Ok().json(InteractionView::now(stats)))
}

pub fn dashboard_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home).service(get_interaction);
}
