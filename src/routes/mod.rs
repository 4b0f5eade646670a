pub mod health;
pub mod dashboard;
pub mod wallet;
pub mod blockchain;
pub mod transaction;
pub mod backup;

use actix_web::{http::header, web, HttpResponse};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health::health_check)
        .configure(dashboard::dashboard_routes)
        .configure(wallet::wallet_routes)
        .configure(blockchain::blockchain_routes)
        .configure(transaction::transaction_routes)
        .configure(backup::backup_routes);
}

/// Après chaque formulaire on renvoie vers le dashboard
pub fn redirect_home() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/"))
        .finish()
}
