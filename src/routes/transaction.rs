use actix_web::{web, HttpResponse};
use chrono::NaiveDateTime;
use serde::Deserialize;
use tracing::info;

use crate::db::Store;
use crate::error::{AppError, AppResult};
use crate::routes::redirect_home;
use crate::services::transaction_service::{NewTransaction, TransactionService};

// Format d'un <input type="datetime-local">
const FORM_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M";

// Formulaire d'ajout de transaction
#[derive(Deserialize)]
pub struct AddTransactionForm {
    pub wallet_id: i32,
    pub blockchain_id: i32,
    pub volume: Option<String>,  // vide = NULL
    pub gas: Option<String>,
    pub comment: Option<String>,
    pub date: String,            // Format: "2024-01-05T10:00"
}

impl AddTransactionForm {
    fn into_new_transaction(self) -> AppResult<NewTransaction> {
        Ok(NewTransaction {
            wallet_id: self.wallet_id,
            blockchain_id: self.blockchain_id,
            date: parse_form_date(&self.date)?,
            volume: parse_optional_number(self.volume.as_deref())?,
            gas: parse_optional_number(self.gas.as_deref())?,
            comment: self.comment.filter(|c| !c.trim().is_empty()),
        })
    }
}

fn parse_form_date(value: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, FORM_DATE_FORMAT).map_err(|source| AppError::InvalidDate {
        value: value.to_string(),
        source,
    })
}

fn parse_optional_number(value: Option<&str>) -> AppResult<Option<f64>> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(v) => v
            .parse::<f64>()
            .map(Some)
            .map_err(|source| AppError::InvalidNumber {
                value: v.to_string(),
                source,
            }),
    }
}

/// POST /add_tx (alias /add_transaction)
pub async fn add_transaction(
    form: web::Form<AddTransactionForm>,
    store: web::Data<Store>,
) -> AppResult<HttpResponse> {
    let new_tx = form.into_inner().into_new_transaction()?;

    let db = store.session().await;
    let tx = TransactionService::create(&db, new_tx).await?;
    info!("💸 Transaction {} added (wallet {}, blockchain {})", tx.id, tx.wallet_id, tx.blockchain_id);

    Ok(redirect_home())
}

/// POST /delete_tx/{id} (alias /delete_transaction/{id}) - id inconnu : rien à faire
pub async fn delete_transaction(
    path: web::Path<i32>,
    store: web::Data<Store>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let db = store.session().await;
    if TransactionService::delete(&db, id).await? {
        info!("🗑️  Transaction {} deleted", id);
    }

    Ok(redirect_home())
}

pub fn transaction_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/add_tx", web::post().to(add_transaction))
        .route("/add_transaction", web::post().to(add_transaction))
        .route("/delete_tx/{id}", web::post().to(delete_transaction))
        .route("/delete_transaction/{id}", web::post().to(delete_transaction));
}
