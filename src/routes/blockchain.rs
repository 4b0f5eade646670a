use actix_web::{post, web, HttpResponse};
use serde::Deserialize;
use tracing::info;
use validator::Validate;

use crate::db::Store;
use crate::error::AppResult;
use crate::routes::redirect_home;
use crate::services::blockchain_service::BlockchainService;

#[derive(Deserialize, Validate)]
pub struct AddBlockchainForm {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    pub evm: Option<String>, // checkbox : présente = EVM
}

#[derive(Deserialize)]
pub struct DeleteBlockchainForm {
    pub name: String,
}

/// POST /add_blockchain
#[post("/add_blockchain")]
pub async fn add_blockchain(
    form: web::Form<AddBlockchainForm>,
    store: web::Data<Store>,
) -> AppResult<HttpResponse> {
    if let Err(errors) = form.validate() {
        return Ok(HttpResponse::BadRequest().json(errors));
    }

    let db = store.session().await;
    let blockchain = BlockchainService::create(&db, &form.name, form.evm.is_some()).await?;
    info!("⛓️  Blockchain added: {} (evm={})", blockchain.name, blockchain.evm);

    Ok(redirect_home())
}

/// POST /delete_blockchain - Supprime aussi toutes ses transactions
#[post("/delete_blockchain")]
pub async fn delete_blockchain(
    form: web::Form<DeleteBlockchainForm>,
    store: web::Data<Store>,
) -> AppResult<HttpResponse> {
    let db = store.session().await;
    BlockchainService::delete_by_name(&db, &form.name).await?;

    Ok(redirect_home())
}

pub fn blockchain_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(add_blockchain).service(delete_blockchain);
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, App};
    use crate::routes::{configure_routes, test_support::test_state};
    use crate::services::blockchain_service::BlockchainService;
    use crate::services::transaction_service::TransactionService;

    #[actix_web::test]
    async fn test_delete_blockchain_by_name() {
        let (_dir, store, config) = test_state().await;
        let app = test::init_service(
            App::new().app_data(store.clone()).app_data(config).configure(configure_routes),
        )
        .await;

        for (uri, form) in [
            ("/add_wallet", vec![("name", "W1")]),
            ("/add_blockchain", vec![("name", "Ethereum"), ("evm", "1")]),
            ("/add_blockchain", vec![("name", "Solana")]),
            ("/add_tx", vec![("wallet_id", "1"), ("blockchain_id", "1"), ("volume", "1"), ("date", "2024-01-05T10:00")]),
            ("/add_tx", vec![("wallet_id", "1"), ("blockchain_id", "2"), ("volume", "2"), ("date", "2024-01-05T10:00")]),
            ("/delete_blockchain", vec![("name", "Ethereum")]),
            ("/delete_blockchain", vec![("name", "Unknown")]),
        ] {
            let req = test::TestRequest::post().uri(uri).set_form(form).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::FOUND, "{}", uri);
        }

        let db = store.session().await;
        let chains = BlockchainService::find_all(&db).await.unwrap();
        assert_eq!(chains.len(), 1);
        assert_eq!(chains[0].name, "Solana");
        assert_eq!(chains[0].evm, 0);

        let txs = TransactionService::find_all(&db).await.unwrap();
        assert_eq!(txs.len(), 1);
        assert_eq!(txs[0].blockchain_id, chains[0].id);
    }

    #[actix_web::test]
    async fn test_blockchain_name_length_is_validated() {
        let (_dir, store, config) = test_state().await;
        let app = test::init_service(
            App::new().app_data(store.clone()).app_data(config).configure(configure_routes),
        )
        .await;

        let too_long = "b".repeat(51);
        for name in ["", too_long.as_str()] {
            let req = test::TestRequest::post()
                .uri("/add_blockchain")
                .set_form([("name", name), ("evm", "on")])
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        }

        // 50 caractères : accepté
        let max_len = "b".repeat(50);
        let req = test::TestRequest::post()
            .uri("/add_blockchain")
            .set_form([("name", max_len.as_str())])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FOUND);

        let db = store.session().await;
        let chains = BlockchainService::find_all(&db).await.unwrap();
        assert_eq!(chains.len(), 1);
        assert_eq!(chains[0].name, max_len);
    }
}
