use sea_orm::*;
use chrono::NaiveDateTime;
use crate::models::transaction;

pub struct TransactionService;

/// Données d'une nouvelle transaction, déjà parsées depuis le formulaire
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub wallet_id: i32,
    pub blockchain_id: i32,
    pub date: NaiveDateTime,
    pub volume: Option<f64>,
    pub gas: Option<f64>,
    pub comment: Option<String>,
}

impl TransactionService {
    /// Insère la transaction. Un wallet_id ou blockchain_id inconnu est
    /// rejeté par la clé étrangère SQLite.
    pub async fn create(
        db: &DatabaseConnection,
        new_tx: NewTransaction,
    ) -> Result<transaction::Model, DbErr> {
        let model = transaction::ActiveModel {
            date: Set(new_tx.date),
            volume: Set(new_tx.volume),
            gas: Set(new_tx.gas),
            comment: Set(new_tx.comment),
            wallet_id: Set(new_tx.wallet_id),
            blockchain_id: Set(new_tx.blockchain_id),
            ..Default::default()
        };

        model.insert(db).await
    }

    pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<transaction::Model>, DbErr> {
        transaction::Entity::find()
            .order_by_asc(transaction::Column::Id)
            .all(db)
            .await
    }

    pub async fn find_by_wallet_and_blockchain(
        db: &DatabaseConnection,
        wallet_id: i32,
        blockchain_id: i32,
    ) -> Result<Vec<transaction::Model>, DbErr> {
        transaction::Entity::find()
            .filter(transaction::Column::WalletId.eq(wallet_id))
            .filter(transaction::Column::BlockchainId.eq(blockchain_id))
            .order_by_asc(transaction::Column::Date)
            .all(db)
            .await
    }

    /// Supprime par id. Retourne false si la transaction n'existe pas.
    pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, DbErr> {
        let result = transaction::Entity::delete_by_id(id).exec(db).await?;
        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::blockchain_service::BlockchainService;
    use crate::services::test_support::temp_store;
    use crate::services::wallet_service::WalletService;

    fn new_tx(wallet_id: i32, blockchain_id: i32, date: &str, volume: Option<f64>) -> NewTransaction {
        NewTransaction {
            wallet_id,
            blockchain_id,
            date: NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M").unwrap(),
            volume,
            gas: None,
            comment: None,
        }
    }

    #[tokio::test]
    async fn test_create_keeps_optional_fields() {
        let (_dir, store) = temp_store().await;
        let db = store.session().await;

        let wallet = WalletService::create(&db, "W1").await.unwrap();
        let chain = BlockchainService::create(&db, "Ethereum", true).await.unwrap();

        let mut input = new_tx(wallet.id, chain.id, "2024-01-05T10:00", None);
        input.gas = Some(0.002);
        input.comment = Some("bridge".to_string());

        let created = TransactionService::create(&db, input).await.unwrap();
        let stored = TransactionService::find_all(&db).await.unwrap();

        assert_eq!(stored, vec![created.clone()]);
        assert_eq!(created.volume, None);
        assert_eq!(created.gas, Some(0.002));
        assert_eq!(created.comment.as_deref(), Some("bridge"));
    }

    #[tokio::test]
    async fn test_unknown_wallet_is_rejected_by_storage() {
        let (_dir, store) = temp_store().await;
        let db = store.session().await;

        let chain = BlockchainService::create(&db, "Ethereum", true).await.unwrap();

        let result = TransactionService::create(&db, new_tx(42, chain.id, "2024-01-05T10:00", Some(1.0))).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_find_by_wallet_and_blockchain() {
        let (_dir, store) = temp_store().await;
        let db = store.session().await;

        let w1 = WalletService::create(&db, "W1").await.unwrap();
        let w2 = WalletService::create(&db, "W2").await.unwrap();
        let eth = BlockchainService::create(&db, "Ethereum", true).await.unwrap();
        let sol = BlockchainService::create(&db, "Solana", false).await.unwrap();

        let later = TransactionService::create(&db, new_tx(w1.id, eth.id, "2024-03-01T10:00", Some(1.0))).await.unwrap();
        let earlier = TransactionService::create(&db, new_tx(w1.id, eth.id, "2024-01-01T10:00", Some(2.0))).await.unwrap();
        TransactionService::create(&db, new_tx(w1.id, sol.id, "2024-01-01T10:00", Some(3.0))).await.unwrap();
        TransactionService::create(&db, new_tx(w2.id, eth.id, "2024-01-01T10:00", Some(4.0))).await.unwrap();

        let found = TransactionService::find_by_wallet_and_blockchain(&db, w1.id, eth.id).await.unwrap();
        assert_eq!(found, vec![earlier, later]);

        let none = TransactionService::find_by_wallet_and_blockchain(&db, w2.id, sol.id).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_delete() {
        let (_dir, store) = temp_store().await;
        let db = store.session().await;

        let wallet = WalletService::create(&db, "W1").await.unwrap();
        let chain = BlockchainService::create(&db, "Ethereum", true).await.unwrap();
        let tx = TransactionService::create(&db, new_tx(wallet.id, chain.id, "2024-01-05T10:00", Some(1.0))).await.unwrap();

        assert!(TransactionService::delete(&db, tx.id).await.unwrap());
        assert!(!TransactionService::delete(&db, tx.id).await.unwrap());
        assert!(TransactionService::find_all(&db).await.unwrap().is_empty());
    }
}
