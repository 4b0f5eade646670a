use sea_orm::*;
use crate::models::wallet;

pub struct WalletService;

impl WalletService {
    /// Ajoute un wallet (le nom est validé en amont : 1 à 50 caractères)
    pub async fn create(db: &DatabaseConnection, name: &str) -> Result<wallet::Model, DbErr> {
        let new_wallet = wallet::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        };

        new_wallet.insert(db).await
    }

    /// Tous les wallets, dans l'ordre de création
    pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<wallet::Model>, DbErr> {
        wallet::Entity::find()
            .order_by_asc(wallet::Column::Id)
            .all(db)
            .await
    }

    pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<wallet::Model>, DbErr> {
        wallet::Entity::find_by_id(id).one(db).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::temp_store;

    #[tokio::test]
    async fn test_create_and_list_wallets() {
        let (_dir, store) = temp_store().await;
        let db = store.session().await;

        let first = WalletService::create(&db, "W1").await.unwrap();
        let second = WalletService::create(&db, "W2").await.unwrap();

        let names: Vec<String> = WalletService::find_all(&db)
            .await
            .unwrap()
            .into_iter()
            .map(|w| w.name)
            .collect();
        assert_eq!(names, vec!["W1", "W2"]);

        let found = WalletService::find_by_id(&db, second.id).await.unwrap();
        assert_eq!(found.map(|w| w.name), Some("W2".to_string()));
        assert!(WalletService::find_by_id(&db, first.id + 100).await.unwrap().is_none());
    }
}
