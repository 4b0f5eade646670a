use sea_orm::*;
use tracing::info;
use crate::models::{blockchain, transaction};

pub struct BlockchainService;

impl BlockchainService {
    pub async fn create(
        db: &DatabaseConnection,
        name: &str,
        evm: bool,
    ) -> Result<blockchain::Model, DbErr> {
        let new_blockchain = blockchain::ActiveModel {
            name: Set(name.to_string()),
            evm: Set(i32::from(evm)),
            ..Default::default()
        };

        new_blockchain.insert(db).await
    }

    pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<blockchain::Model>, DbErr> {
        blockchain::Entity::find()
            .order_by_asc(blockchain::Column::Id)
            .all(db)
            .await
    }

    pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<blockchain::Model>, DbErr> {
        blockchain::Entity::find_by_id(id).one(db).await
    }

    /// Supprime la blockchain portant ce nom (la plus ancienne si doublon)
    /// et toutes ses transactions. Retourne false si aucune ne correspond.
    pub async fn delete_by_name(db: &DatabaseConnection, name: &str) -> Result<bool, DbErr> {
        let target = blockchain::Entity::find()
            .filter(blockchain::Column::Name.eq(name))
            .order_by_asc(blockchain::Column::Id)
            .one(db)
            .await?;

        let target = match target {
            Some(b) => b,
            None => return Ok(false),
        };

        // Pas de ON DELETE CASCADE : les transactions partent d'abord
        let txn = db.begin().await?;

        let removed = transaction::Entity::delete_many()
            .filter(transaction::Column::BlockchainId.eq(target.id))
            .exec(&txn)
            .await?;

        blockchain::Entity::delete_by_id(target.id).exec(&txn).await?;

        txn.commit().await?;

        info!(
            "🗑️  Blockchain '{}' deleted with {} transaction(s)",
            target.name, removed.rows_affected
        );
        Ok(true)
    }
}
