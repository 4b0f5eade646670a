use serde::{Serialize, Deserialize};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tx")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date: DateTime,          // UTC, sans fuseau
    pub volume: Option<f64>,     // NULL possible depuis l'ajout de gas/comment
    pub gas: Option<f64>,
    pub comment: Option<String>,
    pub wallet_id: i32,
    pub blockchain_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::wallet::Entity",
        from = "Column::WalletId",
        to = "super::wallet::Column::Id"
    )]
    Wallet,
    #[sea_orm(
        belongs_to = "super::blockchain::Entity",
        from = "Column::BlockchainId",
        to = "super::blockchain::Column::Id"
    )]
    Blockchain,
}

impl ActiveModelBehavior for ActiveModel {}
