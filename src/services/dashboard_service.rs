use std::collections::HashMap;
use sea_orm::{DatabaseConnection, DbErr};
use chrono::NaiveDateTime;

use crate::models::dto::{ChainMatrixView, DashboardResponse, MatrixRowView, TransactionView};
use crate::services::blockchain_service::BlockchainService;
use crate::services::interaction::build_matrices;
use crate::services::transaction_service::TransactionService;
use crate::services::wallet_service::WalletService;
use crate::utils::date_window::Recency;

pub struct DashboardService;

impl DashboardService {
    /// Recharge tout depuis la BD et recalcule les matrices à chaque appel.
    /// `now` sert de référence pour les drapeaux d'activité récente.
    pub async fn build(
        db: &DatabaseConnection,
        now: NaiveDateTime,
    ) -> Result<DashboardResponse, DbErr> {
        let wallets = WalletService::find_all(db).await?;
        let blockchains = BlockchainService::find_all(db).await?;
        let transactions = TransactionService::find_all(db).await?;

        let matrices = build_matrices(&wallets, &blockchains, &transactions);

        let wallet_names: HashMap<i32, &str> =
            wallets.iter().map(|w| (w.id, w.name.as_str())).collect();
        let blockchain_names: HashMap<i32, &str> =
            blockchains.iter().map(|b| (b.id, b.name.as_str())).collect();

        let transaction_views: Vec<TransactionView> = transactions
            .into_iter()
            .map(|tx| TransactionView {
                wallet_name: wallet_names.get(&tx.wallet_id).map(|n| String::from(*n)),
                blockchain_name: blockchain_names.get(&tx.blockchain_id).map(|n| String::from(*n)),
                recency: Recency::at(Some(tx.date), now),
                transaction: tx,
            })
            .collect();

        Ok(DashboardResponse {
            transactions: transaction_views,
            evm_blockchains: matrices.evm_blockchains,
            evm_matrix: matrices
                .evm_matrix
                .into_iter()
                .map(|row| MatrixRowView::at(row, now))
                .collect(),
            non_evm_matrices: matrices
                .non_evm_matrices
                .into_iter()
                .map(|matrix| ChainMatrixView::at(matrix, now))
                .collect(),
            wallets,
            blockchains,
        })
    }
}
