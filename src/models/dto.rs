// pour la réponse structurée du dashboard
use chrono::NaiveDateTime;
use serde::Serialize;

use crate::models::{blockchain, transaction, wallet};
use crate::services::interaction::{ChainMatrix, InteractionStats, MatrixRow};
use crate::utils::date_window::Recency;

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub wallets: Vec<wallet::Model>,
    pub blockchains: Vec<blockchain::Model>,
    pub transactions: Vec<TransactionView>,
    pub evm_blockchains: Vec<blockchain::Model>, // colonnes de la matrice EVM
    pub evm_matrix: Vec<MatrixRowView>,
    pub non_evm_matrices: Vec<ChainMatrixView>,
}

// Transaction + noms résolus pour l'affichage
#[derive(Debug, Serialize)]
pub struct TransactionView {
    #[serde(flatten)]
    pub transaction: transaction::Model,
    pub wallet_name: Option<String>,
    pub blockchain_name: Option<String>,
    pub recency: Recency,
}

#[derive(Debug, Serialize)]
pub struct InteractionView {
    #[serde(flatten)]
    pub stats: InteractionStats,
    pub recency: Recency, // sur last_date
}

#[derive(Debug, Serialize)]
pub struct MatrixRowView {
    pub wallet_id: i32,
    pub wallet_name: String,
    pub cells: Vec<InteractionView>,
}

#[derive(Debug, Serialize)]
pub struct ChainMatrixView {
    pub blockchain_id: i32,
    pub blockchain_name: String,
    pub rows: Vec<MatrixRowView>,
}

impl InteractionView {
    pub fn now(stats: InteractionStats) -> Self {
        let recency = Recency::of(stats.last_date);
        Self { stats, recency }
    }

    pub fn at(stats: InteractionStats, now: NaiveDateTime) -> Self {
        let recency = Recency::at(stats.last_date, now);
        Self { stats, recency }
    }
}

impl MatrixRowView {
    pub fn at(row: MatrixRow, now: NaiveDateTime) -> Self {
        Self {
            wallet_id: row.wallet_id,
            wallet_name: row.wallet_name,
            cells: row
                .cells
                .into_iter()
                .map(|stats| InteractionView::at(stats, now))
                .collect(),
        }
    }
}

impl ChainMatrixView {
    pub fn at(matrix: ChainMatrix, now: NaiveDateTime) -> Self {
        Self {
            blockchain_id: matrix.blockchain_id,
            blockchain_name: matrix.blockchain_name,
            rows: matrix
                .rows
                .into_iter()
                .map(|row| MatrixRowView::at(row, now))
                .collect(),
        }
    }
}
