// ============================================================================
// INTERACTIONS WALLET × BLOCKCHAIN
// ============================================================================
//
// Calculs purs (aucun accès BD) à partir des listes déjà chargées :
//   - aggregate : statistiques d'un wallet sur une blockchain
//   - build_matrices : matrice EVM + une matrice par blockchain non-EVM
//
// Une "interaction" = volume cumulé strictement positif.
// Un volume ou un gas NULL compte pour 0 dans les sommes.
//
// ============================================================================

use std::collections::{HashMap, HashSet};
use chrono::{Datelike, NaiveDateTime};
use serde::Serialize;
use crate::models::{blockchain, transaction, wallet};

/// Statistiques d'un wallet sur une blockchain
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InteractionStats {
    pub blockchain_id: i32,
    pub blockchain_name: String,
    pub volume: f64,
    pub gas: f64,
    pub last_date: Option<NaiveDateTime>,
    pub unique_months: usize, // nombre de couples (année, mois) distincts
    pub total_txs: usize,
}

impl InteractionStats {
    pub fn has_interaction(&self) -> bool {
        self.volume > 0.0
    }
}

/// Une ligne de matrice : un wallet, une cellule par blockchain
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixRow {
    pub wallet_id: i32,
    pub wallet_name: String,
    pub cells: Vec<InteractionStats>,
}

/// Matrice d'une blockchain non-EVM (une seule cellule par ligne)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChainMatrix {
    pub blockchain_id: i32,
    pub blockchain_name: String,
    pub rows: Vec<MatrixRow>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct InteractionMatrices {
    pub evm_blockchains: Vec<blockchain::Model>,
    pub evm_matrix: Vec<MatrixRow>,
    pub non_evm_matrices: Vec<ChainMatrix>,
}

/// Agrège les transactions d'un wallet pour une blockchain.
/// Les transactions d'autres blockchains sont ignorées.
pub fn aggregate<'a, I>(blockchain: &blockchain::Model, wallet_transactions: I) -> InteractionStats
where
    I: IntoIterator<Item = &'a transaction::Model>,
{
    let mut volume = 0.0;
    let mut gas = 0.0;
    let mut last_date: Option<NaiveDateTime> = None;
    let mut months: HashSet<(i32, u32)> = HashSet::new();
    let mut total_txs = 0;

    for tx in wallet_transactions
        .into_iter()
        .filter(|tx| tx.blockchain_id == blockchain.id)
    {
        volume += tx.volume.unwrap_or(0.0);
        gas += tx.gas.unwrap_or(0.0);
        last_date = last_date.max(Some(tx.date));
        months.insert((tx.date.year(), tx.date.month()));
        total_txs += 1;
    }

    InteractionStats {
        blockchain_id: blockchain.id,
        blockchain_name: blockchain.name.clone(),
        volume,
        gas,
        last_date,
        unique_months: months.len(),
        total_txs,
    }
}

/// Construit la matrice EVM et les matrices non-EVM.
///
/// - EVM (evm == 1) : une ligne par wallet ayant du volume sur au moins une
///   blockchain EVM, une cellule par blockchain EVM
/// - non-EVM (evm == 0) : une matrice par blockchain, avec seulement les
///   wallets ayant du volume dessus
///
/// L'ordre des wallets et des blockchains en entrée est conservé.
pub fn build_matrices(
    wallets: &[wallet::Model],
    blockchains: &[blockchain::Model],
    transactions: &[transaction::Model],
) -> InteractionMatrices {
    // Regrouper une seule fois les transactions par wallet
    let mut by_wallet: HashMap<i32, Vec<&transaction::Model>> = HashMap::new();
    for tx in transactions {
        by_wallet.entry(tx.wallet_id).or_default().push(tx);
    }

    let wallet_txs = |wallet_id: i32| by_wallet.get(&wallet_id).cloned().unwrap_or_default();

    let evm_blockchains: Vec<blockchain::Model> = blockchains
        .iter()
        .filter(|b| b.is_evm())
        .cloned()
        .collect();

    let mut evm_matrix = Vec::new();
    for wallet in wallets {
        let txs = wallet_txs(wallet.id);
        let cells: Vec<InteractionStats> = evm_blockchains
            .iter()
            .map(|chain| aggregate(chain, txs.iter().copied()))
            .collect();

        if cells.iter().any(InteractionStats::has_interaction) {
            evm_matrix.push(MatrixRow {
                wallet_id: wallet.id,
                wallet_name: wallet.name.clone(),
                cells,
            });
        }
    }

    let non_evm_matrices = blockchains
        .iter()
        .filter(|b| b.is_non_evm())
        .map(|chain| {
            let rows = wallets
                .iter()
                .filter_map(|wallet| {
                    let stats = aggregate(chain, wallet_txs(wallet.id));
                    stats.has_interaction().then(|| MatrixRow {
                        wallet_id: wallet.id,
                        wallet_name: wallet.name.clone(),
                        cells: vec![stats],
                    })
                })
                .collect();

            ChainMatrix {
                blockchain_id: chain.id,
                blockchain_name: chain.name.clone(),
                rows,
            }
        })
        .collect();

    InteractionMatrices {
        evm_blockchains,
        evm_matrix,
        non_evm_matrices,
    }
}
