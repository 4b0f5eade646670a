// ============================================================================
// MODELS - MODULE PRINCIPAL
// ============================================================================
//
// Description:
//   Point d'entrée pour tous les modèles de données.
//   Chaque entité correspond à une table SQLite avec SeaORM.
//
// Liste des modules:
//   - wallet : Wallets suivis (un nom, pas d'adresse)
//   - blockchain : Blockchains, avec le flag EVM (0/1)
//   - transaction : Transactions (table "tx"), volume/gas/comment optionnels
//   - health : Health check API
//   - dto : Structures des réponses (dashboard, vues)
//
// Points d'attention:
//   - Pas de back-references : les transactions portent wallet_id et
//     blockchain_id, les requêtes passent par les services
//   - Le flag EVM reste un entier pour rester compatible avec les fichiers
//     .db existants
//
// ============================================================================

pub mod wallet;
pub mod blockchain;
pub mod transaction;
pub mod health;
pub mod dto;
