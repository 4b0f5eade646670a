pub mod interaction;
pub mod wallet_service;
pub mod blockchain_service;
pub mod transaction_service;
pub mod dashboard_service;
