use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sea_orm::DbErr;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid date '{value}' (expected YYYY-MM-DDTHH:MM): {source}")]
    InvalidDate {
        value: String,
        source: chrono::ParseError,
    },
    #[error("Invalid number '{value}': {source}")]
    InvalidNumber {
        value: String,
        source: std::num::ParseFloatError,
    },
    #[error("Upload failed: {0}")]
    Upload(String),
    #[error("Not found: {0}")]
    NotFound(String),
}

pub type AppResult<T> = Result<T, AppError>;

// Les erreurs de saisie (date, nombre) restent des erreurs serveur :
// le formulaire est censé fournir des valeurs déjà valides
impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        HttpResponse::build(status).json(json!({
            "error": self.to_string()
        }))
    }
}
