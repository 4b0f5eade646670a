use actix_multipart::{Field, Multipart, MultipartError};
use actix_web::http::header::{ContentDisposition, ContentType, DispositionParam, DispositionType};
use actix_web::{get, post, web, HttpResponse};
use futures::TryStreamExt;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::db::Store;
use crate::error::{AppError, AppResult};
use crate::utils::upload::{allowed_file, secure_filename};

// Les réponses de l'upload sont du texte brut, toujours en 200
fn plain(message: &str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(message.to_string())
}

fn is_missing_multipart(e: &MultipartError) -> bool {
    matches!(
        e,
        MultipartError::ContentTypeMissing
            | MultipartError::ContentTypeIncompatible
            | MultipartError::Incomplete
    )
}

fn multipart_error(e: MultipartError) -> AppError {
    AppError::Upload(e.to_string())
}

/// POST /upload_db - Remplace le fichier SQLite par celui uploadé (champ "file")
#[post("/upload_db")]
pub async fn upload_db(
    mut payload: Multipart,
    store: web::Data<Store>,
    config: web::Data<AppConfig>,
) -> AppResult<HttpResponse> {
    loop {
        let mut field = match payload.try_next().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            // Pas de corps multipart exploitable : aucun champ "file" reçu
            Err(e) if is_missing_multipart(&e) => {
                debug!("Upload without multipart body: {}", e);
                break;
            }
            Err(e) => return Err(multipart_error(e)),
        };

        // Un champ "file" sans paramètre filename est un champ texte, pas un fichier
        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_owned);
        let filename = match filename {
            Some(f) if field.name() == Some("file") => f,
            _ => {
                // Consommer le champ avant de passer au suivant
                while field.try_next().await.map_err(multipart_error)?.is_some() {}
                continue;
            }
        };

        if filename.is_empty() {
            return Ok(plain("No selected file"));
        }
        if !allowed_file(&filename) {
            warn!("⚠️  Upload rejected: {}", filename);
            return Ok(plain("Allowed file types are .db"));
        }

        let target = save_field(&mut field, &config, &filename).await?;

        if let Err(e) = store.replace_with(&target).await {
            let _ = tokio::fs::remove_file(&target).await;
            return Err(e);
        }

        info!("📥 Database uploaded: {}", filename);
        return Ok(plain("File successfully uploaded"));
    }

    Ok(plain("No file part"))
}

/// Écrit le champ dans le dossier d'upload sous un nom unique et sûr
async fn save_field(
    field: &mut Field,
    config: &AppConfig,
    filename: &str,
) -> AppResult<std::path::PathBuf> {
    tokio::fs::create_dir_all(&config.upload_dir).await?;

    let target = config
        .upload_dir
        .join(format!("{}_{}", Uuid::new_v4(), secure_filename(filename)));

    let mut file = tokio::fs::File::create(&target).await?;
    while let Some(chunk) = field.try_next().await.map_err(multipart_error)? {
        file.write_all(&chunk).await?;
    }
    file.flush().await?;

    Ok(target)
}

/// GET /download_db - Le fichier SQLite en pièce jointe
#[get("/download_db")]
pub async fn download_db(store: web::Data<Store>) -> AppResult<HttpResponse> {
    let bytes = store.snapshot().await?;

    let filename = store
        .database_path()
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "airdrop.db".to_string());

    Ok(HttpResponse::Ok()
        .content_type(ContentType::octet_stream())
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(filename)],
        })
        .body(bytes))
}

pub fn backup_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(upload_db).service(download_db);
}
