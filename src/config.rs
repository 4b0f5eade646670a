// Configuration depuis les variables d'environnement (.env supporté)

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    // Serveur
    pub host: String,
    pub port: u16,

    // Fichier SQLite servi par /download_db et remplacé par /upload_db
    pub database_path: PathBuf,
    // Dossier de réception des uploads avant remplacement
    pub upload_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenv().ok();

        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8080);
        let database_path = env::var("DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("instance").join("airdrop.db"));
        let upload_dir = env::var("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("files"));

        Self {
            host,
            port,
            database_path,
            upload_dir,
        }
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
