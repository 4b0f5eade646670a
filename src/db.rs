// connexion BD + session par requête

use std::path::{Path, PathBuf};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Schema, Statement};
use tokio::sync::{RwLock, RwLockReadGuard};
use tracing::{info, warn};

use crate::error::AppResult;
use crate::models::{blockchain, transaction, wallet};

/// Colonnes ajoutées au fil des versions : un fichier .db plus ancien
/// (uploadé ou existant) est complété à l'ouverture, sans backfill
const LEGACY_COLUMNS: &[(&str, &str, &str)] = &[
    ("blockchain", "evm", "INTEGER NOT NULL DEFAULT 0"),
    ("tx", "gas", "REAL"),
    ("tx", "comment", "TEXT"),
];

/// Session de stockage d'une requête : relâchée quand elle sort du scope
pub type StoreSession<'a> = RwLockReadGuard<'a, DatabaseConnection>;

/// Propriétaire de la connexion SQLite.
///
/// Chaque handler prend une session en lecture le temps de la requête.
/// Le remplacement du fichier (upload) et sa copie (download) prennent le
/// verrou en écriture : aucune requête ne voit un fichier à moitié écrit.
pub struct Store {
    database_path: PathBuf,
    connection: RwLock<DatabaseConnection>,
}

impl Store {
    pub async fn open(database_path: impl Into<PathBuf>) -> AppResult<Self> {
        let database_path = database_path.into();

        if let Some(parent) = database_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let connection = establish_connection(&database_path).await?;

        Ok(Self {
            database_path,
            connection: RwLock::new(connection),
        })
    }

    pub fn database_path(&self) -> &Path {
        &self.database_path
    }

    pub async fn session(&self) -> StoreSession<'_> {
        self.connection.read().await
    }

    /// Remplace le fichier SQLite par `replacement` puis se reconnecte.
    /// Le fichier est d'abord ouvert seul : s'il n'est pas une base SQLite
    /// lisible, la base courante n'est pas touchée.
    pub async fn replace_with(&self, replacement: &Path) -> AppResult<()> {
        // metadata() échoue si le fichier n'existe pas (mode=rwc le créerait)
        tokio::fs::metadata(replacement).await?;
        let candidate = establish_connection(replacement).await?;
        candidate.close().await?;

        let mut connection = self.connection.write().await;

        let previous = std::mem::replace(&mut *connection, DatabaseConnection::Disconnected);
        if let Err(e) = previous.close().await {
            warn!("⚠️  Closing previous connection failed: {}", e);
        }

        // On se reconnecte même si le rename échoue (l'ancien fichier est intact)
        let renamed = tokio::fs::rename(replacement, &self.database_path).await;
        *connection = establish_connection(&self.database_path).await?;
        renamed?;

        info!("✅ Database file replaced: {}", self.database_path.display());
        Ok(())
    }

    /// Contenu du fichier SQLite, lu sans écriture concurrente
    pub async fn snapshot(&self) -> AppResult<Vec<u8>> {
        let _exclusive = self.connection.write().await;
        Ok(tokio::fs::read(&self.database_path).await?)
    }
}

pub async fn establish_connection(database_path: &Path) -> Result<DatabaseConnection, DbErr> {
    let database_url = format!("sqlite://{}?mode=rwc", database_path.display());

    let mut options = ConnectOptions::new(database_url);
    options.sqlx_logging(false);

    let db = Database::connect(options).await?;
    ensure_schema(&db).await?;

    Ok(db)
}

/// Crée les tables manquantes puis complète les anciennes colonnes
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    // Ordre important : tx référence wallet et blockchain
    let tables = [
        schema.create_table_from_entity(wallet::Entity).if_not_exists().to_owned(),
        schema.create_table_from_entity(blockchain::Entity).if_not_exists().to_owned(),
        schema.create_table_from_entity(transaction::Entity).if_not_exists().to_owned(),
    ];

    for table in tables {
        db.execute(backend.build(&table)).await?;
    }

    for (table, column, definition) in LEGACY_COLUMNS {
        let columns = table_columns(db, table).await?;
        if !columns.iter().any(|c| c == column) {
            warn!("⚠️  Upgrading legacy table {}: adding column {}", table, column);
            db.execute(Statement::from_string(
                backend,
                format!("ALTER TABLE {} ADD COLUMN {} {}", table, column, definition),
            ))
            .await?;
        }
    }

    Ok(())
}

async fn table_columns(db: &DatabaseConnection, table: &str) -> Result<Vec<String>, DbErr> {
    let rows = db
        .query_all(Statement::from_string(
            db.get_database_backend(),
            format!("PRAGMA table_info({})", table),
        ))
        .await?;

    rows.iter().map(|row| row.try_get::<String>("", "name")).collect()
}
