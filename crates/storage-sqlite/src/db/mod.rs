//! Database connection management: pool creation, initialization, and the
//! single-writer actor.

mod write_actor;

use std::fs;
use std::path::Path;
use std::sync::Arc;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel::Connection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use inmoflow_core::errors::{DatabaseError, Error, Result};

use crate::errors::IntoCore;

pub use write_actor::{spawn_writer, WriteHandle};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

pub type DbPool = Arc<Pool<ConnectionManager<SqliteConnection>>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Creates the database file if needed and runs pending migrations.
/// Returns the resolved path.
pub fn init(db_path: &str) -> Result<String> {
    if !Path::new(db_path).exists() {
        create_db_file(db_path)?;
    }
    run_migrations(db_path)?;
    Ok(db_path.to_string())
}

/// Creates an r2d2 pool over the SQLite file with sane pragmas.
pub fn create_pool(db_path: &str) -> Result<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(db_path);
    let pool = Pool::builder()
        .max_size(8)
        .connection_customizer(Box::new(ConnectionCustomizer))
        .build(manager)
        .map_err(|e| Error::Database(DatabaseError::PoolCreationFailed(e.to_string())))?;
    Ok(Arc::new(pool))
}

/// Checks out a pooled connection, mapping pool errors to core errors.
pub fn get_connection(pool: &DbPool) -> Result<DbConnection> {
    pool.get().into_core()
}

/// Runs pending embedded migrations on a dedicated connection.
pub fn run_migrations(db_path: &str) -> Result<()> {
    let mut conn = SqliteConnection::establish(db_path)
        .map_err(|e| Error::Database(DatabaseError::ConnectionFailed(e.to_string())))?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| Error::Database(DatabaseError::MigrationFailed(e.to_string())))?;
    Ok(())
}

fn create_db_file(db_path: &str) -> Result<()> {
    if let Some(db_dir) = Path::new(db_path).parent() {
        if !db_dir.exists() {
            fs::create_dir_all(db_dir)
                .map_err(|e| Error::Database(DatabaseError::ConnectionFailed(e.to_string())))?;
        }
    }
    fs::File::create(db_path)
        .map_err(|e| Error::Database(DatabaseError::ConnectionFailed(e.to_string())))?;
    Ok(())
}

/// Enables WAL, foreign keys, and a busy timeout on every pooled connection.
#[derive(Debug)]
struct ConnectionCustomizer;

impl r2d2::CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionCustomizer {
    fn on_acquire(
        &self,
        conn: &mut SqliteConnection,
    ) -> std::result::Result<(), diesel::r2d2::Error> {
        conn.batch_execute(
            "PRAGMA journal_mode = WAL; PRAGMA foreign_keys = ON; PRAGMA busy_timeout = 5000;",
        )
        .map_err(diesel::r2d2::Error::QueryError)
    }
}
