//! Table bootstrap for `produits`.
//!
//! Not a migration system: it only guarantees the table exists so a fresh
//! database can serve requests.

use sea_orm::{ConnectionTrait, DbErr};

pub const CREATE_TABLE_SQL: &str = r#"CREATE TABLE IF NOT EXISTS produits (
    id SERIAL PRIMARY KEY,
    nom VARCHAR(20) NOT NULL,
    prix DOUBLE PRECISION NOT NULL,
    "prixAchat" DOUBLE PRECISION NULL
)"#;

/// Create the `produits` table if it is missing. Safe to run on every start.
pub async fn ensure_schema<C>(db: &C) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    db.execute_unprepared(CREATE_TABLE_SQL).await?;
    tracing::info!("Table produits is ready");
    Ok(())
}
