//! Database Module
//!
//! Embedded SurrealDB storage (RocksDB backend). The repository layer in
//! [`repository`] is the only consumer; handlers never touch SurrealQL
//! directly.

pub mod repository;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::core::{Result, ServerError};

const NAMESPACE: &str = "ajdel";
const DATABASE: &str = "storefront";

/// Open (or create) the embedded database under `{work_dir}/data`
pub async fn init_database(work_dir: &str) -> Result<Surreal<Db>> {
    let data_dir = Path::new(work_dir).join("data");
    std::fs::create_dir_all(&data_dir)?;

    let db_path = data_dir.join("ajdel.db");
    let db = Surreal::new::<RocksDb>(db_path.to_string_lossy().as_ref())
        .await
        .map_err(|e| ServerError::Database(format!("Failed to open database: {e}")))?;

    db.use_ns(NAMESPACE)
        .use_db(DATABASE)
        .await
        .map_err(|e| ServerError::Database(format!("Failed to select namespace: {e}")))?;

    tracing::info!(path = %db_path.display(), "Database opened (embedded SurrealDB)");
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn init_creates_data_dir_and_opens() {
        let tmp = tempfile::tempdir().unwrap();
        let db = init_database(tmp.path().to_str().unwrap()).await.unwrap();
        // A trivial query proves the connection is live
        let mut res = db.query("RETURN 1 + 1").await.unwrap();
        let out: Option<i64> = res.take(0).unwrap();
        assert_eq!(out, Some(2));
        assert!(tmp.path().join("data").exists());
    }
}
