//! Async catalog loading
//!
//! Reads the catalog file with tokio and parses it on the blocking pool, so
//! a large catalog does not stall the runtime.

use crate::loader::CardDatabase;
use crate::Result;
use std::path::Path;
use tokio::time::Instant;
use tracing::info;

/// Load a catalog file asynchronously
/// Returns the database and how long loading took
pub async fn load_catalog(path: &Path) -> Result<(CardDatabase, std::time::Duration)> {
    let start = Instant::now();

    let contents = tokio::fs::read_to_string(path).await?;
    let db = tokio::task::spawn_blocking(move || CardDatabase::parse(&contents)).await??;

    let duration = start.elapsed();
    info!(
        path = %path.display(),
        cards = db.len(),
        elapsed_ms = duration.as_secs_f64() * 1000.0,
        "loaded card catalog"
    );
    Ok((db, duration))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::CardRepository;
    use crate::CatalogError;
    use std::path::PathBuf;

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[tokio::test]
    async fn test_load_catalog() {
        let path = scratch_file(
            "async_catalog.json",
            r#"[{"id": 9, "name": "Zap", "type": "Spell", "elixir_cost": 2,
                 "arena_unlocked": 5, "rarity": "Common", "image": "zap.png"}]"#,
        );

        let (db, _duration) = load_catalog(&path).await.unwrap();
        assert_eq!(db.len(), 1);
        assert_eq!(db.all_cards().unwrap()[0].name, "Zap");

        std::fs::remove_file(path).unwrap();
    }

    #[tokio::test]
    async fn test_load_missing_catalog() {
        let result = load_catalog(Path::new("no/such/catalog.json")).await;
        assert!(matches!(result, Err(CatalogError::IoError(_))));
    }

    #[tokio::test]
    async fn test_load_malformed_catalog() {
        let path = scratch_file("async_bad_catalog.json", "{not json");
        let result = load_catalog(&path).await;
        assert!(matches!(result, Err(CatalogError::JsonError(_))));
        std::fs::remove_file(path).unwrap();
    }
}
