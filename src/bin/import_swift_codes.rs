// Command-line bulk import of a SWIFT code workbook into the registry database.
//
// Usage:
//   cargo run --bin import_swift_codes -- <file> [db_path]
//
// db_path falls back to SWIFT_REGISTRY_DB_PATH, then the per-user data directory.

use anyhow::{bail, Context};
use std::path::PathBuf;
use std::sync::Arc;
use swift_code_registry::importer::{SwiftCodeImporter, SwiftCodeImporterImpl};
use swift_code_registry::repository::SwiftCodeRepositoryImpl;
use swift_code_registry::{logging, AppConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let mut args = std::env::args().skip(1);
    let file_path = match args.next() {
        Some(p) if !p.trim().is_empty() => PathBuf::from(p),
        _ => bail!("usage: import_swift_codes <file> [db_path]"),
    };

    let db_path = match args.next().filter(|s| !s.trim().is_empty()) {
        Some(p) => p,
        None => AppConfig::from_env()?.db_path,
    };

    let repo = Arc::new(
        SwiftCodeRepositoryImpl::new(&db_path)
            .with_context(|| format!("failed to open database {}", db_path))?,
    );
    let importer = SwiftCodeImporterImpl::with_defaults(repo);

    let report = importer
        .import_from_file(&file_path)
        .await
        .with_context(|| format!("import of {} failed", file_path.display()))?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
