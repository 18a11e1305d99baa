// src/bin/write_openapi_snapshot.rs
use anyhow::{Context, Result};
use inkpost::presentation::http::openapi;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let path = openapi::snapshot_path();
    openapi::write_openapi_snapshot(&path)
        .with_context(|| format!("writing OpenAPI snapshot to {}", path.display()))?;
    println!("OpenAPI snapshot written to {}", path.display());
    Ok(())
}
