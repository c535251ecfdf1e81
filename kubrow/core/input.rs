use anyhow::{Context, Result};
use kube::api::DynamicObject;
use kubrow_kube::parse_manifests;
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;

#[cfg(test)]
#[path = "./input.tests.rs"]
mod input_tests;

const STDIN: &str = "-";

/// Reads and parses manifests from all `files`, or from the standard input if there are no files.
pub async fn read_manifests(files: &[PathBuf]) -> Result<Vec<DynamicObject>> {
    if files.is_empty() {
        return read_source(Path::new(STDIN)).await;
    }

    let mut objects = Vec::new();
    for file in files {
        objects.extend(read_source(file).await?);
    }

    Ok(objects)
}

async fn read_source(path: &Path) -> Result<Vec<DynamicObject>> {
    let content = if path.as_os_str() == STDIN {
        let mut content = String::new();
        tokio::io::stdin()
            .read_to_string(&mut content)
            .await
            .context("cannot read manifests from stdin")?;
        content
    } else {
        tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("cannot read manifests from '{}'", path.display()))?
    };

    let objects = parse_manifests(&content).with_context(|| format!("cannot parse manifests from '{}'", path.display()))?;
    tracing::debug!("Read {} object(s) from '{}'", objects.len(), path.display());

    Ok(objects)
}
