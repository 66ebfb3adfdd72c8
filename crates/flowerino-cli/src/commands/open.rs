use crate::host::ConsoleWorkbench;
use anyhow::Result;
use flowerino_core::{identity, settings::Linkage};
use flowerino_sync::Workbench;
use std::path::Path;

/// Diagram editor for the project's linked repository.
pub fn diagrams(project_path: &Path, server_url: &str) -> Result<()> {
    let Some(full_repository) = Linkage::load(project_path).full_repository else {
        anyhow::bail!("the project is not linked to a repository; run `flowerino link` first");
    };
    let Some(url) = identity::diagrams_url(server_url, &full_repository) else {
        anyhow::bail!("linked repository \"{full_repository}\" is not a valid owner/repository name");
    };
    open(&url)
}

/// Repository browser on the hub.
pub fn repositories(server_url: &str) -> Result<()> {
    open(&identity::repositories_url(server_url))
}

/// Public Flowerino web site.
pub fn website() -> Result<()> {
    open(identity::website_url())
}

fn open(url: &str) -> Result<()> {
    ConsoleWorkbench
        .open_url(url)
        .map_err(|err| anyhow::anyhow!("{err}"))
}
