use crate::commands::NullService;
use crate::host::{ConsoleLibraryManager, ConsoleProject, ConsoleWorkbench};
use anyhow::Result;
use flowerino_sync::SyncEngine;
use std::path::Path;

pub fn run(project_path: &Path) -> Result<()> {
    let project = ConsoleProject::open(project_path)?;
    // Editing the link never talks to the hub.
    let service = NullService;
    let workbench = ConsoleWorkbench;
    let libraries = ConsoleLibraryManager;

    let engine = SyncEngine::new(&service, &workbench, &libraries);
    match engine.edit_linked_repository(&project, false) {
        Some(full_repository) => println!("Project linked to {full_repository}."),
        None => println!("Link unchanged."),
    }
    Ok(())
}
