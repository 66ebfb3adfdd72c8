use crate::commands::NullService;
use crate::host::{ConsoleLibraryManager, ConsoleProject, ConsoleWorkbench};
use anyhow::Result;
use flowerino_sync::SyncEngine;
use std::path::Path;

/// Run the required-libraries check unconditionally, prompting for a link
/// first when the project has none.
pub fn run(project_path: &Path) -> Result<()> {
    let project = ConsoleProject::open(project_path)?;
    let service = NullService;
    let workbench = ConsoleWorkbench;
    let libraries = ConsoleLibraryManager;

    let mut engine = SyncEngine::new(&service, &workbench, &libraries);
    match engine.check_libraries(&project) {
        Some(true) => println!("One or more libraries need to be updated."),
        Some(false) => println!("Required libraries are up to date."),
        None => println!("The project is not linked to a repository."),
    }
    Ok(())
}
