use crate::host::{ConsoleLibraryManager, ConsoleProject, ConsoleWorkbench};
use anyhow::Result;
use flowerino_client::HttpServiceClient;
use flowerino_sync::{AbortReason, SyncEngine, SyncOutcome, startup};
use std::path::Path;
use tracing::info;

pub fn run(project_path: &Path, server_url: &str, no_version_check: bool) -> Result<()> {
    let project = ConsoleProject::open(project_path)?;
    let service = HttpServiceClient::new(server_url);
    let workbench = ConsoleWorkbench;
    let libraries = ConsoleLibraryManager;

    if !no_version_check {
        startup::on_host_ready(&service, &workbench, server_url, env!("CARGO_PKG_VERSION"));
    }

    let mut engine = SyncEngine::new(&service, &workbench, &libraries);
    match engine.run_sync(&project) {
        SyncOutcome::Completed(report) => {
            info!(
                written = report.written,
                skipped = report.skipped,
                failed = report.failed,
                "sync finished"
            );
            println!(
                "Sync finished: {} file(s) written, {} skipped, {} failed.",
                report.written, report.skipped, report.failed
            );
        }
        SyncOutcome::Aborted(AbortReason::LinkageCancelled) => {
            // The user backed out; nothing happened.
        }
        SyncOutcome::Aborted(AbortReason::LinkageInvalid { full_repository }) => {
            println!(
                "Linked repository \"{full_repository}\" is not a valid owner/repository name. \
                 Run `flowerino link` to fix it."
            );
        }
        SyncOutcome::Aborted(AbortReason::ServiceUnreachable) => {
            println!("The Flowerino hub at {server_url} could not be reached.");
        }
    }
    Ok(())
}
