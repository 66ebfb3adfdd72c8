use crate::host::ProjectHost;
use flowerino_client::GeneratedArtifact;
use flowerino_core::constants;
use std::path::Path;
use tracing::{debug, info, warn};

/// Result of one reconciliation pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReconcileReport {
    pub written: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Apply the per-artifact write policy against the project tree.
///
/// Artifacts are processed in the order received. A failing write is
/// logged and does not stop the remaining artifacts.
pub fn reconcile_files(project: &dyn ProjectHost, artifacts: &[GeneratedArtifact]) -> ReconcileReport {
    let mut report = ReconcileReport::default();

    for artifact in artifacts {
        let file_name = file_name_of(&artifact.file_node_uri);
        let Some(file_name) = validate_file_name(file_name) else {
            warn!(
                file_node_uri = artifact.file_node_uri,
                "rejecting artifact with unsafe file name"
            );
            report.failed += 1;
            continue;
        };

        // The main entry file keeps the project's own name, whatever the
        // repository calls it. More than one such artifact is last-write-wins.
        let destination = if file_name.ends_with(constants::MAIN_ENTRY_EXTENSION) {
            project.main_entry_path()
        } else {
            let destination = project.folder().join(file_name);
            if artifact.generate_once && destination.exists() {
                debug!(path = %destination.display(), "generate-once file exists, skipping");
                report.skipped += 1;
                continue;
            }
            destination
        };

        match std::fs::write(&destination, artifact.content.as_bytes()) {
            Ok(()) => {
                info!(path = %destination.display(), "file updated");
                report.written += 1;
            }
            Err(err) => {
                warn!(path = %destination.display(), error = %err, "error while saving file");
                report.failed += 1;
            }
        }
    }
    report
}

/// Final path segment of a server-relative file identifier.
fn file_name_of(file_node_uri: &str) -> &str {
    file_node_uri
        .rsplit_once('/')
        .map_or(file_node_uri, |(_, name)| name)
}

/// Accept only plain file names: a name that is empty, a dot segment, or
/// that smuggles in a second path component must never reach the project
/// folder join.
fn validate_file_name(name: &str) -> Option<&str> {
    if name.is_empty() || name == "." || name == ".." {
        return None;
    }
    if name.contains('\\') || name.contains(':') {
        return None;
    }
    let component = Path::new(name);
    if component.components().count() != 1 {
        return None;
    }
    Some(name)
}
