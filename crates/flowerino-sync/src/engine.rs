use crate::host::{LibraryManager, ProjectHost, Workbench};
use crate::reconcile::{self, ReconcileReport};
use crate::run_guard;
use crate::session::SessionContext;
use flowerino_client::RemoteService;
use flowerino_core::{identity, settings::Linkage};
use tracing::{debug, info, warn};

const LINK_PROMPT: &str = "Full repository name from Flowerino (e.g. myUser/myRepo)";
const LINK_PREAMBLE: &str = "Before continuing, please link this project with a Flowerino repository.";

/// Result of one sync invocation. Aborts are ordinary outcomes, not
/// errors: nothing here propagates past the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    Completed(ReconcileReport),
    Aborted(AbortReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbortReason {
    /// The user cancelled the linkage prompt; abort silently.
    LinkageCancelled,
    /// A stored repository name that cannot be resolved.
    LinkageInvalid { full_repository: String },
    /// The generation call failed; there is nothing to reconcile.
    ServiceUnreachable,
}

/// Drives one end-to-end sync: validate linkage, check libraries, fetch
/// artifacts, reconcile files, trigger reload.
pub struct SyncEngine<'a> {
    service: &'a dyn RemoteService,
    workbench: &'a dyn Workbench,
    libraries: &'a dyn LibraryManager,
    session: SessionContext,
}

impl<'a> SyncEngine<'a> {
    pub fn new(
        service: &'a dyn RemoteService,
        workbench: &'a dyn Workbench,
        libraries: &'a dyn LibraryManager,
    ) -> Self {
        Self {
            service,
            workbench,
            libraries,
            session: SessionContext::new(),
        }
    }

    /// Regenerate the project from its linked repository.
    ///
    /// One run is a critical section keyed by the project path; a second
    /// trigger for the same project blocks until the first completes.
    pub fn run_sync(&mut self, project: &dyn ProjectHost) -> SyncOutcome {
        let lock = run_guard::project_lock(project.folder());
        let _guard = run_guard::lock_project(&lock);

        let (full_repository, node_uri) = match self.ensure_resource_node(project) {
            Ok(resolved) => resolved,
            Err(reason) => return SyncOutcome::Aborted(reason),
        };
        debug!(node_uri, "linkage validated");

        if !self.session.library_checked(&node_uri) {
            self.libraries.check_libraries(&node_uri, true);
            self.session.mark_library_checked(&node_uri);
        }

        let Some(artifacts) = self.service.generate_files(&node_uri) else {
            warn!(node_uri, "generation service unreachable, sync aborted");
            return SyncOutcome::Aborted(AbortReason::ServiceUnreachable);
        };
        debug!(count = artifacts.len(), "artifacts fetched");

        let report = reconcile::reconcile_files(project, &artifacts);

        if let Err(err) = project.reload() {
            // Already-written files stay in place.
            warn!(error = %err, "error while reloading project");
        } else {
            info!(full_repository, "project reloaded from linked repository");
        }

        SyncOutcome::Completed(report)
    }

    /// Prompt for (and persist) the linked repository name. Returns the
    /// entered name, or `None` when the user cancels.
    pub fn edit_linked_repository(
        &self,
        project: &dyn ProjectHost,
        with_preamble: bool,
    ) -> Option<String> {
        let current = Linkage::load(project.folder()).full_repository;
        let message = if with_preamble {
            format!("{LINK_PREAMBLE}\n\n{LINK_PROMPT}")
        } else {
            LINK_PROMPT.to_string()
        };

        let entered = self.workbench.prompt_text(&message, current.as_deref())?;
        if let Err(err) = Linkage::store(project.folder(), &entered) {
            warn!(error = %err, "could not persist linked repository");
        }
        Some(entered)
    }

    /// Run the required-libraries check unconditionally (the "download
    /// required libs" action). Returns whether an update was needed, or
    /// `None` when no linkage could be established.
    pub fn check_libraries(&mut self, project: &dyn ProjectHost) -> Option<bool> {
        let (_, node_uri) = self.ensure_resource_node(project).ok()?;
        let update_needed = self.libraries.check_libraries(&node_uri, false);
        self.session.mark_library_checked(&node_uri);
        Some(update_needed)
    }

    /// Load the project's linkage, prompting interactively when absent,
    /// and resolve it to a resource-node identifier.
    fn ensure_resource_node(
        &self,
        project: &dyn ProjectHost,
    ) -> Result<(String, String), AbortReason> {
        let full_repository = match Linkage::load(project.folder()).full_repository {
            Some(existing) => existing,
            None => match self.edit_linked_repository(project, true) {
                Some(entered) => entered,
                None => {
                    debug!("linkage prompt cancelled");
                    return Err(AbortReason::LinkageCancelled);
                }
            },
        };

        match identity::resolve(&full_repository) {
            Some(node_uri) => Ok((full_repository, node_uri)),
            None => {
                warn!(full_repository, "linked repository name cannot be resolved");
                Err(AbortReason::LinkageInvalid { full_repository })
            }
        }
    }
}
