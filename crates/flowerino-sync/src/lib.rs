pub mod engine;
pub mod host;
pub mod reconcile;
pub mod run_guard;
pub mod session;
pub mod startup;

pub use engine::{AbortReason, SyncEngine, SyncOutcome};
pub use host::{LibraryManager, ProjectHost, Workbench};
pub use session::SessionContext;
