//! Collaborator seams to the host environment.
//!
//! The engine never touches UI or host internals directly; everything it
//! needs from the outside world comes through these traits.

use flowerino_core::error::HostError;
use std::path::{Path, PathBuf};

/// The host's view of one open project.
pub trait ProjectHost {
    /// Project folder: destination root for reconciled files.
    fn folder(&self) -> &Path;

    /// Path of the project's main entry file. Artifacts carrying the main
    /// entry extension are always written here, whatever their own name.
    fn main_entry_path(&self) -> PathBuf;

    /// Ask the host to reload its view of the project's file tree.
    fn reload(&self) -> Result<(), HostError>;
}

/// Interactive surface of the host: prompts, messages, browser launch.
pub trait Workbench {
    /// Modal text prompt; `None` when the user cancels.
    fn prompt_text(&self, message: &str, initial: Option<&str>) -> Option<String>;

    /// Yes/no confirmation.
    fn confirm(&self, message: &str) -> bool;

    /// Informational modal message.
    fn show_message(&self, message: &str);

    /// Open a URL in the external browser.
    fn open_url(&self, url: &str) -> Result<(), HostError>;
}

/// The dependent library-manager dialog.
pub trait LibraryManager {
    /// Refresh required-library state for a resource node; returns whether
    /// an update was needed. In `only_if_update_needed` mode the dialog is
    /// shown only when that is the case.
    fn check_libraries(&self, node_uri: &str, only_if_update_needed: bool) -> bool;
}
