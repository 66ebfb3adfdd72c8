//! Console implementations of the engine's collaborator traits.

use flowerino_core::error::HostError;
use flowerino_sync::{LibraryManager, ProjectHost, Workbench};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A project rooted at a plain folder. The main entry file follows the
/// sketch convention: `<folder>/<folder name>.ino`.
pub struct ConsoleProject {
    folder: PathBuf,
}

impl ConsoleProject {
    pub fn open(folder: &Path) -> anyhow::Result<Self> {
        let folder = std::fs::canonicalize(folder)
            .map_err(|err| anyhow::anyhow!("cannot open project folder {}: {err}", folder.display()))?;
        if !folder.is_dir() {
            anyhow::bail!("not a project folder: {}", folder.display());
        }
        Ok(Self { folder })
    }
}

impl ProjectHost for ConsoleProject {
    fn folder(&self) -> &Path {
        &self.folder
    }

    fn main_entry_path(&self) -> PathBuf {
        let name = self
            .folder
            .file_name()
            .map(|v| v.to_string_lossy().to_string())
            .unwrap_or_else(|| "sketch".to_string());
        self.folder.join(format!("{name}.ino"))
    }

    fn reload(&self) -> Result<(), HostError> {
        // No editor is attached to the console host; the next read of the
        // folder sees the reconciled files.
        debug!(folder = %self.folder.display(), "reload requested");
        Ok(())
    }
}

/// Prompts and messages on stdin/stdout; URLs are printed rather than
/// launched, so the command works on headless machines.
#[derive(Default)]
pub struct ConsoleWorkbench;

impl Workbench for ConsoleWorkbench {
    fn prompt_text(&self, message: &str, initial: Option<&str>) -> Option<String> {
        match initial {
            Some(initial) => print!("{message} [{initial}]: "),
            None => print!("{message}: "),
        }
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        match std::io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => return None,
            Ok(_) => {}
        }
        let entered = line.trim();
        if entered.is_empty() {
            return initial.map(ToString::to_string);
        }
        Some(entered.to_string())
    }

    fn confirm(&self, message: &str) -> bool {
        print!("{message} [y/N]: ");
        let _ = std::io::stdout().flush();
        let mut line = String::new();
        if std::io::stdin().lock().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim(), "y" | "Y" | "yes")
    }

    fn show_message(&self, message: &str) {
        println!("{message}");
    }

    fn open_url(&self, url: &str) -> Result<(), HostError> {
        println!("Open in your browser: {url}");
        Ok(())
    }
}

/// The desktop library-manager dialog has no console counterpart; the
/// check only reports that nothing was inspected.
#[derive(Default)]
pub struct ConsoleLibraryManager;

impl LibraryManager for ConsoleLibraryManager {
    fn check_libraries(&self, node_uri: &str, only_if_update_needed: bool) -> bool {
        info!(
            node_uri,
            only_if_update_needed, "library check is handled by the desktop library manager"
        );
        false
    }
}
