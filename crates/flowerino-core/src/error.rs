use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("host error: {0}")]
    Host(#[from] HostError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to save settings to {path}: {source}")]
    SaveFailed {
        path: String,
        source: std::io::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    pub fn save_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::SaveFailed {
            path: path.into(),
            source,
        }
    }
}

/// Failures reported by host collaborators (project reload, browser launch).
///
/// These are always tolerated by the engine: logged, never propagated past
/// the current operation.
#[derive(Error, Debug)]
pub enum HostError {
    #[error("project reload failed: {0}")]
    ReloadFailed(String),

    #[error("cannot open url {url}: {reason}")]
    BrowserFailed { url: String, reason: String },
}

impl HostError {
    pub fn browser_failed(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::BrowserFailed {
            url: url.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
