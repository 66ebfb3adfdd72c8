pub mod libraries;
pub mod link;
pub mod open;
pub mod sync;

use flowerino_client::RemoteService;
use flowerino_core::constants;
use flowerino_core::settings::GlobalSettings;

/// Service stand-in for commands that never talk to the hub.
pub(crate) struct NullService;

impl RemoteService for NullService {
    fn invoke(&self, _operation_path: &str) -> Option<serde_json::Value> {
        None
    }
}

/// Server URL for this invocation: the `--server-url` flag when given,
/// otherwise the global settings file (seeded with the default hub at
/// first run).
pub fn effective_server_url(override_url: Option<&str>) -> anyhow::Result<String> {
    if let Some(url) = override_url {
        return Ok(url.trim_end_matches('/').to_string());
    }
    let home = dirs::home_dir().ok_or_else(|| anyhow::anyhow!("cannot locate home directory"))?;
    let settings = GlobalSettings::load_or_init(&home.join(constants::GLOBAL_SETTINGS_FILE));
    Ok(settings.server_url.trim_end_matches('/').to_string())
}
