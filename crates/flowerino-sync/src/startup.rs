//! Startup version check, invoked once by the host integration layer
//! after the host is ready.

use crate::host::Workbench;
use flowerino_client::RemoteService;
use flowerino_core::{identity, version};
use tracing::{debug, info, warn};

/// Compare the installed plugin version against the hub's and offer the
/// upgrade page when the hub is ahead.
///
/// Advisory only: an unreachable hub is logged and ignored, and a failed
/// browser launch never escalates.
pub fn on_host_ready(
    service: &dyn RemoteService,
    workbench: &dyn Workbench,
    server_url: &str,
    local_version: &str,
) {
    info!(version = local_version, server_url, "plugin loading");

    let Some(info) = service.desktop_agent_info() else {
        debug!("hub unreachable, skipping version check");
        return;
    };
    if !version::should_prompt_upgrade(local_version, &info.version) {
        return;
    }

    let message = format!(
        "A newer version of the Flowerino plugin is available. It's recommended to update it.\n\
         Installed version = {local_version}. Latest version = {remote}.\n\n\
         Open the web page with download URL and instructions (external web browser)?",
        remote = info.version
    );
    if workbench.confirm(&message) {
        let url = identity::upgrade_info_url(server_url);
        if let Err(err) = workbench.open_url(&url) {
            warn!(url, error = %err, "cannot open upgrade page");
        }
    }
}
