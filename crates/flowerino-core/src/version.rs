use semver::Version;
use tracing::debug;

/// Decide whether to offer a plugin upgrade.
///
/// True iff the remote version parses and is strictly greater than the
/// local one. Version checking is advisory: an unparsable version on
/// either side means no prompt, never an error.
pub fn should_prompt_upgrade(local: &str, remote: &str) -> bool {
    let local = match Version::parse(local.trim()) {
        Ok(version) => version,
        Err(err) => {
            debug!(version = local, error = %err, "cannot parse local version");
            return false;
        }
    };
    let remote = match Version::parse(remote.trim()) {
        Ok(version) => version,
        Err(err) => {
            debug!(version = remote, error = %err, "cannot parse remote version");
            return false;
        }
    };
    remote > local
}
