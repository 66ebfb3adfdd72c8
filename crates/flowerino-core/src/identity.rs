//! Canonical resource-node identifiers and deep-link URLs.
//!
//! Downstream URL construction depends on these strings character for
//! character, so everything here is pure and exact-string tested.

use crate::constants;

/// Resolve a user-entered `owner/repository` name into the canonical
/// resource-node identifier used by the remote service.
///
/// Returns `None` for empty input or input without a `/` separator.
pub fn resolve(full_repository: &str) -> Option<String> {
    if full_repository.is_empty() {
        return None;
    }
    let (_owner, repository) = full_repository.split_once('/')?;
    Some(format!(
        "fpp:{full_repository}|{repository}.flower-platform"
    ))
}

/// Web page with plugin download URL and upgrade instructions.
pub fn upgrade_info_url(server_url: &str) -> String {
    format!(
        "{server_url}/servlet/public-resources/org.flowerplatform.arduino/generate/generate.html#/method-plugin"
    )
}

/// Diagram-editor deep link for a linked repository. The `owner|repository`
/// pair is joined with a URL-escaped pipe.
pub fn diagrams_url(server_url: &str, full_repository: &str) -> Option<String> {
    let (owner, repository) = full_repository.split_once('/')?;
    Some(format!(
        "{server_url}/#/repositories/page/{owner}{}{repository}/diagram-editor",
        urlencoding::encode("|")
    ))
}

/// Repository browser deep link: the hub landing page itself.
pub fn repositories_url(server_url: &str) -> String {
    server_url.to_string()
}

/// Public web site.
pub fn website_url() -> &'static str {
    constants::WEBSITE_URL
}
