use crate::constants;
use crate::error::ConfigError;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub type PropertyMap = BTreeMap<String, String>;

/// Load a flat `key=value` property file.
///
/// Missing or unreadable files degrade to an empty map: linkage and global
/// settings are optional until first use, and a corrupt settings file must
/// never block the host.
pub fn load_properties(path: &Path) -> PropertyMap {
    let mut properties = PropertyMap::new();
    if !path.exists() {
        return properties;
    }

    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "failed to read settings file");
            return properties;
        }
    };

    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            properties.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    properties
}

/// Save a property map, overwriting the file.
///
/// The content is written to a sibling temp file and renamed over the
/// target, so a failed save leaves the previously saved keys intact.
pub fn save_properties(properties: &PropertyMap, path: &Path) -> Result<(), ConfigError> {
    let mut content = String::new();
    for (key, value) in properties {
        content.push_str(key);
        content.push('=');
        content.push_str(value);
        content.push('\n');
    }

    let tmp_path = tmp_sibling_path(path);
    let write_result = std::fs::write(&tmp_path, content.as_bytes())
        .and_then(|()| std::fs::rename(&tmp_path, path));
    match write_result {
        Ok(()) => {
            info!(path = %path.display(), "settings saved");
            Ok(())
        }
        Err(err) => {
            let _ = std::fs::remove_file(&tmp_path);
            warn!(path = %path.display(), error = %err, "failed to save settings file");
            Err(ConfigError::save_failed(path.display().to_string(), err))
        }
    }
}

fn tmp_sibling_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|v| v.to_string_lossy().to_string())
        .unwrap_or_else(|| "settings".to_string());
    path.with_file_name(format!("{name}.tmp"))
}

/// Process-wide settings, seeded with defaults at first run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalSettings {
    pub server_url: String,
}

impl GlobalSettings {
    /// Load the global settings file, seeding it with the default server
    /// URL when absent. A failed seed write degrades to in-memory defaults.
    pub fn load_or_init(path: &Path) -> Self {
        let mut properties = load_properties(path);
        if !properties.contains_key(constants::KEY_SERVER_URL) {
            properties.insert(
                constants::KEY_SERVER_URL.to_string(),
                constants::DEFAULT_SERVER_URL.to_string(),
            );
            if let Err(err) = save_properties(&properties, path) {
                warn!(error = %err, "could not seed global settings, using defaults in memory");
            }
        }
        Self {
            server_url: properties
                .get(constants::KEY_SERVER_URL)
                .cloned()
                .unwrap_or_else(|| constants::DEFAULT_SERVER_URL.to_string()),
        }
    }
}

/// Per-project association with a remote repository.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Linkage {
    pub full_repository: Option<String>,
}

impl Linkage {
    pub fn file_path(project_dir: &Path) -> PathBuf {
        project_dir.join(constants::PROJECT_LINK_FILE)
    }

    pub fn load(project_dir: &Path) -> Self {
        let properties = load_properties(&Self::file_path(project_dir));
        Self {
            full_repository: properties
                .get(constants::KEY_FULL_REPOSITORY)
                .filter(|value| !value.is_empty())
                .cloned(),
        }
    }

    /// Persist the linked repository name, preserving any other keys
    /// already present in the link file.
    pub fn store(project_dir: &Path, full_repository: &str) -> Result<(), ConfigError> {
        let path = Self::file_path(project_dir);
        let mut properties = load_properties(&path);
        properties.insert(
            constants::KEY_FULL_REPOSITORY.to_string(),
            full_repository.to_string(),
        );
        save_properties(&properties, &path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_file_returns_empty_map() {
        let tmp = tempfile::tempdir().unwrap();
        let map = load_properties(&tmp.path().join("absent"));
        assert!(map.is_empty());
    }

    #[test]
    fn load_skips_comments_and_blank_lines() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("props");
        std::fs::write(&path, "# comment\n\nserverUrl=http://x\nbad line\n").unwrap();
        let map = load_properties(&path);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("serverUrl").unwrap(), "http://x");
    }

    #[test]
    fn save_then_load_round_trips_all_keys() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("props");
        let mut map = PropertyMap::new();
        map.insert("a".to_string(), "1".to_string());
        save_properties(&map, &path).unwrap();

        let mut loaded = load_properties(&path);
        loaded.insert("b".to_string(), "2".to_string());
        save_properties(&loaded, &path).unwrap();

        let reloaded = load_properties(&path);
        assert_eq!(reloaded.get("a").unwrap(), "1");
        assert_eq!(reloaded.get("b").unwrap(), "2");
    }

    #[test]
    fn save_leaves_no_temp_file_behind() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("props");
        let mut map = PropertyMap::new();
        map.insert("k".to_string(), "v".to_string());
        save_properties(&map, &path).unwrap();
        let entries: Vec<_> = std::fs::read_dir(tmp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn global_settings_seed_default_server_url() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(constants::GLOBAL_SETTINGS_FILE);
        let settings = GlobalSettings::load_or_init(&path);
        assert_eq!(settings.server_url, constants::DEFAULT_SERVER_URL);

        // The default was persisted for the next run.
        let map = load_properties(&path);
        assert_eq!(
            map.get(constants::KEY_SERVER_URL).unwrap(),
            constants::DEFAULT_SERVER_URL
        );
    }

    #[test]
    fn global_settings_keep_configured_server_url() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(constants::GLOBAL_SETTINGS_FILE);
        std::fs::write(&path, "serverUrl=http://my-hub.example\n").unwrap();
        let settings = GlobalSettings::load_or_init(&path);
        assert_eq!(settings.server_url, "http://my-hub.example");
    }

    #[test]
    fn linkage_store_preserves_unrelated_keys() {
        let tmp = tempfile::tempdir().unwrap();
        let path = Linkage::file_path(tmp.path());
        std::fs::write(&path, "other=kept\n").unwrap();

        Linkage::store(tmp.path(), "alice/robot").unwrap();
        let map = load_properties(&path);
        assert_eq!(map.get("fullRepository").unwrap(), "alice/robot");
        assert_eq!(map.get("other").unwrap(), "kept");

        let linkage = Linkage::load(tmp.path());
        assert_eq!(linkage.full_repository.as_deref(), Some("alice/robot"));
    }

    #[test]
    fn empty_linkage_value_reads_as_unlinked() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(Linkage::file_path(tmp.path()), "fullRepository=\n").unwrap();
        let linkage = Linkage::load(tmp.path());
        assert_eq!(linkage.full_repository, None);
    }
}
