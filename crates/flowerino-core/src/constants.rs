/// Default Flower Platform hub used when no server URL has been configured.
pub const DEFAULT_SERVER_URL: &str = "http://hub.flower-platform.com";

/// Path prefix for all remote service operations.
pub const SERVICE_PREFIX: &str = "/ws-dispatcher";

/// Global settings file name, placed in the sketchbook/settings root.
pub const GLOBAL_SETTINGS_FILE: &str = ".flowerino";

/// Per-project linkage file name, placed in the project folder.
pub const PROJECT_LINK_FILE: &str = ".flowerino-link";

/// Global settings key holding the hub URL.
pub const KEY_SERVER_URL: &str = "serverUrl";

/// Project settings key holding the linked `owner/repository` name.
pub const KEY_FULL_REPOSITORY: &str = "fullRepository";

/// Generator kind passed to the remote generation operation.
pub const GENERATOR_KIND: &str = "arduino";

/// Extension of a project's main entry file.
pub const MAIN_ENTRY_EXTENSION: &str = ".ino";

/// Public web site, linked from the host menu.
pub const WEBSITE_URL: &str = "http://flower-platform.com/flowerino";
