//! Default configuration values

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "changecast.toml";

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "changecast.yaml";

/// Remote used to identify the hosted repository
pub const DEFAULT_REMOTE: &str = "origin";

/// Prefix of tags from the old versioning scheme
pub const DEFAULT_LEGACY_TAG_PREFIX: &str = "v";

/// Path of the vendored submodule
pub const DEFAULT_SUBMODULE_PATH: &str = "lib/FFXIVClientStructs";

/// GitHub REST API base URL
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// GitHub web host used for links in the changelog
pub const DEFAULT_GITHUB_WEB_URL: &str = "https://github.com";

/// Path suffix of a GitHub Enterprise Server REST API base URL
pub const ENTERPRISE_API_SUFFIX: &str = "/api/v3";

/// Commits between progress reports during pull request lookup
pub const DEFAULT_PROGRESS_INTERVAL: usize = 10;

/// Text posted together with the changelog attachment
pub const DEFAULT_ANNOUNCEMENT: &str = "Changelog for v{version} is attached.";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        ".changecast.toml",
        ".changecast.yaml",
    ]
}
