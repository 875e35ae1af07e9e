//! Policy path discovery.

use std::path::{Path, PathBuf};

/// A discovered policy file and where it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyPath {
    /// `None` means the built-in defaults apply.
    pub path: Option<PathBuf>,
    pub source: ConfigSource,
}

/// Where a policy file was found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit,
    /// `SNAPFACTS_POLICY` or `SNAPFACTS_CONFIG_DIR`.
    Environment,
    XdgConfig,
    /// `/etc/snapfacts/`.
    SystemConfig,
    #[default]
    BuiltinDefault,
}

impl ConfigSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigSource::Explicit => "explicit path",
            ConfigSource::Environment => "environment variable",
            ConfigSource::XdgConfig => "XDG config",
            ConfigSource::SystemConfig => "system config",
            ConfigSource::BuiltinDefault => "builtin default",
        }
    }
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const ENV_POLICY_PATH: &str = "SNAPFACTS_POLICY";
pub const ENV_CONFIG_DIR: &str = "SNAPFACTS_CONFIG_DIR";

/// Policy file names looked up inside a config directory, JSON first.
pub const POLICY_FILENAMES: [&str; 2] = ["policy.json", "policy.toml"];

const APP_NAME: &str = "snapfacts";

/// Every place a policy may live, in lookup order.
#[derive(Debug, Clone, Default)]
pub struct SearchLocations {
    pub explicit: Option<PathBuf>,
    pub env_path: Option<PathBuf>,
    pub env_dir: Option<PathBuf>,
    pub xdg_dir: Option<PathBuf>,
    pub system_dir: Option<PathBuf>,
}

impl SearchLocations {
    /// Locations for this process: its environment and the user's dirs.
    pub fn from_env(explicit: Option<&Path>) -> Self {
        SearchLocations {
            explicit: explicit.map(Path::to_path_buf),
            env_path: std::env::var_os(ENV_POLICY_PATH).map(PathBuf::from),
            env_dir: std::env::var_os(ENV_CONFIG_DIR).map(PathBuf::from),
            xdg_dir: xdg_config_dir(),
            system_dir: Some(system_config_dir()),
        }
    }

    /// First existing policy file. A named file that does not exist is
    /// passed over, not reported.
    pub fn resolve(&self) -> PolicyPath {
        let files = [
            (&self.explicit, ConfigSource::Explicit),
            (&self.env_path, ConfigSource::Environment),
        ];
        let dirs = [
            (&self.env_dir, ConfigSource::Environment),
            (&self.xdg_dir, ConfigSource::XdgConfig),
            (&self.system_dir, ConfigSource::SystemConfig),
        ];

        files
            .into_iter()
            .filter_map(|(path, source)| {
                path.as_ref()
                    .filter(|p| p.is_file())
                    .map(|p| (p.clone(), source))
            })
            .chain(dirs.into_iter().filter_map(|(dir, source)| {
                dir.as_deref().and_then(find_in_dir).map(|p| (p, source))
            }))
            .next()
            .map(|(path, source)| PolicyPath {
                path: Some(path),
                source,
            })
            .unwrap_or_default()
    }
}

/// Resolve the policy path: explicit path, `SNAPFACTS_POLICY`,
/// `SNAPFACTS_CONFIG_DIR`, `~/.config/snapfacts/`, `/etc/snapfacts/`, then
/// built-in defaults.
pub fn resolve_policy_path(explicit: Option<&Path>) -> PolicyPath {
    SearchLocations::from_env(explicit).resolve()
}

fn find_in_dir(dir: &Path) -> Option<PathBuf> {
    POLICY_FILENAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|p| p.is_file())
}

pub fn xdg_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_NAME))
}

pub fn system_config_dir() -> PathBuf {
    PathBuf::from("/etc").join(APP_NAME)
}
