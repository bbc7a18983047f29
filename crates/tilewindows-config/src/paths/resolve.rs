use std::env;
use std::path::{Path, PathBuf};

use tilewindows_common::ConfigError;

pub const CONFIG_FILE_NAME: &str = "tilewindows.config.json";
pub const CONFIG_ENV_VAR: &str = "TILEWINDOWS_CONFIG";

/// Where the resolved config path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config <path>`
    Explicit,
    /// `$TILEWINDOWS_CONFIG`
    Environment,
    /// `--here`, whether or not the file exists yet.
    Here,
    /// An existing file in the working directory.
    Project,
    /// An existing file next to the executable.
    Coupled,
    /// `$XDG_CONFIG_HOME`
    Xdg,
    /// The OS config directory (`~/Library/Application Support` on macOS).
    Platform,
    /// `~/.config`
    Home,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    pub path: PathBuf,
    pub source: ConfigSource,
}

/// Everything config path resolution depends on, gathered once.
#[derive(Debug, Clone, Default)]
pub struct PathInputs {
    pub explicit: Option<PathBuf>,
    pub env_override: Option<PathBuf>,
    pub force_here: bool,
    pub cwd: PathBuf,
    pub exe_dir: Option<PathBuf>,
    pub xdg_config_home: Option<PathBuf>,
    pub platform_config_dir: Option<PathBuf>,
    pub home_dir: Option<PathBuf>,
}

impl PathInputs {
    /// Collect inputs from the running process.
    pub fn from_env(explicit: Option<PathBuf>, force_here: bool) -> Result<Self, ConfigError> {
        let cwd = env::current_dir().map_err(|source| ConfigError::Read {
            path: PathBuf::from("."),
            source,
        })?;

        Ok(Self {
            explicit,
            env_override: non_empty_var(CONFIG_ENV_VAR),
            force_here,
            cwd,
            exe_dir: env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(Path::to_path_buf)),
            xdg_config_home: non_empty_var("XDG_CONFIG_HOME"),
            platform_config_dir: dirs::config_dir(),
            home_dir: dirs::home_dir(),
        })
    }
}

fn non_empty_var(key: &str) -> Option<PathBuf> {
    env::var_os(key)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Resolve the config file location, highest precedence first:
///
/// 1. explicit path
/// 2. `$TILEWINDOWS_CONFIG`
/// 3. `--here` (working directory, created on first write)
/// 4. `tilewindows.config.json` in the working directory, if it exists
/// 5. `tilewindows.config.json` next to the executable, if it exists
/// 6. `$XDG_CONFIG_HOME/tilewindows.config.json`
/// 7. the OS config directory
/// 8. `~/.config/tilewindows.config.json`
pub fn resolve_config_path(inputs: &PathInputs) -> Result<ResolvedPath, ConfigError> {
    let found = |path: PathBuf, source| Ok(ResolvedPath { path, source });

    if let Some(path) = &inputs.explicit {
        return found(path.clone(), ConfigSource::Explicit);
    }
    if let Some(path) = &inputs.env_override {
        return found(path.clone(), ConfigSource::Environment);
    }

    let project = project_config_path(&inputs.cwd);
    if inputs.force_here {
        return found(project, ConfigSource::Here);
    }
    if project.is_file() {
        return found(project, ConfigSource::Project);
    }

    if let Some(dir) = &inputs.exe_dir {
        let coupled = dir.join(CONFIG_FILE_NAME);
        if coupled.is_file() {
            return found(coupled, ConfigSource::Coupled);
        }
    }

    if let Some(dir) = &inputs.xdg_config_home {
        return found(dir.join(CONFIG_FILE_NAME), ConfigSource::Xdg);
    }
    if let Some(dir) = &inputs.platform_config_dir {
        return found(dir.join(CONFIG_FILE_NAME), ConfigSource::Platform);
    }

    let home = inputs.home_dir.as_ref().ok_or(ConfigError::NoHomeDirectory)?;
    found(
        home.join(".config").join(CONFIG_FILE_NAME),
        ConfigSource::Home,
    )
}

/// The project-local config file inside `dir`.
pub fn project_config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE_NAME)
}
