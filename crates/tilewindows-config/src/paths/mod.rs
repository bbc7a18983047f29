mod resolve;

pub use resolve::{
    project_config_path, resolve_config_path, ConfigSource, PathInputs, ResolvedPath,
    CONFIG_ENV_VAR, CONFIG_FILE_NAME,
};
