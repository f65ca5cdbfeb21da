use std::path::PathBuf;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "EXPLORE_NEPAL_CONFIG_DIR";
/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "EXPLORE_NEPAL_DATA_DIR";

const APP_DIR_NAME: &str = "explore-nepal";

/// Get the home directory, with fallback to "/"
pub fn get_home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}

fn env_dir(var: &str) -> Option<PathBuf> {
    std::env::var_os(var)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Get the config directory path (~/.config/explore-nepal, regardless of OS)
pub fn get_config_dir() -> PathBuf {
    env_dir(CONFIG_DIR_ENV).unwrap_or_else(|| get_home_dir().join(".config").join(APP_DIR_NAME))
}

/// Get the config file path (config.toml inside the config directory)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Get the default data directory, where the message store lives
pub fn get_data_dir() -> PathBuf {
    env_dir(DATA_DIR_ENV).unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| get_home_dir().join(".local").join("share"))
            .join(APP_DIR_NAME)
    })
}

/// Get the directory log files are written to
pub fn get_log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR_NAME)
}

/// Get the log file path
pub fn get_log_path() -> PathBuf {
    get_log_dir().join(format!("{}.log", APP_DIR_NAME))
}
