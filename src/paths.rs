use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// XDG-compliant directory layout for liftclock.
///
/// On Linux this follows the XDG Base Directory Specification:
///   Config:  $XDG_CONFIG_HOME/liftclock  (~/.config/liftclock)
///   Data:    $XDG_DATA_HOME/liftclock    (~/.local/share/liftclock)
///
/// On macOS both live under ~/Library/Application Support/liftclock.
/// The resolved base paths are cached so lookup only happens once.

static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();
static CONFIG_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Root data directory: $XDG_DATA_HOME/liftclock
pub fn data_dir() -> &'static PathBuf {
    DATA_DIR.get_or_init(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("liftclock")
    })
}

/// Root config directory: $XDG_CONFIG_HOME/liftclock
pub fn config_dir() -> &'static PathBuf {
    CONFIG_DIR.get_or_init(|| {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("liftclock")
    })
}

/// Config file path: <config_dir>/config.toml
pub fn config_file() -> PathBuf {
    config_dir().join("config.toml")
}

/// Database path: <data_dir>/liftclock.db
pub fn db_path() -> PathBuf {
    data_dir().join("liftclock.db")
}

/// Log file path: <data_dir>/liftclock.log
pub fn log_file() -> PathBuf {
    data_dir().join("liftclock.log")
}

/// Exports directory: <data_dir>/exports
pub fn exports_dir() -> PathBuf {
    data_dir().join("exports")
}

/// Default markdown export path for a given date.
pub fn export_path(date: &chrono::NaiveDate) -> PathBuf {
    export_path_in(&exports_dir(), date)
}

fn export_path_in(dir: &Path, date: &chrono::NaiveDate) -> PathBuf {
    dir.join(format!("workouts_{date}.md"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn data_dir_ends_with_app_name() {
        assert!(data_dir().ends_with("liftclock"));
    }

    #[test]
    fn config_dir_ends_with_app_name() {
        assert!(config_dir().ends_with("liftclock"));
    }

    #[test]
    fn config_file_structure() {
        assert!(config_file().ends_with("liftclock/config.toml"));
    }

    #[test]
    fn db_and_log_live_in_data_dir() {
        assert!(db_path().starts_with(data_dir()));
        assert!(log_file().starts_with(data_dir()));
        assert!(db_path().ends_with("liftclock.db"));
    }

    #[test]
    fn export_path_is_dated() {
        let tmp = TempDir::new().unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let path = export_path_in(tmp.path(), &date);
        assert!(path.ends_with("workouts_2026-10-19.md"));
        assert!(export_path(&date).starts_with(exports_dir()));
    }
}
