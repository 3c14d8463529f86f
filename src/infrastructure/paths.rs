//! Platform path helpers.
//!
//! The data directory follows the XDG base directory convention:
//! `$XDG_DATA_HOME/dexview`, falling back to `~/.local/share/dexview`.

use std::path::PathBuf;

const APP_DIR: &str = "dexview";

/// Returns the directory for the log file and other local data.
///
/// Falls back to a relative `.dexview` directory when neither `XDG_DATA_HOME`
/// nor `HOME` is set.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    data_dir_from(
        std::env::var_os("XDG_DATA_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

fn data_dir_from(xdg_data_home: Option<PathBuf>, home: Option<PathBuf>) -> PathBuf {
    match (xdg_data_home, home) {
        (Some(xdg), _) if xdg.is_absolute() => xdg.join(APP_DIR),
        (_, Some(home)) => home.join(".local").join("share").join(APP_DIR),
        _ => PathBuf::from(format!(".{APP_DIR}")),
    }
}

/// Expands a leading `~` to the home directory.
///
/// Paths without a leading `~`, or with `HOME` unset, are returned unchanged.
///
/// ```
/// use dexview::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    expand_tilde_with(path, std::env::var("HOME").ok().as_deref())
}

fn expand_tilde_with(path: &str, home: Option<&str>) -> String {
    match (path.strip_prefix('~'), home) {
        (Some(""), Some(home)) => home.to_string(),
        (Some(rest), Some(home)) if rest.starts_with('/') => format!("{home}{rest}"),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xdg_data_home_wins() {
        assert_eq!(
            data_dir_from(Some("/xdg".into()), Some("/home/ash".into())),
            PathBuf::from("/xdg/dexview")
        );
    }

    #[test]
    fn relative_xdg_is_ignored() {
        assert_eq!(
            data_dir_from(Some("relative".into()), Some("/home/ash".into())),
            PathBuf::from("/home/ash/.local/share/dexview")
        );
        assert_eq!(data_dir_from(None, None), PathBuf::from(".dexview"));
    }

    #[test]
    fn tilde_expansion() {
        assert_eq!(expand_tilde_with("~/themes/x.toml", Some("/home/ash")), "/home/ash/themes/x.toml");
        assert_eq!(expand_tilde_with("~", Some("/home/ash")), "/home/ash");
        assert_eq!(expand_tilde_with("~misty/x", Some("/home/ash")), "~misty/x");
        assert_eq!(expand_tilde_with("~/x", None), "~/x");
    }
}
