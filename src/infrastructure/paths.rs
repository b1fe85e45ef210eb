//! Path handling for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is mounted under `/host`, which is
//! usually the directory Zellij was started from (typically `$HOME`).

use std::path::PathBuf;

/// Sandbox mount point of the host filesystem.
pub const HOST_ROOT: &str = "/host";

/// Name of the OTLP trace file inside [`data_dir`].
pub const TRACE_FILE_NAME: &str = "signbridge-otlp.json";

/// Directory holding the plugin's own files.
///
/// # Examples
///
/// ```
/// use signbridge::infrastructure::data_dir;
///
/// assert_eq!(data_dir().to_str(), Some("/host/.local/share/zellij/signbridge"));
/// ```
#[must_use]
pub fn data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT)
        .join(".local/share/zellij")
        .join("signbridge")
}

/// Location of the rotating trace file.
#[must_use]
pub fn trace_file() -> PathBuf {
    data_dir().join(TRACE_FILE_NAME)
}

/// Maps a `~`-prefixed path onto the sandbox mount.
///
/// Paths without a leading `~` component are returned unchanged, including
/// `~user` forms, which cannot be resolved inside the sandbox.
///
/// # Examples
///
/// ```
/// use signbridge::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), PathBuf::from("/host/themes/dark.toml"));
/// assert_eq!(expand_tilde("/etc/theme.toml"), PathBuf::from("/etc/theme.toml"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    match path.strip_prefix('~') {
        Some("") => PathBuf::from(HOST_ROOT),
        Some(rest) if rest.starts_with('/') => PathBuf::from(HOST_ROOT).join(&rest[1..]),
        _ => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_file_lives_in_the_data_dir() {
        assert_eq!(trace_file().parent(), Some(data_dir().as_path()));
        assert!(trace_file().ends_with(TRACE_FILE_NAME));
    }

    #[test]
    fn tilde_forms() {
        assert_eq!(expand_tilde("~"), PathBuf::from("/host"));
        assert_eq!(expand_tilde("~/"), PathBuf::from("/host"));
        assert_eq!(expand_tilde("~alice/x"), PathBuf::from("~alice/x"));
        assert_eq!(expand_tilde("relative/x"), PathBuf::from("relative/x"));
    }
}
