use std::path::{Path, PathBuf};

/// Default config file name at the project root.
pub const CONFIG_FILE: &str = "devstack.toml";

/// `devstack.toml`
pub fn config(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// Expand a leading `~` against `home`. Other paths are returned unchanged.
pub fn expand_home(path: &str, home: Option<&Path>) -> PathBuf {
    match (path, home) {
        ("~", Some(home)) => home.to_path_buf(),
        (p, Some(home)) if p.starts_with("~/") => home.join(&p[2..]),
        (p, _) => PathBuf::from(p),
    }
}

/// Resolve a config path against the project root unless it is absolute.
pub fn resolve(root: &Path, path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    if path.is_absolute() { path.to_path_buf() } else { root.join(path) }
}
