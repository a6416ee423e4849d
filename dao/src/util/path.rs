use std::path::{Component, Path, PathBuf};

/// A single directory name that can't climb out of its parent.
pub fn is_segment(value: &str) -> bool {
    !value.is_empty()
        && value != "."
        && value != ".."
        && !value.contains(&['/', '\\', '\0'][..])
}

/// Relative path made only of normal components, e.g. `a/b.log`.
pub fn relative(value: &str) -> Option<PathBuf> {
    if value.is_empty() || value.contains(&['\\', '\0'][..]) {
        return None;
    }
    let path = Path::new(value);
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => out.push(part),
            Component::CurDir => {}
            _ => return None,
        }
    }
    if out.as_os_str().is_empty() {
        None
    } else {
        Some(out)
    }
}
