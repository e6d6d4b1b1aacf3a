//! Lexical path confinement for the working root
//!
//! Every capability resolves caller-supplied relative paths through
//! [`confine`] before touching the filesystem. The check is purely
//! lexical: `.` and `..` segments are collapsed without following
//! symlinks, then the result is compared against the root by string
//! prefix. Normalizing *before* comparing is what rejects paths that
//! leave the root and climb back in via `..`.

use std::path::{Component, Path, PathBuf};

use super::ToolError;

/// Collapse `.` and `..` segments without touching the filesystem
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // Popping past the root component is a no-op, so an
                // absolute path can never normalize above "/"
                if !matches!(out.components().next_back(), Some(Component::RootDir) | None) {
                    out.pop();
                }
            }
            other => out.push(other),
        }
    }
    out
}

/// Resolve `relative` against `root` and require the result to stay inside
///
/// Accepts iff the normalized join equals the normalized root or its
/// string form starts with `root` plus a path separator. `action` is the
/// verb used in the rejection message ("list", "read", "write to",
/// "execute").
pub fn confine(root: &Path, relative: &str, action: &'static str) -> Result<PathBuf, ToolError> {
    let root = normalize(root);
    let target = normalize(&root.join(relative));

    if target == root {
        return Ok(target);
    }

    let prefix = format!("{}{}", root.display(), std::path::MAIN_SEPARATOR);
    if target.as_os_str().to_string_lossy().starts_with(&prefix) {
        Ok(target)
    } else {
        Err(ToolError::OutOfScope {
            action,
            path: relative.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_dot_segments() {
        assert_eq!(normalize(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
        assert_eq!(normalize(Path::new("/a/b/../..")), PathBuf::from("/"));
    }

    #[test]
    fn test_normalize_cannot_climb_above_root() {
        assert_eq!(normalize(Path::new("/a/../../..")), PathBuf::from("/"));
    }

    #[test]
    fn test_confine_accepts_plain_child() {
        let root = Path::new("/work/project");
        let resolved = confine(root, "src/main.py", "read").unwrap();
        assert_eq!(resolved, PathBuf::from("/work/project/src/main.py"));
    }

    #[test]
    fn test_confine_accepts_root_itself() {
        let root = Path::new("/work/project");
        let resolved = confine(root, ".", "list").unwrap();
        assert_eq!(resolved, PathBuf::from("/work/project"));
    }

    #[test]
    fn test_confine_rejects_parent_escape() {
        let root = Path::new("/work/project");
        let err = confine(root, "../../etc/passwd", "read").unwrap_err();
        assert!(matches!(err, ToolError::OutOfScope { .. }));
        assert!(err.to_string().contains("../../etc/passwd"));
    }

    #[test]
    fn test_confine_rejects_absolute_path_outside() {
        let root = Path::new("/work/project");
        let err = confine(root, "/etc/passwd", "write to").unwrap_err();
        assert!(matches!(err, ToolError::OutOfScope { .. }));
    }

    #[test]
    fn test_confine_accepts_path_that_normalizes_back_inside() {
        let root = Path::new("/work/project");
        let resolved = confine(root, "sub/../sub/file.txt", "read").unwrap();
        assert_eq!(resolved, PathBuf::from("/work/project/sub/file.txt"));
    }

    #[test]
    fn test_confine_rejects_sibling_with_shared_prefix() {
        // "/work/project-evil" shares a string prefix with the root but
        // not a separator-terminated one
        let root = Path::new("/work/project");
        let err = confine(root, "../project-evil/file", "read").unwrap_err();
        assert!(matches!(err, ToolError::OutOfScope { .. }));
    }
}
