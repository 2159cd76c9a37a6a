//! Effective request path.

use crate::model::FileDescriptor;

/// Path used when the caller gives none.
pub const ROOT_PATH: &str = "/";

/// Resolves the `path` query value: missing or empty becomes `/`, and a file
/// name is appended verbatim.
///
/// No separator is inserted before the file name; a directory path is
/// expected to carry its own trailing slash (`/docs/` + `a.txt`).
pub fn effective_path(path: Option<&str>, file: Option<&FileDescriptor>) -> String {
    let mut out = match path {
        Some(p) if !p.is_empty() => p.to_string(),
        _ => ROOT_PATH.to_string(),
    };
    if let Some(file) = file {
        out.push_str(&file.name);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_root() {
        assert_eq!(effective_path(None, None), "/");
        assert_eq!(effective_path(Some(""), None), "/");
    }

    #[test]
    fn keeps_given_path() {
        assert_eq!(effective_path(Some("/a/b"), None), "/a/b");
    }

    #[test]
    fn appends_file_name_without_separator() {
        let f = FileDescriptor::new("report.pdf");
        assert_eq!(effective_path(Some("/docs/"), Some(&f)), "/docs/report.pdf");
        assert_eq!(effective_path(Some("/docs"), Some(&f)), "/docsreport.pdf");
        assert_eq!(effective_path(None, Some(&f)), "/report.pdf");
    }
}
