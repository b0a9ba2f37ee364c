//! Content documents and their declared names.
//!
//! Documents are only ever read: the walk collects files by extension,
//! reads them in parallel and keeps the extracted author/categories.

pub mod frontmatter;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use jwalk::WalkDir;
use rayon::prelude::*;

pub use frontmatter::{FrontMatter, extract};

const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// A content file reduced to the names it references.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub path: PathBuf,
    pub author: Option<String>,
    pub categories: Vec<String>,
}

impl Document {
    /// Build a document from its path and raw text.
    pub fn parse(path: impl Into<PathBuf>, text: &str) -> Self {
        let FrontMatter { author, categories } = extract(text);
        Self {
            path: path.into(),
            author,
            categories,
        }
    }

    /// Read and parse a document from disk.
    pub fn read(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Ok(Self::parse(path, &text))
    }
}

/// Check whether a path has one of the given extensions (case-insensitive).
pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}

/// Collect all content files under `dir` recursively, sorted by path.
pub fn collect_files(dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        anyhow::bail!("content directory not found: {}", dir.display());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort(true) {
        let entry =
            entry.with_context(|| format!("failed to walk content directory {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_str().unwrap_or_default();
        if IGNORED_FILES.contains(&name) {
            continue;
        }
        let path = entry.path();
        if has_extension(&path, extensions) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Read and extract every content document under `dir`.
///
/// Reading is parallel; the result is ordered by path. Any unreadable
/// file aborts the whole collection.
pub fn collect_documents(dir: &Path, extensions: &[String]) -> Result<Vec<Document>> {
    let files = collect_files(dir, extensions)?;
    files.par_iter().map(|path| Document::read(path)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn exts() -> Vec<String> {
        vec!["md".to_string(), "mdx".to_string()]
    }

    #[test]
    fn test_document_parse() {
        let doc = Document::parse("a.md", "---\nauthor: করিম\n---\n");
        assert_eq!(doc.author.as_deref(), Some("করিম"));
        assert!(doc.categories.is_empty());
        assert_eq!(doc.path, PathBuf::from("a.md"));
    }

    #[test]
    fn test_has_extension() {
        let exts = exts();
        assert!(has_extension(Path::new("post.md"), &exts));
        assert!(has_extension(Path::new("post.MDX"), &exts));
        assert!(!has_extension(Path::new("post.typ"), &exts));
        assert!(!has_extension(Path::new("README"), &exts));
    }

    #[test]
    fn test_collect_documents_recursive_and_sorted() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("2024")).unwrap();
        fs::write(
            dir.path().join("b.md"),
            "---\nauthor: \"খ\"\ncategories:\n  - \"খবর\"\n---\n",
        )
        .unwrap();
        fs::write(dir.path().join("2024/a.mdx"), "---\nauthor: \"ক\"\n---\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "---\nauthor: ignored\n---\n").unwrap();
        fs::write(dir.path().join(".DS_Store"), "").unwrap();

        let docs = collect_documents(dir.path(), &exts()).unwrap();
        assert_eq!(docs.len(), 2);
        assert!(docs[0].path.ends_with("2024/a.mdx"));
        assert_eq!(docs[0].author.as_deref(), Some("ক"));
        assert_eq!(docs[1].categories, vec!["খবর"]);
    }

    #[test]
    fn test_missing_content_dir_is_fatal() {
        let dir = TempDir::new().unwrap();
        let result = collect_documents(&dir.path().join("missing"), &exts());
        assert!(result.is_err());
    }
}
