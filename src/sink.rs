//! Where finished PDFs end up.

use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};

/// File name used when the caller does not pick one.
pub const DEFAULT_FILE_NAME: &str = "document.pdf";

#[async_trait]
pub trait OutputSink: Send + Sync {
    /// Stores `bytes` under `file_name` and returns where they were written.
    async fn save(&self, file_name: &str, bytes: &[u8]) -> io::Result<PathBuf>;
}

/// Writes files into one directory, creating it on first use.
///
/// File names are taken as plain names: anything with a path separator is
/// rejected, and `.pdf` is appended when the name has no extension.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    directory: PathBuf,
}

impl DirectorySink {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn target(&self, file_name: &str) -> io::Result<PathBuf> {
        let name = file_name.trim();
        if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("'{file_name}' is not a plain file name"),
            ));
        }

        let mut path = self.directory.join(name);
        if path.extension().is_none() {
            path.set_extension("pdf");
        }
        Ok(path)
    }
}

#[async_trait]
impl OutputSink for DirectorySink {
    async fn save(&self, file_name: &str, bytes: &[u8]) -> io::Result<PathBuf> {
        let path = self.target(file_name)?;
        tokio::fs::create_dir_all(&self.directory).await?;
        tokio::fs::write(&path, bytes).await?;
        log::info!("Wrote {} bytes to {}", bytes.len(), path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn writes_into_a_new_directory() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DirectorySink::new(dir.path().join("out/nested"));

        let path = sink.save(DEFAULT_FILE_NAME, b"%PDF-1.7").await.unwrap();
        assert_eq!(path, dir.path().join("out/nested/document.pdf"));
        assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.7");
    }

    #[tokio::test]
    async fn appends_pdf_extension_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DirectorySink::new(dir.path());

        sink.save("permit-12", b"first").await.unwrap();
        let path = sink.save("permit-12", b"second").await.unwrap();
        assert_eq!(path.file_name().unwrap(), "permit-12.pdf");
        assert_eq!(std::fs::read(&path).unwrap(), b"second");

        let kept = sink.save("report.v2.pdf", b"x").await.unwrap();
        assert_eq!(kept.file_name().unwrap(), "report.v2.pdf");
    }

    #[tokio::test]
    async fn rejects_names_that_are_not_plain() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DirectorySink::new(dir.path());
        for name in ["", "  ", "..", "../escape.pdf", "a/b.pdf", "a\\b.pdf"] {
            let err = sink.save(name, b"x").await.unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::InvalidInput, "name {name:?}");
        }
    }
}
