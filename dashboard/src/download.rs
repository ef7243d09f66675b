use std::path::PathBuf;

/// Persists binary invocation responses, the headless counterpart of a browser download.
pub trait DownloadSink {
    /// stores `data` under `filename`, returning where it ended up
    fn save(&self, filename: &str, data: &[u8]) -> std::io::Result<PathBuf>;
}

/// Writes downloads into a directory, creating it when missing.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        DirectorySink { dir: dir.into() }
    }
}

impl DownloadSink for DirectorySink {
    fn save(&self, filename: &str, data: &[u8]) -> std::io::Result<PathBuf> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(filename);
        std::fs::write(&path, data)?;
        Ok(path)
    }
}
