use super::DocumentStore;
use crate::error::{Result, ShortnError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

pub const HISTORY_FILENAME: &str = "history.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn document_path(&self) -> PathBuf {
        self.root.join(HISTORY_FILENAME)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(ShortnError::Io)?;
        }
        Ok(())
    }
}

impl DocumentStore for FileStore {
    fn load(&self) -> Result<Option<String>> {
        match fs::read_to_string(self.document_path()) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ShortnError::Io(e)),
        }
    }

    fn save(&mut self, content: &str) -> Result<()> {
        self.ensure_dir(&self.root)?;

        let target = self.document_path();
        let tmp_file = self.root.join(format!(".history-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(ShortnError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, &target) {
            let _ = fs::remove_file(&tmp_file);
            return Err(ShortnError::Io(e));
        }

        debug!(path = %target.display(), bytes = content.len(), "history document written");
        Ok(())
    }
}
