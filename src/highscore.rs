use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Somewhere the best score survives between runs.
pub trait HighScoreStore {
    fn load(&self) -> Result<u32>;
    fn save(&mut self, score: u32) -> Result<()>;
}

/// Keeps the high score as a decimal integer in a plain text file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        FileStore { path: path.as_ref().to_path_buf() }
    }
}

impl HighScoreStore for FileStore {
    fn load(&self) -> Result<u32> {
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        contents
            .trim()
            .parse()
            .with_context(|| format!("Malformed high score in {}", self.path.display()))
    }

    fn save(&mut self, score: u32) -> Result<()> {
        fs::write(&self.path, score.to_string())
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }
}

#[cfg(test)]
pub struct MemoryStore {
    pub stored: Option<u32>,
    pub saves: Vec<u32>,
    pub fail_saves: bool,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new(stored: Option<u32>) -> Self {
        MemoryStore { stored, saves: vec![], fail_saves: false }
    }
}

#[cfg(test)]
impl HighScoreStore for MemoryStore {
    fn load(&self) -> Result<u32> {
        self.stored.ok_or_else(|| anyhow::anyhow!("Nothing stored"))
    }

    fn save(&mut self, score: u32) -> Result<()> {
        self.saves.push(score);
        if self.fail_saves {
            anyhow::bail!("Store is read-only");
        }
        self.stored = Some(score);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("high_score.txt");

        FileStore::new(&path).save(150).unwrap();
        assert_eq!(FileStore::new(&path).load().unwrap(), 150);
        assert_eq!(fs::read_to_string(&path).unwrap(), "150");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("nope.txt"));
        assert!(store.load().is_err());
    }

    #[test]
    fn malformed_contents_are_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("high_score.txt");
        fs::write(&path, "lots").unwrap();
        assert!(FileStore::new(&path).load().is_err());

        fs::write(&path, "-5").unwrap();
        assert!(FileStore::new(&path).load().is_err());
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("high_score.txt");
        fs::write(&path, " 90\n").unwrap();
        assert_eq!(FileStore::new(&path).load().unwrap(), 90);
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("missing_dir").join("high_score.txt"));
        assert!(store.save(10).is_err());
    }
}
