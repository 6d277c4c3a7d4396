use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A scratch tree and an archive tree side by side in one temp dir.
pub struct Trees {
    pub temp: TempDir,
    pub scratch: PathBuf,
    pub archive: PathBuf,
}

impl Trees {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let scratch = temp.path().join("scratch");
        let archive = temp.path().join("archive");
        fs::create_dir_all(&scratch).unwrap();
        fs::create_dir_all(&archive).unwrap();
        Trees {
            temp,
            scratch,
            archive,
        }
    }

    pub fn scratch_file(&self, rel: &str, body: &[u8]) -> PathBuf {
        write(&self.scratch, rel, body)
    }

    pub fn archive_file(&self, rel: &str, body: &[u8]) -> PathBuf {
        write(&self.archive, rel, body)
    }

    pub fn out_dir(&self) -> PathBuf {
        self.temp.path().join("out")
    }
}

fn write(root: &Path, rel: &str, body: &[u8]) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, body).unwrap();
    dunce::canonicalize(&path).unwrap()
}

pub fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}
