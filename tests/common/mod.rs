#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A scratch directory removed on drop.
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::Builder::new()
            .prefix(&format!("file_server_{}_", name))
            .tempdir()
            .unwrap();
        Self { dir }
    }

    pub fn write(&self, rel: &str, contents: &[u8]) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, contents).unwrap();
        path
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// True for strings shaped like `07/03/24 13:45:02`.
pub fn is_timestamp(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 17 {
        return false;
    }
    bytes.iter().enumerate().all(|(i, b)| match i {
        2 | 5 => *b == b'/',
        8 => *b == b' ',
        11 | 14 => *b == b':',
        _ => b.is_ascii_digit(),
    })
}
