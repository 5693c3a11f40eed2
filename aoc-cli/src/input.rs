//! Local store of puzzle inputs

use crate::error::InputError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Read-only directory of puzzle inputs
///
/// Directory structure: `{input_dir}/{year}_day{day:02}.txt`
#[derive(Debug, Clone)]
pub struct InputStore {
    dir: PathBuf,
}

impl InputStore {
    /// Open the store; a directory that does not exist yet is treated as empty
    pub fn new(dir: PathBuf) -> Result<Self, InputError> {
        match fs::metadata(&dir) {
            Ok(meta) if !meta.is_dir() => Err(InputError::NotADirectory(dir)),
            Err(e) if e.kind() != ErrorKind::NotFound => {
                Err(InputError::Io { path: dir, source: e })
            }
            _ => Ok(Self { dir }),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Get the input path for a specific year/day
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        self.dir.join(format!("{}_day{:02}.txt", year, day))
    }

    /// Check if an input file exists
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).is_file()
    }

    /// Read the input for a year/day
    pub fn read(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.input_path(year, day);
        fs::read_to_string(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => InputError::Missing(path),
            _ => InputError::Io { path, source },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_input_path_format() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf()).unwrap();

        let path = store.input_path(2021, 1);
        assert_eq!(path, temp.path().join("2021_day01.txt"));

        let path = store.input_path(2021, 25);
        assert!(path.to_string_lossy().ends_with("2021_day25.txt"));
    }

    #[test]
    fn test_read_existing_and_missing() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf()).unwrap();

        assert!(!store.contains(2021, 11));
        assert!(matches!(store.read(2021, 11), Err(InputError::Missing(_))));

        let input = "5483143223\n2745854711\n";
        fs::write(store.input_path(2021, 11), input).unwrap();

        assert!(store.contains(2021, 11));
        assert_eq!(store.read(2021, 11).unwrap(), input);
    }

    #[test]
    fn test_missing_directory_is_empty_store() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().join("not-created")).unwrap();
        assert!(!store.contains(2021, 1));
    }

    #[test]
    fn test_file_as_directory_is_rejected() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("inputs");
        fs::write(&file, "").unwrap();
        assert!(matches!(
            InputStore::new(file),
            Err(InputError::NotADirectory(_))
        ));
    }
}
