//! Common test utilities for integration tests
//!
//! Each package file gets its own directory under the system temp
//! directory, removed together with the file when dropped.

use std::fs;
use std::path::PathBuf;

/// A package file that is removed, with its directory, when dropped
pub struct TempPackageFile {
    dir: PathBuf,
    pub path: PathBuf,
}

impl TempPackageFile {
    /// Write `contents` to a temp file with the given file name
    pub fn new(file_name: &str, contents: &str) -> Self {
        let dir = std::env::temp_dir().join(format!(
            "workout-tracker-{}-{}",
            std::process::id(),
            file_name
        ));
        fs::create_dir_all(&dir).expect("Failed to create temp dir");
        let path = dir.join(file_name);
        fs::write(&path, contents).expect("Failed to write package file");
        Self { dir, path }
    }
}

impl Drop for TempPackageFile {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.dir);
    }
}

/// The three reference summary lines, in reference package order
pub const REFERENCE_OUTPUT: [&str; 3] = [
    "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
     Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000.",
    "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
     Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750.",
    "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; \
     Ср. скорость: 5.850 км/ч; Потрачено ккал: 157.500.",
];
