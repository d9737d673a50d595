use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::traits::Observer;

// Named console Observer
pub struct StockObserver {
    name: String,
}
impl StockObserver {
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string() }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn format_update(&self, message: &str) -> String {
        format!(
            "Stock Observer: {} has been updated, received subject string: {}",
            self.name, message
        )
    }
}
impl Observer for StockObserver {
    fn update(&self, message: &str) {
        println!("{}", self.format_update(message));
    }
}

// Append subject updates to a file Observer
pub struct MessagesToFileObserver {
    name: String,
    file_path: PathBuf,
}
impl MessagesToFileObserver {
    pub fn new(name: &str, file_path: impl Into<PathBuf>) -> Self {
        Self { name: name.to_string(), file_path: file_path.into() }
    }
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
    fn append(&self, message: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.file_path)?;
        writeln!(file, "{} {} {}", chrono::Local::now(), self.name, message)
    }
}
impl Observer for MessagesToFileObserver {
    fn update(&self, message: &str) {
        // Failures stay here, the subject has no channel for them.
        if let Err(e) = self.append(message) {
            tracing::warn!(
                observer = %self.name,
                path = %self.file_path.display(),
                error = %e,
                "Failed to write update to file"
            );
        }
    }
}
