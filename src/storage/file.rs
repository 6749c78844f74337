//! File-backed task storage.
//!
//! The data file is JSON Lines: one task record per line, e.g.
//! `["D","0","submit report","2024-03-05T18:00"]`. Dates are always in
//! canonical form.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::TaskStorage;
use crate::error::CroError;
use crate::tasks::Task;

/// Task storage in a single JSON Lines file.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Storage at `path`, usually `Paths::data_file` or a config override.
    #[must_use]
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling path the next save is staged in before being renamed over
    /// the data file.
    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_staged(&self, staging: &Path, tasks: &[Task]) -> Result<(), CroError> {
        let file = File::create(staging)?;
        let mut writer = BufWriter::new(file);

        for task in tasks {
            serde_json::to_writer(&mut writer, &task.to_record())
                .map_err(|e| CroError::Storage(format!("Failed to serialize task: {e}")))?;
            writer.write_all(b"\n")?;
        }

        let file = writer
            .into_inner()
            .map_err(|e| CroError::Io(e.into_error()))?;
        file.sync_all()?;
        Ok(())
    }
}

impl TaskStorage for FileStorage {
    fn load(&self) -> Result<Vec<Task>, CroError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no data file yet, starting empty");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let mut tasks = Vec::new();

        for (line_no, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let record: Vec<String> = serde_json::from_str(line).map_err(|e| {
                CroError::Storage(format!(
                    "{}:{}: not a task record: {e}",
                    self.path.display(),
                    line_no + 1
                ))
            })?;
            let task = Task::from_record(&record).map_err(|e| {
                CroError::Storage(format!("{}:{}: {e}", self.path.display(), line_no + 1))
            })?;
            tasks.push(task);
        }

        info!(path = %self.path.display(), count = tasks.len(), "loaded tasks");
        Ok(tasks)
    }

    fn save(&self, tasks: &[Task]) -> Result<(), CroError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let staging = self.staging_path();
        if let Err(e) = self.write_staged(&staging, tasks) {
            let _ = fs::remove_file(&staging);
            return Err(e);
        }
        fs::rename(&staging, &self.path)?;

        info!(path = %self.path.display(), count = tasks.len(), "saved tasks");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::TaskList;
    use tempfile::TempDir;

    fn sample_tasks() -> Vec<Task> {
        let mut list = TaskList::new();
        list.add_todo(&["T", "0", "read book"]).unwrap();
        list.add_deadline(&["D", "0", "submit report", "2024-03-05T18:00"]).unwrap();
        list.add_event(&["E", "0", "party", "2019-10-15T18:00", "2019-10-15T20:00"]).unwrap();
        list.mark_task_as_done(2).unwrap();
        list.tasks().to_vec()
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::at(temp_dir.path().join("tasks.jsonl"));
        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::at(temp_dir.path().join("tasks.jsonl"));
        let tasks = sample_tasks();

        storage.save(&tasks).unwrap();
        let loaded = storage.load().unwrap();

        assert_eq!(loaded, tasks);
    }

    #[test]
    fn test_file_holds_canonical_records() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::at(temp_dir.path().join("tasks.jsonl"));
        storage.save(&sample_tasks()).unwrap();

        let content = fs::read_to_string(storage.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], r#"["T","0","read book"]"#);
        assert_eq!(lines[1], r#"["D","1","submit report","2024-03-05T18:00"]"#);
        assert!(!content.contains("2024 3 5"));
    }

    #[test]
    fn test_save_leaves_no_staging_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::at(temp_dir.path().join("tasks.jsonl"));
        storage.save(&sample_tasks()).unwrap();

        assert!(!storage.staging_path().exists());
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_save_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::at(temp_dir.path().join("tasks.jsonl"));
        storage.save(&sample_tasks()).unwrap();
        storage.save(&[]).unwrap();

        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::at(temp_dir.path().join("nested/dir/tasks.jsonl"));
        storage.save(&sample_tasks()).unwrap();
        assert_eq!(storage.load().unwrap().len(), 3);
    }

    #[test]
    fn test_description_with_quotes_and_pipes() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::at(temp_dir.path().join("tasks.jsonl"));
        let tasks = vec![Task::todo(r#"say "hi" | wave"#).unwrap()];

        storage.save(&tasks).unwrap();
        assert_eq!(storage.load().unwrap(), tasks);
    }

    #[test]
    fn test_load_reports_bad_line() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tasks.jsonl");
        fs::write(&path, "[\"T\",\"0\",\"ok\"]\nnot json\n").unwrap();

        let err = FileStorage::at(path).load().unwrap_err();
        assert!(matches!(err, CroError::Storage(ref msg) if msg.contains(":2:")));
    }

    #[test]
    fn test_load_rejects_raw_dates() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tasks.jsonl");
        fs::write(&path, "[\"D\",\"0\",\"x\",\"2024 3 5 18 00\"]\n").unwrap();

        assert!(FileStorage::at(path).load().is_err());
    }

    #[test]
    fn test_load_skips_blank_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tasks.jsonl");
        fs::write(&path, "[\"T\",\"0\",\"a\"]\n\n[\"T\",\"1\",\"b\"]\n").unwrap();

        let tasks = FileStorage::at(path).load().unwrap();
        assert_eq!(tasks.len(), 2);
        assert!(tasks[1].is_done);
    }
}
