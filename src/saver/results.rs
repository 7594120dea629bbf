/*
results.rs

Copyright 2025 Hervé Quatremain

This file is part of Rift Daily.

Rift Daily is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Rift Daily is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Rift Daily. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Save and restore the submitted results.
//!
//! The saved object is a serialization of the [`Results`] object in JSON format by
//! using [`serde`].

use chrono::{DateTime, Utc};
use log::debug;
use std::error::Error;
use std::ffi::OsString;
use std::fs::{File, create_dir_all, remove_file, rename};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::config::RESULTS_FILE;
use crate::results::{ResultStore, Results, StoreError, Submission, SubmissionRecord};

/// Object to save and restore the results.
pub struct SaverResults {
    /// Absolute path to the save file.
    save_file: PathBuf,
}

fn write_results(path: &Path, results: &Results) -> Result<(), Box<dyn Error>> {
    let file: File = File::create(path)?;
    let mut writer: BufWriter<File> = BufWriter::new(file);
    serde_json::to_writer(&mut writer, results)?;
    writer.flush()?;
    writer.get_ref().sync_all()?;
    Ok(())
}

impl SaverResults {
    /// Create a [`SaverResults`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the results must be saved.
    pub fn new(mut data_dir: PathBuf) -> Self {
        data_dir.push(RESULTS_FILE);
        debug!("Results file: {data_dir:?}");
        Self {
            save_file: data_dir,
        }
    }

    /// Retrieve the [`Results`] object from the results file.
    ///
    /// Return the [`Results`] object or None if the results file does not exist.
    pub fn get_results(&self) -> Result<Option<Results>, Box<dyn Error>> {
        let file: File = match File::open(&self.save_file) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        };
        let reader: BufReader<File> = BufReader::new(file);
        let results: Results = serde_json::from_reader(reader)?;
        Ok(Some(results))
    }

    /// Retrieve the [`Results`] object, or an empty one if nothing has been saved yet.
    pub fn get_results_or_default(&self) -> Result<Results, Box<dyn Error>> {
        Ok(self.get_results()?.unwrap_or_default())
    }

    /// Save the provided [`Results`] object.
    ///
    /// The results are written to a temporary file that then replaces the results file, so
    /// a failed save leaves the previous file untouched.
    pub fn save_results(&self, results: &Results) -> Result<(), Box<dyn Error>> {
        if let Some(dir) = self.save_file.parent() {
            create_dir_all(dir)?;
        }
        let tmp_file: PathBuf = self.tmp_file();
        if let Err(e) = write_results(&tmp_file, results) {
            let _ = remove_file(&tmp_file);
            return Err(e);
        }
        rename(&tmp_file, &self.save_file)?;
        debug!("{} result(s) saved", results.records().len());
        Ok(())
    }

    /// Store the result of a round and save the results.
    ///
    /// The results file is read again just before the submission, so that results saved by
    /// another process in the meantime are kept and the daily check sees them.
    /// The outer error reports a read or write failure, the inner one a rejected submission.
    pub fn submit(
        &self,
        submission: Submission,
        completed_at: DateTime<Utc>,
    ) -> Result<Result<SubmissionRecord, StoreError>, Box<dyn Error>> {
        let mut results: Results = self.get_results_or_default()?;
        let record: SubmissionRecord = match results.submit(submission, completed_at) {
            Ok(record) => record,
            Err(e) => return Ok(Err(e)),
        };
        self.save_results(&results)?;
        Ok(Ok(record))
    }

    fn tmp_file(&self) -> PathBuf {
        let mut name: OsString = self.save_file.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }

    /// Delete the results file.
    pub fn delete_save(&self) {
        let _ = remove_file(&self.save_file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_mode::GameMode;
    use chrono::TimeZone;

    fn temp_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("riftdaily-{name}-{}", std::process::id()))
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let saver: SaverResults = SaverResults::new(temp_dir("missing"));
        saver.delete_save();
        assert!(saver.get_results().unwrap().is_none());
        assert!(saver.get_results_or_default().unwrap().is_empty());
    }

    #[test]
    fn results_survive_a_restart() {
        let dir: PathBuf = temp_dir("restart");
        let saver: SaverResults = SaverResults::new(dir.clone());
        let mut results: Results = Results::new();
        let submission: Submission = Submission {
            user_id: "u1".to_string(),
            game_mode: GameMode::PatchNote,
            puzzle_id: "patch-note-2024-3-7".to_string(),
            is_daily: true,
            attempts: 2,
            score: 800,
        };
        let when = Utc.with_ymd_and_hms(2024, 3, 7, 12, 0, 0).unwrap();
        results.submit(submission.clone(), when).unwrap();
        saver.save_results(&results).unwrap();

        let mut restored: Results = SaverResults::new(dir).get_results().unwrap().unwrap();
        assert_eq!(restored.records(), results.records());
        assert!(restored.submit(submission, when).is_err());
        saver.delete_save();
    }

    fn daily(user: &str) -> Submission {
        Submission {
            user_id: user.to_string(),
            game_mode: GameMode::Lore,
            puzzle_id: "lore-2024-3-7".to_string(),
            is_daily: true,
            attempts: 3,
            score: 850,
        }
    }

    #[test]
    fn failed_save_keeps_previous_results() {
        let dir: PathBuf = temp_dir("failed-save");
        let saver: SaverResults = SaverResults::new(dir.clone());
        let when = Utc.with_ymd_and_hms(2024, 3, 7, 9, 0, 0).unwrap();
        let mut results: Results = Results::new();
        results.submit(daily("u1"), when).unwrap();
        saver.save_results(&results).unwrap();

        // A directory in the way of the temporary file makes the write fail
        let blocker: PathBuf = saver.tmp_file();
        create_dir_all(&blocker).unwrap();
        results.submit(daily("u2"), when).unwrap();
        assert!(saver.save_results(&results).is_err());

        let restored: Results = saver.get_results().unwrap().unwrap();
        assert_eq!(restored.records().len(), 1);
        assert_eq!(restored.records()[0].user_id, "u1");

        std::fs::remove_dir(&blocker).unwrap();
        saver.delete_save();
    }

    #[test]
    fn submit_keeps_results_saved_meanwhile() {
        let dir: PathBuf = temp_dir("meanwhile");
        let first: SaverResults = SaverResults::new(dir.clone());
        let second: SaverResults = SaverResults::new(dir);
        first.delete_save();
        let when = Utc.with_ymd_and_hms(2024, 3, 7, 9, 0, 0).unwrap();

        first.submit(daily("u1"), when).unwrap().unwrap();
        second.submit(daily("u2"), when).unwrap().unwrap();
        assert_eq!(
            first.submit(daily("u2"), when).unwrap(),
            Err(StoreError::AlreadySubmitted {
                user_id: "u2".to_string(),
                puzzle_id: "lore-2024-3-7".to_string()
            })
        );

        let results: Results = first.get_results().unwrap().unwrap();
        assert!(results.has_daily_result("u1", "lore-2024-3-7"));
        assert!(results.has_daily_result("u2", "lore-2024-3-7"));
        assert_eq!(results.records().len(), 2);
        first.delete_save();
    }
}
