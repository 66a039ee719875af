//! Catalog loader: tab-separated movie records into a library.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use chrono::NaiveDate;
use regex::Regex;
use tracing::{debug, instrument};
use walkdir::WalkDir;

use crate::domain::entities::Movie;
use crate::domain::error::DomainError;
use crate::domain::library::MovieLibrary;
use crate::util::path::{ensure_file_exists, PathExt};

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, DomainError>;

/// Default date layout of catalog records, e.g. `11/10/2000`.
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

/// Counters reported by a bulk load.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    /// Non-empty lines read across all input files
    pub records_read: usize,
    /// Unique titles inserted into the library
    pub titles_added: usize,
    /// Lines without a usable title
    pub records_skipped: usize,
}

/// Builds movie libraries from tab-separated record files.
///
/// Records are `title \t date \t runtime` with the trailing fields
/// optional. Malformed detail fields degrade to "unknown" rather than
/// failing the load; only an unreadable source is an error.
pub struct LibraryBuilder {
    date_format: String,
    runtime_regex: Regex,
}

impl Default for LibraryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LibraryBuilder {
    pub fn new() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            runtime_regex: Regex::new(r"(\d+)").unwrap(),
        }
    }

    /// Builder parsing the date column with a custom chrono layout.
    pub fn with_date_format(date_format: &str) -> Self {
        Self {
            date_format: date_format.to_string(),
            ..Self::new()
        }
    }

    /// Load every record of a single file into a fresh library.
    #[instrument(level = "debug", skip(self))]
    pub fn build_from_file(&self, path: &Path) -> CatalogResult<(MovieLibrary, LoadReport)> {
        let mut library = MovieLibrary::new();
        let mut report = LoadReport::default();
        self.load_file(path, &mut library, &mut report)?;
        Ok((library, report))
    }

    /// Load every `.tsv` and `.txt` file under a directory into one library.
    ///
    /// Files are visited in path order so insertion order (and thus tree
    /// shape) is deterministic.
    #[instrument(level = "debug", skip(self))]
    pub fn build_from_directory(
        &self,
        directory_path: &Path,
    ) -> CatalogResult<(MovieLibrary, LoadReport)> {
        if !directory_path.exists() {
            return Err(DomainError::FileNotFound(directory_path.to_path_buf()));
        }
        if !directory_path.is_dir() {
            return Err(DomainError::InvalidFormat {
                path: directory_path.to_path_buf(),
                reason: "Not a directory".to_string(),
            });
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(directory_path) {
            let entry = entry.map_err(|e| DomainError::PathResolution {
                path: directory_path.to_path_buf(),
                reason: e.to_string(),
            })?;
            if entry.file_type().is_file() && entry.path().is_record_file() {
                files.push(entry.path().to_path_buf());
            }
        }
        files.sort();

        let mut library = MovieLibrary::new();
        let mut report = LoadReport::default();
        for file in &files {
            self.load_file(file, &mut library, &mut report)?;
        }
        Ok((library, report))
    }

    fn load_file(
        &self,
        path: &Path,
        library: &mut MovieLibrary,
        report: &mut LoadReport,
    ) -> CatalogResult<()> {
        ensure_file_exists(path)?;
        let file = File::open(path).map_err(DomainError::FileReadError)?;
        let reader = BufReader::new(file);

        for line in reader.lines() {
            let line = line.map_err(DomainError::FileReadError)?;
            if line.trim().is_empty() {
                continue;
            }
            report.records_read += 1;
            match self.parse_record(&line) {
                Some(movie) => {
                    if library.add(movie) {
                        report.titles_added += 1;
                    }
                }
                None => report.records_skipped += 1,
            }
        }
        debug!("loaded {}: {:?}", path.display(), report);
        Ok(())
    }

    /// Parse one `title \t date \t runtime` record. A record without a
    /// title is unusable and returns None.
    fn parse_record(&self, line: &str) -> Option<Movie> {
        let mut fields = line.split('\t');
        let title = fields.next()?.trim();
        if title.is_empty() {
            return None;
        }
        let release_date = fields
            .next()
            .and_then(|raw| NaiveDate::parse_from_str(raw.trim(), &self.date_format).ok());
        let runtime = fields.next().and_then(|raw| self.parse_runtime(raw));
        Some(Movie::with_details(title, release_date, runtime))
    }

    /// First integer in the runtime field, tolerating forms like `113 min`.
    fn parse_runtime(&self, raw: &str) -> Option<u32> {
        self.runtime_regex
            .captures(raw)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }
}
