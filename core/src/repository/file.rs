use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::config::{GrassConfig, MalformedPolicy};
use crate::error::ParseError;
use crate::input::{parse_line, year_from_file_name, ParseOptions};
use crate::model::day_record::{DayRecord, GrassData};
use crate::repository::traits::RecordRepository;

const DATA_FILE_EXTENSION: &str = "txt";

/// Reads one `*.txt` file per year from a data directory.
#[derive(Clone)]
pub struct FileRecordRepository {
    data_dir: PathBuf,
    options: ParseOptions,
    on_malformed: MalformedPolicy,
}

impl FileRecordRepository {
    pub fn new(data_dir: PathBuf, options: ParseOptions, on_malformed: MalformedPolicy) -> Self {
        Self {
            data_dir,
            options,
            on_malformed,
        }
    }

    pub fn from_config(config: &GrassConfig) -> Self {
        Self::new(
            config.data_dir.clone(),
            config.parse_options(),
            config.on_malformed,
        )
    }

    /// Data files sorted by name, so later files win on duplicate dates.
    pub fn discover(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let entries = fs::read_dir(&self.data_dir)
            .with_context(|| format!("reading data directory {}", self.data_dir.display()))?;
        for entry in entries {
            let path = entry?.path();
            let is_data = path.extension().and_then(|s| s.to_str()) == Some(DATA_FILE_EXTENSION);
            if is_data && path.is_file() {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    fn load_file(&self, path: &Path, data: &mut GrassData) -> Result<()> {
        let year = year_from_file_name(path)?;
        let content =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let records = parse_records(path, year, &content, self.options, self.on_malformed)?;
        debug!("{}: {} days for {}", path.display(), records.len(), year);

        data.years.insert(year);
        for record in records {
            if let Some(old) = data.insert(record) {
                debug!("{} overwritten by {}", old.date, path.display());
            }
        }
        Ok(())
    }
}

impl RecordRepository for FileRecordRepository {
    fn load(&self) -> Result<GrassData> {
        let files = self.discover()?;
        info!("found {} data files in {}", files.len(), self.data_dir.display());

        let mut data = GrassData::new();
        for path in &files {
            self.load_file(path, &mut data)?;
        }
        Ok(data)
    }
}

/// Expand every line of one year's file into day records, in file order.
pub fn parse_records(
    path: &Path,
    year: i32,
    content: &str,
    options: ParseOptions,
    on_malformed: MalformedPolicy,
) -> Result<Vec<DayRecord>, ParseError> {
    let mut records = Vec::new();
    for (i, line) in content.lines().enumerate() {
        match parse_line(year, line, options) {
            Ok(Some(parsed)) => records.extend(parsed.into_records(year)),
            Ok(None) => {}
            Err(e) => {
                let e = e.at_line(path, i + 1);
                match on_malformed {
                    MalformedPolicy::Fail => return Err(e),
                    MalformedPolicy::Skip => warn!("skipping line: {}", e),
                }
            }
        }
    }
    Ok(records)
}
