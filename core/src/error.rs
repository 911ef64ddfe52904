use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("invalid date field '{0}': expected MMDD or MMDD-MMDD")]
    BadDateField(String),

    #[error("no such date {year:04}-{month:02}-{day:02}")]
    BadDate { year: i32, month: u32, day: u32 },

    #[error("date range '{0}' ends before it starts")]
    ReversedRange(String),

    #[error("missing location in '{0}'")]
    MissingLocation(String),

    #[error("expected '<date>\\t<location>', got '{0}'")]
    BadFieldCount(String),

    #[error("file name {} does not end with a 4-digit year", .0.display())]
    BadFileName(PathBuf),

    #[error("{}:{line}: {source}", .path.display())]
    AtLine {
        path: PathBuf,
        line: usize,
        #[source]
        source: Box<ParseError>,
    },
}

impl ParseError {
    pub fn at_line(self, path: impl Into<PathBuf>, line: usize) -> Self {
        ParseError::AtLine {
            path: path.into(),
            line,
            source: Box::new(self),
        }
    }
}
