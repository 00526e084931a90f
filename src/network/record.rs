//! Movie credit records.
//!
//! One dataset row looks like
//!
//! ```text
//! 19995,Avatar,"[{""cast_id"": 242, ""name"": ""Sam Worthington""}, ...]","[...]"
//! ```
//!
//! i.e. `movie_id,title,cast,crew` where the two last columns are JSON arrays
//! embedded in CSV with doubled quotes. The crew column is dropped.

use core::fmt;
use serde::{Deserialize, Serialize};

/// Column holding the movie title.
const TITLE: usize = 1;
/// Column holding the JSON cast array.
const CAST: usize = 2;

/// A credited cast member. Fields other than `name` are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMember {
    /// Name as it appears in the credits.
    pub name: String,
}

/// A movie and its cast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRecord {
    /// Movie title.
    pub title: String,
    /// Cast in billing order. May contain the same person twice.
    pub cast: Vec<CastMember>,
}

impl MovieRecord {
    /// Builds a record from a title and cast names.
    pub fn new<I, S>(title: impl Into<String>, cast: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            cast: cast.into_iter().map(|name| CastMember { name: name.into() }).collect(),
        }
    }

    /// Builds a record from an already split CSV row.
    ///
    /// Columns past the cast (the crew) are not looked at.
    ///
    /// # Errors
    /// [`DatasetError::MissingTitle`] or [`DatasetError::MissingCast`] when the
    /// row is too short or the title is blank, [`DatasetError::Cast`] when the
    /// cast column is not a JSON array of cast members.
    pub fn from_row(row: &csv::StringRecord) -> Result<Self, DatasetError> {
        let title = row
            .get(TITLE)
            .filter(|title| !title.trim().is_empty())
            .ok_or(DatasetError::MissingTitle)?;
        let cast = row.get(CAST).ok_or(DatasetError::MissingCast)?;

        Ok(Self {
            title: title.to_owned(),
            cast: serde_json::from_str(cast)?,
        })
    }
}

/// Why a dataset row could not be turned into a [`MovieRecord`].
#[derive(Debug)]
pub enum DatasetError {
    /// The row stops before the cast column.
    MissingCast,
    /// The row has no title column, or the title is blank.
    MissingTitle,
    /// The cast column is not a valid JSON array of cast members.
    Cast(serde_json::Error),
    /// The input is not valid CSV, or could not be read.
    Csv(csv::Error),
}

impl DatasetError {
    /// Whether reading the input failed, as opposed to one bad row.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Csv(err) if err.is_io_error())
    }
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCast => f.write_str("no cast column"),
            Self::MissingTitle => f.write_str("no title column"),
            Self::Cast(err) => write!(f, "malformed cast column: {err}"),
            Self::Csv(err) => write!(f, "malformed csv: {err}"),
        }
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Cast(err) => Some(err),
            Self::Csv(err) => Some(err),
            Self::MissingCast | Self::MissingTitle => None,
        }
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Cast(err)
    }
}

impl From<csv::Error> for DatasetError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Parses one dataset row given as text (not the header).
///
/// # Errors
/// See [`DatasetError`]. An empty line has no title.
pub fn parse_record(line: &str) -> Result<MovieRecord, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());
    let row = reader.records().next().ok_or(DatasetError::MissingTitle)??;
    MovieRecord::from_row(&row)
}
