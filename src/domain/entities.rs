//! Domain entities: movie records keyed by title

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;

/// A single movie record.
///
/// Equality and ordering are defined over the title alone, so a record
/// carrying nothing but a title can act as a search probe for a fully
/// populated entry, and two releases sharing a title are the same catalog
/// entry.
#[derive(Debug, Clone)]
pub struct Movie {
    /// Catalog key
    pub title: String,
    /// Release date, if known
    pub release_date: Option<NaiveDate>,
    /// Running time in minutes, if known
    pub runtime: Option<u32>,
}

impl Movie {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            release_date: None,
            runtime: None,
        }
    }

    pub fn with_details(
        title: impl Into<String>,
        release_date: Option<NaiveDate>,
        runtime: Option<u32>,
    ) -> Self {
        Self {
            title: title.into(),
            release_date,
            runtime,
        }
    }

    /// Full rendering including the non-key fields.
    pub fn full_display(&self) -> String {
        let date = self
            .release_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        let runtime = self
            .runtime
            .map(|minutes| format!("{} min", minutes))
            .unwrap_or_else(|| "unknown".to_string());
        format!("{}: {}; {}", self.title, date, runtime)
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

impl PartialEq for Movie {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
    }
}

impl Eq for Movie {}

impl PartialOrd for Movie {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Movie {
    fn cmp(&self, other: &Self) -> Ordering {
        self.title.cmp(&other.title)
    }
}

// Lets the tree be probed with a bare title. Consistent with Ord above:
// both compare titles only.
impl Borrow<str> for Movie {
    fn borrow(&self) -> &str {
        &self.title
    }
}
