use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ProjectRecord;

/// Opaque continuation token handed out by the listing endpoint.
///
/// An empty token marks the end of the listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Cursor {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Cursor {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// One page of the project listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub records: Vec<ProjectRecord>,
    pub next: Option<Cursor>,
}

impl Page {
    pub fn new(records: Vec<ProjectRecord>, next: Option<Cursor>) -> Self {
        Self { records, next }
    }

    /// Final page: no continuation.
    pub fn last(records: Vec<ProjectRecord>) -> Self {
        Self { records, next: None }
    }

    /// Returns the cursor for the following page, if there is one.
    pub fn continuation(&self) -> Option<&Cursor> {
        self.next.as_ref().filter(|c| !c.is_end())
    }

    pub fn has_more(&self) -> bool {
        self.continuation().is_some()
    }
}
