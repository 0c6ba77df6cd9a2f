//! # Log Groups
//!
//! The data the whole tool revolves around: a flat, ordered list of log group
//! names as they arrived from the paginated source.
//!
//! ```text
//! LogGroupCollection
//! └── names: Vec<LogGroupName>   // arrival order, duplicates kept
//! ```
//!
//! The collection has no mutating API. It is built in one go by the fetcher
//! and handed to the browser as read-only input.

use std::fmt;

/// An opaque log group identifier, e.g. `/aws/lambda/my-function`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogGroupName(String);

impl LogGroupName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LogGroupName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LogGroupName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for LogGroupName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&str> for LogGroupName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogGroupCollection {
    names: Vec<LogGroupName>,
}

impl LogGroupCollection {
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&LogGroupName> {
        self.names.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogGroupName> {
        self.names.iter()
    }
}

impl From<Vec<LogGroupName>> for LogGroupCollection {
    fn from(names: Vec<LogGroupName>) -> Self {
        Self { names }
    }
}

impl<S: Into<String>> FromIterator<S> for LogGroupCollection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(LogGroupName::new).collect(),
        }
    }
}
