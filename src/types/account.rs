//! Account records and ingestion settings.

use serde::Serialize;

use super::{DEFAULT_FIELD_DELIMITER, DEFAULT_STORY_SEPARATOR};

/// One account row: a screen name and the stories it took part in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    /// Platform user ID.
    pub id: String,
    /// Screen name; also the account's vertex in the graph.
    pub screen_name: String,
    /// Number of tweets the account contributed.
    pub tweet_count: u64,
    /// Number of stories the account contributed to, as reported by the source.
    pub story_count: u64,
    /// Story IDs referenced by the account, in file order.
    pub stories: Vec<String>,
}

impl Account {
    /// Create an account with no stories.
    pub fn new(
        id: impl Into<String>,
        screen_name: impl Into<String>,
        tweet_count: u64,
        story_count: u64,
    ) -> Self {
        Self {
            id: id.into(),
            screen_name: screen_name.into(),
            tweet_count,
            story_count,
            stories: Vec::new(),
        }
    }

    /// Attach story references.
    pub fn with_stories<I, S>(mut self, stories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stories = stories.into_iter().map(Into::into).collect();
        self
    }
}

/// How account files are split into fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestConfig {
    /// Separator between the fields of a row.
    pub field_delimiter: char,
    /// Separator between story IDs in the stories field.
    pub story_separator: char,
    /// Skip the first non-blank line.
    pub has_header: bool,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            field_delimiter: DEFAULT_FIELD_DELIMITER,
            story_separator: DEFAULT_STORY_SEPARATOR,
            has_header: false,
        }
    }
}
