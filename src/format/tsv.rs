//! Reads delimited account files into an [`AccountCollection`].
//!
//! Each row is `screen_name, id, tweet_count, story_count, stories`, where
//! `stories` is itself a list of story IDs.

use std::io::BufRead;
use std::path::Path;

use crate::collection::AccountCollection;
use crate::types::{Account, GraphError, GraphResult, IngestConfig, ACCOUNT_FIELD_COUNT};

/// Reader for delimited account files.
pub struct AccountReader {
    config: IngestConfig,
}

impl AccountReader {
    /// Create a reader with the given settings.
    pub fn new(config: IngestConfig) -> Self {
        Self { config }
    }

    /// Read an account file from disk.
    pub fn read_from_file(&self, path: &Path) -> GraphResult<AccountCollection> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let collection = self.read_from(reader)?;
        log::info!(
            "Loaded {} accounts and {} stories from {}",
            collection.total_users(),
            collection.total_stories(),
            path.display()
        );
        Ok(collection)
    }

    /// Read accounts from any buffered reader.
    pub fn read_from(&self, reader: impl BufRead) -> GraphResult<AccountCollection> {
        let mut collection = AccountCollection::new();
        let mut header_pending = self.config.has_header;

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = idx + 1;
            if line.trim().is_empty() {
                log::debug!("Skipping blank line {}", line_no);
                continue;
            }
            if header_pending {
                header_pending = false;
                continue;
            }
            let account = self.parse_line(&line, line_no)?;
            collection.add_account(account);
        }

        Ok(collection)
    }

    /// Parse one row. `line_no` is 1-based and only used in errors.
    pub fn parse_line(&self, line: &str, line_no: usize) -> GraphResult<Account> {
        let line = line.trim_end_matches(['\r', '\n']);
        let fields: Vec<&str> = line.split(self.config.field_delimiter).collect();
        if fields.len() < ACCOUNT_FIELD_COUNT {
            return Err(GraphError::MalformedRecord {
                line: line_no,
                reason: format!(
                    "expected {} fields, found {}",
                    ACCOUNT_FIELD_COUNT,
                    fields.len()
                ),
            });
        }

        let screen_name = fields[0].trim();
        if screen_name.is_empty() {
            return Err(GraphError::MalformedRecord {
                line: line_no,
                reason: "empty screen name".to_string(),
            });
        }

        let tweet_count = parse_count(fields[2], line_no)?;
        let story_count = parse_count(fields[3], line_no)?;
        let stories = fields[4]
            .split(self.config.story_separator)
            .map(str::trim)
            .filter(|s| !s.is_empty());

        Ok(Account::new(fields[1].trim(), screen_name, tweet_count, story_count)
            .with_stories(stories))
    }
}

impl Default for AccountReader {
    fn default() -> Self {
        Self::new(IngestConfig::default())
    }
}

fn parse_count(field: &str, line_no: usize) -> GraphResult<u64> {
    field
        .trim()
        .parse::<u64>()
        .map_err(|_| GraphError::InvalidCount {
            line: line_no,
            value: field.to_string(),
        })
}
