//! Account/story collection: a graph of screen names and the stories they
//! took part in, plus per-account and per-story bookkeeping.

pub mod stats;

use std::collections::HashMap;

use crate::graph::AdjListsGraph;
use crate::types::Account;

pub use stats::CollectionStats;

/// Accounts and stories, linked by one edge per account/story reference.
///
/// Screen names and story IDs share one vertex namespace, so a story ID equal
/// to a screen name reuses that account's vertex.
#[derive(Debug, Clone, Default)]
pub struct AccountCollection {
    graph: AdjListsGraph<String>,
    /// Accounts in ingestion order.
    accounts: Vec<Account>,
    /// Screen name -> index in `accounts`.
    account_index: HashMap<String, usize>,
    /// Distinct story IDs in first-reference order.
    stories: Vec<String>,
    /// Story ID -> number of references across all accounts.
    story_references: HashMap<String, u64>,
    total_tweets: u64,
}

impl AccountCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an account, its stories and the account/story edges.
    ///
    /// Returns false, leaving the collection untouched, if the screen name
    /// is already present.
    pub fn add_account(&mut self, account: Account) -> bool {
        if self.account_index.contains_key(&account.screen_name) {
            log::warn!(
                "Duplicate account {:?}; keeping the first record",
                account.screen_name
            );
            return false;
        }

        let name = account.screen_name.clone();
        self.graph.add_vertex(name.clone());
        self.total_tweets += account.tweet_count;

        for story in account.stories.iter().filter(|s| !s.is_empty()) {
            match self.story_references.get_mut(story) {
                Some(count) => *count += 1,
                None => {
                    self.story_references.insert(story.clone(), 1);
                    self.stories.push(story.clone());
                    self.graph.add_vertex(story.clone());
                }
            }
            self.graph.add_edge(&name, story);
        }

        self.account_index.insert(name, self.accounts.len());
        self.accounts.push(account);
        true
    }

    /// The account/story graph.
    pub fn graph(&self) -> &AdjListsGraph<String> {
        &self.graph
    }

    /// All accounts, in ingestion order.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Look up an account by screen name.
    pub fn account(&self, screen_name: &str) -> Option<&Account> {
        self.account_index
            .get(screen_name)
            .map(|&i| &self.accounts[i])
    }

    /// Distinct story IDs in first-reference order.
    pub fn stories(&self) -> &[String] {
        &self.stories
    }

    /// How many times a story was referenced, if it exists.
    pub fn story_references(&self, story_id: &str) -> Option<u64> {
        self.story_references.get(story_id).copied()
    }

    /// Sum of tweet counts over all accounts.
    pub fn total_tweets(&self) -> u64 {
        self.total_tweets
    }

    /// Number of distinct stories.
    pub fn total_stories(&self) -> usize {
        self.stories.len()
    }

    /// Number of distinct accounts.
    pub fn total_users(&self) -> usize {
        self.accounts.len()
    }

    /// Story and account statistics.
    pub fn stats(&self) -> CollectionStats {
        CollectionStats::compute(self)
    }
}

impl FromIterator<Account> for AccountCollection {
    fn from_iter<I: IntoIterator<Item = Account>>(iter: I) -> Self {
        let mut collection = Self::new();
        for account in iter {
            collection.add_account(account);
        }
        collection
    }
}
