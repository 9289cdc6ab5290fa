//! Story popularity and account activity.

use serde::Serialize;

use super::AccountCollection;

/// Summary statistics for an [`AccountCollection`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionStats {
    pub total_tweets: u64,
    pub total_stories: usize,
    pub total_users: usize,
    /// Story with the most account links.
    pub most_popular_story: Option<String>,
    /// Story with the fewest account links.
    pub least_popular_story: Option<String>,
    /// Account linked to the most stories.
    pub most_active_writer: Option<String>,
    /// Account with the highest tweet count.
    pub most_active_tweeter: Option<String>,
}

impl CollectionStats {
    /// Compute statistics; ties keep the first story or account encountered.
    pub fn compute(collection: &AccountCollection) -> Self {
        let graph = collection.graph();
        let degree = |v: &String| graph.out_degree(v).unwrap_or(0) as u64;

        let story_degrees: Vec<(&String, u64)> = collection
            .stories()
            .iter()
            .map(|s| (s, degree(s)))
            .collect();
        let writer_degrees: Vec<(&String, u64)> = collection
            .accounts()
            .iter()
            .map(|a| (&a.screen_name, degree(&a.screen_name)))
            .collect();
        let tweet_counts: Vec<(&String, u64)> = collection
            .accounts()
            .iter()
            .map(|a| (&a.screen_name, a.tweet_count))
            .collect();

        Self {
            total_tweets: collection.total_tweets(),
            total_stories: collection.total_stories(),
            total_users: collection.total_users(),
            most_popular_story: first_best(story_degrees.iter().copied(), |a, b| a > b),
            least_popular_story: first_best(story_degrees.iter().copied(), |a, b| a < b),
            most_active_writer: first_best(writer_degrees.into_iter(), |a, b| a > b),
            most_active_tweeter: first_best(tweet_counts.into_iter(), |a, b| a > b),
        }
    }
}

/// First key whose score beats every earlier score under `better`.
fn first_best<'a, I, F>(items: I, better: F) -> Option<String>
where
    I: Iterator<Item = (&'a String, u64)>,
    F: Fn(u64, u64) -> bool,
{
    let mut best: Option<(&String, u64)> = None;
    for (key, score) in items {
        if best.map_or(true, |(_, s)| better(score, s)) {
            best = Some((key, score));
        }
    }
    best.map(|(key, _)| key.clone())
}
