use serde::Serialize;

use super::catalog::{JobCatalog, JobListing};

pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 3;

/// Title words this short are too generic to match on.
const MIN_TITLE_WORD_LEN: usize = 4;

#[derive(Debug, Clone, Serialize)]
pub struct JobRecommendation {
    pub key: &'static str,
    pub title: &'static str,
    pub employer: &'static str,
    pub location: &'static str,
    pub score: usize,
    pub matched_terms: Vec<String>,
}

impl JobCatalog {
    /// Linear keyword match of a stated job interest against every listing.
    ///
    /// Score is the number of distinct keywords and title words present in the
    /// interest. Listings without a match are dropped and ties keep catalog order.
    pub fn recommend(&self, interest: &str, limit: usize) -> Vec<JobRecommendation> {
        let normalized = normalize(interest);
        if normalized.is_empty() {
            return Vec::new();
        }
        let padded = format!(" {normalized} ");

        let mut scored: Vec<JobRecommendation> = self
            .listings()
            .iter()
            .filter_map(|listing| score_listing(listing, &padded))
            .collect();

        scored.sort_by(|left, right| right.score.cmp(&left.score));
        scored.truncate(limit);
        scored
    }
}

fn score_listing(listing: &JobListing, padded_interest: &str) -> Option<JobRecommendation> {
    let mut matched_terms: Vec<String> = Vec::new();

    let title_words = normalize(listing.title);
    let mut terms: Vec<&str> = listing.keywords.to_vec();
    terms.extend(
        title_words
            .split(' ')
            .filter(|word| word.len() >= MIN_TITLE_WORD_LEN),
    );

    for term in terms {
        let term = term.to_string();
        if padded_interest.contains(&format!(" {term} ")) && !matched_terms.contains(&term) {
            matched_terms.push(term);
        }
    }

    if matched_terms.is_empty() {
        return None;
    }

    Some(JobRecommendation {
        key: listing.key,
        title: listing.title,
        employer: listing.employer,
        location: listing.location,
        score: matched_terms.len(),
        matched_terms,
    })
}

/// Lowercase words separated by single spaces.
fn normalize(text: &str) -> String {
    text.to_lowercase()
        .split(|ch: char| !ch.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
