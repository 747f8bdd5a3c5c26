//! Keyword search over registry items.
//!
//! Name and id weigh most, then tags, category and env keys, then
//! description and setup text.

use super::definition::RegistryItem;
use super::registry::Registry;

const NAME_WEIGHT: u32 = 10;
const TAG_WEIGHT: u32 = 5;
const TEXT_WEIGHT: u32 = 1;

/// A search result with its relevance score
#[derive(Debug, Clone, Copy)]
pub struct SearchHit<'a> {
    pub item: &'a RegistryItem,
    pub score: u32,
}

impl Registry {
    /// Case-insensitive keyword search. Every whitespace-separated term must
    /// match somewhere in the item; results are ranked by score and ties keep
    /// registry order.
    pub fn search(&self, query: &str) -> Vec<SearchHit<'_>> {
        let terms: Vec<String> = query
            .split_whitespace()
            .map(|t| t.to_lowercase())
            .collect();

        if terms.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<SearchHit<'_>> = self
            .all()
            .iter()
            .filter_map(|item| {
                let mut total = 0;
                for term in &terms {
                    let score = score_term(item, term);
                    if score == 0 {
                        return None;
                    }
                    total += score;
                }
                Some(SearchHit { item, score: total })
            })
            .collect();

        // Stable sort keeps registry order among equal scores
        hits.sort_by(|a, b| b.score.cmp(&a.score));
        hits
    }
}

fn score_term(item: &RegistryItem, term: &str) -> u32 {
    let def = &item.definition;
    let mut score = 0;

    if def.name.to_lowercase().contains(term) || def.id.contains(term) {
        score += NAME_WEIGHT;
    }

    let in_tags = def
        .tags
        .iter()
        .chain(&def.env_keys)
        .any(|t| t.to_lowercase().contains(term));
    let in_category = def
        .category
        .as_deref()
        .is_some_and(|c| c.to_lowercase().contains(term));
    if in_tags || in_category {
        score += TAG_WEIGHT;
    }

    let in_text = [
        Some(def.description.as_str()),
        def.long_description.as_deref(),
        def.setup.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|text| text.to_lowercase().contains(term));
    if in_text {
        score += TEXT_WEIGHT;
    }

    score
}
