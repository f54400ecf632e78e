//! Keywords that explain a classification.

use serde::{Deserialize, Serialize};

use crate::Category;

/// Tokens and fused phrases that contributed to each category's score, in
/// the order they were matched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KeywordEvidence {
    positive: Vec<String>,
    negative: Vec<String>,
    neutral: Vec<String>,
    question: Vec<String>,
}

impl KeywordEvidence {
    /// Evidence with no keywords for any category.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            positive: Vec::new(),
            negative: Vec::new(),
            neutral: Vec::new(),
            question: Vec::new(),
        }
    }

    /// Keywords recorded for one category.
    #[must_use]
    pub fn get(&self, category: Category) -> &[String] {
        match category {
            Category::Positive => &self.positive,
            Category::Negative => &self.negative,
            Category::Neutral => &self.neutral,
            Category::Question => &self.question,
        }
    }

    /// Record a keyword for a category.
    pub fn push(&mut self, category: Category, keyword: impl Into<String>) {
        let list = match category {
            Category::Positive => &mut self.positive,
            Category::Negative => &mut self.negative,
            Category::Neutral => &mut self.neutral,
            Category::Question => &mut self.question,
        };
        list.push(keyword.into());
    }

    /// Iterate `(category, keywords)` in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    /// Total number of recorded keywords across categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().map(|(_, k)| k.len()).sum()
    }

    /// True when no category has any keyword.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_order_per_category() {
        let mut e = KeywordEvidence::new();
        e.push(Category::Positive, "good");
        e.push(Category::Negative, "bad");
        e.push(Category::Positive, "great");
        assert_eq!(e.get(Category::Positive), ["good", "great"]);
        assert_eq!(e.get(Category::Negative), ["bad"]);
        assert!(e.get(Category::Question).is_empty());
        assert_eq!(e.len(), 3);
    }

    #[test]
    fn empty_evidence_lists_all_categories() {
        let e = KeywordEvidence::default();
        assert!(e.is_empty());
        assert_eq!(e.iter().count(), 4);
    }
}
