//! Per-category score distribution.

use serde::{Deserialize, Serialize};

use crate::Category;

/// Round `value` to `decimals` decimal places, half away from zero.
///
/// ```rust
/// use sentilex_core::round_to;
///
/// assert_eq!(round_to(2.0 / 3.0, 3), 0.667);
/// assert_eq!(round_to(0.125, 2), 0.13);
/// ```
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Scores for the four sentiment categories.
///
/// Every category is always present (the struct has one field per category),
/// so a lookup can never miss. Values are non-negative; after normalization
/// they are fractions of the matched tokens.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreVector {
    positive: f64,
    negative: f64,
    neutral: f64,
    question: f64,
}

impl ScoreVector {
    /// All categories at zero.
    #[must_use]
    pub const fn zeroed() -> Self {
        Self::uniform(0.0)
    }

    /// All categories at the same value.
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self {
            positive: value,
            negative: value,
            neutral: value,
            question: value,
        }
    }

    /// Score of one category.
    #[must_use]
    #[inline]
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Positive => self.positive,
            Category::Negative => self.negative,
            Category::Neutral => self.neutral,
            Category::Question => self.question,
        }
    }

    /// Mutable access to one category's score.
    #[inline]
    pub fn get_mut(&mut self, category: Category) -> &mut f64 {
        match category {
            Category::Positive => &mut self.positive,
            Category::Negative => &mut self.negative,
            Category::Neutral => &mut self.neutral,
            Category::Question => &mut self.question,
        }
    }

    /// Set one category's score.
    pub fn set(&mut self, category: Category, value: f64) {
        *self.get_mut(category) = value;
    }

    /// Iterate `(category, score)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    /// Pairs sorted by score, highest first.
    ///
    /// The sort is stable, so equal scores keep declaration order.
    #[must_use]
    pub fn ranked(&self) -> Vec<(Category, f64)> {
        let mut pairs: Vec<_> = self.iter().collect();
        pairs.sort_by(|a, b| b.1.total_cmp(&a.1));
        pairs
    }

    /// Highest-scoring category; the first declared wins on ties.
    #[must_use]
    pub fn winner(&self) -> Category {
        let mut best = Category::Positive;
        for (category, score) in self.iter() {
            if score > self.get(best) {
                best = category;
            }
        }
        best
    }

    /// The highest score.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.get(self.winner())
    }

    /// Sum of all four scores.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.iter().map(|(_, s)| s).sum()
    }

    /// Copy with every score rounded to `decimals` places.
    #[must_use]
    pub fn rounded(&self, decimals: u32) -> Self {
        let mut out = *self;
        for category in Category::ALL {
            out.set(category, round_to(self.get(category), decimals));
        }
        out
    }

    /// Resolve an exact positive/negative tie in favour of negative.
    ///
    /// When positive is nonzero and exactly equal to negative, negative gains
    /// `0.01` and positive loses `0.01`. This takes precedence over the
    /// declaration-order tie-break of [`ScoreVector::winner`]. Returns whether
    /// an adjustment was made.
    ///
    /// The nudge is a fixed `0.01`, not a fraction of the scores. A tie below
    /// `0.01` (more than a hundred matches) leaves positive below zero; it is
    /// not clamped.
    pub fn break_polarity_tie(&mut self) -> bool {
        if self.positive > 0.0 && self.positive == self.negative {
            self.negative += 0.01;
            self.positive -= 0.01;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_has_every_category() {
        let v = ScoreVector::zeroed();
        assert_eq!(v.iter().count(), 4);
        assert!(v.iter().all(|(_, s)| s == 0.0));
    }

    #[test]
    fn winner_prefers_declaration_order_on_ties() {
        assert_eq!(ScoreVector::zeroed().winner(), Category::Positive);

        let mut v = ScoreVector::zeroed();
        v.set(Category::Neutral, 0.5);
        v.set(Category::Question, 0.5);
        assert_eq!(v.winner(), Category::Neutral);
    }

    #[test]
    fn ranked_is_stable_and_descending() {
        let mut v = ScoreVector::zeroed();
        v.set(Category::Question, 0.6);
        v.set(Category::Negative, 0.2);
        v.set(Category::Positive, 0.2);
        let order: Vec<_> = v.ranked().into_iter().map(|(c, _)| c).collect();
        assert_eq!(
            order,
            vec![
                Category::Question,
                Category::Positive,
                Category::Negative,
                Category::Neutral
            ]
        );
    }

    #[test]
    fn polarity_tie_moves_both_scores() {
        let mut v = ScoreVector::zeroed();
        v.set(Category::Positive, 0.5);
        v.set(Category::Negative, 0.5);
        assert!(v.break_polarity_tie());
        assert!((v.get(Category::Negative) - 0.51).abs() < 1e-9);
        assert!((v.get(Category::Positive) - 0.49).abs() < 1e-9);
        assert_eq!(v.winner(), Category::Negative);
    }

    #[test]
    fn small_polarity_tie_goes_below_zero() {
        let mut v = ScoreVector::zeroed();
        v.set(Category::Positive, 0.004);
        v.set(Category::Negative, 0.004);
        assert!(v.break_polarity_tie());
        assert!((v.get(Category::Positive) + 0.006).abs() < 1e-9);
        assert!((v.get(Category::Negative) - 0.014).abs() < 1e-9);
        assert_eq!(v.winner(), Category::Negative);
    }

    #[test]
    fn zero_tie_is_left_alone() {
        let mut v = ScoreVector::zeroed();
        assert!(!v.break_polarity_tie());
        assert_eq!(v, ScoreVector::zeroed());
    }

    #[test]
    fn rounding_is_per_category() {
        let mut v = ScoreVector::zeroed();
        v.set(Category::Positive, 0.333);
        v.set(Category::Negative, 0.667);
        let r = v.rounded(2);
        assert_eq!(r.get(Category::Positive), 0.33);
        assert_eq!(r.get(Category::Negative), 0.67);
    }

    #[test]
    fn serializes_as_named_map() {
        let json = serde_json::to_value(ScoreVector::uniform(0.25)).unwrap();
        for c in Category::ALL {
            assert_eq!(json[c.as_label()], 0.25);
        }
    }
}
