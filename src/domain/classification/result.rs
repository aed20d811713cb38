//! Classification results and their "sort" and "rank" views.

use serde::Serialize;

use super::{Category, Procedure};
use crate::domain::foundation::AlternativeId;

/// The category assigned to one alternative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pub alternative_id: AlternativeId,
    pub category: Category,
}

/// A category with its members, as listed by the "sort" view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortedCategory {
    pub category: Category,
    pub alternatives: Vec<AlternativeId>,
}

/// An alternative with its membership label, as listed by the "rank" view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankEntry {
    pub alternative_id: AlternativeId,
    pub category: String,
}

/// Outcome of one classification procedure.
///
/// Every alternative is assigned to exactly one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    procedure: Procedure,
    categories: Vec<Category>,
    assignments: Vec<Assignment>,
}

impl ClassificationResult {
    pub(crate) fn new(
        procedure: Procedure,
        categories: Vec<Category>,
        assignments: Vec<Assignment>,
    ) -> Self {
        Self {
            procedure,
            categories,
            assignments,
        }
    }

    /// The procedure that produced this result.
    pub fn procedure(&self) -> Procedure {
        self.procedure
    }

    /// All categories, lowest first.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Assignments in alternative input order.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Gets the category of an alternative.
    pub fn category_of(&self, alternative: &str) -> Option<&Category> {
        self.assignments
            .iter()
            .find(|a| a.alternative_id.as_str() == alternative)
            .map(|a| &a.category)
    }

    /// Alternatives assigned to `category`, in input order.
    pub fn members(&self, category: &Category) -> Vec<&AlternativeId> {
        self.assignments
            .iter()
            .filter(|a| a.category.index() == category.index())
            .map(|a| &a.alternative_id)
            .collect()
    }

    /// "Sort" view: every category, lowest first, with its members.
    ///
    /// Empty categories are listed too.
    pub fn sort(&self) -> Vec<SortedCategory> {
        self.categories
            .iter()
            .map(|category| SortedCategory {
                category: category.clone(),
                alternatives: self.members(category).into_iter().cloned().collect(),
            })
            .collect()
    }

    /// "Rank" view: every alternative with its membership label.
    pub fn rank(&self) -> Vec<RankEntry> {
        self.assignments
            .iter()
            .map(|a| RankEntry {
                alternative_id: a.alternative_id.clone(),
                category: a.category.membership(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ProfileId;

    fn result() -> ClassificationResult {
        let categories = Category::all(&[ProfileId::new("b1").unwrap(), ProfileId::new("b2").unwrap()]);
        let assign = |id: &str, index: usize| Assignment {
            alternative_id: AlternativeId::new(id).unwrap(),
            category: categories[index].clone(),
        };
        let assignments = vec![assign("a1", 0), assign("a2", 1), assign("a3", 0)];
        ClassificationResult::new(Procedure::Pessimistic, categories.clone(), assignments)
    }

    #[test]
    fn category_of_finds_assignment() {
        let result = result();
        assert_eq!(result.category_of("a2").unwrap().index(), 1);
        assert!(result.category_of("a9").is_none());
    }

    #[test]
    fn sort_lists_every_category() {
        let sorted = result().sort();
        assert_eq!(sorted.len(), 3);
        let bottom: Vec<_> = sorted[0].alternatives.iter().map(|a| a.as_str()).collect();
        assert_eq!(bottom, vec!["a1", "a3"]);
        assert!(sorted[2].alternatives.is_empty());
    }

    #[test]
    fn rank_uses_membership_labels() {
        let rank = result().rank();
        let labels: Vec<_> = rank.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(labels, vec!["< b1", "∈ (b1, b2)", "< b1"]);
    }

    #[test]
    fn result_serializes_to_json() {
        let json = serde_json::to_string(&result()).unwrap();
        assert!(json.contains("\"procedure\":\"pessimistic\""));
        assert!(json.contains("\"assignments\""));
    }
}
