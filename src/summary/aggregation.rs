//! Expense aggregation by category.
//!
//! Expenses are grouped by the name of their category, not its ID, so two
//! categories with exactly the same name share a row. Names that only differ
//! in letter case get separate rows.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::expense::Expense;

/// The total and number of expenses for one category name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    /// The category name shared by the expenses in this row.
    pub name: String,
    /// The sum of the amounts.
    pub total: f64,
    /// The number of expenses.
    pub count: usize,
}

/// Totals across all rows of a category summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralSummary {
    /// The sum of all expenses.
    pub total: f64,
    /// The number of expenses.
    pub count: usize,
    /// The number of category rows.
    pub category_count: usize,
    /// `total` divided by `category_count`, or `None` when there are no rows.
    pub average_per_category: Option<f64>,
}

/// Groups `expenses` by category name.
///
/// # Returns
/// One row per distinct name in the order the names first appear in
/// `expenses`. Empty if there are no expenses.
pub fn summarize_by_category(expenses: &[Expense]) -> Vec<CategorySummary> {
    let mut rows: Vec<CategorySummary> = Vec::new();
    let mut row_index: HashMap<&str, usize> = HashMap::new();

    for expense in expenses {
        let name = expense.category.name.as_ref();

        match row_index.get(name) {
            Some(&index) => {
                rows[index].total += expense.amount;
                rows[index].count += 1;
            }
            None => {
                row_index.insert(name, rows.len());
                rows.push(CategorySummary {
                    name: name.to_owned(),
                    total: expense.amount,
                    count: 1,
                });
            }
        }
    }

    rows
}

impl GeneralSummary {
    /// Sum the rows of a category summary.
    pub fn from_rows(rows: &[CategorySummary]) -> Self {
        let total = rows.iter().map(|row| row.total).sum();
        let count = rows.iter().map(|row| row.count).sum();
        let category_count = rows.len();

        Self {
            total,
            count,
            category_count,
            average_per_category: (category_count > 0).then(|| total / category_count as f64),
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use crate::{
        category::{Category, CategoryName},
        expense::Expense,
    };

    use super::{CategorySummary, GeneralSummary, summarize_by_category};

    fn expense(id: i64, category_id: i64, category_name: &str, amount: f64) -> Expense {
        Expense {
            id,
            amount,
            category_id,
            category: Category {
                id: category_id,
                name: CategoryName::new_unchecked(category_name),
                description: None,
            },
            date: datetime!(2025-05-01 0:00 UTC),
            description: None,
            created_at: datetime!(2025-05-01 0:00 UTC),
            updated_at: datetime!(2025-05-01 0:00 UTC),
        }
    }

    fn row(name: &str, total: f64, count: usize) -> CategorySummary {
        CategorySummary {
            name: name.to_owned(),
            total,
            count,
        }
    }

    #[test]
    fn empty_input_gives_no_rows() {
        assert_eq!(summarize_by_category(&[]), vec![]);
    }

    #[test]
    fn rows_are_in_first_seen_order() {
        let expenses = [
            expense(1, 2, "Transport", 5.0),
            expense(2, 1, "Food", 10.0),
            expense(3, 2, "Transport", 2.5),
        ];

        let got = summarize_by_category(&expenses);

        assert_eq!(got, vec![row("Transport", 7.5, 2), row("Food", 10.0, 1)]);
    }

    #[test]
    fn totals_match_the_expenses() {
        let expenses = [
            expense(1, 1, "Food", 12.25),
            expense(2, 2, "Health", 40.0),
            expense(3, 1, "Food", 7.75),
            expense(4, 3, "Unknown", 1.0),
        ];

        let got = summarize_by_category(&expenses);

        let total: f64 = got.iter().map(|row| row.total).sum();
        let count: usize = got.iter().map(|row| row.count).sum();
        assert_eq!(total, expenses.iter().map(|expense| expense.amount).sum::<f64>());
        assert_eq!(count, expenses.len());
    }

    #[test]
    fn same_input_gives_same_rows() {
        let expenses = [
            expense(1, 1, "Food", 3.0),
            expense(2, 2, "Fun", 4.0),
            expense(3, 1, "Food", 5.0),
        ];

        assert_eq!(
            summarize_by_category(&expenses),
            summarize_by_category(&expenses)
        );
    }

    #[test]
    fn case_variants_are_separate_rows() {
        let expenses = [expense(1, 1, "Food", 3.0), expense(2, 2, "food", 4.0)];

        let got = summarize_by_category(&expenses);

        assert_eq!(got, vec![row("Food", 3.0, 1), row("food", 4.0, 1)]);
    }

    #[test]
    fn categories_with_identical_names_share_a_row() {
        let expenses = [expense(1, 1, "Food", 3.0), expense(2, 2, "Food", 4.0)];

        let got = summarize_by_category(&expenses);

        assert_eq!(got, vec![row("Food", 7.0, 2)]);
    }

    #[test]
    fn general_summary_averages_over_rows() {
        let rows = [row("Food", 30.0, 3), row("Fun", 10.0, 1)];

        let got = GeneralSummary::from_rows(&rows);

        assert_eq!(
            got,
            GeneralSummary {
                total: 40.0,
                count: 4,
                category_count: 2,
                average_per_category: Some(20.0),
            }
        );
    }

    #[test]
    fn general_summary_of_nothing_has_no_average() {
        let got = GeneralSummary::from_rows(&[]);

        assert_eq!(got.total, 0.0);
        assert_eq!(got.count, 0);
        assert_eq!(got.average_per_category, None);
    }
}
