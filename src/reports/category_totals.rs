//! Spending totals by category
//!
//! Every category of the taxonomy appears, including ones with no purchases.
//! Rows are ranked by total spending, largest first. The grand total is kept
//! beside the rows rather than ranked among them.

use serde::Serialize;

use crate::models::{Category, Ledger, Money};

/// Key used for the grand total when the report is flattened into pairs
pub const TOTAL_KEY: &str = "TOTAL";

/// Spending in one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    /// The category
    pub category: Category,
    /// Sum of the category's purchase prices
    pub total: Money,
    /// Number of stored purchases in the category
    pub purchase_count: usize,
    /// Share of the grand total, 0-100
    pub percentage: f64,
}

/// Spending totals for all categories
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotals {
    /// One row per category, largest total first (ties by category code)
    pub rows: Vec<CategoryTotal>,
    /// Sum over all categories
    pub total: Money,
}

impl CategoryTotals {
    /// Aggregate a ledger's purchases by category
    pub fn generate(ledger: &Ledger) -> Self {
        let mut rows: Vec<CategoryTotal> = Category::all()
            .iter()
            .map(|&category| {
                let (total, purchase_count) = ledger
                    .purchases_in(category)
                    .fold((Money::zero(), 0), |(sum, count), p| {
                        (sum.saturating_add(p.price), count + 1)
                    });
                CategoryTotal {
                    category,
                    total,
                    purchase_count,
                    percentage: 0.0,
                }
            })
            .collect();

        let total: Money = rows.iter().map(|r| r.total).sum();

        if !total.is_zero() {
            for row in &mut rows {
                row.percentage = (row.total.cents() as f64 / total.cents() as f64) * 100.0;
            }
        }

        rows.sort_by(|a, b| {
            b.total
                .cmp(&a.total)
                .then_with(|| a.category.code().cmp(&b.category.code()))
        });

        Self { rows, total }
    }

    /// Total for a single category
    pub fn get(&self, category: Category) -> Money {
        self.rows
            .iter()
            .find(|r| r.category == category)
            .map(|r| r.total)
            .unwrap_or_default()
    }

    /// Ranked `(category name, total)` pairs followed by `("TOTAL", total)`
    pub fn as_pairs(&self) -> Vec<(&'static str, Money)> {
        self.rows
            .iter()
            .map(|r| (r.category.name(), r.total))
            .chain(std::iter::once((TOTAL_KEY, self.total)))
            .collect()
    }

    /// Whether nothing has been spent in any category
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|r| r.purchase_count == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger_with(entries: &[(Category, &str)]) -> Ledger {
        let mut ledger = Ledger::new();
        ledger.add_income(Money::from_cents(1_000_000)).unwrap();
        for (category, entry) in entries {
            ledger.add_purchase(*category, entry).unwrap();
        }
        ledger
    }

    #[test]
    fn test_empty_ledger_lists_all_categories() {
        let totals = CategoryTotals::generate(&Ledger::new());

        assert_eq!(totals.rows.len(), 4);
        assert!(totals.rows.iter().all(|r| r.total.is_zero()));
        assert!(totals.total.is_zero());
        assert!(totals.is_empty());

        // Zero totals fall back to code order
        let order: Vec<_> = totals.rows.iter().map(|r| r.category).collect();
        assert_eq!(order, Category::all().to_vec());
    }

    #[test]
    fn test_totals_ranked_by_spending() {
        let totals = CategoryTotals::generate(&ledger_with(&[
            (Category::Food, "Milk $3.50"),
            (Category::Food, "Bread $2.25"),
            (Category::Clothes, "Jacket $89.99"),
            (Category::Other, "Stamps $0.99"),
        ]));

        let pairs = totals.as_pairs();
        assert_eq!(
            pairs,
            vec![
                ("CLOTHES", Money::from_cents(8999)),
                ("FOOD", Money::from_cents(575)),
                ("OTHER", Money::from_cents(99)),
                ("ENTERTAINMENT", Money::zero()),
                ("TOTAL", Money::from_cents(9673)),
            ]
        );
        assert_eq!(totals.get(Category::Food).cents(), 575);
        assert_eq!(totals.rows[1].purchase_count, 2);
    }

    #[test]
    fn test_total_equals_sum_of_categories() {
        let totals = CategoryTotals::generate(&ledger_with(&[
            (Category::Food, "A $1.01"),
            (Category::Clothes, "B $2.02"),
            (Category::Entertainment, "C $3.03"),
            (Category::Other, "D $4.04"),
            (Category::Other, "E $0.005"),
        ]));

        let sum: Money = Category::all().iter().map(|&c| totals.get(c)).sum();
        assert_eq!(totals.total, sum);
        assert_eq!(totals.total.cents(), 1011);
    }

    #[test]
    fn test_percentages() {
        let totals = CategoryTotals::generate(&ledger_with(&[
            (Category::Food, "A $30"),
            (Category::Other, "B $10"),
        ]));

        assert!((totals.rows[0].percentage - 75.0).abs() < f64::EPSILON);
        assert!((totals.rows[1].percentage - 25.0).abs() < f64::EPSILON);
    }
}
