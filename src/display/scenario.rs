//! Scenario result display formatting
//!
//! Shows a before/after comparison of the expense list and the optimizer's
//! insight strings.

use tabled::{settings::Style, Table, Tabled};

use crate::models::{Budget, Money};
use crate::services::optimizer::OptimizationResult;

#[derive(Tabled)]
struct ComparisonRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Before")]
    before: String,
    #[tabled(rename = "After")]
    after: String,
    #[tabled(rename = "Change")]
    change: String,
}

/// Format an optimization result against the budget it was computed from
pub fn format_optimization(budget: &Budget, result: &OptimizationResult) -> String {
    let mut rows = Vec::with_capacity(result.optimized_expenses.len());

    // The optimizer preserves positions and appends at most one new line, so
    // items align by index with the input list.
    for (i, item) in result.optimized_expenses.iter().enumerate() {
        let before = budget.expenses.get(i).map(|original| original.amount);
        let change = match before {
            Some(amount) => item.amount - amount,
            None => item.amount,
        };

        rows.push(ComparisonRow {
            category: item.category.clone(),
            before: before.map(|a| a.to_string()).unwrap_or_else(|| "-".into()),
            after: item.amount.to_string(),
            change: format_change(change),
        });
    }

    let mut table = Table::new(rows);
    table.with(Style::sharp());

    let new_total: Money = result.optimized_expenses.iter().map(|i| i.amount).sum();

    let mut output = table.to_string();
    output.push_str("\n\n");
    output.push_str(&super::budget::format_summary(budget.income, new_total));

    if !result.insights.is_empty() {
        output.push_str("\nInsights:\n");
        for insight in &result.insights {
            output.push_str(&format!("  - {}\n", insight));
        }
    }

    output
}

fn format_change(change: Money) -> String {
    if change.is_positive() {
        format!("+{}", change)
    } else if change.is_negative() {
        change.to_string()
    } else {
        "-".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Scenario;
    use crate::services::optimizer::ScenarioOptimizer;

    #[test]
    fn test_format_optimization_shows_changes_and_insights() {
        let budget = Budget::starter();
        let optimizer = ScenarioOptimizer::default();
        let result = optimizer.optimize(&budget, &Scenario::RentIncrease { percent: 10.0 });

        let output = format_optimization(&budget, &result);
        assert!(output.contains("Housing"));
        assert!(output.contains("₹27500.00"));
        assert!(output.contains("+₹2500.00"));
        assert!(output.contains("Insights:"));
        assert!(output.contains("rent hike"));
    }

    #[test]
    fn test_format_optimization_marks_appended_line() {
        let budget = Budget::starter();
        let optimizer = ScenarioOptimizer::default();
        let result = optimizer.optimize(
            &budget,
            &Scenario::NewExpense {
                amount: Money::from_rupees(8_000),
            },
        );

        let output = format_optimization(&budget, &result);
        assert!(output.contains("New Monthly Expense"));
        assert!(output.contains("+₹8000.00"));
    }
}
