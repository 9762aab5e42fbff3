//! Scenario budget reallocator
//!
//! Given a budget and a what-if scenario, computes a reallocated expense list
//! plus a list of human-readable insight strings describing what changed.
//! This is a pure function of its inputs: no storage, no network, no shared
//! state. The caller's budget is never mutated; all work happens on an owned
//! copy of the expense list.
//!
//! The reallocation is a fixed proportional heuristic, not a real optimizer:
//! "flexible" categories absorb the hit proportionally to their size, capped
//! at 80% of each line's value.

use crate::models::{Budget, BudgetItem, Money, Scenario};

/// Categories eligible for automatic reduction, unless overridden
pub const DEFAULT_FLEXIBLE_CATEGORIES: [&str; 4] =
    ["Entertainment", "Food", "Personal Care", "Transportation"];

/// Category name used for the expense line appended by a NewExpense scenario
pub const NEW_EXPENSE_CATEGORY: &str = "New Monthly Expense";

/// Fraction of a single flexible line that may be taken in one pass
const PER_ITEM_CAP: f64 = 0.8;

/// Result of running a scenario against a budget
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationResult {
    /// The reallocated expense list (same shape as the input, plus at most
    /// one appended line for NewExpense scenarios)
    pub optimized_expenses: Vec<BudgetItem>,
    /// Human-readable descriptions of each change, in application order
    pub insights: Vec<String>,
}

/// Outcome of the flexible-reduction sub-algorithm
struct FlexibleReduction {
    expenses: Vec<BudgetItem>,
    insights: Vec<String>,
}

/// The scenario reallocator, bound to a set of flexible category names
///
/// Category names are matched by exact, case-sensitive equality. The set is
/// injected at construction so tests and user settings can vary it.
#[derive(Debug, Clone)]
pub struct ScenarioOptimizer {
    flexible_categories: Vec<String>,
}

impl Default for ScenarioOptimizer {
    fn default() -> Self {
        Self::new(
            DEFAULT_FLEXIBLE_CATEGORIES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }
}

impl ScenarioOptimizer {
    /// Create an optimizer with a custom flexible-category set
    pub fn new(flexible_categories: Vec<String>) -> Self {
        Self {
            flexible_categories,
        }
    }

    /// Run a scenario against a budget
    ///
    /// Deterministic: identical inputs always produce identical output.
    /// Exactly one goal branch runs per call; the income-vs-expenses check at
    /// the end runs unconditionally.
    pub fn optimize(&self, budget: &Budget, scenario: &Scenario) -> OptimizationResult {
        let mut expenses = budget.expenses.clone();
        let mut insights = Vec::new();

        match scenario {
            Scenario::RentIncrease { percent } => {
                if let Some(item) = expenses.iter_mut().find(|i| i.category == "Housing") {
                    let increase = item.amount.percent_floor(*percent);
                    item.amount += increase;
                    insights.push(format!(
                        "Housing cost increased by {} due to a {}% rent hike.",
                        increase, percent
                    ));

                    let reduction = self.reduce_flexible_spending(&expenses, increase);
                    expenses = reduction.expenses;
                    insights.extend(reduction.insights);
                } else {
                    insights.push(
                        "Could not find 'Housing' category to apply rent increase.".to_string(),
                    );
                }
            }

            Scenario::IncreaseSavings { target } => {
                let current_savings = budget.surplus();
                let required_reduction = *target - current_savings;
                if required_reduction.is_positive() {
                    insights.push(format!(
                        "To reach your goal of saving {}, you need to reduce spending by {}.",
                        target, required_reduction
                    ));
                    let reduction = self.reduce_flexible_spending(&expenses, required_reduction);
                    expenses = reduction.expenses;
                    insights.extend(reduction.insights);
                } else {
                    insights.push(format!(
                        "You are already meeting your savings goal of {}.",
                        target
                    ));
                }
            }

            Scenario::NewExpense { amount } => {
                expenses.push(BudgetItem::new(NEW_EXPENSE_CATEGORY, *amount));
                insights.push(format!("Added a new expense of {}.", amount));

                let reduction = self.reduce_flexible_spending(&expenses, *amount);
                expenses = reduction.expenses;
                insights.extend(reduction.insights);
            }
        }

        let new_total: Money = expenses.iter().map(|i| i.amount).sum();
        if (budget.income - new_total).is_negative() {
            insights.push(
                "Warning: Your optimized expenses exceed your income. \
                 Further adjustments are needed."
                    .to_string(),
            );
        }

        OptimizationResult {
            optimized_expenses: expenses,
            insights,
        }
    }

    fn is_flexible(&self, item: &BudgetItem) -> bool {
        self.flexible_categories.iter().any(|c| c == &item.category)
    }

    /// Trim flexible lines to absorb `amount_to_reduce`
    ///
    /// Each flexible line gives up at most: 80% of its own value, its
    /// proportional share of the target, and whatever is still needed.
    /// A zero-or-negative target is a no-op. The 80% cap means a line is
    /// never reduced to zero, and full offset is not guaranteed even when the
    /// flexible total covers the target.
    fn reduce_flexible_spending(
        &self,
        expenses: &[BudgetItem],
        amount_to_reduce: Money,
    ) -> FlexibleReduction {
        let mut expenses = expenses.to_vec();
        let mut insights = Vec::new();
        let mut total_reduction = Money::zero();

        let flexible_indices: Vec<usize> = expenses
            .iter()
            .enumerate()
            .filter(|(_, item)| self.is_flexible(item))
            .map(|(i, _)| i)
            .collect();

        let total_flexible: Money = flexible_indices.iter().map(|&i| expenses[i].amount).sum();

        if total_flexible < amount_to_reduce {
            insights.push(format!(
                "Unable to fully offset {} from flexible categories alone. \
                 You may need to review fixed expenses.",
                amount_to_reduce
            ));
        }

        let mut remaining = amount_to_reduce;

        for &i in &flexible_indices {
            if !remaining.is_positive() {
                break;
            }

            let item_amount = expenses[i].amount;
            let proportion = if total_flexible.is_positive() {
                item_amount.paise() as f64 / total_flexible.paise() as f64
            } else {
                0.0
            };

            let cap = item_amount.mul_f64_floor(PER_ITEM_CAP);
            let share = amount_to_reduce.mul_f64_floor(proportion);
            let reduction = cap.min(share).min(remaining);

            if reduction.is_positive() {
                expenses[i].amount -= reduction;
                total_reduction += reduction;
                remaining -= reduction;
                insights.push(format!("Reduced {} by {}.", expenses[i].category, reduction));
            }
        }

        if total_reduction.is_positive() {
            insights.push(format!(
                "Total spending was automatically reduced by {} to accommodate the scenario.",
                total_reduction
            ));
        }

        FlexibleReduction { expenses, insights }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total(expenses: &[BudgetItem]) -> Money {
        expenses.iter().map(|i| i.amount).sum()
    }

    fn amount_of<'a>(expenses: &'a [BudgetItem], category: &str) -> Money {
        expenses
            .iter()
            .find(|i| i.category == category)
            .map(|i| i.amount)
            .unwrap_or_else(|| panic!("category {} missing", category))
    }

    #[test]
    fn test_rent_increase_bumps_housing_and_trims_flexible() {
        let budget = Budget::starter();
        let optimizer = ScenarioOptimizer::default();
        let result = optimizer.optimize(&budget, &Scenario::RentIncrease { percent: 10.0 });

        // Housing 25000 + 10% = 27500
        assert_eq!(
            amount_of(&result.optimized_expenses, "Housing"),
            Money::from_rupees(27_500)
        );
        assert!(result.insights[0].contains("₹2500.00"));
        assert!(result.insights[0].contains("10% rent hike"));

        // Flexible lines give up their (floored) proportional shares of 2500
        // out of a 23000 flexible total
        assert_eq!(
            amount_of(&result.optimized_expenses, "Transportation").paise(),
            500_000 - 54_347
        );
        assert_eq!(
            amount_of(&result.optimized_expenses, "Food").paise(),
            1_000_000 - 108_695
        );
        assert_eq!(
            amount_of(&result.optimized_expenses, "Entertainment").paise(),
            500_000 - 54_347
        );
        assert_eq!(
            amount_of(&result.optimized_expenses, "Personal Care").paise(),
            300_000 - 32_608
        );

        // Cumulative reduction never exceeds the increase
        let reduced = Money::from_rupees(67_000) + Money::from_rupees(2_500)
            - total(&result.optimized_expenses);
        assert!(reduced <= Money::from_rupees(2_500));
        assert!(result
            .insights
            .last()
            .unwrap()
            .contains("automatically reduced"));

        // Fixed lines untouched
        assert_eq!(
            amount_of(&result.optimized_expenses, "Utilities"),
            Money::from_rupees(5_000)
        );
    }

    #[test]
    fn test_rent_increase_without_housing_category() {
        let mut budget = Budget::new(Money::from_rupees(50_000));
        budget.upsert_expense("Food", Money::from_rupees(10_000));

        let optimizer = ScenarioOptimizer::default();
        let result = optimizer.optimize(&budget, &Scenario::RentIncrease { percent: 10.0 });

        assert_eq!(
            result.insights,
            vec!["Could not find 'Housing' category to apply rent increase.".to_string()]
        );
        assert_eq!(result.optimized_expenses, budget.expenses);
    }

    #[test]
    fn test_increase_savings_reduces_toward_target() {
        let budget = Budget::starter(); // income 100000, expenses 67000, surplus 33000
        let optimizer = ScenarioOptimizer::default();
        let result = optimizer.optimize(
            &budget,
            &Scenario::IncreaseSavings {
                target: Money::from_rupees(40_000),
            },
        );

        // Required reduction is 7000
        assert!(result.insights[0].contains("₹7000.00"));

        let new_total = total(&result.optimized_expenses);
        assert!(new_total <= Money::from_rupees(67_000));

        // Surplus moves toward the target by exactly the amount reduced
        let reduced = Money::from_rupees(67_000) - new_total;
        assert_eq!(budget.income - new_total, Money::from_rupees(33_000) + reduced);
        assert!(reduced <= Money::from_rupees(7_000));
    }

    #[test]
    fn test_increase_savings_already_met() {
        let budget = Budget::starter(); // surplus 33000
        let optimizer = ScenarioOptimizer::default();
        let result = optimizer.optimize(
            &budget,
            &Scenario::IncreaseSavings {
                target: Money::from_rupees(30_000),
            },
        );

        assert_eq!(result.optimized_expenses, budget.expenses);
        assert_eq!(result.insights.len(), 1);
        assert!(result.insights[0].contains("already meeting your savings goal"));
    }

    #[test]
    fn test_new_expense_appends_line_and_reduces() {
        let budget = Budget::starter();
        let optimizer = ScenarioOptimizer::default();
        let result = optimizer.optimize(
            &budget,
            &Scenario::NewExpense {
                amount: Money::from_rupees(8_000),
            },
        );

        let appended = result.optimized_expenses.last().unwrap();
        assert_eq!(appended.category, NEW_EXPENSE_CATEGORY);
        assert_eq!(appended.amount, Money::from_rupees(8_000));
        assert_eq!(result.optimized_expenses.len(), budget.expenses.len() + 1);

        assert!(result.insights[0].contains("Added a new expense of ₹8000.00."));

        // Flexible reduction was invoked with the full expense amount
        let reduced = total(&budget.expenses) + Money::from_rupees(8_000)
            - total(&result.optimized_expenses);
        assert!(reduced.is_positive());
        assert!(reduced <= Money::from_rupees(8_000));
    }

    #[test]
    fn test_insufficient_flexible_funds_warns_and_caps() {
        let mut budget = Budget::new(Money::from_rupees(50_000));
        budget.upsert_expense("Housing", Money::from_rupees(20_000));
        budget.upsert_expense("Food", Money::from_rupees(1_000));

        let optimizer = ScenarioOptimizer::default();
        let result = optimizer.optimize(
            &budget,
            &Scenario::NewExpense {
                amount: Money::from_rupees(5_000),
            },
        );

        assert!(result
            .insights
            .iter()
            .any(|i| i.contains("Unable to fully offset ₹5000.00")));

        // Food is trimmed to exactly 80% of its original value
        assert_eq!(
            amount_of(&result.optimized_expenses, "Food"),
            Money::from_rupees(200)
        );
    }

    #[test]
    fn test_over_income_warning_is_last_insight() {
        let mut budget = Budget::new(Money::zero());
        budget.upsert_expense("Food", Money::from_rupees(1_000));

        let optimizer = ScenarioOptimizer::default();
        let result = optimizer.optimize(
            &budget,
            &Scenario::NewExpense {
                amount: Money::from_rupees(500),
            },
        );

        assert!(result
            .insights
            .last()
            .unwrap()
            .starts_with("Warning: Your optimized expenses exceed your income."));
    }

    #[test]
    fn test_no_over_income_warning_within_income() {
        let budget = Budget::starter();
        let optimizer = ScenarioOptimizer::default();
        let result = optimizer.optimize(
            &budget,
            &Scenario::NewExpense {
                amount: Money::from_rupees(1_000),
            },
        );

        assert!(!result.insights.iter().any(|i| i.starts_with("Warning:")));
    }

    #[test]
    fn test_per_item_cap_never_zeroes_a_line() {
        // One tiny flexible line against a huge target: it loses exactly 80%
        let mut budget = Budget::new(Money::from_rupees(100_000));
        budget.upsert_expense("Food", Money::from_rupees(100));

        let optimizer = ScenarioOptimizer::default();
        let result = optimizer.optimize(
            &budget,
            &Scenario::NewExpense {
                amount: Money::from_rupees(50_000),
            },
        );

        assert_eq!(
            amount_of(&result.optimized_expenses, "Food"),
            Money::from_rupees(20)
        );
    }

    #[test]
    fn test_negative_reduction_target_is_noop() {
        // A negative savings target makes the required reduction negative
        let budget = Budget::starter();
        let optimizer = ScenarioOptimizer::default();
        let result = optimizer.optimize(
            &budget,
            &Scenario::IncreaseSavings {
                target: Money::from_rupees(-5_000),
            },
        );

        assert_eq!(result.optimized_expenses, budget.expenses);
        assert_eq!(result.insights.len(), 1);
    }

    #[test]
    fn test_determinism() {
        let budget = Budget::starter();
        let optimizer = ScenarioOptimizer::default();
        let scenario = Scenario::RentIncrease { percent: 7.5 };

        let a = optimizer.optimize(&budget, &scenario);
        let b = optimizer.optimize(&budget, &scenario);
        assert_eq!(a, b);
    }

    #[test]
    fn test_input_budget_is_not_mutated() {
        let budget = Budget::starter();
        let before = budget.clone();

        let optimizer = ScenarioOptimizer::default();
        optimizer.optimize(&budget, &Scenario::RentIncrease { percent: 10.0 });
        optimizer.optimize(
            &budget,
            &Scenario::NewExpense {
                amount: Money::from_rupees(8_000),
            },
        );

        assert_eq!(budget, before);
    }

    #[test]
    fn test_all_original_categories_preserved() {
        let budget = Budget::starter();
        let optimizer = ScenarioOptimizer::default();

        for scenario in [
            Scenario::RentIncrease { percent: 10.0 },
            Scenario::IncreaseSavings {
                target: Money::from_rupees(40_000),
            },
            Scenario::NewExpense {
                amount: Money::from_rupees(8_000),
            },
        ] {
            let result = optimizer.optimize(&budget, &scenario);
            for item in &budget.expenses {
                assert!(result
                    .optimized_expenses
                    .iter()
                    .any(|i| i.category == item.category));
            }
        }
    }

    #[test]
    fn test_flexible_matching_is_case_sensitive() {
        let mut budget = Budget::new(Money::from_rupees(50_000));
        budget.upsert_expense("food", Money::from_rupees(10_000));

        let optimizer = ScenarioOptimizer::default();
        let result = optimizer.optimize(
            &budget,
            &Scenario::NewExpense {
                amount: Money::from_rupees(1_000),
            },
        );

        // "food" is not "Food": nothing is flexible, nothing is reduced
        assert_eq!(
            amount_of(&result.optimized_expenses, "food"),
            Money::from_rupees(10_000)
        );
        assert!(result
            .insights
            .iter()
            .any(|i| i.contains("Unable to fully offset")));
    }

    #[test]
    fn test_custom_flexible_set() {
        let budget = Budget::starter();
        let optimizer = ScenarioOptimizer::new(vec!["Utilities".to_string()]);
        let result = optimizer.optimize(
            &budget,
            &Scenario::NewExpense {
                amount: Money::from_rupees(1_000),
            },
        );

        // Only Utilities absorbs the hit; the default flexible set is untouched
        assert!(amount_of(&result.optimized_expenses, "Utilities") < Money::from_rupees(5_000));
        assert_eq!(
            amount_of(&result.optimized_expenses, "Food"),
            Money::from_rupees(10_000)
        );
        assert_eq!(
            amount_of(&result.optimized_expenses, "Entertainment"),
            Money::from_rupees(5_000)
        );
    }

    #[test]
    fn test_zero_flexible_total_reduces_nothing() {
        let mut budget = Budget::new(Money::from_rupees(10_000));
        budget.upsert_expense("Housing", Money::from_rupees(5_000));

        let optimizer = ScenarioOptimizer::default();
        let result = optimizer.optimize(
            &budget,
            &Scenario::NewExpense {
                amount: Money::from_rupees(1_000),
            },
        );

        // No flexible lines: warning plus the appended expense, no reductions
        assert_eq!(
            amount_of(&result.optimized_expenses, "Housing"),
            Money::from_rupees(5_000)
        );
        assert!(!result.insights.iter().any(|i| i.starts_with("Reduced ")));
    }
}
