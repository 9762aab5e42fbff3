//! Budget display formatting

use tabled::{settings::Style, Table, Tabled};

use crate::models::{Budget, Money};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format a budget as a table plus an income/expenses/surplus summary
pub fn format_budget(budget: &Budget) -> String {
    let mut output = String::new();

    if budget.expenses.is_empty() {
        output.push_str("No expenses recorded.\n");
    } else {
        let rows: Vec<ExpenseRow> = budget
            .expenses
            .iter()
            .map(|item| ExpenseRow {
                category: item.category.clone(),
                amount: item.amount.to_string(),
            })
            .collect();

        let mut table = Table::new(rows);
        table.with(Style::sharp());
        output.push_str(&table.to_string());
        output.push('\n');
    }

    output.push('\n');
    output.push_str(&format_summary(budget.income, budget.total_expenses()));
    output
}

/// Format the income/expenses/surplus summary lines
pub fn format_summary(income: Money, total_expenses: Money) -> String {
    let surplus = income - total_expenses;
    let surplus_note = if surplus.is_negative() {
        " (over budget)"
    } else {
        ""
    };

    format!(
        "Income:   {:>12}\nExpenses: {:>12}\nSurplus:  {:>12}{}\n",
        income.to_string(),
        total_expenses.to_string(),
        surplus.to_string(),
        surplus_note
    )
}
