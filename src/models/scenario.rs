//! Scenario model
//!
//! A scenario is a single hypothetical budget-impacting event fed to the
//! optimizer. The numeric payload means something different per goal, so each
//! variant carries its own field: a percentage for a rent increase, an
//! absolute savings target, or an absolute new expense amount.

use serde::{Deserialize, Serialize};

use super::money::Money;
use crate::error::{QbudgetError, QbudgetResult};

/// A what-if scenario to simulate against a budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "goal", rename_all = "snake_case")]
pub enum Scenario {
    /// The "Housing" line grows by this percentage (10.0 means +10%)
    #[serde(rename = "handle_rent_increase")]
    RentIncrease { percent: f64 },

    /// Reach this absolute monthly savings target
    IncreaseSavings { target: Money },

    /// Absorb a new monthly expense of this size
    #[serde(rename = "handle_new_expense")]
    NewExpense { amount: Money },
}

impl Scenario {
    /// Parse a scenario from CLI input: a goal keyword plus an amount string
    ///
    /// The amount is a percentage for `rent-increase` and a rupee amount for
    /// the other goals. The amount must be a finite number; its sign is not
    /// validated (a non-positive target is a valid, mostly no-op scenario).
    pub fn parse(goal: &str, amount: &str) -> QbudgetResult<Self> {
        match goal {
            "rent-increase" | "rent" => {
                let percent: f64 = amount.trim().parse().map_err(|_| {
                    QbudgetError::Validation(format!("Invalid percentage: {}", amount))
                })?;
                if !percent.is_finite() {
                    return Err(QbudgetError::Validation(format!(
                        "Percentage must be finite: {}",
                        amount
                    )));
                }
                Ok(Self::RentIncrease { percent })
            }
            "savings" | "increase-savings" => {
                let target = Money::parse(amount)
                    .map_err(|e| QbudgetError::Validation(e.to_string()))?;
                Ok(Self::IncreaseSavings { target })
            }
            "new-expense" | "expense" => {
                let amount = Money::parse(amount)
                    .map_err(|e| QbudgetError::Validation(e.to_string()))?;
                Ok(Self::NewExpense { amount })
            }
            other => Err(QbudgetError::Validation(format!(
                "Unknown scenario goal '{}' (expected rent-increase, savings, or new-expense)",
                other
            ))),
        }
    }

    /// Short human-readable description of the scenario
    pub fn describe(&self) -> String {
        match self {
            Self::RentIncrease { percent } => format!("Rent increase of {}%", percent),
            Self::IncreaseSavings { target } => {
                format!("Increase monthly savings to {}", target)
            }
            Self::NewExpense { amount } => format!("New monthly expense of {}", amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rent_increase() {
        let scenario = Scenario::parse("rent-increase", "10").unwrap();
        assert_eq!(scenario, Scenario::RentIncrease { percent: 10.0 });
    }

    #[test]
    fn test_parse_savings_target() {
        let scenario = Scenario::parse("savings", "40000").unwrap();
        assert_eq!(
            scenario,
            Scenario::IncreaseSavings {
                target: Money::from_rupees(40_000)
            }
        );
    }

    #[test]
    fn test_parse_new_expense() {
        let scenario = Scenario::parse("new-expense", "8000").unwrap();
        assert_eq!(
            scenario,
            Scenario::NewExpense {
                amount: Money::from_rupees(8_000)
            }
        );
    }

    #[test]
    fn test_parse_rejects_unknown_goal() {
        let err = Scenario::parse("win-lottery", "1000").unwrap_err();
        assert!(matches!(err, QbudgetError::Validation(_)));
    }

    #[test]
    fn test_parse_rejects_non_finite_percent() {
        assert!(Scenario::parse("rent-increase", "inf").is_err());
        assert!(Scenario::parse("rent-increase", "NaN").is_err());
    }

    #[test]
    fn test_serde_goal_tags() {
        let json = serde_json::to_string(&Scenario::RentIncrease { percent: 10.0 }).unwrap();
        assert!(json.contains("handle_rent_increase"));

        let json = serde_json::to_string(&Scenario::IncreaseSavings {
            target: Money::from_rupees(40_000),
        })
        .unwrap();
        assert!(json.contains("increase_savings"));

        let json = serde_json::to_string(&Scenario::NewExpense {
            amount: Money::from_rupees(8_000),
        })
        .unwrap();
        assert!(json.contains("handle_new_expense"));
    }
}
