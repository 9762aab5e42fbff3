//! Spending suggestion display formatting

use crate::models::{Money, SpendingSuggestion};

/// Format AI spending suggestions as a numbered list
pub fn format_suggestions(surplus: Money, suggestions: &[SpendingSuggestion]) -> String {
    let mut output = format!("Suggestions for your {} monthly surplus:\n\n", surplus);

    for (i, s) in suggestions.iter().enumerate() {
        output.push_str(&format!("{}. {}\n   {}\n\n", i + 1, s.suggestion, s.rationale));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_suggestions() {
        let suggestions = vec![
            SpendingSuggestion {
                suggestion: "Start a SIP".into(),
                rationale: "Compounds over time.".into(),
            },
            SpendingSuggestion {
                suggestion: "Weekend trek".into(),
                rationale: "Matches your interests.".into(),
            },
        ];

        let output = format_suggestions(Money::from_rupees(33_000), &suggestions);
        assert!(output.contains("₹33000.00"));
        assert!(output.contains("1. Start a SIP"));
        assert!(output.contains("2. Weekend trek"));
    }
}
