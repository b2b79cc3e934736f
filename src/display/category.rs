//! Category display formatting

use std::collections::BTreeMap;

use crate::models::{Category, Money};

/// Format categories with their limits and what has been spent so far
pub fn format_category_table(
    categories: &[Category],
    spent: &BTreeMap<String, Money>,
    currency_symbol: &str,
) -> String {
    if categories.is_empty() {
        return "No categories found!\n".to_string();
    }

    let name_width = categories
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<width$}  {:>14}  {:>14}\n",
        "Category",
        "Limit",
        "Spent",
        width = name_width
    ));
    output.push_str(&"-".repeat(name_width + 32));
    output.push('\n');

    for category in categories {
        let limit = if category.is_monitored() {
            category.limit.format_with_symbol(currency_symbol)
        } else {
            "(none)".to_string()
        };
        let spent = spent.get(&category.name).copied().unwrap_or_default();

        output.push_str(&format!(
            "{:<width$}  {:>14}  {:>14}\n",
            category.name,
            limit,
            spent.format_with_symbol(currency_symbol),
            width = name_width
        ));
    }

    output
}

/// Format one category's details
pub fn format_category_details(
    category: &Category,
    spent: Money,
    expense_count: usize,
    currency_symbol: &str,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Category: {}\n", category.name));
    if category.is_monitored() {
        output.push_str(&format!(
            "Limit:    {}\n",
            category.limit.format_with_symbol(currency_symbol)
        ));
    } else {
        output.push_str("Limit:    (none)\n");
    }
    output.push_str(&format!(
        "Spent:    {} across {} expense(s)\n",
        spent.format_with_symbol(currency_symbol),
        expense_count
    ));

    if category.is_monitored() {
        let remaining = category.limit - spent;
        if remaining.is_negative() {
            output.push_str(&format!(
                "Status:   over limit by {}\n",
                remaining.abs().format_with_symbol(currency_symbol)
            ));
        } else {
            output.push_str(&format!(
                "Status:   {} remaining\n",
                remaining.format_with_symbol(currency_symbol)
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table() {
        assert_eq!(
            format_category_table(&[], &BTreeMap::new(), "zł"),
            "No categories found!\n"
        );
    }

    #[test]
    fn test_table_rows() {
        let categories = vec![
            Category::with_limit("Food", Money::from_units(500)),
            Category::new("Gifts"),
        ];
        let mut spent = BTreeMap::new();
        spent.insert("Food".to_string(), Money::from_units(120));

        let table = format_category_table(&categories, &spent, "zł");
        let lines: Vec<_> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[2].starts_with("Food"));
        assert!(lines[2].contains("500.00 zł"));
        assert!(lines[2].contains("120.00 zł"));
        assert!(lines[3].contains("(none)"));
        assert!(lines[3].ends_with("0.00 zł"));
    }

    #[test]
    fn test_details_over_limit() {
        let category = Category::with_limit("Food", Money::from_units(500));
        let details = format_category_details(&category, Money::from_units(600), 2, "zł");

        assert!(details.contains("Limit:    500.00 zł"));
        assert!(details.contains("Spent:    600.00 zł across 2 expense(s)"));
        assert!(details.contains("over limit by 100.00 zł"));
    }

    #[test]
    fn test_details_unmonitored() {
        let category = Category::new("Gifts");
        let details = format_category_details(&category, Money::zero(), 0, "");

        assert!(details.contains("Limit:    (none)"));
        assert!(!details.contains("Status"));
    }
}
