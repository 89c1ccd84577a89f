// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Food & Dining")]
    FoodDining,
    Transportation,
    Shopping,
    Entertainment,
    #[serde(rename = "Bills & Utilities")]
    BillsUtilities,
    Healthcare,
    Education,
    Groceries,
    Travel,
    Gifts,
    #[serde(rename = "Personal Care")]
    PersonalCare,
    Others,
}

impl Category {
    pub const ALL: [Category; 12] = [
        Category::FoodDining,
        Category::Transportation,
        Category::Shopping,
        Category::Entertainment,
        Category::BillsUtilities,
        Category::Healthcare,
        Category::Education,
        Category::Groceries,
        Category::Travel,
        Category::Gifts,
        Category::PersonalCare,
        Category::Others,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::FoodDining => "Food & Dining",
            Category::Transportation => "Transportation",
            Category::Shopping => "Shopping",
            Category::Entertainment => "Entertainment",
            Category::BillsUtilities => "Bills & Utilities",
            Category::Healthcare => "Healthcare",
            Category::Education => "Education",
            Category::Groceries => "Groceries",
            Category::Travel => "Travel",
            Category::Gifts => "Gifts",
            Category::PersonalCare => "Personal Care",
            Category::Others => "Others",
        }
    }

    /// Shell-friendly alias, e.g. `food-dining` for "Food & Dining".
    pub fn slug(self) -> String {
        self.label()
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|w| !w.is_empty())
            .map(str::to_ascii_lowercase)
            .collect::<Vec<_>>()
            .join("-")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = LedgerError;

    /// Accepts the display label (any case) or its slug.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        let lowered = needle.to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(needle) || c.slug() == lowered)
            .ok_or_else(|| LedgerError::UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    // Legacy files carry no id; the store renumbers zeros on open.
    #[serde(default)]
    pub id: u64,
    pub amount: Decimal,
    pub category: Category,
    pub description: String,
    pub date: NaiveDate,
    pub timestamp: NaiveDateTime,
}

impl Expense {
    /// Builds an unsaved record stamped with the current local time. The id
    /// is left at zero until the store assigns one.
    pub fn new(amount: Decimal, category: Category, description: &str, date: NaiveDate) -> Self {
        let description = if description.trim().is_empty() {
            format!("{} Expense", category)
        } else {
            description.to_string()
        };
        Self {
            id: 0,
            amount,
            category,
            description,
            date,
            timestamp: Local::now().naive_local(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_label_and_slug() {
        assert_eq!("Food & Dining".parse::<Category>().unwrap(), Category::FoodDining);
        assert_eq!("groceries".parse::<Category>().unwrap(), Category::Groceries);
        assert_eq!("personal-care".parse::<Category>().unwrap(), Category::PersonalCare);
        assert_eq!("bills-utilities".parse::<Category>().unwrap(), Category::BillsUtilities);
        assert!("Rent".parse::<Category>().is_err());
    }

    #[test]
    fn blank_description_defaults_to_category() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let e = Expense::new(Decimal::new(25050, 2), Category::Groceries, "  ", date);
        assert_eq!(e.description, "Groceries Expense");
        assert_eq!(e.id, 0);
    }

    #[test]
    fn category_serializes_as_label() {
        let s = serde_json::to_string(&Category::BillsUtilities).unwrap();
        assert_eq!(s, "\"Bills & Utilities\"");
    }
}
