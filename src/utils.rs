// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{LedgerError, LedgerResult};

pub fn parse_date(s: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| LedgerError::InvalidDate(s.to_string()))
}

/// Largest absolute amount accepted for a single expense.
pub fn max_amount() -> Decimal {
    Decimal::new(1_000_000_000_000, 0)
}

/// Parses a user-entered amount, tolerating a currency symbol and
/// thousands separators as printed by [`fmt_money`]. Amounts beyond
/// [`max_amount`] are rejected.
pub fn parse_amount(s: &str, symbol: &str) -> LedgerResult<Decimal> {
    let cleaned: String = s
        .trim()
        .trim_start_matches(symbol)
        .chars()
        .filter(|c| *c != ',')
        .collect();
    cleaned
        .trim()
        .parse::<Decimal>()
        .ok()
        .filter(|d| d.abs() <= max_amount())
        .ok_or_else(|| LedgerError::InvalidAmount(s.to_string()))
}

/// Two decimals with thousands separators: `1234.5` -> `1,234.50`.
pub fn fmt_amount(d: &Decimal) -> String {
    let rounded = d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}{}.{}", sign, grouped, frac)
}

pub fn fmt_money(d: &Decimal, symbol: &str) -> String {
    format!("{}{}", symbol, fmt_amount(d))
}

/// Cuts `s` to at most `max` characters.
pub fn clip(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> anyhow::Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_get_grouped() {
        assert_eq!(fmt_amount(&Decimal::new(123456789, 2)), "1,234,567.89");
        assert_eq!(fmt_amount(&Decimal::new(2505, 1)), "250.50");
        assert_eq!(fmt_amount(&Decimal::new(-1000, 0)), "-1,000.00");
        assert_eq!(fmt_amount(&Decimal::ZERO), "0.00");
    }

    #[test]
    fn amount_parsing_strips_symbol_and_commas() {
        assert_eq!(parse_amount("₹1,234.50", "₹").unwrap(), Decimal::new(123450, 2));
        assert_eq!(parse_amount(" 42 ", "₹").unwrap(), Decimal::from(42));
        assert!(parse_amount("abc", "₹").is_err());
    }

    #[test]
    fn amount_parsing_rejects_out_of_range() {
        assert_eq!(
            parse_amount("1,000,000,000,000", "₹").unwrap(),
            max_amount()
        );
        assert!(matches!(
            parse_amount("1000000000000.01", "₹"),
            Err(LedgerError::InvalidAmount(_))
        ));
        assert!(parse_amount("79228162514264337593543950335", "₹").is_err());
        assert!(parse_amount("-79228162514264337593543950335", "₹").is_err());
    }

    #[test]
    fn date_must_be_iso() {
        assert!(parse_date("2024-01-15").is_ok());
        assert!(parse_date("15/01/2024").is_err());
        assert!(parse_date("2024-02-30").is_err());
    }

    #[test]
    fn clip_counts_chars() {
        assert_eq!(clip("चाय and snacks", 3), "चाय");
        assert_eq!(clip("short", 50), "short");
    }
}
