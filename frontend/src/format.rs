use chrono::NaiveDate;

pub const CURRENCY_SYMBOL: &str = "$";

fn format_with_commas(value: u64) -> String {
    let digits = value.to_string().chars().rev().collect::<Vec<char>>();
    let mut out = Vec::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    out.into_iter().rev().collect()
}

/// `-$1,234.50`. Amounts are rounded to the cent first.
pub fn format_money(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    format!(
        "{}{}{}.{:02}",
        sign,
        CURRENCY_SYMBOL,
        format_with_commas(cents / 100),
        cents % 100
    )
}

/// Signed label for list rows: `+ $50.00` for income, `- $12.00` for
/// expenses.
pub fn format_signed(amount: f64, positive: bool) -> String {
    let prefix = if positive { "+" } else { "-" };
    format!("{} {}", prefix, format_money(amount.abs()))
}

/// `Mar 1, 2024`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// `Mar 1`, used on chart axes.
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_gets_grouping_and_cents() {
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(20.0), "$20.00");
        assert_eq!(format_money(1234.5), "$1,234.50");
        assert_eq!(format_money(1_000_000.004), "$1,000,000.00");
        assert_eq!(format_money(-980.129), "-$980.13");
    }

    #[test]
    fn signed_amounts() {
        assert_eq!(format_signed(50.0, true), "+ $50.00");
        assert_eq!(format_signed(12.0, false), "- $12.00");
    }

    #[test]
    fn dates_are_human_readable() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(format_date(date), "Mar 1, 2024");
        assert_eq!(format_short_date(date), "Mar 1");
    }
}
