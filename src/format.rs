pub fn rupiah_millions(value: i64) -> String {
    let tenths = div_round_half_away(i128::from(value), 100_000);
    format!("Rp {}M", one_decimal(tenths))
}

pub fn rupiah_thousands(value: i64) -> String {
    format!("Rp {}K", div_round_half_away(i128::from(value), 1_000))
}

/// `num / den` rounded to the nearest integer, ties away from zero.
/// `den` must not be zero.
pub fn div_round_half_away(num: i128, den: i128) -> i128 {
    let magnitude = (2 * num.abs() + den.abs()) / (2 * den.abs());
    if (num < 0) != (den < 0) { -magnitude } else { magnitude }
}

/// Renders a count of tenths, `625` -> `62.5`.
pub fn one_decimal(tenths: i128) -> String {
    let sign = if tenths < 0 { "-" } else { "" };
    let abs = tenths.unsigned_abs();
    format!("{sign}{}.{}", abs / 10, abs % 10)
}

pub fn rupiah(value: i64) -> String {
    format!("Rp {}", group_thousands(value))
}

/// `1234567` -> `1,234,567`
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
