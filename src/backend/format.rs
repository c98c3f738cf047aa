use chrono::{DateTime, NaiveDate, Utc};

/// Whole rupees with Indian digit grouping: `25000000 -> ₹2,50,00,000`.
pub fn format_inr(value: f64) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());
    format!("{}₹{}", sign, group_indian(&digits))
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Thousands grouping with at most three fraction digits.
pub fn format_number(value: f64) -> String {
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');
    let sign = if value < 0.0 && fixed.chars().any(|c| c != '0' && c != '.') { "-" } else { "" };
    if frac.is_empty() {
        format!("{}{}", sign, group_thousands(int_part))
    } else {
        format!("{}{}.{}", sign, group_thousands(int_part), frac)
    }
}

/// `2023-06-15` (or an RFC 3339 timestamp) as `15 Jun 2023`.
/// Anything unparseable is shown as-is.
pub fn format_date(raw: &str) -> String {
    let date_part = raw.split('T').next().unwrap_or(raw);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%-d %b %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

pub fn format_upload_date(at: &DateTime<Utc>) -> String {
    at.format("%d/%m/%Y").to_string()
}

pub fn format_file_size(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}
