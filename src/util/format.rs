//! Display formatting for prices and times.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format a peso amount: `₱` prefix, space-grouped thousands, two decimals,
/// leading minus for negatives. Non-finite input renders as zero.
pub fn format_peso(value: f64) -> String {
    if !value.is_finite() {
        return "₱0.00".to_owned();
    }
    let negative = value < 0.0;
    let fixed = format!("{:.2}", value.abs());
    let (int_part, dec_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if negative { "-" } else { "" };
    format!("{sign}₱{}.{dec_part}", group_thousands(int_part))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

/// Render `HH:MM` (optionally `HH:MM:SS`) as 12-hour time. Anything that
/// does not match the pattern passes through unchanged.
pub fn format_time_12h(time: &str) -> String {
    let Some((hours, minutes)) = parse_hm(time) else {
        return time.to_owned();
    };
    let am = hours < 12;
    let display_hours = match hours {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };
    format!("{display_hours}:{minutes} {}", if am { "AM" } else { "PM" })
}

fn parse_hm(time: &str) -> Option<(u32, &str)> {
    let mut parts = time.split(':');
    let hours = parts.next()?;
    let minutes = parts.next()?;
    let seconds = parts.next();
    if parts.next().is_some() {
        return None;
    }
    if hours.len() != 2 || minutes.len() != 2 {
        return None;
    }
    if let Some(secs) = seconds {
        if secs.len() != 2 || !secs.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
    }
    if !hours.chars().all(|c| c.is_ascii_digit())
        || !minutes.chars().all(|c| c.is_ascii_digit())
    {
        return None;
    }
    let hours: u32 = hours.parse().ok()?;
    Some((hours, minutes))
}
