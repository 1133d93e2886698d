//! HTML helper functions

/// Text for the event price badge, or `None` when the event is free
///
/// # Examples
/// ```ignore
/// price_badge(25.0, "EUR") // -> Some("25 EUR")
/// price_badge(0.0, "EUR")  // -> None
/// ```
pub fn price_badge(price: f64, currency: &str) -> Option<String> {
    if price > 0.0 {
        Some(format!("{} {}", price, currency))
    } else {
        None
    }
}

/// Truncate a string to a specified length
pub fn truncate(s: &str, length: usize, omission: Option<&str>) -> String {
    let omission = omission.unwrap_or("...");

    if s.chars().count() <= length {
        s.to_string()
    } else {
        let truncated: String = s
            .chars()
            .take(length.saturating_sub(omission.chars().count()))
            .collect();
        format!("{}{}", truncated.trim_end(), omission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_badge_hidden_when_free() {
        assert_eq!(price_badge(0.0, "USD"), None);
        assert_eq!(price_badge(-5.0, "USD"), None);
        assert_eq!(price_badge(f64::NAN, "USD"), None);
    }

    #[test]
    fn test_price_badge_text() {
        assert_eq!(price_badge(25.0, "USD").as_deref(), Some("25 USD"));
        assert_eq!(price_badge(19.99, "EUR").as_deref(), Some("19.99 EUR"));
        assert_eq!(price_badge(0.5, "GBP").as_deref(), Some("0.5 GBP"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 8, None), "Hello...");
        assert_eq!(truncate("Hi", 10, None), "Hi");
    }
}
