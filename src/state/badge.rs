// Badge value formatting

use std::fmt;

/// What a badge was asked to show: free text or a number.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum BadgeValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
}

impl From<&str> for BadgeValue {
    fn from(s: &str) -> Self {
        if s.is_empty() { Self::Empty } else { Self::Text(s.to_string()) }
    }
}

impl From<String> for BadgeValue {
    fn from(s: String) -> Self {
        if s.is_empty() { Self::Empty } else { Self::Text(s) }
    }
}

impl From<f64> for BadgeValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<u32> for BadgeValue {
    fn from(n: u32) -> Self {
        Self::Number(n as f64)
    }
}

impl From<i64> for BadgeValue {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl<T: Into<BadgeValue>> From<Option<T>> for BadgeValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or_default()
    }
}

/// Display form of a badge value after applying the max cap.
#[derive(Clone, Debug, PartialEq)]
pub enum BadgeText {
    Empty,
    /// Non-numeric text, shown verbatim.
    Text(String),
    Number(f64),
    /// Number above the cap, shown as `{max}+`.
    Overflow(u32),
}

impl BadgeText {
    /// Whether the number block is rendered. Empty, zero and NaN values are hidden.
    pub fn is_visible(&self) -> bool {
        match self {
            Self::Empty => false,
            Self::Text(s) => !s.is_empty(),
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Overflow(_) => true,
        }
    }
}

impl fmt::Display for BadgeText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Overflow(max) => write!(f, "{max}+"),
        }
    }
}

fn cap(n: f64, max_value: u32) -> BadgeText {
    if n > max_value as f64 {
        BadgeText::Overflow(max_value)
    } else {
        BadgeText::Number(n)
    }
}

/// Text that parses as a number is treated as that number; anything else passes through.
pub fn format_value(value: &BadgeValue, max_value: u32) -> BadgeText {
    match value {
        BadgeValue::Empty => BadgeText::Empty,
        BadgeValue::Number(n) if n.is_nan() => BadgeText::Number(*n),
        BadgeValue::Number(n) => cap(*n, max_value),
        BadgeValue::Text(s) if s.is_empty() => BadgeText::Empty,
        // Blank text counts as zero.
        BadgeValue::Text(s) if s.trim().is_empty() => BadgeText::Number(0.0),
        BadgeValue::Text(s) => match s.trim().parse::<f64>() {
            Ok(n) if !n.is_nan() => cap(n, max_value),
            _ => BadgeText::Text(s.clone()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_over_max_value() {
        let t = format_value(&BadgeValue::from("10"), 9);
        assert_eq!(t, BadgeText::Overflow(9));
        assert_eq!(t.to_string(), "9+");
        assert_eq!(format_value(&BadgeValue::from(150u32), 99).to_string(), "99+");
    }

    #[test]
    fn test_within_max_value() {
        assert_eq!(format_value(&BadgeValue::from("9"), 9).to_string(), "9");
        assert_eq!(format_value(&BadgeValue::from(" 42 "), 99).to_string(), "42");
        assert_eq!(format_value(&BadgeValue::from(1.5), 99).to_string(), "1.5");
    }

    #[test]
    fn test_text_passthrough() {
        let t = format_value(&BadgeValue::from("new"), 99);
        assert_eq!(t, BadgeText::Text("new".into()));
        assert!(t.is_visible());
        assert_eq!(t.to_string(), "new");
    }

    #[test]
    fn test_empty_hidden() {
        let t = format_value(&BadgeValue::default(), 99);
        assert_eq!(t, BadgeText::Empty);
        assert!(!t.is_visible());
        assert_eq!(t.to_string(), "");
        assert_eq!(format_value(&BadgeValue::from(None::<u32>), 99), BadgeText::Empty);
        assert!(!format_value(&BadgeValue::from("   "), 99).is_visible());
    }

    #[test]
    fn test_zero_hidden() {
        assert!(!format_value(&BadgeValue::from("0"), 99).is_visible());
        assert!(!format_value(&BadgeValue::from(0u32), 99).is_visible());
        assert!(format_value(&BadgeValue::from(-3i64), 99).is_visible());
    }
}
