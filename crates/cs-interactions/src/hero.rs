//! Hero section timing helpers.

pub const HERO_ENTRY_TRANSITION: &str = "all 1s cubic-bezier(0.25, 0.46, 0.45, 0.94)";

/// Inline style pair for the hero wrapper before and after the entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroEntryFrame {
    pub opacity: &'static str,
    pub transform: &'static str,
}

impl HeroEntryFrame {
    pub const HIDDEN: HeroEntryFrame = HeroEntryFrame {
        opacity: "0",
        transform: "translateY(50px) scale(0.95)",
    };

    pub const SHOWN: HeroEntryFrame = HeroEntryFrame {
        opacity: "1",
        transform: "translateY(0) scale(1)",
    };
}

/// Reads a `data-delay` attribute.
///
/// Leading whitespace, an optional sign and the leading digits are honoured;
/// a missing, unparsable or zero value falls back to `default_ms`. Negative
/// delays clamp to 0, which is what a browser timer does with them anyway.
pub fn parse_delay(raw: Option<&str>, default_ms: u32) -> u32 {
    let Some(raw) = raw else {
        return default_ms;
    };
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    let Ok(value) = digits.parse::<u64>() else {
        return default_ms;
    };
    if value == 0 {
        return default_ms;
    }
    if negative {
        return 0;
    }
    value.min(u32::MAX as u64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_leading_integer() {
        assert_eq!(parse_delay(Some("800"), 0), 800);
        assert_eq!(parse_delay(Some("  1200ms"), 0), 1200);
        assert_eq!(parse_delay(Some("+300"), 0), 300);
        assert_eq!(parse_delay(Some("1.9"), 0), 1);
    }

    #[test]
    fn falls_back_on_missing_or_zero() {
        assert_eq!(parse_delay(None, 2500), 2500);
        assert_eq!(parse_delay(Some(""), 2500), 2500);
        assert_eq!(parse_delay(Some("soon"), 2500), 2500);
        assert_eq!(parse_delay(Some("0"), 2500), 2500);
    }

    #[test]
    fn negative_delay_clamps_to_zero() {
        assert_eq!(parse_delay(Some("-400"), 2500), 0);
        assert_eq!(parse_delay(Some("-"), 2500), 2500);
    }

    #[test]
    fn entry_frames_are_distinct() {
        assert_ne!(HeroEntryFrame::HIDDEN, HeroEntryFrame::SHOWN);
        assert_eq!(HeroEntryFrame::SHOWN.opacity, "1");
    }
}
