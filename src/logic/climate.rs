//! Climate Context Extractor
//!
//! 'One Health' context signal: flags a record's free-text weather
//! annotation as adverse when it mentions rain or heat.

/// Sentinel label when no climate context is known
pub const NO_DATA: &str = "No Data";

/// Case-sensitive substrings that mark a context adverse
const ADVERSE_MARKERS: [&str; 2] = ["Rain", "Heat"];

/// True if the context mentions an adverse condition.
///
/// Plain substring test over the annotation, not a controlled vocabulary:
/// "No Rain expected" still classifies adverse.
pub fn is_adverse(context: Option<&str>) -> bool {
    match context {
        Some(text) => ADVERSE_MARKERS.iter().any(|marker| text.contains(marker)),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rain_is_adverse() {
        assert!(is_adverse(Some("Heavy Rain expected")));
        assert!(is_adverse(Some("Heavy Rain (45mm)")));
    }

    #[test]
    fn test_heat_is_adverse() {
        assert!(is_adverse(Some("Heat Wave")));
        assert!(is_adverse(Some("Heatwave (38.2°C)")));
    }

    #[test]
    fn test_clear_is_not_adverse() {
        assert!(!is_adverse(Some("Clear")));
        assert!(!is_adverse(Some("Normal (24.1°C, 0.0mm)")));
    }

    #[test]
    fn test_absent_is_not_adverse() {
        assert!(!is_adverse(None));
    }

    #[test]
    fn test_match_is_case_sensitive() {
        assert!(!is_adverse(Some("heavy rain")));
    }

    #[test]
    fn test_substring_match_ignores_negation() {
        // Known limitation of the substring heuristic
        assert!(is_adverse(Some("No Rain expected")));
    }
}
