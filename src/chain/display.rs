//! Result rendering
//!
//! A chain renders as its strikes joined by arrows with the final element
//! parenthesized; the caller supplies the sequence as strikes-then-label.

use crate::chain::generate::ChainResult;

/// Arrow separator between strikes in a rendered chain.
const CHAIN_SEPARATOR: &str = " → ";

/// Render a flat chain sequence into a display string.
///
/// The final element is the result label and is parenthesized; everything
/// before it is joined with arrows. Empty input renders as an empty string;
/// a single element renders as just the parenthesized label.
pub fn format_chain(parts: &[String]) -> String {
    match parts {
        [] => String::new(),
        [only] => format!("({})", only),
        [init @ .., last] => format!("{} ({})", init.join(CHAIN_SEPARATOR), last),
    }
}

/// Render a chain result as strikes-then-attribute.
pub fn format_result(result: &ChainResult) -> String {
    let mut parts: Vec<String> = result.strikes.iter().map(|ws| ws.to_string()).collect();
    parts.push(result.attribute.to_string());
    format_chain(&parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Attribute, WsName};

    fn strings(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_sequence_renders_empty() {
        assert_eq!(format_chain(&[]), "");
    }

    #[test]
    fn single_element_is_parenthesized() {
        assert_eq!(format_chain(&strings(&["onlyAttr"])), "(onlyAttr)");
    }

    #[test]
    fn last_element_is_the_label() {
        assert_eq!(
            format_chain(&strings(&["WS1", "WS2", "combo"])),
            "WS1 → WS2 (combo)"
        );
    }

    #[test]
    fn longer_chains_join_with_arrows() {
        assert_eq!(
            format_chain(&strings(&["WS1", "WS2", "WS3", "light"])),
            "WS1 → WS2 → WS3 (light)"
        );
    }

    #[test]
    fn format_result_appends_the_attribute() {
        let result = ChainResult {
            strikes: vec![WsName::from("WS1"), WsName::from("WS2")],
            attribute: Attribute::from("combo"),
        };
        assert_eq!(format_result(&result), "WS1 → WS2 (combo)");
    }
}
