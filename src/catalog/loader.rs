//! Load the weapon, strike, and transition catalogs from JSON data files

use ahash::AHashMap;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

use crate::catalog::tables::{AttributeTable, TransitionTable, WeaponTable};
use crate::catalog::Catalog;
use crate::core::error::{RenkeiError, Result};
use crate::core::types::{AttrPair, Attribute, WeaponName, WsName};

/// File names expected inside the data directory.
pub const WEAPON_LIST_FILE: &str = "weapon_list.json";
pub const WEAPON_WS_FILE: &str = "weapon_ws_list.json";
pub const WS_ATTR_FILE: &str = "ws_attr_list.json";
pub const RENKEI_PATTERN_FILE: &str = "renkei_pattern_list.json";
pub const ATTR_LIST_FILE: &str = "attr_list.json";

/// Separator between the two attributes of a transition-pattern key.
const PATTERN_KEY_SEPARATOR: char = '+';

/// Load the full catalog from a data directory.
///
/// All five files must be present and well-formed; gaps inside the data
/// (a strike with no attribute entry, a weapon with no strikes) are left
/// to the engine's silent-failure semantics.
pub fn load_catalog(data_dir: &Path) -> Result<Catalog> {
    let roster: Vec<WeaponName> = read_json(&data_dir.join(WEAPON_LIST_FILE))?;
    let weapon_ws: AHashMap<WeaponName, Vec<WsName>> = read_json(&data_dir.join(WEAPON_WS_FILE))?;
    let ws_attr: AHashMap<WsName, Vec<Attribute>> = read_json(&data_dir.join(WS_ATTR_FILE))?;
    // Duplicate pattern keys collapse during JSON parsing, later entries
    // overwriting earlier ones.
    let raw_patterns: AHashMap<String, Attribute> =
        read_json(&data_dir.join(RENKEI_PATTERN_FILE))?;
    let filterable_attrs: Vec<Attribute> = read_json(&data_dir.join(ATTR_LIST_FILE))?;

    let mut weapons = WeaponTable::new();
    for (weapon, strikes) in weapon_ws {
        weapons.insert(weapon, strikes);
    }
    weapons.set_roster(roster);

    let mut attributes = AttributeTable::new();
    for (ws, attrs) in ws_attr {
        attributes.insert(ws, attrs);
    }

    let mut transitions = TransitionTable::new();
    for (raw, result) in raw_patterns {
        transitions.insert(parse_pattern_key(&raw)?, result);
    }

    Ok(Catalog {
        weapons,
        attributes,
        transitions,
        filterable_attrs,
    })
}

/// Parse a `"attr1+attr2"` pattern key into its ordered pair.
pub fn parse_pattern_key(raw: &str) -> Result<AttrPair> {
    let parts: Vec<&str> = raw.split(PATTERN_KEY_SEPARATOR).collect();
    match parts.as_slice() {
        [from, to] if !from.is_empty() && !to.is_empty() => Ok(AttrPair::new(*from, *to)),
        _ => Err(RenkeiError::MalformedPatternKey(raw.to_string())),
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(RenkeiError::DataFileNotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pattern_key_splits_on_separator() {
        let pair = parse_pattern_key("fire+wind").unwrap();
        assert_eq!(pair, AttrPair::new("fire", "wind"));
    }

    #[test]
    fn parse_pattern_key_rejects_missing_separator() {
        assert!(parse_pattern_key("firewind").is_err());
    }

    #[test]
    fn parse_pattern_key_rejects_extra_separator() {
        assert!(parse_pattern_key("fire+wind+earth").is_err());
    }

    #[test]
    fn parse_pattern_key_rejects_empty_side() {
        assert!(parse_pattern_key("fire+").is_err());
        assert!(parse_pattern_key("+wind").is_err());
    }

    #[test]
    fn load_catalog_reports_missing_file() {
        let missing = Path::new("definitely/not/a/data/dir");
        match load_catalog(missing) {
            Err(RenkeiError::DataFileNotFound(path)) => {
                assert!(path.ends_with(WEAPON_LIST_FILE));
            }
            other => panic!("expected DataFileNotFound, got {:?}", other),
        }
    }
}
