//! Slot-token resolution
//!
//! Turns the raw per-slot weapon picks into an ordered list of unique slot
//! keys, each carrying that slot's candidate strikes.

use ahash::AHashMap;

use crate::catalog::WeaponTable;
use crate::core::types::{WeaponName, WsName};

/// One resolved slot: a unique key plus the slot's candidate strikes.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSlot {
    /// Weapon name suffixed with its occurrence counter, e.g. "spear_2".
    pub key: String,
    pub strikes: Vec<WsName>,
}

/// Resolve raw slot tokens into ordered slots.
///
/// Tokens longer than `suffix_width` characters carry a fixed-width
/// disambiguator suffix, which is stripped before the weapon lookup. Empty,
/// absent, and unknown tokens are dropped without error, shrinking the
/// effective slot count. A weapon picked in several slots gets `_1`, `_2`,
/// ... keys (the first occurrence included) so every slot stays
/// independently addressable.
pub fn resolve(
    tokens: &[Option<String>],
    weapons: &WeaponTable,
    suffix_width: usize,
) -> Vec<ResolvedSlot> {
    let mut counter: AHashMap<WeaponName, u32> = AHashMap::new();
    let mut slots = Vec::new();

    for token in tokens {
        let Some(raw) = token.as_deref() else {
            continue;
        };
        if raw.is_empty() {
            continue;
        }

        let name = WeaponName::from(strip_suffix(raw, suffix_width));
        let Some(strikes) = weapons.get(&name) else {
            tracing::debug!(token = raw, "dropping unresolved slot token");
            continue;
        };

        let occurrence = counter.entry(name.clone()).or_insert(0);
        *occurrence += 1;

        slots.push(ResolvedSlot {
            key: format!("{}_{}", name, occurrence),
            strikes: strikes.to_vec(),
        });
    }

    slots
}

/// Strip the trailing disambiguator if the token is long enough to carry
/// one. Counts characters, not bytes.
fn strip_suffix(token: &str, suffix_width: usize) -> &str {
    let count = token.chars().count();
    if count <= suffix_width {
        return token;
    }
    match token.char_indices().nth(count - suffix_width) {
        Some((idx, _)) => &token[..idx],
        None => token,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::WeaponName;

    fn table(entries: &[(&str, &[&str])]) -> WeaponTable {
        let mut table = WeaponTable::new();
        for (weapon, strikes) in entries {
            table.insert(
                WeaponName::from(*weapon),
                strikes.iter().map(|s| WsName::from(*s)).collect(),
            );
        }
        table
    }

    fn tokens(raw: &[&str]) -> Vec<Option<String>> {
        raw.iter().map(|t| Some(t.to_string())).collect()
    }

    #[test]
    fn repeated_weapons_get_numbered_keys_in_slot_order() {
        let weapons = table(&[
            ("spear", &["Double Thrust", "Penta Thrust"]),
            ("bow", &["Piercing Arrow"]),
        ]);

        let slots = resolve(
            &tokens(&["spear_a", "spear_b", "bow_a", "absent"]),
            &weapons,
            2,
        );

        let keys: Vec<&str> = slots.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["spear_1", "spear_2", "bow_1"]);
        assert_eq!(slots[0].strikes, slots[1].strikes);
    }

    #[test]
    fn empty_and_absent_tokens_are_dropped() {
        let weapons = table(&[("sword", &["Fast Blade"])]);
        let raw = vec![None, Some(String::new()), Some("sword_a".to_string())];

        let slots = resolve(&raw, &weapons, 2);
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].key, "sword_1");
    }

    #[test]
    fn short_tokens_are_used_as_is() {
        let weapons = table(&[("ax", &["Raging Axe"])]);

        // "ax" is exactly the suffix width, so nothing is stripped.
        let slots = resolve(&tokens(&["ax"]), &weapons, 2);
        assert_eq!(slots[0].key, "ax_1");
    }

    #[test]
    fn suffix_stripping_counts_characters_not_bytes() {
        // Single-character CJK weapon name with a two-character suffix.
        let weapons = table(&[("槍", &["Double Thrust"])]);

        let slots = resolve(&tokens(&["槍_a"]), &weapons, 2);
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].key, "槍_1");
    }

    #[test]
    fn unknown_weapons_shrink_the_slot_count() {
        let weapons = table(&[("sword", &["Fast Blade"])]);

        let slots = resolve(&tokens(&["sword_a", "zzzz_a", "sword_b"]), &weapons, 2);
        let keys: Vec<&str> = slots.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["sword_1", "sword_2"]);
    }
}
