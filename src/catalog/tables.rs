//! Lookup tables backing the chain calculator
//!
//! All three tables are built once by the loader and read-only afterwards.
//! Lookups are pure functions of their keys; a missing entry is data, not an
//! error.

use ahash::AHashMap;

use crate::core::types::{AttrPair, Attribute, WeaponName, WsName};

/// Weapon type → candidate strike list, plus the display-ordered roster.
#[derive(Debug, Clone, Default)]
pub struct WeaponTable {
    strikes: AHashMap<WeaponName, Vec<WsName>>,
    roster: Vec<WeaponName>,
}

impl WeaponTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, weapon: WeaponName, strikes: Vec<WsName>) {
        self.strikes.insert(weapon, strikes);
    }

    /// Candidate strikes for a weapon type, in catalog order.
    pub fn get(&self, weapon: &WeaponName) -> Option<&[WsName]> {
        self.strikes.get(weapon).map(Vec::as_slice)
    }

    pub fn contains(&self, weapon: &WeaponName) -> bool {
        self.strikes.contains_key(weapon)
    }

    /// Weapon names in display order, as listed by the catalog.
    pub fn roster(&self) -> &[WeaponName] {
        &self.roster
    }

    pub fn set_roster(&mut self, roster: Vec<WeaponName>) {
        self.roster = roster;
    }

    pub fn len(&self) -> usize {
        self.strikes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strikes.is_empty()
    }
}

/// Strike → attribute list.
///
/// Attribute order within a strike is the evaluator's scan order. A strike
/// absent from the table has no attributes and can never propagate.
#[derive(Debug, Clone, Default)]
pub struct AttributeTable {
    attrs: AHashMap<WsName, Vec<Attribute>>,
}

impl AttributeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, ws: WsName, attrs: Vec<Attribute>) {
        self.attrs.insert(ws, attrs);
    }

    /// Attributes of a strike, in listed order. Unknown strikes have none.
    pub fn attributes_of(&self, ws: &WsName) -> &[Attribute] {
        self.attrs.get(ws).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }
}

/// Ordered attribute pair → resulting attribute.
#[derive(Debug, Clone, Default)]
pub struct TransitionTable {
    transitions: AHashMap<AttrPair, Attribute>,
}

impl TransitionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a transition. A later insert for the same pair overwrites the
    /// earlier one.
    pub fn insert(&mut self, pair: AttrPair, result: Attribute) {
        self.transitions.insert(pair, result);
    }

    /// Result of chaining `from` into `to`, if that pair is recognized.
    pub fn lookup(&self, from: &Attribute, to: &Attribute) -> Option<&Attribute> {
        self.transitions.get(&AttrPair {
            from: from.clone(),
            to: to.clone(),
        })
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
