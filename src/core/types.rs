//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;

/// An attribute tag carried by a weapon strike.
///
/// Attributes are opaque to the engine: they are compared for equality and
/// used as transition-table keys, nothing else. Both transition inputs and
/// transition results are attributes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attribute(pub String);

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Attribute {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Attribute {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A weapon strike (WS) identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WsName(pub String);

impl fmt::Display for WsName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WsName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for WsName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A weapon-type identifier, naming a category of weapon.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeaponName(pub String);

impl fmt::Display for WeaponName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WeaponName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for WeaponName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Ordered attribute pair keying the transition table.
///
/// Order is significant: (fire, wind) and (wind, fire) are distinct
/// transitions and may resolve to different results.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttrPair {
    pub from: Attribute,
    pub to: Attribute,
}

impl AttrPair {
    pub fn new(from: impl Into<Attribute>, to: impl Into<Attribute>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attr_pair_order_is_significant() {
        let fw = AttrPair::new("fire", "wind");
        let wf = AttrPair::new("wind", "fire");
        assert_ne!(fw, wf);
        assert_eq!(fw, AttrPair::new("fire", "wind"));
    }

    #[test]
    fn attribute_displays_bare() {
        assert_eq!(Attribute::from("liquefaction").to_string(), "liquefaction");
    }
}
