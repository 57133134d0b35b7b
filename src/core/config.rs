//! Calculator configuration with documented constants
//!
//! The magic numbers of the resolve/generate pipeline are collected here
//! with explanations of their purpose. Config is passed explicitly into the
//! operations that need it; there is no global accessor.

use crate::core::error::{RenkeiError, Result};
use std::fs;
use std::path::Path;

/// Configuration for the chain calculator
#[derive(Debug, Clone)]
pub struct CalculatorConfig {
    /// Width in characters of the slot-token disambiguator suffix
    ///
    /// Slot tokens arrive as `<weapon><suffix>` (e.g. "spear_a"); any token
    /// longer than this width has its last `suffix_width` characters
    /// stripped before the weapon lookup. Counted in characters, not bytes,
    /// since weapon names may be multi-byte.
    pub suffix_width: usize,

    /// Minimum combination count before using parallel evaluation
    ///
    /// Below this threshold, thread overhead exceeds benefits. Typical slot
    /// selections produce a few dozen to a few thousand combinations, so the
    /// serial path is the common case.
    pub parallel_threshold: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            suffix_width: 2,
            parallel_threshold: 2000,
        }
    }
}

impl CalculatorConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.suffix_width == 0 {
            return Err("suffix_width must be at least 1".into());
        }

        if self.parallel_threshold == 0 {
            return Err("parallel_threshold must be at least 1".into());
        }

        Ok(())
    }

    /// Load config from a TOML file, falling back to defaults for any
    /// missing keys.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        parse_config(&content)
    }
}

fn parse_config(content: &str) -> Result<CalculatorConfig> {
    let toml: toml::Value = content
        .parse()
        .map_err(|e| RenkeiError::InvalidConfig(format!("invalid TOML: {}", e)))?;

    let mut config = CalculatorConfig::default();

    if let Some(table) = toml.get("calculator").and_then(|v| v.as_table()) {
        if let Some(width) = table.get("suffix_width").and_then(|v| v.as_integer()) {
            config.suffix_width = width as usize;
        }
        if let Some(threshold) = table.get("parallel_threshold").and_then(|v| v.as_integer()) {
            config.parallel_threshold = threshold as usize;
        }
    }

    config.validate().map_err(RenkeiError::InvalidConfig)?;
    Ok(config)
}
