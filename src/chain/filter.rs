//! Post-generation attribute filter
//!
//! Applied after the generator, before rendering. Not part of the chain
//! algorithm itself: a plain membership test on each chain's final
//! attribute.

use ahash::AHashSet;

use crate::chain::generate::ChainResult;
use crate::core::types::Attribute;

/// Keep only chains whose final attribute is among `wanted`.
///
/// An empty selection keeps everything.
pub fn filter_by_attributes(results: Vec<ChainResult>, wanted: &[Attribute]) -> Vec<ChainResult> {
    if wanted.is_empty() {
        return results;
    }
    let wanted: AHashSet<&Attribute> = wanted.iter().collect();
    results
        .into_iter()
        .filter(|result| wanted.contains(&result.attribute))
        .collect()
}
