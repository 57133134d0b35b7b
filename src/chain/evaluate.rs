//! Chain evaluation
//!
//! Walks a strike sequence left to right, carrying a single attribute across
//! each step. Every step scans the (carried, next) attribute cross-product
//! in listed order and commits to the first pair the transition table
//! recognizes.

use crate::catalog::{AttributeTable, TransitionTable};
use crate::core::types::{Attribute, WsName};

/// Find the first transition for any ordered pair drawn from `from` × `to`.
///
/// Scan order is outer `from`, inner `to`, both in listed order. The first
/// pair present in the table wins; later pairs are never consulted, even if
/// they would also match. This tie-break is observable behavior: it decides
/// which chains are reported valid.
pub fn first_transition<'a>(
    from: &[Attribute],
    to: &[Attribute],
    transitions: &'a TransitionTable,
) -> Option<&'a Attribute> {
    from.iter()
        .find_map(|a| to.iter().find_map(|b| transitions.lookup(a, b)))
}

/// Evaluate attribute propagation across a strike sequence.
///
/// Returns the final attribute when every consecutive step has a
/// transition, `None` otherwise. Sequences shorter than two strikes are
/// never evaluable. A strike missing from the attribute table has no
/// attributes, so any chain touching it fails.
pub fn evaluate(
    chain: &[WsName],
    attributes: &AttributeTable,
    transitions: &TransitionTable,
) -> Option<Attribute> {
    if chain.len() < 2 {
        return None;
    }

    // Seed from the first two strikes.
    let mut carried = first_transition(
        attributes.attributes_of(&chain[0]),
        attributes.attributes_of(&chain[1]),
        transitions,
    )?
    .clone();

    // Each later strike chains off the single carried attribute.
    for ws in &chain[2..] {
        carried = first_transition(
            std::slice::from_ref(&carried),
            attributes.attributes_of(ws),
            transitions,
        )?
        .clone();
    }

    Some(carried)
}
