//! Combination generation
//!
//! Enumerates the ordered Cartesian product of each slot's candidate
//! strikes and keeps the combinations whose attribute propagation succeeds.

use rayon::prelude::*;
use serde::Serialize;

use crate::catalog::{AttributeTable, TransitionTable};
use crate::chain::evaluate::evaluate;
use crate::chain::selection::ResolvedSlot;
use crate::core::config::CalculatorConfig;
use crate::core::types::{Attribute, WsName};

/// A successful chain: the strikes in slot order plus the final attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChainResult {
    pub strikes: Vec<WsName>,
    pub attribute: Attribute,
}

/// Enumerate and evaluate every candidate chain.
///
/// Combinations are produced in product-enumeration order, first slot
/// varying slowest, and failures are discarded. Evaluation switches to
/// rayon once the product size reaches `config.parallel_threshold`; both
/// paths produce identical output in identical order.
pub fn generate(
    slots: &[ResolvedSlot],
    attributes: &AttributeTable,
    transitions: &TransitionTable,
    config: &CalculatorConfig,
) -> Vec<ChainResult> {
    let total = combination_count(slots);
    if total == 0 {
        return Vec::new();
    }

    let eval_one = |index: usize| {
        let strikes = nth_combination(slots, index);
        evaluate(&strikes, attributes, transitions)
            .map(|attribute| ChainResult { strikes, attribute })
    };

    if total >= config.parallel_threshold {
        (0..total).into_par_iter().filter_map(eval_one).collect()
    } else {
        (0..total).filter_map(eval_one).collect()
    }
}

/// Product of per-slot candidate counts. Zero if any slot has no strikes.
fn combination_count(slots: &[ResolvedSlot]) -> usize {
    slots.iter().map(|slot| slot.strikes.len()).product()
}

/// Decode a product index into one strike per slot, first slot slowest.
fn nth_combination(slots: &[ResolvedSlot], index: usize) -> Vec<WsName> {
    let mut picks = vec![0usize; slots.len()];
    let mut rem = index;
    for (i, slot) in slots.iter().enumerate().rev() {
        let len = slot.strikes.len();
        picks[i] = rem % len;
        rem /= len;
    }
    slots
        .iter()
        .zip(picks)
        .map(|(slot, pick)| slot.strikes[pick].clone())
        .collect()
}
