//! Chain resolution engine
//!
//! Slot-token resolution, ordered combination generation, attribute
//! propagation, and result rendering. Every operation is a pure function of
//! caller-supplied read-only tables.

pub mod display;
pub mod evaluate;
pub mod filter;
pub mod generate;
pub mod selection;

pub use display::{format_chain, format_result};
pub use evaluate::{evaluate, first_transition};
pub use filter::filter_by_attributes;
pub use generate::{generate, ChainResult};
pub use selection::{resolve, ResolvedSlot};
