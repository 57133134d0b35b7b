//! Read-only catalog of weapons, strikes, and transition patterns
//!
//! A `Catalog` is a snapshot of the external data files, built once at
//! startup and passed by reference into every pipeline run.

pub mod loader;
pub mod tables;

pub use loader::load_catalog;
pub use tables::{AttributeTable, TransitionTable, WeaponTable};

use crate::core::types::Attribute;

/// The full data set one resolve→generate→format run works from.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub weapons: WeaponTable,
    pub attributes: AttributeTable,
    pub transitions: TransitionTable,
    /// Attributes offered to the result filter, in display order.
    pub filterable_attrs: Vec<Attribute>,
}
