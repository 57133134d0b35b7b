pub mod config;
pub mod error;
pub mod types;

pub use config::CalculatorConfig;
pub use error::{RenkeiError, Result};
pub use types::{AttrPair, Attribute, WeaponName, WsName};
