use thiserror::Error;

/// Error type for unit tags and quantity names arriving from outside the crate.
///
/// Conversions, parsers and formatters never return this; it only surfaces
/// when raw text is turned into one of the closed unit enums.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    #[error("unknown {quantity} unit: '{tag}'")]
    UnknownUnit { quantity: &'static str, tag: String },

    #[error("unknown quantity kind: '{0}'")]
    UnknownQuantity(String),
}
