//! Core data types for translation catalogs.
//!
//! ## Module Structure
//!
//! - `catalog`: The catalog model (Catalog, Context, Message, LocationHint)
//! - `message`: Report-facing types (MessageLocation, EntryContext)

pub mod catalog;
pub mod message;

pub use catalog::{
    Catalog, Context, LineRef, LocationHint, LocationStyle, Message, SourcePosition, Translation,
    TranslationStatus,
};
pub use message::{EntryContext, MessageLocation};
