//! Catalog file parsers.
//!
//! - `ts`: Qt Linguist `.ts` reader (quick-xml event stream)
//! - `writer`: `.ts` writer used when catalogs are rewritten

pub mod ts;
pub mod writer;
