//! Uniform operations for closed enums.
//!
//! A host enum with a fixed set of unit cases implements [`EnumContract`]
//! (by hand or through [`define_enum!`]) and gains labeling, soft coercion
//! from loosely-typed input, membership tests, filtering, export shapes for
//! UI widgets and type generators, and random selection.
//!
//! # Backing
//!
//! - **String-backed**: each case carries a unique `&'static str` payload.
//! - **Integer-backed**: each case carries a unique `i64` payload.
//! - **Unbacked**: no payload; the case name is used wherever a value is needed.
//!
//! # Failure policy
//!
//! Coercion never fails loudly. An input that matches no case yields `None`;
//! `from_value_or` substitutes a default. Only the strict lookups
//! (`try_from_value`, `try_from_name`, `parse`), deserialization and JSON
//! encoding return [`EnumError`].
//!
//! # Modules
//!
//! - [`contract`]: the `EnumContract` trait and every derived operation
//! - [`value`]: payloads, backing tags, scalar values, coercion input
//! - [`compare`]: the strict/loose comparator shared by membership and filters
//! - [`label`]: readable labels from case names
//! - [`export`]: ordered maps, select options, type descriptors, JSON options
//! - [`serde_support`]: serialize/deserialize cases as their effective value

#[macro_use]
mod macros;

pub mod compare;
pub mod contract;
pub mod defaults;
pub mod error;
pub mod export;
pub mod label;
pub mod serde_support;
pub mod value;

// Used by `define_enum!` expansions.
#[doc(hidden)]
pub use serde;
#[doc(hidden)]
pub use macros::{distinct_int_payloads, distinct_str_payloads};

pub use contract::EnumContract;
pub use error::{EnumError, Result};
pub use export::{JsonOptions, OrderedMap, SelectOption, TypeDescriptor};
pub use label::readable_label;
pub use value::{Backing, BackingKind, Input, Payload, Value};
