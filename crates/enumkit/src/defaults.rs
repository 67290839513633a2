//! Canonical default values shared by the export operations.

/// Prefix used by `comment` when the caller has no preference.
pub const DEFAULT_COMMENT_PREFIX: &str = "possible values: ";
/// Separator placed between values in `comment`.
pub const VALUE_SEPARATOR: &str = ", ";
/// Glue used by `implode` when the caller has no preference.
pub const DEFAULT_GLUE: &str = ",";
/// Indentation width for pretty-printed JSON.
pub const DEFAULT_JSON_INDENT: usize = 4;
