//! The enum extension contract.
//!
//! A host enum implements the four required items of [`EnumContract`]
//! (`KIND`, `cases`, `name`, `backing`) and receives every other operation as
//! a provided method. Nothing is cached: each call recomputes from `cases()`.
//!
//! The effective value of a case is its payload when the enum is backed and
//! its name when it is not. Operations that talk about "values" use the
//! effective value; operations that talk about "names" always use the
//! declaration identifier, whatever the backing.

use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use tracing::{debug, trace};

use crate::compare::{contains_match, values_match};
use crate::defaults::{DEFAULT_COMMENT_PREFIX, DEFAULT_GLUE, VALUE_SEPARATOR};
use crate::error::{EnumError, Result};
use crate::export::{JsonOptions, OrderedMap, SelectOption, TypeDescriptor};
use crate::label::readable_label;
use crate::value::{Backing, BackingKind, Input, Payload, Value};

pub trait EnumContract: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Backing shape shared by every case.
    const KIND: BackingKind;

    /// Every declared case, in declaration order.
    fn cases() -> &'static [Self];

    /// Declaration identifier of this case.
    fn name(self) -> &'static str;

    /// Payload of this case, or `Backing::Unbacked`.
    fn backing(self) -> Backing;

    /// Extended description of this case. Host enums without descriptions
    /// keep the default.
    fn description(self) -> Option<&'static str> {
        None
    }

    /// Unqualified name of the host type.
    fn type_name() -> &'static str {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full)
    }

    // ------------------------------------------------------------------------
    // Per-case accessors
    // ------------------------------------------------------------------------

    /// Payload for backed enums, name for unbacked ones.
    fn value(self) -> Value<'static> {
        match self.backing() {
            Backing::Backed(payload) => payload.value(),
            Backing::Unbacked => Value::Str(self.name()),
        }
    }

    fn payload(self) -> Option<Payload> {
        self.backing().payload()
    }

    fn label(self) -> String {
        readable_label(self.name())
    }

    // ------------------------------------------------------------------------
    // Enumeration accessors
    // ------------------------------------------------------------------------

    fn values() -> Vec<Value<'static>> {
        Self::cases().iter().map(|case| case.value()).collect()
    }

    fn keys() -> Vec<&'static str> {
        Self::cases().iter().map(|case| case.name()).collect()
    }

    fn readable() -> Vec<String> {
        Self::keys().into_iter().map(readable_label).collect()
    }

    fn count() -> usize {
        Self::cases().len()
    }

    fn is_backed() -> bool {
        Self::KIND.is_backed()
    }

    // ------------------------------------------------------------------------
    // Coercion
    // ------------------------------------------------------------------------

    /// Resolve a case, a raw value, or nothing into a case.
    ///
    /// Cases pass through untouched. Raw values are matched strictly against
    /// effective values in declaration order. A miss is `None`, not an error.
    fn coerce_enum<'a>(input: impl Into<Input<'a, Self>>) -> Option<Self> {
        match input.into() {
            Input::Case(case) => Some(case),
            Input::Value(value) => {
                let found = Self::cases()
                    .iter()
                    .copied()
                    .find(|case| values_match(&case.value(), &value, true));
                if found.is_none() {
                    trace!(enum_type = Self::type_name(), input = %value, "no case matched");
                }
                found
            }
            Input::Absent => None,
        }
    }

    /// Like [`coerce_enum`](Self::coerce_enum) but yields the effective value.
    fn coerce_value<'a>(input: impl Into<Input<'a, Self>>) -> Option<Value<'static>> {
        match input.into() {
            Input::Case(case) => Some(case.value()),
            other => Self::coerce_enum(other).map(|case| case.value()),
        }
    }

    /// Coerce, falling back to `default` on a miss.
    fn from_value_or<'a>(input: impl Into<Input<'a, Self>>, default: Self) -> Self {
        Self::coerce_enum(input).unwrap_or(default)
    }

    /// Strict coercion that reports a miss as [`EnumError::NoMatch`].
    fn try_from_value<'a>(input: impl Into<Input<'a, Self>>) -> Result<Self> {
        let input = input.into();
        Self::coerce_enum(input).ok_or_else(|| {
            let input = describe_input(&input);
            debug!(enum_type = Self::type_name(), input = %input, "strict lookup failed");
            EnumError::NoMatch {
                type_name: Self::type_name(),
                input,
            }
        })
    }

    /// True if `input` matches some effective value.
    ///
    /// `strict` selects type-exact comparison; loose comparison lets numbers
    /// and numeric strings cross-match.
    fn has_value<'a>(input: impl Into<Value<'a>>, strict: bool) -> bool {
        let needle = input.into();
        Self::cases()
            .iter()
            .any(|case| values_match(&case.value(), &needle, strict))
    }

    /// Exact lookup by declaration identifier.
    fn from_name(name: &str) -> Option<Self> {
        let found = Self::cases().iter().copied().find(|case| case.name() == name);
        if found.is_none() {
            trace!(enum_type = Self::type_name(), name, "no case with this name");
        }
        found
    }

    fn try_from_name(name: &str) -> Result<Self> {
        Self::from_name(name).ok_or_else(|| EnumError::UnknownName {
            type_name: Self::type_name(),
            name: name.to_string(),
        })
    }

    /// Parse text into a case: first as an effective value (integers are
    /// parsed for int-backed enums), then as a case name.
    fn parse(text: &str) -> Result<Self> {
        let by_value = match Self::KIND {
            BackingKind::Int => text
                .parse::<i64>()
                .ok()
                .and_then(|n| Self::coerce_enum(Value::Int(n))),
            BackingKind::String | BackingKind::Unbacked => Self::coerce_enum(text),
        };

        by_value
            .or_else(|| Self::from_name(text))
            .ok_or_else(|| EnumError::NoMatch {
                type_name: Self::type_name(),
                input: text.to_string(),
            })
    }

    // ------------------------------------------------------------------------
    // Filtering
    // ------------------------------------------------------------------------

    /// Cases whose name is listed, in declaration order. Unknown names are ignored.
    fn only<I, S>(names: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<S> = names.into_iter().collect();
        Self::cases()
            .iter()
            .copied()
            .filter(|case| names.iter().any(|n| n.as_ref() == case.name()))
            .collect()
    }

    /// Cases whose name is not listed, in declaration order.
    fn except<I, S>(names: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<S> = names.into_iter().collect();
        Self::cases()
            .iter()
            .copied()
            .filter(|case| !names.iter().any(|n| n.as_ref() == case.name()))
            .collect()
    }

    /// Effective values that match any supplied value.
    fn only_values<'a, I, V>(values: I, strict: bool) -> Vec<Value<'static>>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value<'a>>,
    {
        let wanted: Vec<Value<'a>> = values.into_iter().map(Into::into).collect();
        Self::values()
            .into_iter()
            .filter(|value| contains_match(&wanted, value, strict))
            .collect()
    }

    /// Effective values that match none of the supplied values.
    fn except_values<'a, I, V>(values: I, strict: bool) -> Vec<Value<'static>>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value<'a>>,
    {
        let unwanted: Vec<Value<'a>> = values.into_iter().map(Into::into).collect();
        Self::values()
            .into_iter()
            .filter(|value| !contains_match(&unwanted, value, strict))
            .collect()
    }

    // ------------------------------------------------------------------------
    // Representation & export
    // ------------------------------------------------------------------------

    /// `{ value, label, name }` records for UI selection widgets.
    fn to_options_array() -> Vec<SelectOption> {
        Self::cases()
            .iter()
            .map(|case| {
                let label = case.label();
                SelectOption {
                    value: case.value(),
                    name: label.clone(),
                    label,
                }
            })
            .collect()
    }

    /// Effective value -> readable label.
    fn to_readable_array() -> OrderedMap<Value<'static>, String> {
        Self::cases()
            .iter()
            .map(|case| (case.value(), case.label()))
            .collect()
    }

    /// Effective value -> name.
    fn to_array() -> OrderedMap<Value<'static>, &'static str> {
        Self::cases()
            .iter()
            .map(|case| (case.value(), case.name()))
            .collect()
    }

    /// Name -> effective value. The canonical serializable form.
    fn to_json_array() -> OrderedMap<&'static str, Value<'static>> {
        Self::cases()
            .iter()
            .map(|case| (case.name(), case.value()))
            .collect()
    }

    /// Serialize [`to_array`](Self::to_array) as JSON.
    fn to_json(options: JsonOptions) -> Result<String> {
        options.encode(&Self::to_array())
    }

    fn to_type_script() -> TypeDescriptor {
        TypeDescriptor {
            type_name: Self::type_name(),
            values: Self::values(),
        }
    }

    fn comment(prefix: &str) -> String {
        format!("{}{}", prefix, Self::implode(VALUE_SEPARATOR))
    }

    fn default_comment() -> String {
        Self::comment(DEFAULT_COMMENT_PREFIX)
    }

    fn implode(glue: &str) -> String {
        Self::values()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(glue)
    }

    fn default_implode() -> String {
        Self::implode(DEFAULT_GLUE)
    }

    // ------------------------------------------------------------------------
    // Per-case comparison
    // ------------------------------------------------------------------------

    /// True if `other` coerces to this case.
    fn is<'a>(self, other: impl Into<Input<'a, Self>>) -> bool {
        Self::coerce_enum(other) == Some(self)
    }

    /// True if any candidate coerces to this case.
    fn is_in<'a, I>(self, candidates: I) -> bool
    where
        I: IntoIterator,
        I::Item: Into<Input<'a, Self>>,
    {
        candidates.into_iter().any(|candidate| self.is(candidate))
    }

    // ------------------------------------------------------------------------
    // Random selection
    // ------------------------------------------------------------------------

    /// Uniformly drawn case. `None` only for an enum without cases.
    fn random_case() -> Option<Self> {
        Self::random_case_with(&mut rand::thread_rng())
    }

    fn random_case_with<R: Rng + ?Sized>(rng: &mut R) -> Option<Self> {
        Self::cases().choose(rng).copied()
    }

    /// Uniformly drawn effective value. `None` only for an enum without cases.
    fn random() -> Option<Value<'static>> {
        Self::random_with(&mut rand::thread_rng())
    }

    fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Option<Value<'static>> {
        Self::values().choose(rng).copied()
    }
}

fn describe_input<E: EnumContract>(input: &Input<'_, E>) -> String {
    match input {
        Input::Case(case) => case.name().to_string(),
        Input::Value(value) => value.to_string(),
        Input::Absent => "null".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    /// Hand-written host enum, without the declaration macro.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Light {
        Red,
        Amber,
        Green,
    }

    impl EnumContract for Light {
        const KIND: BackingKind = BackingKind::Unbacked;

        fn cases() -> &'static [Self] {
            &[Light::Red, Light::Amber, Light::Green]
        }

        fn name(self) -> &'static str {
            match self {
                Light::Red => "RED",
                Light::Amber => "AMBER",
                Light::Green => "GREEN",
            }
        }

        fn backing(self) -> Backing {
            Backing::Unbacked
        }

        fn description(self) -> Option<&'static str> {
            match self {
                Light::Red => Some("Stop"),
                _ => None,
            }
        }
    }

    impl From<Light> for Input<'_, Light> {
        fn from(case: Light) -> Self {
            Input::Case(case)
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Level {
        Low,
        High,
    }

    impl EnumContract for Level {
        const KIND: BackingKind = BackingKind::Int;

        fn cases() -> &'static [Self] {
            &[Level::Low, Level::High]
        }

        fn name(self) -> &'static str {
            match self {
                Level::Low => "LOW",
                Level::High => "HIGH",
            }
        }

        fn backing(self) -> Backing {
            match self {
                Level::Low => Backing::Backed(Payload::Int(10)),
                Level::High => Backing::Backed(Payload::Int(20)),
            }
        }
    }

    #[test]
    fn type_name_is_unqualified() {
        assert_eq!(Light::type_name(), "Light");
    }

    #[test]
    fn unbacked_values_are_names() {
        assert_eq!(
            Light::values(),
            vec![Value::Str("RED"), Value::Str("AMBER"), Value::Str("GREEN")]
        );
        assert!(!Light::is_backed());
        assert!(Level::is_backed());
    }

    #[test]
    fn coercion_passes_cases_through() {
        assert_eq!(Light::coerce_enum(Light::Amber), Some(Light::Amber));
        assert_eq!(Light::coerce_enum("GREEN"), Some(Light::Green));
        assert_eq!(Light::coerce_enum("green"), None);
        assert_eq!(Light::coerce_enum(Option::<&str>::None), None);
    }

    #[test]
    fn int_backed_coercion_is_type_exact() {
        assert_eq!(Level::coerce_enum(20), Some(Level::High));
        assert_eq!(Level::coerce_enum("20"), None);
        assert_eq!(Level::coerce_enum("HIGH"), None);
        assert_eq!(Level::coerce_value(10i64), Some(Value::Int(10)));
    }

    #[test]
    fn parse_tries_value_then_name() {
        assert_eq!(Level::parse("10").unwrap(), Level::Low);
        assert_eq!(Level::parse("HIGH").unwrap(), Level::High);
        let err = Level::parse("11").unwrap_err();
        assert!(matches!(err, EnumError::NoMatch { type_name: "Level", .. }));
    }

    #[test]
    fn description_defaults_to_none() {
        assert_eq!(Light::Red.description(), Some("Stop"));
        assert_eq!(Light::Green.description(), None);
        assert_eq!(Level::Low.description(), None);
    }

    #[test]
    fn try_from_value_reports_input() {
        let err = Level::try_from_value(99).unwrap_err();
        assert_eq!(
            err.to_string(),
            "'99' is not a valid backing value for enum Level"
        );
        let err = Level::try_from_value(Option::<i64>::None).unwrap_err();
        assert!(err.to_string().starts_with("'null'"));
    }

    #[test]
    fn seeded_draws_stay_in_declared_set() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let case = Light::random_case_with(&mut rng).unwrap();
            assert!(Light::cases().contains(&case));
            let value = Level::random_with(&mut rng).unwrap();
            assert!(Level::has_value(value, true));
        }
    }
}
