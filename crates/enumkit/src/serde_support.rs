//! Serde glue for host enums.
//!
//! A case serializes as its effective value. Deserialization accepts a string
//! or a number and coerces it strictly, so `"1"` never becomes the case
//! backed by `1`. `define_enum!` wires these in; hand-written host enums can
//! call them from their own `Serialize`/`Deserialize` impls.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::contract::EnumContract;
use crate::value::Value;

/// Wire form accepted for a case.
#[derive(Deserialize)]
#[serde(untagged)]
enum CaseRepr {
    Int(i64),
    Float(f64),
    Text(String),
}

impl CaseRepr {
    fn as_value(&self) -> Value<'_> {
        match self {
            CaseRepr::Int(n) => Value::Int(*n),
            CaseRepr::Float(x) => Value::Float(*x),
            CaseRepr::Text(s) => Value::Str(s),
        }
    }
}

pub fn serialize_case<E, S>(case: &E, serializer: S) -> Result<S::Ok, S::Error>
where
    E: EnumContract,
    S: Serializer,
{
    case.value().serialize(serializer)
}

pub fn deserialize_case<'de, E, D>(deserializer: D) -> Result<E, D::Error>
where
    E: EnumContract,
    D: Deserializer<'de>,
{
    let repr = CaseRepr::deserialize(deserializer)?;
    E::try_from_value(repr.as_value()).map_err(|err| {
        debug!(enum_type = E::type_name(), error = %err, "rejected serialized case");
        de::Error::custom(err)
    })
}
