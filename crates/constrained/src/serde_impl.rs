//! `serde` integration.
//!
//! A constrained value serializes as its inner value. Deserialization goes
//! through [`ConstrainedValue::admit`], so input that violates the
//! constraint is a deserialization error instead of a precheck violation.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constraint::Constraint;
use crate::value::ConstrainedValue;
use crate::verifier::Verifier;

impl<T, C, V> Serialize for ConstrainedValue<T, C, V>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.get().serialize(serializer)
    }
}

impl<'de, T, C, V> Deserialize<'de> for ConstrainedValue<T, C, V>
where
    T: Deserialize<'de>,
    C: Constraint<T> + Default,
    V: Verifier<T, C>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = T::deserialize(deserializer)?;
        Self::admit(value).map_err(serde::de::Error::custom)
    }
}
