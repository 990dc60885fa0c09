//! Implementations for deserializations and serializations
//!
//! Values travel as their canonical strings, which round trip exactly
//! (including the `NaN` and `Inf` spellings). Numeric primitives are
//! also accepted on the way in.

use crate::Decimal;

use serde_crate::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

impl Serialize for Decimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(DecimalVisitor)
    }
}

struct DecimalVisitor;

impl<'de> de::Visitor<'de> for DecimalVisitor {
    type Value = Decimal;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a decimal number or its string form")
    }

    fn visit_str<E>(self, value: &str) -> Result<Decimal, E>
    where
        E: de::Error,
    {
        Decimal::from_str(value).map_err(|err| E::custom(format!("{}", err)))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Decimal, E>
    where
        E: de::Error,
    {
        Ok(Decimal::from(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Decimal, E>
    where
        E: de::Error,
    {
        Ok(Decimal::from(value))
    }

    fn visit_f64<E>(self, value: f64) -> Result<Decimal, E>
    where
        E: de::Error,
    {
        Ok(Decimal::from(value))
    }
}
