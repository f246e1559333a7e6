//! Serde support so flag values can also live in configuration layers.
//!
//! Lists serialize to their delimited form. They deserialize from either a
//! delimited string, which is split and validated like flag input, or a
//! sequence of strings, where each entry is validated as one element and
//! never split. Scalars use their rendering and map to `none` when unset.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::validate::Validator;
use crate::{List, Scalar};

impl<V: Validator> Serialize for List<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<V: Validator> Serialize for Scalar<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if let Some(value) = self.get() {
            return serializer.collect_str(value);
        }
        serializer.serialize_none()
    }
}

struct ListVisitor<V>(PhantomData<fn() -> V>);

impl<'de, V: Validator> Visitor<'de> for ListVisitor<V> {
    type Value = List<V>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a comma-separated string or a sequence of strings")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut list = List::new();
        while let Some(raw) = seq.next_element::<String>()? {
            list.push(V::validate(&raw).map_err(de::Error::custom)?);
        }
        Ok(list)
    }
}

impl<'de, V: Validator> Deserialize<'de> for List<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ListVisitor(PhantomData))
    }
}

struct ScalarVisitor<V>(PhantomData<fn() -> V>);

impl<'de, V: Validator> Visitor<'de> for ScalarVisitor<V> {
    type Value = Scalar<V>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or nothing")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Scalar::new())
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Scalar::new())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }
}

impl<'de, V: Validator> Deserialize<'de> for Scalar<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_option(ScalarVisitor(PhantomData))
    }
}
