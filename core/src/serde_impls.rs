//! Serialization of [`Maybe`] as an externally tagged enum: `{"Some": value}`, or `{"None": "diagnostic"}` and
//! `{"None": null}`. Diagnostics are serialized as their message, and deserialized into
//! [`Diagnostic::msg`] diagnostics.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::diagnostic::Diagnostic;
use crate::maybe::Maybe;
use crate::nil::Nil;

#[derive(Serialize)]
#[serde(rename = "Maybe")]
enum MaybeRef<'a, T> {
  Some(&'a T),
  None(Option<String>),
}

#[derive(Deserialize)]
#[serde(rename = "Maybe")]
enum MaybeOwned<T> {
  Some(T),
  None(Option<String>),
}

impl<T: Serialize> Serialize for Maybe<T> {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let maybe = match self {
      Maybe::Some(value) => MaybeRef::Some(value),
      Maybe::None(diagnostic) => MaybeRef::None(diagnostic.as_ref().map(|d| d.to_string())),
    };
    maybe.serialize(serializer)
  }
}

/// Deserializes a present value through [`Maybe::some`], so a nil value becomes absent.
impl<'de, T: Deserialize<'de> + Nil> Deserialize<'de> for Maybe<T> {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let maybe = match MaybeOwned::deserialize(deserializer)? {
      MaybeOwned::Some(value) => Maybe::some(value),
      MaybeOwned::None(message) => Maybe::none(message.map(Diagnostic::msg)),
    };
    Ok(maybe)
  }
}
