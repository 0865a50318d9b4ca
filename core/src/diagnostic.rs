use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::sync::Arc;

use thiserror::Error;

/// Fixed diagnostics produced by [`Maybe`](crate::maybe::Maybe) itself, as opposed to diagnostics supplied by callers.
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Error)]
pub enum OptionError {
  /// A value handed to [`Maybe::some`](crate::maybe::Maybe::some) was the zero form of a nil-capable type.
  #[error("option: value cannot be nil")]
  NilValue,
  /// A present value was rejected by [`Maybe::filter`](crate::maybe::Maybe::filter).
  #[error("option: value did not satisfy predicate")]
  PredicateUnsatisfied,
}

/// Diagnostic that only carries a message.
#[derive(Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Error)]
#[error("{0}")]
pub struct MessageError(pub String);


/// Explanation of why a [`Maybe`](crate::maybe::Maybe) holds no value.
///
/// Wraps any error in a shared handle, so cloning is cheap and never copies the error. Two diagnostics are equal
/// only when they are the same instance: a diagnostic that is passed along (by [`map`](crate::transform::map),
/// [`flat_map`](crate::transform::flat_map), or [`filter`](crate::maybe::Maybe::filter)) stays equal to the one it
/// was created as, while two separately created diagnostics with the same text are not.
///
/// Does not implement [`Error`] itself so that any error can be converted into it with `?`/`into()`. Use
/// [`as_error`](Self::as_error) to get at the error.
#[derive(Clone)]
pub struct Diagnostic(Arc<dyn Error + Send + Sync + 'static>);

impl Diagnostic {
  #[inline]
  pub fn new<E: Error + Send + Sync + 'static>(error: E) -> Self {
    Self(Arc::new(error))
  }

  /// Creates a diagnostic from just a message.
  #[inline]
  pub fn msg(message: impl Display) -> Self {
    Self::new(MessageError(message.to_string()))
  }

  #[inline]
  pub fn from_boxed(error: Box<dyn Error + Send + Sync + 'static>) -> Self {
    Self(Arc::from(error))
  }

  #[inline]
  pub(crate) fn nil_value() -> Self { Self::new(OptionError::NilValue) }
  #[inline]
  pub(crate) fn predicate_unsatisfied() -> Self { Self::new(OptionError::PredicateUnsatisfied) }


  #[inline]
  pub fn as_error(&self) -> &(dyn Error + Send + Sync + 'static) {
    self.0.as_ref()
  }

  #[inline]
  pub fn downcast_ref<E: Error + 'static>(&self) -> Option<&E> {
    self.0.downcast_ref()
  }

  #[inline]
  pub fn is<E: Error + 'static>(&self) -> bool {
    self.0.is::<E>()
  }

  /// Returns true if this is the fixed [`OptionError::NilValue`] diagnostic.
  #[inline]
  pub fn is_nil_value(&self) -> bool {
    self.downcast_ref::<OptionError>() == Some(&OptionError::NilValue)
  }

  /// Returns true if this is the fixed [`OptionError::PredicateUnsatisfied`] diagnostic.
  #[inline]
  pub fn is_predicate_unsatisfied(&self) -> bool {
    self.downcast_ref::<OptionError>() == Some(&OptionError::PredicateUnsatisfied)
  }

  #[inline]
  pub fn ptr_eq(&self, other: &Self) -> bool {
    Arc::ptr_eq(&self.0, &other.0)
  }
}

impl<E: Error + Send + Sync + 'static> From<E> for Diagnostic {
  #[inline]
  fn from(error: E) -> Self { Self::new(error) }
}

impl AsRef<dyn Error + Send + Sync + 'static> for Diagnostic {
  #[inline]
  fn as_ref(&self) -> &(dyn Error + Send + Sync + 'static) { self.as_error() }
}

impl PartialEq for Diagnostic {
  #[inline]
  fn eq(&self, other: &Self) -> bool { self.ptr_eq(other) }
}
impl Eq for Diagnostic {}

impl Display for Diagnostic {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    Display::fmt(&self.0, f)
  }
}

impl Debug for Diagnostic {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    Debug::fmt(&self.0, f)
  }
}


#[cfg(test)]
mod tests {
  use std::num::ParseIntError;

  use super::*;

  #[test]
  fn fixed_texts() {
    assert_eq!(OptionError::NilValue.to_string(), "option: value cannot be nil");
    assert_eq!(OptionError::PredicateUnsatisfied.to_string(), "option: value did not satisfy predicate");
  }

  #[test]
  fn equality_is_identity() {
    let diagnostic = Diagnostic::msg("original error");
    let clone = diagnostic.clone();
    assert_eq!(diagnostic, clone);
    assert_ne!(diagnostic, Diagnostic::msg("original error"));
    assert_eq!(diagnostic.to_string(), "original error");
  }

  #[test]
  fn downcast() {
    let error = "x".parse::<i32>().unwrap_err();
    let diagnostic: Diagnostic = error.clone().into();
    assert!(diagnostic.is::<ParseIntError>());
    assert_eq!(diagnostic.downcast_ref::<ParseIntError>(), Some(&error));
    assert!(!diagnostic.is_nil_value());

    assert!(Diagnostic::nil_value().is_nil_value());
    assert!(Diagnostic::predicate_unsatisfied().is_predicate_unsatisfied());
    assert!(!Diagnostic::predicate_unsatisfied().is_nil_value());
  }

  #[test]
  fn from_boxed() {
    let boxed: Box<dyn Error + Send + Sync> = Box::new(MessageError("boxed".to_string()));
    let diagnostic = Diagnostic::from_boxed(boxed);
    assert_eq!(diagnostic.to_string(), "boxed");
    assert_eq!(diagnostic.downcast_ref::<MessageError>(), Some(&MessageError("boxed".to_string())));
  }
}
