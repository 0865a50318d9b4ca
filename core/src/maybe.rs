use crate::diagnostic::Diagnostic;
use crate::nil::Nil;
use crate::transform;

/// A value that may be absent, with a [diagnostic](Diagnostic) explaining why it is absent.
///
/// Create a present value with [`some`](Self::some), which refuses nil values (see [`Nil`]), and an absent one with
/// [`none`](Self::none). Check with [`is_some`](Self::is_some)/[`is_none`](Self::is_none) before calling
/// [`unwrap`](Self::unwrap), or use one of the non-panicking accessors.
#[derive(Clone, Eq, PartialEq, Debug)]
#[must_use]
pub enum Maybe<T> {
  /// A present value.
  Some(T),
  /// No value, with an optional diagnostic explaining why.
  None(Option<Diagnostic>),
}

impl<T: Nil> Maybe<T> {
  /// Creates a present value, unless `value` [is nil](Nil::is_nil), in which case the result is
  /// [`None`](Self::None) with the [`NilValue`](crate::diagnostic::OptionError::NilValue) diagnostic.
  ///
  /// ```
  /// use maybe_core::Maybe;
  ///
  /// assert!(Maybe::some(42).is_some());
  /// assert!(Maybe::some(None::<Box<i32>>).is_none());
  /// ```
  #[inline]
  pub fn some(value: T) -> Self {
    if value.is_nil() {
      trace!(value_type = std::any::type_name::<T>(), "value is nil; creating `None` with nil value diagnostic");
      return Self::None(Some(Diagnostic::nil_value()));
    }
    Self::Some(value)
  }
}

impl<T> Maybe<T> {
  /// Creates a present value without checking whether `value` is nil.
  ///
  /// For types that do not implement [`Nil`], such as types from other crates. Prefer [`some`](Self::some) for types
  /// that do.
  ///
  /// ```
  /// use maybe_core::Maybe;
  ///
  /// let present = Maybe::present(None::<Box<i32>>);
  /// assert!(present.is_some());
  /// ```
  #[inline]
  pub fn present(value: T) -> Self {
    Self::Some(value)
  }

  /// Creates an absent value carrying `diagnostic` as-is, which may be `None`.
  #[inline]
  pub fn none(diagnostic: Option<Diagnostic>) -> Self {
    Self::None(diagnostic)
  }

  /// Creates an absent value with `error` as its diagnostic.
  #[inline]
  pub fn none_with(error: impl Into<Diagnostic>) -> Self {
    Self::None(Some(error.into()))
  }

  /// Creates a present value from a nullable handle, or [`None`](Self::None) with the
  /// [`NilValue`](crate::diagnostic::OptionError::NilValue) diagnostic if `value` is `None`.
  #[inline]
  pub fn from_nullable(value: Option<T>) -> Self {
    match value {
      Some(value) => Self::Some(value),
      None => {
        trace!(value_type = std::any::type_name::<T>(), "nullable handle is `None`; creating `None` with nil value diagnostic");
        Self::None(Some(Diagnostic::nil_value()))
      }
    }
  }


  #[inline]
  pub fn is_some(&self) -> bool { matches!(self, Self::Some(_)) }
  #[inline]
  pub fn is_none(&self) -> bool { matches!(self, Self::None(_)) }

  /// Returns the diagnostic if this is [`None`](Self::None), or `None` otherwise (including when no diagnostic was
  /// given).
  #[inline]
  pub fn diagnostic(&self) -> Option<&Diagnostic> {
    match self {
      Self::Some(_) => None,
      Self::None(diagnostic) => diagnostic.as_ref(),
    }
  }


  /// Returns the present value.
  ///
  /// # Panics
  ///
  /// Panics if this is [`None`](Self::None). Calling this on an absent value is a bug in the caller.
  #[inline]
  #[track_caller]
  pub fn unwrap(self) -> T {
    match self {
      Self::Some(value) => value,
      Self::None(Some(diagnostic)) => panic!("called `Maybe::unwrap()` on a `None` value: {}", diagnostic),
      Self::None(None) => panic!("called `Maybe::unwrap()` on a `None` value"),
    }
  }

  /// Returns the present value.
  ///
  /// # Panics
  ///
  /// Panics with `message` if this is [`None`](Self::None).
  #[inline]
  #[track_caller]
  pub fn expect(self, message: &str) -> T {
    match self {
      Self::Some(value) => value,
      Self::None(Some(diagnostic)) => panic!("{}: {}", message, diagnostic),
      Self::None(None) => panic!("{}", message),
    }
  }

  #[inline]
  pub fn unwrap_or(self, fallback: T) -> T {
    match self {
      Self::Some(value) => value,
      Self::None(_) => fallback,
    }
  }

  /// Returns the present value, or the result of `produce` if absent. `produce` is only called when absent.
  #[inline]
  pub fn unwrap_or_else(self, produce: impl FnOnce() -> T) -> T {
    match self {
      Self::Some(value) => value,
      Self::None(_) => produce(),
    }
  }


  /// Keeps a present value only if `predicate` holds for it.
  ///
  /// An absent value is returned unchanged, keeping its diagnostic. A present value that fails `predicate` is
  /// discarded, and the result carries the [`PredicateUnsatisfied`](crate::diagnostic::OptionError::PredicateUnsatisfied)
  /// diagnostic.
  #[inline]
  pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
    match self {
      Self::Some(value) => {
        if predicate(&value) {
          return Self::Some(value);
        }
        trace!(value_type = std::any::type_name::<T>(), "value did not satisfy predicate; creating `None` with predicate diagnostic");
        Self::None(Some(Diagnostic::predicate_unsatisfied()))
      }
      none => none,
    }
  }

  /// Method form of [`transform::map`].
  #[inline]
  pub fn map<U: Nil>(self, transform: impl FnOnce(T) -> U) -> Maybe<U> {
    transform::map(self, transform)
  }

  /// Method form of [`transform::map_present`].
  #[inline]
  pub fn map_present<U>(self, transform: impl FnOnce(T) -> U) -> Maybe<U> {
    transform::map_present(self, transform)
  }

  /// Method form of [`transform::flat_map`].
  #[inline]
  pub fn flat_map<U>(self, transform: impl FnOnce(T) -> Maybe<U>) -> Maybe<U> {
    transform::flat_map(self, transform)
  }


  /// Borrows the present value, sharing the diagnostic when absent.
  #[inline]
  pub fn as_ref(&self) -> Maybe<&T> {
    match self {
      Self::Some(value) => Maybe::Some(value),
      Self::None(diagnostic) => Maybe::None(diagnostic.clone()),
    }
  }

  /// Converts into an [`Option`], dropping the diagnostic.
  #[inline]
  pub fn into_option(self) -> Option<T> {
    match self {
      Self::Some(value) => Some(value),
      Self::None(_) => None,
    }
  }

  /// Converts into a [`Result`] with the diagnostic as error.
  #[inline]
  pub fn into_result(self) -> Result<T, Option<Diagnostic>> {
    match self {
      Self::Some(value) => Ok(value),
      Self::None(diagnostic) => Err(diagnostic),
    }
  }
}

impl<T> Default for Maybe<T> {
  #[inline]
  fn default() -> Self { Self::None(None) }
}

impl<T> From<Maybe<T>> for Option<T> {
  #[inline]
  fn from(maybe: Maybe<T>) -> Self { maybe.into_option() }
}

impl<T: Nil, E: Into<Diagnostic>> From<Result<T, E>> for Maybe<T> {
  #[inline]
  fn from(result: Result<T, E>) -> Self {
    match result {
      Ok(value) => Self::some(value),
      Err(error) => Self::none_with(error),
    }
  }
}

impl<T> Nil for Maybe<T> {}
