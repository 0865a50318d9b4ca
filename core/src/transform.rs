use crate::maybe::Maybe;
use crate::nil::Nil;

/// Transforms the present value of `maybe` with `transform`.
///
/// An absent `maybe` is passed through with the same diagnostic. The result of `transform` goes through
/// [`Maybe::some`], so when `transform` returns a nil value, the result is absent with the
/// [`NilValue`](crate::diagnostic::OptionError::NilValue) diagnostic. [`flat_map`] does not do this.
///
/// ```
/// use maybe_core::{map, Maybe};
///
/// let mapped = map(Maybe::some(42), |n| format!("value: {}", n));
/// assert_eq!(mapped.unwrap(), "value: 42");
///
/// let mapped = map(Maybe::some(42), |_| None::<Box<i32>>);
/// assert!(mapped.diagnostic().unwrap().is_nil_value());
/// ```
#[inline]
pub fn map<T, U: Nil>(maybe: Maybe<T>, transform: impl FnOnce(T) -> U) -> Maybe<U> {
  match maybe {
    Maybe::Some(value) => Maybe::some(transform(value)),
    Maybe::None(diagnostic) => Maybe::None(diagnostic),
  }
}

/// Transforms the present value of `maybe` with `transform`, like [`map`], but without checking whether the result is
/// nil: it goes through [`Maybe::present`] instead of [`Maybe::some`].
///
/// For result types that do not implement [`Nil`], such as types from other crates.
#[inline]
pub fn map_present<T, U>(maybe: Maybe<T>, transform: impl FnOnce(T) -> U) -> Maybe<U> {
  match maybe {
    Maybe::Some(value) => Maybe::present(transform(value)),
    Maybe::None(diagnostic) => Maybe::None(diagnostic),
  }
}

/// Transforms the present value of `maybe` with `transform`, which decides whether the result is present.
///
/// An absent `maybe` is passed through with the same diagnostic, without calling `transform`. Otherwise, the result
/// of `transform` is returned as-is.
#[inline]
pub fn flat_map<T, U>(maybe: Maybe<T>, transform: impl FnOnce(T) -> Maybe<U>) -> Maybe<U> {
  match maybe {
    Maybe::Some(value) => transform(value),
    Maybe::None(diagnostic) => Maybe::None(diagnostic),
  }
}


#[cfg(test)]
mod tests {
  use std::cell::Cell;

  use crate::diagnostic::Diagnostic;

  use super::*;

  fn parse(text: String) -> Maybe<i32> {
    match text.parse::<i32>() {
      Ok(n) => Maybe::some(n),
      Err(e) => Maybe::none_with(e),
    }
  }

  #[test]
  fn map_some() {
    let mapped = map(Maybe::some(42), |n| format!("value: {}", n));
    assert_eq!(mapped, Maybe::Some("value: 42".to_string()));

    assert_eq!(map(Maybe::some(-5), |n| n * 2), Maybe::Some(-10));
  }

  #[test]
  fn map_none_keeps_diagnostic() {
    let diagnostic = Diagnostic::msg("original error");
    let called = Cell::new(false);
    let mapped: Maybe<String> = map(Maybe::<i32>::none(Some(diagnostic.clone())), |n| {
      called.set(true);
      n.to_string()
    });
    assert!(!called.get());
    assert!(mapped.is_none());
    assert_eq!(mapped.diagnostic(), Some(&diagnostic));
    assert_eq!(mapped.diagnostic().unwrap().to_string(), "original error");

    assert_eq!(map(Maybe::<i32>::none(None), |n| n + 1), Maybe::None(None));
  }

  #[test]
  fn map_to_nil_is_none() {
    let mapped = map(Maybe::some(42), |_| None::<Box<i32>>);
    assert!(mapped.is_none());
    let diagnostic = mapped.diagnostic().unwrap();
    assert!(diagnostic.is_nil_value());
    assert_eq!(diagnostic.to_string(), "option: value cannot be nil");

    let mapped = map(Maybe::some(42), |n| Some(Box::new(n)));
    assert_eq!(*mapped.unwrap().unwrap(), 42);
  }

  #[test]
  fn map_to_dangling_weak_is_none() {
    let mapped = map(Maybe::some(1), |_| std::rc::Weak::<i32>::new());
    assert!(mapped.diagnostic().unwrap().is_nil_value());

    let strong = std::rc::Rc::new(1);
    let mapped = map(Maybe::some(1), |_| std::rc::Rc::downgrade(&strong));
    assert!(mapped.is_some());
  }

  #[test]
  fn map_present_does_not_reclassify() {
    struct Foreign(String);

    let mapped = map_present(Maybe::some(42), |n| Foreign(n.to_string()));
    assert_eq!(mapped.unwrap().0, "42");

    let mapped = map_present(Maybe::some(42), |_| None::<Box<i32>>);
    assert!(mapped.is_some());

    let diagnostic = Diagnostic::msg("original error");
    let called = Cell::new(false);
    let mapped = map_present(Maybe::<i32>::none(Some(diagnostic.clone())), |n| {
      called.set(true);
      Foreign(n.to_string())
    });
    assert!(!called.get());
    assert_eq!(mapped.diagnostic(), Some(&diagnostic));
  }

  #[test]
  fn flat_map_some() {
    assert_eq!(flat_map(Maybe::some("42".to_string()), parse), Maybe::Some(42));

    let failed = flat_map(Maybe::some("not a number".to_string()), parse);
    assert!(failed.is_none());
    let diagnostic = failed.diagnostic().unwrap();
    assert!(diagnostic.is::<std::num::ParseIntError>());
    assert!(!diagnostic.is_nil_value());
  }

  #[test]
  fn flat_map_none_keeps_diagnostic() {
    let diagnostic = Diagnostic::msg("no value");
    let called = Cell::new(false);
    let result = flat_map(Maybe::<String>::none(Some(diagnostic.clone())), |text| {
      called.set(true);
      parse(text)
    });
    assert!(!called.get());
    assert_eq!(result.diagnostic(), Some(&diagnostic));
  }

  #[test]
  fn flat_map_does_not_reclassify() {
    let result = flat_map(Maybe::some(1), |_| Maybe::Some(None::<Box<i32>>));
    assert!(result.is_some());
    assert!(result.unwrap().is_none());

    let diagnostic = Diagnostic::msg("from callback");
    let result = flat_map(Maybe::some(1), |_| Maybe::<i32>::none(Some(diagnostic.clone())));
    assert_eq!(result.diagnostic(), Some(&diagnostic));

    let result = flat_map(Maybe::some(1), |_| Maybe::<i32>::none(None));
    assert_eq!(result, Maybe::None(None));
  }

  #[test]
  fn method_forms() {
    assert_eq!(Maybe::some(2).map(|n| n + 1).flat_map(|n| Maybe::some(n * 10)), Maybe::Some(30));
    assert_eq!(Maybe::some(2).map_present(|n| n * 2).unwrap(), 4);
  }
}
