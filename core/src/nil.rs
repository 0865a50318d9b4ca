//! Decides whether a value handed to [`Maybe::some`](crate::maybe::Maybe::some) is actually absent.
//!
//! Only types with a distinguished "no referent" zero form are nil-capable: [`Option`] (covering nullable boxes,
//! references, shared pointers, callables, dynamic wrappers, collections, and channel handles) whose zero form is
//! [`None`], raw pointers whose zero form is the null pointer, and weak pointers whose zero form is the dangling
//! `Weak::new()`. Every other type is never nil.
//!
//! Types from other crates cannot implement [`Nil`] outside of their own crate. Use
//! [`Maybe::present`](crate::maybe::Maybe::present) and [`map_present`](crate::transform::map_present) for those,
//! which skip classification.

use std::borrow::Cow;
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::ffi::{CStr, CString, OsStr, OsString};
use std::num::{
  NonZeroI128, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI8, NonZeroIsize,
  NonZeroU128, NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU8, NonZeroUsize,
};
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::ptr::NonNull;
use std::rc::{self, Rc};
use std::sync::mpsc::{Receiver, Sender, SyncSender};
use std::sync::{self, Arc, Mutex, RwLock};
use std::time::{Duration, Instant, SystemTime};

/// Absence classification.
///
/// Types without a zero form implement this with the default method, which never classifies a value as nil. For
/// your own types, write an empty `impl Nil for MyType {}` or use [`impl_never_nil!`](crate::impl_never_nil).
pub trait Nil {
  /// Returns true if `self` is the zero form of a nil-capable type.
  #[inline]
  fn is_nil(&self) -> bool { false }
}

/// Returns true if `value` is the zero form of a nil-capable type.
#[inline]
pub fn is_nil<T: Nil + ?Sized>(value: &T) -> bool {
  value.is_nil()
}


impl<T> Nil for Option<T> {
  #[inline]
  fn is_nil(&self) -> bool { self.is_none() }
}

impl<T: ?Sized> Nil for *const T {
  #[inline]
  fn is_nil(&self) -> bool { (*self).is_null() }
}

impl<T: ?Sized> Nil for *mut T {
  #[inline]
  fn is_nil(&self) -> bool { (*self).is_null() }
}

impl<T> Nil for rc::Weak<T> {
  #[inline]
  fn is_nil(&self) -> bool { self.ptr_eq(&rc::Weak::new()) }
}

impl<T> Nil for sync::Weak<T> {
  #[inline]
  fn is_nil(&self) -> bool { self.ptr_eq(&sync::Weak::new()) }
}


/// Implements [`Nil`] for types that are never nil.
#[macro_export]
macro_rules! impl_never_nil {
  ($($ty:ty),* $(,)?) => {
    $(impl $crate::nil::Nil for $ty {})*
  };
}

impl_never_nil!(
  (), bool, char,
  u8, u16, u32, u64, u128, usize,
  i8, i16, i32, i64, i128, isize,
  f32, f64,
  NonZeroU8, NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize,
  NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize,
  str, String, CStr, CString, OsStr, OsString, Path, PathBuf,
  Duration, Instant, SystemTime,
  crate::diagnostic::Diagnostic, crate::diagnostic::OptionError,
);

macro_rules! impl_never_nil_generic {
  ($(<$($param:ident),+> $ty:ty),* $(,)?) => {
    $(impl<$($param: ?Sized),+> Nil for $ty {})*
  };
}

impl_never_nil_generic!(
  <T> &T,
  <T> &mut T,
  <T> Box<T>,
  <T> Rc<T>,
  <T> Arc<T>,
  <T> NonNull<T>,
  <T> Mutex<T>,
  <T> RwLock<T>,
  <T> RefCell<T>,
);

impl<T> Nil for [T] {}
impl<T, const N: usize> Nil for [T; N] {}
impl<T> Nil for Vec<T> {}
impl<T> Nil for VecDeque<T> {}
impl<T> Nil for LinkedList<T> {}
impl<T> Nil for BinaryHeap<T> {}
impl<T> Nil for Sender<T> {}
impl<T> Nil for SyncSender<T> {}
impl<T> Nil for Receiver<T> {}
impl<P> Nil for Pin<P> {}
impl<T> Nil for Cell<T> {}
impl<K, V, S> Nil for HashMap<K, V, S> {}
impl<K, V> Nil for BTreeMap<K, V> {}
impl<T, S> Nil for HashSet<T, S> {}
impl<T> Nil for BTreeSet<T> {}
impl<B: ToOwned + ?Sized> Nil for Cow<'_, B> {}
impl<T, E> Nil for Result<T, E> {}

macro_rules! impl_never_nil_fn {
  ($($arg:ident),*) => {
    impl<R, $($arg),*> Nil for fn($($arg),*) -> R {}
  };
}

impl_never_nil_fn!();
impl_never_nil_fn!(A);
impl_never_nil_fn!(A, B);
impl_never_nil_fn!(A, B, C);
impl_never_nil_fn!(A, B, C, D);

// Function pointers taking a reference are higher-ranked over its lifetime, so `fn(A) -> R` does not cover them.
#[allow(coherence_leak_check)]
impl<R, A: ?Sized> Nil for fn(&A) -> R {}
#[allow(coherence_leak_check)]
impl<R, A: ?Sized> Nil for fn(&mut A) -> R {}
#[allow(coherence_leak_check)]
impl<R, A: ?Sized, B: ?Sized> Nil for fn(&A, &B) -> R {}

macro_rules! impl_never_nil_tuple {
  ($($param:ident),+) => {
    impl<$($param),+> Nil for ($($param,)+) {}
  };
}

impl_never_nil_tuple!(A);
impl_never_nil_tuple!(A, B);
impl_never_nil_tuple!(A, B, C);
impl_never_nil_tuple!(A, B, C, D);
impl_never_nil_tuple!(A, B, C, D, E);
impl_never_nil_tuple!(A, B, C, D, E, F);
