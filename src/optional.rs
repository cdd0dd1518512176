/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains the [`Optional`] type, its [`IntoOptional`] conversion trait,
//! and the [`some`] and [`empty`] constructors

use std::{
	fmt::{self, Display},
	future::IntoFuture,
};

use futures::future::{self, Either, Ready};

use crate::{marker::OPTIONAL_API_VERSION, outcome::Outcome, plain::PlainValue};

/// A value that may or may not be present.
///
/// Unlike [`Option`], [`Optional::map`] accepts callbacks that return a plain value, an [`Option`],
/// or an [`Optional`], and flattens the result, see [`IntoOptional`].
#[must_use]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Optional<V> {
	/// The value is present
	Some(V),

	/// There's no value
	Empty,
}

/// Which variant an [`Optional`] is
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[expect(missing_docs, reason = "mirrors the Optional variants")]
pub enum OptionalKind {
	Some,
	Empty,
}

/// Conversion into an [`Optional`], used to normalize values returned by [`Optional::map`] callbacks.
///
/// * an [`Optional`] is returned as is
/// * an [`Option`] is treated as a nullable value: [`None`] becomes [`Optional::Empty`]
/// * `()` is the absence of a value and becomes [`Optional::Empty`]
/// * an [`Outcome`] is a value like any other and becomes [`Optional::Some`]
/// * a [`PlainValue`] becomes [`Optional::Some`]
pub trait IntoOptional {
	/// The value of the resulting [`Optional`]
	type Value;

	/// Converts self into an [`Optional`]
	fn into_optional(self) -> Optional<Self::Value>;
}

/// Conversion of a possibly absent value into an [`Optional`], never flattening.
///
/// Only [`None`] and `()` are absent. Every other value, an [`Optional`] included, becomes [`Optional::Some`]
pub trait Nullable {
	/// The value of the resulting [`Optional`]
	type Value;

	/// Wraps self into an [`Optional`], or returns [`Optional::Empty`] if self is absent
	fn into_nullable(self) -> Optional<Self::Value>;
}

/// Creates a new [`Optional::Some`]. Shorthand for [`Optional::of`]
pub fn some<V>(value: V) -> Optional<V> {
	Optional::Some(value)
}

/// Creates a new [`Optional::Empty`]. Shorthand for [`Optional::empty`]
pub fn empty<V>() -> Optional<V> {
	Optional::Empty
}

impl<V> Optional<V> {
	/// Version of the public API [`Optional`] implements.
	///
	/// See [`VersionMarker`](`crate::VersionMarker`)
	pub const PUBLIC_API_VERSION: u32 = OPTIONAL_API_VERSION;

	/// Creates a new [`Optional::Some`]
	pub fn of(value: V) -> Self {
		Self::Some(value)
	}

	/// Creates a new [`Optional::Empty`]
	pub fn empty() -> Self {
		Self::Empty
	}

	/// Creates an [`Optional::Some`] if `value` is [`Some`], or an [`Optional::Empty`] if it's [`None`]
	pub fn of_nullable(value: Option<V>) -> Self {
		match value {
			Some(value) => Self::Some(value),
			None => Self::Empty,
		}
	}

	/// Returns true if the value is present
	pub fn is_some(&self) -> bool {
		matches!(self, Self::Some(_))
	}

	/// Returns true if there's no value
	pub fn is_empty(&self) -> bool {
		matches!(self, Self::Empty)
	}

	/// Returns which variant this optional is
	pub fn kind(&self) -> OptionalKind {
		match self {
			Self::Some(_) => OptionalKind::Some,
			Self::Empty => OptionalKind::Empty,
		}
	}

	/// Converts from `&Optional<V>` to `Optional<&V>`
	pub fn as_ref(&self) -> Optional<&V> {
		match self {
			Self::Some(value) => Optional::Some(value),
			Self::Empty => Optional::Empty,
		}
	}

	/// Converts into an [`Option`]
	pub fn into_option(self) -> Option<V> {
		match self {
			Self::Some(value) => Some(value),
			Self::Empty => None,
		}
	}

	/// Returns the value or `backup` if empty
	pub fn or_else(self, backup: V) -> V {
		match self {
			Self::Some(value) => value,
			Self::Empty => backup,
		}
	}

	/// Returns a future that resolves to the value, or to the one `supplier` returns if empty.
	///
	/// `supplier` is only called if the optional is empty.
	/// If the value is present, the future is already resolved.
	///
	/// ```
	/// # tokio_test::block_on(async {
	/// use kekka::{empty, some};
	///
	/// assert_eq!(some("value").or_else_get(async || "backup").await, "value");
	/// assert_eq!(empty().or_else_get(async || "backup").await, "backup");
	/// # });
	/// ```
	pub fn or_else_get<F, Fut>(self, supplier: F) -> Either<Ready<V>, Fut::IntoFuture>
	where
		F: FnOnce() -> Fut,
		Fut: IntoFuture<Output = V>,
	{
		match self {
			Self::Some(value) => Either::Left(future::ready(value)),
			Self::Empty => Either::Right(supplier().into_future()),
		}
	}

	/// Returns the value or `error` if empty
	///
	/// # Errors
	/// If the optional is empty
	pub fn or_else_throw<E>(self, error: E) -> Result<V, E> {
		match self {
			Self::Some(value) => Ok(value),
			Self::Empty => Err(error),
		}
	}

	/// Calls `f` with the value and returns what it returned, converted with [`IntoOptional`].
	///
	/// If the optional is empty, `f` isn't called.
	///
	/// ```
	/// use kekka::{Optional, empty, some};
	///
	/// let name = some("world");
	/// assert_eq!(name.map(|name| format!("hello, {name}")), some("hello, world".to_owned()));
	/// assert_eq!(name.map(|_| None::<String>), empty());
	/// assert_eq!(name.map(|_| some(42)), some(42));
	/// ```
	pub fn map<F, R>(self, f: F) -> Optional<R::Value>
	where
		F: FnOnce(V) -> R,
		R: IntoOptional,
	{
		match self {
			Self::Some(value) => f(value).into_optional(),
			Self::Empty => Optional::Empty,
		}
	}
}

impl<V> IntoOptional for Optional<V> {
	type Value = V;

	fn into_optional(self) -> Optional<V> {
		self
	}
}

impl<V> IntoOptional for Option<V> {
	type Value = V;

	fn into_optional(self) -> Optional<V> {
		Optional::of_nullable(self)
	}
}

impl IntoOptional for () {
	type Value = ();

	fn into_optional(self) -> Optional<()> {
		Optional::Empty
	}
}

impl<V, E> IntoOptional for Outcome<V, E> {
	type Value = Self;

	fn into_optional(self) -> Optional<Self> {
		Optional::Some(self)
	}
}

impl<T: PlainValue> IntoOptional for T {
	type Value = T;

	fn into_optional(self) -> Optional<T> {
		Optional::Some(self)
	}
}

impl<V> Nullable for Option<V> {
	type Value = V;

	fn into_nullable(self) -> Optional<V> {
		Optional::of_nullable(self)
	}
}

impl Nullable for () {
	type Value = ();

	fn into_nullable(self) -> Optional<()> {
		Optional::Empty
	}
}

impl<V> Nullable for Optional<V> {
	type Value = Self;

	fn into_nullable(self) -> Optional<Self> {
		Optional::Some(self)
	}
}

impl<V, E> Nullable for Outcome<V, E> {
	type Value = Self;

	fn into_nullable(self) -> Optional<Self> {
		Optional::Some(self)
	}
}

impl<T: PlainValue> Nullable for T {
	type Value = T;

	fn into_nullable(self) -> Optional<T> {
		Optional::Some(self)
	}
}

impl<V> From<Option<V>> for Optional<V> {
	fn from(value: Option<V>) -> Self {
		Self::of_nullable(value)
	}
}

impl<V> From<Optional<V>> for Option<V> {
	fn from(value: Optional<V>) -> Self {
		value.into_option()
	}
}

impl<V> Default for Optional<V> {
	fn default() -> Self {
		Self::Empty
	}
}

impl<V: Display> Display for Optional<V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Some(value) => write!(f, "[Optional-Some ({value})]"),
			Self::Empty => f.write_str("[Optional-Empty]"),
		}
	}
}

#[cfg(test)]
mod tests {
	use std::cell::Cell;

	use super::*;
	use crate::marker::is_optional;

	#[derive(thiserror::Error, PartialEq, Eq, Debug)]
	#[error("some error")]
	struct SomeError;

	#[test]
	fn of_nullable_with_value() {
		let optional = Optional::of_nullable(Some("some value"));

		assert!(optional.is_some());
		assert!(!optional.is_empty());
	}

	#[test]
	fn of_nullable_with_none() {
		let optional = Optional::<&str>::of_nullable(None);

		assert!(!optional.is_some());
		assert!(optional.is_empty());
		assert_eq!(optional.kind(), OptionalKind::Empty);
	}

	#[test]
	fn of_does_not_check_value() {
		let optional = Optional::of(None::<&str>);

		assert_eq!(optional, Optional::Some(None));
		assert_eq!(optional.kind(), OptionalKind::Some);
	}

	#[test]
	fn or_else() {
		assert_eq!(some("some value").or_else("other value"), "some value");
		assert_eq!(empty().or_else("other value"), "other value");
	}

	#[tokio::test]
	async fn or_else_get_returns_value_without_calling_supplier() {
		let called = Cell::new(false);

		let value = some("some value")
			.or_else_get(async || {
				called.set(true);
				"other value"
			})
			.await;

		assert_eq!(value, "some value");
		assert!(!called.get());
	}

	#[tokio::test]
	async fn or_else_get_calls_supplier_if_empty() {
		let value = empty().or_else_get(async || "other value").await;

		assert_eq!(value, "other value");
	}

	#[test]
	fn or_else_throw() {
		assert_eq!(some("some value").or_else_throw(SomeError), Ok("some value"));
		assert_eq!(empty::<&str>().or_else_throw(SomeError), Err(SomeError));
	}

	#[test]
	fn map_skips_callback_if_empty() {
		let called = Cell::new(false);

		let mapped = empty::<&str>().map(|value| {
			called.set(true);
			format!("{value} and again")
		});

		assert!(is_optional(&mapped));
		assert!(mapped.is_empty());
		assert!(!called.get());
	}

	#[test]
	fn map_wraps_plain_value() {
		let mapped = some("some value").map(|value| format!("{value} and again"));

		assert!(is_optional(&mapped));
		assert_eq!(mapped.or_else("something else".to_owned()), "some value and again");
	}

	#[test]
	fn map_collapses_none_and_unit() {
		assert!(some("some value").map(|_| None::<String>).is_empty());
		assert!(some("some value").map(|_| ()).is_empty());
		assert_eq!(some("some value").map(|value| Some(value.len())), some(10));
	}

	#[test]
	fn map_flattens_returned_optional() {
		let other = some("Other better value");

		assert_eq!(some("some value").map(|_| other), other);
		assert!(some("some value").map(|_| empty::<&str>()).is_empty());
	}

	#[test]
	fn map_wraps_returned_outcome() {
		use crate::outcome::{failure, success};

		let mapped = some(1).map(success::<_, SomeError>);
		assert_eq!(mapped, some(success(1)));

		let mapped = some(1).map(|_| failure::<i32, _>(SomeError));
		assert_eq!(mapped, some(failure(SomeError)));
	}

	#[test]
	fn nullable_does_not_flatten() {
		assert_eq!(some(1).into_nullable(), some(some(1)));
		assert_eq!(empty::<i32>().into_nullable(), some(empty()));
		assert!(None::<i32>.into_nullable().is_empty());
		assert!(().into_nullable().is_empty());
		assert_eq!(Some(1).into_nullable(), some(1));
		assert_eq!("some value".into_nullable(), some("some value"));
	}

	#[test]
	fn conversions() {
		assert_eq!(Optional::from(Some(1)), some(1));
		assert_eq!(Option::<i32>::from(empty()), None);
		assert_eq!(some(1).as_ref(), some(&1));
		assert_eq!(Optional::<i32>::default(), empty());
	}

	#[test]
	fn display() {
		assert_eq!(some("value").to_string(), "[Optional-Some (value)]");
		assert_eq!(empty::<&str>().to_string(), "[Optional-Empty]");
	}
}
