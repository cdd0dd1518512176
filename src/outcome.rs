/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains the [`Outcome`] type, its [`IntoOutcome`] conversion trait,
//! and the [`success`] and [`failure`] constructors

use std::{
	fmt::{self, Debug, Display},
	future::IntoFuture,
};

use either::Either;
use futures::future::{self, Ready};

use crate::{error::BoxError, marker::RESULT_API_VERSION, optional::Optional, plain::PlainValue};

/// The result of a computation: either a [`Success`](`Outcome::Success`) value or a [`Failure`](`Outcome::Failure`) error.
///
/// Unlike [`Result`], chaining methods accept callbacks that return either a plain value (which gets wrapped into a success)
/// or an [`Outcome`] (which is returned as is), see [`IntoOutcome`].
#[must_use = "this `Outcome` may be a `Failure`, which should be handled"]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Outcome<V, E = BoxError> {
	/// The computation succeeded with this value
	Success(V),

	/// The computation failed with this error
	Failure(E),
}

/// Which variant an [`Outcome`] is
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[expect(missing_docs, reason = "mirrors the Outcome variants")]
pub enum OutcomeKind {
	Success,
	Failure,
}

/// Conversion into an [`Outcome`], used to normalize values returned by chaining callbacks.
///
/// * an [`Outcome`] is returned as is
/// * a [`Result`] is converted to a [`Success`](`Outcome::Success`) or a [`Failure`](`Outcome::Failure`)
/// * everything else ([`PlainValue`], [`Option`], [`Optional`], `()`) is wrapped into a [`Success`](`Outcome::Success`)
pub trait IntoOutcome<E> {
	/// The success value of the resulting [`Outcome`]
	type Value;

	/// Converts self into an [`Outcome`]
	fn into_outcome(self) -> Outcome<Self::Value, E>;
}

/// Creates a new [`Outcome::Success`]. Shorthand for [`Outcome::from_success`]
pub fn success<V, E>(value: V) -> Outcome<V, E> {
	Outcome::Success(value)
}

/// Creates a new [`Outcome::Failure`]. Shorthand for [`Outcome::from_failure`]
pub fn failure<V, E>(error: E) -> Outcome<V, E> {
	Outcome::Failure(error)
}

impl<V, E> Outcome<V, E> {
	/// Version of the public API [`Outcome`] implements.
	///
	/// See [`VersionMarker`](`crate::VersionMarker`)
	pub const PUBLIC_API_VERSION: u32 = RESULT_API_VERSION;

	/// Creates a new [`Outcome::Success`]
	pub fn from_success(value: V) -> Self {
		Self::Success(value)
	}

	/// Creates a new [`Outcome::Failure`]
	pub fn from_failure(error: E) -> Self {
		Self::Failure(error)
	}

	/// Returns true if the outcome is a [`Success`](`Outcome::Success`)
	pub fn is_success(&self) -> bool {
		matches!(self, Self::Success(_))
	}

	/// Returns true if the outcome is a [`Failure`](`Outcome::Failure`)
	pub fn is_failure(&self) -> bool {
		matches!(self, Self::Failure(_))
	}

	/// Returns which variant this outcome is
	pub fn kind(&self) -> OutcomeKind {
		match self {
			Self::Success(_) => OutcomeKind::Success,
			Self::Failure(_) => OutcomeKind::Failure,
		}
	}

	/// Converts from `&Outcome<V, E>` to `Outcome<&V, &E>`
	pub fn as_ref(&self) -> Outcome<&V, &E> {
		match self {
			Self::Success(value) => Outcome::Success(value),
			Self::Failure(error) => Outcome::Failure(error),
		}
	}

	/// Returns a reference to the payload, whichever variant it is
	pub fn as_either(&self) -> Either<&V, &E> {
		match self {
			Self::Success(value) => Either::Left(value),
			Self::Failure(error) => Either::Right(error),
		}
	}

	/// Returns the payload, whichever variant it is
	pub fn into_either(self) -> Either<V, E> {
		match self {
			Self::Success(value) => Either::Left(value),
			Self::Failure(error) => Either::Right(error),
		}
	}

	/// Converts the outcome into a [`Result`] to be able to use `?` on it
	///
	/// # Errors
	/// If the outcome is a [`Failure`](`Outcome::Failure`)
	pub fn into_result(self) -> Result<V, E> {
		match self {
			Self::Success(value) => Ok(value),
			Self::Failure(error) => Err(error),
		}
	}

	/// Returns the [`Success`](`Outcome::Success`) value.
	///
	/// # Panics
	/// Panics with the carried error if the outcome is a [`Failure`](`Outcome::Failure`).
	/// Use [`Outcome::into_result`] to handle the error instead.
	#[track_caller]
	pub fn unwrap(self) -> V
	where
		E: Debug,
	{
		match self {
			Self::Success(value) => value,
			Self::Failure(error) => {
				unwrap_failed("called `Outcome::unwrap()` on a `Failure` value", &error)
			}
		}
	}

	/// Returns the [`Success`](`Outcome::Success`) value.
	///
	/// # Panics
	/// Panics with the provided message and the carried error if the outcome is a [`Failure`](`Outcome::Failure`)
	#[track_caller]
	pub fn expect(self, msg: &str) -> V
	where
		E: Debug,
	{
		match self {
			Self::Success(value) => value,
			Self::Failure(error) => unwrap_failed(msg, &error),
		}
	}

	/// Calls `f` with the [`Success`](`Outcome::Success`) value and returns what it returned, converted with [`IntoOutcome`].
	///
	/// If `f` returns an [`Outcome`], it's returned as is, e.g. to fail in the middle of a chain.
	/// Otherwise the returned value is wrapped into a [`Success`](`Outcome::Success`).
	/// If the outcome is a [`Failure`](`Outcome::Failure`), `f` isn't called and the failure is returned.
	///
	/// ```
	/// use kekka::{Outcome, failure, success};
	///
	/// let name: Outcome<&str, String> = success("world");
	/// let greeting = name.on_success(|name| format!("hello, {name}"));
	/// assert_eq!(greeting, success("hello, world".to_owned()));
	///
	/// let checked = greeting.on_success(|greeting| {
	/// 	if greeting.len() > 5 {
	/// 		failure("too long".to_owned())
	/// 	} else {
	/// 		success(greeting)
	/// 	}
	/// });
	/// assert!(checked.is_failure());
	/// ```
	pub fn on_success<F, R>(self, f: F) -> Outcome<R::Value, E>
	where
		F: FnOnce(V) -> R,
		R: IntoOutcome<E>,
	{
		match self {
			Self::Success(value) => f(value).into_outcome(),
			Self::Failure(error) => Outcome::Failure(error),
		}
	}

	/// Calls `f` with the [`Failure`](`Outcome::Failure`) error and returns what it returned, converted with [`IntoOutcome`].
	///
	/// Use it to recover from a failure with a plain value, or to replace the failure with a different one.
	/// If the outcome is a [`Success`](`Outcome::Success`), `f` isn't called and the outcome is returned unchanged.
	pub fn on_failure<F, R>(self, f: F) -> Self
	where
		F: FnOnce(E) -> R,
		R: IntoOutcome<E, Value = V>,
	{
		match self {
			Self::Success(value) => Self::Success(value),
			Self::Failure(error) => f(error).into_outcome(),
		}
	}

	/// Merges a list of outcomes into a single outcome.
	///
	/// Returns a [`Success`](`Outcome::Success`) with all values in the original order if every outcome succeeded,
	/// or the first [`Failure`](`Outcome::Failure`) otherwise.
	/// Nothing past the first failure is pulled from `results`.
	///
	/// ```
	/// use kekka::{Outcome, failure, success};
	///
	/// let merged = Outcome::merge([success("some"), success("value")]);
	/// assert_eq!(merged, Outcome::<_, &str>::Success(vec!["some", "value"]));
	///
	/// let merged = Outcome::merge([success("some"), failure("first"), failure("second")]);
	/// assert_eq!(merged, Outcome::Failure("first"));
	/// ```
	pub fn merge<I>(results: I) -> Outcome<Vec<V>, E>
	where
		I: IntoIterator<Item = Self>,
	{
		let results = results.into_iter();
		let mut values = Vec::with_capacity(results.size_hint().0);

		for (idx, result) in results.enumerate() {
			match result {
				Self::Success(value) => values.push(value),
				Self::Failure(error) => {
					tracing::trace!("Outcome #{idx} is a failure, stopping the merge");
					return Outcome::Failure(error);
				}
			}
		}

		Outcome::Success(values)
	}
}

#[track_caller]
fn unwrap_failed(msg: &str, error: &dyn Debug) -> ! {
	panic!("{msg}: {error:?}");
}

impl<V, E> IntoOutcome<E> for Outcome<V, E> {
	type Value = V;

	fn into_outcome(self) -> Outcome<V, E> {
		self
	}
}

impl<V, E> IntoOutcome<E> for Result<V, E> {
	type Value = V;

	fn into_outcome(self) -> Outcome<V, E> {
		self.into()
	}
}

impl<T, E> IntoOutcome<E> for Option<T> {
	type Value = Self;

	fn into_outcome(self) -> Outcome<Self, E> {
		Outcome::Success(self)
	}
}

impl<V, E> IntoOutcome<E> for Optional<V> {
	type Value = Self;

	fn into_outcome(self) -> Outcome<Self, E> {
		Outcome::Success(self)
	}
}

impl<E> IntoOutcome<E> for () {
	type Value = ();

	fn into_outcome(self) -> Outcome<(), E> {
		Outcome::Success(())
	}
}

impl<T: PlainValue, E> IntoOutcome<E> for T {
	type Value = T;

	fn into_outcome(self) -> Outcome<T, E> {
		Outcome::Success(self)
	}
}

impl<V, E> From<Result<V, E>> for Outcome<V, E> {
	fn from(result: Result<V, E>) -> Self {
		match result {
			Ok(value) => Self::Success(value),
			Err(error) => Self::Failure(error),
		}
	}
}

impl<V, E> From<Outcome<V, E>> for Result<V, E> {
	fn from(outcome: Outcome<V, E>) -> Self {
		outcome.into_result()
	}
}

impl<V, E> FromIterator<Outcome<V, E>> for Outcome<Vec<V>, E> {
	fn from_iter<I: IntoIterator<Item = Outcome<V, E>>>(iter: I) -> Self {
		Outcome::merge(iter)
	}
}

/// An outcome is an already resolved step of an async chain
impl<V, E> IntoFuture for Outcome<V, E> {
	type Output = Self;
	type IntoFuture = Ready<Self>;

	fn into_future(self) -> Self::IntoFuture {
		future::ready(self)
	}
}

impl<V: Display, E: Display> Display for Outcome<V, E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Success(value) => write!(f, "[Outcome-Success ({value})]"),
			Self::Failure(error) => write!(f, "[Outcome-Failure ({error})]"),
		}
	}
}
