/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains extension traits that convert between [`Optional`] and [`Outcome`]:
//! - [`OptionalOutcomeExt`] turns an [`Optional`] into an [`Outcome`]
//! - [`OutcomeOptionalExt`] turns an [`Outcome`] into an [`Optional`]

use crate::{
	error::EmptyOptionalError,
	optional::{Nullable, Optional},
	outcome::Outcome,
};

/// Extension methods on [`Optional`] to convert it into an [`Outcome`]
pub trait OptionalOutcomeExt<V> {
	/// Converts [`Optional::Some`] into [`Outcome::Success`] and [`Optional::Empty`] into [`Outcome::Failure`] with the provided error
	fn to_outcome<E>(self, failure: E) -> Outcome<V, E>;

	/// Converts [`Optional::Some`] into [`Outcome::Success`] and [`Optional::Empty`] into [`Outcome::Failure`] with [`EmptyOptionalError`]
	fn to_outcome_or_empty_error(self) -> Outcome<V, EmptyOptionalError>;
}

/// Extension methods on [`Outcome`] to convert it into an [`Optional`]
pub trait OutcomeOptionalExt {
	/// The value of the resulting [`Optional`]
	type Value;

	/// Converts [`Outcome::Success`] into an [`Optional`] and [`Outcome::Failure`] into [`Optional::Empty`].
	///
	/// The error of a failure is discarded since an [`Optional`] can't hold it.
	/// The success value is converted with [`Nullable`]:
	/// a success holding [`None`] or `()` becomes [`Optional::Empty`] too,
	/// while a success holding an [`Optional`] is wrapped as is, not flattened.
	fn to_optional(self) -> Optional<Self::Value>;
}

impl<V> OptionalOutcomeExt<V> for Optional<V> {
	fn to_outcome<E>(self, failure: E) -> Outcome<V, E> {
		match self {
			Optional::Some(value) => Outcome::Success(value),
			Optional::Empty => Outcome::Failure(failure),
		}
	}

	fn to_outcome_or_empty_error(self) -> Outcome<V, EmptyOptionalError> {
		self.to_outcome(EmptyOptionalError)
	}
}

impl<V, E> OutcomeOptionalExt for Outcome<V, E>
where
	V: Nullable,
{
	type Value = V::Value;

	fn to_optional(self) -> Optional<V::Value> {
		match self {
			Outcome::Success(value) => value.into_nullable(),
			Outcome::Failure(_) => {
				tracing::trace!("Discarding the error of a failure converted into an Optional");
				Optional::Empty
			}
		}
	}
}
