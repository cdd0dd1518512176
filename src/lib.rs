/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Value types that carry the outcome of a computation.
//!
//! - [`Outcome<V, E>`]: either a [`Success`](`Outcome::Success`) value or a [`Failure`](`Outcome::Failure`) error
//! - [`Optional<V>`]: either [`Some`](`Optional::Some`) value or [`Empty`](`Optional::Empty`)
//!
//! Both can be chained with callbacks that return either a plain value or the wrapper type itself,
//! which gets flattened instead of nested. See [`IntoOutcome`] and [`IntoOptional`].
//!
//! The [`bridge`] module converts between the two, and the [`future`] module lets async chains
//! run a step only on success or only on failure via [`OutcomeFutureExt`].
//!
//! # Example
//!
//! ```
//! use kekka::prelude::*;
//! use kekka::{Optional, Outcome, success};
//!
//! #[derive(thiserror::Error, Debug)]
//! #[error("user not found")]
//! struct NotFound;
//!
//! let names = Outcome::merge([success::<_, NotFound>("alice"), success("bob")])
//! 	.on_success(|names| names.join(", "));
//! assert_eq!(names.unwrap(), "alice, bob");
//!
//! let user: Outcome<&str, NotFound> = Optional::of_nullable(None).to_outcome(NotFound);
//! assert!(user.is_failure());
//! assert!(user.to_optional().is_empty());
//! ```
//!
//! # Features
//!
//! - `send` (enabled by default): require futures returned by [`OutcomeFutureExt`] to be [`Send`]

pub mod bridge;
pub mod error;
pub mod future;
pub mod marker;
pub mod maybe_send;
pub mod optional;
pub mod outcome;
pub mod plain;

pub use self::{
	bridge::{OptionalOutcomeExt, OutcomeOptionalExt},
	error::{BoxError, EmptyOptionalError},
	future::{OutcomeFutureExt, resolve_from_failure, resolve_from_success},
	marker::{OPTIONAL_API_VERSION, RESULT_API_VERSION, VersionMarker, is_optional, is_result},
	optional::{IntoOptional, Nullable, Optional, OptionalKind, empty, some},
	outcome::{IntoOutcome, Outcome, OutcomeKind, failure, success},
	plain::PlainValue,
};

/// Extension traits needed to chain and convert [`Outcome`] and [`Optional`]
pub mod prelude {
	pub use crate::{
		bridge::{OptionalOutcomeExt as _, OutcomeOptionalExt as _},
		future::OutcomeFutureExt as _,
	};
}
