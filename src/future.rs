/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains [`OutcomeFutureExt`] that continues an async chain depending on whether it resolved to a success or a failure,
//! and the [`resolve_from_success`] and [`resolve_from_failure`] constructors of already resolved chain steps

use std::future::IntoFuture;

use futures::future::{self, Ready};

use crate::{
	maybe_send::MaybeSend,
	outcome::{IntoOutcome, Outcome},
};

/// Extension methods on futures that resolve to an [`Outcome`].
///
/// A callback may return anything that can be turned into a future whose output implements [`IntoOutcome`]:
/// an [`Outcome`] (an already resolved step), an `async` block resolving to a plain value or a [`Result`],
/// or any other future resolving to an [`Outcome`]. The output is always normalized to an [`Outcome`].
///
/// These methods don't add any suspension points of their own:
/// if the future and the callback's future are ready, the chain resolves on the first poll.
///
/// ```
/// # tokio_test::block_on(async {
/// use kekka::{Outcome, OutcomeFutureExt, resolve_from_success};
///
/// let greeting = resolve_from_success::<_, std::io::Error>("world")
/// 	.then_on_success(async |name| format!("hello, {name}"))
/// 	.then_on_failure(async |_| "hello, whoever you are".to_owned())
/// 	.await;
///
/// assert_eq!(greeting.unwrap(), "hello, world");
/// # });
/// ```
pub trait OutcomeFutureExt<V, E>: Future<Output = Outcome<V, E>> + Sized {
	/// Calls `f` with the value if the future resolved to a [`Success`](`Outcome::Success`).
	///
	/// A [`Failure`](`Outcome::Failure`) is passed through without calling `f`.
	fn then_on_success<F, Fut>(
		self,
		f: F,
	) -> impl Future<Output = Outcome<<Fut::Output as IntoOutcome<E>>::Value, E>> + MaybeSend
	where
		Self: MaybeSend,
		F: FnOnce(V) -> Fut + MaybeSend,
		Fut: IntoFuture,
		Fut::IntoFuture: MaybeSend,
		Fut::Output: IntoOutcome<E>,
		V: MaybeSend,
		E: MaybeSend;

	/// Calls `f` with the error if the future resolved to a [`Failure`](`Outcome::Failure`).
	///
	/// A [`Success`](`Outcome::Success`) is passed through without calling `f`.
	fn then_on_failure<F, Fut>(self, f: F) -> impl Future<Output = Outcome<V, E>> + MaybeSend
	where
		Self: MaybeSend,
		F: FnOnce(E) -> Fut + MaybeSend,
		Fut: IntoFuture,
		Fut::IntoFuture: MaybeSend,
		Fut::Output: IntoOutcome<E, Value = V>,
		V: MaybeSend,
		E: MaybeSend;
}

/// Creates an already resolved [`Outcome::Success`] step of an async chain
pub fn resolve_from_success<V, E>(value: V) -> Ready<Outcome<V, E>> {
	future::ready(Outcome::Success(value))
}

/// Creates an already resolved [`Outcome::Failure`] step of an async chain
pub fn resolve_from_failure<V, E>(error: E) -> Ready<Outcome<V, E>> {
	future::ready(Outcome::Failure(error))
}

impl<T, V, E> OutcomeFutureExt<V, E> for T
where
	T: Future<Output = Outcome<V, E>>,
{
	fn then_on_success<F, Fut>(
		self,
		f: F,
	) -> impl Future<Output = Outcome<<Fut::Output as IntoOutcome<E>>::Value, E>> + MaybeSend
	where
		Self: MaybeSend,
		F: FnOnce(V) -> Fut + MaybeSend,
		Fut: IntoFuture,
		Fut::IntoFuture: MaybeSend,
		Fut::Output: IntoOutcome<E>,
		V: MaybeSend,
		E: MaybeSend,
	{
		async move {
			match self.await {
				Outcome::Success(value) => f(value).await.into_outcome(),
				Outcome::Failure(error) => {
					tracing::trace!("Chain resolved to a failure, skipping the success callback");
					Outcome::Failure(error)
				}
			}
		}
	}

	fn then_on_failure<F, Fut>(self, f: F) -> impl Future<Output = Outcome<V, E>> + MaybeSend
	where
		Self: MaybeSend,
		F: FnOnce(E) -> Fut + MaybeSend,
		Fut: IntoFuture,
		Fut::IntoFuture: MaybeSend,
		Fut::Output: IntoOutcome<E, Value = V>,
		V: MaybeSend,
		E: MaybeSend,
	{
		async move {
			match self.await {
				Outcome::Success(value) => {
					tracing::trace!("Chain resolved to a success, skipping the failure callback");
					Outcome::Success(value)
				}
				Outcome::Failure(error) => f(error).await.into_outcome(),
			}
		}
	}
}
