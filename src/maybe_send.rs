/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains the [`MaybeSend`] trait
//!
//! Futures produced by [`OutcomeFutureExt`](`crate::OutcomeFutureExt`) are bounded by it.
//! With the `send` feature (enabled by default) it's an alias for [`Send`],
//! without it every type implements it, which allows chaining outcomes that hold `!Send` values, e.g. [`Rc`](`std::rc::Rc`).

/// [`Send`] if the `send` feature is enabled, a no-op otherwise
#[cfg(feature = "send")]
pub trait MaybeSend: Send {}

/// [`Send`] if the `send` feature is enabled, a no-op otherwise
#[cfg(not(feature = "send"))]
pub trait MaybeSend {}

#[cfg(feature = "send")]
impl<T: Send> MaybeSend for T {}

#[cfg(not(feature = "send"))]
impl<T> MaybeSend for T {}
