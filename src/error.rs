/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains [`BoxError`], the default failure payload of an [`Outcome`](`crate::Outcome`),
//! and [`EmptyOptionalError`]

use std::error::Error as StdError;

/// A type-erased error.
///
/// Used as the default error type of [`Outcome`](`crate::Outcome`) so that any error can be carried
/// without spelling out its type, e.g. `Outcome<String>`.
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// An [`Optional`](`crate::Optional`) was expected to hold a value but was empty
#[derive(thiserror::Error, Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[error("optional value is empty")]
pub struct EmptyOptionalError;
