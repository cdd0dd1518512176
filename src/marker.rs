/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains the public API version markers and the [`is_result`] and [`is_optional`] helpers.
//!
//! Inside a single build, outcomes and optionals are recognized by their type.
//! Values that crossed a build boundary (e.g. a plugin compiled against a different copy of this crate)
//! can't be recognized that way, so instead every instance exposes the version of the public API it implements
//! and two values are considered compatible if their versions match.

use crate::{optional::Optional, outcome::Outcome, plain::PlainValue};

/// Version of the public API of [`Outcome`]
pub const RESULT_API_VERSION: u32 = 4;

/// Version of the public API of [`Optional`]
pub const OPTIONAL_API_VERSION: u32 = 4;

/// Exposes the public API version a value implements, if any.
///
/// Both methods return [`None`] by default, i.e. the value is neither an [`Outcome`] nor an [`Optional`].
pub trait VersionMarker {
	/// The [`Outcome`] API version this value implements
	fn result_api_version(&self) -> Option<u32> {
		None
	}

	/// The [`Optional`] API version this value implements
	fn optional_api_version(&self) -> Option<u32> {
		None
	}
}

/// Checks if `obj` is an [`Outcome`] compatible with this version of the crate
pub fn is_result<T>(obj: &T) -> bool
where
	T: VersionMarker + ?Sized,
{
	obj.result_api_version() == Some(RESULT_API_VERSION)
}

/// Checks if `obj` is an [`Optional`] compatible with this version of the crate
pub fn is_optional<T>(obj: &T) -> bool
where
	T: VersionMarker + ?Sized,
{
	obj.optional_api_version() == Some(OPTIONAL_API_VERSION)
}

impl<V, E> VersionMarker for Outcome<V, E> {
	fn result_api_version(&self) -> Option<u32> {
		Some(Self::PUBLIC_API_VERSION)
	}
}

impl<V> VersionMarker for Optional<V> {
	fn optional_api_version(&self) -> Option<u32> {
		Some(Self::PUBLIC_API_VERSION)
	}
}

impl<T: PlainValue> VersionMarker for T {}

impl VersionMarker for () {}

// None is the closest thing to a null, it never carries a marker
impl<T: VersionMarker> VersionMarker for Option<T> {
	fn result_api_version(&self) -> Option<u32> {
		self.as_ref().and_then(VersionMarker::result_api_version)
	}

	fn optional_api_version(&self) -> Option<u32> {
		self.as_ref().and_then(VersionMarker::optional_api_version)
	}
}
