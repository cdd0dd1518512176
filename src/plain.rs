/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains the [`PlainValue`] marker trait

use std::{
	borrow::Cow,
	collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
	ffi::OsString,
	path::PathBuf,
	rc::Rc,
	sync::Arc,
	time::Duration,
};

/// A value that isn't a wrapper type itself.
///
/// When a chaining callback (e.g. [`Outcome::on_success`](`crate::Outcome::on_success`)
/// or [`Optional::map`](`crate::Optional::map`)) returns a plain value,
/// it gets wrapped into [`Outcome::Success`](`crate::Outcome::Success`) or [`Optional::Some`](`crate::Optional::Some`) automatically.
/// Wrappers ([`Outcome`](`crate::Outcome`), [`Optional`](`crate::Optional`), [`Result`], [`Option`], `()`) are handled separately
/// and thus must never implement this trait.
///
/// Implement it for your own types to let callbacks return them directly:
///
/// ```
/// use kekka::{PlainValue, success, Outcome};
///
/// #[derive(Debug, PartialEq)]
/// struct User {
/// 	name: String,
/// }
///
/// impl PlainValue for User {}
///
/// let user: Outcome<User, std::io::Error> = success("admin").on_success(|name| User { name: name.to_owned() });
/// assert_eq!(user.unwrap(), User { name: "admin".to_owned() });
/// ```
pub trait PlainValue {}

macro_rules! impl_plain_value {
	(tuples: $(($($param:ident),+)),* $(,)?) => {
		$(impl<$($param),+> PlainValue for ($($param,)+) {})*
	};
	($($ty:ty),* $(,)?) => {
		$(impl PlainValue for $ty {})*
	};
}

impl_plain_value!(
	bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, String,
	OsString, PathBuf, Duration,
);

impl<T: ?Sized> PlainValue for &T {}
impl<B: ToOwned + ?Sized> PlainValue for Cow<'_, B> {}

impl<T> PlainValue for Vec<T> {}
impl<T> PlainValue for VecDeque<T> {}
impl<T, const N: usize> PlainValue for [T; N] {}
impl<K, V, S> PlainValue for HashMap<K, V, S> {}
impl<T, S> PlainValue for HashSet<T, S> {}
impl<K, V> PlainValue for BTreeMap<K, V> {}
impl<T> PlainValue for BTreeSet<T> {}

impl<T: ?Sized> PlainValue for Box<T> {}
impl<T: ?Sized> PlainValue for Rc<T> {}
impl<T: ?Sized> PlainValue for Arc<T> {}

impl_plain_value!(tuples:
	(A),
	(A, B),
	(A, B, C),
	(A, B, C, D),
	(A, B, C, D, E),
	(A, B, C, D, E, F),
	(A, B, C, D, E, F, G),
	(A, B, C, D, E, F, G, H),
	(A, B, C, D, E, F, G, H, I),
	(A, B, C, D, E, F, G, H, I, J),
	(A, B, C, D, E, F, G, H, I, J, K),
	(A, B, C, D, E, F, G, H, I, J, K, L),
);

#[cfg(test)]
mod tests {
	use crate::{Optional, Outcome, some, success};

	#[derive(PartialEq, Eq, Debug)]
	struct Port(u16);

	#[test]
	fn tuples_are_wrapped() {
		let single: Outcome<(i32,), ()> = success(1).on_success(|v| (v,));
		assert_eq!(single, Outcome::Success((1,)));

		let quad = some(1).map(|v| (v, v + 1, v + 2, v + 3));
		assert_eq!(quad, some((1, 2, 3, 4)));
	}

	#[test]
	fn references_are_wrapped() {
		let port = Port(80);

		let borrowed: Outcome<&Port, ()> = success(()).on_success(|()| &port);
		assert_eq!(borrowed, Outcome::Success(&Port(80)));

		let field = some(1).map(|_| &port.0);
		assert_eq!(field, Optional::Some(&80));
	}
}
