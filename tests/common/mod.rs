/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Helpers shared between integration tests

use tracing_subscriber::{EnvFilter, filter::LevelFilter};

#[derive(thiserror::Error, Clone, PartialEq, Eq, Debug)]
#[error("{0}")]
pub struct TestError(pub &'static str);

/// Installs a tracing subscriber that writes through the test harness.
///
/// Set `RUST_LOG=kekka=trace` to see the chain being routed.
/// Every test calls this, so an already installed subscriber isn't an error.
pub fn set_up_logging() {
	let env_filter = EnvFilter::builder()
		.with_default_directive(LevelFilter::WARN.into())
		.from_env_lossy();

	let _already_set = tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_test_writer()
		.try_init()
		.is_err();
}
