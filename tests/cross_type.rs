/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! These tests use [`Outcome`] and [`Optional`] together through the public API only

mod common;

use kekka::{
	EmptyOptionalError, Optional, Outcome, empty, failure, is_optional, is_result, prelude::*,
	some, success,
};

use self::common::{TestError, set_up_logging};

fn find_port(config: &[(&'static str, u16)], name: &str) -> Optional<u16> {
	Optional::of_nullable(config.iter().find(|(key, _)| *key == name).map(|(_, port)| *port))
}

#[test]
fn lookup_into_outcome_and_back() {
	set_up_logging();

	let config = [("http", 80), ("https", 443)];

	let https = find_port(&config, "https").to_outcome(TestError("https is not configured"));
	assert_eq!(https, success(443));
	assert_eq!(https.to_optional(), some(443));

	let ftp = find_port(&config, "ftp").to_outcome(TestError("ftp is not configured"));
	assert_eq!(ftp, failure(TestError("ftp is not configured")));
	assert_eq!(ftp.to_optional(), empty());
}

fn port_plus_one(port: Optional<u16>) -> Result<u16, EmptyOptionalError> {
	let port = port.to_outcome_or_empty_error().into_result()?;
	Ok(port + 1)
}

#[test]
fn empty_error_propagates_with_question_mark() {
	set_up_logging();

	assert_eq!(port_plus_one(some(80)), Ok(81));
	assert_eq!(port_plus_one(empty()), Err(EmptyOptionalError));
}

#[test]
fn chained_mapping_across_types() {
	set_up_logging();

	let port = some("8080")
		.map(|port| port.parse::<u16>().ok())
		.to_outcome(TestError("invalid port"))
		.on_success(|port| port.checked_add(1))
		.to_optional();

	assert_eq!(port, some(8081));

	let port = some("not a port")
		.map(|port| port.parse::<u16>().ok())
		.to_outcome(TestError("invalid port"))
		.on_failure(|_| success(0))
		.to_optional();

	assert_eq!(port, some(0));
}

#[test]
fn wrappers_are_recognized_by_marker() {
	set_up_logging();

	let outcome: Outcome<u16, TestError> = success(80);
	let optional = outcome.clone().to_optional();

	assert!(is_result(&outcome));
	assert!(!is_optional(&outcome));
	assert!(is_optional(&optional));
	assert!(!is_result(&optional));
	assert!(!is_result(&80_u16));
}

#[test]
fn boxed_errors_by_default() {
	set_up_logging();

	let outcome: Outcome<u16> = empty().to_outcome(EmptyOptionalError.into());

	assert_eq!(
		outcome.into_result().map_err(|e| e.to_string()),
		Err("optional value is empty".to_owned())
	);
}
