//! Status-to-error mapping shared by the upstream HTTP clients.
//!
//! Each client owns an ordered table of [`StatusRule`]s. The first rule whose
//! predicate matches the response status builds the error; a success status
//! that matches nothing passes through.

use crate::error::UpstreamError;
use crate::Result;
use reqwest::{Response, StatusCode};

/// One entry in a status table: a predicate and the error it produces.
pub struct StatusRule {
    pub matches: fn(StatusCode) -> bool,
    pub build: fn(&'static str, StatusCode, String) -> UpstreamError,
}

/// Catch-all rule for any 4xx/5xx.
pub const GENERIC_ERROR_RULE: StatusRule = StatusRule {
    matches: is_error,
    build: generic_error,
};

fn is_error(status: StatusCode) -> bool {
    status.is_client_error() || status.is_server_error()
}

fn generic_error(service: &'static str, status: StatusCode, body: String) -> UpstreamError {
    UpstreamError::Status {
        service,
        status,
        body,
    }
}

/// Returns the error built by the first matching rule, if any.
pub fn map_status(
    rules: &[StatusRule],
    service: &'static str,
    status: StatusCode,
    body: String,
) -> Option<UpstreamError> {
    find_rule(rules, status).map(|rule| (rule.build)(service, status, body))
}

fn find_rule(rules: &[StatusRule], status: StatusCode) -> Option<&StatusRule> {
    rules.iter().find(|rule| (rule.matches)(status))
}

/// Reads the response body and applies `rules` to its status.
pub async fn check_response(
    response: Response,
    rules: &[StatusRule],
    service: &'static str,
) -> Result<String> {
    let status = response.status();
    let body = response.text().await.map_err(|e| e.without_url())?;

    match find_rule(rules, status) {
        Some(rule) => {
            let err = (rule.build)(service, status, body);
            tracing::error!("{}", err);
            Err(err.into())
        }
        None => Ok(body),
    }
}
