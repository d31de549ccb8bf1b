use log::{debug, info};
use serde_json::{json, Value};
use thiserror::Error;

use crate::api::RawRecord;
use crate::time::Period;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("login failed: {0}")]
    Authentication(String),
    #[error("http request failed: {0}")]
    Transport(#[from] minreq::Error),
    #[error("api returned status {status}: {reason}")]
    Status { status: i32, reason: String },
    #[error("api query failed: {0}")]
    Api(String),
    #[error("unexpected response shape: {0}")]
    MalformedResponse(String),
    #[error("not logged in")]
    MissingToken,
}

const LOGIN_MUTATION: &str = "\
mutation login($email: String!, $password: String!) {
    logIn(input: { email: $email, password: $password }) {
        token
    }
}";

fn records_query(period: &Period) -> String {
    // the api filters on a regex over the raw start_date strings, so the
    // `YYYY-MM` prefix of the invoiced month selects the whole month
    format!(
        "{{
    records(where: {{
        sheet: {{ key_regex: \"timesheet\" }}
        dynamicFields: {{ start_date_regex: \"{:04}-{:02}\" }}
    }} order: {{ updatedAt: DESC }}) {{
        count
        data {{
            id
            dynamicFields
            dynamicAssociations
        }}
    }}
}}",
        period.start().year().as_usize(),
        period.start().month().as_usize(),
    )
}

/// A thin client for the timesheet GraphQL api.
///
/// Failures are never retried, the caller treats every [`ApiError`] as
/// fatal to the run.
pub struct ApiClient {
    url: String,
    token: Option<String>,
}

impl ApiClient {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            token: None,
        }
    }

    /// Exchanges the credentials for a session token.
    pub fn login(&mut self, email: &str, password: &str) -> Result<(), ApiError> {
        let response = self.post(
            json!({
                "query": LOGIN_MUTATION,
                "variables": { "email": email, "password": password },
            }),
            None,
        )?;

        if let Some(errors) = graphql_errors(&response) {
            return Err(ApiError::Authentication(errors));
        }

        let token = response
            .pointer("/data/logIn/token")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                ApiError::MalformedResponse("login response carries no token".to_string())
            })?;

        info!("login succeeded for \"{}\"", email);
        self.token = Some(token.to_string());

        Ok(())
    }

    /// Fetches all raw timesheet records of the period's month.
    pub fn fetch_records(&self, period: &Period) -> Result<Vec<RawRecord>, ApiError> {
        let token = self.token.as_deref().ok_or(ApiError::MissingToken)?;

        let response = self.post(
            json!({
                "query": records_query(period),
                "variables": {},
            }),
            Some(token),
        )?;

        if let Some(errors) = graphql_errors(&response) {
            return Err(ApiError::Api(errors));
        }

        let data = response
            .pointer("/data/records/data")
            .cloned()
            .ok_or_else(|| {
                ApiError::MalformedResponse("records response carries no data".to_string())
            })?;

        let records: Vec<RawRecord> = serde_json::from_value(data)
            .map_err(|error| ApiError::MalformedResponse(error.to_string()))?;

        info!("fetched {} timesheet records", records.len());

        Ok(records)
    }

    fn post(&self, body: Value, token: Option<&str>) -> Result<Value, ApiError> {
        debug!("POST {}", self.url);

        let mut request =
            minreq::post(self.url.as_str()).with_header("Content-Type", "application/json");

        if let Some(token) = token {
            request = request.with_header("Authorization", token);
        }

        let response = request.with_json(&body)?.send()?;

        if !(200..300).contains(&response.status_code) {
            return Err(ApiError::Status {
                status: response.status_code,
                reason: response.reason_phrase.clone(),
            });
        }

        Ok(response.json()?)
    }
}

fn graphql_errors(response: &Value) -> Option<String> {
    response
        .get("errors")
        .filter(|errors| !errors.is_null())
        .map(Value::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::time::{Month, Period, Year};

    #[test]
    fn test_records_query_filters_on_month_prefix() {
        let period = Period::month(Year::new(2025), Month::June);
        let query = records_query(&period);

        assert!(query.contains("start_date_regex: \"2025-06\""));
        assert!(query.contains("key_regex: \"timesheet\""));
    }

    #[test]
    fn test_fetch_without_login_is_rejected() {
        let client = ApiClient::new("http://localhost/graphql");
        let period = Period::month(Year::new(2025), Month::June);

        assert!(matches!(
            client.fetch_records(&period),
            Err(ApiError::MissingToken)
        ));
    }

    #[test]
    fn test_graphql_errors() {
        let response = json!({ "errors": [{ "message": "bad credentials" }] });
        assert_eq!(
            graphql_errors(&response),
            Some("[{\"message\":\"bad credentials\"}]".to_string())
        );

        assert_eq!(graphql_errors(&json!({ "data": {} })), None);
        assert_eq!(graphql_errors(&json!({ "errors": null })), None);
    }
}
