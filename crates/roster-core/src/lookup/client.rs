//! HTTP client for the postcode details service.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, RosterError};
use crate::validate::validate_postal_code;

use super::Locality;

/// Postcode details endpoint used when none is configured.
pub const DEFAULT_LOOKUP_ENDPOINT: &str = "https://lab.pixel6.co/api/get-postcode-details.php";

/// Request timeout used when none is configured.
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

const SUCCESS_STATUS: &str = "Success";
const SUCCESS_STATUS_CODE: i64 = 200;

/// Resolves a postal code to a locality.
#[async_trait]
pub trait PostcodeResolver: Send + Sync {
    /// Look up `postcode`.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::InvalidInput` for a malformed postcode and
    /// `RosterError::Lookup` for transport failures, non-success responses,
    /// or a response with no city and no state.
    async fn resolve(&self, postcode: &str) -> Result<Locality>;
}

#[derive(Debug, Clone, Deserialize)]
pub struct NamedPlace {
    pub name: String,
}

/// Response body of the postcode details service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostcodeResponse {
    pub status: Option<String>,
    pub status_code: Option<i64>,
    #[serde(default)]
    pub city: Option<Vec<NamedPlace>>,
    #[serde(default)]
    pub state: Option<Vec<NamedPlace>>,
}

impl PostcodeResponse {
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some(SUCCESS_STATUS)
            && self.status_code == Some(SUCCESS_STATUS_CODE)
    }

    /// First city and first state of a successful response.
    pub fn into_locality(self) -> Result<Locality> {
        if !self.is_success() {
            return Err(RosterError::Lookup(format!(
                "Postcode service answered status={} statusCode={}",
                self.status.as_deref().unwrap_or("<missing>"),
                self.status_code
                    .map(|code| code.to_string())
                    .unwrap_or_else(|| "<missing>".to_string())
            )));
        }

        let locality = Locality {
            city: first_name(self.city),
            state: first_name(self.state),
        };
        if locality.is_empty() {
            return Err(RosterError::Lookup(
                "Postcode service returned no city or state".to_string(),
            ));
        }
        Ok(locality)
    }
}

fn first_name(places: Option<Vec<NamedPlace>>) -> Option<String> {
    places?
        .into_iter()
        .next()
        .map(|place| place.name)
        .filter(|name| !name.trim().is_empty())
}

/// [`PostcodeResolver`] that POSTs `{"postcode": ...}` to the details service.
#[derive(Debug, Clone)]
pub struct HttpPostcodeResolver {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpPostcodeResolver {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl PostcodeResolver for HttpPostcodeResolver {
    async fn resolve(&self, postcode: &str) -> Result<Locality> {
        if !validate_postal_code(postcode) {
            return Err(RosterError::InvalidInput(format!(
                "Postal code must be 6 digits: {:?}",
                postcode
            )));
        }

        debug!(endpoint = %self.endpoint, postcode, "requesting postcode details");
        let response = self
            .client
            .post(&self.endpoint)
            .json(&serde_json::json!({ "postcode": postcode }))
            .send()
            .await
            .map_err(|e| RosterError::Lookup(format!("Postcode request failed: {}", e)))?;

        let body: PostcodeResponse = response
            .json()
            .await
            .map_err(|e| RosterError::Lookup(format!("Postcode response unreadable: {}", e)))?;

        body.into_locality()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(value: serde_json::Value) -> PostcodeResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_success_takes_first_entries() {
        let response = parse(serde_json::json!({
            "status": "Success",
            "statusCode": 200,
            "postcode": "560001",
            "city": [{"id": 1, "name": "Bengaluru"}, {"id": 2, "name": "Bangalore"}],
            "state": [{"id": 9, "name": "Karnataka"}]
        }));

        let locality = response.into_locality().unwrap();
        assert_eq!(locality.city.as_deref(), Some("Bengaluru"));
        assert_eq!(locality.state.as_deref(), Some("Karnataka"));
    }

    #[test]
    fn test_non_success_status_is_error() {
        let response = parse(serde_json::json!({
            "status": "Error",
            "statusCode": 200,
            "city": [{"name": "Bengaluru"}],
            "state": [{"name": "Karnataka"}]
        }));
        assert!(matches!(response.into_locality(), Err(RosterError::Lookup(_))));

        let response = parse(serde_json::json!({
            "status": "Success",
            "statusCode": 404
        }));
        assert!(matches!(response.into_locality(), Err(RosterError::Lookup(_))));
    }

    #[test]
    fn test_empty_lists_are_error() {
        let response = parse(serde_json::json!({
            "status": "Success",
            "statusCode": 200,
            "city": [],
            "state": null
        }));
        assert!(matches!(response.into_locality(), Err(RosterError::Lookup(_))));
    }

    #[test]
    fn test_one_empty_list_keeps_the_other() {
        let response = parse(serde_json::json!({
            "status": "Success",
            "statusCode": 200,
            "city": [],
            "state": [{"name": "Karnataka"}]
        }));
        let locality = response.into_locality().unwrap();
        assert_eq!(locality.city, None);
        assert_eq!(locality.state.as_deref(), Some("Karnataka"));
    }

    #[tokio::test]
    async fn test_invalid_postcode_is_rejected_before_request() {
        // Port 9 (discard) is never contacted: validation fails first.
        let resolver =
            HttpPostcodeResolver::new("http://127.0.0.1:9/lookup", DEFAULT_LOOKUP_TIMEOUT).unwrap();
        let result = resolver.resolve("5600").await;
        assert!(matches!(result, Err(RosterError::InvalidInput(_))));
    }
}
