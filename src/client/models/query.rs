//! GraphQL request envelope

use serde::Serialize;

use super::{CredentialSubmission, ScanCreationRequest, ScanReference};
use crate::client::queries::Operation;
use crate::error::Result;

/// `{ "query": ..., "variables": ... }` request envelope.
///
/// Only built through the per-operation constructors, so the query text and
/// the variables shape always belong together.
#[derive(Debug, Clone, Serialize)]
pub struct InputQuery<V = ()> {
    #[serde(skip)]
    operation: Operation,

    query: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    variables: Option<V>,
}

impl<V> InputQuery<V> {
    fn with_variables(operation: Operation, variables: V) -> Self {
        Self {
            operation,
            query: operation.query(),
            variables: Some(variables),
        }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn query(&self) -> &'static str {
        self.query
    }

    pub fn variables(&self) -> Option<&V> {
        self.variables.as_ref()
    }
}

impl<V: Serialize> InputQuery<V> {
    /// Serialize to the plain-query request body
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl InputQuery<ScanReference> {
    pub fn progress(scan_id: i32) -> Self {
        Self::with_variables(Operation::GetProgress, ScanReference::new(scan_id))
    }

    pub fn risk(scan_id: i32) -> Self {
        Self::with_variables(Operation::GetRisk, ScanReference::new(scan_id))
    }
}

impl InputQuery<()> {
    pub fn subscriptions() -> Self {
        Self {
            operation: Operation::GetSubscriptions,
            query: Operation::GetSubscriptions.query(),
            variables: None,
        }
    }
}

impl InputQuery<ScanCreationRequest> {
    pub fn create_scan(request: ScanCreationRequest) -> Self {
        Self::with_variables(Operation::CreateMobileScan, request)
    }
}

impl InputQuery<CredentialSubmission> {
    pub fn create_credentials(submission: CredentialSubmission) -> Self {
        Self::with_variables(Operation::CreateTestCredentials, submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::Credential;
    use crate::client::queries;
    use serde_json::Value;

    fn body(json: &str) -> Value {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_progress_body() {
        let query = InputQuery::progress(42);
        let value = body(&query.to_json().unwrap());

        assert_eq!(value["query"], queries::GET_PROGRESS_BY_ID);
        let decoded: ScanReference = serde_json::from_value(value["variables"].clone()).unwrap();
        assert_eq!(decoded.scan_id, 42);
    }

    #[test]
    fn test_risk_body() {
        let query = InputQuery::risk(9);
        let value = body(&query.to_json().unwrap());

        assert_eq!(value["query"], queries::GET_RISK_BY_ID);
        assert_eq!(value["variables"]["scanId"], 9);
        assert_eq!(query.operation(), Operation::GetRisk);
    }

    #[test]
    fn test_subscriptions_body_omits_variables() {
        let query = InputQuery::subscriptions();
        let value = body(&query.to_json().unwrap());

        assert_eq!(value["query"], queries::GET_SUBSCRIPTIONS);
        assert!(value.get("variables").is_none());
        assert!(query.variables().is_none());
    }

    #[test]
    fn test_create_scan_body() {
        let request = ScanCreationRequest::new("Release 1.2", "android", "Full Scan", None);
        let query = InputQuery::create_scan(request.clone());
        let value = body(&query.to_json().unwrap());

        assert_eq!(value["query"], queries::CREATE_MOBILE_SCAN);
        assert!(value["variables"]["credentialIds"].is_null());
        let decoded: ScanCreationRequest =
            serde_json::from_value(value["variables"].clone()).unwrap();
        assert_eq!(decoded, request);
    }

    #[test]
    fn test_create_credentials_body() {
        let submission = CredentialSubmission::custom(vec![Credential::new("otp", "000000")]);
        let query = InputQuery::create_credentials(submission.clone());
        let value = body(&query.to_json().unwrap());

        assert_eq!(value["query"], queries::CREATE_TEST_CREDENTIALS);
        let decoded: CredentialSubmission =
            serde_json::from_value(value["variables"].clone()).unwrap();
        assert_eq!(decoded, submission);
    }
}
