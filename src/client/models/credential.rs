//! Test credential models

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single name/value pair used by the scanner to log into the application
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub name: String,
    pub value: String,
}

impl Credential {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("name", &self.name)
            .field("value", &"<redacted>")
            .finish()
    }
}

/// Variables for the create-test-credential mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialSubmission {
    pub test_credentials: TestCredentialsInput,
}

/// `TestCredentialsInput` union; only custom credentials are submitted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCredentialsInput {
    pub custom: CustomCredentialsInput,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomCredentialsInput {
    pub credentials: Vec<Credential>,
}

impl CredentialSubmission {
    pub fn custom(credentials: Vec<Credential>) -> Self {
        Self {
            test_credentials: TestCredentialsInput {
                custom: CustomCredentialsInput { credentials },
            },
        }
    }

    pub fn credentials(&self) -> &[Credential] {
        &self.test_credentials.custom.credentials
    }
}
