//! GraphQL documents sent to the scanning service

/// Create a mobile scan from an uploaded application binary.
///
/// `$application` is bound to the multipart file part through the `map` document.
pub const CREATE_MOBILE_SCAN: &str = concat!(
    "mutation newMobileScan($title: String!, $assetType: String!, $application: Upload!, ",
    "$scanProfile: String!, $credentialIds: [Int!]) {",
    "createMobileScan(title: $title, assetType:$assetType, application: $application, ",
    "scanProfile: $scanProfile, credentialIds: $credentialIds) {",
    " scan {id}}}"
);

/// Create reusable test credentials. Credentials are a union type, so the
/// created id is selected through the `CustomTestCredentials` fragment.
pub const CREATE_TEST_CREDENTIALS: &str = concat!(
    "mutation CreateTestCredential($testCredentials: TestCredentialsInput!) {",
    "    createTestCredentials(testCredentials: $testCredentials) {",
    "      __typename",
    "      testCredentials {",
    "        ... on CustomTestCredentials {",
    "          id",
    "        }",
    "      }",
    "    }",
    "  }"
);

/// Risk rating of a scan
pub const GET_RISK_BY_ID: &str =
    concat!("query AllVulns($scanId: Int!) {", "scan(scanId: $scanId) {", " riskRating}}");

/// Progress of a scan
pub const GET_PROGRESS_BY_ID: &str =
    concat!("query AllVulns($scanId: Int!) {", "scan(scanId: $scanId) {", " progress}}");

/// Remaining scan counts and plan limits
pub const GET_SUBSCRIPTIONS: &str = concat!(
    "query getSubscriptions {",
    "subscriptions { subscriptions { countRemainingScan plan { maxScans product {scanType} }}}}"
);

/// Operations understood by the scanning service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    CreateMobileScan,
    CreateTestCredentials,
    GetRisk,
    GetProgress,
    GetSubscriptions,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::CreateMobileScan,
        Operation::CreateTestCredentials,
        Operation::GetRisk,
        Operation::GetProgress,
        Operation::GetSubscriptions,
    ];

    /// GraphQL document for this operation
    pub fn query(self) -> &'static str {
        match self {
            Operation::CreateMobileScan => CREATE_MOBILE_SCAN,
            Operation::CreateTestCredentials => CREATE_TEST_CREDENTIALS,
            Operation::GetRisk => GET_RISK_BY_ID,
            Operation::GetProgress => GET_PROGRESS_BY_ID,
            Operation::GetSubscriptions => GET_SUBSCRIPTIONS,
        }
    }

    /// Stable label used in log lines
    pub fn name(self) -> &'static str {
        match self {
            Operation::CreateMobileScan => "create_mobile_scan",
            Operation::CreateTestCredentials => "create_test_credentials",
            Operation::GetRisk => "get_risk",
            Operation::GetProgress => "get_progress",
            Operation::GetSubscriptions => "get_subscriptions",
        }
    }
}
