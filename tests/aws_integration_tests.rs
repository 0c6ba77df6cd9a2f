use aws_config::retry::RetryConfig;
use aws_config::BehaviorVersion;
use aws_credential_types::Credentials;
use aws_credential_types::provider::SharedCredentialsProvider;
use aws_types::SdkConfig;
use aws_types::region::Region;
use lgbrowse::aws::{AwsBackend, CloudWatchPages};
use lgbrowse::core::error::AppError;
use lgbrowse::core::fetch::{fetch_all, load_log_groups};
use lgbrowse::core::log_group::LogGroupName;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string_contains, header, method},
};

// ============================================================================
// Helper Functions
// ============================================================================

const DESCRIBE_LOG_GROUPS: &str = "Logs_20140328.DescribeLogGroups";

/// SDK config pointed at the mock server, with static credentials and no retries.
fn sdk_config(server: &MockServer) -> SdkConfig {
    SdkConfig::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new("eu-west-1"))
        .credentials_provider(SharedCredentialsProvider::new(Credentials::new(
            "AKIDTEST", "secret", None, None, "test",
        )))
        .endpoint_url(server.uri())
        .retry_config(RetryConfig::disabled())
        .build()
}

fn pages(server: &MockServer, prefix: Option<&str>) -> CloudWatchPages {
    let client = aws_sdk_cloudwatchlogs::Client::new(&sdk_config(server));
    CloudWatchPages::new(client, prefix.map(str::to_string))
}

/// A `DescribeLogGroups` response body.
fn log_groups_page(names: &[&str], next_token: Option<&str>) -> ResponseTemplate {
    let groups: Vec<String> = names
        .iter()
        .map(|n| format!("{{\"logGroupName\":\"{n}\",\"storedBytes\":0}}"))
        .collect();
    let token = next_token
        .map(|t| format!(",\"nextToken\":\"{t}\""))
        .unwrap_or_default();
    ResponseTemplate::new(200)
        .insert_header("content-type", "application/x-amz-json-1.1")
        .set_body_string(format!("{{\"logGroups\":[{}]{}}}", groups.join(","), token))
}

fn describe_log_groups() -> wiremock::MockBuilder {
    Mock::given(method("POST")).and(header("x-amz-target", DESCRIBE_LOG_GROUPS))
}

fn names(groups: &lgbrowse::core::log_group::LogGroupCollection) -> Vec<&str> {
    groups.iter().map(LogGroupName::as_str).collect()
}

const CALLER_IDENTITY_OK: &str = r#"<GetCallerIdentityResponse xmlns="https://sts.amazonaws.com/doc/2011-06-15/">
  <GetCallerIdentityResult>
    <Arn>arn:aws:iam::123456789012:user/tester</Arn>
    <UserId>AIDATESTUSER</UserId>
    <Account>123456789012</Account>
  </GetCallerIdentityResult>
  <ResponseMetadata>
    <RequestId>01234567-89ab-cdef-0123-456789abcdef</RequestId>
  </ResponseMetadata>
</GetCallerIdentityResponse>"#;

const CALLER_IDENTITY_DENIED: &str = r#"<ErrorResponse xmlns="https://sts.amazonaws.com/doc/2011-06-15/">
  <Error>
    <Type>Sender</Type>
    <Code>InvalidClientTokenId</Code>
    <Message>The security token included in the request is invalid.</Message>
  </Error>
  <RequestId>01234567-89ab-cdef-0123-456789abcdef</RequestId>
</ErrorResponse>"#;

fn get_caller_identity() -> wiremock::MockBuilder {
    Mock::given(method("POST")).and(body_string_contains("Action=GetCallerIdentity"))
}

fn xml(status: u16, body: &str) -> ResponseTemplate {
    ResponseTemplate::new(status)
        .insert_header("content-type", "text/xml")
        .set_body_string(body)
}

// ============================================================================
// Pagination Tests
// ============================================================================

#[tokio::test]
async fn test_pages_follow_next_token_to_the_end() {
    let server = MockServer::start().await;

    // Token-specific mocks outrank the catch-all first page
    describe_log_groups()
        .and(body_string_contains("tok-2"))
        .respond_with(log_groups_page(&["/ecs/service/c"], None))
        .with_priority(1)
        .expect(1)
        .mount(&server)
        .await;
    describe_log_groups()
        .and(body_string_contains("tok-1"))
        .respond_with(log_groups_page(&[], Some("tok-2")))
        .with_priority(1)
        .expect(1)
        .mount(&server)
        .await;
    describe_log_groups()
        .respond_with(log_groups_page(&["/aws/lambda/a", "/aws/lambda/b"], Some("tok-1")))
        .expect(1)
        .mount(&server)
        .await;

    let groups = fetch_all(&mut pages(&server, None)).await.unwrap();
    assert_eq!(
        names(&groups),
        vec!["/aws/lambda/a", "/aws/lambda/b", "/ecs/service/c"]
    );
}

#[tokio::test]
async fn test_failure_on_second_page_aborts_without_third_request() {
    let server = MockServer::start().await;

    describe_log_groups()
        .and(body_string_contains("tok-2"))
        .respond_with(log_groups_page(&["/never/seen"], None))
        .with_priority(1)
        .expect(0)
        .mount(&server)
        .await;
    describe_log_groups()
        .and(body_string_contains("tok-1"))
        .respond_with(
            ResponseTemplate::new(400)
                .insert_header("content-type", "application/x-amz-json-1.1")
                .set_body_string(
                    r#"{"__type":"InvalidParameterException","message":"bad token"}"#,
                ),
        )
        .with_priority(1)
        .expect(1)
        .mount(&server)
        .await;
    describe_log_groups()
        .respond_with(log_groups_page(&["/aws/lambda/a"], Some("tok-1")))
        .expect(1)
        .mount(&server)
        .await;

    let err = fetch_all(&mut pages(&server, None)).await.unwrap_err();
    assert_eq!(err.page, 2);
    assert!(err.to_string().contains("page 2"));
}

#[tokio::test]
async fn test_prefix_is_sent_with_every_request() {
    let server = MockServer::start().await;

    describe_log_groups()
        .and(body_string_contains(r#""logGroupNamePrefix":"/aws/lambda/""#))
        .respond_with(log_groups_page(&["/aws/lambda/a"], None))
        .expect(1)
        .mount(&server)
        .await;

    let groups = fetch_all(&mut pages(&server, Some("/aws/lambda/")))
        .await
        .unwrap();
    assert_eq!(names(&groups), vec!["/aws/lambda/a"]);
}

#[tokio::test]
async fn test_empty_account_yields_empty_collection() {
    let server = MockServer::start().await;

    describe_log_groups()
        .respond_with(log_groups_page(&[], None))
        .expect(1)
        .mount(&server)
        .await;

    let groups = fetch_all(&mut pages(&server, None)).await.unwrap();
    assert!(groups.is_empty());
}

// ============================================================================
// Startup Tests (identity check + fetch)
// ============================================================================

#[tokio::test]
async fn test_load_log_groups_verifies_identity_first() {
    let server = MockServer::start().await;

    get_caller_identity()
        .respond_with(xml(200, CALLER_IDENTITY_OK))
        .expect(1)
        .mount(&server)
        .await;
    describe_log_groups()
        .respond_with(log_groups_page(&["/aws/lambda/a"], None))
        .expect(1)
        .mount(&server)
        .await;

    let backend = AwsBackend::from_sdk_config(sdk_config(&server), "eu-west-1".to_string(), None);
    let (identity, groups) = load_log_groups(&backend).await.unwrap();
    assert_eq!(identity.account, "123456789012");
    assert_eq!(identity.arn, "arn:aws:iam::123456789012:user/tester");
    assert_eq!(names(&groups), vec!["/aws/lambda/a"]);
}

#[tokio::test]
async fn test_bad_credentials_skip_the_fetch() {
    let server = MockServer::start().await;

    get_caller_identity()
        .respond_with(xml(403, CALLER_IDENTITY_DENIED))
        .expect(1)
        .mount(&server)
        .await;
    describe_log_groups()
        .respond_with(log_groups_page(&["/aws/lambda/a"], None))
        .expect(0)
        .mount(&server)
        .await;

    let backend = AwsBackend::from_sdk_config(sdk_config(&server), "eu-west-1".to_string(), None);
    let err = load_log_groups(&backend).await.unwrap_err();
    assert!(matches!(err, AppError::Identity(_)));
    assert!(err.to_string().starts_with("Bad AWS Credentials"));
    assert_eq!(err.exit_code(), 3);
}
