//! Unit tests for registry client

use super::*;

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: String) -> RegistryClient {
    RegistryClient::with_config(RegistryConfig {
        base_url,
        timeout: Duration::from_millis(500),
    })
    .unwrap()
}

#[tokio::test]
async fn test_registry_client_creation() {
    let client = RegistryClient::new().unwrap();
    assert_eq!(client.base_url, "https://registry.npmjs.org");
}

#[tokio::test]
async fn test_encode_package_name() {
    // Regular package
    assert_eq!(encode_package_name("lodash"), "lodash");

    // Scoped package
    assert_eq!(encode_package_name("@types/node"), "@types%2fnode");
}

#[tokio::test]
async fn test_fetch_metadata_success() {
    let mock_server = MockServer::start().await;

    let mock_response = serde_json::json!({
        "versions": {
            "16.13.0": {
                "name": "react",
                "version": "16.13.0",
                "dependencies": {
                    "object-assign": "^4.1.1"
                }
            },
            "16.13.1": {
                "name": "react",
                "version": "16.13.1",
                "dependencies": {}
            }
        }
    });

    Mock::given(method("GET"))
        .and(path("/react"))
        .and(header("Accept", "application/vnd.npm.install-v1+json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&mock_response))
        .mount(&mock_server)
        .await;

    let client = test_client(mock_server.uri());

    let metadata = client.fetch_metadata("react").await.unwrap();
    assert_eq!(metadata.versions.len(), 2);
    assert_eq!(
        metadata.versions["16.13.0"].dependencies["object-assign"],
        "^4.1.1"
    );
}

#[tokio::test]
async fn test_fetch_manifest_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/react/16.13.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "react",
            "version": "16.13.0",
            "dependencies": {
                "loose-envify": "^1.1.0"
            }
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(mock_server.uri());

    let manifest = client.fetch_manifest("react", "16.13.0").await.unwrap();
    assert_eq!(manifest.name, "react");
    assert_eq!(manifest.version, "16.13.0");
    assert_eq!(manifest.dependencies["loose-envify"], "^1.1.0");
}

#[tokio::test]
async fn test_fetch_metadata_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bogusreact"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = test_client(mock_server.uri());

    let err = client.fetch_metadata("bogusreact").await.unwrap_err();
    match err {
        CanopyError::NotFound { package } => assert_eq!(package, "bogusreact"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_manifest_not_found_carries_version_spec() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/react/99.0.0"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = test_client(mock_server.uri());

    let err = client.fetch_manifest("react", "99.0.0").await.unwrap_err();
    match err {
        CanopyError::NotFound { package } => assert_eq!(package, "react@99.0.0"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_metadata_bad_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/react"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = test_client(mock_server.uri());

    let err = client.fetch_metadata("react").await.unwrap_err();
    match err {
        CanopyError::BadStatus { package, status } => {
            assert_eq!(package, "react");
            assert_eq!(status, 503);
        }
        other => panic!("expected BadStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_metadata_malformed_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/react"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&mock_server)
        .await;

    let client = test_client(mock_server.uri());

    let err = client.fetch_metadata("react").await.unwrap_err();
    assert!(matches!(err, CanopyError::MalformedPayload { .. }));
}

#[tokio::test]
async fn test_fetch_metadata_wrong_shape_is_malformed() {
    let mock_server = MockServer::start().await;

    // Valid JSON, but not the expected structure
    Mock::given(method("GET"))
        .and(path("/react"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "hello": "world" })),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(mock_server.uri());

    let err = client.fetch_metadata("react").await.unwrap_err();
    assert!(matches!(err, CanopyError::MalformedPayload { .. }));
}

#[tokio::test]
async fn test_fetch_metadata_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slowpkg"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "versions": {} }))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(mock_server.uri());

    let err = client.fetch_metadata("slowpkg").await.unwrap_err();
    match err {
        CanopyError::Timeout { package } => assert_eq!(package, "slowpkg"),
        other => panic!("expected Timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_metadata_unreachable_registry() {
    // Nothing listens on port 1
    let client = test_client("http://127.0.0.1:1".to_string());

    let err = client.fetch_metadata("react").await.unwrap_err();
    assert!(matches!(err, CanopyError::BadGateway { .. }));
}

#[tokio::test]
async fn test_scoped_package_url_encoding() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/@types%2fnode"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "versions": {}
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(mock_server.uri());

    let result = client.fetch_metadata("@types/node").await;
    assert!(result.is_ok());
}
