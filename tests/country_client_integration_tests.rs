use std::time::Duration;

use atlas::countries::{CountrySource, FetchError, RestCountriesClient};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

// ============================================================================
// Helper Functions
// ============================================================================

fn client_for(server: &MockServer) -> RestCountriesClient {
    RestCountriesClient::new(Some(server.uri()), Duration::from_secs(5))
}

async fn mount_body(server: &MockServer, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path("/all"))
        .and(query_param("fields", "name,capital,flags"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .expect(1)
        .mount(server)
        .await;
}

// ============================================================================
// Success
// ============================================================================

#[tokio::test]
async fn test_single_country_decodes() {
    let server = MockServer::start().await;
    mount_body(
        &server,
        200,
        r#"[{"name":{"common":"France","official":"French Republic"},"capital":["Paris"],"flags":{"png":"a.png"}}]"#,
    )
    .await;

    let countries = client_for(&server).fetch_all_countries().await.unwrap();

    assert_eq!(countries.len(), 1);
    assert_eq!(countries[0].common_name, "France");
    assert_eq!(countries[0].capital_text(), "Paris");
    assert_eq!(countries[0].flag_image_url, "a.png");
}

#[tokio::test]
async fn test_country_without_capital() {
    let server = MockServer::start().await;
    mount_body(
        &server,
        200,
        r#"[{"name":{"common":"Antarctica","official":"Antarctica"},"capital":[],"flags":{"png":"b.png"}}]"#,
    )
    .await;

    let countries = client_for(&server).fetch_all_countries().await.unwrap();

    assert_eq!(countries[0].capital_text(), "No capital");
}

#[tokio::test]
async fn test_response_order_and_extra_fields() {
    let server = MockServer::start().await;
    mount_body(
        &server,
        200,
        r#"[
            {"name":{"common":"Peru","official":"Republic of Peru","nativeName":{}},"capital":["Lima"],"flags":{"png":"pe.png","svg":"pe.svg","alt":"Red and white"}},
            {"name":{"common":"Chad","official":"Republic of Chad"},"capital":["N'Djamena"],"flags":{"png":"td.png"}},
            {"name":{"common":"Bolivia","official":"Plurinational State of Bolivia"},"capital":["Sucre","La Paz"],"flags":{"png":"bo.png"}}
        ]"#,
    )
    .await;

    let countries = client_for(&server).fetch_all_countries().await.unwrap();

    let names: Vec<_> = countries.iter().map(|c| c.common_name.as_str()).collect();
    assert_eq!(names, vec!["Peru", "Chad", "Bolivia"]);
    assert_eq!(countries[0].flag_alt_text(), "Red and white");
    assert_eq!(countries[2].capital_text(), "Sucre");
}

#[tokio::test]
async fn test_empty_array_is_success() {
    let server = MockServer::start().await;
    mount_body(&server, 200, "[]").await;

    let countries = client_for(&server).fetch_all_countries().await.unwrap();

    assert!(countries.is_empty());
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_server_error_is_http_status() {
    let server = MockServer::start().await;
    mount_body(&server, 500, "Internal Server Error").await;

    let result = client_for(&server).fetch_all_countries().await;

    assert_eq!(result, Err(FetchError::HttpStatus(500)));
}

#[tokio::test]
async fn test_not_found_is_http_status() {
    let server = MockServer::start().await;
    mount_body(&server, 404, r#"{"status":404,"message":"Not Found"}"#).await;

    let result = client_for(&server).fetch_all_countries().await;

    assert_eq!(result, Err(FetchError::HttpStatus(404)));
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    mount_body(&server, 200, r#"{"countries":[]}"#).await;

    let result = client_for(&server).fetch_all_countries().await;

    assert!(matches!(result, Err(FetchError::Decode(_))));
}

#[tokio::test]
async fn test_partially_valid_body_is_decode_error() {
    let server = MockServer::start().await;
    mount_body(
        &server,
        200,
        r#"[
            {"name":{"common":"France","official":"French Republic"},"capital":["Paris"],"flags":{"png":"a.png"}},
            {"name":{"common":"Broken","official":"Broken"},"capital":["X"]}
        ]"#,
    )
    .await;

    let result = client_for(&server).fetch_all_countries().await;

    assert!(matches!(result, Err(FetchError::Decode(_))));
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    // Grab a free port, then close it so nothing is listening
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = RestCountriesClient::new(
        Some(format!("http://127.0.0.1:{port}")),
        Duration::from_secs(5),
    );
    let result = client.fetch_all_countries().await;

    assert!(matches!(result, Err(FetchError::Network(_))));
}

#[tokio::test]
async fn test_timeout_is_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/all"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("[]")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let client = RestCountriesClient::new(Some(server.uri()), Duration::from_millis(200));
    let result = client.fetch_all_countries().await;

    assert!(matches!(result, Err(FetchError::Network(_))));
}
