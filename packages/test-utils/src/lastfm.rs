//! Mock Last.fm server for client tests
//!
//! Provides a [`MockLastfmServer`] that answers `<lfm>` XML bodies on the
//! single `/2.0/` style endpoint, matching on the `method` parameter.

use wiremock::matchers::{any, body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const XML_MIME: &str = "text/xml";

/// Mock Last.fm endpoint
///
/// This struct wraps a [`wiremock::MockServer`]. GET mocks match the
/// `method` query parameter, POST mocks match `method=` in the form body.
///
/// # Example
///
/// ```rust,ignore
/// use lastfm_test_utils::{fixtures, MockLastfmServer};
///
/// #[tokio::test]
/// async fn test_love() {
///     let server = MockLastfmServer::start().await;
///     server.mock_post("track.love", fixtures::OK_EMPTY).await;
///
///     // Configure the client with server.url()
/// }
/// ```
pub struct MockLastfmServer {
    server: MockServer,
}

/// A request the mock received, with query and form parameters decoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    /// HTTP verb, upper case
    pub verb: String,
    /// Query parameters (GET) or form fields (POST) in wire order
    pub params: Vec<(String, String)>,
}

impl RecordedRequest {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Parameter names in wire order
    pub fn names(&self) -> Vec<&str> {
        self.params.iter().map(|(name, _)| name.as_str()).collect()
    }
}

impl MockLastfmServer {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Endpoint URL to configure the client with (trailing slash included)
    pub fn url(&self) -> String {
        format!("{}/", self.server.uri())
    }

    /// Underlying wiremock server, for custom mocks
    pub fn server(&self) -> &MockServer {
        &self.server
    }

    /// Mount a 200 response for a GET method
    pub async fn mock_get(&self, method_name: &str, body: &str) {
        self.mock_get_with_status(method_name, 200, body).await;
    }

    /// Mount a GET response with an explicit status
    ///
    /// Last.fm sends failed `<lfm>` bodies with 4xx statuses.
    pub async fn mock_get_with_status(&self, method_name: &str, status: u16, body: &str) {
        Mock::given(method("GET"))
            .and(path("/"))
            .and(query_param("method", method_name))
            .respond_with(xml_response(status, body))
            .mount(&self.server)
            .await;
    }

    /// Mount a 200 response for a POST method
    pub async fn mock_post(&self, method_name: &str, body: &str) {
        Mock::given(method("POST"))
            .and(path("/"))
            .and(body_string_contains(format!("method={}", method_name).as_str()))
            .respond_with(xml_response(200, body))
            .mount(&self.server)
            .await;
    }

    /// Mount a failed `<lfm>` body for any request
    pub async fn mock_error(&self, code: i32, message: &str, status: u16) {
        Mock::given(any())
            .respond_with(xml_response(status, &failed_body(code, message)))
            .mount(&self.server)
            .await;
    }

    /// Mount a raw response for any request
    pub async fn mock_raw(&self, status: u16, body: &str, mime: &str) {
        Mock::given(any())
            .respond_with(ResponseTemplate::new(status).set_body_raw(body.to_owned(), mime))
            .mount(&self.server)
            .await;
    }

    /// Fail verification on drop if any request reaches the server
    pub async fn expect_no_requests(&self) {
        Mock::given(any())
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&self.server)
            .await;
    }

    /// Every request received so far, decoded
    pub async fn received(&self) -> Vec<RecordedRequest> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .map(|request| RecordedRequest {
                verb: request.method.to_string().to_uppercase(),
                params: request
                    .url
                    .query_pairs()
                    .chain(url::form_urlencoded::parse(&request.body))
                    .map(|(name, value)| (name.into_owned(), value.into_owned()))
                    .collect(),
            })
            .collect()
    }
}

fn xml_response(status: u16, body: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_raw(body.to_owned(), XML_MIME)
}

/// A `status="failed"` body carrying `code` and `message`
pub fn failed_body(code: i32, message: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<lfm status=\"failed\">\n<error code=\"{}\">{}</error></lfm>\n",
        code, message
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_mock_matches_method_param() {
        let server = MockLastfmServer::start().await;
        server.mock_get("auth.getToken", "<lfm status=\"ok\"/>").await;

        let response = reqwest::Client::new()
            .get(server.url())
            .query(&[("method", "auth.getToken"), ("api_key", "xxx")])
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);

        let received = server.received().await;
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].verb, "GET");
        assert_eq!(received[0].names(), vec!["method", "api_key"]);
    }

    #[tokio::test]
    async fn test_post_mock_decodes_form() {
        let server = MockLastfmServer::start().await;
        server.mock_post("track.love", "<lfm status=\"ok\"/>").await;

        let response = reqwest::Client::new()
            .post(server.url())
            .form(&[("artist", "foo artist"), ("method", "track.love")])
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);

        let received = server.received().await;
        assert_eq!(received[0].verb, "POST");
        assert_eq!(received[0].get("artist"), Some("foo artist"));
    }

    #[test]
    fn test_failed_body() {
        let body = failed_body(10, "Invalid API key");
        assert!(body.contains("status=\"failed\""));
        assert!(body.contains("<error code=\"10\">Invalid API key</error>"));
    }
}
