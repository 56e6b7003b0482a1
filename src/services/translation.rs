use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::services::language::Language;

const JSON_UTF8: &str = "application/json; charset=utf-8";

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct TranslationRequest<'a> {
    text: &'a str,
    language_code: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct TranslationResponse {
    #[serde(alias = "text")]
    text: String,
}

/// A failed exchange with the translation service.
///
/// Callers treat every variant the same way ("no translation available");
/// the variants only carry detail for the log.
#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Service answered with status {0}")]
    Status(reqwest::StatusCode),
    #[error("Parse failed: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client for the remote HTTP translation endpoint.
#[derive(Debug, Clone)]
pub struct TranslationClient {
    endpoint: reqwest::Url,
    http: reqwest::blocking::Client,
}

impl TranslationClient {
    pub fn new(endpoint: reqwest::Url) -> Self {
        Self {
            endpoint,
            http: reqwest::blocking::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &reqwest::Url {
        &self.endpoint
    }

    /// Performs one blocking exchange and returns the `Text` field verbatim.
    ///
    /// Must not be called from the GTK main loop; see
    /// `TranslateWindow::translate` for how results are handed back.
    pub fn translate(&self, text: &str, target: Language) -> Result<String, TranslationError> {
        let request = TranslationRequest {
            text,
            language_code: target.code(),
        };
        let body = serde_json::to_vec(&request)?;

        tracing::debug!(
            endpoint = %self.endpoint,
            language = target.code(),
            chars = text.chars().count(),
            "sending translation request"
        );

        let response = self
            .http
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, JSON_UTF8)
            .body(body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslationError::Status(status));
        }

        let bytes = response.bytes()?;
        let result: TranslationResponse = serde_json::from_slice(&bytes)?;

        Ok(result.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn client_for(server: &mockito::ServerGuard) -> TranslationClient {
        let url = format!("{}/translate", server.url());
        TranslationClient::new(reqwest::Url::parse(&url).unwrap())
    }

    #[test]
    fn test_request_body_matches_wire_format() {
        let request = TranslationRequest {
            text: "Hello",
            language_code: "sv",
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"Text":"Hello","LanguageCode":"sv"}"#
        );
    }

    #[test]
    fn test_translate_hello_to_swedish() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/translate")
            .match_header("content-type", Matcher::Regex("^application/json".to_string()))
            .match_body(Matcher::Exact(r#"{"Text":"Hello","LanguageCode":"sv"}"#.to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"Text":"Hej"}"#)
            .create();

        let result = client_for(&server).translate("Hello", Language::Swedish);

        assert_eq!(result.unwrap(), "Hej");
        mock.assert();
    }

    #[test]
    fn test_empty_text_is_sent_as_is() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/translate")
            .match_body(Matcher::Exact(r#"{"Text":"","LanguageCode":"en"}"#.to_string()))
            .with_status(200)
            .with_body(r#"{"Text":"  something  "}"#)
            .create();

        let result = client_for(&server).translate("", Language::English);

        // Returned verbatim, no trimming.
        assert_eq!(result.unwrap(), "  something  ");
        mock.assert();
    }

    #[test]
    fn test_extra_response_fields_are_ignored() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", "/translate")
            .with_status(200)
            .with_body(r#"{"Text":"Hallå","Detected":"en","Confidence":0.9}"#)
            .create();

        let result = client_for(&server).translate("Hello", Language::Swedish);

        assert_eq!(result.unwrap(), "Hallå");
    }

    #[test]
    fn test_lowercase_text_field_is_accepted() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", "/translate")
            .with_status(200)
            .with_body(r#"{"text":"Hej"}"#)
            .create();

        let result = client_for(&server).translate("Hello", Language::Swedish);

        assert_eq!(result.unwrap(), "Hej");
    }

    #[test]
    fn test_non_success_status_fails() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", "/translate")
            .with_status(400)
            .with_body("bad request")
            .create();

        let result = client_for(&server).translate("Hello", Language::Swedish);

        assert!(matches!(result, Err(TranslationError::Status(s)) if s.as_u16() == 400));
    }

    #[test]
    fn test_missing_text_field_fails() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", "/translate")
            .with_status(200)
            .with_body(r#"{"Translated":"Hej"}"#)
            .create();

        let result = client_for(&server).translate("Hello", Language::Swedish);

        assert!(matches!(result, Err(TranslationError::Decode(_))));
    }

    #[test]
    fn test_non_json_body_fails() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", "/translate")
            .with_status(200)
            .with_body("<html>oops</html>")
            .create();

        let result = client_for(&server).translate("Hello", Language::Swedish);

        assert!(matches!(result, Err(TranslationError::Decode(_))));
    }

    #[test]
    fn test_unreachable_service_fails() {
        // Port 9 (discard) is not expected to serve HTTP on the test host.
        let url = reqwest::Url::parse("http://127.0.0.1:9/translate").unwrap();
        let result = TranslationClient::new(url).translate("Hello", Language::Swedish);

        assert!(matches!(result, Err(TranslationError::Request(_))));
    }
}
