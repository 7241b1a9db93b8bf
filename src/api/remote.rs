use super::{ApiError, ApiResult, NotesGateway};
use crate::models::{Credentials, NewNote, Note, Registration, User};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// `{status, message, data}` wrapper around every response body.
#[derive(Deserialize, Debug)]
pub(crate) struct Envelope<T> {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
}

#[derive(Deserialize, Debug)]
struct LoginData {
    #[serde(rename = "accessToken")]
    access_token: String,
}

#[derive(Serialize, Debug)]
struct RegisterRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

/// Maps an HTTP status and body onto the uniform result.
///
/// A success envelope yields its (possibly absent) data; any other status
/// string is a rejection carrying the server's message.
pub(crate) fn decode_envelope<T: DeserializeOwned>(
    status: StatusCode,
    body: &str,
) -> ApiResult<Option<T>> {
    let envelope: Envelope<T> = match serde_json::from_str(body) {
        Ok(e) => e,
        Err(e) if status.is_success() => return Err(ApiError::parse(e)),
        Err(_) => {
            return Err(error_for_status(
                status,
                format!("Request failed ({status})"),
            ))
        }
    };

    if envelope.status == "success" {
        return Ok(envelope.data);
    }

    let message = envelope
        .message
        .unwrap_or_else(|| format!("Request failed ({status})"));
    Err(error_for_status(status, message))
}

fn error_for_status(status: StatusCode, message: String) -> ApiError {
    match status {
        StatusCode::UNAUTHORIZED => ApiError::unauthorized(message),
        StatusCode::NOT_FOUND => ApiError::not_found(message),
        _ => ApiError::rejected(message),
    }
}

fn require<T>(data: Option<T>, what: &str) -> ApiResult<T> {
    data.ok_or_else(|| ApiError::parse(format!("response is missing {what}")))
}

/// HTTP backend for the notes REST API.
#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    pub(crate) base_url: String,
    pub(crate) token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            token: None,
        }
    }

    fn get_auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn with_auth_headers(
        mut req: reqwest::RequestBuilder,
        auth_header: Option<String>,
    ) -> reqwest::RequestBuilder {
        if let Some(header) = auth_header {
            req = req.header("Authorization", header);
        }
        req
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> ApiResult<Option<T>> {
        let client = reqwest::Client::new();
        let url = format!("{}{}", self.base_url, path);
        let mut req = client.request(method.clone(), url);
        req = Self::with_auth_headers(req, self.get_auth_header());

        if let Some(b) = body {
            req = req.json(&b);
        }

        let res = req.send().await.map_err(|e| {
            tracing::warn!(%method, path, error = %e, "request did not complete");
            ApiError::network(e)
        })?;

        let status = res.status();
        let text = res.text().await.map_err(ApiError::network)?;
        let result = decode_envelope(status, &text);
        if let Err(e) = &result {
            tracing::debug!(%method, path, %status, error = %e, "request rejected");
        }
        result
    }

    fn to_json<T: Serialize>(value: &T) -> ApiResult<serde_json::Value> {
        serde_json::to_value(value).map_err(ApiError::parse)
    }

    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

impl NotesGateway for ApiClient {
    fn set_token(&mut self, token: String) {
        ApiClient::set_token(self, token);
    }

    fn clear_token(&mut self) {
        ApiClient::clear_token(self);
    }

    fn is_authenticated(&self) -> bool {
        ApiClient::is_authenticated(self)
    }

    async fn register(&self, registration: &Registration) -> ApiResult<()> {
        let body = Self::to_json(&RegisterRequest {
            name: registration.name(),
            email: registration.email(),
            password: registration.password(),
        })?;
        self.request::<serde_json::Value>(Method::POST, "/register", Some(body))
            .await
            .map(|_| ())
    }

    async fn login(&self, credentials: &Credentials) -> ApiResult<String> {
        let body = Self::to_json(credentials)?;
        let data: Option<LoginData> = self.request(Method::POST, "/login", Some(body)).await?;
        let token = require(data, "access token")?.access_token;
        if token.trim().is_empty() {
            return Err(ApiError::parse("response carries an empty access token"));
        }
        Ok(token)
    }

    async fn current_user(&self) -> ApiResult<User> {
        let data = self.request(Method::GET, "/users/me", None).await?;
        require(data, "user")
    }

    async fn list_active(&self) -> ApiResult<Vec<Note>> {
        let data = self.request(Method::GET, "/notes", None).await?;
        Ok(data.unwrap_or_default())
    }

    async fn list_archived(&self) -> ApiResult<Vec<Note>> {
        let data = self.request(Method::GET, "/notes/archived", None).await?;
        Ok(data.unwrap_or_default())
    }

    async fn get_note(&self, id: &str) -> ApiResult<Note> {
        let path = format!("/notes/{}", urlencoding::encode(id));
        let data = self.request(Method::GET, &path, None).await?;
        data.ok_or_else(|| ApiError::not_found("Note is not found"))
    }

    async fn create_note(&self, note: &NewNote) -> ApiResult<Note> {
        let body = Self::to_json(note)?;
        let data = self.request(Method::POST, "/notes", Some(body)).await?;
        require(data, "created note")
    }

    async fn archive_note(&self, id: &str) -> ApiResult<()> {
        let path = format!("/notes/{}/archive", urlencoding::encode(id));
        self.request::<serde_json::Value>(Method::POST, &path, None)
            .await
            .map(|_| ())
    }

    async fn unarchive_note(&self, id: &str) -> ApiResult<()> {
        let path = format!("/notes/{}/unarchive", urlencoding::encode(id));
        self.request::<serde_json::Value>(Method::POST, &path, None)
            .await
            .map(|_| ())
    }

    async fn delete_note(&self, id: &str) -> ApiResult<()> {
        let path = format!("/notes/{}", urlencoding::encode(id));
        self.request::<serde_json::Value>(Method::DELETE, &path, None)
            .await
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiErrorKind;

    #[test]
    fn test_api_client_new() {
        let client = ApiClient::new("http://localhost:5000".to_string());
        assert_eq!(client.base_url, "http://localhost:5000");
        assert!(client.token.is_none());
    }

    #[test]
    fn test_api_client_get_auth_header_without_token() {
        let client = ApiClient::new("http://localhost:5000".to_string());
        assert!(client.get_auth_header().is_none());
    }

    #[test]
    fn test_api_client_get_auth_header_with_token() {
        let mut client = ApiClient::new("http://localhost:5000".to_string());
        client.set_token("my-jwt-token".to_string());
        let header = client.get_auth_header().expect("Should have auth header");
        assert_eq!(header, "Bearer my-jwt-token");
    }

    #[test]
    fn test_login_response_contract_deserialize() {
        let json = r#"{
            "status": "success",
            "message": "User logged successfully",
            "data": {"accessToken": "jwt-token"}
        }"#;
        let data: Option<LoginData> =
            decode_envelope(StatusCode::OK, json).expect("login response should parse");
        assert_eq!(data.map(|d| d.access_token).as_deref(), Some("jwt-token"));
    }

    #[test]
    fn test_user_response_contract_deserialize() {
        let json = r#"{
            "status": "success",
            "message": "User retrieved",
            "data": {"id": "user-1", "name": "Ann", "email": "ann@x.com"}
        }"#;
        let user: Option<User> = decode_envelope(StatusCode::OK, json).expect("should parse");
        assert_eq!(user.map(|u| u.name).as_deref(), Some("Ann"));
    }

    #[test]
    fn test_note_list_contract_deserialize() {
        let json = r#"{
            "status": "success",
            "message": "Notes retrieved",
            "data": [
                {"id": "notes-1", "title": "Hi", "body": "World", "owner": "user-1", "archived": false, "createdAt": "2022-07-28T10:03:12.594Z"}
            ]
        }"#;
        let notes: Option<Vec<Note>> = decode_envelope(StatusCode::OK, json).expect("should parse");
        let notes = notes.expect("data present");
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "Hi");
    }

    #[test]
    fn test_fail_envelope_becomes_rejection_with_message() {
        let json = r#"{"status": "fail", "message": "Password is wrong"}"#;
        let err = decode_envelope::<LoginData>(StatusCode::BAD_REQUEST, json).unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::Rejected);
        assert_eq!(err.message, "Password is wrong");
    }

    #[test]
    fn test_unauthorized_status_maps_to_kind() {
        let json = r#"{"status": "fail", "message": "Missing authentication"}"#;
        let err = decode_envelope::<User>(StatusCode::UNAUTHORIZED, json).unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::Unauthorized);
    }

    #[test]
    fn test_not_found_status_maps_to_kind() {
        let json = r#"{"status": "fail", "message": "Note is not found"}"#;
        let err = decode_envelope::<Note>(StatusCode::NOT_FOUND, json).unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::NotFound);
        assert_eq!(err.message, "Note is not found");
    }

    #[test]
    fn test_non_json_error_body_still_has_message() {
        let err = decode_envelope::<Note>(StatusCode::BAD_GATEWAY, "<html>").unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::Rejected);
        assert!(err.message.contains("502"));
    }

    #[test]
    fn test_non_json_success_body_is_parse_error() {
        let err = decode_envelope::<Note>(StatusCode::OK, "oops").unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::Parse);
    }

    #[test]
    fn test_success_without_data_is_none() {
        let json = r#"{"status": "success", "message": "Note archived"}"#;
        let data: Option<serde_json::Value> =
            decode_envelope(StatusCode::OK, json).expect("should parse");
        assert!(data.is_none());
    }

    #[test]
    fn test_envelope_carries_data_without_default_impl() {
        let json = r#"{"status": "success", "message": "ok", "data": {"accessToken": "jwt"}}"#;
        let data: Option<LoginData> = decode_envelope(StatusCode::OK, json).expect("should parse");
        assert_eq!(data.expect("data").access_token, "jwt");
    }

    #[test]
    fn test_register_request_serialization() {
        let req = RegisterRequest {
            name: "Ann",
            email: "ann@x.com",
            password: "secret1",
        };
        let v = serde_json::to_value(req).expect("should serialize");
        assert_eq!(v["name"], "Ann");
        assert_eq!(v["email"], "ann@x.com");
        assert_eq!(v["password"], "secret1");
    }
}
