//! # REST client
//!
//! [`ApiClient`] is a thin wrapper over `reqwest` that knows the backend's
//! paths and payloads. It is cheap to clone; pages build one per action with
//! the token currently in the session.
//!
//! Every route the UI calls is listed in [`Endpoint`], so the full REST
//! surface (method + path) is visible in one place.
//!
//! ## Authorization
//!
//! When the client carries a token, every request gets
//! `Authorization: Bearer <token>`. Without one, no authorization header is
//! sent and the backend decides what an anonymous caller may see.
//!
//! ## Failures
//!
//! Non-2xx responses become [`ApiError::Status`] carrying the backend's
//! `detail` text. Transport failures become [`ApiError::Network`]. Nothing is
//! retried.

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::models::{
    Ack, Architect, BanCandidate, Ballot, Broadcast, Credentials, EntryPassword, EntryVerdict,
    Envelope, EraseSummary, HallOfFameMessage, Invitation, LikeState, LoginResponse, NewRecord,
    Record, Registration, RegisterResponse, RestoreSummary, Snapshot, Vote,
};

/// A route on the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    VerifyEntry,
    Login,
    Register,
    Invite,
    ListRecords,
    CreateRecord,
    GetRecord(i64),
    LikeRecord(i64),
    UnlikeRecord(i64),
    EraseRecords,
    DownloadSnapshot,
    UploadSnapshot,
    ListVotes,
    SendVote,
    CheckPromote,
    Promote,
    CheckBan,
    Ban,
    HallOfFame,
    SendHallOfFame,
    Broadcast,
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::ListRecords
            | Endpoint::GetRecord(_)
            | Endpoint::DownloadSnapshot
            | Endpoint::ListVotes
            | Endpoint::CheckPromote
            | Endpoint::CheckBan
            | Endpoint::HallOfFame => Method::GET,
            _ => Method::POST,
        }
    }

    /// Path relative to the API base.
    pub fn path(&self) -> String {
        match self {
            Endpoint::VerifyEntry => "/api/authentific/entry/".to_string(),
            Endpoint::Login => "/api/authentific/login/".to_string(),
            Endpoint::Register => "/api/authentific/register/".to_string(),
            Endpoint::Invite => "/api/authentific/invite/".to_string(),
            Endpoint::ListRecords => "/api/records/all".to_string(),
            Endpoint::CreateRecord => "/api/records/create".to_string(),
            Endpoint::GetRecord(id) => format!("/api/records/{id}"),
            Endpoint::LikeRecord(id) => format!("/api/records/{id}/like/"),
            Endpoint::UnlikeRecord(id) => format!("/api/records/{id}/unlike/"),
            Endpoint::EraseRecords => "/api/records/erase".to_string(),
            Endpoint::DownloadSnapshot => "/api/snapshot/download/".to_string(),
            Endpoint::UploadSnapshot => "/api/snapshot/upload/".to_string(),
            Endpoint::ListVotes => "/api/votes/".to_string(),
            Endpoint::SendVote => "/api/votes/send/".to_string(),
            Endpoint::CheckPromote => "/api/votes/promote/check/".to_string(),
            Endpoint::Promote => "/api/votes/promote/".to_string(),
            Endpoint::CheckBan => "/api/votes/ban/check/".to_string(),
            Endpoint::Ban => "/api/votes/ban/".to_string(),
            Endpoint::HallOfFame => "/api/hall_of_fame/".to_string(),
            Endpoint::SendHallOfFame => "/api/hall_of_fame/send/".to_string(),
            Endpoint::Broadcast => "/api/broadcast/".to_string(),
        }
    }
}

/// HTTP client for the backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let base = config.base_url()?.to_string();

        #[allow(unused_mut)]
        let mut builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.timeout(std::time::Duration::from_millis(config.api.timeout_ms));
        }

        Ok(Self {
            http: builder.build()?,
            base,
            token: None,
        })
    }

    /// Builder method to attach (or drop) the bearer token.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Start a request to `endpoint`, with the bearer header when a token is set.
    pub fn request(&self, endpoint: Endpoint) -> RequestBuilder {
        let url = format!("{}{}", self.base, endpoint.path());
        let builder = self.http.request(endpoint.method(), url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!("Backend answered {}: {}", status, body);
        Err(ApiError::from_status(
            status.as_u16(),
            status.canonical_reason(),
            &body,
        ))
    }

    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let bytes = self.send(builder).await?.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn send_empty(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        self.send(builder).await?;
        Ok(())
    }

    // Entry gate and accounts

    pub async fn verify_entry(&self, password: &str) -> Result<EntryVerdict, ApiError> {
        let body = EntryPassword {
            password: password.to_string(),
        };
        self.send_json(self.request(Endpoint::VerifyEntry).json(&body))
            .await
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = Credentials {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        self.send_json(self.request(Endpoint::Login).json(&body)).await
    }

    pub async fn register(&self, registration: &Registration) -> Result<RegisterResponse, ApiError> {
        self.send_json(self.request(Endpoint::Register).json(registration))
            .await
    }

    pub async fn invite(&self, email: &str) -> Result<(), ApiError> {
        let body = Invitation {
            email: email.trim().to_string(),
        };
        self.send_empty(self.request(Endpoint::Invite).json(&body))
            .await
    }

    // Records

    pub async fn list_records(&self) -> Result<Envelope<Vec<Record>>, ApiError> {
        self.send_json(self.request(Endpoint::ListRecords)).await
    }

    pub async fn create_record(&self, record: NewRecord) -> Result<Envelope<Record>, ApiError> {
        self.send_json(
            self.request(Endpoint::CreateRecord)
                .multipart(record.into_form()),
        )
        .await
    }

    pub async fn get_record(&self, id: i64) -> Result<Envelope<Record>, ApiError> {
        self.send_json(self.request(Endpoint::GetRecord(id))).await
    }

    pub async fn like_record(&self, id: i64) -> Result<LikeState, ApiError> {
        self.send_json(self.empty_json(Endpoint::LikeRecord(id)))
            .await
    }

    pub async fn unlike_record(&self, id: i64) -> Result<LikeState, ApiError> {
        self.send_json(self.empty_json(Endpoint::UnlikeRecord(id)))
            .await
    }

    pub async fn erase_records(&self) -> Result<EraseSummary, ApiError> {
        self.send_json(self.empty_json(Endpoint::EraseRecords))
            .await
    }

    // Snapshots

    /// Raw bytes of the backup file.
    pub async fn download_snapshot(&self) -> Result<Vec<u8>, ApiError> {
        let response = self.send(self.request(Endpoint::DownloadSnapshot)).await?;
        Ok(response.bytes().await?.to_vec())
    }

    pub async fn upload_snapshot(&self, snapshot: &Snapshot) -> Result<RestoreSummary, ApiError> {
        self.send_json(self.request(Endpoint::UploadSnapshot).json(snapshot))
            .await
    }

    // Votes

    pub async fn list_votes(&self) -> Result<Envelope<Vec<Vote>>, ApiError> {
        self.send_json(self.request(Endpoint::ListVotes)).await
    }

    pub async fn send_vote(&self, ballot: &Ballot) -> Result<Ack, ApiError> {
        self.send_json(self.request(Endpoint::SendVote).json(ballot))
            .await
    }

    pub async fn check_promote(&self) -> Result<Ack, ApiError> {
        self.send_json(self.request(Endpoint::CheckPromote)).await
    }

    pub async fn promote(&self) -> Result<Ack, ApiError> {
        self.send_json(self.empty_json(Endpoint::Promote)).await
    }

    pub async fn check_ban(&self) -> Result<Envelope<Vec<BanCandidate>>, ApiError> {
        self.send_json(self.request(Endpoint::CheckBan)).await
    }

    pub async fn ban(&self, candidate: &BanCandidate) -> Result<Ack, ApiError> {
        self.send_json(self.request(Endpoint::Ban).json(candidate))
            .await
    }

    // Hall of fame and broadcast

    /// Architects to thank. The list is read whatever the envelope status.
    pub async fn hall_of_fame(&self) -> Result<Vec<Architect>, ApiError> {
        let envelope: Envelope<Vec<Architect>> =
            self.send_json(self.request(Endpoint::HallOfFame)).await?;
        Ok(envelope.into_payload())
    }

    pub async fn send_hall_of_fame(&self, message: &HallOfFameMessage) -> Result<(), ApiError> {
        self.send_empty(self.request(Endpoint::SendHallOfFame).json(message))
            .await
    }

    pub async fn broadcast(&self, broadcast: &Broadcast) -> Result<(), ApiError> {
        self.send_empty(self.request(Endpoint::Broadcast).json(broadcast))
            .await
    }

    fn empty_json(&self, endpoint: Endpoint) -> RequestBuilder {
        self.request(endpoint).json(&serde_json::json!({}))
    }
}
