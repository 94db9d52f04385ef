use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ApiConfig;
use crate::notes::types::{FetchNotesResponse, Note, NoteFormValues};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server returned status {status}")]
    Status { status: u16 },
    #[error("unreadable response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404 })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListNotesParams {
    pub page: usize,
    pub per_page: usize,
    pub search: Option<String>,
}

impl ListNotesParams {
    // The server expects page >= 1 and a search that is either present
    // and non-empty or absent.
    pub fn new(page: usize, per_page: usize, search: &str) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
            search: (!search.is_empty()).then(|| search.to_string()),
        }
    }
}

fn list_query(params: &ListNotesParams) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("page", params.page.to_string()),
        ("perPage", params.per_page.to_string()),
    ];
    if let Some(search) = &params.search {
        query.push(("search", search.clone()));
    }
    query
}

#[derive(Clone)]
pub struct NoteService {
    base_url: String,
    auth_token: Option<String>,
    client: reqwest::Client,
}

impl NoteService {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_token: config.auth_token.clone(),
            client: reqwest::Client::new(),
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{path}", self.base_url);
        let request = self.client.request(method, url);
        match &self.auth_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<T, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        serde_json::from_str(&body).map_err(|err| ApiError::Decode(err.to_string()))
    }

    pub async fn fetch_notes(
        &self,
        params: &ListNotesParams,
    ) -> Result<FetchNotesResponse, ApiError> {
        debug!(page = params.page, "fetching notes");
        Self::send(self.request(Method::GET, "/notes").query(&list_query(params))).await
    }

    pub async fn create_note(&self, values: &NoteFormValues) -> Result<Note, ApiError> {
        Self::send(self.request(Method::POST, "/notes").json(values)).await
    }

    pub async fn delete_note(&self, id: &str) -> Result<Note, ApiError> {
        Self::send(self.request(Method::DELETE, &format!("/notes/{id}"))).await
    }
}
