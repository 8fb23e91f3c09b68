use super::types::GraphQlResponse;
use crate::error::{BadgeError, Result};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;

const USER_AGENT_VALUE: &str = concat!("statbadge/", env!("CARGO_PKG_VERSION"));

/// Outcome of a REST call that GitHub may not be able to answer yet.
#[derive(Debug)]
pub enum RestResponse<T> {
    Ok(T),
    /// 202: statistics are still being computed on GitHub's side.
    Pending,
    Failed(StatusCode),
}

/// Thin authenticated wrapper over the GraphQL and REST endpoints.
pub struct GitHubClient {
    client: Client,
    api_url: String,
    token: String,
}

impl GitHubClient {
    pub fn new(api_url: &str, token: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    pub fn graphql<T: DeserializeOwned>(&self, query: &str) -> Result<T> {
        let response = self
            .client
            .post(format!("{}/graphql", self.api_url))
            .bearer_auth(&self.token)
            .json(&json!({ "query": query }))
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(BadgeError::Api(format!("GraphQL request failed with {status}")));
        }

        let body: GraphQlResponse<T> = response.json()?;
        match body.data {
            Some(data) => Ok(data),
            None => {
                let messages: Vec<_> = body.errors.into_iter().map(|e| e.message).collect();
                Err(BadgeError::Api(if messages.is_empty() {
                    "GraphQL response carried no data".to_string()
                } else {
                    messages.join("; ")
                }))
            }
        }
    }

    pub fn rest<T: DeserializeOwned>(&self, path: &str) -> Result<RestResponse<T>> {
        let path = path.trim_start_matches('/');
        let response = self
            .client
            .get(format!("{}/{}", self.api_url, path))
            .header("Authorization", format!("token {}", self.token))
            .send()?;

        match response.status() {
            StatusCode::ACCEPTED => Ok(RestResponse::Pending),
            status if status.is_success() => Ok(RestResponse::Ok(response.json()?)),
            status => Ok(RestResponse::Failed(status)),
        }
    }
}
