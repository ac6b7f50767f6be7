use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use gloo_net::http::Request;
use log::debug;
use thiserror::Error;

use crate::config;
use crate::team::model::TeamRecord;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FetchError {
    #[error("request to team store failed: {0}")]
    Network(String),
    #[error("team store answered with status {0}")]
    Status(u16),
    #[error("team store returned an unreadable payload: {0}")]
    Malformed(String),
}

pub type FetchFuture = Pin<Box<dyn Future<Output = Result<Vec<TeamRecord>, FetchError>>>>;

/// Fetches the active team records, ordered by display order and then
/// creation time. Implementations do the filtering and ordering; callers
/// never reorder what comes back.
pub trait DirectorySource {
    fn fetch_active_ordered(&self) -> FetchFuture;
}

/// Shared handle so a source can be passed as a component prop.
#[derive(Clone)]
pub struct DirectorySourceHandle(pub Rc<dyn DirectorySource>);

impl DirectorySourceHandle {
    pub fn new<S: DirectorySource + 'static>(source: S) -> Self {
        Self(Rc::new(source))
    }

    pub fn rest() -> Self {
        Self::new(RestDirectorySource::from_config())
    }

    pub fn fetch(&self) -> FetchFuture {
        self.0.fetch_active_ordered()
    }
}

impl PartialEq for DirectorySourceHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

pub fn team_query_url(store_url: &str, collection: &str) -> String {
    format!(
        "{}/rest/v1/{}?select=*&is_active=eq.true&order=display_order.asc,created_at.asc",
        store_url.trim_end_matches('/'),
        urlencoding::encode(collection)
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct RestDirectorySource {
    url: String,
    api_key: Option<String>,
}

impl RestDirectorySource {
    pub fn new(store_url: &str, collection: &str, api_key: Option<&str>) -> Self {
        Self {
            url: team_query_url(store_url, collection),
            api_key: api_key.map(str::to_string),
        }
    }

    pub fn from_config() -> Self {
        Self::new(
            config::get_store_url(),
            config::TEAM_COLLECTION,
            config::get_store_key(),
        )
    }

    async fn fetch(url: String, api_key: Option<String>) -> Result<Vec<TeamRecord>, FetchError> {
        let mut request = Request::get(&url).header("Accept", "application/json");
        if let Some(key) = api_key.as_deref() {
            request = request
                .header("apikey", key)
                .header("Authorization", &format!("Bearer {}", key));
        }

        let response = request
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }

        let records = response
            .json::<Vec<TeamRecord>>()
            .await
            .map_err(|e| FetchError::Malformed(e.to_string()))?;
        debug!("Fetched {} team records", records.len());
        Ok(records)
    }
}

impl DirectorySource for RestDirectorySource {
    fn fetch_active_ordered(&self) -> FetchFuture {
        Box::pin(Self::fetch(self.url.clone(), self.api_key.clone()))
    }
}
