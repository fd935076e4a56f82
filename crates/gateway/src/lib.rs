//! Client for the remote content gateway: a hosted tabular query service
//! spoken to over its REST surface. Each request is described with a small
//! fluent builder (`select`/`order`/`eq`/`limit`) and resolved as a row set,
//! an optional single row, or an insert acknowledgement.

use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::debug;
use url::Url;

mod config;

pub use config::{load_settings, GatewaySettings};

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("gateway is misconfigured: {0}")]
    Config(String),
    #[error("gateway request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("gateway responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("gateway row did not match the expected shape: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("expected at most one row from '{table}', got {count}")]
    MultipleRows { table: String, count: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    fn suffix(self) -> &'static str {
        match self {
            Order::Asc => "asc",
            Order::Desc => "desc",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Gateway {
    http: Client,
    base: String,
    anon_key: String,
}

impl Gateway {
    /// Validates the configured base url and key once, up front. A failure
    /// here is a startup precondition, not a runtime condition.
    pub fn new(settings: &GatewaySettings) -> Result<Self, GatewayError> {
        let base = settings.url.trim().trim_end_matches('/').to_string();
        Url::parse(&base)
            .map_err(|err| GatewayError::Config(format!("invalid gateway url '{base}': {err}")))?;
        let anon_key = settings.anon_key.trim().to_string();
        if anon_key.is_empty() {
            return Err(GatewayError::Config(
                "gateway anon key is not configured".to_string(),
            ));
        }
        Ok(Self {
            http: Client::new(),
            base,
            anon_key,
        })
    }

    pub fn from(&self, table: &str) -> QueryBuilder {
        QueryBuilder {
            http: self.http.clone(),
            url: format!("{}/rest/v1/{table}", self.base),
            table: table.to_string(),
            anon_key: self.anon_key.clone(),
            select: "*".to_string(),
            filters: Vec::new(),
            order: None,
            limit: None,
        }
    }
}

/// One pending request against a single table. Consumed by `fetch`,
/// `maybe_single` or `insert`.
pub struct QueryBuilder {
    http: Client,
    url: String,
    table: String,
    anon_key: String,
    select: String,
    filters: Vec<(String, String)>,
    order: Option<(String, Order)>,
    limit: Option<u32>,
}

impl QueryBuilder {
    pub fn select(mut self, columns: &str) -> Self {
        self.select = columns.to_string();
        self
    }

    pub fn order(mut self, column: &str, direction: Order) -> Self {
        self.order = Some((column.to_string(), direction));
        self
    }

    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.filters
            .push((column.to_string(), format!("eq.{value}")));
        self
    }

    pub fn limit(mut self, n: u32) -> Self {
        self.limit = Some(n);
        self
    }

    pub async fn fetch<T: DeserializeOwned>(self) -> Result<Vec<T>, GatewayError> {
        let (table, request) = self.into_get();
        debug!(table = %table, "gateway read");
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(serde_json::from_str(&body)?)
    }

    /// Zero-or-one-row read. More than one match is a contract violation on
    /// the caller's filter, surfaced as an error rather than silently
    /// picking a row.
    pub async fn maybe_single<T: DeserializeOwned>(self) -> Result<Option<T>, GatewayError> {
        let table = self.table.clone();
        let mut rows: Vec<T> = self.fetch().await?;
        match rows.len() {
            0 => Ok(None),
            1 => Ok(rows.pop()),
            count => Err(GatewayError::MultipleRows { table, count }),
        }
    }

    pub async fn insert<T: Serialize>(self, row: &T) -> Result<(), GatewayError> {
        debug!(table = %self.table, "gateway insert");
        let response = self
            .http
            .post(&self.url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .header("Prefer", "return=minimal")
            .json(row)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }

    fn into_get(self) -> (String, reqwest::RequestBuilder) {
        let mut params: Vec<(String, String)> = vec![("select".to_string(), self.select)];
        for (column, filter) in self.filters {
            params.push((column, filter));
        }
        if let Some((column, direction)) = self.order {
            params.push((
                "order".to_string(),
                format!("{column}.{}", direction.suffix()),
            ));
        }
        if let Some(n) = self.limit {
            params.push(("limit".to_string(), n.to_string()));
        }
        let request = self
            .http
            .get(&self.url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .query(&params);
        (self.table, request)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
