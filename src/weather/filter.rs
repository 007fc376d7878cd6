//! Request rewriting applied to every call made through a [`FilteredClient`].

use crate::Result;
use reqwest::{Client, Request, RequestBuilder, Response};
use std::sync::Arc;

pub trait RequestFilter: Send + Sync {
    fn apply(&self, request: Request) -> Request;
}

/// Appends a fixed query parameter, e.g. `key=<api key>`.
pub struct ApiKeyQuery {
    name: &'static str,
    value: String,
}

impl ApiKeyQuery {
    pub fn new(name: &'static str, value: String) -> Self {
        Self { name, value }
    }
}

impl RequestFilter for ApiKeyQuery {
    fn apply(&self, mut request: Request) -> Request {
        request
            .url_mut()
            .query_pairs_mut()
            .append_pair(self.name, &self.value);
        request
    }
}

/// A `reqwest::Client` that runs its filters over each request before
/// dispatching it.
#[derive(Clone)]
pub struct FilteredClient {
    client: Client,
    filters: Vec<Arc<dyn RequestFilter>>,
}

impl FilteredClient {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            filters: Vec::new(),
        }
    }

    pub fn with_filter(mut self, filter: impl RequestFilter + 'static) -> Self {
        self.filters.push(Arc::new(filter));
        self
    }

    pub fn get(&self, url: &str) -> RequestBuilder {
        self.client.get(url)
    }

    /// Builds the request and applies the filters in insertion order.
    pub fn prepare(&self, builder: RequestBuilder) -> Result<Request> {
        let request = builder.build()?;
        Ok(self
            .filters
            .iter()
            .fold(request, |request, filter| filter.apply(request)))
    }

    /// Sends the filtered request. Transport errors drop the URL, since the
    /// filters may have written credentials into it.
    pub async fn execute(&self, builder: RequestBuilder) -> Result<Response> {
        let request = self.prepare(builder)?;
        Ok(self
            .client
            .execute(request)
            .await
            .map_err(|e| e.without_url())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_appended_after_existing_query() {
        let client = FilteredClient::new(Client::new())
            .with_filter(ApiKeyQuery::new("key", "secret".to_string()));

        let request = client
            .prepare(client.get("https://weather.test/v1/current.json").query(&[("q", "Copenhagen")]))
            .unwrap();

        assert_eq!(request.url().query(), Some("q=Copenhagen&key=secret"));
    }

    #[test]
    fn test_key_value_is_url_encoded() {
        let client = FilteredClient::new(Client::new())
            .with_filter(ApiKeyQuery::new("key", "a b&c".to_string()));

        let request = client.prepare(client.get("https://weather.test/x")).unwrap();
        assert_eq!(request.url().query(), Some("key=a+b%26c"));
    }

    #[test]
    fn test_without_filters_request_is_untouched() {
        let client = FilteredClient::new(Client::new());
        let request = client.prepare(client.get("https://weather.test/x?q=1")).unwrap();
        assert_eq!(request.url().as_str(), "https://weather.test/x?q=1");
    }
}
