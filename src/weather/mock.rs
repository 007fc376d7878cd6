use super::WeatherService;
use crate::error::UpstreamError;
use crate::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// In-memory [`WeatherService`] returning a fixed body.
#[derive(Clone)]
pub struct MockWeatherClient {
    body: String,
    failure: Option<UpstreamError>,
    queries: Arc<Mutex<Vec<String>>>,
}

impl MockWeatherClient {
    pub fn new(body: &str) -> Self {
        Self {
            body: body.to_string(),
            failure: None,
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_failure(mut self, error: UpstreamError) -> Self {
        self.failure = Some(error);
        self
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl WeatherService for MockWeatherClient {
    async fn fetch_current(&self, query: &str) -> Result<String> {
        self.queries.lock().unwrap().push(query.to_string());

        match &self.failure {
            Some(error) => Err(error.clone().into()),
            None => Ok(self.body.clone()),
        }
    }
}
