use std::future::Future;
use std::time::Instant;

use crate::constants::API_URL;
use crate::data_types::qnips_data_types::MealData;
use crate::errors::FetchError;

/// Anything that can produce one week of meal data.
pub trait MealSource {
    fn fetch_meals(&self) -> impl Future<Output = Result<MealData, FetchError>> + Send;
}

/// Reads the weekly plan from the qnips dbapi with a single GET.
#[derive(Debug, Clone)]
pub struct QnipsFetcher {
    client: reqwest::Client,
    url: String,
}

impl QnipsFetcher {
    pub fn new() -> Self {
        Self::with_url(API_URL)
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        QnipsFetcher {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for QnipsFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl MealSource for QnipsFetcher {
    async fn fetch_meals(&self) -> Result<MealData, FetchError> {
        let now = Instant::now();
        let body = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        log::info!("qnips response: {:.2?}", now.elapsed());

        let data = MealData::from_json(&body)?;
        log::debug!(
            "Received data: {} allergens, {} products, {} rows",
            data.allergens.as_ref().map_or(0, |allergens| allergens.len()),
            data.products.len(),
            data.rows.len()
        );

        Ok(data)
    }
}
