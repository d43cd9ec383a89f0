//! # Catalog Client
//!
//! [`CatalogSource`] is the seam the storefront fetches through;
//! [`MealDbClient`] is the HTTP implementation.
//!
//! ## Request Flow
//! ```text
//! list_items_by_category("Indian")
//!   │
//!   ├── base.join("filter.php") + ?a=Indian
//!   ├── GET (timeout from CatalogConfig)
//!   ├── non-2xx ──────────────► CatalogFetchError::Status
//!   ├── body ─ serde_json ─ fail ► CatalogFetchError::Decode
//!   └── {"meals": [...] | null} ► Vec<CatalogItem>
//! ```

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use foodie_core::{CatalogItem, Category};

use crate::config::CatalogConfig;
use crate::error::{CatalogFetchError, CatalogResult};
use crate::wire::{AreaRecord, MealSummary, MealsEnvelope};

/// Async source of catalog data.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn list_categories(&self) -> CatalogResult<Vec<Category>>;

    async fn list_items_by_category(&self, category: &str) -> CatalogResult<Vec<CatalogItem>>;
}

/// TheMealDB HTTP client.
#[derive(Debug, Clone)]
pub struct MealDbClient {
    http: reqwest::Client,
    base_url: Url,
}

impl MealDbClient {
    /// Builds a client from config.
    ///
    /// # Errors
    ///
    /// Returns `InvalidUrl` for a bad base URL, `Network` if the HTTP client
    /// cannot be built.
    pub fn new(config: &CatalogConfig) -> CatalogResult<Self> {
        let base_url = config.parsed_base_url()?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(MealDbClient { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> CatalogResult<T> {
        let url = self.base_url.join(endpoint)?;
        debug!(%url, ?query, "Catalog GET");

        let response = self.http.get(url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogFetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl CatalogSource for MealDbClient {
    async fn list_categories(&self) -> CatalogResult<Vec<Category>> {
        let envelope: MealsEnvelope<AreaRecord> =
            self.get_json("list.php", &[("a", "list")]).await?;

        Ok(envelope.into_vec().into_iter().map(Category::from).collect())
    }

    async fn list_items_by_category(&self, category: &str) -> CatalogResult<Vec<CatalogItem>> {
        let envelope: MealsEnvelope<MealSummary> =
            self.get_json("filter.php", &[("a", category)]).await?;

        Ok(envelope
            .into_vec()
            .into_iter()
            .map(|meal| meal.into_item(category))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> MealDbClient {
        MealDbClient::new(&CatalogConfig::with_base_url(server.uri())).unwrap()
    }

    #[tokio::test]
    async fn test_list_categories() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/list.php"))
            .and(query_param("a", "list"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "meals": [{"strArea": "Indian"}, {"strArea": "Thai"}]
            })))
            .mount(&server)
            .await;

        let categories = client_for(&server).await.list_categories().await.unwrap();
        assert_eq!(categories, vec![Category::new("Indian"), Category::new("Thai")]);
    }

    #[tokio::test]
    async fn test_list_items_tags_category() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/filter.php"))
            .and(query_param("a", "Indian"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "meals": [
                    {"idMeal": "52806", "strMeal": "Tandoori chicken", "strMealThumb": "https://img/1.jpg"},
                    {"idMeal": "52785", "strMeal": "Dal fry", "strMealThumb": "https://img/2.jpg"}
                ]
            })))
            .mount(&server)
            .await;

        let items = client_for(&server)
            .await
            .list_items_by_category("Indian")
            .await
            .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[1].display_name, "Dal fry");
        assert!(items.iter().all(|i| i.category == "Indian"));
    }

    #[tokio::test]
    async fn test_null_meals_is_empty_list() {
        let server = MockServer::start().await;
        Mock::given(path("/filter.php"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"meals": null})))
            .mount(&server)
            .await;

        let items = client_for(&server)
            .await
            .list_items_by_category("Nowhere")
            .await
            .unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_server_error_maps_to_status() {
        let server = MockServer::start().await;
        Mock::given(path("/list.php"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = client_for(&server).await.list_categories().await.unwrap_err();
        assert!(matches!(err, CatalogFetchError::Status { status: 503 }));
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_malformed_body_maps_to_decode() {
        let server = MockServer::start().await;
        Mock::given(path("/list.php"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).await.list_categories().await.unwrap_err();
        assert!(matches!(err, CatalogFetchError::Decode(_)));
    }
}
