use crate::{RestCatalog, check, read_json, read_optional_json};
use reqwest::StatusCode;
use serde::Deserialize;
use sfa_core::{
    models::{ProductData, ProductId, ProductRecord},
    ports::ProductRepository,
};
use tracing::{Level, event};

/// What the service sends back after a write. Some deployments leave the id
/// out of the echo, in which case we fall back to the id we addressed.
#[derive(Deserialize)]
struct Echo {
    id: Option<ProductId>,
    #[serde(flatten)]
    data: ProductData,
}

/// The part of a create reply we care about. Anything else in the body, or
/// a body that is not a product at all, is ignored: the status decides.
#[derive(Deserialize)]
struct Assigned {
    id: Option<ProductId>,
}

impl ProductRepository for RestCatalog {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, Self::Error> {
        let url = self.endpoint("products")?;
        event!(Level::DEBUG, %url, "listing products");

        let response = self.client.get(url).send().await?;
        read_json(check(response)?).await
    }

    async fn get_product(
        &self,
        product_id: ProductId,
    ) -> Result<Option<ProductRecord>, Self::Error> {
        let url = self.endpoint(&format!("products/{product_id}"))?;
        event!(Level::DEBUG, %url, "fetching product");

        let response = self.client.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        read_optional_json(check(response)?).await
    }

    async fn create_product(
        &self,
        product_data: ProductData,
    ) -> Result<Option<ProductId>, Self::Error> {
        let url = self.endpoint("products")?;
        event!(Level::DEBUG, %url, title = %product_data.title, "creating product");

        let response = self.client.post(url).json(&product_data).send().await?;
        let body = check(response)?.bytes().await?;
        Ok(serde_json::from_slice::<Assigned>(&body)
            .ok()
            .and_then(|assigned| assigned.id))
    }

    async fn update_product(&self, record: ProductRecord) -> Result<ProductRecord, Self::Error> {
        let url = self.endpoint(&format!("products/{}", record.id))?;
        event!(Level::DEBUG, %url, "updating product");

        let response = self.client.put(url).json(&record).send().await?;
        let echo: Echo = read_json(check(response)?).await?;
        Ok(ProductRecord {
            id: echo.id.unwrap_or(record.id),
            data: echo.data,
        })
    }

    async fn delete_product(&self, product_id: ProductId) -> Result<(), Self::Error> {
        let url = self.endpoint(&format!("products/{product_id}"))?;
        event!(Level::DEBUG, %url, "deleting product");

        let response = self.client.delete(url).send().await?;
        // the body is an acknowledgement whose shape varies; only the status matters
        check(response)?;
        Ok(())
    }
}
