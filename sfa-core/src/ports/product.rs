use crate::models::{ProductData, ProductId, ProductRecord};

/// Repository interface for the remote product service.
///
/// The admin panel holds no authoritative copy of any product; each method
/// corresponds to exactly one request against the service of record. None of
/// them retry.
pub trait ProductRepository: super::Repository {
    /// Retrieve every product.
    fn list_products(&self) -> impl Future<Output = Result<Vec<ProductRecord>, Self::Error>> + Send;

    /// Retrieve a single product.
    ///
    /// # Returns
    ///
    /// Ok(Some(record)) if the product exists, Ok(None) if it does not.
    fn get_product(
        &self,
        product_id: ProductId,
    ) -> impl Future<Output = Result<Option<ProductRecord>, Self::Error>> + Send;

    /// Create a new product. The service assigns the id.
    ///
    /// # Returns
    ///
    /// Ok(Some(id)) if the service's reply names the new id, Ok(None) if the
    /// service accepted the product without saying which id it assigned.
    fn create_product(
        &self,
        product_data: ProductData,
    ) -> impl Future<Output = Result<Option<ProductId>, Self::Error>> + Send;

    /// Replace an existing product's data with `record.data`.
    fn update_product(
        &self,
        record: ProductRecord,
    ) -> impl Future<Output = Result<ProductRecord, Self::Error>> + Send;

    /// Delete a product.
    fn delete_product(
        &self,
        product_id: ProductId,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;
}
