use super::{DeleteWorkflow, ListQuery, filter_and_sort};
use crate::models::{ProductId, ProductRecord, categories};

/// The product list's working set.
///
/// Holds the products of the last successful fetch together with the view
/// derived from them. The view is recomputed in full whenever the query
/// changes. A successful delete patches both lists in place; nothing here
/// ever refetches.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductList {
    products: Vec<ProductRecord>,
    categories: Vec<String>,
    query: ListQuery,
    view: Vec<ProductRecord>,
    delete: DeleteWorkflow,
}

impl ProductList {
    /// Start a working set from freshly fetched products.
    pub fn new(products: Vec<ProductRecord>, query: ListQuery) -> Self {
        let categories = categories(&products);
        let view = filter_and_sort(&products, &query);
        Self {
            products,
            categories,
            query,
            view,
            delete: DeleteWorkflow::default(),
        }
    }

    /// Every product in the working set.
    pub fn products(&self) -> &[ProductRecord] {
        &self.products
    }

    /// The filtered and sorted view.
    pub fn view(&self) -> &[ProductRecord] {
        &self.view
    }

    /// The categories present when the products were fetched.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// The current view parameters.
    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    /// The state of the delete workflow.
    pub fn delete(&self) -> &DeleteWorkflow {
        &self.delete
    }

    /// Replace the view parameters and recompute the view.
    pub fn set_query(&mut self, query: ListQuery) {
        self.view = filter_and_sort(&self.products, &query);
        self.query = query;
    }

    /// Reset search, category and sort to their defaults.
    pub fn clear_filters(&mut self) {
        self.set_query(ListQuery::default());
    }

    /// Ask to delete the product with id `product_id`.
    ///
    /// Returns `false` if there is no such product or a delete is outstanding.
    pub fn request_delete(&mut self, product_id: ProductId) -> bool {
        match self.products.iter().find(|product| product.id == product_id) {
            Some(target) => self.delete.request(target.clone()),
            None => false,
        }
    }

    /// Dismiss the delete confirmation.
    pub fn cancel_delete(&mut self) -> bool {
        self.delete.cancel()
    }

    /// Confirm the pending delete, returning the id to send to the remote service.
    pub fn begin_delete(&mut self) -> Option<ProductId> {
        self.delete.confirm()
    }

    /// Record the outcome of the outstanding delete.
    ///
    /// On success the product is dropped from both the full set and the view.
    /// On failure both are left untouched and the confirmation shows the error.
    pub fn finish_delete(&mut self, result: Result<(), String>) -> Option<ProductId> {
        let deleted = self.delete.complete(result)?;
        remove_one(&mut self.products, deleted);
        remove_one(&mut self.view, deleted);
        Some(deleted)
    }
}

fn remove_one(products: &mut Vec<ProductRecord>, product_id: ProductId) {
    if let Some(index) = products.iter().position(|product| product.id == product_id) {
        products.remove(index);
    }
}
