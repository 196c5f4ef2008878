use sfa_core::{
    models::{ProductData, ProductId, ProductRecord, Rating},
    ports::{ProductRepository, Repository},
};
use std::sync::{Arc, Mutex};

/// Every operation on this product fails, as does creating a product with
/// this title.
pub const BROKEN_ID: u64 = 13;
pub const BROKEN_TITLE: &str = "Broken";

/// The error our catalog double reports, worded like a failed HTTP call.
#[derive(Debug)]
pub struct Unavailable(pub u16);

impl std::fmt::Display for Unavailable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "API error: {}", self.0)
    }
}

impl std::error::Error for Unavailable {}

#[derive(Default)]
struct State {
    products: Vec<ProductRecord>,
    fail_list: bool,
    list_calls: usize,
    created: Vec<ProductData>,
    updated: Vec<ProductRecord>,
    deleted: Vec<ProductId>,
}

/// An in-memory stand-in for the remote product service.
///
/// Like the public demo service, writes are acknowledged but never change
/// what later reads return. They are recorded for inspection instead.
#[derive(Clone, Default)]
pub struct MemoryCatalog(Arc<Mutex<State>>);

fn product(id: u64, title: &str, price: f64, category: &str, rate: f64, count: u32) -> ProductRecord {
    ProductRecord::new(
        id,
        ProductData {
            title: title.to_string(),
            price,
            description: format!("The {} you have been looking for", title.to_lowercase()),
            category: category.to_string(),
            image: format!("https://images.example.com/{id}.jpg"),
            rating: Rating { rate, count },
        },
    )
}

impl MemoryCatalog {
    pub fn seeded() -> Self {
        let catalog = Self::default();
        catalog.0.lock().unwrap().products = vec![
            product(1, "Foldsack Backpack", 109.95, "men's clothing", 3.9, 120),
            product(2, "Legends Naga Bracelet", 695.0, "jewelery", 4.6, 400),
            product(3, "Portable Hard Drive", 64.0, "electronics", 3.3, 203),
            product(7, "White Gold Princess Ring", 9.99, "jewelery", 3.0, 400),
            product(BROKEN_ID, "Curved Gaming Monitor", 999.99, "electronics", 2.2, 140),
        ];
        catalog
    }

    pub fn fail_list(&self) {
        self.0.lock().unwrap().fail_list = true;
    }

    pub fn list_calls(&self) -> usize {
        self.0.lock().unwrap().list_calls
    }

    pub fn created(&self) -> Vec<ProductData> {
        self.0.lock().unwrap().created.clone()
    }

    pub fn updated(&self) -> Vec<ProductRecord> {
        self.0.lock().unwrap().updated.clone()
    }

    pub fn deleted(&self) -> Vec<ProductId> {
        self.0.lock().unwrap().deleted.clone()
    }
}

impl Repository for MemoryCatalog {
    type Error = Unavailable;
}

impl ProductRepository for MemoryCatalog {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, Self::Error> {
        let mut state = self.0.lock().unwrap();
        state.list_calls += 1;
        if state.fail_list {
            Err(Unavailable(500))
        } else {
            Ok(state.products.clone())
        }
    }

    async fn get_product(&self, product_id: ProductId) -> Result<Option<ProductRecord>, Self::Error> {
        if product_id == ProductId(BROKEN_ID) {
            return Err(Unavailable(500));
        }
        let state = self.0.lock().unwrap();
        Ok(state.products.iter().find(|p| p.id == product_id).cloned())
    }

    async fn create_product(
        &self,
        product_data: ProductData,
    ) -> Result<Option<ProductId>, Self::Error> {
        if product_data.title == BROKEN_TITLE {
            return Err(Unavailable(400));
        }
        let mut state = self.0.lock().unwrap();
        state.created.push(product_data.clone());
        Ok(Some(ProductId(21)))
    }

    async fn update_product(&self, record: ProductRecord) -> Result<ProductRecord, Self::Error> {
        if record.id == ProductId(BROKEN_ID) {
            return Err(Unavailable(500));
        }
        let mut state = self.0.lock().unwrap();
        state.updated.push(record.clone());
        Ok(record)
    }

    async fn delete_product(&self, product_id: ProductId) -> Result<(), Self::Error> {
        if product_id == ProductId(BROKEN_ID) {
            return Err(Unavailable(500));
        }
        self.0.lock().unwrap().deleted.push(product_id);
        Ok(())
    }
}
