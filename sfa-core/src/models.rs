mod category;
mod form;
mod load;
mod product;

pub use category::{CATEGORY_OPTIONS, CategoryOption, categories, category_label};
pub use form::{ProductForm, coerce_count, coerce_decimal};
pub use load::{Loaded, NOT_FOUND_MESSAGE};
pub use product::{ParseProductIdError, ProductData, ProductId, ProductRecord, Rating};
