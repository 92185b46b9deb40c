//! Product catalog module.
//!
//! Contains product and category records, their categorical attributes,
//! and the read-only catalog store.

mod attributes;
mod category;
mod product;
mod seed;
mod store;

pub use attributes::{CategoryName, Material, Stone, Style};
pub use category::{Category, CollectionInfo};
pub use product::Product;
pub use store::Catalog;
