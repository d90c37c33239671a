//! Product catalog.
//!
//! Products are read from a JSON array such as:
//!
//! ```json
//! [
//!   {"id": "aula-fisica", "title": "Physics lesson (1h)", "price": 120.0},
//!   {"id": "ebook-enem", "title": "Exam prep e-book", "price": 39.9, "description": "PDF"}
//! ]
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cart::NewItem;
use crate::error::CartError;
use crate::ids::ItemId;

/// A product that can be added to the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product id, reused as the cart line id.
    pub id: ItemId,
    /// Display name.
    pub title: String,
    /// Unit price.
    pub price: f64,
    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Product {
    /// Build the cart input for one unit of this product.
    pub fn to_new_item(&self) -> Result<NewItem, CartError> {
        NewItem::new(self.id.clone(), self.title.clone(), self.price)
    }
}

/// An ordered list of products.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Load a catalog file. A missing file is an empty catalog.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CartError> {
        let path = path.as_ref();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(CartError::CatalogRead {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let products =
            serde_json::from_str(&content).map_err(|source| CartError::CatalogParse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self { products })
    }

    /// Find a product by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id.as_str() == id)
    }

    /// Products in file order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Check if catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
