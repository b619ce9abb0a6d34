//! Bakery products and the product catalog query

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::core::filter::{Choice, Criteria, TextSearch};
use crate::core::query::{self, Page, PageRequest, SortConfig, SortKey};
use crate::core::validation::validators::{non_negative, required};
use crate::core::{FieldChecks, Record, ValidateRecord};

/// Product category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Loaf,
    Roll,
    Pastry,
    Specialty,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 4] = [
        ProductCategory::Loaf,
        ProductCategory::Roll,
        ProductCategory::Pastry,
        ProductCategory::Specialty,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Loaf => "loaf",
            ProductCategory::Roll => "roll",
            ProductCategory::Pastry => "pastry",
            ProductCategory::Specialty => "specialty",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A product the bakery sells
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub category: ProductCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Product {
    pub fn new(id: &str, name: &str, price: f64, category: ProductCategory) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            price,
            category,
            image_url: None,
        }
    }

    pub fn with_image(mut self, url: &str) -> Self {
        self.image_url = Some(url.to_string());
        self
    }
}

impl Record for Product {
    fn entity_type() -> &'static str {
        "product"
    }

    fn id(&self) -> &str {
        &self.id
    }
}

impl ValidateRecord for Product {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn check_fields(&self, checks: &mut FieldChecks<'_>) {
        checks
            .check("id", self.id.as_str(), required())
            .check("name", self.name.as_str(), required())
            .check("price", &self.price, non_negative());
    }
}

/// Catalog filter: category dropdown plus name search
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductFilter {
    pub category: Choice<ProductCategory>,
    pub search_query: String,
}

impl ProductFilter {
    pub fn compile(&self) -> ProductCriteria {
        ProductCriteria {
            category: self.category,
            search: TextSearch::new(&self.search_query),
        }
    }
}

/// Compiled [`ProductFilter`]
#[derive(Debug, Clone)]
pub struct ProductCriteria {
    category: Choice<ProductCategory>,
    search: TextSearch,
}

impl Criteria<Product> for ProductCriteria {
    fn matches(&self, product: &Product) -> bool {
        self.category.admits(&product.category) && self.search.hit(&product.name)
    }
}

/// Catalog sort keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProductSortKey {
    #[default]
    Name,
    Price,
}

fn by_name(a: &Product, b: &Product) -> Ordering {
    a.name.cmp(&b.name)
}

fn by_price(a: &Product, b: &Product) -> Ordering {
    a.price.total_cmp(&b.price)
}

impl SortKey<Product> for ProductSortKey {
    fn comparator(self) -> fn(&Product, &Product) -> Ordering {
        match self {
            ProductSortKey::Name => by_name,
            ProductSortKey::Price => by_price,
        }
    }
}

/// Filter, sort and paginate the product catalog
pub fn query(
    products: &[Product],
    filter: &ProductFilter,
    sort: SortConfig<ProductSortKey>,
    request: PageRequest,
) -> Page<Product> {
    query::run(products, &filter.compile(), sort, request)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new("PRD-001", "Sourdough Loaf", 6.50, ProductCategory::Loaf),
            Product::new("PRD-002", "Ciabatta Rolls", 4.25, ProductCategory::Roll),
            Product::new("PRD-003", "Chocolate Croissant", 3.75, ProductCategory::Pastry),
        ]
    }

    fn ids(page: &Page<Product>) -> Vec<&str> {
        page.items.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_category_filter() {
        let filter = ProductFilter {
            category: Choice::Only(ProductCategory::Roll),
            ..Default::default()
        };
        let page = query(&catalog(), &filter, SortConfig::default(), PageRequest::default());
        assert_eq!(ids(&page), vec!["PRD-002"]);
    }

    #[test]
    fn test_name_search_and_price_sort() {
        let filter = ProductFilter {
            search_query: "O".to_string(),
            ..Default::default()
        };
        let page = query(
            &catalog(),
            &filter,
            SortConfig::desc(ProductSortKey::Price),
            PageRequest::default(),
        );
        assert_eq!(ids(&page), vec!["PRD-001", "PRD-002", "PRD-003"]);
    }

    #[test]
    fn test_product_wire_format() {
        let product: Product = serde_json::from_value(serde_json::json!({
            "id": "PRD-004",
            "name": "Artisan Baguette",
            "price": 5.0,
            "category": "specialty",
            "imageUrl": "https://example.com/baguette.jpg"
        }))
        .unwrap();
        assert_eq!(product.category, ProductCategory::Specialty);
        assert_eq!(product.image_url.as_deref(), Some("https://example.com/baguette.jpg"));
    }

    #[test]
    fn test_negative_price_rejected() {
        let product = Product::new("PRD-9", "Odd Loaf", -1.0, ProductCategory::Loaf);
        let err = product.validate().unwrap_err();
        assert_eq!(err.fields()[0].field, "price");
    }
}
