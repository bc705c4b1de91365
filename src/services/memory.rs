use super::{CategoryServices, EntityStore, SupplierServices};
use crate::core::{Category, Fault, FaultResult, Product, ProductId, Supplier};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

/// Catalog services backed by process memory.
#[derive(Default)]
pub struct InMemoryCatalog {
    products: RwLock<BTreeMap<ProductId, Product>>,
    categories: RwLock<Vec<Category>>,
    suppliers: RwLock<Vec<Supplier>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        *self.categories.get_mut() = categories;
        self
    }

    pub fn with_suppliers(mut self, suppliers: Vec<Supplier>) -> Self {
        *self.suppliers.get_mut() = suppliers;
        self
    }

    /// Stores `products` as-is; each must already carry an id.
    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        let map = self.products.get_mut();
        for product in products {
            if let Some(id) = product.product_id {
                map.insert(id, product);
            }
        }
        self
    }

    /// A small catalog with a few categories, suppliers and products.
    pub fn seeded() -> Self {
        Self::new()
            .with_categories(vec![
                Category::new(1, "Beverages"),
                Category::new(2, "Condiments"),
                Category::new(3, "Confections"),
                Category::new(4, "Dairy Products"),
            ])
            .with_suppliers(vec![
                Supplier::new(1, "Exotic Liquids"),
                Supplier::new(2, "New Orleans Cajun Delights"),
                Supplier::new(3, "Grandma Kelly's Homestead"),
                Supplier::new(5, "Cooperativa de Quesos 'Las Cabras'"),
            ])
            .with_products(vec![
                Product::new("Chai")
                    .with_id(1)
                    .category(1)
                    .supplier(1)
                    .quantity_per_unit("10 boxes x 20 bags")
                    .unit_price(Decimal::new(1800, 2)),
                Product::new("Chang")
                    .with_id(2)
                    .category(1)
                    .supplier(1)
                    .quantity_per_unit("24 - 12 oz bottles")
                    .unit_price(Decimal::new(1900, 2)),
                Product::new("Queso Cabrales")
                    .with_id(11)
                    .category(4)
                    .supplier(5)
                    .quantity_per_unit("1 kg pkg.")
                    .unit_price(Decimal::new(2100, 2)),
            ])
    }

    pub async fn product_count(&self) -> usize {
        self.products.read().await.len()
    }

    async fn check_references(&self, product: &Product) -> FaultResult<()> {
        if !self
            .categories
            .read()
            .await
            .iter()
            .any(|c| c.category_id == product.category_id)
        {
            return Err(Fault::invalid_argument(format!(
                "Category {} does not exist",
                product.category_id
            )));
        }

        if !self
            .suppliers
            .read()
            .await
            .iter()
            .any(|s| s.supplier_id == product.supplier_id)
        {
            return Err(Fault::invalid_argument(format!(
                "Supplier {} does not exist",
                product.supplier_id
            )));
        }

        Ok(())
    }

    fn check_duplicate(products: &BTreeMap<ProductId, Product>, product: &Product) -> FaultResult<()> {
        let name = product.product_name.trim();
        let duplicate = products.values().any(|existing| {
            existing.product_id != product.product_id
                && existing.supplier_id == product.supplier_id
                && existing.product_name.trim().eq_ignore_ascii_case(name)
        });

        if duplicate {
            return Err(Fault::invalid_argument(format!(
                "Product {} from supplier {} already exists",
                name, product.supplier_id
            )));
        }
        Ok(())
    }

    fn required_id(product: &Product, action: &str) -> FaultResult<ProductId> {
        product
            .product_id
            .ok_or_else(|| Fault::missing_argument(format!("Product id is required to {}", action)))
    }

    /// Shared write path for update, logical delete and activation.
    async fn save_existing(&self, product: &Product, action: &str) -> FaultResult<u64> {
        let id = Self::required_id(product, action)?;
        self.check_references(product).await?;

        let mut products = self.products.write().await;
        if !products.contains_key(&id) {
            debug!(product_id = id, action, "no stored product to change");
            return Ok(0);
        }
        Self::check_duplicate(&products, product)?;
        products.insert(id, product.clone());
        Ok(1)
    }
}

#[async_trait]
impl EntityStore<Product> for InMemoryCatalog {
    async fn get_by_id(&self, key: ProductId) -> FaultResult<Option<Product>> {
        Ok(self.products.read().await.get(&key).cloned())
    }

    async fn add(&self, entity: &mut Product) -> FaultResult<ProductId> {
        if entity.product_name.trim().is_empty() {
            return Err(Fault::missing_argument("Product name is required"));
        }
        if let Some(id) = entity.product_id {
            return Err(Fault::invalid_argument(format!(
                "Product already has id {}; use update instead",
                id
            )));
        }
        self.check_references(entity).await?;

        let mut products = self.products.write().await;
        Self::check_duplicate(&products, entity)?;

        let id = products
            .keys()
            .next_back()
            .copied()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or_else(|| Fault::system("Product id space exhausted"))?;
        entity.product_id = Some(id);
        products.insert(id, entity.clone());
        debug!(product_id = id, name = %entity.product_name, "product added");
        Ok(id)
    }

    async fn update(&self, entity: &mut Product) -> FaultResult<u64> {
        self.save_existing(entity, "update").await
    }

    async fn logical_delete(&self, entity: &mut Product) -> FaultResult<u64> {
        Self::required_id(entity, "discontinue")?;
        let mut candidate = entity.clone();
        candidate.discontinued = true;
        let rows = self.save_existing(&candidate, "discontinue").await?;
        if rows > 0 {
            entity.discontinued = true;
        }
        Ok(rows)
    }

    async fn activate(&self, entity: &mut Product) -> FaultResult<u64> {
        Self::required_id(entity, "activate")?;
        let mut candidate = entity.clone();
        candidate.discontinued = false;
        let rows = self.save_existing(&candidate, "activate").await?;
        if rows > 0 {
            entity.discontinued = false;
        }
        Ok(rows)
    }
}

#[async_trait]
impl CategoryServices for InMemoryCatalog {
    async fn list_categories(&self) -> FaultResult<Vec<Category>> {
        let mut categories = self.categories.read().await.clone();
        categories.sort_by(|a, b| a.category_name.cmp(&b.category_name));
        Ok(categories)
    }
}

#[async_trait]
impl SupplierServices for InMemoryCatalog {
    async fn list_suppliers(&self) -> FaultResult<Vec<Supplier>> {
        let mut suppliers = self.suppliers.read().await.clone();
        suppliers.sort_by(|a, b| a.company_name.cmp(&b.company_name));
        Ok(suppliers)
    }
}
