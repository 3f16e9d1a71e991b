//! JSON file data source
//!
//! Reads `users.json` and `products.json` from a data directory. Field names
//! are camelCase, matching the payloads of the back-office API.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::debug;
use serde::de::DeserializeOwned;

use crate::auth::Account;
use crate::catalog::Product;
use crate::datasource::DataSource;
use crate::error::DataSourceError;

pub const USERS_FILE: &str = "users.json";
pub const PRODUCTS_FILE: &str = "products.json";

#[derive(Debug, Clone)]
pub struct JsonFileDataSource {
    dir: PathBuf,
}

impl JsonFileDataSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    async fn read_json<T: DeserializeOwned>(&self, file_name: &str) -> Result<T, DataSourceError> {
        let path = self.dir.join(file_name);
        debug!("Reading {}", path.display());

        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|source| DataSourceError::Io {
                path: path.clone(),
                source,
            })?;
        serde_json::from_slice(&bytes).map_err(|source| DataSourceError::Parse { path, source })
    }
}

#[async_trait]
impl DataSource for JsonFileDataSource {
    async fn fetch_users(&self) -> Result<Vec<Account>, DataSourceError> {
        self.read_json(USERS_FILE).await
    }

    async fn fetch_products(&self) -> Result<Vec<Product>, DataSourceError> {
        self.read_json(PRODUCTS_FILE).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::costing::UnitCost;

    #[tokio::test]
    async fn test_reads_camel_case_payloads() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(USERS_FILE),
            r#"[{"username":"owner","password":"123456","fullName":"Store Owner","role":"owner","isActive":true}]"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join(PRODUCTS_FILE),
            r#"[{"id":"1","name":"Tea","sku":"TEA","price":10,
                "recipe":[{"materialName":"tea","quantity":0.01,"unit":"kg","unitCost":250,"totalCost":2.5}],
                "cost":2.5,"profit":7.5}]"#,
        )
        .unwrap();

        let source = JsonFileDataSource::new(dir.path());
        let users = source.fetch_users().await.unwrap();
        let products = source.fetch_products().await.unwrap();

        assert_eq!(users[0].full_name, "Store Owner");
        assert_eq!(products[0].recipe[0].unit_cost, UnitCost::from_cents(25000).unwrap());
        assert_eq!(products[0].barcode, None);
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileDataSource::new(dir.path());
        assert!(matches!(
            source.fetch_users().await,
            Err(DataSourceError::Io { .. })
        ));
    }

    #[tokio::test]
    async fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(PRODUCTS_FILE), "{not json").unwrap();
        let source = JsonFileDataSource::new(dir.path());
        assert!(matches!(
            source.fetch_products().await,
            Err(DataSourceError::Parse { .. })
        ));
    }

    #[tokio::test]
    async fn test_quantity_finer_than_resolution_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(PRODUCTS_FILE),
            r#"[{"id":"1","name":"Tea","sku":"TEA","price":10,
                "recipe":[{"materialName":"saffron","quantity":0.0000001,"unit":"g","unitCost":900}]}]"#,
        )
        .unwrap();

        let source = JsonFileDataSource::new(dir.path());
        assert_eq!(source.dir(), dir.path());
        match source.fetch_products().await {
            Err(DataSourceError::Parse { path, source }) => {
                assert_eq!(path, dir.path().join(PRODUCTS_FILE));
                assert!(source.to_string().contains("finer than the supported precision"));
            }
            other => panic!("expected a parse error, got {other:?}"),
        }
    }
}
