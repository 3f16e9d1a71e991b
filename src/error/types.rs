//! Error types
//!
//! Defines domain-specific error types for each module of the POS core.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::costing::{Money, Quantity, UnitCost};

/// Costing engine errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CostingError {
    #[error("quantity must be greater than zero, got {0}")]
    NonPositiveQuantity(Quantity),
    #[error("unit cost must not be negative, got {0}")]
    NegativeUnitCost(UnitCost),
    #[error("price must be greater than zero, got {0}")]
    NonPositivePrice(Money),
    #[error("malformed amount: {0}")]
    MalformedAmount(String),
    #[error("amount {0} is finer than the supported precision")]
    ExcessPrecision(String),
    #[error("amount out of range")]
    Overflow,
}

/// Catalog module errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
    #[error("recipe line {index} is invalid: {source}")]
    InvalidLine {
        index: usize,
        #[source]
        source: CostingError,
    },
    #[error("product {id} is invalid: {source}")]
    InvalidProduct {
        id: String,
        #[source]
        source: Box<CatalogError>,
    },
    #[error("duplicate product id: {0}")]
    DuplicateId(String),
    #[error("no product with id {0}")]
    UnknownProduct(String),
    #[error(transparent)]
    Costing(#[from] CostingError),
}

/// Authentication module errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("username and password are required")]
    MissingCredentials,
    #[error("malformed input: {0}")]
    MalformedInput(String),
    #[error("no active account matches the supplied credentials")]
    NotFound,
    #[error("duplicate username in roster: {0}")]
    DuplicateUsername(String),
    #[error("user roster unavailable: {0}")]
    RosterUnavailable(String),
}

/// Data-access collaborator errors
#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("data source unavailable: {0}")]
    Unavailable(String),
}

/// Coarse error classification shared by every module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    NotFound,
    RosterUnavailable,
    CatalogUnavailable,
    Configuration,
}

/// General POS error that encompasses all error types
#[derive(Debug, Error)]
pub enum PosError {
    #[error("costing error: {0}")]
    Costing(#[from] CostingError),
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),
    #[error("product catalog unavailable: {0}")]
    CatalogUnavailable(#[source] DataSourceError),
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl AuthError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingCredentials
            | AuthError::MalformedInput(_)
            | AuthError::DuplicateUsername(_) => ErrorKind::InvalidInput,
            AuthError::NotFound => ErrorKind::NotFound,
            AuthError::RosterUnavailable(_) => ErrorKind::RosterUnavailable,
        }
    }
}

impl PosError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PosError::Costing(_) | PosError::Catalog(_) => ErrorKind::InvalidInput,
            PosError::Auth(e) => e.kind(),
            PosError::CatalogUnavailable(_) => ErrorKind::CatalogUnavailable,
            PosError::Config(_) => ErrorKind::Configuration,
        }
    }
}
