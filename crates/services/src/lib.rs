#![forbid(unsafe_code)]

pub mod app_services;
pub mod catalog_service;
pub mod error;
pub mod seed_service;

pub use app_services::AppServices;
pub use catalog_service::CatalogService;
pub use error::{CatalogError, SeedError};
pub use seed_service::{SeedReport, SeedService};
