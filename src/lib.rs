pub mod catalog;
pub mod config;
pub mod contact;
pub mod domain;
pub mod error;
pub mod ingest;
pub mod logging;
pub mod seo;
pub mod server;
pub mod sitemap;
