//! # collectx Client
//!
//! The boundary between collection schemas and the service that creates
//! collections from them.
//!
//! - [`CollectionService`] - Create, describe, drop and list collections
//! - [`CreateCollectionRequest`] - Wire payload built from a schema
//! - [`InMemoryService`] - In-process service for tests and dry runs

pub mod memory;
pub mod request;
pub mod service;

pub use memory::InMemoryService;
pub use request::CreateCollectionRequest;
pub use service::CollectionService;
