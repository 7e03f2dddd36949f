//! # collectx
//!
//! Typed collection schemas for remote vector search services.
//!
//! A [`CollectionSchema`] captures what a service needs to allocate and index
//! a collection: a name, a vector dimension, a segment file size (MB) and a
//! [`MetricType`]. Schemas are built once and never change afterwards.
//!
//! ## Quick Start
//!
//! ```rust
//! use collectx::prelude::*;
//!
//! // Name and dimension are required; the rest is defaulted
//! let schema = CollectionSchema::builder("my_collection", 128)
//!     .with_metric_type(MetricType::InnerProduct)
//!     .build();
//!
//! assert_eq!(schema.segment_file_size(), 1024);
//!
//! // Hand it to a service
//! let service = InMemoryService::new();
//! service.create_collection(&schema).unwrap();
//! assert!(service.has_collection("my_collection"));
//! ```
//!
//! ## Crate Structure
//!
//! - [`collectx-core`](https://docs.rs/collectx-core) - Schema, builder, metric types, errors
//! - [`collectx-client`](https://docs.rs/collectx-client) - Service trait, wire payload, in-memory service

// Re-export core types
pub use collectx_core::{
    CollectionSchema, CollectionSchemaBuilder, MetricType,
    DEFAULT_METRIC_TYPE, DEFAULT_SEGMENT_FILE_SIZE,
    Error, Result,
};

// Re-export client
pub use collectx_client::{CollectionService, CreateCollectionRequest, InMemoryService};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CollectionSchema, CollectionSchemaBuilder, MetricType,
        Error, Result,
        CollectionService, CreateCollectionRequest, InMemoryService,
    };
}
