//! # collectx Core
//!
//! Core types describing a vector collection before it is created on a
//! remote vector search service.
//!
//! - [`MetricType`] - Closed set of distance/similarity metric tags
//! - [`CollectionSchema`] - Immutable collection description
//! - [`CollectionSchemaBuilder`] - Required fields up front, optional fields defaulted
//!
//! ## Example
//!
//! ```rust
//! use collectx_core::{CollectionSchema, MetricType};
//!
//! let schema = CollectionSchema::builder("my_collection", 128)
//!     .with_segment_file_size(2048)
//!     .with_metric_type(MetricType::InnerProduct)
//!     .build();
//!
//! assert_eq!(schema.name(), "my_collection");
//! assert_eq!(schema.metric_type().as_str(), "IP");
//! ```

pub mod error;
pub mod metric;
pub mod schema;

pub use error::{Error, Result};
pub use metric::MetricType;
pub use schema::{
    CollectionSchema,
    CollectionSchemaBuilder,
    DEFAULT_METRIC_TYPE,
    DEFAULT_SEGMENT_FILE_SIZE,
};
