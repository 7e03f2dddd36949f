//! Collection schema definitions
//!
//! A [`CollectionSchema`] describes a collection before it is created on a
//! vector search service: its name, vector dimension, segment file size and
//! metric type. Schemas are immutable and are produced by a
//! [`CollectionSchemaBuilder`], which takes the required fields up front and
//! defaults the optional ones.

use crate::{Error, MetricType, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Segment file size used when none is given, in megabytes
pub const DEFAULT_SEGMENT_FILE_SIZE: u64 = 1024;

/// Metric type used when none is given
pub const DEFAULT_METRIC_TYPE: MetricType = MetricType::L2;

fn default_segment_file_size() -> u64 {
    DEFAULT_SEGMENT_FILE_SIZE
}

/// Immutable description of a vector collection
///
/// Renders as
/// `CollectionSchema = {name = .., dimension = .., segment_file_size = .., metric_type = ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CollectionSchema {
    name: String,
    dimension: usize,
    #[serde(default = "default_segment_file_size")]
    segment_file_size: u64,
    #[serde(default)]
    metric_type: MetricType,
}

impl CollectionSchema {
    /// Start a builder with the two required fields
    pub fn builder(name: impl Into<String>, dimension: usize) -> CollectionSchemaBuilder {
        CollectionSchemaBuilder::new(name, dimension)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Size in megabytes at which the service rolls over to a new segment
    pub fn segment_file_size(&self) -> u64 {
        self.segment_file_size
    }

    pub fn metric_type(&self) -> MetricType {
        self.metric_type
    }

    /// Check the fields for values no service would accept
    ///
    /// Not applied by [`CollectionSchemaBuilder::build`].
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::EmptyName);
        }
        if self.dimension == 0 {
            return Err(Error::InvalidDimension(self.dimension));
        }
        if self.segment_file_size == 0 {
            return Err(Error::InvalidSegmentFileSize(self.segment_file_size));
        }
        Ok(())
    }
}

impl fmt::Display for CollectionSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CollectionSchema = {{name = {}, dimension = {}, segment_file_size = {}, metric_type = {}}}",
            self.name, self.dimension, self.segment_file_size, self.metric_type
        )
    }
}

/// Builder for [`CollectionSchema`]
///
/// Configuration calls overwrite earlier values and return the builder for
/// chaining. `build` leaves the builder usable, so one builder can produce
/// any number of schemas.
#[derive(Debug, Clone)]
pub struct CollectionSchemaBuilder {
    name: String,
    dimension: usize,
    segment_file_size: u64,
    metric_type: MetricType,
}

impl CollectionSchemaBuilder {
    pub fn new(name: impl Into<String>, dimension: usize) -> Self {
        Self {
            name: name.into(),
            dimension,
            segment_file_size: DEFAULT_SEGMENT_FILE_SIZE,
            metric_type: DEFAULT_METRIC_TYPE,
        }
    }

    /// Optional. Defaults to 1024 MB.
    pub fn with_segment_file_size(&mut self, segment_file_size: u64) -> &mut Self {
        self.segment_file_size = segment_file_size;
        self
    }

    /// Optional. Defaults to [`MetricType::L2`].
    pub fn with_metric_type(&mut self, metric_type: MetricType) -> &mut Self {
        self.metric_type = metric_type;
        self
    }

    pub fn build(&self) -> CollectionSchema {
        CollectionSchema {
            name: self.name.clone(),
            dimension: self.dimension,
            segment_file_size: self.segment_file_size,
            metric_type: self.metric_type,
        }
    }

    /// Build and reject an empty name, a zero dimension or a zero segment size
    pub fn try_build(&self) -> Result<CollectionSchema> {
        let schema = self.build();
        schema.validate()?;
        Ok(schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields_kept() {
        let schema = CollectionSchemaBuilder::new("vectors", 768).build();
        assert_eq!(schema.name(), "vectors");
        assert_eq!(schema.dimension(), 768);
    }

    #[test]
    fn test_defaults() {
        let schema = CollectionSchemaBuilder::new("c", 128).build();
        assert_eq!(schema.segment_file_size(), 1024);
        assert_eq!(schema.metric_type(), MetricType::L2);
    }

    #[test]
    fn test_last_write_wins() {
        let schema = CollectionSchemaBuilder::new("c", 128)
            .with_segment_file_size(256)
            .with_segment_file_size(512)
            .with_metric_type(MetricType::Hamming)
            .with_metric_type(MetricType::InnerProduct)
            .build();
        assert_eq!(schema.segment_file_size(), 512);
        assert_eq!(schema.metric_type(), MetricType::InnerProduct);
    }

    #[test]
    fn test_builder_reuse() {
        let mut builder = CollectionSchema::builder("c", 16);
        builder.with_segment_file_size(2048);

        let first = builder.build();
        let second = builder.build();
        assert_eq!(first, second);

        builder.with_metric_type(MetricType::Jaccard);
        let third = builder.build();
        assert_eq!(first.metric_type(), MetricType::L2);
        assert_eq!(third.metric_type(), MetricType::Jaccard);
        assert_eq!(third.segment_file_size(), 2048);
    }

    #[test]
    fn test_build_accepts_anything() {
        let schema = CollectionSchemaBuilder::new("", 0)
            .with_segment_file_size(0)
            .build();
        assert_eq!(schema.name(), "");
        assert_eq!(schema.dimension(), 0);
        assert_eq!(schema.segment_file_size(), 0);
    }

    #[test]
    fn test_try_build_rejects_invalid() {
        assert_eq!(
            CollectionSchemaBuilder::new("  ", 8).try_build(),
            Err(Error::EmptyName)
        );
        assert_eq!(
            CollectionSchemaBuilder::new("c", 0).try_build(),
            Err(Error::InvalidDimension(0))
        );
        assert_eq!(
            CollectionSchemaBuilder::new("c", 8)
                .with_segment_file_size(0)
                .try_build(),
            Err(Error::InvalidSegmentFileSize(0))
        );
        assert!(CollectionSchemaBuilder::new("c", 8).try_build().is_ok());
    }

    #[test]
    fn test_display() {
        let schema = CollectionSchemaBuilder::new("vecs", 64)
            .with_metric_type(MetricType::InnerProduct)
            .build();
        assert_eq!(
            schema.to_string(),
            "CollectionSchema = {name = vecs, dimension = 64, segment_file_size = 1024, metric_type = IP}"
        );
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let schema: CollectionSchema =
            serde_json::from_str(r#"{"name": "docs", "dimension": 3}"#).unwrap();
        assert_eq!(schema, CollectionSchemaBuilder::new("docs", 3).build());

        let missing_dim = serde_json::from_str::<CollectionSchema>(r#"{"name": "docs"}"#);
        assert!(missing_dim.is_err());
    }

    #[test]
    fn test_serialize_field_names() {
        let schema = CollectionSchemaBuilder::new("docs", 3)
            .with_metric_type(MetricType::Tanimoto)
            .build();
        let value = serde_json::to_value(&schema).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "docs",
                "dimension": 3,
                "segment_file_size": 1024,
                "metric_type": "TANIMOTO"
            })
        );
    }
}
