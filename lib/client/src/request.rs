//! Wire payload for collection creation

use collectx_core::{CollectionSchema, Error, MetricType, Result};
use serde::{Deserialize, Serialize};

/// Body of a create-collection call
///
/// The service names the segment threshold `index_file_size` and expects the
/// metric as its numeric code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCollectionRequest {
    pub collection_name: String,
    pub dimension: usize,
    pub index_file_size: u64,
    pub metric_type: i32,
}

impl CreateCollectionRequest {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<&CollectionSchema> for CreateCollectionRequest {
    fn from(schema: &CollectionSchema) -> Self {
        Self {
            collection_name: schema.name().to_string(),
            dimension: schema.dimension(),
            index_file_size: schema.segment_file_size(),
            metric_type: schema.metric_type().code(),
        }
    }
}

impl TryFrom<CreateCollectionRequest> for CollectionSchema {
    type Error = Error;

    fn try_from(request: CreateCollectionRequest) -> Result<Self> {
        let metric_type = MetricType::from_code(request.metric_type)
            .ok_or_else(|| Error::UnknownMetric(request.metric_type.to_string()))?;

        Ok(CollectionSchema::builder(request.collection_name, request.dimension)
            .with_segment_file_size(request.index_file_size)
            .with_metric_type(metric_type)
            .build())
    }
}
