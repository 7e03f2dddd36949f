//! Similarity metric identifiers
//!
//! A metric type is a tag attached to a collection schema. It carries no
//! distance logic; the remote service computes distances.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Distance/similarity metric used by a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MetricType {
    /// Euclidean distance
    #[default]
    L2,
    /// Inner product
    #[serde(rename = "IP")]
    InnerProduct,
    /// Hamming distance (binary vectors)
    Hamming,
    /// Jaccard distance (binary vectors)
    Jaccard,
    /// Tanimoto distance (binary vectors)
    Tanimoto,
    /// Substructure similarity (binary vectors)
    Substructure,
    /// Superstructure similarity (binary vectors)
    Superstructure,
}

impl MetricType {
    /// Every metric type, in declaration order
    pub const ALL: [MetricType; 7] = [
        MetricType::L2,
        MetricType::InnerProduct,
        MetricType::Hamming,
        MetricType::Jaccard,
        MetricType::Tanimoto,
        MetricType::Substructure,
        MetricType::Superstructure,
    ];

    /// Stable display name
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricType::L2 => "L2",
            MetricType::InnerProduct => "IP",
            MetricType::Hamming => "HAMMING",
            MetricType::Jaccard => "JACCARD",
            MetricType::Tanimoto => "TANIMOTO",
            MetricType::Substructure => "SUBSTRUCTURE",
            MetricType::Superstructure => "SUPERSTRUCTURE",
        }
    }

    /// Numeric code the service expects on the wire
    pub fn code(&self) -> i32 {
        match self {
            MetricType::L2 => 1,
            MetricType::InnerProduct => 2,
            MetricType::Hamming => 3,
            MetricType::Jaccard => 4,
            MetricType::Tanimoto => 5,
            MetricType::Substructure => 6,
            MetricType::Superstructure => 7,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.code() == code)
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L2" | "EUCLIDEAN" => Ok(MetricType::L2),
            "IP" | "INNER_PRODUCT" => Ok(MetricType::InnerProduct),
            "HAMMING" => Ok(MetricType::Hamming),
            "JACCARD" => Ok(MetricType::Jaccard),
            "TANIMOTO" => Ok(MetricType::Tanimoto),
            "SUBSTRUCTURE" => Ok(MetricType::Substructure),
            "SUPERSTRUCTURE" => Ok(MetricType::Superstructure),
            _ => Err(Error::UnknownMetric(s.to_string())),
        }
    }
}
