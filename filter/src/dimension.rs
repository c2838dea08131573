//! Dimension references used by column comparison filters.

use serde::Serialize;

use crate::extraction::ExtractionFn;

/// A dimension reference: either a bare name or a full dimension spec.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DimSpec {
    /// Serializes as a plain JSON string.
    Name(String),
    Default(DefaultDimension),
    Extraction(ExtractionDimension),
}

/// `{"type": "default", ...}` dimension spec.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "default", rename_all = "camelCase")]
pub struct DefaultDimension {
    pub dimension: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_name: Option<String>,
}

/// `{"type": "extraction", ...}` dimension spec.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "extraction", rename_all = "camelCase")]
pub struct ExtractionDimension {
    pub dimension: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_name: Option<String>,
    pub extraction_fn: ExtractionFn,
}

impl DimSpec {
    /// Reference a dimension by name.
    pub fn name(dimension: impl Into<String>) -> Self {
        DimSpec::Name(dimension.into())
    }

    /// Default dimension spec with an optional output name.
    pub fn default_spec(dimension: impl Into<String>, output_name: Option<&str>) -> Self {
        DimSpec::Default(DefaultDimension {
            dimension: dimension.into(),
            output_name: output_name.map(str::to_string),
        })
    }

    /// Dimension spec that transforms the value through an extraction function.
    pub fn extraction(
        dimension: impl Into<String>,
        output_name: Option<&str>,
        extraction_fn: impl Into<ExtractionFn>,
    ) -> Self {
        DimSpec::Extraction(ExtractionDimension {
            dimension: dimension.into(),
            output_name: output_name.map(str::to_string),
            extraction_fn: extraction_fn.into(),
        })
    }

    /// Name of the underlying dimension.
    pub fn dimension(&self) -> &str {
        match self {
            DimSpec::Name(name) => name,
            DimSpec::Default(spec) => &spec.dimension,
            DimSpec::Extraction(spec) => &spec.dimension,
        }
    }
}

impl From<&str> for DimSpec {
    fn from(dimension: &str) -> Self {
        DimSpec::name(dimension)
    }
}

impl From<String> for DimSpec {
    fn from(dimension: String) -> Self {
        DimSpec::Name(dimension)
    }
}
