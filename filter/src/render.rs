//! Rendering filter trees as JSON.

use serde::Serialize;
use serde_json::Value;

use crate::dimension::DimSpec;
use crate::extraction::ExtractionFn;
use crate::filter::Filter;
use crate::{Config, Result};

/// JSON rendering for filter, extraction and dimension nodes.
pub trait ToJson: Serialize {
    fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Compact single-line JSON.
    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    fn to_json_with(&self, config: &Config) -> Result<String> {
        if config.pretty {
            Ok(serde_json::to_string_pretty(self)?)
        } else {
            self.to_json()
        }
    }
}

impl ToJson for Filter {}
impl ToJson for ExtractionFn {}
impl ToJson for DimSpec {}

/// Render the result of [`Filter::and`] / [`Filter::or`].
///
/// "No filter" renders as `None` rather than the text `null`.
pub fn render_optional(filter: Option<&Filter>, config: &Config) -> Result<Option<String>> {
    filter.map(|f| f.to_json_with(config)).transpose()
}
