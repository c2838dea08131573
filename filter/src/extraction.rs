//! Extraction functions applied to a dimension value before filtering.

use std::collections::BTreeMap;
use std::ops::Not;

use serde::Serialize;
use serde_json::Value;

/// An extraction function, tagged by `type` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ExtractionFn {
    /// Lookup against a map carried inline in the query.
    Lookup(InlineLookup),
    /// Lookup against a table registered with the cluster by name.
    RegisteredLookup(RegisteredLookup),
    /// Reformat a timestamp dimension.
    TimeFormat(TimeFormat),
}

/// Inline lookup table, tagged `map`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "type", rename = "map")]
pub struct LookupMap {
    pub map: BTreeMap<String, Value>,
}

/// Lookup extraction that owns its table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineLookup {
    pub lookup: LookupMap,
    #[serde(skip_serializing_if = "Not::not")]
    pub retain_missing_value: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replace_missing_value_with: Option<String>,
    #[serde(skip_serializing_if = "Not::not")]
    pub injective: bool,
}

/// Lookup extraction that names a table registered in the cluster.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredLookup {
    /// Name of the registered lookup.
    pub lookup: String,
    #[serde(skip_serializing_if = "Not::not")]
    pub retain_missing_value: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replace_missing_value_with: Option<String>,
    #[serde(skip_serializing_if = "Not::not")]
    pub optimize: bool,
}

/// Time format extraction. Unset fields use the cluster defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeFormat {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl LookupMap {
    /// Build a lookup table from key/value pairs.
    pub fn new<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Self {
            map: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl TimeFormat {
    /// Create a time format extraction with a Joda-style pattern.
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: Some(format.into()),
            ..Default::default()
        }
    }

    pub fn with_time_zone(mut self, time_zone: impl Into<String>) -> Self {
        self.time_zone = Some(time_zone.into());
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }
}

impl ExtractionFn {
    /// Lookup extraction with an inline map.
    pub fn inline_lookup<K, V>(
        lookups: impl IntoIterator<Item = (K, V)>,
        retain_missing_value: bool,
        replace_missing_value_with: Option<&str>,
        injective: bool,
    ) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        ExtractionFn::Lookup(InlineLookup {
            lookup: LookupMap::new(lookups),
            retain_missing_value,
            replace_missing_value_with: replace_missing_value_with.map(str::to_string),
            injective,
        })
    }

    /// Lookup extraction referencing a registered lookup by name.
    pub fn registered_lookup(
        lookup: impl Into<String>,
        retain_missing_value: bool,
        replace_missing_value_with: Option<&str>,
        optimize: bool,
    ) -> Self {
        ExtractionFn::RegisteredLookup(RegisteredLookup {
            lookup: lookup.into(),
            retain_missing_value,
            replace_missing_value_with: replace_missing_value_with.map(str::to_string),
            optimize,
        })
    }

    /// Time format extraction.
    pub fn time_format(
        format: impl Into<String>,
        time_zone: Option<&str>,
        locale: Option<&str>,
    ) -> Self {
        ExtractionFn::TimeFormat(TimeFormat {
            format: Some(format.into()),
            time_zone: time_zone.map(str::to_string),
            locale: locale.map(str::to_string),
        })
    }

    /// The `type` tag this function serializes with.
    pub fn type_name(&self) -> &'static str {
        match self {
            ExtractionFn::Lookup(_) => "lookup",
            ExtractionFn::RegisteredLookup(_) => "registeredLookup",
            ExtractionFn::TimeFormat(_) => "timeFormat",
        }
    }
}

impl From<InlineLookup> for ExtractionFn {
    fn from(lookup: InlineLookup) -> Self {
        ExtractionFn::Lookup(lookup)
    }
}

impl From<RegisteredLookup> for ExtractionFn {
    fn from(lookup: RegisteredLookup) -> Self {
        ExtractionFn::RegisteredLookup(lookup)
    }
}

impl From<TimeFormat> for ExtractionFn {
    fn from(format: TimeFormat) -> Self {
        ExtractionFn::TimeFormat(format)
    }
}
