//! Filter node model and leaf constructors.

use std::ops::Not;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;

use super::search::SearchQuery;
use super::spatial::{SpatialBound, SpatialCoordinates};
use crate::dimension::DimSpec;
use crate::extraction::ExtractionFn;
use crate::{Error, Result};

/// A filter expression, tagged by `type` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Filter {
    Selector(Selector),
    Bound(Bound),
    Regex(Regex),
    #[serde(rename = "javascript")]
    JavaScript(JavaScript),
    Search(Search),
    Like(Like),
    In(In),
    Spatial(Spatial),
    ColumnComparison(ColumnComparison),
    /// Always two or more children when built by [`Filter::and`].
    And { fields: Vec<Filter> },
    /// Always two or more children when built by [`Filter::or`].
    Or { fields: Vec<Filter> },
    Not {
        #[serde(skip_serializing_if = "Option::is_none")]
        field: Option<Box<Filter>>,
    },
}

/// Sort order used by bound filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Ordering {
    Lexicographic,
    Alphanumeric,
    Numeric,
    Strlen,
}

/// Equality match: `dimension == value`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Selector {
    pub dimension: String,
    #[serde(skip_serializing_if = "Value::is_null")]
    pub value: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extraction_fn: Option<ExtractionFn>,
}

/// Range match. Only the supplied sides are populated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bound {
    pub dimension: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper: Option<String>,
    #[serde(skip_serializing_if = "Not::not")]
    pub lower_strict: bool,
    #[serde(skip_serializing_if = "Not::not")]
    pub upper_strict: bool,
    pub ordering: Ordering,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extraction_fn: Option<ExtractionFn>,
}

/// Java regular expression match.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Regex {
    pub dimension: String,
    pub pattern: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extraction_fn: Option<ExtractionFn>,
}

/// SQL `LIKE` match (`%` and `_` wildcards).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    pub dimension: String,
    pub pattern: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extraction_fn: Option<ExtractionFn>,
}

/// Predicate written as a JavaScript function source.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JavaScript {
    pub dimension: String,
    pub function: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extraction_fn: Option<ExtractionFn>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Search {
    pub dimension: String,
    pub query: SearchQuery,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extraction_fn: Option<ExtractionFn>,
}

/// Set membership. An empty set matches nothing and is still emitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct In {
    pub dimension: String,
    pub values: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extraction_fn: Option<ExtractionFn>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Spatial {
    pub dimension: String,
    pub bound: SpatialBound,
}

/// Compares the values of several dimensions within one row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnComparison {
    pub dimensions: Vec<DimSpec>,
}

macro_rules! leaf_with_extraction_fn {
    ($($leaf:ident),* $(,)?) => {
        $(
            impl $leaf {
                /// Apply an extraction function to the dimension before matching.
                pub fn with_extraction_fn(
                    mut self,
                    extraction_fn: impl Into<ExtractionFn>,
                ) -> Self {
                    self.extraction_fn = Some(extraction_fn.into());
                    self
                }
            }
        )*
    };
}

leaf_with_extraction_fn!(Selector, Bound, Regex, Like, JavaScript, Search, In);

macro_rules! leaf_into_filter {
    ($($leaf:ident),* $(,)?) => {
        $(
            impl From<$leaf> for Filter {
                fn from(leaf: $leaf) -> Self {
                    Filter::$leaf(leaf)
                }
            }
        )*
    };
}

leaf_into_filter!(
    Selector,
    Bound,
    Regex,
    Like,
    JavaScript,
    Search,
    In,
    Spatial,
    ColumnComparison,
);

impl Selector {
    pub fn new(dimension: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            dimension: dimension.into(),
            value: value.into(),
            extraction_fn: None,
        }
    }
}

impl Bound {
    /// Bound with neither side set; use [`Bound::lower`] / [`Bound::upper`] to fill it.
    pub fn new(dimension: impl Into<String>, ordering: Ordering) -> Self {
        Self {
            dimension: dimension.into(),
            lower: None,
            upper: None,
            lower_strict: false,
            upper_strict: false,
            ordering,
            extraction_fn: None,
        }
    }

    pub fn lower(mut self, bound: impl Into<String>, strict: bool) -> Self {
        self.lower = Some(bound.into());
        self.lower_strict = strict;
        self
    }

    pub fn upper(mut self, bound: impl Into<String>, strict: bool) -> Self {
        self.upper = Some(bound.into());
        self.upper_strict = strict;
        self
    }
}

impl Regex {
    pub fn new(dimension: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            dimension: dimension.into(),
            pattern: pattern.into(),
            extraction_fn: None,
        }
    }
}

impl Like {
    pub fn new(dimension: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            dimension: dimension.into(),
            pattern: pattern.into(),
            extraction_fn: None,
        }
    }
}

impl JavaScript {
    pub fn new(dimension: impl Into<String>, function: impl Into<String>) -> Self {
        Self {
            dimension: dimension.into(),
            function: function.into(),
            extraction_fn: None,
        }
    }
}

impl Search {
    pub fn new<S: Into<String>>(
        dimension: impl Into<String>,
        case_sensitive: bool,
        values: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            dimension: dimension.into(),
            query: SearchQuery::new(case_sensitive, values),
            extraction_fn: None,
        }
    }
}

impl In {
    pub fn new<V: Into<Value>>(
        dimension: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        Self {
            dimension: dimension.into(),
            values: values.into_iter().map(Into::into).collect(),
            extraction_fn: None,
        }
    }
}

impl Filter {
    /// `dimension == value`.
    pub fn selector(dimension: impl Into<String>, value: impl Into<Value>) -> Self {
        Selector::new(dimension, value).into()
    }

    pub fn regex(dimension: impl Into<String>, pattern: impl Into<String>) -> Self {
        Regex::new(dimension, pattern).into()
    }

    pub fn like(dimension: impl Into<String>, pattern: impl Into<String>) -> Self {
        Like::new(dimension, pattern).into()
    }

    pub fn javascript(dimension: impl Into<String>, function: impl Into<String>) -> Self {
        JavaScript::new(dimension, function).into()
    }

    /// Search filter. One value builds a `contains` query, several a `fragment` query.
    pub fn search<S: Into<String>>(
        dimension: impl Into<String>,
        case_sensitive: bool,
        values: impl IntoIterator<Item = S>,
    ) -> Self {
        Search::new(dimension, case_sensitive, values).into()
    }

    pub fn in_values<V: Into<Value>>(
        dimension: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        In::new(dimension, values).into()
    }

    pub fn lower_bound(
        dimension: impl Into<String>,
        ordering: Ordering,
        bound: impl Into<String>,
        strict: bool,
    ) -> Self {
        Bound::new(dimension, ordering).lower(bound, strict).into()
    }

    pub fn upper_bound(
        dimension: impl Into<String>,
        ordering: Ordering,
        bound: impl Into<String>,
        strict: bool,
    ) -> Self {
        Bound::new(dimension, ordering).upper(bound, strict).into()
    }

    pub fn lower_upper_bound(
        dimension: impl Into<String>,
        ordering: Ordering,
        lower: impl Into<String>,
        lower_strict: bool,
        upper: impl Into<String>,
        upper_strict: bool,
    ) -> Self {
        Bound::new(dimension, ordering)
            .lower(lower, lower_strict)
            .upper(upper, upper_strict)
            .into()
    }

    pub fn column_comparison<D: Into<DimSpec>>(dimensions: impl IntoIterator<Item = D>) -> Self {
        ColumnComparison {
            dimensions: dimensions.into_iter().map(Into::into).collect(),
        }
        .into()
    }

    /// Points inside the rectangle spanned by `min` and `max`.
    pub fn spatial_rectangle(
        dimension: impl Into<String>,
        min: SpatialCoordinates,
        max: SpatialCoordinates,
    ) -> Self {
        Spatial {
            dimension: dimension.into(),
            bound: SpatialBound::rectangle(min, max),
        }
        .into()
    }

    /// Points within `radius` of `center`.
    pub fn spatial_radius(
        dimension: impl Into<String>,
        center: SpatialCoordinates,
        radius: f64,
    ) -> Self {
        Spatial {
            dimension: dimension.into(),
            bound: SpatialBound::radius(center, radius),
        }
        .into()
    }

    /// The `type` tag this node serializes with.
    pub fn type_name(&self) -> &'static str {
        match self {
            Filter::Selector(_) => "selector",
            Filter::Bound(_) => "bound",
            Filter::Regex(_) => "regex",
            Filter::JavaScript(_) => "javascript",
            Filter::Search(_) => "search",
            Filter::Like(_) => "like",
            Filter::In(_) => "in",
            Filter::Spatial(_) => "spatial",
            Filter::ColumnComparison(_) => "columnComparison",
            Filter::And { .. } => "and",
            Filter::Or { .. } => "or",
            Filter::Not { .. } => "not",
        }
    }

    /// True for nodes with no child filters.
    pub fn is_leaf(&self) -> bool {
        !matches!(self, Filter::And { .. } | Filter::Or { .. } | Filter::Not { .. })
    }
}

impl Ordering {
    pub fn as_str(&self) -> &'static str {
        match self {
            Ordering::Lexicographic => "lexicographic",
            Ordering::Alphanumeric => "alphanumeric",
            Ordering::Numeric => "numeric",
            Ordering::Strlen => "strlen",
        }
    }
}

impl std::fmt::Display for Ordering {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Ordering {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "lexicographic" => Ok(Ordering::Lexicographic),
            "alphanumeric" => Ok(Ordering::Alphanumeric),
            "numeric" => Ok(Ordering::Numeric),
            "strlen" => Ok(Ordering::Strlen),
            other => Err(Error::InvalidOrdering(other.to_string())),
        }
    }
}
