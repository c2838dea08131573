//! Typed builders for Druid filter and extraction function JSON.
//!
//! Leaf constructors produce [`Filter`] values, [`Filter::and`] and
//! [`Filter::or`] combine them into boolean trees, and [`ToJson`] renders
//! the result in the shape the Druid query endpoint accepts.
//!
//! ```ignore
//! use druid_filter::{Filter, ToJson};
//!
//! let filter = Filter::and([
//!     Some(Filter::selector("country", "NZ")),
//!     None,
//!     Filter::or([
//!         Some(Filter::selector("device", "ios")),
//!         Some(Filter::selector("device", "android")),
//!     ]),
//! ]);
//! let json = filter.map(|f| f.to_json()).transpose()?;
//! ```

pub mod config;
pub mod dimension;
pub mod error;
pub mod extraction;
pub mod filter;
pub mod render;

pub use config::Config;
pub use dimension::DimSpec;
pub use error::{Error, Result};
pub use extraction::{ExtractionFn, InlineLookup, LookupMap, RegisteredLookup, TimeFormat};
pub use filter::{
    Bound, ColumnComparison, Connector, Filter, In, JavaScript, Like, Ordering, Regex, Search,
    SearchQuery, Selector, Spatial, SpatialBound, SpatialCoordinates,
};
pub use render::{render_optional, ToJson};
