//! Filter expression trees.
//!
//! # Shapes
//!
//! - **Leaves**: selector, bound, regex, javascript, search, like, in,
//!   spatial, columnComparison
//! - **Connectors**: `and` / `or` over two or more children, `not` over one
//!
//! Leaves are built with the `Filter::*` constructors and combined with
//! [`Filter::and`], [`Filter::or`] and [`Filter::not`].

mod combinator;
mod node;
mod search;
mod spatial;

pub use combinator::Connector;
pub use node::{
    Bound, ColumnComparison, Filter, In, JavaScript, Like, Ordering, Regex, Search, Selector,
    Spatial,
};
pub use search::SearchQuery;
pub use spatial::{SpatialBound, SpatialCoordinates};

#[cfg(test)]
mod tests;
