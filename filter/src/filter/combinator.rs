//! Boolean combinators over filters.
//!
//! `and` / `or` drop absent inputs, return `None` when nothing is left,
//! and return a lone survivor unwrapped. A connector node is only built
//! for two or more children, kept in their original order.

use super::node::Filter;

/// Connector tag for grouped filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connector {
    And,
    Or,
}

impl Connector {
    pub fn as_str(&self) -> &'static str {
        match self {
            Connector::And => "and",
            Connector::Or => "or",
        }
    }

    fn wrap(self, fields: Vec<Filter>) -> Filter {
        match self {
            Connector::And => Filter::And { fields },
            Connector::Or => Filter::Or { fields },
        }
    }
}

impl std::fmt::Display for Connector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Filter {
    /// All of `filters` must match. Accepts `Filter` or `Option<Filter>` items.
    pub fn and<I>(filters: I) -> Option<Filter>
    where
        I: IntoIterator,
        I::Item: Into<Option<Filter>>,
    {
        Self::join(filters, Connector::And)
    }

    /// Any of `filters` must match. Accepts `Filter` or `Option<Filter>` items.
    pub fn or<I>(filters: I) -> Option<Filter>
    where
        I: IntoIterator,
        I::Item: Into<Option<Filter>>,
    {
        Self::join(filters, Connector::Or)
    }

    /// Negate `filter`. An absent filter is wrapped as-is, not elided.
    pub fn not(filter: impl Into<Option<Filter>>) -> Filter {
        Filter::Not {
            field: filter.into().map(Box::new),
        }
    }

    /// Shared routine behind [`Filter::and`] and [`Filter::or`].
    pub fn join<I>(filters: I, connector: Connector) -> Option<Filter>
    where
        I: IntoIterator,
        I::Item: Into<Option<Filter>>,
    {
        let mut seen = 0usize;
        let mut fields: Vec<Filter> = filters
            .into_iter()
            .inspect(|_| seen += 1)
            .filter_map(Into::<Option<Filter>>::into)
            .collect();

        tracing::trace!(
            connector = %connector,
            elided = seen - fields.len(),
            kept = fields.len(),
            "joined filters"
        );

        match fields.len() {
            0 => None,
            1 => fields.pop(),
            _ => Some(connector.wrap(fields)),
        }
    }

    /// Child filters of a connector node; empty for leaves and empty `not`.
    pub fn children(&self) -> Vec<&Filter> {
        match self {
            Filter::And { fields } | Filter::Or { fields } => fields.iter().collect(),
            Filter::Not { field } => field.as_deref().into_iter().collect(),
            _ => Vec::new(),
        }
    }
}
