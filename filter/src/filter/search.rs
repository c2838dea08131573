//! Search filter queries.

use std::ops::Not;

use serde::Serialize;

/// Query carried by a search filter, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SearchQuery {
    /// Match values containing a single string.
    Contains {
        value: String,
        #[serde(rename = "caseSensitive", skip_serializing_if = "Not::not")]
        case_sensitive: bool,
    },
    /// Match values containing every one of several strings.
    Fragment {
        #[serde(skip_serializing_if = "Vec::is_empty")]
        values: Vec<String>,
        #[serde(rename = "caseSensitive", skip_serializing_if = "Not::not")]
        case_sensitive: bool,
    },
}

impl SearchQuery {
    /// One value yields `contains`; any other count yields `fragment`.
    pub fn new<S: Into<String>>(case_sensitive: bool, values: impl IntoIterator<Item = S>) -> Self {
        let mut values: Vec<String> = values.into_iter().map(Into::into).collect();

        if values.len() == 1 {
            if let Some(value) = values.pop() {
                return SearchQuery::Contains {
                    value,
                    case_sensitive,
                };
            }
        }

        SearchQuery::Fragment {
            values,
            case_sensitive,
        }
    }

    pub fn is_case_sensitive(&self) -> bool {
        match self {
            SearchQuery::Contains { case_sensitive, .. }
            | SearchQuery::Fragment { case_sensitive, .. } => *case_sensitive,
        }
    }
}
