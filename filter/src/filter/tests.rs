//! Tests for filter construction and combination.

use serde_json::{json, Value};

use super::*;
use crate::dimension::DimSpec;
use crate::extraction::{ExtractionFn, TimeFormat};

fn to_value(filter: &Filter) -> Value {
    serde_json::to_value(filter).unwrap()
}

fn sel(dimension: &str, value: &str) -> Filter {
    Filter::selector(dimension, value)
}

// Combinators

#[test]
fn test_and_empty() {
    assert_eq!(Filter::and(Vec::<Filter>::new()), None);
    assert_eq!(Filter::or(Vec::<Filter>::new()), None);
}

#[test]
fn test_and_all_absent() {
    assert_eq!(Filter::and([None::<Filter>, None, None]), None);
    assert_eq!(Filter::or([None::<Filter>]), None);
}

#[test]
fn test_single_is_returned_unwrapped() {
    let x = sel("a", "1");
    assert_eq!(Filter::and([x.clone()]), Some(x.clone()));
    assert_eq!(Filter::or([x.clone()]), Some(x.clone()));

    // Absent entries around a single survivor still collapse to it
    assert_eq!(Filter::and([None, Some(x.clone()), None]), Some(x.clone()));
    assert_eq!(Filter::or([Some(x.clone()), None]), Some(x));
}

#[test]
fn test_and_three() {
    let (x, y, z) = (sel("a", "1"), sel("b", "2"), sel("c", "3"));
    let f = Filter::and([x.clone(), y.clone(), z.clone()]).unwrap();
    assert_eq!(f.type_name(), "and");
    assert_eq!(f, Filter::And { fields: vec![x, y, z] });
}

#[test]
fn test_or_three() {
    let (x, y, z) = (sel("a", "1"), sel("b", "2"), sel("c", "3"));
    let f = Filter::or([x.clone(), y.clone(), z.clone()]).unwrap();
    assert_eq!(f.type_name(), "or");
    assert_eq!(f.children(), vec![&x, &y, &z]);
}

#[test]
fn test_elision_preserves_order() {
    let (x, y, z) = (sel("a", "1"), sel("b", "2"), sel("c", "3"));
    let f = Filter::and([
        None,
        Some(z.clone()),
        None,
        Some(x.clone()),
        Some(y.clone()),
        None,
    ])
    .unwrap();
    assert_eq!(f, Filter::And { fields: vec![z.clone(), x.clone(), y.clone()] });

    let f = Filter::or([Some(y.clone()), None, Some(x.clone())]).unwrap();
    assert_eq!(f, Filter::Or { fields: vec![y, x] });
}

#[test]
fn test_join_accepts_iterators() {
    let dims = ["a", "b", "c"];
    let f = Filter::or(dims.iter().map(|d| Filter::selector(*d, "x"))).unwrap();
    assert_eq!(f.children().len(), 3);

    let f = Filter::join(
        dims.iter().map(|d| (*d != "b").then(|| Filter::selector(*d, "x"))),
        Connector::And,
    )
    .unwrap();
    assert_eq!(f, Filter::And { fields: vec![sel("a", "x"), sel("c", "x")] });
}

#[test]
fn test_not() {
    let x = sel("a", "1");
    let f = Filter::not(x.clone());
    assert_eq!(f.type_name(), "not");
    assert_eq!(f.children(), vec![&x]);
    assert_eq!(
        to_value(&f),
        json!({
            "type": "not",
            "field": {"type": "selector", "dimension": "a", "value": "1"}
        })
    );
}

#[test]
fn test_not_absent_is_kept() {
    let f = Filter::not(None::<Filter>);
    assert_eq!(f, Filter::Not { field: None });
    assert!(f.children().is_empty());
    assert_eq!(to_value(&f), json!({"type": "not"}));
}

#[test]
fn test_not_of_empty_and() {
    // and() of nothing is absent; not() still wraps it
    let f = Filter::not(Filter::and([None::<Filter>, None]));
    assert_eq!(f, Filter::Not { field: None });
}

#[test]
fn test_nested_end_to_end() {
    let f = Filter::and([
        Some(sel("a", "1")),
        None,
        Filter::or([sel("b", "2"), sel("c", "3")]),
    ])
    .unwrap();

    assert_eq!(
        to_value(&f),
        json!({
            "type": "and",
            "fields": [
                {"type": "selector", "dimension": "a", "value": "1"},
                {"type": "or", "fields": [
                    {"type": "selector", "dimension": "b", "value": "2"},
                    {"type": "selector", "dimension": "c", "value": "3"}
                ]}
            ]
        })
    );
}

#[test]
fn test_connector_display() {
    assert_eq!(Connector::And.to_string(), "and");
    assert_eq!(Connector::Or.to_string(), "or");
}

// Leaves

#[test]
fn test_selector_zero_values_are_present() {
    assert_eq!(
        to_value(&Filter::selector("count", 0)),
        json!({"type": "selector", "dimension": "count", "value": 0})
    );
    assert_eq!(
        to_value(&Filter::selector("name", "")),
        json!({"type": "selector", "dimension": "name", "value": ""})
    );
    assert_eq!(
        to_value(&Filter::selector("flag", false)),
        json!({"type": "selector", "dimension": "flag", "value": false})
    );
}

#[test]
fn test_selector_null_value_omitted() {
    assert_eq!(
        to_value(&Filter::selector("name", Value::Null)),
        json!({"type": "selector", "dimension": "name"})
    );
}

#[test]
fn test_regex_like_javascript() {
    assert_eq!(
        to_value(&Filter::regex("page", "^/docs/.*")),
        json!({"type": "regex", "dimension": "page", "pattern": "^/docs/.*"})
    );
    assert_eq!(
        to_value(&Filter::like("page", "/docs/%")),
        json!({"type": "like", "dimension": "page", "pattern": "/docs/%"})
    );
    assert_eq!(
        to_value(&Filter::javascript("x", "function(x) { return x > 3 }")),
        json!({"type": "javascript", "dimension": "x", "function": "function(x) { return x > 3 }"})
    );
}

#[test]
fn test_search_single_value_is_contains() {
    let f = Filter::search("page", false, ["a"]);
    assert_eq!(
        to_value(&f),
        json!({"type": "search", "dimension": "page", "query": {"type": "contains", "value": "a"}})
    );
}

#[test]
fn test_search_many_values_is_fragment() {
    let f = Filter::search("page", true, ["a", "b"]);
    assert_eq!(
        to_value(&f),
        json!({
            "type": "search",
            "dimension": "page",
            "query": {"type": "fragment", "values": ["a", "b"], "caseSensitive": true}
        })
    );
}

#[test]
fn test_search_no_values() {
    let f = Filter::search("page", false, Vec::<String>::new());
    assert_eq!(
        to_value(&f),
        json!({"type": "search", "dimension": "page", "query": {"type": "fragment"}})
    );
}

#[test]
fn test_search_query_case_sensitivity() {
    assert!(SearchQuery::new(true, ["a"]).is_case_sensitive());
    assert!(!SearchQuery::new(false, ["a", "b"]).is_case_sensitive());
}

#[test]
fn test_lower_bound() {
    let f = Filter::lower_bound("age", Ordering::Numeric, "18", true);
    assert_eq!(
        to_value(&f),
        json!({
            "type": "bound",
            "dimension": "age",
            "lower": "18",
            "lowerStrict": true,
            "ordering": "numeric"
        })
    );
}

#[test]
fn test_upper_bound_not_strict() {
    let f = Filter::upper_bound("name", Ordering::Lexicographic, "m", false);
    assert_eq!(
        to_value(&f),
        json!({"type": "bound", "dimension": "name", "upper": "m", "ordering": "lexicographic"})
    );
}

#[test]
fn test_lower_upper_bound() {
    let f = Filter::lower_upper_bound("age", Ordering::Numeric, "0", false, "65", true);
    assert_eq!(
        to_value(&f),
        json!({
            "type": "bound",
            "dimension": "age",
            "lower": "0",
            "upper": "65",
            "upperStrict": true,
            "ordering": "numeric"
        })
    );
}

#[test]
fn test_in_values() {
    assert_eq!(
        to_value(&Filter::in_values("country", ["NZ", "AU"])),
        json!({"type": "in", "dimension": "country", "values": ["NZ", "AU"]})
    );
    assert_eq!(
        to_value(&Filter::in_values("country", Vec::<String>::new())),
        json!({"type": "in", "dimension": "country", "values": []})
    );
}

#[test]
fn test_column_comparison() {
    let f = Filter::column_comparison([
        DimSpec::from("first"),
        DimSpec::default_spec("second", Some("other")),
    ]);
    assert_eq!(
        to_value(&f),
        json!({
            "type": "columnComparison",
            "dimensions": [
                "first",
                {"type": "default", "dimension": "second", "outputName": "other"}
            ]
        })
    );

    let f = Filter::column_comparison(["a", "b"]);
    assert_eq!(to_value(&f)["dimensions"], json!(["a", "b"]));
}

#[test]
fn test_spatial_rectangle() {
    let f = Filter::spatial_rectangle(
        "loc",
        SpatialCoordinates::new(-41.3, 174.7),
        SpatialCoordinates::new(-36.8, 175.0),
    );
    assert_eq!(
        to_value(&f),
        json!({
            "type": "spatial",
            "dimension": "loc",
            "bound": {
                "type": "rectangular",
                "minCoords": [-41.3, 174.7],
                "maxCoords": [-36.8, 175.0]
            }
        })
    );
}

#[test]
fn test_spatial_radius() {
    let f = Filter::spatial_radius("loc", SpatialCoordinates::new(1.5, 2.5), 10.0);
    assert_eq!(
        to_value(&f),
        json!({
            "type": "spatial",
            "dimension": "loc",
            "bound": {"type": "radius", "coords": [1.5, 2.5], "radius": 10.0}
        })
    );
}

#[test]
fn test_spatial_radius_zero_is_present() {
    let f = Filter::spatial_radius("loc", SpatialCoordinates::new(0.0, 0.0), 0.0);
    assert_eq!(
        to_value(&f)["bound"],
        json!({"type": "radius", "coords": [0.0, 0.0], "radius": 0.0})
    );
}

#[test]
fn test_leaf_with_extraction_fn() {
    let f: Filter = Selector::new("country", "New Zealand")
        .with_extraction_fn(ExtractionFn::registered_lookup("country_names", true, None, false))
        .into();
    assert_eq!(
        to_value(&f),
        json!({
            "type": "selector",
            "dimension": "country",
            "value": "New Zealand",
            "extractionFn": {
                "type": "registeredLookup",
                "lookup": "country_names",
                "retainMissingValue": true
            }
        })
    );

    let f: Filter = Bound::new("__time", Ordering::Numeric)
        .lower("2020", false)
        .with_extraction_fn(TimeFormat::new("yyyy"))
        .into();
    assert_eq!(
        to_value(&f)["extractionFn"],
        json!({"type": "timeFormat", "format": "yyyy"})
    );
}

#[test]
fn test_type_names_match_wire_tag() {
    let filters = vec![
        sel("a", "1"),
        Filter::regex("a", "x"),
        Filter::like("a", "x%"),
        Filter::javascript("a", "f"),
        Filter::search("a", false, ["x"]),
        Filter::in_values("a", ["x"]),
        Filter::upper_bound("a", Ordering::Strlen, "3", false),
        Filter::column_comparison(["a", "b"]),
        Filter::spatial_radius("a", SpatialCoordinates::new(0.0, 0.0), 1.0),
        Filter::and([sel("a", "1"), sel("b", "2")]).unwrap(),
        Filter::or([sel("a", "1"), sel("b", "2")]).unwrap(),
        Filter::not(sel("a", "1")),
    ];

    for f in &filters {
        assert_eq!(to_value(f)["type"], json!(f.type_name()));
    }
    assert!(filters[0].is_leaf());
    assert!(!filters[11].is_leaf());
}

#[test]
fn test_ordering_parse() {
    assert_eq!("alphanumeric".parse::<Ordering>().unwrap(), Ordering::Alphanumeric);
    assert_eq!(Ordering::Strlen.to_string(), "strlen");
    assert!(matches!(
        "numerical".parse::<Ordering>(),
        Err(crate::Error::InvalidOrdering(name)) if name == "numerical"
    ));
}

#[test]
fn test_coordinates_finite() {
    assert!(SpatialCoordinates::new(-41.3, 174.7).is_finite());
    assert!(!SpatialCoordinates::new(f64::NAN, 0.0).is_finite());
    assert!(!SpatialCoordinates::new(0.0, f64::INFINITY).is_finite());
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "non-finite radius bound")]
fn test_spatial_radius_rejects_infinite_radius() {
    Filter::spatial_radius("loc", SpatialCoordinates::new(0.0, 0.0), f64::INFINITY);
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "non-finite radius bound")]
fn test_spatial_radius_rejects_nan_center() {
    Filter::spatial_radius("loc", SpatialCoordinates::new(f64::NAN, 0.0), 1.0);
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "non-finite rectangle corner")]
fn test_spatial_rectangle_rejects_nan_corner() {
    Filter::spatial_rectangle(
        "loc",
        SpatialCoordinates::new(0.0, 0.0),
        SpatialCoordinates::new(1.0, f64::NAN),
    );
}
