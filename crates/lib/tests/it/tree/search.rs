use formtree::{Field, tree::filter_fields};

use crate::helpers::*;

fn matches(field: &Field, query: &str) -> bool {
    let query = query.to_lowercase();
    [Some(field.name.as_str()), field.title.as_deref(), field.description.as_deref()]
        .into_iter()
        .flatten()
        .any(|text| text.to_lowercase().contains(&query))
}

fn subtree_matches(field: &Field, query: &str) -> bool {
    matches(field, query) || field.children().iter().any(|c| subtree_matches(c, query))
}

/// Checks that every kept field matches or leads to a match, and that kept
/// children are drawn from the original children. A direct match may keep
/// all of its children unfiltered.
fn assert_contained(filtered: &[Field], original: &[Field], query: &str) {
    for field in filtered {
        assert!(subtree_matches(field, query), "{} kept without a match", field.name);
        let source = original
            .iter()
            .find(|f| f.name == field.name)
            .expect("kept field comes from the original level");
        if matches(field, query) && field.children() == source.children() {
            continue;
        }
        assert_contained(field.children(), source.children(), query);
    }
}

#[test]
fn test_filter_containment() {
    let tree = service_config();
    for query in ["service", "name", "E-MAIL", "tier", "0", "pager", "support", "zzz"] {
        let filtered = filter_fields(&tree, query);
        assert_contained(&filtered, &tree, query);
    }
}

#[test]
fn test_filter_by_description_keeps_path() {
    let filtered = filter_fields(&service_config(), "support");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "service");
    assert_eq!(child_names(&filtered[0]), vec!["tier"]);
}

#[test]
fn test_filter_no_matches() {
    assert!(filter_fields(&service_config(), "nothing here").is_empty());
}
