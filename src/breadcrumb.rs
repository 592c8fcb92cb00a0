// Breadcrumb derivation from the current route

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Breadcrumb {
    pub label: String,
    pub path: String,
}

/// One breadcrumb per non-empty path segment, each pointing at the cumulative path.
/// The root has no breadcrumbs; the header shows a home button for it instead.
pub fn derive_breadcrumbs(current_path: &str) -> Vec<Breadcrumb> {
    if current_path == "/" {
        return Vec::new();
    }

    let segments: Vec<&str> = current_path.split('/').filter(|s| !s.is_empty()).collect();

    segments
        .iter()
        .enumerate()
        .map(|(i, segment)| Breadcrumb {
            label: label_for_segment(segment),
            path: format!("/{}", segments[..=i].join("/")),
        })
        .collect()
}

/// `linked-lists` -> `Linked Lists`. Everything except the first letter of each
/// hyphen-separated word passes through untouched.
pub fn label_for_segment(segment: &str) -> String {
    segment
        .split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crumb(label: &str, path: &str) -> Breadcrumb {
        Breadcrumb {
            label: label.to_string(),
            path: path.to_string(),
        }
    }

    #[test]
    fn test_root_has_no_breadcrumbs() {
        assert!(derive_breadcrumbs("/").is_empty());
        assert!(derive_breadcrumbs("").is_empty());
        assert!(derive_breadcrumbs("//").is_empty());
    }

    #[test]
    fn test_data_structure_route() {
        assert_eq!(
            derive_breadcrumbs("/data-structures/linked-lists"),
            vec![
                crumb("Data Structures", "/data-structures"),
                crumb("Linked Lists", "/data-structures/linked-lists"),
            ]
        );
    }

    #[test]
    fn test_nested_route() {
        assert_eq!(
            derive_breadcrumbs("/algorithms/searching/linear-search"),
            vec![
                crumb("Algorithms", "/algorithms"),
                crumb("Searching", "/algorithms/searching"),
                crumb("Linear Search", "/algorithms/searching/linear-search"),
            ]
        );
    }

    #[test]
    fn test_count_matches_non_empty_segments() {
        for path in [
            "/arrays",
            "/data-structures/hash-tables",
            "/a/b/c/d",
            "a//b///c",
            "/algorithms/sorting/quick-sort/",
        ] {
            let expected = path.split('/').filter(|s| !s.is_empty()).count();
            assert_eq!(derive_breadcrumbs(path).len(), expected, "path {:?}", path);
        }
    }

    #[test]
    fn test_trailing_slash_is_ignored() {
        assert_eq!(
            derive_breadcrumbs("/algorithms/greedy/"),
            derive_breadcrumbs("/algorithms/greedy")
        );
    }

    #[test]
    fn test_label_rule() {
        assert_eq!(label_for_segment("graph-algorithms"), "Graph Algorithms");
        assert_eq!(label_for_segment("o(n)-time"), "O(n) Time");
        assert_eq!(label_for_segment("mixedCASE"), "MixedCASE");
        assert_eq!(label_for_segment("3-sum"), "3 Sum");
        assert_eq!(label_for_segment("a--b"), "A  B");
    }

    #[test]
    fn test_label_is_idempotent() {
        for segment in ["linked-lists", "dynamic-programming", "heaps"] {
            let once = label_for_segment(segment);
            assert_eq!(label_for_segment(&once), once);
        }
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let path = "/data-structures/trees";
        assert_eq!(derive_breadcrumbs(path), derive_breadcrumbs(path));
    }
}
