//! Path formatting and the membership check used for cycle-breaking

/// Check whether `value` already occurs in `items`.
pub fn contains<T: PartialEq>(items: &[T], value: &T) -> bool {
    items.iter().any(|item| item == value)
}

/// Join one path with `delim`.
///
/// No escaping is done: a name containing `delim` makes the result ambiguous.
pub fn join_path<S: AsRef<str>>(path: &[S], delim: &str) -> String {
    path.iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join(delim)
}

/// Join every path with `delim`, keeping path order.
pub fn join_paths<S: AsRef<str>>(paths: &[Vec<S>], delim: &str) -> Vec<String> {
    paths.iter().map(|p| join_path(p, delim)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let ids = [3usize, 1, 4];
        assert!(contains(&ids, &1));
        assert!(!contains(&ids, &5));
        assert!(!contains::<usize>(&[], &0));

        let names = vec!["a".to_string(), "b".to_string()];
        assert!(contains(&names, &"b".to_string()));
    }

    #[test]
    fn test_join_path() {
        assert_eq!(join_path(&["A", "B", "D"], "/"), "A/B/D");
        assert_eq!(join_path(&["solo"], " > "), "solo");
        assert_eq!(join_path::<&str>(&[], "/"), "");
    }

    #[test]
    fn test_join_path_does_not_escape() {
        assert_eq!(join_path(&["a/b", "c"], "/"), "a/b/c");
    }
}
