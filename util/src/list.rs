/// Separator used by O2 configurables that hold several names in one string.
pub const LIST_DELIM: char = ',';

/// Join `items` into a single configurable value, e.g. `["a", "b"]` -> `"a,b"`.
pub fn list_to_string<S: AsRef<str>>(items: &[S]) -> String {
    let cap = items.iter().map(|s| s.as_ref().len() + 1).sum();
    let mut out = String::with_capacity(cap);
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(LIST_DELIM);
        }
        out.push_str(item.as_ref());
    }
    out
}

/// Split a configurable value back into its names. An empty string yields no names.
pub fn string_to_list(s: &str) -> Vec<String> {
    if s.is_empty() {
        return Vec::with_capacity(0);
    }
    s.split(LIST_DELIM).map(str::to_owned).collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_round_trip() {
        let xs = vec![
            String::from("jpsiO2MCdebugCuts2"),
            String::from("jpsiPID1"),
            String::from("muonQualityCuts"),
        ];
        assert_eq!(string_to_list(&list_to_string(&xs)), xs);
    }

    #[test]
    fn test_single_item_has_no_separator() {
        let joined = list_to_string(&["eventStandardNoINT7"]);
        assert_eq!(joined, "eventStandardNoINT7");
        assert!(!joined.contains(LIST_DELIM));
        assert_eq!(string_to_list(&joined), vec!["eventStandardNoINT7"]);
    }

    #[test]
    fn test_empty() {
        let empty: [&str; 0] = [];
        assert_eq!(list_to_string(&empty), "");
        assert!(string_to_list("").is_empty());
    }
}
