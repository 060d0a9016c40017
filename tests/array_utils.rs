use tracklet_util::array_utils::{contains, contains_all, difference, uniq};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[test]
fn contains_basic() {
    assert!(!contains(&[], "test"));
    assert!(contains(&strings(&["apple", "banana", "cherry"]), "banana"));
    assert!(!contains(&strings(&["apple", "banana", "cherry"]), "grape"));
    assert!(contains(&strings(&["apple", "", "cherry"]), ""));
    // case sensitive
    assert!(!contains(&strings(&["Apple", "Banana"]), "apple"));
}

#[test]
fn uniq_basic() {
    assert_eq!(uniq(&strings(&["a", "b", "c"])), strings(&["a", "b", "c"]));
    assert_eq!(
        uniq(&strings(&["a", "b", "a", "c", "b"])),
        strings(&["a", "b", "c"])
    );
    assert_eq!(uniq(&[]), Vec::<String>::new());
    assert_eq!(uniq(&strings(&["a", "a", "a"])), strings(&["a"]));
}

#[test]
fn difference_basic() {
    assert_eq!(
        difference(&strings(&["a", "b", "c"]), &strings(&["b", "d"])),
        strings(&["a", "c"])
    );
    assert_eq!(
        difference(&strings(&["a", "b"]), &strings(&["a", "b", "c"])),
        Vec::<String>::new()
    );
    assert_eq!(
        difference(&strings(&["a", "b"]), &[]),
        strings(&["a", "b"])
    );
    assert_eq!(difference(&[], &strings(&["a", "b"])), Vec::<String>::new());
    assert_eq!(difference(&[], &[]), Vec::<String>::new());
    // duplicates on the left are kept
    assert_eq!(
        difference(&strings(&["a", "a", "b"]), &strings(&["b"])),
        strings(&["a", "a"])
    );
}

#[test]
fn contains_all_basic() {
    // empty needle set is trivially contained
    assert!(contains_all(&[], &strings(&["a"])));
    assert!(contains_all(&[], &[]));
    assert!(contains_all(
        &strings(&["a", "b"]),
        &strings(&["c", "b", "a"])
    ));
    assert!(!contains_all(&strings(&["a", "d"]), &strings(&["a", "b"])));
    assert!(!contains_all(&strings(&["a"]), &[]));
}
