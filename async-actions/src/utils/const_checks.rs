/// Index of the first base name in `names` that repeats an earlier one.
///
/// Phase suffixes end in different characters, so distinct base names also
/// give distinct derived names across all of their sets.
#[must_use]
pub const fn first_duplicate(names: &[&str]) -> Option<usize> {
    let mut later: usize = 1;
    while later < names.len() {
        let mut earlier: usize = 0;
        while earlier < later {
            if const_str::equal!(names[earlier], names[later]) {
                return Some(later);
            }
            earlier += 1;
        }
        later += 1;
    }
    None
}

/// Whether every base name in `names` is distinct.
#[must_use]
pub const fn unique_names(names: &[&str]) -> bool {
    first_duplicate(names).is_none()
}

#[cfg(test)]
mod test {
    use crate::utils::const_checks::{first_duplicate, unique_names};

    #[test]
    fn test_unique_names() {
        // evaluated at compile time
        const _: () = assert!(unique_names(&["fetchUser", "saveUser"]));
        const _: () = assert!(!unique_names(&["fetchUser", "saveUser", "fetchUser"]));

        const _: () = assert!(unique_names(&[]));
        const _: () = assert!(unique_names(&[""]));
        const _: () = assert!(!unique_names(&["", ""]));
    }

    #[test]
    fn first_duplicate_points_at_the_repeat() {
        assert_eq!(first_duplicate(&["a", "b", "c"]), None);
        assert_eq!(first_duplicate(&["a", "b", "a", "b"]), Some(2));
        assert_eq!(first_duplicate(&["a", "b", "b", "a"]), Some(2));
        assert_eq!(first_duplicate(&["x", "x"]), Some(1));
    }

    #[test]
    fn names_are_compared_by_content() {
        let owned = String::from("fetchUser");
        assert_eq!(first_duplicate(&["fetchUser", owned.as_str()]), Some(1));
        assert!(unique_names(&["fetchUser", "fetchUsers"]));
    }
}
