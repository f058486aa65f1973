/// Asserts that every needle occurs in `haystack`, in the given order.
pub fn assert_in_order(haystack: &str, needles: &[&str]) {
    let mut from = 0;
    for needle in needles {
        match haystack[from..].find(needle) {
            Some(offset) => from += offset + needle.len(),
            None => panic!("'{}' not found after byte {} in:\n{}", needle, from, haystack),
        }
    }
}

/// Counts the elements whose opening tag starts with `prefix`, e.g.
/// `<div class="timeline-item`.
pub fn count_blocks(haystack: &str, prefix: &str) -> usize {
    haystack.matches(prefix).count()
}
