//! Linear subsequence check, the admission filter for scoring

/// ASCII case-insensitive byte equality.
#[inline]
pub(crate) fn chars_match(a: u8, b: u8) -> bool {
    a.eq_ignore_ascii_case(&b)
}

/// Whether every needle byte occurs in the haystack, in order, ignoring ASCII
/// case. The empty needle matches everything.
pub fn has_match(needle: &[u8], haystack: &[u8]) -> bool {
    let mut rest = haystack;
    for &c in needle {
        match find_folded(c, rest) {
            Some(pos) => rest = &rest[pos + 1..],
            None => return false,
        }
    }
    true
}

#[cfg(all(not(target_arch = "wasm32"), feature = "simd"))]
#[inline]
fn find_folded(c: u8, haystack: &[u8]) -> Option<usize> {
    let (lower, upper) = (c.to_ascii_lowercase(), c.to_ascii_uppercase());
    if lower == upper {
        memchr::memchr(c, haystack)
    } else {
        memchr::memchr2(lower, upper, haystack)
    }
}

#[cfg(any(target_arch = "wasm32", not(feature = "simd")))]
#[inline]
fn find_folded(c: u8, haystack: &[u8]) -> Option<usize> {
    haystack.iter().position(|&h| chars_match(c, h))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_order() {
        assert!(has_match(b"amo", b"app/models/user.rb"));
        assert!(has_match(b"rb", b"robot.py"));
        assert!(!has_match(b"br", b"robot.py"));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(has_match(b"FOO", b"xfXoYo"));
        assert!(has_match(b"foo", b"FOO"));
    }

    #[test]
    fn test_empty() {
        assert!(has_match(b"", b""));
        assert!(has_match(b"", b"anything"));
        assert!(!has_match(b"a", b""));
    }

    #[test]
    fn test_repeated_needle_bytes_need_repeated_haystack_bytes() {
        assert!(!has_match(b"aa", b"a"));
        assert!(has_match(b"aa", b"bab a"));
    }

    #[test]
    fn test_non_ascii_bytes_compare_exactly() {
        assert!(has_match(&[0xC3, 0xA9], &[b'x', 0xC3, 0xA9]));
        assert!(!has_match(&[0xC3, 0x89], &[0xC3, 0xA9]));
    }
}
