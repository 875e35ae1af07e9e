//! RPM version ordering.
//!
//! Versions are compared segment by segment, where a segment is a maximal
//! run of digits or of ASCII letters. Everything else separates segments.
//! `~` sorts before anything (pre-releases), `^` sorts after the base
//! version but before any further segment (post-release snapshots).

use std::cmp::Ordering;

/// Compare two version (or release) strings the way `rpmvercmp` does.
pub fn rpmvercmp(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    let one = a.as_bytes();
    let two = b.as_bytes();
    let (mut i, mut j) = (0usize, 0usize);

    while i < one.len() || j < two.len() {
        while i < one.len() && !is_segment_byte(one[i]) {
            i += 1;
        }
        while j < two.len() && !is_segment_byte(two[j]) {
            j += 1;
        }

        // Tilde: the side carrying it is older.
        let t1 = one.get(i) == Some(&b'~');
        let t2 = two.get(j) == Some(&b'~');
        if t1 || t2 {
            if !t1 {
                return Ordering::Greater;
            }
            if !t2 {
                return Ordering::Less;
            }
            i += 1;
            j += 1;
            continue;
        }

        // Caret: newer than the bare base, older than any other segment.
        let c1 = one.get(i) == Some(&b'^');
        let c2 = two.get(j) == Some(&b'^');
        if c1 || c2 {
            if i >= one.len() {
                return Ordering::Less;
            }
            if j >= two.len() {
                return Ordering::Greater;
            }
            if !c1 {
                return Ordering::Greater;
            }
            if !c2 {
                return Ordering::Less;
            }
            i += 1;
            j += 1;
            continue;
        }

        if i >= one.len() || j >= two.len() {
            break;
        }

        let numeric = one[i].is_ascii_digit();
        let seg1 = take_segment(one, &mut i, numeric);
        let seg2 = take_segment(two, &mut j, numeric);

        if seg2.is_empty() {
            // Mixed segment types: numeric beats alpha.
            return if numeric {
                Ordering::Greater
            } else {
                Ordering::Less
            };
        }

        let ord = if numeric {
            compare_numeric(seg1, seg2)
        } else {
            seg1.cmp(seg2)
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }

    match (i >= one.len(), j >= two.len()) {
        (true, true) => Ordering::Equal,
        (false, _) => Ordering::Greater,
        (true, false) => Ordering::Less,
    }
}

/// Compare full epoch/version/release triples. A missing epoch is 0.
pub fn compare_evr(
    a: (Option<u64>, &str, &str),
    b: (Option<u64>, &str, &str),
) -> Ordering {
    a.0.unwrap_or(0)
        .cmp(&b.0.unwrap_or(0))
        .then_with(|| rpmvercmp(a.1, b.1))
        .then_with(|| rpmvercmp(a.2, b.2))
}

fn is_segment_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'~' || b == b'^'
}

fn take_segment<'a>(s: &'a [u8], pos: &mut usize, numeric: bool) -> &'a [u8] {
    let start = *pos;
    while *pos < s.len()
        && (if numeric {
            s[*pos].is_ascii_digit()
        } else {
            s[*pos].is_ascii_alphabetic()
        })
    {
        *pos += 1;
    }
    &s[start..*pos]
}

fn compare_numeric(a: &[u8], b: &[u8]) -> Ordering {
    let a = strip_leading_zeros(a);
    let b = strip_leading_zeros(b);
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn strip_leading_zeros(s: &[u8]) -> &[u8] {
    let first = s.iter().position(|&c| c != b'0').unwrap_or(s.len());
    &s[first..]
}
