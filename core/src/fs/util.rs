use std::cmp::Ordering;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Join `dir` and an entry `name` with exactly one separator.
///
/// Trailing (and doubled) separators on `dir` are collapsed first, so `"/d"`, `"/d/"` and
/// `"/d//"` all produce `"/d/name"`.
pub fn join_entry(dir: &Path, name: &OsStr) -> PathBuf {
    let mut joined: PathBuf = dir.components().collect();
    joined.push(name);
    joined
}

/// Text after the last `.` of a bare entry name. A leading dot counts, so `.sfc` has
/// extension `sfc`. Names without a dot, or ending in one, have none.
pub fn extension_of(name: &OsStr) -> Option<&str> {
    let bytes = name.as_encoded_bytes();
    let dot = bytes.iter().rposition(|&b| b == b'.')?;
    std::str::from_utf8(&bytes[dot + 1..]).ok().filter(|ext| !ext.is_empty())
}

/// Case-insensitive ordering with an exact-bytes tie-break, so distinct paths never compare equal.
pub fn lexical_cmp_path(a: &Path, b: &Path) -> Ordering {
    to_cmp_key(a).cmp(&to_cmp_key(b)).then_with(|| a.as_os_str().cmp(b.as_os_str()))
}

/// Natural ordering on case-folded paths; digit runs compare by value.
pub fn natural_cmp_path(a: &Path, b: &Path) -> Ordering {
    natural_cmp(&to_cmp_key(a), &to_cmp_key(b)).then_with(|| a.as_os_str().cmp(b.as_os_str()))
}

fn to_cmp_key(path: &Path) -> String {
    path.to_string_lossy().to_lowercase()
}

/// Compare two strings chunk by chunk. Digit runs compare by numeric value and sort ahead of
/// text; text runs compare by char. Runs of equal value with more leading zeros sort later.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = Chunks(a);
    let mut right = Chunks(b);
    loop {
        let order = match (left.next(), right.next()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => compare_chunks(x, y),
        };
        if order.is_ne() {
            return order;
        }
    }
}

/// Maximal runs of either ASCII digits or non-digits, front to back.
struct Chunks<'a>(&'a str);

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let numeric = is_digit_run(self.0)?;
        let end = self.0.find(|c: char| c.is_ascii_digit() != numeric).unwrap_or(self.0.len());
        let (chunk, rest) = self.0.split_at(end);
        self.0 = rest;
        Some(chunk)
    }
}

fn is_digit_run(chunk: &str) -> Option<bool> {
    chunk.chars().next().map(|c| c.is_ascii_digit())
}

fn compare_chunks(a: &str, b: &str) -> Ordering {
    match (is_digit_run(a), is_digit_run(b)) {
        (Some(true), Some(true)) => compare_digit_runs(a, b),
        (Some(true), _) => Ordering::Less,
        (_, Some(true)) => Ordering::Greater,
        _ => a.cmp(b),
    }
}

// Significant digits compared as text; length first, then digits, then leading zeros.
fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a_significant = a.trim_start_matches('0');
    let b_significant = b.trim_start_matches('0');
    a_significant
        .len()
        .cmp(&b_significant.len())
        .then_with(|| a_significant.cmp(b_significant))
        .then_with(|| a.len().cmp(&b.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_uses_exactly_one_separator() {
        let name = OsStr::new("a.txt");
        let expected = join_entry(Path::new("/d"), name);
        assert_eq!(join_entry(Path::new("/d/"), name), expected);
        assert_eq!(join_entry(Path::new("/d//"), name), expected);
    }

    #[cfg(unix)]
    #[test]
    fn join_onto_relative_and_empty_dirs() {
        let name = OsStr::new("x");
        assert_eq!(join_entry(Path::new("rel/dir/"), name), PathBuf::from("rel/dir/x"));
        assert_eq!(join_entry(Path::new(""), name), PathBuf::from("x"));
        assert_eq!(join_entry(Path::new("/d/"), OsStr::new("a.txt")), PathBuf::from("/d/a.txt"));
    }

    #[test]
    fn extension_is_taken_from_last_dot() {
        assert_eq!(extension_of(OsStr::new("game.tar.7z")), Some("7z"));
        assert_eq!(extension_of(OsStr::new("B.ZIP")), Some("ZIP"));
        assert_eq!(extension_of(OsStr::new("README")), None);
        assert_eq!(extension_of(OsStr::new(".profile")), Some("profile"));
        assert_eq!(extension_of(OsStr::new(".sfc")), Some("sfc"));
        assert_eq!(extension_of(OsStr::new("trailing.")), None);
    }

    #[test]
    fn lexical_order_folds_case_but_stays_total() {
        let upper = Path::new("/d/A.txt");
        let lower = Path::new("/d/a.txt");
        assert!(lexical_cmp_path(Path::new("/d/a.txt"), Path::new("/d/B.ZIP")).is_lt());
        assert_ne!(lexical_cmp_path(upper, lower), Ordering::Equal);
        assert_eq!(lexical_cmp_path(upper, lower), lexical_cmp_path(lower, upper).reverse());
        assert_eq!(lexical_cmp_path(lower, lower), Ordering::Equal);
    }

    #[test]
    fn natural_order_compares_digit_runs_by_value() {
        assert!(natural_cmp_path(Path::new("Disc 2"), Path::new("disc 10")).is_lt());
        assert!(lexical_cmp_path(Path::new("Disc 2"), Path::new("disc 10")).is_gt());
    }

    #[test]
    fn oversized_digit_runs_do_not_collapse_to_zero() {
        let huge = "9".repeat(60);
        assert!(natural_cmp("1", &huge).is_lt());
        assert!(natural_cmp(&format!("{huge}8"), &format!("{huge}9")).is_lt());
    }

    #[test]
    fn leading_zeros_only_break_ties() {
        assert!(natural_cmp("disc2", "disc02").is_lt());
        assert!(natural_cmp("disc02", "disc3").is_lt());
        assert!(natural_cmp("disc007", "disc7").is_gt());
    }

    #[test]
    fn digit_runs_sort_ahead_of_text() {
        assert!(natural_cmp("1up", "up").is_lt());
        assert!(natural_cmp("a", "a1").is_lt());
        assert_eq!(natural_cmp("", ""), Ordering::Equal);
    }
}
