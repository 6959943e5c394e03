//! Caller-supplied extension filter, parsed from a `|`-delimited list.

use std::collections::BTreeSet;

/// Set of accepted extensions. Tokens may be written as `zip` or `.zip`; matching ignores ASCII
/// case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionFilter {
    extensions: BTreeSet<String>,
}

impl ExtensionFilter {
    /// Split `list` on `|`. Empty tokens are dropped, so `"txt||zip|"` holds two extensions.
    pub fn parse(list: &str) -> Self {
        let extensions = list
            .split('|')
            .map(str::trim)
            .map(|token| token.strip_prefix('.').unwrap_or(token))
            .filter(|token| !token.is_empty())
            .map(str::to_ascii_lowercase)
            .collect();
        Self { extensions }
    }

    pub fn matches(&self, ext: Option<&str>) -> bool {
        match ext {
            Some(ext) => self.extensions.contains(&ext.to_ascii_lowercase()),
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    /// Normalised extensions in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }
}

impl From<&str> for ExtensionFilter {
    fn from(list: &str) -> Self {
        Self::parse(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bare_and_dotted_tokens() {
        let filter = ExtensionFilter::parse("txt|.ZIP|  sfc ");
        assert_eq!(filter.iter().collect::<Vec<_>>(), vec!["sfc", "txt", "zip"]);
        assert!(filter.matches(Some("TXT")));
        assert!(filter.matches(Some("zip")));
        assert!(!filter.matches(Some("7z")));
        assert!(!filter.matches(None));
    }

    #[test]
    fn drops_empty_tokens() {
        let filter = ExtensionFilter::parse("txt||zip|");
        assert_eq!(filter.len(), 2);
        assert!(ExtensionFilter::parse("").is_empty());
        assert!(ExtensionFilter::parse("|.|").is_empty());
    }
}
