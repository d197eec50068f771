use std::{hash::BuildHasherDefault, sync::LazyLock};

use indexmap::IndexMap;
use rustc_hash::FxHasher;

use crate::{config::Breakpoints, error::BreakpointError, query::MediaQuery};

type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

static STANDARD: LazyLock<BreakpointTable> =
    LazyLock::new(|| BreakpointTable::build(&Breakpoints::default()));

/// The standard table, built on first use.
pub fn standard() -> &'static BreakpointTable {
    &STANDARD
}

/// Look up `key` in the standard table.
///
/// ```
/// assert_eq!(floem_breakpoints::lookup(">=tablet"), Some("(min-width: 768px)"));
/// assert_eq!(floem_breakpoints::lookup("Tablet"), None);
/// ```
pub fn lookup(key: &str) -> Option<&'static str> {
    standard().lookup(key)
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    query: MediaQuery,
    css: Box<str>,
}

/// An immutable map from breakpoint keys to media query strings.
///
/// Keys match exactly: no trimming, no case folding, and the single space in
/// a compound key is significant. Entries iterate in the order they were
/// generated, single-class keys first in ascending width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakpointTable {
    entries: FxIndexMap<Box<str>, Entry>,
}

impl BreakpointTable {
    pub fn new(config: &Breakpoints) -> Result<Self, BreakpointError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Generates entries from a configuration that has already been validated.
    fn build(config: &Breakpoints) -> Self {
        let mut entries = FxIndexMap::default();

        for bp in &config.classes {
            for key in bp.keys() {
                let Some(query) = bp.query(key.comparison) else {
                    continue;
                };
                let key = key.to_string();
                tracing::trace!(%key, %query, "breakpoint");
                entries.insert(key.into_boxed_str(), Entry::new(query));
            }
        }

        for compound in &config.compounds {
            let (Some(first), Some(second)) =
                (config.query(compound.first), config.query(compound.second))
            else {
                continue;
            };
            let key = compound.to_string();
            let query = first.and(&second);
            tracing::trace!(%key, %query, "compound breakpoint");
            entries.insert(key.into_boxed_str(), Entry::new(query));
        }

        tracing::debug!(entries = entries.len(), "built breakpoint table");
        Self { entries }
    }

    /// The media query string for `key`, or `None` if the table has no such key.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|entry| &*entry.css)
    }

    /// Like [`lookup`](Self::lookup), for callers that treat a missing key as an error.
    pub fn get(&self, key: &str) -> Result<&str, BreakpointError> {
        self.lookup(key)
            .ok_or_else(|| BreakpointError::KeyNotFound(key.to_string()))
    }

    pub fn query(&self, key: &str) -> Option<&MediaQuery> {
        self.entries.get(key).map(|entry| &entry.query)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|key| &**key)
    }

    /// `(key, css)` pairs in generation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, entry)| (&**key, &*entry.css))
    }
}

impl Entry {
    fn new(query: MediaQuery) -> Self {
        let css = query.to_string().into_boxed_str();
        Self { query, css }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for BreakpointTable {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, css) in self.iter() {
            map.serialize_entry(key, css)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::{BreakpointTable, standard};
    use crate::{
        config::{Breakpoints, SizeClassBreakpoint},
        error::BreakpointError,
        size_class::{SizeClass, Variants},
    };

    #[test]
    fn standard_is_shared() {
        assert!(std::ptr::eq(standard(), standard()));
    }

    #[test]
    fn new_matches_standard() {
        let table = BreakpointTable::new(&Breakpoints::default()).unwrap();
        assert_eq!(&table, standard());
    }

    #[test]
    fn get_reports_missing_key() {
        assert_eq!(standard().get("phone"), Ok("(max-width: 320px)"));
        assert_eq!(
            standard().get("watch"),
            Err(BreakpointError::KeyNotFound("watch".to_string()))
        );
    }

    #[test]
    fn typed_query() {
        let query = standard().query("<widescreen >=smallscreen").unwrap();
        assert_eq!(query.conditions().len(), 2);
        assert!(standard().query("widescreen").is_none());
    }

    #[test]
    fn generation_order() {
        let keys: Vec<_> = standard().keys().take(5).collect();
        assert_eq!(keys, ["phone", "<mobile", "<=mobile", ">=mobile", ">mobile"]);
        assert_eq!(standard().keys().last(), Some("<widescreen >=smallscreen"));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = Breakpoints {
            classes: vec![
                SizeClassBreakpoint::new(SizeClass::Tablet, 768, Variants::COMPARISONS),
                SizeClassBreakpoint::new(SizeClass::Mobile, 667, Variants::COMPARISONS),
            ],
            compounds: vec![],
        };
        assert!(BreakpointTable::new(&config).is_err());
    }

    #[test]
    fn custom_config() {
        let config = Breakpoints {
            classes: vec![
                SizeClassBreakpoint::new(SizeClass::Phone, 400, Variants::BARE | Variants::GT),
                SizeClassBreakpoint::new(SizeClass::Desktop, 1280, Variants::GE),
            ],
            compounds: vec![],
        };
        let table = BreakpointTable::new(&config).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.lookup("phone"), Some("(max-width: 400px)"));
        assert_eq!(table.lookup(">phone"), Some("(min-width: 401px)"));
        assert_eq!(table.lookup(">=desktop"), Some("(min-width: 1280px)"));
        assert!(!table.contains_key("<=desktop"));
    }

    #[test]
    fn empty_config() {
        let table = BreakpointTable::new(&Breakpoints {
            classes: vec![],
            compounds: vec![],
        })
        .unwrap();
        assert!(table.is_empty());
        assert_eq!(table.lookup("phone"), None);
    }
}
