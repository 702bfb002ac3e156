//! Per-target argument tables.
use std::collections::BTreeMap;

const EMPTY_ARGS: &[String] = &[];

/// Mapping from target name to the argument list the user configured for
/// it, with a `"default"` fallback entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentTable {
    entries: BTreeMap<String, Vec<String>>,
}

impl ArgumentTable {
    /// Key consulted when no entry matches the target name.
    pub const DEFAULT_KEY: &'static str = "default";

    pub fn new(entries: BTreeMap<String, Vec<String>>) -> Self {
        Self { entries }
    }

    /// Look up the arguments for `target_name`.
    ///
    /// Precedence: exact match, then the `"default"` entry, then empty.
    pub fn resolve(&self, target_name: &str) -> &[String] {
        if let Some(args) = self.entries.get(target_name) {
            return args;
        }
        if let Some(args) = self.entries.get(Self::DEFAULT_KEY) {
            return args;
        }
        EMPTY_ARGS
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl FromIterator<(String, Vec<String>)> for ArgumentTable {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
