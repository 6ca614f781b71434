//! String interner for identifier storage.
//!
//! Identifiers live for the whole program run, so interned text is leaked to
//! `'static` and handed out without holding the lock.

use super::Name;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

/// Storage for interned strings.
struct InternTable {
    /// Map from string content to index.
    map: FxHashMap<&'static str, u32>,
    /// Storage for string contents, indexed by `Name`.
    strings: Vec<&'static str>,
}

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InternError {
    /// More than `u32::MAX` distinct identifiers.
    #[error("interner exceeded capacity: {count} strings, max is {max}", max = u32::MAX)]
    Overflow { count: usize },
}

/// Strings every interner starts with, at the indices their `Name`
/// constants expect.
const PREINTERNED: [&str; 2] = ["", "print"];

impl InternTable {
    fn with_preinterned() -> Self {
        let mut map = FxHashMap::default();
        let mut strings = Vec::with_capacity(PREINTERNED.len());
        for (index, s) in (0u32..).zip(PREINTERNED) {
            map.insert(s, index);
            strings.push(s);
        }
        Self { map, strings }
    }
}

/// String interner mapping identifier text to `Name` handles.
///
/// Uses a `RwLock` so the front end can intern through a shared reference
/// while the evaluator resolves names for diagnostics.
pub struct StringInterner {
    table: RwLock<InternTable>,
}

impl StringInterner {
    /// Create a new interner holding `""` (`Name::EMPTY`) and `print`
    /// (`Name::PRINT`).
    pub fn new() -> Self {
        Self {
            table: RwLock::new(InternTable::with_preinterned()),
        }
    }

    /// Try to intern a string, returning its Name or an error on overflow.
    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        // Fast path: check if already interned
        if let Some(&index) = self.table.read().map.get(s) {
            return Ok(Name::from_raw(index));
        }

        let mut guard = self.table.write();

        // Double-check after acquiring write lock
        if let Some(&index) = guard.map.get(s) {
            return Ok(Name::from_raw(index));
        }

        let index = u32::try_from(guard.strings.len()).map_err(|_| InternError::Overflow {
            count: guard.strings.len(),
        })?;
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        guard.strings.push(leaked);
        guard.map.insert(leaked, index);

        Ok(Name::from_raw(index))
    }

    /// Intern a string, returning its Name.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` identifiers are interned.
    /// Use `try_intern` for fallible interning.
    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Look up the string for a Name.
    ///
    /// Names from a different interner resolve to the empty string rather
    /// than panicking.
    pub fn lookup(&self, name: Name) -> &'static str {
        self.table
            .read()
            .strings
            .get(name.index())
            .copied()
            .unwrap_or("")
    }

    /// Number of interned strings, including the pre-interned ones.
    pub fn len(&self) -> usize {
        self.table.read().strings.len()
    }

    /// Check if nothing beyond the pre-interned strings has been interned.
    pub fn is_empty(&self) -> bool {
        self.len() <= PREINTERNED.len()
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}
