//! Element identifiers backed by a global string interner.
//!
//! Layout engines hand out string identifiers for every element they place.
//! [`ElementId`] interns them so ids are `Copy`, cheap to hash, and cheap to
//! carry around in tags and lookup tables.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for element identifiers.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn with_interner<R>(f: impl FnOnce(&mut DefaultStringInterner) -> R) -> R {
    let mut interner = INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    f(&mut interner)
}

/// Identifier of one laid-out element, as assigned by the layout engine.
///
/// # Examples
///
/// ```
/// use cyview_core::identifier::ElementId;
///
/// let a = ElementId::new("n0");
/// let b: ElementId = "n0".into();
/// assert_eq!(a, b);
/// assert_eq!(a, "n0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(DefaultSymbol);

impl ElementId {
    /// Creates an `ElementId` from a string, interning it on first use.
    pub fn new(name: &str) -> Self {
        Self(with_interner(|interner| interner.get_or_intern(name)))
    }

    /// Returns the interned string for this id.
    pub fn as_string(self) -> String {
        with_interner(|interner| {
            interner
                .resolve(self.0)
                .map(str::to_owned)
                .unwrap_or_default()
        })
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

impl From<&str> for ElementId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for ElementId {
    fn eq(&self, other: &str) -> bool {
        with_interner(|interner| interner.resolve(self.0) == Some(other))
    }
}

impl PartialEq<&str> for ElementId {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_interns_equal_strings() {
        let id1 = ElementId::new("n0");
        let id2 = ElementId::new("n0");
        let id3 = ElementId::new("e0");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_display_round_trips() {
        let id = ElementId::new("edge_12");
        assert_eq!(id.to_string(), "edge_12");
        assert_eq!(id, "edge_12");
    }

    #[test]
    fn test_from_str_slice() {
        let id: ElementId = "shape_3".into();
        assert_eq!(id, ElementId::new("shape_3"));
    }
}
