//! Constant scopes.
//!
//! A scope maps identifier names to their known constant values. The
//! caller (normally the semantic analyzer walking declaration sections)
//! builds it and hands it to the classifier; the classifier only reads.

use rustc_hash::FxHashMap;

use crate::value::ConstValue;

/// A caller-supplied mapping from identifier name to constant value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConstScope {
    values: FxHashMap<String, ConstValue>,
}

impl ConstScope {
    /// Create an empty scope.
    pub fn new() -> Self {
        ConstScope {
            values: FxHashMap::default(),
        }
    }

    /// Record a name's constant value. A later definition of the same
    /// name replaces the earlier one.
    pub fn define(&mut self, name: impl Into<String>, value: ConstValue) {
        self.values.insert(name.into(), value);
    }

    /// Look up a name.
    pub fn lookup(&self, name: &str) -> Option<&ConstValue> {
        self.values.get(name)
    }

    /// True when the name has a recorded value.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of recorded names.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no name is recorded.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_define_and_lookup() {
        let mut scope = ConstScope::new();
        assert!(scope.is_empty());
        scope.define("max", ConstValue::Int(100));
        assert_eq!(scope.lookup("max"), Some(&ConstValue::Int(100)));
        assert_eq!(scope.lookup("min"), None);
        assert!(scope.contains("max"));
        assert_eq!(scope.len(), 1);
    }

    #[test]
    fn test_redefinition_replaces() {
        let mut scope = ConstScope::new();
        scope.define("x", ConstValue::Int(1));
        scope.define("x", ConstValue::Char(b'a'));
        assert_eq!(scope.lookup("x"), Some(&ConstValue::Char(b'a')));
        assert_eq!(scope.len(), 1);
    }
}
