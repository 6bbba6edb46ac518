use indexmap::IndexMap;

use super::PropKind;

/// An ordered set of prop names and the kind of value each accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropShape(IndexMap<String, PropKind>);

impl PropShape {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    pub fn with(mut self, key: impl Into<String>, kind: PropKind) -> Self {
        self.insert(key, kind);
        self
    }

    /// Inserts or replaces `key`.
    pub fn insert(&mut self, key: impl Into<String>, kind: PropKind) {
        self.0.insert(key.into(), kind);
    }

    /// Adds every key of `other` that this shape doesn't already have.
    pub fn fill_from(&mut self, other: &PropShape) {
        for (key, kind) in other.iter() {
            if !self.contains(key) {
                self.0.insert(key.clone(), kind.clone());
            }
        }
    }

    /// This shape without the keys present in `other`.
    pub fn omit(&self, other: &PropShape) -> PropShape {
        self.iter()
            .filter(|(key, _)| !other.contains(key))
            .map(|(key, kind)| (key.clone(), kind.clone()))
            .collect()
    }

    pub fn get(&self, key: &str) -> Option<&PropKind> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PropKind)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, PropKind)> for PropShape {
    fn from_iter<I: IntoIterator<Item = (K, PropKind)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(key, kind)| (key.into(), kind)).collect())
    }
}

/// Hook props merged over a target's native props.
///
/// An empty hook shape leaves the native shape untouched. Otherwise hook keys
/// win and native keys fill the gaps.
pub fn merge_props_of(hook: &PropShape, native: &PropShape) -> PropShape {
    if hook.is_empty() {
        return native.clone();
    }

    let mut merged = hook.clone();
    merged.fill_from(native);
    merged
}

/// Generic props over the result of [`merge_props_of`].
pub fn merge_generic(generic: &PropShape, hook: &PropShape, native: &PropShape) -> PropShape {
    let mut merged = generic.clone();
    merged.fill_from(&merge_props_of(hook, native).omit(generic));
    merged
}

/// Picks [`merge_generic`] when the caller supplied generic props and
/// [`merge_props_of`] otherwise.
pub fn generic_middleware(generic: &PropShape, hook: &PropShape, native: &PropShape) -> PropShape {
    if generic.is_empty() {
        merge_props_of(hook, native)
    } else {
        merge_generic(generic, hook, native)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn native() -> PropShape {
        PropShape::new()
            .with("type", PropKind::String)
            .with("disabled", PropKind::Bool)
            .with("tabIndex", PropKind::Number)
    }

    #[test]
    fn test_empty_hook_keeps_native_shape() {
        assert_eq!(merge_props_of(&PropShape::new(), &native()), native());
    }

    #[test]
    fn test_hook_wins_over_native() {
        let hook = PropShape::new().with("tabIndex", PropKind::String);
        let merged = merge_props_of(&hook, &native());

        assert_eq!(merged.get("tabIndex"), Some(&PropKind::String));
        assert_eq!(merged.get("disabled"), Some(&PropKind::Bool));
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn test_generic_wins_over_hook_and_native() {
        let hook = PropShape::new()
            .with("tabIndex", PropKind::String)
            .with("isLoading", PropKind::Bool);
        let generic = PropShape::new()
            .with("tabIndex", PropKind::Bool)
            .with("isLoading", PropKind::Number);

        let merged = merge_generic(&generic, &hook, &native());

        assert_eq!(merged.get("tabIndex"), Some(&PropKind::Bool));
        assert_eq!(merged.get("isLoading"), Some(&PropKind::Number));
        assert_eq!(merged.get("type"), Some(&PropKind::String));
    }

    #[test]
    fn test_middleware_without_generic_props() {
        let hook = PropShape::new().with("isLoading", PropKind::Bool);
        assert_eq!(
            generic_middleware(&PropShape::new(), &hook, &native()),
            merge_props_of(&hook, &native())
        );
    }

    #[test]
    fn test_omit_preserves_order() {
        let omitted = native().omit(&PropShape::new().with("disabled", PropKind::Any));
        let keys: Vec<_> = omitted.keys().cloned().collect();
        assert_eq!(keys, vec!["type", "tabIndex"]);
    }
}
