use crate::then::ThenList;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::ops::Deref;

/// A named entity declared in a descriptor.
///
/// Only `name` and `then` are interpreted at this layer; every other key in
/// the object's body is carried verbatim in `config` for downstream
/// consumers.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Object {
    /// The object's identity. Always equal to the key it is stored under in
    /// an [`ObjectMap`]; an inline `name` in the source body is overwritten
    /// without warning.
    #[serde(default)]
    pub name: String,
    /// Objects that follow this one.
    #[serde(default, skip_serializing_if = "ThenList::is_empty")]
    pub then: ThenList,
    /// Uninterpreted per-object settings.
    #[serde(flatten)]
    pub config: BTreeMap<String, Value>,
}

/// A mapping of object names to objects.
///
/// Decoding injects each key into its value's `name` field, so the key is
/// the single source of truth for identity: a name always exists and always
/// matches the key the object is stored under.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(from = "BTreeMap<String, Object>")]
pub struct ObjectMap(BTreeMap<String, Object>);

impl From<BTreeMap<String, Object>> for ObjectMap {
    fn from(map: BTreeMap<String, Object>) -> Self {
        Self(
            map.into_iter()
                .map(|(name, mut object)| {
                    object.name.clone_from(&name);
                    (name, object)
                })
                .collect(),
        )
    }
}

impl ObjectMap {
    pub fn get(&self, name: &str) -> Option<&Object> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::collections::btree_map::Iter<'_, String, Object> {
        self.0.iter()
    }
}

impl Deref for ObjectMap {
    type Target = BTreeMap<String, Object>;

    fn deref(&self) -> &BTreeMap<String, Object> {
        &self.0
    }
}

impl IntoIterator for ObjectMap {
    type Item = (String, Object);
    type IntoIter = std::collections::btree_map::IntoIter<String, Object>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ObjectMap {
    type Item = (&'a String, &'a Object);
    type IntoIter = std::collections::btree_map::Iter<'a, String, Object>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
