use serde::de::value::MapAccessDeserializer;
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::ops::Deref;

/// A directed reference from one object to another: "after this object, run
/// that one".
///
/// Descriptor authors may write a reference as a bare name or as a full
/// `{ object: ... }` entry; both decode to this record. The identifier is
/// taken as-is — emptiness checks belong to whoever consumes the graph.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Then {
    pub object: String,
}

impl Then {
    /// Create a reference to the named object.
    pub fn new(object: impl Into<String>) -> Self {
        Self {
            object: object.into(),
        }
    }
}

/// The canonical entry shape. The map path of both visitors delegates here,
/// so a malformed entry surfaces this decode's own error, location included.
#[derive(Deserialize)]
struct ThenEntry {
    object: String,
}

impl From<ThenEntry> for Then {
    fn from(entry: ThenEntry) -> Self {
        Self {
            object: entry.object,
        }
    }
}

impl<'de> Deserialize<'de> for Then {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ThenVisitor;

        impl<'de> Visitor<'de> for ThenVisitor {
            type Value = Then;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object name or an `object:` entry")
            }

            fn visit_str<E>(self, value: &str) -> Result<Then, E>
            where
                E: de::Error,
            {
                Ok(Then::new(value))
            }

            fn visit_map<A>(self, map: A) -> Result<Then, A::Error>
            where
                A: MapAccess<'de>,
            {
                ThenEntry::deserialize(MapAccessDeserializer::new(map)).map(Then::from)
            }
        }

        deserializer.deserialize_any(ThenVisitor)
    }
}

/// An ordered list of [`Then`] references.
///
/// A field of this type accepts a single entry (bare name or full entry) in
/// place of a one-element sequence, so
///
/// ```yaml
/// then: build
/// ```
///
/// decodes the same as
///
/// ```yaml
/// then:
///   - object: build
/// ```
///
/// Declaration order is preserved. An empty sequence is an empty list.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ThenList(Vec<Then>);

impl<'de> Deserialize<'de> for ThenList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ThenListVisitor;

        impl<'de> Visitor<'de> for ThenListVisitor {
            type Value = ThenList;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object reference or a sequence of object references")
            }

            fn visit_str<E>(self, value: &str) -> Result<ThenList, E>
            where
                E: de::Error,
            {
                Ok(ThenList(vec![Then::new(value)]))
            }

            fn visit_map<A>(self, map: A) -> Result<ThenList, A::Error>
            where
                A: MapAccess<'de>,
            {
                let entry = ThenEntry::deserialize(MapAccessDeserializer::new(map))?;
                Ok(ThenList(vec![entry.into()]))
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<ThenList, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut list = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(then) = seq.next_element::<Then>()? {
                    list.push(then);
                }
                Ok(ThenList(list))
            }
        }

        deserializer.deserialize_any(ThenListVisitor)
    }
}

impl ThenList {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Then> {
        self.0.iter()
    }

    /// Consume self and return the inner `Vec`.
    pub fn into_inner(self) -> Vec<Then> {
        self.0
    }
}

impl Deref for ThenList {
    type Target = [Then];

    fn deref(&self) -> &[Then] {
        &self.0
    }
}

impl From<Vec<Then>> for ThenList {
    fn from(list: Vec<Then>) -> Self {
        Self(list)
    }
}

impl IntoIterator for ThenList {
    type Item = Then;
    type IntoIter = std::vec::IntoIter<Then>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ThenList {
    type Item = &'a Then;
    type IntoIter = std::slice::Iter<'a, Then>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_name_decodes_to_record() {
        let then: Then = serde_yaml::from_str("build").unwrap();
        assert_eq!(then, Then::new("build"));
    }

    #[test]
    fn full_entry_decodes_to_record() {
        let then: Then = serde_yaml::from_str("object: build").unwrap();
        assert_eq!(then.object, "build");
    }

    #[test]
    fn empty_name_is_not_rejected() {
        let then: Then = serde_yaml::from_str("\"\"").unwrap();
        assert_eq!(then.object, "");
    }

    #[test]
    fn numeric_node_is_rejected() {
        assert!(serde_yaml::from_str::<Then>("5").is_err());
    }

    #[test]
    fn entry_with_bad_identifier_reports_cause_and_location() {
        let err = serde_yaml::from_str::<Then>("object: 5").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("invalid type: integer"), "{msg}");
        let location = err.location().expect("error should carry a location");
        assert_eq!(location.line(), 1);
    }

    #[test]
    fn bare_name_decodes_to_one_element_list() {
        let list: ThenList = serde_yaml::from_str("build").unwrap();
        assert_eq!(list.into_inner(), vec![Then::new("build")]);
    }

    #[test]
    fn unwrapped_entry_decodes_to_one_element_list() {
        let list: ThenList = serde_yaml::from_str("object: build").unwrap();
        assert_eq!(list.into_inner(), vec![Then::new("build")]);
    }

    #[test]
    fn sequence_preserves_declaration_order() {
        let list: ThenList = serde_yaml::from_str("[build, test]").unwrap();
        assert_eq!(
            list.into_inner(),
            vec![Then::new("build"), Then::new("test")]
        );
    }

    #[test]
    fn sequence_elements_may_mix_both_shapes() {
        let list: ThenList = serde_yaml::from_str("- build\n- object: test\n").unwrap();
        assert_eq!(
            list.into_inner(),
            vec![Then::new("build"), Then::new("test")]
        );
    }

    #[test]
    fn empty_sequence_is_empty_list() {
        let list: ThenList = serde_yaml::from_str("[]").unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn sequence_with_bad_element_fails() {
        assert!(serde_yaml::from_str::<ThenList>("[build, 5]").is_err());
    }

    #[test]
    fn record_serializes_in_canonical_form() {
        let yaml = serde_yaml::to_string(&Then::new("build")).unwrap();
        assert_eq!(yaml, "object: build\n");
    }

    #[test]
    fn list_serializes_as_sequence_of_records() {
        let list = ThenList::from(vec![Then::new("build"), Then::new("test")]);
        let yaml = serde_yaml::to_string(&list).unwrap();
        assert_eq!(yaml, "- object: build\n- object: test\n");
    }
}
