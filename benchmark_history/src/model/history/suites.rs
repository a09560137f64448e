//!
//! The suite-name-to-entries mapping.
//!

use serde::de;
use serde::ser::SerializeMap;
use serde::Deserialize;
use serde::Serialize;

use crate::model::history::entry::Entry;

///
/// The suite-name-to-entries mapping.
///
/// Suites keep their insertion order, which is also the order they are written in.
/// Each suite's entries are in chronological order.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Suites(Vec<(String, Vec<Entry>)>);

impl Suites {
    ///
    /// Returns the entries of the suite, if it exists.
    ///
    pub fn get(&self, name: &str) -> Option<&[Entry]> {
        self.0
            .iter()
            .find(|(suite, _)| suite == name)
            .map(|(_, entries)| entries.as_slice())
    }

    ///
    /// Returns the mutable entries of the suite, if it exists.
    ///
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Vec<Entry>> {
        self.0
            .iter_mut()
            .find(|(suite, _)| suite == name)
            .map(|(_, entries)| entries)
    }

    ///
    /// Returns the entries of the suite, creating it after all existing suites if it is new.
    ///
    pub fn get_or_insert(&mut self, name: &str) -> &mut Vec<Entry> {
        let index = match self.0.iter().position(|(suite, _)| suite == name) {
            Some(index) => index,
            None => {
                self.0.push((name.to_owned(), Vec::new()));
                self.0.len() - 1
            }
        };
        &mut self.0[index].1
    }

    ///
    /// Iterates over the suite names in order.
    ///
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(name, _)| name.as_str())
    }
}

impl Serialize for Suites {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, entries) in self.0.iter() {
            map.serialize_entry(name, entries)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Suites {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(SuitesVisitor)
    }
}

///
/// Collects map entries in document order.
///
struct SuitesVisitor;

impl<'de> de::Visitor<'de> for SuitesVisitor {
    type Value = Suites;

    fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str("a map from suite names to lists of entries")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: de::MapAccess<'de>,
    {
        let mut suites: Vec<(String, Vec<Entry>)> =
            Vec::with_capacity(access.size_hint().unwrap_or_default());
        while let Some((name, entries)) = access.next_entry::<String, Vec<Entry>>()? {
            if suites.iter().any(|(suite, _)| suite == &name) {
                return Err(de::Error::custom(format!("duplicate suite `{name}`")));
            }
            suites.push((name, entries));
        }
        Ok(Suites(suites))
    }
}
