//! The roster: every activity keyed by its unique name.
//!
//! On the wire the roster is a plain JSON object. `serde` maps are either
//! hashed or sorted, so the roster keeps its entries in a `Vec` and implements
//! the map (de)serialization by hand to preserve the server's key order, which
//! is the order cards and select options are rendered in.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::model::activity::Activity;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Roster {
    entries: Vec<(String, Activity)>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an activity, replacing (in place) any existing activity with the
    /// same name. Returns the replaced activity, if any.
    pub fn insert(&mut self, name: impl Into<String>, activity: Activity) -> Option<Activity> {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, activity)),
            None => {
                self.entries.push((name, activity));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, activity)| activity)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.entries
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, activity)| activity)
    }

    /// Iterates `(name, activity)` pairs in roster order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries
            .iter()
            .map(|(name, activity)| (name.as_str(), activity))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, Activity)> for Roster {
    fn from_iter<T: IntoIterator<Item = (N, Activity)>>(iter: T) -> Self {
        let mut roster = Roster::new();
        for (name, activity) in iter {
            roster.insert(name, activity);
        }
        roster
    }
}

impl Serialize for Roster {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, activity) in &self.entries {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}

struct RosterVisitor;

impl<'de> Visitor<'de> for RosterVisitor {
    type Value = Roster;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of activity name to activity")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut roster = Roster::new();
        // Duplicate keys: last one wins, like a JSON object parsed into a map.
        while let Some((name, activity)) = access.next_entry::<String, Activity>()? {
            roster.insert(name, activity);
        }
        Ok(roster)
    }
}

impl<'de> Deserialize<'de> for Roster {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RosterVisitor)
    }
}
