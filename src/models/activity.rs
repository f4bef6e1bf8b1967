// ============================================================================
// ACTIVITY MODELS - Activities and the ordered directory
// ============================================================================

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Activity details as sent by `GET /activities` (the name is the map key)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ActivityDetails {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Server order, never re-sorted
    pub participants: Vec<String>,
}

impl Activity {
    pub fn from_details(name: String, details: ActivityDetails) -> Self {
        Self {
            name,
            description: details.description,
            schedule: details.schedule,
            max_participants: details.max_participants,
            participants: details.participants,
        }
    }

    /// Remaining places. Negative when the server reports more participants than places.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }

    pub fn is_over_capacity(&self) -> bool {
        self.spots_left() < 0
    }
}

/// Snapshot of every activity, in the key order of the server response.
/// Replaced wholesale on each sync.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ActivityDirectory {
    activities: Vec<Activity>,
}

impl ActivityDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace by name. A replaced entry keeps its position.
    pub fn upsert(&mut self, activity: Activity) {
        match self.activities.iter_mut().find(|a| a.name == activity.name) {
            Some(existing) => *existing = activity,
            None => self.activities.push(activity),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter()
    }

    pub fn names(&self) -> Vec<String> {
        self.activities.iter().map(|a| a.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

impl FromIterator<Activity> for ActivityDirectory {
    fn from_iter<I: IntoIterator<Item = Activity>>(iter: I) -> Self {
        let mut directory = ActivityDirectory::new();
        for activity in iter {
            directory.upsert(activity);
        }
        directory
    }
}

struct DirectoryVisitor;

impl<'de> Visitor<'de> for DirectoryVisitor {
    type Value = ActivityDirectory;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of activity name to activity details")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut directory = ActivityDirectory::new();
        while let Some((name, details)) = map.next_entry::<String, ActivityDetails>()? {
            directory.upsert(Activity::from_details(name, details));
        }
        Ok(directory)
    }
}

impl<'de> Deserialize<'de> for ActivityDirectory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(DirectoryVisitor)
    }
}
