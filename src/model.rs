// src/model.rs
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Signed so an over-subscribed roster shows a negative count.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }
}

/// Activity name -> activity, in the order the server listed them.
///
/// Deserialized by hand because the order of keys in the `/activities`
/// object is the display order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ActivityCatalog {
    entries: Vec<(String, Activity)>,
}

impl ActivityCatalog {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries.iter().map(|(n, a)| (n.as_str(), a))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// A repeated name keeps its first position and takes the later value.
    pub fn insert(&mut self, name: String, activity: Activity) {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = activity,
            None => self.entries.push((name, activity)),
        }
    }
}

impl FromIterator<(String, Activity)> for ActivityCatalog {
    fn from_iter<I: IntoIterator<Item = (String, Activity)>>(iter: I) -> Self {
        let mut catalog = ActivityCatalog::default();
        for (name, activity) in iter {
            catalog.insert(name, activity);
        }
        catalog
    }
}

impl<'de> Deserialize<'de> for ActivityCatalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = ActivityCatalog;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping activity names to activities")
            }

            fn visit_map<M: MapAccess<'de>>(self, mut map: M) -> Result<Self::Value, M::Error> {
                let mut catalog = ActivityCatalog::default();
                while let Some((name, activity)) = map.next_entry::<String, Activity>()? {
                    catalog.insert(name, activity);
                }
                Ok(catalog)
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}

/// 2xx body of signup / unregister.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MessageBody {
    #[serde(default)]
    pub message: String,
}

/// Non-2xx body. Validation errors put a list here instead of a string, so
/// it is only used when it is text.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DetailBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl DetailBody {
    pub fn text(&self) -> Option<String> {
        match &self.detail {
            Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get<'a>(catalog: &'a ActivityCatalog, name: &str) -> &'a Activity {
        catalog
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, a)| a)
            .unwrap()
    }

    const SAMPLE: &str = r#"{
        "Science Club": {
            "description": "Explore scientific experiments",
            "schedule": "Mondays, 3:30 PM - 4:30 PM",
            "max_participants": 18,
            "participants": ["ryan@mergington.edu", "natalie@mergington.edu"]
        },
        "Art Studio": {
            "description": "Create paintings and sculptures",
            "schedule": "Wednesdays, 3:30 PM - 5:00 PM",
            "max_participants": 20,
            "participants": []
        },
        "Basketball Team": {
            "description": "Competitive and recreational players welcome",
            "schedule": "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            "max_participants": 20,
            "participants": ["james@mergington.edu"]
        }
    }"#;

    #[test]
    fn catalog_keeps_server_order() {
        let catalog: ActivityCatalog = serde_json::from_str(SAMPLE).unwrap();
        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names, ["Science Club", "Art Studio", "Basketball Team"]);
    }

    #[test]
    fn spots_left_is_capacity_minus_roster() {
        let catalog: ActivityCatalog = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(get(&catalog, "Science Club").spots_left(), 16);
        assert_eq!(get(&catalog, "Art Studio").spots_left(), 20);
        assert_eq!(get(&catalog, "Basketball Team").spots_left(), 19);
    }

    #[test]
    fn overfull_roster_goes_negative() {
        let a = Activity {
            description: String::new(),
            schedule: String::new(),
            max_participants: 1,
            participants: vec!["a@x.com".into(), "b@y.com".into()],
        };
        assert_eq!(a.spots_left(), -1);
    }

    #[test]
    fn duplicate_names_keep_first_position() {
        let json = r#"{
            "A": {"description": "one", "schedule": "", "max_participants": 1, "participants": []},
            "B": {"description": "", "schedule": "", "max_participants": 1, "participants": []},
            "A": {"description": "two", "schedule": "", "max_participants": 1, "participants": []}
        }"#;
        let catalog: ActivityCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.names().collect::<Vec<_>>(), ["A", "B"]);
        assert_eq!(get(&catalog, "A").description, "two");
    }

    #[test]
    fn catalog_rejects_non_objects() {
        assert!(serde_json::from_str::<ActivityCatalog>("[]").is_err());
        assert!(serde_json::from_str::<ActivityCatalog>(r#"{"A": 3}"#).is_err());
    }

    #[test]
    fn detail_text_ignores_structured_details() {
        let b: DetailBody = serde_json::from_str(r#"{"detail": "Activity not found"}"#).unwrap();
        assert_eq!(b.text().as_deref(), Some("Activity not found"));

        let b: DetailBody =
            serde_json::from_str(r#"{"detail": [{"loc": ["query", "email"], "msg": "field required"}]}"#)
                .unwrap();
        assert_eq!(b.text(), None);

        let b: DetailBody = serde_json::from_str(r#"{"detail": ""}"#).unwrap();
        assert_eq!(b.text(), None);

        let b: DetailBody = serde_json::from_str("{}").unwrap();
        assert_eq!(b.text(), None);
    }
}
