use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::catalogue::{CUSTOM, NA};

pub const SUBJECT_FIELDS: [&str; 16] = [
    "age",
    "gender",
    "ethnicity",
    "body_type",
    "hair",
    "face",
    "expression",
    "gaze",
    "hands",
    "skin_texture",
    "skin_details",
    "extras",
    "outfit",
    "accessories",
    "footwear",
    "pose",
];

pub const SCENE_FIELDS: [&str; 10] = [
    "location",
    "time",
    "weather",
    "atmosphere",
    "props",
    "background",
    "era",
    "action",
    "story",
    "lighting",
];

pub const COMPOSITION_FIELDS: [&str; 2] = ["framing", "camera_angle"];

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => String::new(),
        Value::String(text) => text,
        Value::Number(number) => {
            if number.as_f64() == Some(0.0) {
                String::new()
            } else {
                number.to_string()
            }
        }
        Value::Bool(flag) => flag.to_string(),
        other => other.to_string(),
    })
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subject {
    #[serde(deserialize_with = "lenient_string")]
    pub age: String,
    #[serde(deserialize_with = "lenient_string")]
    pub gender: String,
    #[serde(deserialize_with = "lenient_string")]
    pub ethnicity: String,
    #[serde(deserialize_with = "lenient_string")]
    pub body_type: String,
    #[serde(deserialize_with = "lenient_string")]
    pub body_type_custom: String,
    #[serde(deserialize_with = "lenient_string")]
    pub hair: String,
    #[serde(deserialize_with = "lenient_string")]
    pub face: String,
    #[serde(deserialize_with = "lenient_string")]
    pub expression: String,
    #[serde(deserialize_with = "lenient_string")]
    pub gaze: String,
    #[serde(deserialize_with = "lenient_string")]
    pub hands: String,
    #[serde(deserialize_with = "lenient_string")]
    pub skin_texture: String,
    #[serde(deserialize_with = "lenient_string")]
    pub skin_details: String,
    #[serde(deserialize_with = "lenient_string")]
    pub extras: String,
    #[serde(deserialize_with = "lenient_string")]
    pub outfit: String,
    #[serde(deserialize_with = "lenient_string")]
    pub accessories: String,
    #[serde(deserialize_with = "lenient_string")]
    pub footwear: String,
    #[serde(deserialize_with = "lenient_string")]
    pub pose: String,
}

impl Subject {
    pub fn reset_defaults() -> Self {
        Subject {
            gender: "female".to_string(),
            ethnicity: NA.to_string(),
            body_type: NA.to_string(),
            ..Subject::default()
        }
    }

    pub fn effective_body_type(&self) -> &str {
        if self.body_type == CUSTOM {
            &self.body_type_custom
        } else {
            &self.body_type
        }
    }

    pub fn entries(&self) -> [(&'static str, &str); 16] {
        [
            ("age", self.age.as_str()),
            ("gender", self.gender.as_str()),
            ("ethnicity", self.ethnicity.as_str()),
            ("body_type", self.effective_body_type()),
            ("hair", self.hair.as_str()),
            ("face", self.face.as_str()),
            ("expression", self.expression.as_str()),
            ("gaze", self.gaze.as_str()),
            ("hands", self.hands.as_str()),
            ("skin_texture", self.skin_texture.as_str()),
            ("skin_details", self.skin_details.as_str()),
            ("extras", self.extras.as_str()),
            ("outfit", self.outfit.as_str()),
            ("accessories", self.accessories.as_str()),
            ("footwear", self.footwear.as_str()),
            ("pose", self.pose.as_str()),
        ]
    }

    pub fn filled_count(&self) -> usize {
        let values = [
            &self.age,
            &self.gender,
            &self.ethnicity,
            &self.body_type,
            &self.body_type_custom,
            &self.hair,
            &self.face,
            &self.expression,
            &self.gaze,
            &self.hands,
            &self.skin_texture,
            &self.skin_details,
            &self.extras,
            &self.outfit,
            &self.accessories,
            &self.footwear,
            &self.pose,
        ];
        values
            .iter()
            .filter(|value| !value.trim().is_empty() && value.as_str() != NA)
            .count()
    }

    pub fn widget_values(&self, prefix: &str) -> BTreeMap<String, Value> {
        let mut map = BTreeMap::new();
        let Ok(Value::Object(fields)) = serde_json::to_value(self) else {
            return map;
        };
        for (key, value) in fields {
            map.insert(format!("{prefix}{key}"), value);
        }
        map
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scene {
    pub location: String,
    pub time: String,
    pub weather: String,
    pub atmosphere: String,
    pub props: String,
    pub background: String,
    pub era: String,
    pub action: String,
    pub story: String,
    pub lighting: String,
    pub framing: String,
    pub camera_angle: String,
}

impl Scene {
    pub fn reset_defaults() -> Self {
        Scene {
            time: NA.to_string(),
            weather: NA.to_string(),
            framing: NA.to_string(),
            camera_angle: NA.to_string(),
            ..Scene::default()
        }
    }

    pub fn scene_entries(&self) -> [(&'static str, &str); 10] {
        [
            ("location", self.location.as_str()),
            ("time", self.time.as_str()),
            ("weather", self.weather.as_str()),
            ("atmosphere", self.atmosphere.as_str()),
            ("props", self.props.as_str()),
            ("background", self.background.as_str()),
            ("era", self.era.as_str()),
            ("action", self.action.as_str()),
            ("story", self.story.as_str()),
            ("lighting", self.lighting.as_str()),
        ]
    }

    pub fn composition_entries(&self) -> [(&'static str, &str); 2] {
        [("framing", self.framing.as_str()), ("camera_angle", self.camera_angle.as_str())]
    }

    pub fn widget_values(&self) -> BTreeMap<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(fields)) => fields.into_iter().collect(),
            _ => BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SubjectCount {
    #[default]
    One,
    Two,
    Three,
}

impl SubjectCount {
    pub fn get(&self) -> u8 {
        match self {
            SubjectCount::One => 1,
            SubjectCount::Two => 2,
            SubjectCount::Three => 3,
        }
    }

    pub fn includes(&self, slot: u8) -> bool {
        (1..=self.get()).contains(&slot)
    }
}

impl TryFrom<u8> for SubjectCount {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(SubjectCount::One),
            2 => Ok(SubjectCount::Two),
            3 => Ok(SubjectCount::Three),
            other => Err(format!("subject count must be 1-3, got {other}")),
        }
    }
}

impl From<SubjectCount> for u8 {
    fn from(value: SubjectCount) -> Self {
        value.get()
    }
}

impl FromStr for SubjectCount {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        let number: u8 = value
            .trim()
            .parse()
            .map_err(|_| anyhow!("Invalid subject count '{}'", value))?;
        SubjectCount::try_from(number).map_err(|err| anyhow!(err))
    }
}

impl fmt::Display for SubjectCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonRecord {
    #[serde(flatten)]
    pub subject: Subject,
    #[serde(rename = "_status", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl PersonRecord {
    /// Blank, empty (`{}`/`null`) or malformed input yields `None`; callers
    /// treat that as "not connected".
    pub fn parse(raw: Option<&str>) -> Option<PersonRecord> {
        let raw = raw?.trim();
        if raw.is_empty() {
            return None;
        }
        let value = match serde_json::from_str::<Value>(raw) {
            Ok(Value::Null) => return None,
            Ok(Value::Object(map)) if map.is_empty() => return None,
            Ok(value) => value,
            Err(err) => {
                tracing::warn!("Ignoring unparsable person record: {}", err);
                return None;
            }
        };
        match serde_json::from_value::<PersonRecord>(value) {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::warn!("Ignoring unparsable person record: {}", err);
                None
            }
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_body_type_uses_free_text() {
        let subject = Subject {
            body_type: CUSTOM.to_string(),
            body_type_custom: "broad-shouldered swimmer".to_string(),
            ..Subject::default()
        };
        assert_eq!(subject.effective_body_type(), "broad-shouldered swimmer");
        assert_eq!(subject.entries()[3], ("body_type", "broad-shouldered swimmer"));
    }

    #[test]
    fn entry_order_matches_field_table() {
        let subject = Subject::default();
        let names: Vec<&str> = subject.entries().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, SUBJECT_FIELDS.to_vec());

        let scene = Scene::default();
        let names: Vec<&str> = scene.scene_entries().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, SCENE_FIELDS.to_vec());
    }

    #[test]
    fn person_record_parses_numbers_and_status() {
        let record =
            PersonRecord::parse(Some(r#"{"age": 32, "gender": "male", "_status": "[MANUAL] 2/17 fields set"}"#))
                .unwrap();
        assert_eq!(record.subject.age, "32");
        assert_eq!(record.subject.gender, "male");
        assert_eq!(record.subject.hair, "");
        assert_eq!(record.status.as_deref(), Some("[MANUAL] 2/17 fields set"));

        let zero = PersonRecord::parse(Some(r#"{"age": 0}"#)).unwrap();
        assert_eq!(zero.subject.age, "");
    }

    #[test]
    fn malformed_person_record_is_absent() {
        assert!(PersonRecord::parse(Some("{not json")).is_none());
        assert!(PersonRecord::parse(Some("   ")).is_none());
        assert!(PersonRecord::parse(None).is_none());
        assert!(PersonRecord::parse(Some("[1, 2]")).is_none());
    }

    #[test]
    fn empty_person_record_counts_as_disconnected() {
        assert!(PersonRecord::parse(Some("{}")).is_none());
        assert!(PersonRecord::parse(Some(" { } ")).is_none());
        assert!(PersonRecord::parse(Some("null")).is_none());
        assert!(PersonRecord::parse(Some(r#"{"hair": ""}"#)).is_some());
    }

    #[test]
    fn filled_count_ignores_na_and_blank() {
        let subject = Subject {
            age: "25".to_string(),
            ethnicity: NA.to_string(),
            hair: "  ".to_string(),
            pose: "walking".to_string(),
            ..Subject::reset_defaults()
        };
        assert_eq!(subject.filled_count(), 3);
    }

    #[test]
    fn subject_count_bounds() {
        assert_eq!("2".parse::<SubjectCount>().unwrap(), SubjectCount::Two);
        assert!("4".parse::<SubjectCount>().is_err());
        assert!(SubjectCount::Two.includes(2));
        assert!(!SubjectCount::Two.includes(3));
    }

    #[test]
    fn widget_values_are_prefixed() {
        let subject = Subject {
            hair: "short black hair, wavy".to_string(),
            ..Subject::default()
        };
        let map = subject.widget_values("person_1_");
        assert_eq!(
            map.get("person_1_hair"),
            Some(&Value::String("short black hair, wavy".to_string()))
        );
        assert_eq!(map.len(), 17);
    }
}
