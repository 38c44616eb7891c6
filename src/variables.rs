use std::collections::BTreeMap;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::catalogue::Genre;
use crate::subject::{Scene, Subject, SubjectCount, SUBJECT_FIELDS};

const UNSET_MARKERS: [&str; 6] = ["", "na", "n/a", "none", "skip", "custom"];
const QUOTE_TRIGGERS: [char; 6] = [':', '#', '\'', '"', '\n', '{'];

pub trait FieldValue {
    fn is_unset(&self) -> bool;
    fn render(&self) -> String;
}

impl FieldValue for str {
    fn is_unset(&self) -> bool {
        let normalized = self.trim().to_lowercase();
        UNSET_MARKERS.contains(&normalized.as_str())
    }

    fn render(&self) -> String {
        format_value(self)
    }
}

impl FieldValue for String {
    fn is_unset(&self) -> bool {
        self.as_str().is_unset()
    }

    fn render(&self) -> String {
        format_value(self)
    }
}

macro_rules! numeric_field_value {
    ($($ty:ty),*) => {
        $(
            impl FieldValue for $ty {
                #[allow(clippy::float_cmp)]
                fn is_unset(&self) -> bool {
                    *self == (0 as $ty)
                }

                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

numeric_field_value!(u8, u32, i32, i64, f64);

impl<T: FieldValue + ?Sized> FieldValue for &T {
    fn is_unset(&self) -> bool {
        (**self).is_unset()
    }

    fn render(&self) -> String {
        (**self).render()
    }
}

/// Quotes values containing `: # ' " {` or a newline; inner double quotes are
/// backslash-escaped and nothing else is. Not a general YAML emitter.
pub fn format_value(value: &str) -> String {
    if value.contains(QUOTE_TRIGGERS) {
        format!("\"{}\"", value.replace('"', "\\\""))
    } else {
        value.to_string()
    }
}

pub fn field_line<V: FieldValue + ?Sized>(name: &str, value: &V) -> String {
    if value.is_unset() {
        format!("{name}: NA")
    } else {
        format!("{name}: {}", value.render())
    }
}

fn subject_lines(prefix: &str, subject: &Subject) -> Vec<String> {
    subject
        .entries()
        .iter()
        .map(|(name, value)| field_line(&format!("{prefix}{name}"), *value))
        .collect()
}

fn placeholder_lines(prefix: &str) -> Vec<String> {
    SUBJECT_FIELDS
        .iter()
        .map(|name| format!("{prefix}{name}: NA"))
        .collect()
}

fn section(title: &str) -> String {
    format!("# === {title} ===")
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationRequest {
    pub genre: Genre,
    pub subject_count: SubjectCount,
    pub aspect: String,
    pub subjects: Vec<Subject>,
    pub interaction: String,
    pub scene: Scene,
}

impl GenerationRequest {
    fn subject_slot(&self, slot: u8) -> Option<&Subject> {
        if !self.subject_count.includes(slot) {
            return None;
        }
        self.subjects.get(usize::from(slot) - 1)
    }
}

pub fn build_variables(request: &GenerationRequest) -> String {
    let mut lines = vec![
        section("MASTER SETTINGS"),
        field_line("subjects", &request.subject_count.get()),
        format!("aspect: {}", request.aspect),
        String::new(),
    ];

    for slot in 1..=3u8 {
        let prefix = if slot == 1 {
            String::new()
        } else {
            format!("s{slot}_")
        };
        lines.push(section(&format!("SUBJECT {slot}")));
        match request.subject_slot(slot) {
            Some(subject) => lines.extend(subject_lines(&prefix, subject)),
            None => lines.extend(placeholder_lines(&prefix)),
        }
        lines.push(String::new());
    }

    lines.push(section("INTERACTION"));
    if request.subject_count.get() >= 2 {
        lines.push(field_line("interaction", request.interaction.as_str()));
    } else {
        lines.push("interaction: NA".to_string());
    }
    lines.push(String::new());

    lines.push(section("SCENE"));
    for (name, value) in request.scene.scene_entries() {
        lines.push(field_line(name, value));
    }
    lines.push(String::new());

    lines.push(section("COMPOSITION"));
    for (name, value) in request.scene.composition_entries() {
        lines.push(field_line(name, value));
    }

    lines.join("\n")
}

pub type Variables = BTreeMap<String, String>;

fn unquote(value: &str) -> String {
    match value
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    {
        Some(inner) => inner.replace("\\\"", "\""),
        None => value.to_string(),
    }
}

fn ends_with_closing_quote(text: &str) -> bool {
    text.ends_with('"') && !text.ends_with("\\\"")
}

/// Reads `key: value` lines back. Values are taken verbatim; only the
/// serializer's own `"..."` quoting and `\"` escapes are undone.
pub fn parse_variables(text: &str) -> Result<Variables> {
    let mut variables = Variables::new();
    let mut lines = text.lines().enumerate();

    while let Some((index, line)) = lines.next() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let (key, mut value) = match line.split_once(": ") {
            Some((key, value)) => (key.trim(), value.to_string()),
            None => match line.trim_end().strip_suffix(':') {
                Some(key) => (key.trim(), String::new()),
                None => {
                    return Err(anyhow!(
                        "line {} is not a `key: value` pair: {}",
                        index + 1,
                        line
                    ))
                }
            },
        };
        if key.is_empty() {
            return Err(anyhow!("line {} has no key", index + 1));
        }

        if value.starts_with('"') && (value.len() == 1 || !ends_with_closing_quote(&value)) {
            loop {
                let Some((_, next)) = lines.next() else {
                    return Err(anyhow!("unterminated quoted value for {key}"));
                };
                value.push('\n');
                value.push_str(next);
                if ends_with_closing_quote(next) {
                    break;
                }
            }
        }
        variables.insert(key.to_string(), unquote(&value));
    }

    if variables.is_empty() {
        return Err(anyhow!("variables text has no keys"));
    }
    Ok(variables)
}

pub fn variable(variables: &Variables, key: &str) -> Option<String> {
    variables.get(key).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue;
    use crate::subject::{COMPOSITION_FIELDS, SCENE_FIELDS};

    fn blank_request(count: SubjectCount) -> GenerationRequest {
        GenerationRequest {
            subject_count: count,
            aspect: "portrait".to_string(),
            ..GenerationRequest::default()
        }
    }

    #[test]
    fn unset_markers_are_normalized() {
        for value in ["", "  ", "NA", "n/a", "None", " SKIP ", "custom"] {
            assert!(value.is_unset(), "{value:?} should be unset");
        }
        assert!(!"elf".is_unset());
        assert!(0u8.is_unset());
        assert!(0.0f64.is_unset());
        assert!(!25i64.is_unset());
    }

    #[test]
    fn colon_triggers_quotes_and_escapes_inner_quotes() {
        assert_eq!(format_value("It's 5:00"), "\"It's 5:00\"");
        assert_eq!(
            format_value(r#"sign reads "open": come in"#),
            r#""sign reads \"open\": come in""#
        );
        assert_eq!(format_value("long auburn hair, wavy"), "long auburn hair, wavy");
        assert_eq!(format_value("#1 fan"), "\"#1 fan\"");
    }

    #[test]
    fn blank_single_subject_request_is_all_na() {
        let text = build_variables(&blank_request(SubjectCount::One));
        let lines: Vec<&str> = text.lines().collect();

        let mut expected = vec!["# === MASTER SETTINGS ===", "subjects: 1", "aspect: portrait", ""];
        expected.push("# === SUBJECT 1 ===");
        let s1: Vec<String> = SUBJECT_FIELDS.iter().map(|f| format!("{f}: NA")).collect();
        let s2: Vec<String> = SUBJECT_FIELDS.iter().map(|f| format!("s2_{f}: NA")).collect();
        let s3: Vec<String> = SUBJECT_FIELDS.iter().map(|f| format!("s3_{f}: NA")).collect();
        expected.extend(s1.iter().map(String::as_str));
        expected.push("");
        expected.push("# === SUBJECT 2 ===");
        expected.extend(s2.iter().map(String::as_str));
        expected.push("");
        expected.push("# === SUBJECT 3 ===");
        expected.extend(s3.iter().map(String::as_str));
        expected.push("");
        expected.push("# === INTERACTION ===");
        expected.push("interaction: NA");

        assert_eq!(&lines[..expected.len()], expected.as_slice());

        for field in SCENE_FIELDS.iter().chain(COMPOSITION_FIELDS.iter()) {
            assert!(lines.contains(&format!("{field}: NA").as_str()), "{field}");
        }
        assert_eq!(lines.last(), Some(&"camera_angle: NA"));
    }

    #[test]
    fn unused_slots_ignore_supplied_subjects() {
        let filled = Subject {
            age: "30".to_string(),
            gender: "male".to_string(),
            hair: "short black hair, curly".to_string(),
            ..Subject::default()
        };
        let request = GenerationRequest {
            subjects: vec![filled.clone(), filled.clone(), filled],
            interaction: "sharing an umbrella".to_string(),
            ..blank_request(SubjectCount::One)
        };
        let text = build_variables(&request);

        let s2_lines: Vec<&str> = text.lines().filter(|l| l.starts_with("s2_")).collect();
        let s3_lines: Vec<&str> = text.lines().filter(|l| l.starts_with("s3_")).collect();
        assert_eq!(s2_lines.len(), 16);
        assert_eq!(s3_lines.len(), 16);
        assert!(s2_lines.iter().chain(s3_lines.iter()).all(|l| l.ends_with(": NA")));
        assert!(text.contains("\ninteraction: NA\n"));
        assert!(text.contains("\nhair: short black hair, curly\n"));
    }

    #[test]
    fn two_subjects_emit_second_slot_and_interaction() {
        let request = GenerationRequest {
            subjects: vec![
                Subject::default(),
                Subject {
                    ethnicity: "dwarf".to_string(),
                    body_type: "custom".to_string(),
                    body_type_custom: "barrel-chested".to_string(),
                    ..Subject::default()
                },
            ],
            interaction: "arm wrestling: intense".to_string(),
            ..blank_request(SubjectCount::Two)
        };
        let text = build_variables(&request);
        assert!(text.contains("\ns2_ethnicity: dwarf\n"));
        assert!(text.contains("\ns2_body_type: barrel-chested\n"));
        assert!(text.contains("\ninteraction: \"arm wrestling: intense\"\n"));
        assert!(text.contains("\ns3_age: NA\n"));
    }

    #[test]
    fn custom_body_type_with_blank_override_is_na() {
        let request = GenerationRequest {
            subjects: vec![Subject {
                body_type: "custom".to_string(),
                ..Subject::default()
            }],
            ..blank_request(SubjectCount::One)
        };
        assert!(build_variables(&request).contains("\nbody_type: NA\n"));
    }

    #[test]
    fn emitted_values_read_back_verbatim() {
        let scene = Scene {
            location: "rooftop".to_string(),
            time: "late afternoon".to_string(),
            lighting: "dappled light through leaves".to_string(),
            story: "It's 5:00 and the \"last\" train is gone".to_string(),
            ..Scene::reset_defaults()
        };
        let subject = Subject {
            age: "early 30s".to_string(),
            hair: "long auburn hair, wavy".to_string(),
            ..Subject::reset_defaults()
        };
        let request = GenerationRequest {
            subjects: vec![subject],
            scene,
            ..blank_request(SubjectCount::One)
        };

        let variables = parse_variables(&build_variables(&request)).expect("parsable block");
        assert_eq!(variable(&variables, "location").as_deref(), Some("rooftop"));
        assert_eq!(variable(&variables, "time").as_deref(), Some("late afternoon"));
        assert_eq!(variable(&variables, "age").as_deref(), Some("early 30s"));
        assert_eq!(variable(&variables, "hair").as_deref(), Some("long auburn hair, wavy"));
        assert_eq!(
            variable(&variables, "story").as_deref(),
            Some("It's 5:00 and the \"last\" train is gone")
        );
        assert_eq!(variable(&variables, "subjects").as_deref(), Some("1"));
        assert_eq!(variable(&variables, "aspect").as_deref(), Some("portrait"));
        assert_eq!(variable(&variables, "s3_pose").as_deref(), Some("NA"));
        assert_eq!(
            variables.len(),
            2 + 16 * 3 + 1 + SCENE_FIELDS.len() + COMPOSITION_FIELDS.len()
        );
    }

    #[test]
    fn free_text_without_quote_triggers_is_not_reinterpreted() {
        for value in [
            "[draft]",
            " padded ",
            "1e3",
            "null",
            "true",
            "- dash",
            "@handle",
            "*star",
            "> folded",
            "| piped",
            "~",
            "50%",
        ] {
            let line = field_line("story", value);
            let variables = parse_variables(&line).unwrap();
            assert_eq!(variable(&variables, "story").as_deref(), Some(value), "{line}");
        }
    }

    #[test]
    fn every_catalogue_value_reads_back() {
        let mut lines = Vec::new();
        let mut expected = Vec::new();
        for (index, value) in catalogue::all_ethnicities()
            .into_iter()
            .chain(catalogue::LOCATIONS_REALISTIC.iter().copied())
            .chain(catalogue::LOCATIONS_FANTASY.iter().copied())
            .chain(catalogue::outfits(Genre::Realistic))
            .chain(catalogue::outfits(Genre::Fantasy))
            .filter(|value| !value.is_unset())
            .enumerate()
        {
            lines.push(field_line(&format!("v{index}"), value));
            expected.push((format!("v{index}"), value.to_string()));
        }
        let variables = parse_variables(&lines.join("\n")).unwrap();
        for (key, value) in expected {
            assert_eq!(variable(&variables, &key), Some(value));
        }
    }

    #[test]
    fn quoted_multiline_values_are_joined() {
        let text = field_line("story", "line one\nline \"two\"");
        assert_eq!(text, "story: \"line one\nline \\\"two\\\"\"");
        let variables = parse_variables(&format!("{text}\naspect: square")).unwrap();
        assert_eq!(
            variable(&variables, "story").as_deref(),
            Some("line one\nline \"two\"")
        );
        assert_eq!(variable(&variables, "aspect").as_deref(), Some("square"));

        let trailing = field_line("story", "ends with newline\n");
        let variables = parse_variables(&trailing).unwrap();
        assert_eq!(
            variable(&variables, "story").as_deref(),
            Some("ends with newline\n")
        );
    }

    #[test]
    fn malformed_blocks_are_rejected() {
        assert!(parse_variables("").is_err());
        assert!(parse_variables("# only a comment\n\n").is_err());
        assert!(parse_variables("- a\n- b").is_err());
        assert!(parse_variables(": orphan value").is_err());
        assert!(parse_variables("story: \"never closed\nsecond line").is_err());
    }
}
