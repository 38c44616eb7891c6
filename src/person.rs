use std::collections::BTreeMap;

use rand::Rng;
use serde_json::Value;

use crate::catalogue::Genre;
use crate::randomizer::randomize_subject;
use crate::subject::{PersonRecord, Subject};
use crate::validation::validate_ethnicity;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonInput {
    pub genre: Genre,
    pub reset: bool,
    pub randomize: bool,
    pub subject: Subject,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PersonOutput {
    pub record: PersonRecord,
    pub widget_updates: BTreeMap<String, Value>,
    pub status: String,
}

impl PersonOutput {
    pub fn to_json(&self) -> String {
        self.record.to_json()
    }
}

pub fn build_person<R: Rng + ?Sized>(input: &PersonInput, rng: &mut R) -> PersonOutput {
    let mut widget_updates = BTreeMap::new();
    let mut status_lines = Vec::new();

    let subject = if input.reset {
        let subject = Subject::reset_defaults();
        widget_updates.insert("reset".to_string(), Value::Bool(false));
        widget_updates.insert("randomize".to_string(), Value::Bool(false));
        widget_updates.extend(subject.widget_values(""));
        status_lines.push("[RESET] All fields cleared".to_string());
        subject
    } else if input.randomize {
        let subject = randomize_subject(input.genre, rng);
        widget_updates.extend(subject.widget_values(""));
        status_lines.push("[RANDOMIZED]".to_string());
        status_lines.push(format!("  Age: {}", subject.age));
        status_lines.push(format!("  Gender: {}", subject.gender));
        status_lines.push(format!("  Ethnicity: {}", subject.ethnicity));
        status_lines.push(format!("  Body: {}", subject.body_type));
        status_lines.push(format!("  Expression: {}", subject.expression));
        subject
    } else {
        let mut subject = input.subject.clone();
        let checked = validate_ethnicity(&subject.ethnicity, input.genre);
        if let Some(warning) = checked.warning {
            status_lines.push(warning);
            widget_updates.insert("ethnicity".to_string(), Value::String(checked.value.clone()));
        }
        subject.ethnicity = checked.value;
        status_lines.push(format!("[MANUAL] {}/17 fields set", subject.filled_count()));
        subject
    };

    let status = status_lines.join("\n");
    PersonOutput {
        record: PersonRecord {
            subject,
            status: Some(status.clone()),
        },
        widget_updates,
        status,
    }
}
