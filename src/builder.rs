use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::Value;
use tracing::{debug, info};

use crate::catalogue::Genre;
use crate::llm::{self, LlmConfig};
use crate::prompts::PromptLibrary;
use crate::randomizer::{randomize_scene, randomize_subject};
use crate::subject::{PersonRecord, Scene, Subject, SubjectCount};
use crate::utils::timing::{complete_request_timer, start_request_timer};
use crate::validation::validate_ethnicity;
use crate::variables::{build_variables, parse_variables, GenerationRequest};

const RANDOMIZED_SCENE_FIELDS: [&str; 8] = [
    "location",
    "time",
    "weather",
    "atmosphere",
    "lighting",
    "framing",
    "camera_angle",
    "era",
];

const EXTERNAL_MODE_NOTICE: &str =
    "[MODE] External mode - connect 'variables' + 'llm_instructions' to your LLM node";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Widget,
    Yaml,
}

impl FromStr for InputMode {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "widget" | "widget mode" => Ok(InputMode::Widget),
            "yaml" | "yaml mode" => Ok(InputMode::Yaml),
            other => Err(anyhow!("Unknown input mode: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LlmMode {
    #[default]
    External,
    Internal,
}

impl fmt::Display for LlmMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LlmMode::External => write!(f, "external"),
            LlmMode::Internal => write!(f, "internal"),
        }
    }
}

impl FromStr for LlmMode {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "external" => Ok(LlmMode::External),
            "internal" | "lmstudio" => Ok(LlmMode::Internal),
            other => Err(anyhow!("Unknown LLM mode: {other}")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildInput {
    pub input_mode: InputMode,
    pub llm_mode: LlmMode,
    pub genre: Genre,
    pub subject_count: SubjectCount,
    pub aspect: String,
    pub reset_all: bool,
    pub randomize_all_people: bool,
    pub randomize_person_1: bool,
    pub randomize_scene: bool,
    pub person_1: Subject,
    pub scene: Scene,
    pub person_2: Option<String>,
    pub person_3: Option<String>,
    pub llm_config: Option<String>,
    pub interaction: String,
    pub yaml_input: String,
    pub system_prompt_override: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildOutput {
    pub variables: String,
    pub system_prompt: String,
    pub expanded: String,
    pub status: String,
    pub widget_updates: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NextStep {
    Done,
    External,
    Generate,
}

#[derive(Debug, Clone)]
struct Prepared {
    output: BuildOutput,
    status_lines: Vec<String>,
    config: LlmConfig,
    next: NextStep,
}

fn randomized_summary(label: &str, subject: &Subject) -> Vec<String> {
    vec![
        format!("[RANDOMIZED {label}]"),
        format!("  Age: {}", subject.age),
        format!("  Gender: {}", subject.gender),
        format!("  Ethnicity: {}", subject.ethnicity),
        format!("  Body: {}", subject.body_type),
        format!("  Hair: {}", subject.hair),
        format!("  Expression: {}", subject.expression),
        format!("  Gaze: {}", subject.gaze),
        format!("  Pose: {}", subject.pose),
        format!("  Outfit: {}", subject.outfit),
    ]
}

fn reset_widget_updates() -> BTreeMap<String, Value> {
    let mut updates = BTreeMap::new();
    for toggle in [
        "reset_all",
        "randomize_all_people",
        "randomize_person_1",
        "randomize_scene",
    ] {
        updates.insert(toggle.to_string(), Value::Bool(false));
    }
    updates.extend(Subject::reset_defaults().widget_values("person_1_"));
    updates.extend(Scene::reset_defaults().widget_values());
    updates.insert("interaction".to_string(), Value::String(String::new()));
    updates
}

pub struct PromptBuilder {
    prompts: PromptLibrary,
}

impl PromptBuilder {
    pub fn new(prompts: PromptLibrary) -> Self {
        PromptBuilder { prompts }
    }

    pub async fn build(&self, input: BuildInput) -> BuildOutput {
        let mut rng = StdRng::from_entropy();
        self.build_with_rng(input, &mut rng).await
    }

    pub async fn build_with_rng<R: Rng + ?Sized>(&self, input: BuildInput, rng: &mut R) -> BuildOutput {
        let mut timer = start_request_timer(
            "build",
            input.genre.as_str(),
            &input.llm_mode.to_string(),
        );
        let prepared = self.prepare(&input, rng);
        let output = self.finish(prepared).await;
        let outcome = if output.status.contains("[ERROR]") {
            "error"
        } else {
            "success"
        };
        complete_request_timer(&mut timer, outcome, None);
        output
    }

    fn prepare<R: Rng + ?Sized>(&self, input: &BuildInput, rng: &mut R) -> Prepared {
        let mut status_lines = Vec::new();

        if input.reset_all {
            status_lines.push("[RESET] All Person 1 and Scene fields cleared".to_string());
            return Prepared {
                output: BuildOutput {
                    widget_updates: reset_widget_updates(),
                    ..BuildOutput::default()
                },
                status_lines,
                config: LlmConfig::default(),
                next: NextStep::Done,
            };
        }

        let config = LlmConfig::parse(input.llm_config.as_deref());
        if input.llm_config.is_some() {
            if !config.status.is_empty() {
                status_lines.push(format!("[LLM Config] {}", config.status));
            }
        } else {
            status_lines.push("[LLM Config] Using defaults (no config node connected)".to_string());
        }

        let genre = input.genre;
        status_lines.push(format!("[Genre] {genre}"));

        let mut person_1 = input.person_1.clone();
        let checked = validate_ethnicity(&person_1.ethnicity, genre);
        if let Some(warning) = checked.warning {
            status_lines.push(warning);
        }
        person_1.ethnicity = checked.value;

        let system_prompt = if !input.system_prompt_override.trim().is_empty() {
            status_lines.push("[Prompt] Using override".to_string());
            input.system_prompt_override.trim().to_string()
        } else if !config.system_prompt.is_empty() {
            let template = if config.system_prompt_template.is_empty() {
                "from config"
            } else {
                config.system_prompt_template.as_str()
            };
            status_lines.push(format!("[Prompt] Using template: {template}"));
            config.system_prompt.clone()
        } else {
            status_lines.push("[Prompt] Using default v3".to_string());
            self.prompts.default_prompt()
        };

        let mut widget_updates = BTreeMap::new();
        let variables = match input.input_mode {
            InputMode::Yaml => {
                status_lines.push("[MODE] YAML Mode - passthrough".to_string());
                let variables = input.yaml_input.trim().to_string();
                match parse_variables(&variables) {
                    Ok(mapping) => status_lines.push(format!("[YAML] {} keys parsed", mapping.len())),
                    Err(err) => status_lines.push(format!("[YAML] warning: {err}")),
                }
                variables
            }
            InputMode::Widget => {
                status_lines.push("[MODE] Widget Mode - building YAML".to_string());
                self.widget_variables(input, person_1, rng, &mut status_lines, &mut widget_updates)
            }
        };

        Prepared {
            output: BuildOutput {
                variables,
                system_prompt,
                expanded: String::new(),
                status: String::new(),
                widget_updates,
            },
            status_lines,
            config,
            next: match input.llm_mode {
                LlmMode::External => NextStep::External,
                LlmMode::Internal => NextStep::Generate,
            },
        }
    }

    fn widget_variables<R: Rng + ?Sized>(
        &self,
        input: &BuildInput,
        mut person_1: Subject,
        rng: &mut R,
        status_lines: &mut Vec<String>,
        widget_updates: &mut BTreeMap<String, Value>,
    ) -> String {
        let genre = input.genre;

        if input.randomize_all_people || input.randomize_person_1 {
            person_1 = randomize_subject(genre, rng);
            status_lines.extend(randomized_summary("Person 1", &person_1));
            widget_updates.extend(person_1.widget_values("person_1_"));
        }

        let mut scene = input.scene.clone();
        if input.randomize_scene {
            let drawn = randomize_scene(genre, rng);
            scene.location = drawn.location;
            scene.time = drawn.time;
            scene.weather = drawn.weather;
            scene.atmosphere = drawn.atmosphere;
            scene.lighting = drawn.lighting;
            scene.framing = drawn.framing;
            scene.camera_angle = drawn.camera_angle;
            scene.era = drawn.era;
            status_lines.push("[RANDOMIZED Scene]".to_string());
            status_lines.push(format!("  Location: {}", scene.location));
            status_lines.push(format!("  Time: {}", scene.time));
            status_lines.push(format!("  Weather: {}", scene.weather));
            status_lines.push(format!("  Atmosphere: {}", scene.atmosphere));
            status_lines.push(format!("  Lighting: {}", scene.lighting));
            let values = scene.widget_values();
            for field in RANDOMIZED_SCENE_FIELDS {
                if let Some(value) = values.get(field) {
                    widget_updates.insert(field.to_string(), value.clone());
                }
            }
        }

        let mut subjects = vec![person_1];
        for (slot, raw) in [(2u8, &input.person_2), (3u8, &input.person_3)] {
            let label = format!("Person {slot}");
            if !input.subject_count.includes(slot) {
                subjects.push(Subject::default());
                continue;
            }

            let mut record = PersonRecord::parse(raw.as_deref());
            if let Some(record) = record.as_mut() {
                if !record.subject.ethnicity.is_empty() {
                    let checked = validate_ethnicity(&record.subject.ethnicity, genre);
                    if let Some(warning) = checked.warning {
                        status_lines.push(format!("[{label}] {warning}"));
                    }
                    record.subject.ethnicity = checked.value;
                }
            }

            let subject = if input.randomize_all_people {
                let subject = randomize_subject(genre, rng);
                status_lines.extend(randomized_summary(&label, &subject));
                subject
            } else {
                match record {
                    Some(PersonRecord {
                        subject,
                        status: Some(node_status),
                    }) if !node_status.is_empty() => {
                        for line in node_status.split('\n') {
                            status_lines.push(format!("[{label}] {line}"));
                        }
                        subject
                    }
                    Some(record) => {
                        status_lines.push(format!("[{label}] connected"));
                        record.subject
                    }
                    None => Subject::default(),
                }
            };
            subjects.push(subject);
        }

        let request = GenerationRequest {
            genre,
            subject_count: input.subject_count,
            aspect: input.aspect.clone(),
            subjects,
            interaction: input.interaction.clone(),
            scene,
        };
        debug!(
            "Building variables for {} subject(s), genre={}",
            request.subject_count, genre
        );
        build_variables(&request)
    }

    async fn finish(&self, prepared: Prepared) -> BuildOutput {
        let Prepared {
            mut output,
            mut status_lines,
            config,
            next,
        } = prepared;

        match next {
            NextStep::Done => {
                output.status = status_lines.join("\n");
                return output;
            }
            NextStep::External => status_lines.push(EXTERNAL_MODE_NOTICE.to_string()),
            NextStep::Generate => {
                status_lines.push("[LLM] Internal mode - generating prompt".to_string());
                let generation =
                    llm::generate(&output.system_prompt, &output.variables, &config).await;
                status_lines.extend(generation.status);
                output.expanded = generation.text;
            }
        }

        info!(
            "Prompt build finished: {} variable chars, {} expanded chars",
            output.variables.len(),
            output.expanded.len()
        );
        output.status = status_lines.join("\n");
        output
    }
}
