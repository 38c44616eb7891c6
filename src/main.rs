use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use dotenvy::dotenv;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use zforge::builder::{BuildInput, InputMode, LlmMode, PromptBuilder};
use zforge::catalogue::{Genre, ASPECTS, ETHNICITY_HINTS, EXPRESSION_HINTS, POSE_HINTS};
use zforge::config::CONFIG;
use zforge::llm::{
    build_llm_config, model_choices, server_url, test_connection, LlmSettingsInput, ModelCache,
    CUSTOM_MODEL_OPTION,
};
use zforge::person::{build_person, PersonInput};
use zforge::prompts::PromptLibrary;
use zforge::subject::SubjectCount;
use zforge::utils::logging::init_logging;

fn usage() -> &'static str {
    "Usage:\n  zforge generate [--genre realistic|fantasy] [--people 1|2|3] [--aspect A] [--interaction TEXT] [--randomize-all] [--randomize-person-1] [--randomize-scene] [--reset] [--internal] [--model ID] [--template NAME] [--yaml FILE] [--seed N]\n  zforge models\n  zforge test-connection\n  zforge templates\n  zforge person [--genre realistic|fantasy] [--randomize] [--seed N]"
}

fn person_help() -> String {
    format!(
        "{}\n\nethnicity: {ETHNICITY_HINTS}\nexpression: {EXPRESSION_HINTS}\npose: {POSE_HINTS}",
        usage()
    )
}

#[derive(Debug, Default)]
struct GenerateArgs {
    input: BuildInput,
    model: Option<String>,
    template: Option<String>,
    yaml_file: Option<PathBuf>,
    seed: Option<u64>,
}

#[derive(Debug, Default)]
struct PersonArgs {
    genre: Genre,
    randomize: bool,
    seed: Option<u64>,
}

fn next_value<'a>(args: &'a [String], index: &mut usize, flag: &str) -> Result<&'a str> {
    *index += 1;
    args.get(*index)
        .map(|value| value.as_str())
        .ok_or_else(|| anyhow!("Missing value for {flag}"))
}

fn parse_seed(value: &str) -> Result<u64> {
    value
        .parse::<u64>()
        .map_err(|_| anyhow!("Invalid --seed value: {value}"))
}

fn parse_generate_args(args: &[String]) -> Result<GenerateArgs> {
    let mut parsed = GenerateArgs {
        input: BuildInput {
            aspect: "portrait".to_string(),
            ..BuildInput::default()
        },
        ..GenerateArgs::default()
    };

    let mut index = 0;
    while index < args.len() {
        match args[index].as_str() {
            "--genre" => parsed.input.genre = next_value(args, &mut index, "--genre")?.parse()?,
            "--people" => {
                parsed.input.subject_count =
                    next_value(args, &mut index, "--people")?.parse::<SubjectCount>()?
            }
            "--aspect" => {
                let aspect = next_value(args, &mut index, "--aspect")?;
                if !ASPECTS.contains(&aspect) {
                    return Err(anyhow!(
                        "Unknown aspect: {aspect} (expected one of {})",
                        ASPECTS.join(", ")
                    ));
                }
                parsed.input.aspect = aspect.to_string();
            }
            "--interaction" => {
                parsed.input.interaction = next_value(args, &mut index, "--interaction")?.to_string()
            }
            "--randomize-all" => parsed.input.randomize_all_people = true,
            "--randomize-person-1" => parsed.input.randomize_person_1 = true,
            "--randomize-scene" => parsed.input.randomize_scene = true,
            "--reset" => parsed.input.reset_all = true,
            "--internal" => parsed.input.llm_mode = LlmMode::Internal,
            "--model" => parsed.model = Some(next_value(args, &mut index, "--model")?.to_string()),
            "--template" => {
                parsed.template = Some(next_value(args, &mut index, "--template")?.to_string())
            }
            "--yaml" => {
                parsed.yaml_file = Some(PathBuf::from(next_value(args, &mut index, "--yaml")?));
                parsed.input.input_mode = InputMode::Yaml;
            }
            "--seed" => parsed.seed = Some(parse_seed(next_value(args, &mut index, "--seed")?)?),
            "--help" | "-h" => return Err(anyhow!(usage())),
            other => return Err(anyhow!("Unknown generate argument: {other}\n{}", usage())),
        }
        index += 1;
    }
    Ok(parsed)
}

fn parse_person_args(args: &[String]) -> Result<PersonArgs> {
    let mut parsed = PersonArgs::default();
    let mut index = 0;
    while index < args.len() {
        match args[index].as_str() {
            "--genre" => parsed.genre = next_value(args, &mut index, "--genre")?.parse()?,
            "--randomize" => parsed.randomize = true,
            "--seed" => parsed.seed = Some(parse_seed(next_value(args, &mut index, "--seed")?)?),
            "--help" | "-h" => return Err(anyhow!(person_help())),
            other => return Err(anyhow!("Unknown person argument: {other}\n{}", usage())),
        }
        index += 1;
    }
    Ok(parsed)
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

async fn run_generate(args: GenerateArgs) -> Result<()> {
    let prompts = PromptLibrary::from_config();
    let mut input = args.input;

    if let Some(path) = &args.yaml_file {
        input.yaml_input = fs::read_to_string(path)
            .map_err(|err| anyhow!("Failed to read YAML file '{}': {}", path.display(), err))?;
    }

    if input.llm_mode == LlmMode::Internal || args.model.is_some() || args.template.is_some() {
        let cache = ModelCache::new();
        if input.llm_mode == LlmMode::Internal {
            cache.warm_up(&CONFIG.lmstudio_host, CONFIG.lmstudio_port).await;
            info!("Model menu: {}", model_choices(&cache).join(", "));
        }
        let settings = LlmSettingsInput {
            system_prompt_template: args
                .template
                .unwrap_or_else(|| CONFIG.default_template.clone()),
            model_selection: CUSTOM_MODEL_OPTION.to_string(),
            custom_model_name: args.model.unwrap_or_default(),
            ..LlmSettingsInput::default()
        };
        let config = build_llm_config(settings, &cache, &prompts).await;
        input.llm_config = Some(config.to_json());
    }

    let builder = PromptBuilder::new(prompts);
    let mut rng = seeded_rng(args.seed);
    let output = builder.build_with_rng(input, &mut rng).await;

    println!("=== variables ===\n{}\n", output.variables);
    println!("=== llm_instructions ===\n{}\n", output.system_prompt);
    println!("=== image_prompt ===\n{}\n", output.expanded);
    println!("=== status ===\n{}", output.status);
    if !output.widget_updates.is_empty() {
        println!(
            "\n=== widget_updates ===\n{}",
            serde_json::to_string_pretty(&output.widget_updates)?
        );
    }
    Ok(())
}

async fn run_models() -> Result<()> {
    let cache = ModelCache::new();
    let url = server_url(&CONFIG.lmstudio_host, CONFIG.lmstudio_port);
    let (ok, message) = cache.refresh(&url, CONFIG.metadata_timeout()).await;
    println!("{message}");
    if !ok {
        return Err(anyhow!("Model listing failed"));
    }
    for choice in cache.choices() {
        println!("  {choice}");
    }
    Ok(())
}

async fn run_test_connection() -> Result<()> {
    let (ok, message) = test_connection(
        &CONFIG.lmstudio_host,
        CONFIG.lmstudio_port,
        CONFIG.metadata_timeout(),
    )
    .await;
    println!("{message}");
    if ok {
        Ok(())
    } else {
        Err(anyhow!("LM Studio is not reachable"))
    }
}

fn run_templates() {
    let prompts = PromptLibrary::from_config();
    println!("Templates in {}:", prompts.dir().display());
    for name in prompts.list_templates() {
        println!("  {name}");
    }
}

fn run_person(args: PersonArgs) -> Result<()> {
    let input = PersonInput {
        genre: args.genre,
        randomize: args.randomize,
        ..PersonInput::default()
    };
    let output = build_person(&input, &mut seeded_rng(args.seed));
    println!("{}", serde_json::to_string_pretty(&output.record)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let _guards = init_logging();

    let args: Vec<String> = std::env::args().collect();
    let Some(command) = args.get(1) else {
        return Err(anyhow!(usage()));
    };
    let rest = &args[2..];
    info!("Running zforge {}", command);

    match command.as_str() {
        "generate" => run_generate(parse_generate_args(rest)?).await,
        "models" => run_models().await,
        "test-connection" => run_test_connection().await,
        "templates" => {
            run_templates();
            Ok(())
        }
        "person" => run_person(parse_person_args(rest)?),
        "--help" | "-h" | "help" => {
            println!("{}", usage());
            Ok(())
        }
        other => Err(anyhow!("Unknown command: {other}\n{}", usage())),
    }
}
