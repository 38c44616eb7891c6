pub mod builder;
pub mod catalogue;
pub mod config;
pub mod llm;
pub mod person;
pub mod prompts;
pub mod randomizer;
pub mod subject;
pub mod utils;
pub mod validation;
pub mod variables;

pub use builder::{BuildInput, BuildOutput, InputMode, LlmMode, PromptBuilder};
pub use catalogue::Genre;
pub use subject::{PersonRecord, Scene, Subject, SubjectCount};
