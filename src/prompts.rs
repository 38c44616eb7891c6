use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use tracing::{debug, warn};

use crate::config::CONFIG;

pub const FALLBACK_TEMPLATE: &str = "v3_system_prompt";

pub const BUILTIN_SYSTEM_PROMPT: &str =
    "You are a cinematic image prompt engineer. Expand the YAML variables into flowing prose.";

#[derive(Debug, Clone)]
pub struct PromptLibrary {
    dir: PathBuf,
    default_template: String,
}

impl PromptLibrary {
    pub fn new(dir: impl AsRef<Path>, default_template: &str) -> Self {
        PromptLibrary {
            dir: dir.as_ref().to_path_buf(),
            default_template: default_template.to_string(),
        }
    }

    pub fn from_config() -> Self {
        Self::new(&CONFIG.system_prompts_dir, &CONFIG.default_template)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn list_templates(&self) -> Vec<String> {
        let mut templates = Vec::new();
        match fs::read_dir(&self.dir) {
            Ok(entries) => {
                for entry in entries.flatten() {
                    let path = entry.path();
                    if !path.is_file() || path.extension().and_then(|ext| ext.to_str()) != Some("md")
                    {
                        continue;
                    }
                    if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                        templates.push(stem.to_string());
                    }
                }
            }
            Err(err) => {
                debug!("Cannot read templates from {}: {}", self.dir.display(), err);
            }
        }

        if templates.is_empty() {
            return vec![FALLBACK_TEMPLATE.to_string()];
        }
        templates.sort();
        templates
    }

    fn template_path(&self, name: &str) -> Result<PathBuf> {
        let name = name.trim();
        if name.is_empty() || name.contains(['/', '\\']) || name.contains("..") {
            return Err(anyhow!("Invalid template name '{}'", name));
        }
        Ok(self.dir.join(format!("{name}.md")))
    }

    pub fn load(&self, name: &str) -> Result<String> {
        let path = self.template_path(name)?;
        fs::read_to_string(&path)
            .map_err(|err| anyhow!("Failed to read template '{}': {}", path.display(), err))
    }

    pub fn load_or_error_text(&self, name: &str) -> String {
        let path = match self.template_path(name) {
            Ok(path) => path,
            Err(_) => return format!("[ERROR] Template not found: {}.md", name.trim()),
        };
        match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                format!("[ERROR] Template not found: {}.md", name.trim())
            }
            Err(err) => format!("[ERROR] Failed to load template: {err}"),
        }
    }

    pub fn default_prompt(&self) -> String {
        match self.load(&self.default_template) {
            Ok(text) => text,
            Err(err) => {
                warn!("Failed to load system prompt: {}", err);
                BUILTIN_SYSTEM_PROMPT.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn templates_are_listed_sorted_without_extension() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("v3_system_prompt.md"), "v3").unwrap();
        fs::write(dir.path().join("anime.md"), "anime").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        fs::create_dir(dir.path().join("drafts.md")).unwrap();

        let library = PromptLibrary::new(dir.path(), FALLBACK_TEMPLATE);
        assert_eq!(library.list_templates(), vec!["anime", "v3_system_prompt"]);
    }

    #[test]
    fn empty_or_missing_directory_lists_the_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let library = PromptLibrary::new(dir.path(), FALLBACK_TEMPLATE);
        assert_eq!(library.list_templates(), vec![FALLBACK_TEMPLATE]);

        let missing = PromptLibrary::new(dir.path().join("nope"), FALLBACK_TEMPLATE);
        assert_eq!(missing.list_templates(), vec![FALLBACK_TEMPLATE]);
    }

    #[test]
    fn loading_reports_missing_templates_inline() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("anime.md"), "Anime prompt").unwrap();
        let library = PromptLibrary::new(dir.path(), "anime");

        assert_eq!(library.load("anime").unwrap(), "Anime prompt");
        assert!(library.load("ghost").is_err());
        assert_eq!(
            library.load_or_error_text("ghost"),
            "[ERROR] Template not found: ghost.md"
        );
        assert_eq!(
            library.load_or_error_text("../secret"),
            "[ERROR] Template not found: ../secret.md"
        );
    }

    #[test]
    fn default_prompt_falls_back_to_builtin_text() {
        let dir = tempfile::tempdir().unwrap();
        let library = PromptLibrary::new(dir.path(), FALLBACK_TEMPLATE);
        assert_eq!(library.default_prompt(), BUILTIN_SYSTEM_PROMPT);

        fs::write(dir.path().join("v3_system_prompt.md"), "Custom v3").unwrap();
        assert_eq!(library.default_prompt(), "Custom v3");
    }
}
