use crate::catalogue::{self, Genre, CUSTOM, NA};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validated {
    pub value: String,
    pub warning: Option<String>,
}

impl Validated {
    fn unchanged(value: &str) -> Self {
        Validated {
            value: value.to_string(),
            warning: None,
        }
    }
}

fn mismatch_warning(value: &str, genre: Genre) -> String {
    match genre {
        Genre::Realistic => format!(
            "[WARNING] '{}' is a fantasy race, not valid in realistic mode. Reset to NA.",
            value
        ),
        Genre::Fantasy => format!(
            "[WARNING] '{}' is a real-world ethnicity, not valid in fantasy mode. Reset to NA.",
            value
        ),
    }
}

/// Checks an ethnicity/race against the genre's catalogue. Blank, `NA` and
/// `custom` pass through; anything outside the catalogue becomes `NA` with a
/// warning naming the value.
pub fn validate_ethnicity(value: &str, genre: Genre) -> Validated {
    if value.is_empty() || value == NA || value == CUSTOM {
        return Validated::unchanged(value);
    }

    if catalogue::ethnicities(genre).contains(&value) {
        return Validated::unchanged(value);
    }

    let warning = mismatch_warning(value, genre);
    tracing::debug!("{}", warning);
    Validated {
        value: NA.to_string(),
        warning: Some(warning),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_world_ethnicity_in_fantasy_resets_to_na() {
        let result = validate_ethnicity("Japanese", Genre::Fantasy);
        assert_eq!(result.value, "NA");
        let warning = result.warning.expect("warning");
        assert!(warning.contains("Japanese"));
        assert!(warning.contains("fantasy mode"));
    }

    #[test]
    fn fantasy_race_in_realistic_resets_to_na() {
        let result = validate_ethnicity("tiefling", Genre::Realistic);
        assert_eq!(result.value, "NA");
        assert!(result.warning.unwrap().contains("'tiefling' is a fantasy race"));
    }

    #[test]
    fn sentinels_and_blank_pass_through() {
        for genre in Genre::ALL {
            for value in ["", "NA", "custom"] {
                let result = validate_ethnicity(value, genre);
                assert_eq!(result, Validated::unchanged(value));
            }
        }
    }

    #[test]
    fn catalogue_members_pass_through() {
        assert_eq!(validate_ethnicity("Maori", Genre::Realistic).value, "Maori");
        assert_eq!(validate_ethnicity("wood-elf", Genre::Fantasy).value, "wood-elf");
        assert!(validate_ethnicity("wood-elf", Genre::Fantasy).warning.is_none());
    }

    #[test]
    fn validation_is_idempotent() {
        let samples = ["Japanese", "elf", "", "NA", "custom", "Martian", "Irish"];
        for genre in Genre::ALL {
            for value in samples {
                let first = validate_ethnicity(value, genre);
                let second = validate_ethnicity(&first.value, genre);
                assert_eq!(second.value, first.value);
                assert!(second.warning.is_none());
            }
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(validate_ethnicity("japanese", Genre::Realistic).warning.is_some());
    }
}
