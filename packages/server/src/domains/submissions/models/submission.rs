use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::domains::moderation::ModerationInput;
use crate::domains::submissions::SubmissionError;

/// Showcase category. Unknown wire values are kept as raw strings on the
/// submission and render with the fallback label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Visualizer,
    Game,
    Tool,
    Website,
    App,
    Other,
}

/// Label used for categories outside the known set.
pub const FALLBACK_CATEGORY_LABEL: &str = "Project";

impl Category {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "visualizer" => Some(Self::Visualizer),
            "game" => Some(Self::Game),
            "tool" => Some(Self::Tool),
            "website" => Some(Self::Website),
            "app" => Some(Self::App),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Visualizer => "Visualizer",
            Self::Game => "Game",
            Self::Tool => "Tool",
            Self::Website => "Website",
            Self::App => "App",
            Self::Other => FALLBACK_CATEGORY_LABEL,
        }
    }

    /// Display label for any raw category value.
    pub fn label_for(raw: &str) -> &'static str {
        Self::parse(raw)
            .map(Self::label)
            .unwrap_or(FALLBACK_CATEGORY_LABEL)
    }
}

/// Request body as posted by the submission form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub creator_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub project_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Checkbox: `true`, `"on"` and `"true"` all mean checked.
    #[serde(default, deserialize_with = "deserialize_checkbox")]
    pub first_project: bool,
}

fn deserialize_checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(checked) => checked,
        Value::String(s) => s == "on" || s == "true",
        _ => false,
    })
}

/// A submission that passed the required-field check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub project_name: String,
    pub creator_name: String,
    pub email: String,
    pub project_url: Option<String>,
    pub image_url: Option<String>,
    /// Raw wire value; see [`Category::label_for`].
    pub category: String,
    pub description: String,
    pub first_project: bool,
}

impl SubmissionPayload {
    /// Check required fields and normalize optional ones.
    ///
    /// Required: project name, creator, email, category, description. A value
    /// made only of whitespace counts as missing. Blank optional URLs become
    /// `None`; present ones are trimmed.
    pub fn validate(self) -> Result<Submission, SubmissionError> {
        let project_name = required(self.project_name)?;
        let creator_name = required(self.creator_name)?;
        let email = required(self.email)?;
        let category = required(self.category)?;
        let description = required(self.description)?;

        Ok(Submission {
            project_name,
            creator_name,
            email,
            project_url: optional(self.project_url),
            image_url: optional(self.image_url),
            category,
            description,
            first_project: self.first_project,
        })
    }
}

fn required(value: Option<String>) -> Result<String, SubmissionError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(SubmissionError::MissingFields),
    }
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Submission {
    pub fn category_label(&self) -> &'static str {
        Category::label_for(&self.category)
    }

    pub fn moderation_input(&self) -> ModerationInput<'_> {
        ModerationInput {
            project_name: &self.project_name,
            creator_name: &self.creator_name,
            description: &self.description,
            project_url: self.project_url.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(json: &str) -> SubmissionPayload {
        serde_json::from_str(json).unwrap()
    }

    const COMPLETE: &str = r#"{
        "projectName": "Pixel Garden",
        "creatorName": "sprout",
        "email": "sprout@example.com",
        "projectUrl": "  https://github.com/sprout/pixel-garden ",
        "imageUrl": "",
        "category": "visualizer",
        "description": "A tiny generative garden",
        "firstProject": "on"
    }"#;

    #[test]
    fn test_complete_payload_validates() {
        let submission = payload(COMPLETE).validate().unwrap();

        assert_eq!(submission.project_name, "Pixel Garden");
        assert_eq!(
            submission.project_url.as_deref(),
            Some("https://github.com/sprout/pixel-garden")
        );
        assert_eq!(submission.image_url, None);
        assert!(submission.first_project);
        assert_eq!(submission.category_label(), "Visualizer");
    }

    #[test]
    fn test_each_required_field_is_enforced() {
        for field in ["projectName", "creatorName", "email", "category", "description"] {
            let mut value: Value = serde_json::from_str(COMPLETE).unwrap();
            value.as_object_mut().unwrap().remove(field);
            let p: SubmissionPayload = serde_json::from_value(value).unwrap();

            assert!(
                matches!(p.validate(), Err(SubmissionError::MissingFields)),
                "{field} should be required"
            );
        }
    }

    #[test]
    fn test_blank_required_field_counts_as_missing() {
        let p = payload(r#"{"projectName": "   ", "creatorName": "a", "email": "b", "category": "game", "description": "c"}"#);

        assert!(matches!(p.validate(), Err(SubmissionError::MissingFields)));
    }

    #[test]
    fn test_checkbox_values() {
        assert!(payload(r#"{"firstProject": true}"#).first_project);
        assert!(payload(r#"{"firstProject": "on"}"#).first_project);
        assert!(payload(r#"{"firstProject": "true"}"#).first_project);
        assert!(!payload(r#"{"firstProject": false}"#).first_project);
        assert!(!payload(r#"{"firstProject": "off"}"#).first_project);
        assert!(!payload(r#"{"firstProject": null}"#).first_project);
        assert!(!payload(r#"{}"#).first_project);
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::label_for("game"), "Game");
        assert_eq!(Category::label_for("app"), "App");
        assert_eq!(Category::label_for("other"), "Project");
        assert_eq!(Category::label_for("music"), "Project");
        assert_eq!(Category::label_for("Game"), "Project");
    }
}
