//! Alert templates posted to channels before they are archived

use crate::ReaperError;
use serde::Deserialize;

/// Placeholder replaced with the inactivity window in days
pub const DAYS_INACTIVE_PLACEHOLDER: &str = "{days_inactive}";

/// Contents of `templates.json`
#[derive(Debug, Clone, Deserialize)]
pub struct AlertTemplates {
    /// Message posted to a channel right before it is archived
    pub channel_template: String,
}

impl AlertTemplates {
    /// Parse the JSON template document
    pub fn from_json(json: &str) -> Result<Self, ReaperError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The alert used for channel archival
    pub fn channel_alert(&self) -> AlertTemplate {
        AlertTemplate::new(self.channel_template.clone())
    }
}

/// A message template with a `{days_inactive}` placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertTemplate(String);

impl AlertTemplate {
    /// Wrap a raw template string
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    /// Fill in the placeholder
    pub fn render(&self, days_inactive: u64) -> String {
        self.0
            .replace(DAYS_INACTIVE_PLACEHOLDER, &days_inactive.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        let template = AlertTemplate::new(
            "This channel has had no activity for {days_inactive} days. It is being archived.",
        );
        assert_eq!(
            template.render(60),
            "This channel has had no activity for 60 days. It is being archived."
        );
    }

    #[test]
    fn test_render_without_placeholder() {
        let template = AlertTemplate::new("Archiving this channel.");
        assert_eq!(template.render(30), "Archiving this channel.");
    }

    #[test]
    fn test_parse_templates_json() {
        let templates = AlertTemplates::from_json(
            r#"{"channel_template": "Idle for {days_inactive} days", "other": "ignored"}"#,
        )
        .unwrap();
        assert_eq!(templates.channel_alert().render(7), "Idle for 7 days");
    }

    #[test]
    fn test_missing_channel_template() {
        let result = AlertTemplates::from_json(r#"{"admin_template": "x"}"#);
        assert!(matches!(result, Err(ReaperError::Template(_))));
    }
}
