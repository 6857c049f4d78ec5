use kbchat_core::config::RenderSettings;
use kbchat_core::traits::Renderer;
use kbchat_core::types::{TopicValue, DEPARTMENTS_TOPIC};

use crate::templates;

/// Chooses a template by `(topic, payload shape)`:
///
/// | payload | topic                         | output                          |
/// |---------|-------------------------------|---------------------------------|
/// | text    | any                           | verbatim                        |
/// | list    | `departments`                 | bulleted program list           |
/// | map     | `departments`                 | bullets grouped by category     |
/// | map     | `labs`, `placements`, `events`, `contact_info`, `hod_*` | topic template |
/// | map     | anything else                 | humanized key/value lines       |
/// | other   | any                           | the value stringified           |
#[derive(Debug, Clone)]
pub struct TemplateRenderer {
    institution: String,
}

impl Default for TemplateRenderer {
    fn default() -> Self { Self::new(RenderSettings::default()) }
}

impl TemplateRenderer {
    pub fn new(settings: RenderSettings) -> Self { Self { institution: settings.institution } }

    pub fn render_value(&self, topic: &str, value: &TopicValue) -> String {
        let inst = self.institution.as_str();
        match (topic, value) {
            (_, TopicValue::Text(s)) => s.clone(),
            (DEPARTMENTS_TOPIC, TopicValue::List(items)) => templates::department_list(inst, items),
            (DEPARTMENTS_TOPIC, TopicValue::Map(_)) => templates::department_groups(inst, value),
            ("labs", TopicValue::Map(_)) => templates::labs(inst, value),
            ("placements", TopicValue::Map(_)) => templates::placements(inst, value),
            ("events", TopicValue::Map(_)) => templates::events(inst, value),
            ("contact_info", TopicValue::Map(_)) => templates::contact_info(inst, value),
            (t, TopicValue::Map(_)) if t.starts_with("hod_") => templates::head_of_department(t, value),
            (t, TopicValue::Map(_)) => templates::generic(t, value),
            (_, other) => other.to_string(),
        }
    }
}

impl Renderer for TemplateRenderer {
    fn render(&self, topic: &str, value: &TopicValue) -> anyhow::Result<String> {
        Ok(self.render_value(topic, value))
    }
}
