//! Bootstrap 5 form widgets.

use super::{html_escape, Widget, WidgetAttrs};

/// Bootstrap 5 text input widget.
#[derive(Debug, Clone)]
pub struct BootstrapTextInput {
    /// The HTML input type (text, email, password).
    pub input_type: String,
}

impl BootstrapTextInput {
    /// Creates an input of the given HTML type.
    pub fn of_type(input_type: impl Into<String>) -> Self {
        Self {
            input_type: input_type.into(),
        }
    }
}

impl Widget for BootstrapTextInput {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let value_attr = value
            .filter(|_| self.input_type != "password")
            .map(|v| format!(r#" value="{}""#, html_escape(v)))
            .unwrap_or_default();

        let id = attrs
            .get("id")
            .cloned()
            .unwrap_or_else(|| format!("id_{name}"));

        let mut class = "form-control".to_string();
        if let Some(extra_class) = attrs.get("class") {
            class = format!("{class} {extra_class}");
        }

        let extra_attrs = attrs.to_html_except(&["class", "id"]);

        format!(
            r#"<input type="{}" class="{}" id="{}" name="{}"{}{extra_attrs}>"#,
            self.input_type, class, id, name, value_attr
        )
    }
}
