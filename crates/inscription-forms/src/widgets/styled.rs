//! Hand-styled widgets that carry their own inline CSS.

use super::{html_escape, Widget, WidgetAttrs};

const INPUT_STYLE: &str = "width: 100%; padding: 10px 12px; font-size: 15px; \
border: 1px solid #ccc; border-radius: 6px; box-sizing: border-box;";

const INVALID_BORDER: &str = "border-color: #d32f2f;";

/// Text input styled inline, without a CSS framework.
#[derive(Debug, Clone)]
pub struct StyledTextInput {
    /// The HTML input type (text, email, password).
    pub input_type: String,
    /// Whether the input is rendered with the error border.
    pub invalid: bool,
}

impl StyledTextInput {
    /// Creates an input of the given HTML type.
    pub fn of_type(input_type: impl Into<String>) -> Self {
        Self {
            input_type: input_type.into(),
            invalid: false,
        }
    }

    /// Renders the input with the error border.
    #[must_use]
    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }
}

impl Widget for StyledTextInput {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let value_attr = value
            .filter(|_| self.input_type != "password")
            .map(|v| format!(r#" value="{}""#, html_escape(v)))
            .unwrap_or_default();

        let id = attrs
            .get("id")
            .cloned()
            .unwrap_or_else(|| format!("id_{name}"));

        let style = if self.invalid {
            format!("{INPUT_STYLE} {INVALID_BORDER}")
        } else {
            INPUT_STYLE.to_string()
        };

        let extra_attrs = attrs.to_html_except(&["id", "style"]);

        format!(
            r#"<input type="{}" id="{}" name="{}" style="{}"{}{extra_attrs}>"#,
            self.input_type, id, name, style, value_attr
        )
    }
}
