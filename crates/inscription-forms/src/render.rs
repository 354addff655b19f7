//! Page rendering for the two presentation layers.
//!
//! Both layers lay the page out the same way: title, subtitle, success
//! alert while submitted, first and last name side by side, then email,
//! password, confirmation and the submit button. Each field renders its
//! message slot when the state carries an error for it.

use std::str::FromStr;

use ironhtml::html;
use ironhtml::typed::Document;
use ironhtml_elements::{Body, Div, Head, Html, Link, Meta, Style, Title};
use serde::{Deserialize, Serialize};

use crate::config::FormConfig;
use crate::error::FormError;
use crate::field::Field;
use crate::fields::registration_fields;
use crate::form::FormFieldDef;
use crate::state::FormState;
use crate::widgets::{html_escape, BootstrapTextInput, StyledTextInput, Widget};

const PAGE_TITLE: &str = "Inscription";
const SUBTITLE: &str = "Remplis le formulaire pour créer ton compte.";
const SUCCESS_MESSAGE: &str = "Inscription envoyée !";
const SUBMIT_LABEL: &str = "S’inscrire";

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.2/dist/css/bootstrap.min.css";

const PLAIN_CSS: &str = "\
body { margin: 0; font-family: system-ui, -apple-system, 'Segoe UI', sans-serif; \
background: #f5f5f5; color: #222; }\n\
.page { max-width: 540px; margin: 48px auto; padding: 32px; background: #fff; \
border-radius: 10px; box-shadow: 0 2px 12px rgba(0,0,0,0.08); }\n\
.title { margin: 0 0 8px; font-size: 28px; font-weight: 600; }\n\
.subtitle { margin: 0 0 24px; font-size: 15px; color: gray; }";

const FIELD_STYLE: &str = "margin-top: 16px; flex: 1;";
const LABEL_STYLE: &str = "display: block; margin-bottom: 6px; font-weight: 600;";
const ERROR_STYLE: &str = "color: #d32f2f; font-size: 13px; margin-top: 4px;";
const ALERT_STYLE: &str = "padding: 12px 16px; margin-bottom: 24px; border-radius: 6px; \
background: #edf7ed; color: #1e4620;";
const BUTTON_STYLE: &str = "width: 100%; margin-top: 24px; padding: 12px; font-size: 16px; \
color: #fff; background: #1976d2; border: none; border-radius: 6px; cursor: pointer;";

/// Which presentation layer renders the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Presentation {
    /// Bootstrap 5 component classes.
    #[default]
    Bootstrap,
    /// Hand-written inline styles, no CSS framework.
    Plain,
}

impl FromStr for Presentation {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bootstrap" => Ok(Self::Bootstrap),
            "plain" => Ok(Self::Plain),
            other => Err(FormError::Config(format!(
                "unknown presentation: {other} (expected bootstrap or plain)"
            ))),
        }
    }
}

/// Renders the page with the layer selected by `config`.
pub fn render_page(state: &FormState, config: &FormConfig) -> String {
    let fields = registration_fields(config);
    match config.presentation {
        Presentation::Bootstrap => render_bootstrap_page(&fields, state),
        Presentation::Plain => render_plain_page(&fields, state),
    }
}

fn split_names(fields: &[FormFieldDef]) -> (Vec<&FormFieldDef>, Vec<&FormFieldDef>) {
    fields
        .iter()
        .partition(|def| matches!(def.field, Field::FirstName | Field::LastName))
}

/// Renders a form field with Bootstrap 5 styling.
pub fn render_bootstrap_field(def: &FormFieldDef, value: &str, error: Option<&str>) -> String {
    let id = format!("id_{}", def.name());

    let required_marker = if def.required { " *" } else { "" };
    let label_text = format!("{}{}", def.label, required_marker);

    let mut attrs = def.attrs.clone();
    attrs.set("id", &id);
    if error.is_some() {
        let current_class = attrs.get("class").cloned().unwrap_or_default();
        attrs.set("class", format!("{current_class} is-invalid").trim());
    }
    if def.required {
        attrs.set("required", "required");
    }

    let widget = BootstrapTextInput::of_type(def.field.input_type());
    let widget_html = widget.render(def.name(), Some(value), &attrs);

    let label_el = html! {
        label.for_(#id).class("form-label") { #label_text }
    };

    let help_text = def.help_text.clone();

    let mut wrapper = html! { div.class("mb-3") }
        .raw(label_el.render())
        .raw(&widget_html);

    if let Some(message) = error {
        wrapper = wrapper.child::<Div, _>(|d| d.class("invalid-feedback").text(message));
    }

    wrapper
        .when(help_text.is_some(), |d| {
            d.child::<Div, _>(|h| {
                h.class("form-text")
                    .text(help_text.as_deref().unwrap_or(""))
            })
        })
        .render()
}

/// Renders the registration form with Bootstrap 5 styling.
pub fn render_bootstrap_form(fields: &[FormFieldDef], state: &FormState) -> String {
    let field_html = |def: &FormFieldDef| {
        render_bootstrap_field(def, state.form.get(def.field), state.errors.get(def.field))
    };

    let (names, others) = split_names(fields);

    let mut form = html! {
        form.action("#").method("post")
    }
    .attr("novalidate", "novalidate");

    form = form.child::<Div, _>(|row| {
        names.iter().copied().fold(row.class("row g-2"), |row, def| {
            let html = field_html(def);
            row.child::<Div, _>(|col| col.class("col").raw(&html))
        })
    });

    for def in others {
        let html = field_html(def);
        form = form.child::<Div, _>(|d| d.raw(&html));
    }

    form = form.child::<Div, _>(|d| {
        let label = SUBMIT_LABEL;
        let btn = html! {
            button.type_("submit").class("btn btn-primary w-100 mt-2") {
                #label
            }
        };
        d.raw(btn.render())
    });

    form.render()
}

/// Renders the complete Bootstrap 5 page.
pub fn render_bootstrap_page(fields: &[FormFieldDef], state: &FormState) -> String {
    let form_html = render_bootstrap_form(fields, state);

    let (title, subtitle_text) = (PAGE_TITLE, SUBTITLE);
    let heading = html! {
        h1.class("h3 mb-2") { #title }
    };
    let subtitle = html! {
        p.class("text-secondary mb-4") { #subtitle_text }
    };

    Document::new()
        .doctype()
        .root::<Html, _>(|html_el| {
            html_el
                .attr("lang", "fr")
                .child::<Head, _>(|head| {
                    head.child::<Meta, _>(|m| m.attr("charset", "UTF-8"))
                        .child::<Meta, _>(|m| {
                            m.attr("name", "viewport")
                                .attr("content", "width=device-width, initial-scale=1.0")
                        })
                        .child::<Title, _>(|t| t.text(PAGE_TITLE))
                        .child::<Link, _>(|l| l.attr("href", BOOTSTRAP_CSS).attr("rel", "stylesheet"))
                })
                .child::<Body, _>(|body| {
                    body.child::<Div, _>(|container| {
                        container.class("container mt-5").attr("style", "max-width: 540px;")
                            .raw(heading.render())
                            .raw(subtitle.render())
                            .when(state.submitted, |c| {
                                c.child::<Div, _>(|a| {
                                    a.class("alert alert-success mb-3")
                                        .attr("role", "alert")
                                        .text(SUCCESS_MESSAGE)
                                })
                            })
                            .raw(&form_html)
                    })
                })
        })
        .build()
}

/// Renders a form field with inline styles.
pub fn render_plain_field(def: &FormFieldDef, value: &str, error: Option<&str>) -> String {
    let id = format!("id_{}", def.name());

    let mut attrs = def.attrs.clone();
    attrs.set("id", &id);

    let widget = StyledTextInput::of_type(def.field.input_type()).invalid(error.is_some());
    let widget_html = widget.render(def.name(), Some(value), &attrs);

    let label_html = format!(
        r#"<label for="{id}" style="{LABEL_STYLE}">{}</label>"#,
        html_escape(&def.label)
    );

    let mut wrapper = html! { div.class("field") }
        .attr("style", FIELD_STYLE)
        .raw(&label_html)
        .raw(&widget_html);

    if let Some(message) = error {
        wrapper = wrapper.child::<Div, _>(|d| d.attr("style", ERROR_STYLE).text(message));
    }

    wrapper.render()
}

/// Renders the registration form with inline styles.
pub fn render_plain_form(fields: &[FormFieldDef], state: &FormState) -> String {
    let field_html = |def: &FormFieldDef| {
        render_plain_field(def, state.form.get(def.field), state.errors.get(def.field))
    };

    let (names, others) = split_names(fields);

    let mut form = html! {
        form.action("#").method("post")
    }
    .attr("novalidate", "novalidate");

    form = form.child::<Div, _>(|row| {
        names
            .iter()
            .copied()
            .fold(row.attr("style", "display: flex; gap: 16px;"), |row, def| {
                row.raw(&field_html(def))
            })
    });

    for def in others {
        form = form.raw(&field_html(def));
    }

    let button = format!(r#"<button type="submit" style="{BUTTON_STYLE}">{SUBMIT_LABEL}</button>"#);
    form.raw(&button).render()
}

/// Renders the complete hand-styled page.
pub fn render_plain_page(fields: &[FormFieldDef], state: &FormState) -> String {
    let form_html = render_plain_form(fields, state);

    Document::new()
        .doctype()
        .root::<Html, _>(|html_el| {
            html_el
                .attr("lang", "fr")
                .child::<Head, _>(|head| {
                    head.child::<Meta, _>(|m| m.attr("charset", "UTF-8"))
                        .child::<Meta, _>(|m| {
                            m.attr("name", "viewport")
                                .attr("content", "width=device-width, initial-scale=1.0")
                        })
                        .child::<Title, _>(|t| t.text(PAGE_TITLE))
                        .child::<Style, _>(|s| s.raw(PLAIN_CSS))
                })
                .child::<Body, _>(|body| {
                    body.child::<Div, _>(|page| {
                        let (title, subtitle_text) = (PAGE_TITLE, SUBTITLE);
                        let heading = html! {
                            h1.class("title") { #title }
                        };
                        let subtitle = html! {
                            p.class("subtitle") { #subtitle_text }
                        };
                        page.class("page")
                            .raw(heading.render())
                            .raw(subtitle.render())
                            .when(state.submitted, |p| {
                                p.child::<Div, _>(|a| {
                                    a.attr("style", ALERT_STYLE)
                                        .attr("role", "alert")
                                        .text(SUCCESS_MESSAGE)
                                })
                            })
                            .raw(&form_html)
                    })
                })
        })
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::RegistrationValidator;

    fn submitted_empty() -> FormState {
        FormState::new().submit(&RegistrationValidator::default()).state
    }

    #[test]
    fn test_presentation_from_str() {
        assert_eq!("bootstrap".parse::<Presentation>().unwrap(), Presentation::Bootstrap);
        assert_eq!("Plain".parse::<Presentation>().unwrap(), Presentation::Plain);
        assert!("material".parse::<Presentation>().is_err());
    }

    #[test]
    fn test_bootstrap_field_with_error() {
        let fields = registration_fields(&FormConfig::default());
        let html = render_bootstrap_field(&fields[2], "bad", Some("Adresse e-mail invalide."));
        assert!(html.contains("is-invalid"));
        assert!(html.contains("invalid-feedback"));
        assert!(html.contains("Adresse e-mail invalide."));
        assert!(html.contains("Adresse e-mail *"));
    }

    #[test]
    fn test_bootstrap_field_without_error() {
        let fields = registration_fields(&FormConfig::default());
        let html = render_bootstrap_field(&fields[0], "Ada", None);
        assert!(!html.contains("is-invalid"));
        assert!(html.contains(r#"value="Ada""#));
    }

    #[test]
    fn test_bootstrap_page_initial() {
        let html = render_page(&FormState::new(), &FormConfig::default());
        assert!(html.contains("bootstrap.min.css"));
        assert!(html.contains("Inscription"));
        assert!(html.contains(SUBTITLE));
        assert!(html.contains(SUBMIT_LABEL));
        assert!(!html.contains(SUCCESS_MESSAGE));
        for field in Field::ALL {
            assert!(html.contains(&format!(r#"name="{}""#, field.name())));
        }
    }

    #[test]
    fn test_bootstrap_page_shows_errors() {
        let html = render_page(&submitted_empty(), &FormConfig::default());
        assert!(html.contains("Le prénom est obligatoire."));
        assert!(html.contains("Le mot de passe est obligatoire."));
    }

    #[test]
    fn test_plain_page_success_alert() {
        let mut state = FormState::new();
        state.submitted = true;
        let config = FormConfig::default().presentation(Presentation::Plain);
        let html = render_page(&state, &config);
        assert!(!html.contains("bootstrap"));
        assert!(html.contains(SUCCESS_MESSAGE));
        assert!(html.contains("display: flex"));
    }

    #[test]
    fn test_plain_page_styles_title_and_subtitle() {
        let config = FormConfig::default().presentation(Presentation::Plain);
        let html = render_page(&FormState::new(), &config);
        assert!(html.contains(r#"class="title""#));
        assert!(html.contains(r#"class="subtitle""#));
        assert!(html.contains(".title {"));
        assert!(html.contains(".subtitle {"));
        assert!(html.contains("color: gray"));
    }

    #[test]
    fn test_plain_page_shows_errors() {
        let config = FormConfig::default().presentation(Presentation::Plain);
        let html = render_page(&submitted_empty(), &config);
        assert!(html.contains(ERROR_STYLE));
        assert!(html.contains("Le nom est obligatoire."));
    }

    #[test]
    fn test_password_values_never_rendered() {
        let state = FormState::new()
            .set_field(Field::Password, "hunter22")
            .set_field(Field::ConfirmPassword, "hunter22");
        for presentation in [Presentation::Bootstrap, Presentation::Plain] {
            let config = FormConfig::default().presentation(presentation);
            assert!(!render_page(&state, &config).contains("hunter22"));
        }
    }
}
