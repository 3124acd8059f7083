//! # Input Components
//!
//! Reusable form inputs for the Pedidos Admin console:
//! - **TextInput**: Single-line input (text, email, password, number, url, date)
//! - **TextArea**: Multi-line text input
//! - **Select**: Dropdown selection
//! - **Checkbox**: Boolean checkbox
//!
//! Styling comes from the `input*` rules of `main.css`.

use dioxus::prelude::*;

// ============================================================================
// Text Input Component
// ============================================================================

/// Properties for TextInput component
#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    /// Input value
    pub value: String,

    /// Label text (optional)
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Help text shown below input
    #[props(default)]
    pub help_text: Option<String>,

    /// Error message (shows error state)
    #[props(default)]
    pub error: Option<String>,

    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,

    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Input type (text, email, password, number, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,

    /// `min` attribute for number and date inputs
    #[props(default)]
    pub min: Option<String>,

    /// `step` attribute for number inputs
    #[props(default)]
    pub step: Option<String>,

    /// Prefix text, e.g. a currency sign
    #[props(default)]
    pub prefix: Option<String>,

    /// Additional CSS classes
    #[props(default)]
    pub class: Option<String>,

    /// Change handler, called on every keystroke
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Single-line text input component
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let has_error = props.error.is_some();
    let input_class = build_input_class(has_error, props.disabled, &props.class);

    rsx! {
        div {
            class: "input-group",

            // Label
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    "{label}"
                    if props.required {
                        span { class: "input-required", "*" }
                    }
                }
            }

            div {
                class: if props.prefix.is_some() { "input-wrapper with-prefix" } else { "input-wrapper" },

                if let Some(prefix) = &props.prefix {
                    span { class: "input-prefix", "{prefix}" }
                }

                input {
                    class: "{input_class}",
                    r#type: "{props.input_type}",
                    value: "{props.value}",
                    placeholder: props.placeholder.as_deref().unwrap_or(""),
                    required: props.required,
                    disabled: props.disabled,
                    min: props.min.clone(),
                    step: props.step.clone(),
                    oninput: move |e| props.on_change.call(e.value()),
                }
            }

            // Help text or error
            if let Some(error) = &props.error {
                p { class: "input-error-text", "{error}" }
            } else if let Some(help) = &props.help_text {
                p { class: "input-help", "{help}" }
            }
        }
    }
}

// ============================================================================
// Text Area Component
// ============================================================================

/// Properties for TextArea component
#[derive(Props, Clone, PartialEq)]
pub struct TextAreaProps {
    pub value: String,

    #[props(default)]
    pub label: Option<String>,

    #[props(default)]
    pub placeholder: Option<String>,

    /// Number of visible rows
    #[props(default = 3)]
    pub rows: usize,

    #[props(default = false)]
    pub required: bool,

    #[props(default = false)]
    pub disabled: bool,

    /// Whether to allow vertical resize
    #[props(default = true)]
    pub resizable: bool,

    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Multi-line text input component
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let textarea_class = build_textarea_class(false, props.disabled, props.resizable, &None);

    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    "{label}"
                    if props.required {
                        span { class: "input-required", "*" }
                    }
                }
            }

            textarea {
                class: "{textarea_class}",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                value: "{props.value}",
                oninput: move |e| props.on_change.call(e.value()),
            }
        }
    }
}

// ============================================================================
// Select Component
// ============================================================================

/// A single option for the Select component
#[derive(Clone, PartialEq, Debug)]
pub struct SelectOption {
    /// Option value
    pub value: String,
    /// Display label
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Option whose label is its value
    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
        }
    }
}

/// Properties for Select component
#[derive(Props, Clone, PartialEq)]
pub struct SelectProps {
    /// Selected value
    pub value: String,

    /// Available options
    pub options: Vec<SelectOption>,

    #[props(default)]
    pub label: Option<String>,

    /// Leading option with an empty value, e.g. "Todos los estados"
    #[props(default)]
    pub empty_option: Option<String>,

    #[props(default = false)]
    pub required: bool,

    #[props(default = false)]
    pub disabled: bool,

    #[props(default)]
    pub class: Option<String>,

    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Dropdown select component
#[component]
pub fn Select(props: SelectProps) -> Element {
    let select_class = build_select_class(false, props.disabled, &props.class);

    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    "{label}"
                    if props.required {
                        span { class: "input-required", "*" }
                    }
                }
            }

            select {
                class: "{select_class}",
                disabled: props.disabled,
                onchange: move |e| props.on_change.call(e.value()),

                if let Some(empty) = &props.empty_option {
                    option {
                        value: "",
                        selected: props.value.is_empty(),
                        "{empty}"
                    }
                }

                for option in &props.options {
                    option {
                        key: "{option.value}",
                        value: "{option.value}",
                        selected: props.value == option.value,
                        "{option.label}"
                    }
                }
            }
        }
    }
}

// ============================================================================
// Checkbox Component
// ============================================================================

/// Properties for Checkbox component
#[derive(Props, Clone, PartialEq)]
pub struct CheckboxProps {
    /// Whether checked
    pub checked: bool,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Whether disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<bool>,
}

/// Checkbox input component
#[component]
pub fn Checkbox(props: CheckboxProps) -> Element {
    rsx! {
        label {
            class: if props.disabled { "checkbox-label disabled" } else { "checkbox-label" },

            input {
                r#type: "checkbox",
                checked: props.checked,
                disabled: props.disabled,
                onchange: move |_| {
                    if !props.disabled {
                        props.on_change.call(!props.checked);
                    }
                },
            }

            if let Some(label) = &props.label {
                span { "{label}" }
            }
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Build input class string
fn build_input_class(has_error: bool, disabled: bool, extra: &Option<String>) -> String {
    let mut classes = vec!["input"];

    if has_error {
        classes.push("input-invalid");
    }

    if disabled {
        classes.push("input-disabled");
    }

    let mut result = classes.join(" ");
    if let Some(extra) = extra {
        result.push(' ');
        result.push_str(extra);
    }

    result
}

/// Build textarea class string
fn build_textarea_class(
    has_error: bool,
    disabled: bool,
    resizable: bool,
    extra: &Option<String>,
) -> String {
    let mut class = build_input_class(has_error, disabled, extra);

    if resizable {
        class.push_str(" resize-y");
    } else {
        class.push_str(" resize-none");
    }

    class
}

/// Build select class string
fn build_select_class(has_error: bool, disabled: bool, extra: &Option<String>) -> String {
    let mut class = build_input_class(has_error, disabled, extra);
    class.push_str(" input-select");
    class
}

// ============================================================================
// Tests
// ============================================================================
