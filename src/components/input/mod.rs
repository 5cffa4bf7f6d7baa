mod attributes;
mod class;
mod kind;
mod password;

use dioxus::prelude::*;

pub use attributes::{is_boolean_attribute, known_attribute, AttrValue, ExtraAttributes};
pub use kind::InputKind;
pub use password::Visibility;

use password::PasswordInput;

pub const DEFAULT_ROWS: u32 = 4;

#[derive(PartialEq, Props, Clone)]
pub struct InputProps {
    #[props(default, into)]
    kind: InputKind,
    #[props(default, into)]
    placeholder: String,
    #[props(default, into)]
    name: String,
    #[props(default, into)]
    id: String,
    #[props(default)]
    onchange: EventHandler<FormEvent>,
    /// Only read by checkboxes.
    #[props(default = false)]
    checked: bool,
    #[props(default, into)]
    value: String,
    /// Only read by textareas.
    #[props(default = DEFAULT_ROWS)]
    rows: u32,
    /// Appended after the computed classes.
    #[props(default, into)]
    class: String,
    #[props(default = false)]
    error: bool,
    #[props(default = false)]
    disabled: bool,
    #[props(default)]
    attributes: ExtraAttributes,
}

fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}

impl InputProps {
    fn placeholder(&self) -> Option<&str> {
        non_empty(&self.placeholder)
    }

    fn name(&self) -> Option<&str> {
        non_empty(&self.name)
    }

    fn id(&self) -> Option<&str> {
        non_empty(&self.id)
    }
}

/// A form field whose markup is picked by `kind`: a textarea, a checkbox,
/// a password input with a show/hide toggle, or a plain `<input>` of any
/// other native type.
///
/// Changes are reported through `onchange` as-is. `error` only affects
/// styling; no validation happens here.
#[component]
pub fn Input(props: InputProps) -> Element {
    match props.kind {
        InputKind::Textarea => textarea(&props),
        InputKind::Checkbox => checkbox(&props),
        InputKind::Password => rsx! {
            PasswordInput { field: props }
        },
        InputKind::Text | InputKind::Other(_) => field(&props),
    }
}

fn textarea(props: &InputProps) -> Element {
    let textarea_class = class::field(class::TEXTAREA, props.error, props.disabled, &props.class);
    let attributes = props.attributes.to_attributes();

    rsx! {
        textarea {
            id: props.id(),
            class: textarea_class,
            placeholder: props.placeholder(),
            name: props.name(),
            rows: "{props.rows}",
            oninput: props.onchange,
            value: props.value.as_str(),
            disabled: props.disabled,
            ..attributes,
        }
    }
}

fn checkbox(props: &InputProps) -> Element {
    let checkbox_class = class::checkbox(props.disabled, &props.class);
    let attributes = props.attributes.to_attributes();

    rsx! {
        input {
            id: props.id(),
            r#type: "checkbox",
            class: checkbox_class,
            name: props.name(),
            onchange: props.onchange,
            checked: props.checked,
            disabled: props.disabled,
            ..attributes,
        }
    }
}

fn field(props: &InputProps) -> Element {
    let input_class = class::field(class::FIELD, props.error, props.disabled, &props.class);
    let attributes = props.attributes.to_attributes();

    rsx! {
        input {
            r#type: props.kind.native_type(),
            class: input_class,
            placeholder: props.placeholder(),
            name: props.name(),
            id: props.id(),
            oninput: props.onchange,
            value: props.value.as_str(),
            disabled: props.disabled,
            ..attributes,
        }
    }
}
