use dioxus::prelude::*;

use super::{class, InputProps};

// (path, even-odd fill)
pub(super) const EYE_OPEN: &[(&str, bool)] = &[
    ("M10 12a2 2 0 100-4 2 2 0 000 4z", false),
    ("M.458 10C1.732 5.943 5.522 3 10 3s8.268 2.943 9.542 7c-1.274 4.057-5.064 7-9.542 7S1.732 14.057.458 10zM14 10a4 4 0 11-8 0 4 4 0 018 0z", true),
];

pub(super) const EYE_SLASHED: &[(&str, bool)] = &[
    ("M3.707 2.293a1 1 0 00-1.414 1.414l14 14a1 1 0 001.414-1.414l-1.473-1.473A10.014 10.014 0 0019.542 10C18.268 5.943 14.478 3 10 3a9.958 9.958 0 00-4.512 1.074l-1.78-1.781zm4.261 4.26l1.514 1.515a2.003 2.003 0 012.45 2.45l1.514 1.514a4 4 0 00-5.478-5.478z", true),
    ("M12.454 16.697L9.75 13.992a4 4 0 01-3.742-3.741L2.335 6.578A9.98 9.98 0 00.458 10c1.274 4.057 5.065 7 9.542 7 .847 0 1.669-.105 2.454-.303z", false),
];

/// Whether a password field shows its value in the clear.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Shown,
}

impl Visibility {
    pub fn toggled(self) -> Self {
        match self {
            Self::Hidden => Self::Shown,
            Self::Shown => Self::Hidden,
        }
    }

    pub fn native_type(self) -> &'static str {
        match self {
            Self::Hidden => "password",
            Self::Shown => "text",
        }
    }
}

/// Owns the visibility of one password field. Mounting a fresh instance
/// always starts out hidden.
#[component]
pub(super) fn PasswordInput(field: InputProps) -> Element {
    let mut visibility = use_signal(Visibility::default);

    let ontoggle = move |_: MouseEvent| {
        let next = visibility().toggled();
        tracing::debug!(?next, "password visibility toggled");
        visibility.set(next);
    };

    rsx! {
        PasswordField { field, visibility: visibility(), ontoggle }
    }
}

#[derive(PartialEq, Props, Clone)]
pub(super) struct PasswordFieldProps {
    field: InputProps,
    visibility: Visibility,
    ontoggle: EventHandler<MouseEvent>,
}

/// Stateless rendering of a password field at a given visibility.
#[component]
pub(super) fn PasswordField(props: PasswordFieldProps) -> Element {
    let field = &props.field;
    let input_class = class::field(class::PASSWORD, field.error, field.disabled, &field.class);
    let attributes = field.attributes.to_attributes();

    rsx! {
        div {
            class: "relative",
            input {
                r#type: props.visibility.native_type(),
                class: input_class,
                placeholder: field.placeholder(),
                name: field.name(),
                id: field.id(),
                oninput: field.onchange,
                value: field.value.as_str(),
                disabled: field.disabled,
                ..attributes,
            }
            button {
                r#type: "button",
                class: class::toggle(field.disabled),
                onclick: props.ontoggle,
                disabled: field.disabled,
                {eye_icon(props.visibility)}
            }
        }
    }
}

fn eye_icon(visibility: Visibility) -> Element {
    let paths = match visibility {
        Visibility::Hidden => EYE_OPEN,
        Visibility::Shown => EYE_SLASHED,
    };

    rsx! {
        svg {
            class: "h-5 w-5",
            view_box: "0 0 20 20",
            fill: "currentColor",
            for &(d, evenodd) in paths {
                path {
                    fill_rule: evenodd.then_some("evenodd"),
                    clip_rule: evenodd.then_some("evenodd"),
                    d: d
                }
            }
        }
    }
}
