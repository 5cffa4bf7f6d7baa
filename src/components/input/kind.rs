/// Selects which markup [`Input`](super::Input) renders.
///
/// Anything that isn't one of the dedicated kinds falls back to a plain
/// `<input>` whose native type is the kind's string form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum InputKind {
    #[default]
    Text,
    Textarea,
    Checkbox,
    Password,
    Other(String),
}

impl InputKind {
    /// The `type` attribute an `<input>` of this kind carries.
    pub fn native_type(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Checkbox => "checkbox",
            Self::Password => "password",
            Self::Other(native) => native,
        }
    }
}

impl From<&str> for InputKind {
    fn from(value: &str) -> Self {
        match value {
            "" | "text" => Self::Text,
            "textarea" => Self::Textarea,
            "checkbox" => Self::Checkbox,
            "password" => Self::Password,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl From<String> for InputKind {
    fn from(value: String) -> Self {
        value.as_str().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dedicated_kinds() {
        assert_eq!(InputKind::from("textarea"), InputKind::Textarea);
        assert_eq!(InputKind::from("checkbox"), InputKind::Checkbox);
        assert_eq!(InputKind::from("password"), InputKind::Password);
        assert_eq!(InputKind::from("text"), InputKind::Text);
    }

    #[test]
    fn empty_string_means_text() {
        assert_eq!(InputKind::from(""), InputKind::Text);
    }

    #[test]
    fn unknown_kinds_keep_their_native_type() {
        let kind = InputKind::from("email");
        assert_eq!(kind, InputKind::Other("email".to_owned()));
        assert_eq!(kind.native_type(), "email");
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(InputKind::from("Password"), InputKind::Other("Password".to_owned()));
    }
}
