use dioxus::prelude::*;

/// Names that [`InputProps`](super::InputProps) owns. Extra attributes
/// using one of these are dropped instead of shadowing the named field.
static RESERVED: &[&str] = &[
    "placeholder",
    "name",
    "id",
    "onchange",
    "checked",
    "value",
    "rows",
    "class",
    "error",
    "disabled",
    "type",
];

/// HTML attributes a form definition may set by name.
static KNOWN_ATTRIBUTES: &[&str] = &[
    "accept",
    "autocapitalize",
    "autocomplete",
    "autofocus",
    "cols",
    "dir",
    "form",
    "hidden",
    "inputmode",
    "list",
    "max",
    "maxlength",
    "min",
    "minlength",
    "multiple",
    "pattern",
    "readonly",
    "required",
    "size",
    "spellcheck",
    "step",
    "tabindex",
    "title",
    "wrap",
];

/// Attributes where presence alone means true. Enumerated attributes such as
/// `spellcheck` take `"true"`/`"false"` as text instead.
static BOOLEAN_ATTRIBUTES: &[&str] = &["autofocus", "hidden", "multiple", "readonly", "required"];

/// Look up the static name of an HTML attribute, for attribute names that
/// only exist at runtime.
pub fn known_attribute(name: &str) -> Option<&'static str> {
    KNOWN_ATTRIBUTES.iter().copied().find(|known| *known == name)
}

pub fn is_boolean_attribute(name: &str) -> bool {
    BOOLEAN_ATTRIBUTES.contains(&name)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Flag(bool),
    Text(String),
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Pass-through attributes spread onto the rendered element, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtraAttributes(Vec<(&'static str, AttrValue)>);

impl ExtraAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &'static str, value: impl Into<AttrValue>) -> Self {
        self.push(name, value);
        self
    }

    pub fn push(&mut self, name: &'static str, value: impl Into<AttrValue>) {
        self.0.push((name, value.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &AttrValue)> {
        self.0.iter().map(|(name, value)| (*name, value))
    }

    /// Rewrite the attributes the way native markup expects booleans: a
    /// true flag becomes `name="name"` and a false flag disappears.
    pub fn sanitized(&self) -> Vec<(&'static str, String)> {
        self.iter()
            .filter(|(name, _)| {
                let reserved = RESERVED.contains(name);
                if reserved {
                    tracing::warn!(attribute = *name, "dropping attribute that shadows an input field");
                }
                !reserved
            })
            .filter_map(|(name, value)| match value {
                AttrValue::Flag(true) => Some((name, name.to_owned())),
                AttrValue::Flag(false) => None,
                AttrValue::Text(text) => Some((name, text.clone())),
            })
            .collect()
    }

    pub(super) fn to_attributes(&self) -> Vec<Attribute> {
        self.sanitized()
            .into_iter()
            .map(|(name, value)| Attribute::new(name, value, None, false))
            .collect()
    }
}

impl<V: Into<AttrValue>> FromIterator<(&'static str, V)> for ExtraAttributes {
    fn from_iter<I: IntoIterator<Item = (&'static str, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(name, value)| (name, value.into())).collect())
    }
}
