use std::path::Path;

use color_eyre::eyre::{Context, Result};
use ini::{Ini, Properties};

use crate::components::{
    is_boolean_attribute, known_attribute, AttrValue, ExtraAttributes, InputKind, DEFAULT_ROWS,
};

/// Keys of a field section that map onto named input properties. Every other
/// key is an extra HTML attribute.
static FIELD_KEYS: &[&str] =
    &["type", "placeholder", "id", "value", "checked", "rows", "class", "error", "disabled"];

/// One field of a form definition, plus the value it currently holds.
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub name: String,
    pub id: String,
    pub kind: InputKind,
    pub placeholder: String,
    pub value: String,
    pub checked: bool,
    pub rows: u32,
    pub class: String,
    pub error: bool,
    pub disabled: bool,
    pub attributes: ExtraAttributes,
}

impl FormField {
    pub fn new(name: impl Into<String>, kind: impl Into<InputKind>) -> Self {
        let name = name.into();

        Self {
            id: name.clone(),
            name,
            kind: kind.into(),
            placeholder: String::new(),
            value: String::new(),
            checked: false,
            rows: DEFAULT_ROWS,
            class: String::new(),
            error: false,
            disabled: false,
            attributes: ExtraAttributes::new(),
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn attribute(mut self, name: &'static str, value: impl Into<AttrValue>) -> Self {
        self.attributes.push(name, value);
        self
    }

    /// Record an edit reported by the rendered input. Checkboxes take the
    /// checked state from the event, everything else the value.
    pub fn update(&mut self, value: String, checked: bool) {
        match self.kind {
            InputKind::Checkbox => self.checked = checked,
            _ => self.value = value,
        }
    }
}

pub fn default_form() -> Vec<FormField> {
    vec![
        FormField::new("full_name", InputKind::Text)
            .placeholder("Full name")
            .attribute("required", true),
        FormField::new("email", "email")
            .placeholder("you@example.com")
            .attribute("autocomplete", "email"),
        FormField::new("password", InputKind::Password)
            .placeholder("Password")
            .attribute("required", true)
            .attribute("minlength", "8"),
        FormField { rows: 6, ..FormField::new("bio", InputKind::Textarea).placeholder("About you") },
        FormField { error: true, ..FormField::new("age", "number").attribute("min", "0") },
        FormField::new("terms", InputKind::Checkbox),
    ]
}

pub fn load_form(path: &Path) -> Result<Vec<FormField>> {
    let ini = Ini::load_from_file(path)
        .wrap_err_with(|| format!("failed to read form definition {}", path.display()))?;

    let fields = parse_form(&ini)?;
    tracing::info!(path = %path.display(), fields = fields.len(), "loaded form definition");

    Ok(fields)
}

/// Read every named section of `ini` as a field, in file order.
pub fn parse_form(ini: &Ini) -> Result<Vec<FormField>> {
    ini.iter()
        .filter_map(|(section, properties)| section.map(|name| (name, properties)))
        .map(|(name, properties)| read_field(name, properties))
        .collect()
}

fn read_field(name: &str, properties: &Properties) -> Result<FormField> {
    let text = |key: &str| properties.get(key).unwrap_or_default().to_owned();

    let flag = |key: &str| -> Result<bool> {
        properties
            .get(key)
            .map(str::parse::<bool>)
            .transpose()
            .wrap_err_with(|| format!("invalid {key}= in field [{name}]"))
            .map(Option::unwrap_or_default)
    };

    let rows = properties
        .get("rows")
        .map(str::parse::<u32>)
        .transpose()
        .wrap_err_with(|| format!("invalid rows= in field [{name}]"))?
        .unwrap_or(DEFAULT_ROWS);

    let mut field = FormField {
        placeholder: text("placeholder"),
        value: text("value"),
        checked: flag("checked")?,
        rows,
        class: text("class"),
        error: flag("error")?,
        disabled: flag("disabled")?,
        ..FormField::new(name, properties.get("type").unwrap_or_default())
    };

    if let Some(id) = properties.get("id") {
        field.id = id.to_owned();
    }

    for (key, value) in properties.iter().filter(|(key, _)| !FIELD_KEYS.contains(key)) {
        match known_attribute(key) {
            Some(attribute) => field.attributes.push(attribute, attribute_value(attribute, value)),
            None => tracing::warn!(field = name, attribute = key, "skipping unknown attribute"),
        }
    }

    Ok(field)
}

fn attribute_value(name: &str, value: &str) -> AttrValue {
    match value.parse() {
        Ok(flag) if is_boolean_attribute(name) => AttrValue::Flag(flag),
        _ => AttrValue::Text(value.to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Result<Vec<FormField>> {
        parse_form(&Ini::load_from_str(source)?)
    }

    #[test]
    fn sections_become_fields_in_order() {
        let fields = parse(
            r#"
[username]
placeholder = Username

[password]
type = password
placeholder = Password
required = true

[notes]
type = textarea
rows = 8
"#,
        )
        .unwrap();

        let names: Vec<_> = fields.iter().map(|field| field.name.as_str()).collect();
        assert_eq!(names, ["username", "password", "notes"]);

        assert_eq!(fields[0].kind, InputKind::Text);
        assert_eq!(fields[0].id, "username");
        assert_eq!(fields[0].rows, DEFAULT_ROWS);

        assert_eq!(fields[1].kind, InputKind::Password);
        assert_eq!(fields[1].placeholder, "Password");
        assert_eq!(fields[1].attributes, ExtraAttributes::new().with("required", true));

        assert_eq!(fields[2].kind, InputKind::Textarea);
        assert_eq!(fields[2].rows, 8);
    }

    #[test]
    fn named_keys_are_not_attributes() {
        let fields = parse(
            r#"
[agree]
type = checkbox
id = agree-box
checked = true
disabled = false
error = true
class = ml-2
"#,
        )
        .unwrap();

        let field = &fields[0];
        assert_eq!(field.kind, InputKind::Checkbox);
        assert_eq!(field.id, "agree-box");
        assert!(field.checked);
        assert!(!field.disabled);
        assert!(field.error);
        assert_eq!(field.class, "ml-2");
        assert!(field.attributes.is_empty());
    }

    #[test]
    fn extra_attributes_keep_text_and_flags() {
        let fields = parse(
            r#"
[email]
type = email
autocomplete = off
readonly = false
maxlength = 64
"#,
        )
        .unwrap();

        let expected = ExtraAttributes::new()
            .with("autocomplete", "off")
            .with("readonly", false)
            .with("maxlength", "64");
        assert_eq!(fields[0].kind, InputKind::Other("email".to_owned()));
        assert_eq!(fields[0].attributes, expected);
    }

    #[test]
    fn enumerated_attributes_stay_text() {
        let fields = parse("[notes]\ntype = textarea\nspellcheck = false\nrequired = false\n").unwrap();

        let expected = ExtraAttributes::new().with("spellcheck", "false").with("required", false);
        assert_eq!(fields[0].attributes, expected);
        assert_eq!(fields[0].attributes.sanitized(), vec![("spellcheck", "false".to_owned())]);
    }

    #[test]
    fn checkbox_update_follows_the_event() {
        let mut field = FormField::new("terms", InputKind::Checkbox);

        field.update(String::new(), true);
        field.update(String::new(), true);
        assert!(field.checked);

        field.update("on".to_owned(), false);
        assert!(!field.checked);
        assert_eq!(field.value, "");
    }

    #[test]
    fn text_update_takes_the_value() {
        let mut field = FormField::new("email", "email");

        field.update("a@b.c".to_owned(), true);
        assert_eq!(field.value, "a@b.c");
        assert!(!field.checked);
    }

    #[test]
    fn unknown_attributes_are_skipped() {
        let fields = parse(
            r#"
[q]
onclick = alert(1)
title = Search
"#,
        )
        .unwrap();

        assert_eq!(fields[0].attributes, ExtraAttributes::new().with("title", "Search"));
    }

    #[test]
    fn bad_rows_is_an_error() {
        let error = parse("[bio]\ntype = textarea\nrows = many\n").unwrap_err();
        assert!(error.to_string().contains("[bio]"), "{error}");
    }

    #[test]
    fn bad_flag_is_an_error() {
        let error = parse("[terms]\ntype = checkbox\nchecked = yes\n").unwrap_err();
        assert!(error.to_string().contains("checked="), "{error}");
    }

    #[test]
    fn loads_bundled_signup_form() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("forms/signup.ini");
        let fields = load_form(&path).unwrap();

        assert_eq!(fields.len(), 5);
        assert_eq!(fields[2].kind, InputKind::Password);
        assert_eq!(
            fields[2].attributes,
            ExtraAttributes::new().with("minlength", "8").with("required", true)
        );
        assert!(fields[4].checked);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_form(Path::new("does/not/exist.ini")).is_err());
    }

    #[test]
    fn default_form_covers_every_kind() {
        let kinds: Vec<_> = default_form().into_iter().map(|field| field.kind).collect();

        assert!(kinds.contains(&InputKind::Text));
        assert!(kinds.contains(&InputKind::Textarea));
        assert!(kinds.contains(&InputKind::Checkbox));
        assert!(kinds.contains(&InputKind::Password));
        assert!(kinds.iter().any(|kind| matches!(kind, InputKind::Other(_))));
    }
}
