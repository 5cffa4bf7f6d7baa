mod input;

pub use input::{
    is_boolean_attribute, known_attribute, AttrValue, ExtraAttributes, Input, InputKind, InputProps, Visibility,
    DEFAULT_ROWS,
};
