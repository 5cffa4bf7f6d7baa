use itertools::Itertools;

pub const TEXTAREA: &str = "text-sm bg-white border border-gray-300 rounded-lg focus:ring-blue-500 focus:border-blue-500 w-full py-2 px-3 text-slate-700 placeholder:opacity-80 focus:outline-none focus:ring-1 resize-y";
pub const CHECKBOX: &str = "h-4 w-4 text-blue-600 border-gray-300 rounded focus:ring-blue-500";
pub const PASSWORD: &str = "text-sm border w-full py-2 px-3 text-slate-700 bg-white border-gray-300 rounded-lg focus:ring-blue-500 placeholder:opacity-80 focus:outline-none focus:ring-1 focus:border-transparent pr-10";
pub const FIELD: &str = "text-sm border bg-white border-gray-300 focus:ring-blue-500 focus:border-blue-500 rounded-lg w-full py-2 px-3 text-slate-700 placeholder:opacity-80 focus:outline-none focus:ring-1";
pub const TOGGLE: &str = "absolute inset-y-0 right-0 pr-3 flex items-center text-gray-500 hover:text-gray-700 focus:outline-none";

pub const ERROR: &str = "border-red-500 focus:ring-red-500";
pub const VALID: &str = "focus:ring-blue-500";
pub const DISABLED: &str = "bg-gray-100 cursor-not-allowed";
pub const CHECKBOX_DISABLED: &str = "opacity-60";
pub const TOGGLE_DISABLED: &str = "opacity-60 cursor-not-allowed";

fn join(fragments: &[&str]) -> String {
    fragments.iter().filter(|fragment| !fragment.is_empty()).join(" ")
}

/// Class for the text-like branches: textarea, password and the default input.
pub fn field(base: &str, error: bool, disabled: bool, extra: &str) -> String {
    let state = if error { ERROR } else { VALID };
    let disabled = if disabled { DISABLED } else { "" };
    join(&[base, state, disabled, extra])
}

// No error state here: checkboxes are styled the same whether or not the
// field is invalid.
pub fn checkbox(disabled: bool, extra: &str) -> String {
    join(&[CHECKBOX, extra, if disabled { CHECKBOX_DISABLED } else { "" }])
}

pub fn toggle(disabled: bool) -> String {
    join(&[TOGGLE, if disabled { TOGGLE_DISABLED } else { "" }])
}
