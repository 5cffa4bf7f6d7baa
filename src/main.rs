mod args;

use color_eyre::eyre::{eyre, Result};
use dioxus::desktop::{Config, WindowBuilder};
use dioxus::prelude::*;
use form_input::components::{Input, InputKind};
use form_input::gallery::{self, FormField};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = args::get_args();
    init_tracing(args.verbose)?;

    let mut fields = match &args.form {
        Some(path) => gallery::load_form(path)?,
        None => gallery::default_form(),
    };

    if args.disabled {
        fields.iter_mut().for_each(|field| field.disabled = true);
    }

    tracing::info!(fields = fields.len(), "launching input gallery");

    dioxus::LaunchBuilder::new()
        .with_cfg(
            Config::default()
                .with_menu(None)
                .with_window(WindowBuilder::new().with_title("Input gallery")),
        )
        .with_context(fields)
        .launch(App);

    Ok(())
}

fn init_tracing(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| eyre!("failed to install tracing subscriber: {error}"))
}

#[component]
fn App() -> Element {
    let initial = use_context::<Vec<FormField>>();
    let mut fields = use_signal(move || initial);

    let inputs: Vec<_> = fields
        .read()
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let onchange = move |event: FormEvent| {
                let mut guard = fields.write();
                let field = &mut guard[index];

                field.update(event.value(), event.checked());
                tracing::debug!(
                    field = %field.name,
                    value = %field.value,
                    checked = field.checked,
                    "field changed"
                );
            };

            rsx! {
                label {
                    key: "{field.name}",
                    class: "flex flex-col gap-1 text-sm text-slate-600",
                    span { "{field.name}" }
                    Input {
                        kind: field.kind.clone(),
                        placeholder: field.placeholder.clone(),
                        name: field.name.clone(),
                        id: field.id.clone(),
                        onchange: onchange,
                        checked: field.checked,
                        value: field.value.clone(),
                        rows: field.rows,
                        class: field.class.clone(),
                        error: field.error,
                        disabled: field.disabled,
                        attributes: field.attributes.clone()
                    }
                }
            }
        })
        .collect();

    let summary = fields
        .read()
        .iter()
        .map(|field| match field.kind {
            InputKind::Checkbox => format!("{} = {}", field.name, field.checked),
            _ => format!("{} = {:?}", field.name, field.value),
        })
        .collect::<Vec<_>>()
        .join("\n");

    rsx! {
        form {
            class: "p-4 w-96 flex flex-col gap-4",
            onsubmit: move |event: FormEvent| event.prevent_default(),
            {inputs.into_iter()}
        }
        pre { class: "p-4 text-xs text-slate-500", {summary} }
    }
}
