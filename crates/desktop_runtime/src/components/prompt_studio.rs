//! Prompt Studio app: local templating plus the remote optimize endpoint.

use std::collections::BTreeMap;

use leptos::*;
use platform_host::{OptimizeError, OptimizeRequest};
use prompt_engine::Category;
use system_ui::{
    Button, FieldGroup, InlineMessage, MessageTone, SelectField, TextArea, TextField,
};

use crate::host::window_primary_input_dom_id;
use crate::model::WindowId;
use crate::runtime_context::use_desktop_runtime;

/// Collects the advanced constraint fields, dropping blanks so the engine and
/// the endpoint only see meaningful entries.
fn advanced_fields(
    audience: &str,
    tone: &str,
    style: &str,
) -> Option<BTreeMap<String, String>> {
    let mut fields = BTreeMap::new();
    for (key, value) in [("audience", audience), ("tone", tone), ("style", style)] {
        if !value.trim().is_empty() {
            fields.insert(key.to_string(), value.trim().to_string());
        }
    }
    if fields.is_empty() {
        None
    } else {
        Some(fields)
    }
}

#[component]
pub(super) fn PromptStudioView(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let prompt = create_rw_signal(String::new());
    let category = create_rw_signal(Category::Text);
    let show_advanced = create_rw_signal(false);
    let audience = create_rw_signal(String::new());
    let tone = create_rw_signal(String::new());
    let style = create_rw_signal(String::new());
    let result = create_rw_signal(String::new());
    let usage_line = create_rw_signal(String::new());
    let error = create_rw_signal(None::<String>);
    let busy = create_rw_signal(false);

    let actions_disabled =
        Signal::derive(move || busy.get() || prompt.get().trim().is_empty());

    let use_template = Callback::new(move |_: web_sys::MouseEvent| {
        let fields = advanced_fields(
            &audience.get_untracked(),
            &tone.get_untracked(),
            &style.get_untracked(),
        );
        match prompt_engine::render(
            &prompt.get_untracked(),
            category.get_untracked(),
            fields.as_ref(),
        ) {
            Ok(rendered) => {
                result.set(rendered);
                usage_line.set(String::new());
                error.set(None);
            }
            Err(err) => error.set(Some(err.to_string())),
        }
    });

    let optimize = Callback::new(move |_: web_sys::MouseEvent| {
        if busy.get_untracked() {
            return;
        }
        let request = OptimizeRequest {
            prompt: prompt.get_untracked().trim().to_string(),
            category: category.get_untracked(),
            advanced_fields: advanced_fields(
                &audience.get_untracked(),
                &tone.get_untracked(),
                &style.get_untracked(),
            ),
        };
        let service = runtime.host.get_value().optimize_service();
        busy.set(true);
        spawn_local(async move {
            match service.optimize(&request).await {
                Ok(response) => {
                    result.set(response.optimized_prompt);
                    usage_line.set(
                        response
                            .usage
                            .map(|usage| {
                                format!(
                                    "{} prompt tokens, {} completion tokens",
                                    usage.prompt_tokens, usage.completion_tokens
                                )
                            })
                            .unwrap_or_default(),
                    );
                    error.set(None);
                }
                // Endpoint messages surface verbatim; desktop state is never
                // touched by a failed call.
                Err(OptimizeError::Api(message)) => error.set(Some(message)),
                Err(err @ OptimizeError::Transport(_)) => error.set(Some(err.to_string())),
            }
            busy.set(false);
        });
    });

    view! {
        <div class="app-prompt-studio">
            <FieldGroup label="Prompt">
                <TextArea
                    id=window_primary_input_dom_id(window_id)
                    value=Signal::derive(move || prompt.get())
                    on_input=Callback::new(move |text| prompt.set(text))
                    placeholder="Describe what you want to generate".to_string()
                    rows=5
                />
            </FieldGroup>
            <FieldGroup label="Category">
                <SelectField
                    value=Signal::derive(move || category.get().token().to_string())
                    on_change=Callback::new(move |token: String| {
                        if let Ok(parsed) = token.parse::<Category>() {
                            category.set(parsed);
                        }
                    })
                >
                    {Category::ALL
                        .into_iter()
                        .map(|entry| {
                            view! { <option value=entry.token()>{entry.label()}</option> }
                        })
                        .collect_view()}
                </SelectField>
            </FieldGroup>

            <Button on_click=Callback::new(move |_| show_advanced.update(|open| *open = !*open))>
                {move || if show_advanced.get() { "Hide advanced" } else { "Advanced" }}
            </Button>
            <Show when=move || show_advanced.get() fallback=|| ()>
                <FieldGroup label="Audience">
                    <TextField
                        value=Signal::derive(move || audience.get())
                        on_input=Callback::new(move |text| audience.set(text))
                        placeholder="Who is this for?".to_string()
                    />
                </FieldGroup>
                <FieldGroup label="Tone">
                    <TextField
                        value=Signal::derive(move || tone.get())
                        on_input=Callback::new(move |text| tone.set(text))
                        placeholder="e.g. formal, playful".to_string()
                    />
                </FieldGroup>
                <FieldGroup label="Style">
                    <TextField
                        value=Signal::derive(move || style.get())
                        on_input=Callback::new(move |text| style.set(text))
                        placeholder="e.g. noir, minimalist".to_string()
                    />
                </FieldGroup>
            </Show>

            <div class="app-prompt-studio-actions">
                <Button disabled=actions_disabled on_click=use_template>
                    "Use template"
                </Button>
                <Button disabled=actions_disabled primary=true on_click=optimize>
                    {move || if busy.get() { "Optimizing…" } else { "Optimize" }}
                </Button>
            </div>

            <Show when=move || error.get().is_some() fallback=|| ()>
                <InlineMessage
                    tone=MessageTone::Error
                    text=Signal::derive(move || error.get().unwrap_or_default())
                />
            </Show>
            <Show when=move || !result.get().is_empty() fallback=|| ()>
                <FieldGroup label="Result">
                    <TextArea
                        value=Signal::derive(move || result.get())
                        rows=8
                        readonly=true
                    />
                </FieldGroup>
            </Show>
            <Show when=move || !usage_line.get().is_empty() fallback=|| ()>
                <InlineMessage text=Signal::derive(move || usage_line.get()) />
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advanced_fields_drop_blanks_and_collapse_to_none() {
        assert_eq!(advanced_fields("", "  ", ""), None);

        let fields = advanced_fields("beginners", "", " noir ").expect("fields");
        assert_eq!(fields.get("audience").map(String::as_str), Some("beginners"));
        assert_eq!(fields.get("style").map(String::as_str), Some("noir"));
        assert!(!fields.contains_key("tone"));
    }
}
