use leptos::{
    component, create_node_ref, create_signal, html, spawn_local, store_value, view, IntoView, SignalGet,
    SignalSet,
};
use crate::constants::{INVALID_CHOICE_MESSAGE, MODE_PROMPT};
use crate::import::PrefetchedSource;
use crate::models::{Mode, VisualizerSettings};
use crate::visualize::{prepare, required_files, PreparedFigure};

/// Status line under the prompt
#[derive(Debug, Clone, PartialEq)]
enum PromptStatus {
    Idle,
    Loading(Mode),
    Failed(String),
}

/// Asks for `1` (whole network) or `2` (path overlay) and loads that figure's inputs.
///
/// `on_ready` fires only once every input file has loaded and parsed; any
/// failure is shown as one line here and no figure is produced.
#[component]
#[must_use]
pub fn ModePrompt(on_ready: impl Fn((PreparedFigure, VisualizerSettings)) + 'static) -> impl IntoView {
    let input_ref = create_node_ref::<html::Input>();
    let (status, set_status) = create_signal(PromptStatus::Idle);
    let on_ready = store_value(on_ready);

    let submit = move || {
        let Some(input) = input_ref.get() else { return };
        let choice = input.value();

        let Some(mode) = Mode::from_choice(&choice) else {
            crate::logging::log!("Rejected mode choice {:?}", choice);
            set_status.set(PromptStatus::Failed(INVALID_CHOICE_MESSAGE.to_string()));
            return;
        };

        set_status.set(PromptStatus::Loading(mode));
        spawn_local(async move {
            let settings = VisualizerSettings::load().await;
            let source = PrefetchedSource::fetch_all(&required_files(mode, &settings)).await;

            match prepare(mode, &source, &settings) {
                Ok(prepared) => {
                    set_status.set(PromptStatus::Idle);
                    on_ready.with_value(|f| f((prepared, settings)));
                }
                Err(e) => {
                    leptos::logging::error!("Visualization ({}) aborted: {e}", mode.label());
                    set_status.set(PromptStatus::Failed(e.to_string()));
                }
            }
        });
    };

    view! {
        <div class="mode-prompt">
            <label for="mode-choice">{MODE_PROMPT}</label>
            <div class="mode-prompt-row">
                <input
                    id="mode-choice"
                    type="text"
                    maxlength="1"
                    node_ref=input_ref
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            submit();
                        }
                    }
                />
                <button on:click=move |_| submit()>"Visualize"</button>
            </div>
            {move || match status.get() {
                PromptStatus::Idle => ().into_view(),
                PromptStatus::Loading(mode) => view! {
                    <p class="status">{format!("Loading {}...", mode.label())}</p>
                }.into_view(),
                PromptStatus::Failed(message) => view! {
                    <p class="status error">{message}</p>
                }.into_view(),
            }}
        </div>
    }
}
