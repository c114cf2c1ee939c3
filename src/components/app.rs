use leptos::{component, create_signal, store_value, view, IntoView, SignalGet, SignalSet};
use leptos_meta::{provide_meta_context, Title};
use crate::components::mode_prompt::ModePrompt;
use crate::components::network_view::NetworkView;
use crate::models::{StationRegistry, VisualizerSettings};
use crate::visualize::PreparedFigure;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let registry = store_value(StationRegistry::uttarakhand());
    let (figure, set_figure) = create_signal(None::<(PreparedFigure, VisualizerSettings)>);

    view! {
        <Title text="Uttarakhand Railway Map"/>

        <div class="app">
            <ModePrompt on_ready=move |ready| set_figure.set(Some(ready)) />
            {move || figure.get().map(|(prepared, settings)| view! {
                <NetworkView
                    prepared=prepared
                    settings=settings
                    registry=registry.get_value()
                    on_close=move || set_figure.set(None)
                />
            })}
        </div>
    }
}
