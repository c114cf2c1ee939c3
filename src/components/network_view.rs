use leptos::{
    component, create_effect, create_node_ref, create_signal, html, on_cleanup, store_value, view, IntoView,
    SignalGet, SignalSet,
};
use std::cell::RefCell;
use std::rc::Rc;
use crate::components::network_canvas::{drive_animation, CanvasSurface, IntervalTicker, TickSource};
use crate::models::{StationRegistry, VisualizerSettings};
use crate::visualize::PreparedFigure;

/// One figure window: the drawn network on a scene canvas, the train marker
/// on a canvas stacked above it.
///
/// The animation ticker is owned here and stopped when the window closes,
/// whether or not the train reached the end of its path.
#[component]
#[must_use]
pub fn NetworkView(
    prepared: PreparedFigure,
    settings: VisualizerSettings,
    registry: StationRegistry,
    on_close: impl Fn() + 'static,
) -> impl IntoView {
    let scene_ref = create_node_ref::<html::Canvas>();
    let marker_ref = create_node_ref::<html::Canvas>();
    let (title, set_title) = create_signal(String::new());
    let (warnings, set_warnings) = create_signal(Vec::<String>::new());
    let ticker = store_value(None::<IntervalTicker>);
    let on_close = store_value(on_close);

    let (width, height) = (settings.canvas_width, settings.canvas_height);
    let tick_interval_ms = settings.tick_interval_ms;

    create_effect(move |drawn: Option<bool>| {
        if drawn == Some(true) {
            return true;
        }
        let (Some(scene), Some(marker)) = (scene_ref.get(), marker_ref.get()) else {
            return false;
        };

        let mut surface = match CanvasSurface::new(&scene, &marker, (width, height), &registry) {
            Ok(surface) => surface,
            Err(e) => {
                leptos::logging::warn!("{e}");
                return true;
            }
        };

        let figure = prepared.render(&mut surface, &registry);
        for warning in &figure.warnings {
            leptos::logging::warn!("{warning}");
        }
        set_title.set(figure.title.clone());
        set_warnings.set(figure.warnings.iter().map(ToString::to_string).collect());

        // Ticks start only after the whole figure is on screen
        if let Some(animation) = figure.animation {
            let mut interval_ticker = IntervalTicker::new();
            drive_animation(
                Rc::new(RefCell::new(animation)),
                Rc::new(RefCell::new(surface)),
                &mut interval_ticker,
                tick_interval_ms,
            );
            ticker.set_value(Some(interval_ticker));
        }
        true
    });

    on_cleanup(move || {
        ticker.try_update_value(|ticker| {
            if let Some(ticker) = ticker.as_mut() {
                ticker.stop();
            }
        });
    });

    view! {
        <div class="network-view">
            <div class="network-view-header">
                <span class="network-view-title">{move || title.get()}</span>
                <button class="close-button" on:click=move |_| on_close.with_value(|f| f())>"×"</button>
            </div>
            <div class="network-view-canvases" style=format!("width: {width}px; height: {height}px;")>
                <canvas node_ref=scene_ref class="scene-layer"></canvas>
                <canvas node_ref=marker_ref class="marker-layer"></canvas>
            </div>
            {move || {
                let warnings = warnings.get();
                (!warnings.is_empty()).then(|| view! {
                    <ul class="network-view-warnings">
                        {warnings.into_iter().map(|w| view! { <li>{w}</li> }).collect::<Vec<_>>()}
                    </ul>
                })
            }}
        </div>
    }
}
