use super::{settings_panel::SettingsPanel, stats_panel::StatsPanel, zoom_canvas::ZoomCanvas};
use crate::state::{GestureAction, GestureKind, GestureStats, ViewerSettings};
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let settings = use_state(ViewerSettings::load);
    let stats = use_reducer(GestureStats::default);

    // Persist settings changes
    {
        let current = *settings;
        use_effect_with(current, move |s| {
            s.save();
            || ()
        });
    }

    // Stable across renders so the canvas keeps its listeners
    let on_gesture = use_callback(stats.dispatcher(), |kind: GestureKind, dispatcher| {
        dispatcher.dispatch(GestureAction::Seen(kind));
    });
    let on_clear = {
        let dispatcher = stats.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(GestureAction::Reset))
    };

    let toggle = |f: fn(&mut ViewerSettings)| {
        let settings = settings.clone();
        Callback::from(move |_| {
            let mut next = *settings;
            f(&mut next);
            settings.set(next);
        })
    };
    let on_toggle_prevent_default = toggle(|s| s.prevent_default = !s.prevent_default);
    let on_toggle_grid = toggle(|s| s.show_grid = !s.show_grid);
    let on_toggle_meta_key = toggle(|s| s.config.meta_key_pinch = !s.config.meta_key_pinch);
    let on_toggle_contact_loss =
        toggle(|s| s.config.end_on_contact_loss = !s.config.end_on_contact_loss);
    let on_reset_settings = {
        let settings = settings.clone();
        Callback::from(move |_| {
            ViewerSettings::clear();
            settings.set(ViewerSettings::default());
        })
    };

    html! {
        <div id="root" style="position:relative; width:100vw; height:100vh; color:#c9d1d9; font-family:sans-serif;">
            <ZoomCanvas settings={*settings} {on_gesture} />
            <StatsPanel stats={(*stats).clone()} {on_clear} />
            <SettingsPanel
                settings={*settings}
                {on_toggle_prevent_default}
                {on_toggle_grid}
                {on_toggle_meta_key}
                {on_toggle_contact_loss}
                {on_reset_settings}
            />
        </div>
    }
}
