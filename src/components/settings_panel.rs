use crate::state::ViewerSettings;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsPanelProps {
    pub settings: ViewerSettings,
    pub on_toggle_prevent_default: Callback<()>,
    pub on_toggle_grid: Callback<()>,
    pub on_toggle_meta_key: Callback<()>,
    pub on_toggle_contact_loss: Callback<()>,
    pub on_reset_settings: Callback<()>,
}

#[function_component]
pub fn SettingsPanel(props: &SettingsPanelProps) -> Html {
    let prevent_cb = {
        let cb = props.on_toggle_prevent_default.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let grid_cb = {
        let cb = props.on_toggle_grid.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let meta_cb = {
        let cb = props.on_toggle_meta_key.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let contact_cb = {
        let cb = props.on_toggle_contact_loss.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let reset_cb = {
        let cb = props.on_reset_settings.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let s = props.settings;
    html! {<div style="position:absolute; top:12px; right:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:220px; display:flex; flex-direction:column; gap:8px; font-size:13px;">
        <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
            <input type="checkbox" checked={s.prevent_default} onclick={prevent_cb} />
            <span>{"Block browser zoom"}</span>
        </label>
        <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
            <input type="checkbox" checked={s.show_grid} onclick={grid_cb} />
            <span>{"Show Grid"}</span>
        </label>
        <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
            <input type="checkbox" checked={s.config.meta_key_pinch} onclick={meta_cb} />
            <span>{"Cmd + scroll zooms"}</span>
        </label>
        <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
            <input type="checkbox" checked={s.config.end_on_contact_loss} onclick={contact_cb} />
            <span>{"End pinch when a finger is lost"}</span>
        </label>
        <div style="font-size:11px; opacity:0.7;">{ format!("Wheel factor clamp: {} – {}", s.config.min_factor, s.config.max_factor) }</div>
        <button onclick={reset_cb} style="font-size:12px;">{"Restore defaults"}</button>
    </div>}
}
