use crate::state::{GestureKind, GestureStats};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsPanelProps {
    pub stats: GestureStats,
    pub on_clear: Callback<()>,
}

#[function_component]
pub fn StatsPanel(props: &StatsPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;"; // label | value
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:60px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    let clear_cb = {
        let cb = props.on_clear.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let rows = [
        (GestureKind::TouchStart, props.stats.touch_starts),
        (GestureKind::TouchMove, props.stats.touch_moves),
        (GestureKind::TouchEnd, props.stats.touch_ends),
        (GestureKind::TrackpadPinch, props.stats.trackpad_pinches),
    ];
    html! {
        <div style="position:absolute; top:12px; left:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:200px; display:flex; flex-direction:column; gap:8px; font-size:14px;">
            { for rows.iter().map(|(kind, count)| {
                let highlight = if props.stats.last == Some(*kind) { " color:#58a6ff;" } else { "" };
                html! {
                    <div style={row_style}>
                        <span style={format!("{}{}", label_style, highlight)}>{ kind.label() }</span>
                        <span style={format!("{}{}", value_style, highlight)}>{ *count }</span>
                    </div>
                }
            }) }
            <button onclick={clear_cb} style="font-size:12px;">{"Clear"}</button>
        </div>
    }
}
