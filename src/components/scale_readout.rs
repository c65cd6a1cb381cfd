use crate::util::format_scale;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ScaleReadoutProps {
    pub scale: f64,
    pub on_reset: Callback<()>,
}

#[function_component]
pub fn ScaleReadout(props: &ScaleReadoutProps) -> Html {
    let reset_cb = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="position:absolute; top:12px; left:50%; transform:translateX(-50%); display:flex; flex-direction:column; align-items:center; gap:6px;">
        <div style="font-size:20px; font-weight:600; font-variant-numeric:tabular-nums;">{ format_scale(props.scale) }</div>
        <button onclick={reset_cb} style="padding:4px 10px; font-size:12px;">{"Reset"}</button>
    </div>}
}
