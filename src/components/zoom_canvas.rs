use pinch_scale::{UsePinchScaleOptions, use_pinch_scale};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use super::scale_readout::ScaleReadout;
use crate::state::{GestureKind, ViewerSettings};
use crate::util::{GRID_PX, grid_spacing};

#[derive(Properties, PartialEq, Clone)]
pub struct ZoomCanvasProps {
    pub settings: ViewerSettings,
    pub on_gesture: Callback<GestureKind>,
}

#[function_component]
pub fn ZoomCanvas(props: &ZoomCanvasProps) -> Html {
    let surface_ref = use_node_ref();
    let canvas_ref = use_node_ref();
    // Memoized so the hook only re-binds when settings actually change
    let options = use_memo(
        (props.settings, props.on_gesture.clone()),
        |(settings, on_gesture)| UsePinchScaleOptions {
            prevent_default: settings.prevent_default,
            config: settings.config,
            on_touch_start: Some(on_gesture.reform(|_| GestureKind::TouchStart)),
            on_touch_move: Some(on_gesture.reform(|_| GestureKind::TouchMove)),
            on_touch_end: Some(on_gesture.reform(|_| GestureKind::TouchEnd)),
            on_trackpad_pinch: Some(on_gesture.reform(|_| GestureKind::TrackpadPinch)),
        },
    );
    let pinch = use_pinch_scale(surface_ref.clone(), (*options).clone());

    // Redraw on every scale change
    {
        let canvas_ref = canvas_ref.clone();
        let show_grid = props.settings.show_grid;
        use_effect_with((pinch.value(), show_grid), move |(scale, show_grid)| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                draw(&canvas, *scale, *show_grid);
            }
            || ()
        });
    }

    let on_reset = {
        let pinch = pinch.clone();
        Callback::from(move |_| pinch.reset())
    };

    html! {
        <div ref={surface_ref} style="position:relative; width:100vw; height:100vh; overflow:hidden; touch-action:none; background:#0e1116;">
            <canvas ref={canvas_ref} style="width:100%; height:100%; display:block;"></canvas>
            <ScaleReadout scale={pinch.value()} {on_reset} />
        </div>
    }
}

fn draw(canvas: &HtmlCanvasElement, scale: f64, show_grid: bool) {
    if !canvas.is_connected() {
        return;
    }
    let w = canvas.client_width().max(1) as u32;
    let h = canvas.client_height().max(1) as u32;
    if canvas.width() != w {
        canvas.set_width(w);
    }
    if canvas.height() != h {
        canvas.set_height(h);
    }
    let ctx = match canvas.get_context("2d").ok().flatten() {
        Some(c) => match c.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        None => return,
    };
    let w = w as f64;
    let h = h as f64;
    let cx = w * 0.5;
    let cy = h * 0.5;

    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0).ok();
    ctx.set_fill_style_str("#0e1116");
    ctx.fill_rect(0.0, 0.0, w, h);
    if !scale.is_finite() {
        return;
    }

    if show_grid {
        let step = grid_spacing(scale);
        ctx.set_stroke_style_str("#2f3641");
        ctx.set_line_width(1.0);
        let mut x = cx % step;
        while x <= w {
            ctx.begin_path();
            ctx.move_to(x, 0.0);
            ctx.line_to(x, h);
            ctx.stroke();
            x += step;
        }
        let mut y = cy % step;
        while y <= h {
            ctx.begin_path();
            ctx.move_to(0.0, y);
            ctx.line_to(w, y);
            ctx.stroke();
            y += step;
        }
    }

    // Reference tile: 4x4 grid cells at scale 1.0, centered
    let side = GRID_PX * 4.0 * scale;
    ctx.set_fill_style_str("#1f6feb");
    ctx.fill_rect(cx - side * 0.5, cy - side * 0.5, side, side);
    ctx.set_stroke_style_str("#58a6ff");
    ctx.set_line_width(2.0);
    ctx.stroke_rect(cx - side * 0.5, cy - side * 0.5, side, side);
}
