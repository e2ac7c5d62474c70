//! Chart Components
//!
//! Canvas-rendered charts: the detected-vs-certified trend line, category
//! bars, and the pipeline status donut. Each component owns a canvas and
//! redraws whenever its data signal changes.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::model::{StatusSlice, TrendPoint};

/// Series color for detected leads
const DETECTED_COLOR: &str = "#94a3b8";
/// Series color for certified leads
const CERTIFIED_COLOR: &str = "#e31837";

const BACKGROUND: &str = "#ffffff";
const GRID_COLOR: &str = "#e2e8f0";
const LABEL_COLOR: &str = "#64748b";

/// One bar of a category bar chart
#[derive(Clone, Debug, PartialEq)]
pub struct BarDatum {
    pub label: String,
    pub value: f64,
    pub color: String,
}

impl BarDatum {
    pub fn new(label: impl Into<String>, value: f64, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value,
            color: color.into(),
        }
    }
}

/// Detected-vs-certified trend line chart
#[component]
pub fn TrendChart(
    #[prop(into)]
    data: Signal<Vec<TrendPoint>>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let points = data.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_trend(&canvas, &points);
        }
    });

    view! {
        <div>
            <canvas
                node_ref=canvas_ref
                width="800"
                height="320"
                class="w-full rounded-lg"
            />

            // Legend
            <div class="flex justify-center space-x-6 mt-3 text-sm text-slate-500">
                <span class="flex items-center space-x-2">
                    <span
                        class="w-3 h-3 rounded-full"
                        style=format!("background-color: {}", DETECTED_COLOR)
                    />
                    <span>"Detected"</span>
                </span>
                <span class="flex items-center space-x-2">
                    <span
                        class="w-3 h-3 rounded-full"
                        style=format!("background-color: {}", CERTIFIED_COLOR)
                    />
                    <span>"Certified"</span>
                </span>
            </div>
        </div>
    }
}

/// Category bar chart, vertical or horizontal
#[component]
pub fn BarChart(
    #[prop(into)]
    data: Signal<Vec<BarDatum>>,
    #[prop(optional)]
    horizontal: bool,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let bars = data.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_bars(&canvas, &bars, horizontal);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="800"
            height="260"
            class="w-full rounded-lg"
        />
    }
}

/// Pipeline status donut chart
#[component]
pub fn DonutChart(
    #[prop(into)]
    data: Signal<Vec<StatusSlice>>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let slices = data.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_donut(&canvas, &slices);
        }
    });

    view! {
        <div>
            <canvas
                node_ref=canvas_ref
                width="360"
                height="260"
                class="w-full rounded-lg"
            />

            // Legend with counts
            <div class="flex justify-center flex-wrap gap-4 mt-3 text-sm text-slate-500">
                {move || {
                    data.get()
                        .into_iter()
                        .map(|slice| {
                            view! {
                                <span class="flex items-center space-x-2">
                                    <span
                                        class="w-3 h-3 rounded-full"
                                        style=format!("background-color: {}", slice.color)
                                    />
                                    <span>{format!("{}: {}", slice.name, slice.value)}</span>
                                </span>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

/// Get the 2d context for drawing
fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

/// Clear the canvas and return its dimensions
fn clear(ctx: &CanvasRenderingContext2d, canvas: &HtmlCanvasElement) -> (f64, f64) {
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    ctx.set_fill_style(&BACKGROUND.into());
    ctx.fill_rect(0.0, 0.0, width, height);
    (width, height)
}

/// Horizontal grid lines with integer y-axis labels from 0 to `max`
fn draw_grid(
    ctx: &CanvasRenderingContext2d,
    max: f64,
    margin_left: f64,
    margin_top: f64,
    chart_width: f64,
    chart_height: f64,
) {
    ctx.set_line_width(1.0);

    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;

        ctx.set_stroke_style(&GRID_COLOR.into());
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(margin_left + chart_width, y);
        ctx.stroke();

        let value = max - (i as f64 / 5.0) * max;
        ctx.set_fill_style(&LABEL_COLOR.into());
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{}", value.round()), 8.0, y + 4.0);
    }
}

fn draw_empty_message(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.set_fill_style(&LABEL_COLOR.into());
    ctx.set_font("16px sans-serif");
    let _ = ctx.fill_text("No data", width / 2.0 - 30.0, height / 2.0);
}

/// Draw the trend chart: detected as a dashed line, certified solid
fn draw_trend(canvas: &HtmlCanvasElement, points: &[TrendPoint]) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };
    let (width, height) = clear(&ctx, canvas);

    if points.is_empty() {
        draw_empty_message(&ctx, width, height);
        return;
    }

    let margin_left = 48.0;
    let margin_right = 16.0;
    let margin_top = 16.0;
    let margin_bottom = 32.0;
    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    let max = points
        .iter()
        .map(|p| p.detected.max(p.certified))
        .max()
        .unwrap_or(0)
        .max(1) as f64;

    draw_grid(&ctx, max, margin_left, margin_top, chart_width, chart_height);

    // Evenly spaced categorical x positions
    let x_at = |i: usize| {
        if points.len() == 1 {
            margin_left + chart_width / 2.0
        } else {
            margin_left + (i as f64 / (points.len() - 1) as f64) * chart_width
        }
    };
    let y_at = |value: u32| margin_top + ((max - value as f64) / max) * chart_height;

    // Detected series, dashed
    let dash = js_sys::Array::of2(&5.0.into(), &5.0.into());
    let _ = ctx.set_line_dash(&dash);
    draw_series(&ctx, points, DETECTED_COLOR, &x_at, |p| y_at(p.detected));

    // Certified series, solid
    let _ = ctx.set_line_dash(&js_sys::Array::new());
    draw_series(&ctx, points, CERTIFIED_COLOR, &x_at, |p| y_at(p.certified));

    // X-axis labels
    ctx.set_fill_style(&LABEL_COLOR.into());
    ctx.set_font("12px sans-serif");
    for (i, point) in points.iter().enumerate() {
        let _ = ctx.fill_text(&point.date, x_at(i) - 20.0, height - 10.0);
    }
}

fn draw_series(
    ctx: &CanvasRenderingContext2d,
    points: &[TrendPoint],
    color: &str,
    x_at: &dyn Fn(usize) -> f64,
    y_at: impl Fn(&TrendPoint) -> f64,
) {
    ctx.set_stroke_style(&color.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();

    for (i, point) in points.iter().enumerate() {
        let x = x_at(i);
        let y = y_at(point);
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();

    ctx.set_fill_style(&color.into());
    for (i, point) in points.iter().enumerate() {
        ctx.begin_path();
        let _ = ctx.arc(x_at(i), y_at(point), 3.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }
}

/// Draw a category bar chart
fn draw_bars(canvas: &HtmlCanvasElement, bars: &[BarDatum], horizontal: bool) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };
    let (width, height) = clear(&ctx, canvas);

    if bars.is_empty() {
        draw_empty_message(&ctx, width, height);
        return;
    }

    let max = bars.iter().map(|b| b.value).fold(0.0_f64, f64::max).max(1.0);

    if horizontal {
        let margin_left = 80.0;
        let margin_right = 40.0;
        let margin_top = 12.0;
        let margin_bottom = 12.0;
        let chart_width = width - margin_left - margin_right;
        let chart_height = height - margin_top - margin_bottom;

        let row = chart_height / bars.len() as f64;
        let bar_height = row * 0.6;

        ctx.set_font("12px sans-serif");
        for (i, bar) in bars.iter().enumerate() {
            let y = margin_top + i as f64 * row + (row - bar_height) / 2.0;
            let bar_width = (bar.value / max) * chart_width;

            ctx.set_fill_style(&bar.color.as_str().into());
            ctx.fill_rect(margin_left, y, bar_width, bar_height);

            ctx.set_fill_style(&LABEL_COLOR.into());
            let _ = ctx.fill_text(&bar.label, 8.0, y + bar_height / 2.0 + 4.0);
            let _ = ctx.fill_text(
                &format!("{}", bar.value.round()),
                margin_left + bar_width + 6.0,
                y + bar_height / 2.0 + 4.0,
            );
        }
    } else {
        let margin_left = 48.0;
        let margin_right = 16.0;
        let margin_top = 16.0;
        let margin_bottom = 32.0;
        let chart_width = width - margin_left - margin_right;
        let chart_height = height - margin_top - margin_bottom;

        draw_grid(&ctx, max, margin_left, margin_top, chart_width, chart_height);

        let slot = chart_width / bars.len() as f64;
        let bar_width = slot * 0.6;

        ctx.set_font("12px sans-serif");
        for (i, bar) in bars.iter().enumerate() {
            let x = margin_left + i as f64 * slot + (slot - bar_width) / 2.0;
            let bar_height = (bar.value / max) * chart_height;
            let y = margin_top + chart_height - bar_height;

            ctx.set_fill_style(&bar.color.as_str().into());
            ctx.fill_rect(x, y, bar_width, bar_height);

            ctx.set_fill_style(&LABEL_COLOR.into());
            let _ = ctx.fill_text(&bar.label, x, height - 10.0);
        }
    }
}

/// Draw the status donut
fn draw_donut(canvas: &HtmlCanvasElement, slices: &[StatusSlice]) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };
    let (width, height) = clear(&ctx, canvas);

    let total: u32 = slices.iter().map(|s| s.value).sum();
    if total == 0 {
        draw_empty_message(&ctx, width, height);
        return;
    }

    let cx = width / 2.0;
    let cy = height / 2.0;
    let outer = (width.min(height) / 2.0) - 10.0;
    let inner = outer * 0.6;

    let mut start = -std::f64::consts::FRAC_PI_2;
    for slice in slices {
        let sweep = (slice.value as f64 / total as f64) * std::f64::consts::PI * 2.0;
        let end = start + sweep;

        ctx.set_fill_style(&slice.color.as_str().into());
        ctx.begin_path();
        let _ = ctx.arc(cx, cy, outer, start, end);
        let _ = ctx.arc_with_anticlockwise(cx, cy, inner, end, start, true);
        ctx.close_path();
        ctx.fill();

        start = end;
    }

    // Total in the center
    ctx.set_fill_style(&"#0c2340".into());
    ctx.set_font("bold 20px sans-serif");
    let _ = ctx.fill_text(&format!("{}", total), cx - 18.0, cy + 7.0);
}
