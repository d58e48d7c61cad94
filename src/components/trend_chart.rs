//! Trend Chart Component
//!
//! Daily traffic chart using HTML5 Canvas: sessions and users per day for
//! the selected date range.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::api::types::DailyTraffic;

const SESSIONS_COLOR: &str = "#FF9800"; // Orange
const USERS_COLOR: &str = "#2196F3"; // Blue

/// Daily traffic chart component
#[component]
pub fn TrendChart(
    #[prop(into)]
    daily: Signal<Vec<DailyTraffic>>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever the series changes
    create_effect(move |_| {
        let days = daily.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_trend(&canvas, &days);
        }
    });

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="800"
                height="320"
                class="w-full h-64 md:h-80 rounded-lg"
            />

            // Legend
            <div class="flex justify-center flex-wrap gap-4 mt-4">
                <LegendEntry color=SESSIONS_COLOR label="Sessions" />
                <LegendEntry color=USERS_COLOR label="Users" />
            </div>
        </div>
    }
}

#[component]
fn LegendEntry(
    color: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-2">
            <div
                class="w-3 h-3 rounded-full"
                style=format!("background-color: {}", color)
            />
            <span class="text-sm text-gray-300">{label}</span>
        </div>
    }
}

/// Draw the daily series on canvas
fn draw_trend(canvas: &HtmlCanvasElement, days: &[DailyTraffic]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    if days.is_empty() {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text(
            "No traffic data for selected range",
            width / 2.0 - 110.0,
            height / 2.0,
        );
        return;
    }

    // Counts start at zero so bars and lines share a baseline
    let max_count = days
        .iter()
        .map(|d| d.sessions.max(d.users))
        .max()
        .unwrap_or(0)
        .max(1) as f64;
    let y_max = max_count * 1.1;

    // Horizontal grid lines with y-axis labels
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);
    for i in 0..=4 {
        let y = margin_top + (i as f64 / 4.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = y_max - (i as f64 / 4.0) * y_max;
        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&crate::format::abbreviate(value), 5.0, y + 4.0);
    }

    let x_for = |index: usize| -> f64 {
        if days.len() == 1 {
            margin_left + chart_width / 2.0
        } else {
            margin_left + (index as f64 / (days.len() - 1) as f64) * chart_width
        }
    };
    let y_for = |count: u64| -> f64 {
        margin_top + ((y_max - count as f64) / y_max) * chart_height
    };

    // One line per series
    let series: [(&str, fn(&DailyTraffic) -> u64); 2] = [
        (SESSIONS_COLOR, |d| d.sessions),
        (USERS_COLOR, |d| d.users),
    ];

    for (color, value_of) in series {
        ctx.set_stroke_style(&color.into());
        ctx.set_line_width(2.0);
        ctx.begin_path();

        for (i, day) in days.iter().enumerate() {
            let x = x_for(i);
            let y = y_for(value_of(day));
            if i == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }
        ctx.stroke();

        ctx.set_fill_style(&color.into());
        for (i, day) in days.iter().enumerate() {
            ctx.begin_path();
            let _ = ctx.arc(
                x_for(i),
                y_for(value_of(day)),
                3.0,
                0.0,
                std::f64::consts::PI * 2.0,
            );
            ctx.fill();
        }
    }

    // X-axis date labels, thinned so they stay readable on long ranges
    ctx.set_fill_style(&"#9ca3af".into());
    ctx.set_font("12px sans-serif");

    let step = (days.len() / 6).max(1);
    for (i, day) in days.iter().enumerate() {
        if i % step != 0 && i != days.len() - 1 {
            continue;
        }
        let _ = ctx.fill_text(&day.short_label(), x_for(i) - 15.0, height - 10.0);
    }
}
