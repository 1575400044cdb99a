use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::chart::{ChartDescriptor, HoverMode};
use crate::core::format;
use crate::core::plot::{PlotGeometry, VIEW_HEIGHT, VIEW_WIDTH};
use crate::t;

const LINE_COLOR: &str = "#1f77b4";

/// Inline SVG rendering of a single-trace chart descriptor.
///
/// With [`HoverMode::XUnified`] the pointer snaps to the nearest year: a
/// crosshair is drawn there and the tooltip lists the value at that year.
#[component]
pub fn LineChart(chart: ChartDescriptor) -> Element {
    let geometry = PlotGeometry::for_chart(&chart);
    let mut hovered = use_signal(|| Option::<usize>::None);
    let mut rendered_width = use_signal(|| 0.0f64);
    let mut plot_element = use_signal(|| Option::<Rc<MountedData>>::None);

    // The plot scales with its container; measure on mount and again whenever
    // the pointer enters, so hover stays aligned after a resize.
    let measure = move || {
        if let Some(element) = plot_element() {
            spawn(async move {
                if let Ok(rect) = element.get_client_rect().await {
                    rendered_width.set(rect.width());
                }
            });
        }
    };

    let line_path = geometry.line_path();
    let draws_line = chart.trace.mode.draws_line() && geometry.points.len() > 1;
    let draws_markers = chart.trace.mode.draws_markers();
    let unified = chart.hover == HoverMode::XUnified;

    // The geometry changes with the selection; drop stale hover indices.
    let active = hovered().and_then(|idx| geometry.points.get(idx).copied());

    let hover_geometry = geometry.clone();
    let y_label_x = 18.0;
    let y_label_y = (geometry.top + geometry.bottom) / 2.0;
    let x_label_x = (geometry.left + geometry.right) / 2.0;
    let x_label_y = VIEW_HEIGHT - 12.0;

    let tooltip = active.map(|point| {
        let pct = point.x / VIEW_WIDTH * 100.0;
        let left = if pct < 50.0 {
            format!("calc({pct:.1}% + 12px)")
        } else {
            format!("calc({pct:.1}% - 180px)")
        };
        (left, point.year, format::format_value(point.value))
    });

    rsx! {
        figure { class: "chart",
            figcaption { class: "chart__title", "{chart.title}" }

            div {
                class: "chart__plot",
                onmounted: move |evt| {
                    plot_element.set(Some(evt.data()));
                    measure();
                },
                onmouseenter: move |_| measure(),
                onmouseleave: move |_| hovered.set(None),
                onmousemove: move |evt| {
                    let offset = evt.data().element_coordinates().x;
                    if let Some(x) = PlotGeometry::x_from_pointer(offset, rendered_width()) {
                        hovered.set(hover_geometry.nearest_index(x));
                    }
                },

                svg {
                    class: "chart__svg",
                    view_box: "0 0 {VIEW_WIDTH} {VIEW_HEIGHT}",
                    "preserveAspectRatio": "xMidYMid meet",

                    for tick in geometry.y_ticks.iter() {
                        line {
                            class: "chart__grid",
                            x1: "{geometry.left}",
                            y1: "{tick.pos}",
                            x2: "{geometry.right}",
                            y2: "{tick.pos}",
                        }
                        text {
                            class: "chart__tick",
                            x: "{geometry.left - 8.0}",
                            y: "{tick.pos + 4.0}",
                            "text-anchor": "end",
                            "{format::format_tick(tick.value)}"
                        }
                    }

                    for tick in geometry.x_ticks.iter() {
                        text {
                            class: "chart__tick",
                            x: "{tick.pos}",
                            y: "{geometry.bottom + 20.0}",
                            "text-anchor": "middle",
                            "{tick.value}"
                        }
                    }

                    line {
                        class: "chart__axis",
                        x1: "{geometry.left}",
                        y1: "{geometry.bottom}",
                        x2: "{geometry.right}",
                        y2: "{geometry.bottom}",
                    }

                    text {
                        class: "chart__axis-title",
                        x: "{x_label_x}",
                        y: "{x_label_y}",
                        "text-anchor": "middle",
                        "{chart.axes.x}"
                    }
                    text {
                        class: "chart__axis-title",
                        x: "{y_label_x}",
                        y: "{y_label_y}",
                        "text-anchor": "middle",
                        transform: "rotate(-90 {y_label_x} {y_label_y})",
                        "{chart.axes.y}"
                    }

                    if draws_line {
                        path {
                            class: "chart__line",
                            d: "{line_path}",
                            fill: "none",
                            stroke: LINE_COLOR,
                            "stroke-width": "2",
                        }
                    }

                    if draws_markers {
                        for point in geometry.points.iter() {
                            circle {
                                key: "{point.year}-{point.value}",
                                class: "chart__marker",
                                cx: "{point.x}",
                                cy: "{point.y}",
                                r: "5",
                                fill: LINE_COLOR,
                            }
                        }
                    }

                    if let Some(point) = active {
                        if unified {
                            line {
                                class: "chart__crosshair",
                                x1: "{point.x}",
                                y1: "{geometry.top}",
                                x2: "{point.x}",
                                y2: "{geometry.bottom}",
                                "stroke-dasharray": "4,4",
                            }
                        }
                        circle {
                            class: "chart__marker chart__marker--active",
                            cx: "{point.x}",
                            cy: "{point.y}",
                            r: "7",
                            fill: LINE_COLOR,
                        }
                    }
                }

                if chart.is_empty() {
                    div { class: "chart__empty", {t!("chart-empty")} }
                }

                if let Some((left, year, value)) = tooltip {
                    div { class: "chart__tooltip", style: "left: {left};",
                        div { class: "chart__tooltip-year", "{year}" }
                        div { class: "chart__tooltip-row",
                            span { class: "chart__tooltip-swatch" }
                            span { class: "chart__tooltip-name", "{chart.trace.name}" }
                            strong { class: "chart__tooltip-value", "{value}" }
                        }
                    }
                }
            }
        }
    }
}
