//! Grouped bar chart for hashtag counts across compared searches.
//!
//! Geometry is computed up front into plain structs, then poured into SVG.
//! That keeps the scale math unit-testable on native without a DOM.

use dioxus::prelude::*;

use crate::core::{api, format, platform};

use super::reshape::ComparisonData;
use super::scale::{category_color, BandScale, LinearScale};

const WIDTH: f64 = 1100.0;
const HEIGHT: f64 = 700.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 100.0;
const MARGIN_LEFT: f64 = 40.0;

const INNER_WIDTH: f64 = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
const INNER_HEIGHT: f64 = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;

const GROUP_PADDING: f64 = 0.1;
const LEGEND_ROW_HEIGHT: f64 = 20.0;
const LEGEND_SWATCH_X: f64 = INNER_WIDTH - 18.0;
const LEGEND_LABEL_X: f64 = INNER_WIDTH - 24.0;

#[derive(Debug, Clone, PartialEq)]
struct BarGeom {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    fill: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
struct GroupGeom {
    offset: f64,
    bars: Vec<BarGeom>,
}

#[derive(Debug, Clone, PartialEq)]
struct XLabel {
    x: f64,
    text: String,
    href: String,
}

#[derive(Debug, Clone, PartialEq)]
struct YTick {
    y: f64,
    label: String,
}

#[derive(Debug, Clone, PartialEq)]
struct LegendRow {
    offset: f64,
    fill: &'static str,
    label: String,
}

#[derive(Debug, Clone, PartialEq)]
struct ChartLayout {
    groups: Vec<GroupGeom>,
    x_labels: Vec<XLabel>,
    y_ticks: Vec<YTick>,
    legend: Vec<LegendRow>,
}

fn layout(data: &ComparisonData) -> ChartLayout {
    let hashtags: Vec<String> = data
        .hashtags
        .iter()
        .map(|group| group.hashtag.clone())
        .collect();
    let colnames: Vec<String> = data
        .columns
        .iter()
        .map(|column| column.colname.clone())
        .collect();

    let x0 = BandScale::new(hashtags, (0.0, INNER_WIDTH), GROUP_PADDING);
    let x1 = BandScale::new(colnames, (0.0, x0.bandwidth()), 0.0);
    let y = LinearScale::new((0.0, data.y_max), (INNER_HEIGHT, 0.0));

    let groups = data
        .hashtags
        .iter()
        .enumerate()
        .map(|(group_index, group)| GroupGeom {
            offset: x0.position(group_index),
            bars: group
                .counts
                .iter()
                .enumerate()
                // A non-finite count has no defined height; the bar is
                // simply absent rather than drawn garbage.
                .filter(|(_, count)| count.value.is_finite())
                .map(|(series_index, count)| {
                    let top = y.scale(count.value);
                    BarGeom {
                        x: x1.position(series_index),
                        y: top,
                        width: x1.bandwidth(),
                        height: INNER_HEIGHT - top,
                        fill: category_color(series_index),
                    }
                })
                .collect(),
        })
        .collect();

    let x_labels = data
        .hashtags
        .iter()
        .enumerate()
        .map(|(group_index, group)| XLabel {
            x: x0.position(group_index) + x0.bandwidth() / 2.0,
            text: group.hashtag.clone(),
            href: api::hashtag_search_url(&group.hashtag),
        })
        .collect();

    let y_ticks = y
        .ticks(10)
        .into_iter()
        .map(|value| YTick {
            y: y.scale(value),
            label: format::format_si(value),
        })
        .collect();

    let series_count = data.columns.len();
    let legend = data
        .columns
        .iter()
        .rev()
        .enumerate()
        .map(|(row, column)| LegendRow {
            offset: row as f64 * LEGEND_ROW_HEIGHT,
            // Swatches keep the color of the series' original position.
            fill: category_color(series_count - 1 - row),
            label: column.label.clone(),
        })
        .collect();

    ChartLayout {
        groups,
        x_labels,
        y_ticks,
        legend,
    }
}

#[component]
pub fn HashtagComparisonChart(data: ComparisonData) -> Element {
    let layout = layout(&data);

    rsx! {
        svg {
            class: "hashtag-chart",
            width: "{WIDTH}",
            height: "{HEIGHT}",

            g { transform: "translate({MARGIN_LEFT},{MARGIN_TOP})",
                for group in layout.groups.into_iter() {
                    g { class: "hashtag-chart__group",
                        transform: "translate({group.offset},0)",
                        for bar in group.bars.into_iter() {
                            rect {
                                x: "{bar.x}",
                                y: "{bar.y}",
                                width: "{bar.width}",
                                height: "{bar.height}",
                                fill: "{bar.fill}",
                            }
                        }
                    }
                }

                g { class: "hashtag-chart__axis hashtag-chart__axis--x",
                    transform: "translate(0,{INNER_HEIGHT})",
                    line { x1: "0", y1: "0", x2: "{INNER_WIDTH}", y2: "0", stroke: "currentColor" }
                    for label in layout.x_labels.into_iter() {
                        {render_x_label(label)}
                    }
                }

                g { class: "hashtag-chart__axis hashtag-chart__axis--y",
                    line { x1: "0", y1: "0", x2: "0", y2: "{INNER_HEIGHT}", stroke: "currentColor" }
                    for tick in layout.y_ticks.into_iter() {
                        g { transform: "translate(0,{tick.y})",
                            line { x1: "0", y1: "0", x2: "-6", y2: "0", stroke: "currentColor" }
                            text { x: "-9", dy: ".32em", text_anchor: "end", "{tick.label}" }
                        }
                    }
                    text {
                        class: "hashtag-chart__y-title",
                        transform: "rotate(-90)",
                        y: "6",
                        dy: ".71em",
                        text_anchor: "end",
                        "# tweets"
                    }
                }

                g { class: "hashtag-chart__legend",
                    for row in layout.legend.into_iter() {
                        g { transform: "translate(0,{row.offset})",
                            rect {
                                x: "{LEGEND_SWATCH_X}",
                                width: "18",
                                height: "18",
                                fill: "{row.fill}",
                            }
                            text {
                                x: "{LEGEND_LABEL_X}",
                                y: "9",
                                dy: ".35em",
                                text_anchor: "end",
                                "{row.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_x_label(label: XLabel) -> Element {
    let XLabel { x, text, href } = label;

    rsx! {
        text {
            class: "hashtag-chart__x-label",
            transform: "translate({x},10) rotate(-60)",
            text_anchor: "end",
            dy: ".15em",
            onclick: move |_| platform::open_in_new_tab(&href),
            "{text}"
        }
    }
}
