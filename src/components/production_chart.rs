use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid},
    element::{AxisLabel, AxisPointer, AxisPointerType, AxisType, ItemStyle, Tooltip, Trigger},
    renderer::WasmRenderer,
    series::Bar,
};
use gloo::events::EventListener;
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::models::production::ProductionSummary;

const CHART_ID: &str = "production-chart";
const BAR_COLOR: &str = "#F1F5F9";
const HIGHLIGHT_COLOR: &str = "#92E32B";
const AXIS_COLOR: &str = "#94A3B8";

#[derive(Properties, PartialEq)]
pub struct ProductionChartProps {
    pub summary: Rc<ProductionSummary>,
}

/// Monthly production bars with the highlighted month in the accent colour
#[function_component(ProductionChart)]
pub fn production_chart(props: &ProductionChartProps) -> Html {
    let container_ref = use_node_ref();
    let series = use_memo(props.summary.clone(), |summary| {
        summary
            .series_data()
            .map(|(labels, values)| split_highlight(labels, &values, summary.highlighted))
            .map_err(|e| e.to_string())
    });

    {
        let container_ref = container_ref.clone();

        use_effect_with((series, container_ref), |(series, container_ref)| {
            let listener = container_ref.cast::<HtmlElement>().and_then(|container| {
                render_chart(&container, series);

                let series = series.clone();
                web_sys::window().map(|window| {
                    EventListener::new(&window, "resize", move |_| {
                        render_chart(&container, &series);
                    })
                })
            });

            move || drop(listener)
        });
    }

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={CHART_ID} />
        </div>
    }
}

/// Bars for every month split into two stacked series: regular months and the
/// highlighted one. Each month has its value in exactly one of the two.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitSeries {
    pub labels: Vec<String>,
    pub regular: Vec<f64>,
    pub highlight: Vec<f64>,
}

pub fn split_highlight(labels: Vec<String>, values: &[f64], highlighted: &str) -> SplitSeries {
    let (regular, highlight) = labels
        .iter()
        .zip(values)
        .map(|(label, &value)| {
            if label == highlighted {
                (0.0, value)
            } else {
                (value, 0.0)
            }
        })
        .unzip();

    SplitSeries {
        labels,
        regular,
        highlight,
    }
}

fn render_chart(container: &HtmlElement, series: &Result<SplitSeries, String>) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    match series {
        Ok(series) => {
            let chart = build_chart(series);
            if let Err(e) = WasmRenderer::new(width, height).render(CHART_ID, &chart) {
                gloo::console::error!(format!("Render error: {e:?}"));
            }
        }
        Err(e) => gloo::console::error!(format!("Series data error: {e}")),
    }
}

fn build_chart(series: &SplitSeries) -> CharmingChart {
    CharmingChart::new()
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .grid(
            Grid::new()
                .left("2%")
                .right("2%")
                .bottom("12%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(series.labels.clone())
                .axis_label(AxisLabel::new().color(AXIS_COLOR)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().color(AXIS_COLOR)),
        )
        .series(
            Bar::new()
                .name("kWh")
                .stack("production")
                .bar_width("60%")
                .item_style(ItemStyle::new().color(BAR_COLOR))
                .data(series.regular.clone()),
        )
        .series(
            Bar::new()
                .name("kWh")
                .stack("production")
                .bar_width("60%")
                .item_style(ItemStyle::new().color(HIGHLIGHT_COLOR))
                .data(series.highlight.clone()),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_highlight() {
        let labels = vec!["Mar".to_string(), "Abr".to_string(), "Mai".to_string()];
        let split = split_highlight(labels, &[300.0, 900.0, 500.0], "Abr");

        assert_eq!(split.regular, vec![300.0, 0.0, 500.0]);
        assert_eq!(split.highlight, vec![0.0, 900.0, 0.0]);
        assert_eq!(split.labels.len(), 3);
    }

    #[test]
    fn test_split_highlight_unknown_month() {
        let labels = vec!["Jan".to_string()];
        let split = split_highlight(labels, &[400.0], "Dez");
        assert_eq!(split.regular, vec![400.0]);
        assert_eq!(split.highlight, vec![0.0]);
    }
}
