use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use common::ForecastData;
use compute::{chart_geometry, PlotArea, WindowMode};

use crate::settings;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub data: Rc<ForecastData>,
    pub mode: WindowMode,
}

/// 24-hour temperature graph.
///
/// The geometry is computed in `compute` and rendered here as inline SVG:
/// a filled area, the polyline, and one visible point plus a larger
/// transparent hit circle per hour. Hovering (or tapping) a point shows a
/// tooltip anchored at that point's relative position; taps auto-dismiss
/// after a delay since touch has no hover-leave.
#[function_component(TemperatureChart)]
pub fn temperature_chart(props: &Props) -> Html {
    let active_point = use_state(|| None::<usize>);
    let plot = PlotArea::default();

    let geometry = match chart_geometry(&props.data.hourly, props.mode, plot) {
        Ok(Some(geometry)) => geometry,
        Ok(None) => {
            log::debug!("No hourly samples in the selected window, skipping chart");
            return html! {};
        }
        Err(e) => {
            log::error!("Chart geometry failed: {}", e);
            return html! {};
        }
    };

    let tooltip = active_point.and_then(|index| {
        geometry.points.get(index).map(|point| {
            let (left, top) = plot.anchor_percent(point);
            html! {
                <div
                    class="graph-tooltip visible"
                    style={format!("left: {}%; top: {}%;", left, top)}
                >
                    { point.tooltip_label() }
                </div>
            }
        })
    });

    html! {
        <section class="graph-card">
            <h2 class="graph-title">{"Temperature"}</h2>
            <div class="graph-plot">
                <svg
                    class="temp-graph"
                    viewBox={format!("0 0 {} {}", plot.width, plot.height)}
                    preserveAspectRatio="none"
                >
                    <path class="graph-area" d={geometry.area.clone()} />
                    <path class="graph-line" d={geometry.line.clone()} />
                    {for geometry.points.iter().enumerate().map(|(index, point)| {
                        let show = {
                            let active_point = active_point.clone();
                            Callback::from(move |_: MouseEvent| active_point.set(Some(index)))
                        };
                        let hide = {
                            let active_point = active_point.clone();
                            Callback::from(move |_: MouseEvent| active_point.set(None))
                        };
                        let touch = {
                            let active_point = active_point.clone();
                            Callback::from(move |_: TouchEvent| {
                                active_point.set(Some(index));
                                let active_point = active_point.clone();
                                let delay = settings::get_settings().tooltip_dismiss_ms;
                                Timeout::new(delay, move || active_point.set(None)).forget();
                            })
                        };

                        html! {
                            <g key={index}>
                                <circle
                                    class="graph-point"
                                    cx={point.x.to_string()}
                                    cy={point.y.to_string()}
                                    r="4"
                                />
                                <circle
                                    class="graph-hit"
                                    cx={point.x.to_string()}
                                    cy={point.y.to_string()}
                                    r="15"
                                    fill="transparent"
                                    onmouseenter={show}
                                    onmouseleave={hide}
                                    ontouchstart={touch}
                                />
                            </g>
                        }
                    })}
                </svg>
                { tooltip.unwrap_or_default() }
            </div>
            <div class="graph-labels">
                {for geometry.labels.iter().map(|label| html! {
                    <span key={label.offset}>{ format!("{}:00", label.hour) }</span>
                })}
            </div>
        </section>
    }
}
