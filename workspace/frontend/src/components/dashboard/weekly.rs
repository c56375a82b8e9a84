use yew::prelude::*;

use common::Condition;
use compute::WeeklyRow;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub rows: Vec<WeeklyRow>,
    pub selected: usize,
    pub on_select: Callback<usize>,
}

/// Sidebar list of the forecast days. Clicking a row selects it; the
/// selected row drives the hero card and the chart window.
#[function_component(WeeklyList)]
pub fn weekly_list(props: &Props) -> Html {
    html! {
        <aside class="weekly-panel">
            <h2 class="weekly-title">{"This Week"}</h2>
            <ul class="weekly-list">
                {for props.rows.iter().map(|row| {
                    let index = row.index;
                    let active = index == props.selected;
                    let condition = Condition::from_code(row.weather_code);
                    let onclick = props.on_select.reform(move |_: MouseEvent| index);

                    html! {
                        <li
                            key={index}
                            class={classes!("day-item", active.then_some("active"))}
                            {onclick}
                        >
                            <span class="day-name">{ &row.label }</span>
                            <img
                                class="day-icon"
                                src={condition.icon_url(true)}
                                alt={condition.description()}
                            />
                            <span class="day-temp">
                                <span class="high">{ format!("{}°", row.high) }</span>
                                <span class="low">{ format!("{}°", row.low) }</span>
                            </span>
                        </li>
                    }
                })}
            </ul>
        </aside>
    }
}
