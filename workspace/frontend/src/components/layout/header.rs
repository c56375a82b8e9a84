use chrono::NaiveDate;
use yew::prelude::*;

use super::clock::Clock;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub location: String,
    #[prop_or_default]
    pub timezone: Option<String>,
    #[prop_or_default]
    pub date_override: Option<NaiveDate>,
    pub on_open_search: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &Props) -> Html {
    let open_search = props.on_open_search.reform(|_: MouseEvent| ());

    html! {
        <header class="top-bar">
            <div class="location-container" onclick={open_search.clone()}>
                <i class="fas fa-map-marker-alt"></i>
                <span class="location-text">{ &props.location }</span>
                <i class="fas fa-chevron-down"></i>
            </div>
            <Clock timezone={props.timezone.clone()} date_override={props.date_override} />
            <button class="search-trigger" onclick={open_search}>
                <i class="fas fa-search"></i>
            </button>
        </header>
    }
}
