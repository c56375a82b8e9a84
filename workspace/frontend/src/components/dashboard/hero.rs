use yew::prelude::*;

use compute::DayOverview;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub overview: DayOverview,
}

/// Headline card: big temperature, condition art and text, and the
/// wind/humidity/rain stat row. Humidity has no daily aggregate, so future
/// days render it as "--%".
#[function_component(Hero)]
pub fn hero(props: &Props) -> Html {
    let overview = &props.overview;
    let condition = overview.condition();

    let humidity = overview
        .humidity
        .map(|h| format!("{}%", h))
        .unwrap_or_else(|| "--%".to_string());

    html! {
        <section class="hero-panel">
            <img
                class="hero-image"
                src={condition.icon_url(overview.is_day)}
                alt={condition.description()}
            />
            <div class="hero-reading">
                <span class="hero-temp">{ overview.temperature.round() as i64 }</span>
                <span class="hero-unit">{"°"}</span>
            </div>
            <p class="hero-condition">{ condition.description() }</p>
            <div class="hero-range">
                <span class="high">{ format!("H: {}°", overview.high.round() as i64) }</span>
                <span class="low">{ format!("L: {}°", overview.low.round() as i64) }</span>
            </div>
            <div class="hero-stats">
                <div class="stat">
                    <i class="fas fa-wind"></i>
                    <span class="stat-label">{"Wind"}</span>
                    <span class="stat-value">{ format!("{} km/h", overview.wind_speed) }</span>
                </div>
                <div class="stat">
                    <i class="fas fa-tint"></i>
                    <span class="stat-label">{"Humidity"}</span>
                    <span class="stat-value">{ humidity }</span>
                </div>
                <div class="stat">
                    <i class="fas fa-cloud-rain"></i>
                    <span class="stat-label">{"Rain"}</span>
                    <span class="stat-value">{ format!("{} mm", overview.precipitation) }</span>
                </div>
            </div>
        </section>
    }
}
