use std::rc::Rc;

use chrono::{NaiveDateTime, Timelike, Utc};
use chrono_tz::Tz;
use yew::prelude::*;

use common::{ForecastData, Place};
use compute::{day_overview, weekly_rows, window_mode_for_day};

use crate::api_client::geocoding::{reverse_geocode, search_city};
use crate::components::common::error::ErrorDisplay;
use crate::components::common::fetch_hook::use_forecast;
use crate::components::common::loading::Loading;
use crate::components::dashboard::background::Background;
use crate::components::dashboard::chart::TemperatureChart;
use crate::components::dashboard::hero::Hero;
use crate::components::dashboard::weekly::WeeklyList;
use crate::components::layout::header::Header;
use crate::components::search::modal::SearchModal;
use crate::geolocation;
use crate::hooks::FetchState;
use crate::settings;

/// Dashboard root: owns the forecast state, the selected day and the search
/// overlay, and wires geolocation and search into forecast loads. All
/// chart/hero values are derived from the held series through `compute`.
#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let (forecast_state, load_forecast) = use_forecast();
    let day_index = use_state(|| 0usize);
    let search_open = use_state(|| false);
    let search_error = use_state(|| None::<String>);
    let search_busy = use_state(|| false);

    log::debug!(
        "Dashboard state: loading={}, success={}, error={:?}",
        forecast_state.is_loading(),
        forecast_state.is_success(),
        forecast_state.error()
    );

    // Locate on first mount, like the page-load auto-locate.
    {
        let load_forecast = load_forecast.clone();
        use_effect_with((), move |_| {
            locate(load_forecast);
            || ()
        });
    }

    let on_open_search = {
        let search_open = search_open.clone();
        Callback::from(move |_| search_open.set(true))
    };

    let on_close_search = {
        let search_open = search_open.clone();
        let search_error = search_error.clone();
        Callback::from(move |_| {
            search_open.set(false);
            search_error.set(None);
        })
    };

    let on_locate = {
        let load_forecast = load_forecast.clone();
        let day_index = day_index.clone();
        let search_open = search_open.clone();
        let search_error = search_error.clone();
        Callback::from(move |_| {
            log::debug!("User requested geolocation");
            day_index.set(0);
            search_open.set(false);
            search_error.set(None);
            locate(load_forecast.clone());
        })
    };

    let on_search = {
        let load_forecast = load_forecast.clone();
        let day_index = day_index.clone();
        let search_open = search_open.clone();
        let search_error = search_error.clone();
        let search_busy = search_busy.clone();
        Callback::from(move |city: String| {
            if *search_busy {
                return;
            }

            let load_forecast = load_forecast.clone();
            let day_index = day_index.clone();
            let search_open = search_open.clone();
            let search_error = search_error.clone();
            let search_busy = search_busy.clone();

            search_busy.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match search_city(&city).await {
                    Ok(Some(found)) => {
                        day_index.set(0);
                        search_error.set(None);
                        search_open.set(false);
                        load_forecast.emit((found.latitude, found.longitude, found.place()));
                    }
                    Ok(None) => search_error.set(Some("City not found.".to_string())),
                    Err(e) => {
                        log::error!("City search failed: {}", e);
                        search_error.set(Some("Error fetching data.".to_string()));
                    }
                }
                search_busy.set(false);
            });
        })
    };

    let on_select_day = {
        let day_index = day_index.clone();
        Callback::from(move |index: usize| {
            log::debug!("Selected forecast day {}", index);
            day_index.set(index);
        })
    };

    let content = match &*forecast_state {
        FetchState::NotStarted | FetchState::Loading => html! {
            <Loading text="Finding your forecast..." />
        },
        FetchState::Error(error) => {
            let on_retry = {
                let load_forecast = load_forecast.clone();
                Callback::from(move |_| locate(load_forecast.clone()))
            };
            html! { <ErrorDisplay message={error.clone()} on_retry={Some(on_retry)} /> }
        }
        FetchState::Success((place, data)) => html! {
            <LoadedDashboard
                place={place.clone()}
                data={data.clone()}
                day_index={*day_index}
                on_select_day={on_select_day}
                on_open_search={on_open_search.clone()}
            />
        },
    };

    html! {
        <>
            { content }
            <SearchModal
                open={*search_open}
                error={(*search_error).clone()}
                busy={*search_busy}
                on_close={on_close_search}
                on_search={on_search}
                on_locate={on_locate}
            />
        </>
    }
}

/// Geolocate, reverse-geocode into a display name, and kick off the
/// forecast load. Denial or unavailability silently falls back to the
/// default location.
fn locate(load_forecast: Callback<(f64, f64, Place)>) {
    let on_success = {
        let load_forecast = load_forecast.clone();
        Callback::from(move |(latitude, longitude): (f64, f64)| {
            let load_forecast = load_forecast.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let place = match reverse_geocode(latitude, longitude).await {
                    Ok(result) => result.place(),
                    Err(_) => Place::new("Current Location", ""),
                };
                load_forecast.emit((latitude, longitude, place));
            });
        })
    };

    let on_error = Callback::from(move |_: String| {
        let settings = settings::get_settings();
        log::info!("Falling back to default location {}", settings.fallback_name);
        load_forecast.emit((
            settings.fallback_latitude,
            settings.fallback_longitude,
            Place::new(settings.fallback_name.clone(), settings.fallback_country.clone()),
        ));
    });

    geolocation::request_position(on_success, on_error);
}

/// Location-local "now" used as the chart's reference hour. Falls back to
/// the observation timestamp, which is already location-local, when the
/// reported zone does not parse.
fn local_now(data: &ForecastData) -> NaiveDateTime {
    match data.timezone.parse::<Tz>() {
        Ok(tz) => Utc::now().with_timezone(&tz).naive_local(),
        Err(_) => {
            log::warn!(
                "Invalid timezone '{}', using the observation time as reference",
                data.timezone
            );
            data.current.time
        }
    }
}

#[derive(Properties, PartialEq)]
struct LoadedProps {
    place: Place,
    data: Rc<ForecastData>,
    day_index: usize,
    on_select_day: Callback<usize>,
    on_open_search: Callback<()>,
}

#[function_component(LoadedDashboard)]
fn loaded_dashboard(props: &LoadedProps) -> Html {
    let data = &props.data;
    if !data.check_shape() {
        return html! {
            <ErrorDisplay message="Received malformed forecast data" />
        };
    }

    let now = local_now(data);
    // A stale index from a previous, longer forecast falls back to today.
    let overview = day_overview(data, props.day_index).or_else(|| day_overview(data, 0));
    let mode = window_mode_for_day(&data.daily, props.day_index, now);
    let rows = weekly_rows(&data.daily);
    let date_override = (props.day_index != 0)
        .then(|| data.daily.time.get(props.day_index).copied())
        .flatten();

    html! {
        <>
            <Background hour={now.hour()} />
            <div class="dashboard">
                <Header
                    location={props.place.label()}
                    timezone={Some(data.timezone.clone())}
                    date_override={date_override}
                    on_open_search={props.on_open_search.clone()}
                />
                <main class="dashboard-grid">
                    <section class="main-column">
                        {match overview {
                            Some(overview) => html! { <Hero overview={overview} /> },
                            None => html! {},
                        }}
                        <TemperatureChart data={props.data.clone()} mode={mode} />
                    </section>
                    <WeeklyList
                        rows={rows}
                        selected={props.day_index}
                        on_select={props.on_select_day.clone()}
                    />
                </main>
            </div>
        </>
    }
}
