use chrono::{DateTime, Local, NaiveDate, Utc};
use chrono_tz::Tz;
use gloo_timers::callback::Interval;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// IANA zone of the displayed location, once a forecast is loaded.
    #[prop_or_default]
    pub timezone: Option<String>,
    /// Replaces the date line while a future day is selected.
    #[prop_or_default]
    pub date_override: Option<NaiveDate>,
}

/// Live clock for the header: HH:MM with zone abbreviation plus the
/// long-form date. Renders in the location's zone when the forecast
/// provided a valid one, otherwise in the browser's own zone.
#[function_component(Clock)]
pub fn clock(props: &Props) -> Html {
    let now = use_state(Utc::now);

    {
        let now = now.clone();
        use_effect_with((), move |_| {
            let interval = Interval::new(1_000, move || now.set(Utc::now()));
            move || drop(interval)
        });
    }

    let zone = use_memo(props.timezone.clone(), |timezone| {
        timezone.as_ref().and_then(|name| match name.parse::<Tz>() {
            Ok(tz) => Some(tz),
            Err(_) => {
                log::warn!("Invalid timezone '{}', falling back to browser time", name);
                None
            }
        })
    });

    let (time_line, today) = match *zone {
        Some(tz) => {
            let local = now.with_timezone(&tz);
            (local.format("%H:%M %Z").to_string(), local.date_naive())
        }
        None => {
            let local: DateTime<Local> = DateTime::from(*now);
            (local.format("%H:%M %Z").to_string(), local.date_naive())
        }
    };

    let date_line = props
        .date_override
        .unwrap_or(today)
        .format("%A, %-d %B")
        .to_string();

    html! {
        <div class="clock">
            <span class="clock-time">{time_line}</span>
            <span class="clock-date">{date_line}</span>
        </div>
    }
}
