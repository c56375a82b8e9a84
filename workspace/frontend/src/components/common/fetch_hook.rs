use std::rc::Rc;

use yew::prelude::*;

use common::{ForecastData, Place};

use crate::api_client::forecast::get_forecast;
use crate::components::common::toast::ToastContext;
use crate::hooks::FetchState;

/// Forecast loading hook.
///
/// Returns the current state and a `load` callback taking `(latitude,
/// longitude, place)`. Every call bumps a request sequence number and a
/// completion only applies while it is still the newest request, so a slow
/// response can never overwrite a later search. A failed refresh keeps the
/// last good forecast on screen and surfaces a toast instead.
#[hook]
pub fn use_forecast() -> (
    UseStateHandle<FetchState<(Place, Rc<ForecastData>)>>,
    Callback<(f64, f64, Place)>,
) {
    let fetch_state = use_state(FetchState::default);
    let toast_ctx = use_context::<ToastContext>().unwrap();
    let request_seq = use_mut_ref(|| 0u64);
    let has_data = use_mut_ref(|| false);

    let load = {
        let fetch_state = fetch_state.clone();
        let toast_ctx = toast_ctx.clone();
        let request_seq = request_seq.clone();
        let has_data = has_data.clone();

        use_callback((), move |(latitude, longitude, place): (f64, f64, Place), _| {
            let fetch_state = fetch_state.clone();
            let toast_ctx = toast_ctx.clone();
            let request_seq = request_seq.clone();
            let has_data = has_data.clone();

            let seq = {
                let mut current = request_seq.borrow_mut();
                *current += 1;
                *current
            };
            log::debug!("Forecast request {} for {}", seq, place.label());

            if !*has_data.borrow() {
                fetch_state.set(FetchState::Loading);
            }

            wasm_bindgen_futures::spawn_local(async move {
                let result = get_forecast(latitude, longitude).await;

                if *request_seq.borrow() != seq {
                    log::debug!("Dropping stale forecast response (request {} superseded)", seq);
                    return;
                }

                match result {
                    Ok(data) => {
                        *has_data.borrow_mut() = true;
                        fetch_state.set(FetchState::Success((place, Rc::new(data))));
                    }
                    Err(err) => {
                        toast_ctx.show_error(err.clone());
                        if !*has_data.borrow() {
                            fetch_state.set(FetchState::Error(err));
                        }
                    }
                }
            });
        })
    };

    (fetch_state, load)
}
