use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub open: bool,
    #[prop_or_default]
    pub error: Option<String>,
    pub busy: bool,
    pub on_close: Callback<()>,
    pub on_search: Callback<String>,
    pub on_locate: Callback<()>,
}

/// Full-screen search overlay.
///
/// Submits on the button or Enter; blank input is ignored. The inline error
/// line carries "City not found." / "Error fetching data." and clears when
/// the overlay closes.
#[function_component(SearchModal)]
pub fn search_modal(props: &Props) -> Html {
    let input_ref = use_node_ref();

    // Focus the input when the overlay opens, clear it when it closes.
    {
        let input_ref = input_ref.clone();
        use_effect_with(props.open, move |open| {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                if *open {
                    let _ = input.focus();
                } else {
                    input.set_value("");
                }
            }
            || ()
        });
    }

    let submit = {
        let input_ref = input_ref.clone();
        let on_search = props.on_search.clone();
        Callback::from(move |_: ()| {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                let city = input.value().trim().to_string();
                if city.is_empty() {
                    return;
                }
                on_search.emit(city);
            }
        })
    };

    let on_keypress = {
        let submit = submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                submit.emit(());
            }
        })
    };

    let on_close = props.on_close.reform(|_: MouseEvent| ());
    let on_locate = props.on_locate.reform(|_: MouseEvent| ());

    html! {
        <div class={classes!("search-overlay", props.open.then_some("active"))}>
            <div class="search-panel">
                <button class="close-search" onclick={on_close}>
                    <i class="fas fa-times"></i>
                </button>
                <h2>{"Change Location"}</h2>
                <div class="search-row">
                    <input
                        ref={input_ref}
                        class="city-input"
                        type="text"
                        placeholder="Search city..."
                        onkeypress={on_keypress}
                    />
                    <button
                        class="search-btn"
                        onclick={submit.reform(|_: MouseEvent| ())}
                        disabled={props.busy}
                    >
                        { if props.busy { "Searching..." } else { "Search" } }
                    </button>
                </div>
                <button class="location-btn" onclick={on_locate}>
                    <i class="fas fa-location-arrow"></i>
                    {" Use My Location"}
                </button>
                {if let Some(error) = &props.error {
                    html! { <p class="error-message">{error}</p> }
                } else {
                    html! {}
                }}
            </div>
        </div>
    }
}
