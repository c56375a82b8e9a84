use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or_default]
    pub text: Option<String>,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="loading-panel">
            <span class="loading-spinner"></span>
            {if let Some(text) = &props.text {
                html! { <p class="loading-text">{text}</p> }
            } else {
                html! {}
            }}
        </div>
    }
}
