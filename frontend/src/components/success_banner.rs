use yew::{AttrValue, Callback, Html, Properties, function_component, html};

#[derive(PartialEq, Properties)]
pub struct SuccessBannerProps {
    pub text: AttrValue,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn SuccessBanner(props: &SuccessBannerProps) -> Html {
    let onclick = Callback::from({
        let on_close = props.on_close.clone();
        move |_| {
            on_close.emit(());
        }
    });

    html! {
        <div class="banner-success">
            <div class="banner-text">
                <span class="icon-check" />
                <span>{props.text.clone()}</span>
            </div>
            <button type="button" class="banner-close" aria-label="close" {onclick}>
                {"\u{d7}"}
            </button>
        </div>
    }
}
