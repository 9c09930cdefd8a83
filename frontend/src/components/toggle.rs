use yew::{AttrValue, Callback, Html, Properties, classes, function_component, html};

#[derive(PartialEq, Properties)]
pub struct ToggleProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub on: bool,
    pub on_toggle: Callback<()>,
}

/// Switch with a Yes/No caption.
#[function_component]
pub fn Toggle(props: &ToggleProps) -> Html {
    let onclick = Callback::from({
        let on_toggle = props.on_toggle.clone();
        move |_| {
            on_toggle.emit(());
        }
    });

    html! {
        <div class="toggle-row">
            <label for={props.id.clone()} class="toggle-label">
                {props.label.clone()}
            </label>
            <button
                type="button"
                id={props.id.clone()}
                class={classes!("toggle", props.on.then_some("on"))}
                {onclick}>
                <span class="toggle-knob" />
            </button>
            <span class="toggle-state">
                { if props.on { "Yes" } else { "No" } }
            </span>
        </div>
    }
}
