use crate::state::Theme;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ThemeToggleProps {
    pub theme: Theme,
    pub on_toggle: Callback<()>,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };

    html! {
        <div class="theme-toggle">
            <button type="button" class={classes!("theme-button", props.theme.button_class())} {onclick}>
                {props.theme.toggle_label()}
            </button>
        </div>
    }
}
