use crate::version::Version;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="dashboard-footer">
            <p>
                {"© 2025 IPL Analytics Dashboard by "}
                <strong>{"VVS UDAY KIRAN"}</strong>
            </p>
            <div class="version">{Version::short()}</div>
        </footer>
    }
}
