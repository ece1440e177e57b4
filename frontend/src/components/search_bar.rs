use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SearchBarProps {
    pub value: AttrValue,
    pub on_search: Callback<String>,
}

#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let oninput = {
        let on_search = props.on_search.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_search.emit(input.value());
        })
    };

    html! {
        <div class="search-bar">
            <input
                type="text"
                placeholder="Search team..."
                value={props.value.clone()}
                {oninput}
            />
        </div>
    }
}
