use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LogoCardProps {
    pub team: AttrValue,
    pub src: AttrValue,
    pub active: bool,
    /// Whether `src` is already the fallback image.
    pub fallback: bool,
    pub on_select: Callback<String>,
    pub on_logo_error: Callback<String>,
}

#[function_component(LogoCard)]
pub fn logo_card(props: &LogoCardProps) -> Html {
    let onclick = {
        let on_select = props.on_select.clone();
        let team = props.team.to_string();
        Callback::from(move |_: MouseEvent| on_select.emit(team.clone()))
    };

    // Only the team's own logo reports failures, so a broken fallback cannot loop.
    let onerror = (!props.fallback).then(|| {
        let on_logo_error = props.on_logo_error.clone();
        let team = props.team.to_string();
        Callback::from(move |_: Event| on_logo_error.emit(team.clone()))
    });

    html! {
        <div class={classes!("logo-card", props.active.then_some("active"))} {onclick}>
            <img src={props.src.clone()} alt={props.team.clone()} {onerror} />
            <p>{props.team.clone()}</p>
        </div>
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogoTile {
    pub team: String,
    pub src: String,
    pub fallback: bool,
}

#[derive(Properties, PartialEq, Clone)]
pub struct TeamLogoGridProps {
    /// In display order.
    pub tiles: Vec<LogoTile>,
    pub selected: AttrValue,
    pub on_select: Callback<String>,
    pub on_logo_error: Callback<String>,
}

#[function_component(TeamLogoGrid)]
pub fn team_logo_grid(props: &TeamLogoGridProps) -> Html {
    html! {
        <div class="logo-grid">
            {props.tiles.iter().map(|tile| {
                html! {
                    <LogoCard
                        key={tile.team.clone()}
                        team={tile.team.clone()}
                        src={tile.src.clone()}
                        active={props.selected.as_str() == tile.team.as_str()}
                        fallback={tile.fallback}
                        on_select={props.on_select.clone()}
                        on_logo_error={props.on_logo_error.clone()}
                    />
                }
            }).collect::<Html>()}
        </div>
    }
}
