use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TeamButtonsProps {
    pub teams: Vec<String>,
    pub on_select: Callback<String>,
}

/// Plain button-per-team selector; an alternative to the logo grid.
#[function_component(TeamButtons)]
pub fn team_buttons(props: &TeamButtonsProps) -> Html {
    html! {
        <div class="button-container">
            {props.teams.iter().map(|team| {
                let onclick = {
                    let on_select = props.on_select.clone();
                    let team = team.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(team.clone()))
                };
                html! {
                    <button key={team.clone()} class="team-button" type="button" {onclick}>
                        {team.clone()}
                    </button>
                }
            }).collect::<Html>()}
        </div>
    }
}
