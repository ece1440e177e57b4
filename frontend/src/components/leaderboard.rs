use shared::LeaderboardEntry;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LeaderboardCardsProps {
    pub title: AttrValue,
    pub entries: Vec<LeaderboardEntry>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(LeaderboardCards)]
pub fn leaderboard_cards(props: &LeaderboardCardsProps) -> Html {
    html! {
        <section class={classes!("leaderboard", props.class.clone())}>
            <h2>{props.title.clone()}</h2>
            <div class="flex-wrap-grid">
                {props.entries.iter().map(|entry| {
                    html! {
                        <div key={entry.name.clone()} class="stat-card">
                            <strong>{entry.name.clone()}</strong>
                            <p>{entry.caption()}</p>
                        </div>
                    }
                }).collect::<Html>()}
            </div>
        </section>
    }
}
