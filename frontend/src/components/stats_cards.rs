use shared::TeamAnalytics;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsCardsProps {
    pub stats: TeamAnalytics,
}

/// One card per analytics entry, in the order received.
#[function_component(StatsCards)]
pub fn stats_cards(props: &StatsCardsProps) -> Html {
    html! {
        <div class="stats-cards">
            {props.stats.entries().iter().map(|entry| {
                html! {
                    <div key={entry.label.clone()} class="card">
                        <h3>{entry.label.clone()}</h3>
                        <p>{entry.value.to_string()}</p>
                    </div>
                }
            }).collect::<Html>()}
        </div>
    }
}
