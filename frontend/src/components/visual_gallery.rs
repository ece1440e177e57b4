use shared::TeamVisuals;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct VisualGalleryProps {
    pub visuals: TeamVisuals,
}

#[function_component(VisualGallery)]
pub fn visual_gallery(props: &VisualGalleryProps) -> Html {
    html! {
        <div class="visual-section">
            <h2>{"Team Visualizations"}</h2>
            {props.visuals.charts().iter().map(|chart| {
                html! {
                    <figure key={chart.title.clone()} class="visual-card">
                        <h3>{chart.heading()}</h3>
                        <img src={chart.data_uri()} alt={chart.title.clone()} width="90%" />
                    </figure>
                }
            }).collect::<Html>()}
        </div>
    }
}
