use yew::prelude::*;

/// Placeholder card shown while the catalogue loads.
#[function_component(SkeletonCard)]
pub fn skeleton_card() -> Html {
    html! {
        <li class="card skeleton-card" aria-hidden="true">
            <div class="media skeleton-block" />
            <div class="content">
                <div class="skeleton-line wide" />
                <div class="skeleton-line" />
            </div>
        </li>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct SkeletonGridProps {
    #[prop_or(8)]
    pub count: usize,
}

#[function_component(SkeletonGrid)]
pub fn skeleton_grid(props: &SkeletonGridProps) -> Html {
    html! {
        <ul class="grid onecol" aria-busy="true">
            { for (0..props.count).map(|index| html! { <SkeletonCard key={index} /> }) }
        </ul>
    }
}
