use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub loading: bool,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub empty: bool,
    #[prop_or_default]
    pub on_retry: Callback<()>,
    /// Replaces the default spinner while loading (e.g. a skeleton grid).
    #[prop_or_default]
    pub loading_view: Option<Html>,
    #[prop_or_default]
    pub children: Children,
}

/// Renders exactly one of loading, error, empty, or the ready children —
/// the same tagged shape the catalogue loader emits. Error and empty both
/// carry a retry affordance.
#[function_component(StatusView)]
pub fn status_view(props: &Props) -> Html {
    let retry = {
        let on_retry = props.on_retry.clone();
        Callback::from(move |_| on_retry.emit(()))
    };

    if props.loading {
        return props.loading_view.clone().unwrap_or_else(|| {
            html! {
                <div class="loading-container" role="status">
                    <div class="spinner" aria-hidden="true" />
                    <p>{ "Loading..." }</p>
                </div>
            }
        });
    }
    if let Some(error) = &props.error {
        return html! {
            <div class="error-container" role="alert">
                <p class="error-text">{ error.clone() }</p>
                <button type="button" class="retry-btn" onclick={retry}>{ "Retry" }</button>
            </div>
        };
    }
    if props.empty {
        return html! {
            <div class="empty">
                <div class="empty-icon" aria-hidden="true" />
                <p class="empty-text">{ "Nothing to show right now. Please try again later." }</p>
                <button type="button" class="retry-btn" onclick={retry}>{ "Retry" }</button>
            </div>
        };
    }
    html! { <>{ for props.children.iter() }</> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn render(props: Props) -> String {
        block_on(LocalServerRenderer::<StatusView>::with_props(props).render())
    }

    fn base() -> Props {
        Props {
            loading: false,
            error: None,
            empty: false,
            on_retry: Callback::noop(),
            loading_view: None,
            children: Children::new(vec![html! { <p>{ "ready content" }</p> }]),
        }
    }

    #[test]
    fn loading_wins_over_everything_else() {
        let mut props = base();
        props.loading = true;
        props.error = Some(AttrValue::from("ignored"));
        let html = render(props);
        assert!(html.contains("Loading..."));
        assert!(!html.contains("ignored"));
    }

    #[test]
    fn custom_loading_view_replaces_the_spinner() {
        let mut props = base();
        props.loading = true;
        props.loading_view = Some(html! { <div class="custom-skeleton" /> });
        assert!(render(props).contains("custom-skeleton"));
    }

    #[test]
    fn error_shows_the_message_and_a_retry_button() {
        let mut props = base();
        props.error = Some(AttrValue::from("HTTP 404: Failed to fetch games"));
        let html = render(props);
        assert!(html.contains("HTTP 404: Failed to fetch games"));
        assert!(html.contains("Retry"));
        assert!(!html.contains("ready content"));
    }

    #[test]
    fn empty_state_offers_retry() {
        let mut props = base();
        props.empty = true;
        let html = render(props);
        assert!(html.contains("Retry"));
        assert!(!html.contains("ready content"));
    }

    #[test]
    fn ready_renders_the_children() {
        assert!(render(base()).contains("ready content"));
    }
}
