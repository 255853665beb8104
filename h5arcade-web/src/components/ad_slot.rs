use crate::ads::{self, AdSlotConfig};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub config: AdSlotConfig,
}

/// A sandboxed banner of the configured size. The provider document lives
/// entirely inside the iframe; the host page never runs its script.
#[function_component(AdSlot)]
pub fn ad_slot(props: &Props) -> Html {
    let doc = ads::srcdoc(&props.config);
    let style = format!(
        "width: 100%; height: {}px; border: 0; max-height: {}px; overflow: hidden;",
        props.config.height, props.config.height
    );
    html! {
        <div class="ad-slot">
            <iframe
                srcdoc={doc}
                sandbox="allow-scripts allow-same-origin allow-top-navigation-by-user-activation allow-popups"
                style={style}
                title="Advertisement"
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn slot_renders_a_sandboxed_iframe() {
        let props = Props {
            config: crate::ads::LIST_RECT,
        };
        let html = block_on(LocalServerRenderer::<AdSlot>::with_props(props).render());
        assert!(html.contains("sandbox"));
        assert!(html.contains("Advertisement"));
        assert!(html.contains("height: 250px"));
    }
}
