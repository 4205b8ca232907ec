use yew::prelude::*;

use crate::config::REVEAL_AMOUNT;
use crate::hooks::use_in_view_once;
use crate::motion::{RevealDirection, RevealState};

#[derive(Properties, PartialEq)]
pub struct AnimatedSectionProps {
    #[prop_or_default]
    pub direction: RevealDirection,
    #[prop_or_default]
    pub children: Children,
}

/// Fades and slides its content into place the first time it scrolls into view.
#[function_component(AnimatedSection)]
pub fn animated_section(props: &AnimatedSectionProps) -> Html {
    let node = use_node_ref();
    let revealed = use_in_view_once(node.clone(), REVEAL_AMOUNT);
    let style = RevealState::from_revealed(revealed).style(props.direction);

    html! {
        <section ref={node} class="animated-section" {style}>
            { for props.children.iter() }
        </section>
    }
}
