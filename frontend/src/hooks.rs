use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::motion::{scroll_progress, should_reveal};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    /// Vertical scroll offset of the window in pixels.
    pub y: f64,
    /// Share of the scrollable page already scrolled, `0.0..=1.0`.
    pub progress: f64,
}

fn measure_scroll() -> ScrollMetrics {
    let Some(window) = web_sys::window() else {
        return ScrollMetrics::default();
    };
    let y = window.scroll_y().unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0);
    let scroll_height = window
        .document()
        .and_then(|document| document.document_element())
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or(0.0);

    ScrollMetrics {
        y,
        progress: scroll_progress(y, scroll_height, viewport_height),
    }
}

#[hook]
fn use_window_scroll_metrics() -> ScrollMetrics {
    let metrics = use_state_eq(ScrollMetrics::default);

    // Pages restored mid-scroll never fire an initial scroll event
    {
        let metrics = metrics.clone();
        use_effect_with_deps(
            move |_| {
                metrics.set(measure_scroll());
                || ()
            },
            (),
        );
    }
    {
        let metrics = metrics.clone();
        use_event_with_window("scroll", move |_: Event| metrics.set(measure_scroll()));
    }
    {
        let metrics = metrics.clone();
        use_event_with_window("resize", move |_: Event| metrics.set(measure_scroll()));
    }

    *metrics
}

#[derive(Properties, PartialEq)]
pub struct ScrollProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Owns the single window scroll subscription and shares it with the tree.
#[function_component(ScrollProvider)]
pub fn scroll_provider(props: &ScrollProviderProps) -> Html {
    let metrics = use_window_scroll_metrics();

    html! {
        <ContextProvider<ScrollMetrics> context={metrics}>
            { for props.children.iter() }
        </ContextProvider<ScrollMetrics>>
    }
}

#[hook]
pub fn use_scroll() -> ScrollMetrics {
    use_context::<ScrollMetrics>().unwrap_or_default()
}

struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe_once(
    element: &Element,
    amount: f64,
    revealed: UseStateHandle<bool>,
) -> Result<RevealObserver, JsValue> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let entered = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| {
                    should_reveal(entry.is_intersecting(), entry.intersection_ratio(), amount)
                });
            if entered {
                debug!("Section entered viewport, revealing");
                revealed.set(true);
                observer.disconnect();
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(amount));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(element);

    Ok(RevealObserver {
        observer,
        _callback: callback,
    })
}

/// Turns `true` the first time at least `amount` of the referenced node is
/// visible, and stays `true` afterwards.
#[hook]
pub fn use_in_view_once(node: NodeRef, amount: f64) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observer = if *revealed {
                    None
                } else if let Some(element) = node.cast::<Element>() {
                    match observe_once(&element, amount, revealed.clone()) {
                        Ok(observer) => Some(observer),
                        Err(err) => {
                            warn!("IntersectionObserver unavailable, showing section: {:?}", err);
                            revealed.set(true);
                            None
                        }
                    }
                } else {
                    warn!("Reveal target is not mounted, showing section");
                    revealed.set(true);
                    None
                };

                move || drop(observer)
            },
            node,
        );
    }

    *revealed
}

/// Flips to `true` shortly after mount so CSS transitions have a start state.
#[hook]
pub fn use_entrance(delay_ms: u32) -> bool {
    let entered = use_state_eq(|| false);

    {
        let entered = entered.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(delay_ms, move || entered.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    *entered
}
