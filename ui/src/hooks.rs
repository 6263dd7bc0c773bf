//! Hooks shared across pages.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// Navigation callback that also scrolls back to the top, so a page
/// reached mid-scroll starts at its heading.
#[hook]
pub fn use_push_route() -> Callback<Route> {
    let navigator = use_navigator().unwrap();
    Callback::from(move |route: Route| {
        navigator.push(&route);
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    })
}

/// Sets the document title. There is no cleanup on unmount: every page
/// sets its own title, and route transitions don't guarantee the old
/// page unmounts before the new one mounts.
#[hook]
pub fn use_title(title: &str) {
    let title = title.to_string();
    use_effect_with(title, |title| {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            doc.set_title(title);
        }
    });
}
