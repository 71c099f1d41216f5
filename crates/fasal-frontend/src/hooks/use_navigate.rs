use yew::prelude::*;
use yew_router::prelude::*;

use fasal::{routes::NavIntent, warn};

use crate::routes::Route;

/// A callback that performs [`NavIntent`]s through the router.
///
/// Pushing the current route again is harmless, so intents are never deduplicated here.
#[hook]
pub fn use_navigate() -> Callback<NavIntent> {
    let navigator = use_navigator();

    Callback::from(move |intent: NavIntent| match &navigator {
        Some(navigator) => navigator.push(&Route::from(intent)),
        None => warn!("No router available, dropping navigation to {intent}"),
    })
}
