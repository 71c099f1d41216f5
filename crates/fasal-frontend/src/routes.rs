use yew::prelude::*;
use yew_router::prelude::*;

use fasal::routes::NavIntent;

use crate::pages::{EntryPage, FeaturePage, HomePage};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Entry,
    #[at("/home")]
    Home,
    #[at("/home/crop_yield")]
    CropYield,
    #[at("/home/croprecommendation")]
    CropRecommendation,
    #[at("/home/soildata")]
    SoilData,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<NavIntent> for Route {
    fn from(intent: NavIntent) -> Self {
        Route::recognize(intent.path()).unwrap_or(Route::NotFound)
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Entry => html! { <EntryPage /> },
        Route::Home => html! { <HomePage /> },
        Route::CropYield | Route::CropRecommendation | Route::SoilData => {
            html! { <FeaturePage path={route.to_path()} /> }
        }
        Route::NotFound => html! { <div class="p-8">{ "404 Not Found" }</div> },
    }
}
