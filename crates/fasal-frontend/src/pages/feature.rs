use yew::prelude::*;
use yew_router::prelude::*;

use fasal::content::QuickAction;

use crate::components::{Icon, LoadingScreen, Navbar};
use crate::hooks::{use_auth_redirect, use_navigate};
use crate::providers::use_session;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct FeaturePageProps {
    pub path: String,
}

/// Landing spot for a quick action's route.
#[function_component(FeaturePage)]
pub fn feature_page(props: &FeaturePageProps) -> Html {
    let session = use_session().session;
    let on_navigate = use_navigate();
    use_auth_redirect(session.status(), on_navigate);

    if session.is_loading() {
        return html! { <LoadingScreen /> };
    }
    if !session.is_authenticated() {
        return html! {};
    }

    let Some(action) = QuickAction::for_path(&props.path) else {
        return html! { <Redirect<Route> to={Route::NotFound} /> };
    };

    html! {
        <div class="min-h-screen bg-white dark:bg-gray-950">
            <Navbar />
            <main class="container mx-auto px-4 py-12 max-w-2xl text-center">
                <div class={classes!("inline-flex", "p-4", "rounded-xl", "text-white", "shadow-lg", "mb-6", action.color.background())}>
                    <Icon icon={action.icon} class="h-10 w-10" />
                </div>
                <h1 class="text-3xl font-bold text-gray-900 dark:text-gray-100 mb-4">{ action.title }</h1>
                <p class="text-lg text-gray-500 dark:text-gray-400 mb-8">{ action.description }</p>
                <Link<Route> to={Route::Home} classes="text-green-700 dark:text-green-400 hover:underline">
                    { "Back to Home" }
                </Link<Route>>
            </main>
        </div>
    }
}
