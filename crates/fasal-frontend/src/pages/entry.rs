use web_sys::HtmlInputElement;
use yew::prelude::*;

use fasal::{
    callback,
    content::{BRAND, Icon as IconKind},
    routes::NavIntent,
    session::Session,
};

use crate::components::{Icon, LoadingScreen};
use crate::hooks::use_navigate;
use crate::providers::use_session;

/// Sign-in screen at the entry route. Signed-in visitors are sent on to the dashboard.
#[function_component(EntryPage)]
pub fn entry_page() -> Html {
    let context = use_session();
    let on_navigate = use_navigate();
    let display_name = use_state(String::new);

    {
        let on_navigate = on_navigate.clone();
        use_effect_with(context.session.is_authenticated(), move |is_authenticated| {
            if *is_authenticated {
                on_navigate.emit(NavIntent::home());
            }
        });
    }

    let on_name_input = {
        let display_name = display_name.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                display_name.set(input.value());
            }
        })
    };

    let sign_in = context.sign_in.clone();
    let on_submit = callback!([display_name, sign_in] |e: SubmitEvent| {
        e.prevent_default();
        sign_in.emit((*display_name).clone());
    });

    match context.session {
        Session::Loading => return html! { <LoadingScreen /> },
        Session::Authenticated(_) => return html! {},
        Session::Unauthenticated => {}
    }

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gradient-to-br from-green-50 to-white dark:from-gray-900 dark:to-gray-950 px-4">
            <form
                class="w-full max-w-sm p-8 rounded-xl shadow-lg bg-white dark:bg-gray-900 space-y-6"
                onsubmit={on_submit}
            >
                <div class="flex flex-col items-center gap-2">
                    <Icon icon={IconKind::Sprout} class="h-12 w-12 text-green-600 dark:text-green-400" />
                    <h1 class="text-2xl font-bold text-gray-900 dark:text-gray-100">{ BRAND }</h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">{ "Sign in to your agricultural assistant" }</p>
                </div>

                <div>
                    <label for="display-name" class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">
                        { "Your name" }
                    </label>
                    <input
                        id="display-name"
                        type="text"
                        class="w-full px-3 py-2 border border-gray-300 dark:border-gray-700 rounded-md bg-white dark:bg-gray-800 focus:outline-none focus:ring-2 focus:ring-green-500"
                        placeholder="Farmer"
                        value={(*display_name).clone()}
                        oninput={on_name_input}
                    />
                </div>

                <button
                    type="submit"
                    class="w-full bg-green-600 text-white px-4 py-2 rounded-md hover:bg-green-700 cursor-pointer"
                >
                    { "Continue" }
                </button>
            </form>
        </div>
    }
}
