use yew::prelude::*;
use yew_router::prelude::*;

use fasal::content::{BRAND, Icon as IconKind};

use crate::components::Icon;
use crate::providers::{Theme, use_session, use_theme};
use crate::routes::Route;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let theme = use_theme();
    let session = use_session();

    let on_toggle_theme = {
        let toggle = theme.toggle.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };

    let on_sign_out = {
        let sign_out = session.sign_out.clone();
        Callback::from(move |_: MouseEvent| sign_out.emit(()))
    };

    let theme_icon = match theme.theme {
        Theme::Light => IconKind::Moon,
        Theme::Dark => IconKind::Sun,
    };

    html! {
        <nav class="sticky top-0 z-10 border-b border-gray-200 dark:border-gray-800 bg-white/80 dark:bg-gray-950/80 backdrop-blur">
            <div class="container mx-auto px-4 h-16 flex items-center justify-between">
                <Link<Route> to={Route::Home} classes="flex items-center gap-2 text-xl font-bold text-green-700 dark:text-green-400">
                    <Icon icon={IconKind::Sprout} class="h-7 w-7" />
                    <span>{ BRAND }</span>
                </Link<Route>>

                <div class="flex items-center gap-2">
                    <button
                        class="p-2 rounded-md text-gray-600 hover:bg-gray-100 dark:text-gray-300 dark:hover:bg-gray-800 cursor-pointer"
                        title="Toggle theme"
                        onclick={on_toggle_theme}
                    >
                        <Icon icon={theme_icon} class="h-5 w-5" />
                    </button>
                    {
                        if session.session.is_authenticated() {
                            html! {
                                <button
                                    class="flex items-center gap-2 px-3 py-2 rounded-md text-sm text-gray-700 hover:bg-gray-100 dark:text-gray-200 dark:hover:bg-gray-800 cursor-pointer"
                                    onclick={on_sign_out}
                                >
                                    <Icon icon={IconKind::LogOut} class="h-4 w-4" />
                                    <span>{ "Sign out" }</span>
                                </button>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
        </nav>
    }
}
