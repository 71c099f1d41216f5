use yew::prelude::*;

#[function_component(LoadingScreen)]
pub fn loading_screen() -> Html {
    html! {
        <div class="min-h-screen flex items-center justify-center">
            <div class="text-center">
                <div class="animate-spin rounded-full h-32 w-32 border-b-2 border-green-600 mx-auto"></div>
                <p class="mt-4 text-gray-500 dark:text-gray-400">{ "Loading..." }</p>
            </div>
        </div>
    }
}
