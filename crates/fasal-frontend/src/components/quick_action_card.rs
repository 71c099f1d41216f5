use yew::prelude::*;

use fasal::{
    callback,
    content::{Icon as IconKind, QuickAction},
    info,
    routes::NavIntent,
};

use crate::components::Icon;

#[derive(Properties, PartialEq)]
pub struct QuickActionCardProps {
    pub action: &'static QuickAction,
    pub on_navigate: Callback<NavIntent>,
}

/// A clickable tile that requests navigation to its action's route.
#[function_component(QuickActionCard)]
pub fn quick_action_card(props: &QuickActionCardProps) -> Html {
    let action = props.action;
    let on_navigate = props.on_navigate.clone();

    let on_click = callback!([on_navigate] {
        info!("Quick action selected: {}", action.title);
        on_navigate.emit(action.intent());
    });

    html! {
        <div
            class="group cursor-pointer rounded-xl shadow-sm hover:shadow-xl transition-all duration-300 hover:-translate-y-2 bg-gradient-to-br from-white to-gray-50 dark:from-gray-900 dark:to-gray-800"
            role="link"
            onclick={on_click}
        >
            <div class="p-6">
                <div class="flex items-center space-x-4">
                    <div class={classes!("p-3", "rounded-xl", "text-white", "shadow-lg", "bg-gradient-to-br", action.color.background(), action.color.gradient())}>
                        <Icon icon={action.icon} class="h-8 w-8" />
                    </div>
                    <div class="flex-1">
                        <h3 class="font-bold text-xl text-gray-900 dark:text-gray-100 mb-2">{ action.title }</h3>
                        <p class="text-gray-500 dark:text-gray-400 text-sm leading-relaxed">{ action.description }</p>
                    </div>
                    <Icon
                        icon={IconKind::ArrowRight}
                        class="h-6 w-6 text-gray-400 group-hover:text-gray-900 dark:group-hover:text-gray-100 transition-all duration-300 group-hover:translate-x-1"
                    />
                </div>
            </div>
        </div>
    }
}
