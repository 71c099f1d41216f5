use yew::prelude::*;

use fasal::content::Icon as IconKind;

use crate::components::Icon;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub title: AttrValue,
    pub icon: IconKind,
    pub children: Children,
}

/// A titled dashboard section whose body sits on a card.
#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    html! {
        <section class="mb-12">
            <div class="flex items-center gap-3 mb-6">
                <Icon icon={props.icon} class="h-8 w-8 text-green-600 dark:text-green-400" />
                <h2 class="text-2xl font-bold text-gray-900 dark:text-gray-100">{ props.title.clone() }</h2>
            </div>
            <div class="rounded-xl shadow-sm bg-gradient-to-br from-white to-gray-50 dark:from-gray-900 dark:to-gray-800">
                { props.children.clone() }
            </div>
        </section>
    }
}
