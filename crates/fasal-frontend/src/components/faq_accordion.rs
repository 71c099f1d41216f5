use yew::prelude::*;

use fasal::{accordion::Accordion, callback, content::{FaqEntry, Icon as IconKind}};

use crate::components::Icon;

#[derive(Properties, PartialEq)]
pub struct FaqAccordionProps {
    pub entries: &'static [FaqEntry],
}

/// Single-expansion FAQ list. Opening an entry closes the previous one, and
/// clicking the open entry collapses it.
#[function_component(FaqAccordion)]
pub fn faq_accordion(props: &FaqAccordionProps) -> Html {
    let accordion = use_state(|| Accordion::new(props.entries.len()));

    let on_toggle = callback!([accordion] |index: usize| {
        let mut next = *accordion;
        next.toggle(index);
        accordion.set(next);
    });

    html! {
        <div class="w-full divide-y divide-gray-200 dark:divide-gray-700">
            { for props.entries.iter().enumerate().map(|(index, entry)| {
                let is_open = accordion.is_open(index);
                let onclick = on_toggle.reform(move |_: MouseEvent| index);
                html! {
                    <div key={index}>
                        <button
                            class="w-full flex items-center justify-between py-4 text-left font-semibold text-gray-900 dark:text-gray-100 hover:underline cursor-pointer"
                            aria-expanded={is_open.to_string()}
                            {onclick}
                        >
                            <span>{ entry.question }</span>
                            <Icon
                                icon={IconKind::ChevronDown}
                                class={if is_open { "h-4 w-4 shrink-0 transition-transform duration-200 rotate-180" } else { "h-4 w-4 shrink-0 transition-transform duration-200" }}
                            />
                        </button>
                        if is_open {
                            <div class="pb-4 text-gray-500 dark:text-gray-400">{ entry.answer }</div>
                        }
                    </div>
                }
            }) }
        </div>
    }
}
