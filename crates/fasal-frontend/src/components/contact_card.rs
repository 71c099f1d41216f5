use yew::prelude::*;

use fasal::content::ContactCard as Contact;

use crate::components::Icon;

#[derive(Properties, PartialEq)]
pub struct ContactCardProps {
    pub contact: &'static Contact,
}

#[function_component(ContactCard)]
pub fn contact_card(props: &ContactCardProps) -> Html {
    let contact = props.contact;

    html! {
        <div class="flex items-start gap-4">
            <div class="p-3 rounded-lg bg-green-600/10">
                <Icon icon={contact.icon} class="h-5 w-5 text-green-600 dark:text-green-400" />
            </div>
            <div>
                <h3 class="font-semibold text-gray-900 dark:text-gray-100 mb-1">{ contact.label }</h3>
                <p class="text-gray-500 dark:text-gray-400">
                    { for contact.lines.iter().map(|line| html! { <>{ *line }<br /></> }) }
                </p>
                if let Some(note) = contact.note {
                    <p class="text-gray-500 dark:text-gray-400 text-sm">{ note }</p>
                }
            </div>
        </div>
    }
}
