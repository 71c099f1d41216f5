use yew::prelude::*;

use fasal::{
    content::{self, Icon as IconKind},
    home::{self, Dashboard, HomeView},
    routes::NavIntent,
    session::Session,
};

use crate::components::{ContactCard, FaqAccordion, LoadingScreen, Navbar, QuickActionCard, Section};
use crate::hooks::{use_auth_redirect, use_navigate};
use crate::providers::use_session;

/// Route entry point: reads the session context and the router, and hands both
/// to [`HomeScreen`].
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let session = use_session().session;
    let on_navigate = use_navigate();

    html! { <HomeScreen {session} {on_navigate} /> }
}

#[derive(Properties, PartialEq)]
pub struct HomeScreenProps {
    pub session: Session,
    pub on_navigate: Callback<NavIntent>,
}

#[function_component(HomeScreen)]
pub fn home_screen(props: &HomeScreenProps) -> Html {
    // The redirect intent from `render` is performed by the guard below, once per transition
    use_auth_redirect(props.session.status(), props.on_navigate.clone());

    match home::render(&props.session).view {
        HomeView::Loading => html! { <LoadingScreen /> },
        HomeView::Redirect => html! {},
        HomeView::Dashboard(dashboard) => dashboard_view(&dashboard, &props.on_navigate),
    }
}

fn dashboard_view(dashboard: &Dashboard, on_navigate: &Callback<NavIntent>) -> Html {
    let about = dashboard.about;

    html! {
        <div class="min-h-screen bg-white dark:bg-gray-950">
            <Navbar />

            <main class="container mx-auto px-4 py-6">
                // Welcome Section
                <div class="text-center mb-8">
                    <h1 class="text-4xl font-bold text-gray-900 dark:text-gray-100 mb-4">{ &dashboard.greeting }</h1>
                    <p class="text-xl text-gray-500 dark:text-gray-400 max-w-2xl mx-auto">{ dashboard.subtitle }</p>
                </div>

                // Quick Actions
                <section class="mb-8">
                    <h2 class="text-2xl font-bold text-gray-900 dark:text-gray-100 mb-6">{ "Quick Actions" }</h2>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                        { for dashboard.quick_actions.iter().map(|action| html! {
                            <QuickActionCard key={action.title} {action} on_navigate={on_navigate.clone()} />
                        }) }
                    </div>
                </section>

                <Section title="Frequently Asked Questions" icon={IconKind::HelpCircle}>
                    <div class="p-6">
                        <FaqAccordion entries={dashboard.faqs} />
                    </div>
                </Section>

                <Section title="About Us" icon={IconKind::Info}>
                    <div class="p-6 space-y-4 text-gray-500 dark:text-gray-400">
                        <p class="text-lg leading-relaxed">
                            { about.intro_before_brand }
                            <span class="font-semibold text-gray-900 dark:text-gray-100">{ about.brand }</span>
                            { about.intro_after_brand }
                        </p>
                        <p class="leading-relaxed">{ about.mission }</p>
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-6 mt-6">
                            <div>
                                <h3 class="font-semibold text-gray-900 dark:text-gray-100 mb-2">{ about.vision_title }</h3>
                                <p class="leading-relaxed">{ about.vision }</p>
                            </div>
                            <div>
                                <h3 class="font-semibold text-gray-900 dark:text-gray-100 mb-2">{ about.offerings_title }</h3>
                                <ul class="space-y-2 leading-relaxed">
                                    { for about.offerings.iter().map(|offering| html! { <li>{ format!("• {offering}") }</li> }) }
                                </ul>
                            </div>
                        </div>
                    </div>
                </Section>

                <Section title="Contact Us" icon={IconKind::Mail}>
                    <div class="p-6 pb-0">
                        <h3 class="text-xl font-semibold text-gray-900 dark:text-gray-100">{ content::CONTACT_TITLE }</h3>
                        <p class="text-sm text-gray-500 dark:text-gray-400">{ content::CONTACT_DESCRIPTION }</p>
                    </div>
                    <div class="p-6 grid grid-cols-1 md:grid-cols-3 gap-6">
                        { for dashboard.contacts.iter().map(|contact| html! { <ContactCard key={contact.label} {contact} /> }) }
                    </div>
                </Section>
            </main>
        </div>
    }
}
