//! Pure render model for the home dashboard.
//!
//! [`render`] maps a [`Session`] to what the page shows plus the navigation it
//! wants performed. It has no side effects; the frontend turns the intents into
//! router pushes.

use crate::content::{self, About, ContactCard, FaqEntry, QuickAction};
use crate::routes::NavIntent;
use crate::session::Session;

#[derive(Debug, Clone, PartialEq)]
pub enum HomeView {
    /// Spinner with "Loading..." while the session resolves.
    Loading,
    /// Nothing is shown; the visitor is being sent to the entry route.
    Redirect,
    Dashboard(Dashboard),
}

/// Everything shown to an authenticated user, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub greeting: String,
    pub subtitle: &'static str,
    pub quick_actions: &'static [QuickAction],
    pub faqs: &'static [FaqEntry],
    pub about: &'static About,
    pub contacts: &'static [ContactCard],
}

impl Dashboard {
    pub fn for_display_name(display_name: Option<&str>) -> Self {
        Self {
            greeting: greeting(display_name),
            subtitle: content::WELCOME_SUBTITLE,
            quick_actions: &content::QUICK_ACTIONS,
            faqs: &content::FAQS,
            about: &content::ABOUT,
            contacts: &content::CONTACTS,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HomeRender {
    pub view: HomeView,
    pub intents: Vec<NavIntent>,
}

/// Welcome banner text. Absent and empty names both fall back to "Farmer".
pub fn greeting(display_name: Option<&str>) -> String {
    let name = display_name
        .filter(|name| !name.is_empty())
        .unwrap_or(content::GREETING_FALLBACK);
    format!("Welcome back, {name}! 👨‍🌾")
}

pub fn render(session: &Session) -> HomeRender {
    match session {
        Session::Loading => HomeRender {
            view: HomeView::Loading,
            intents: Vec::new(),
        },
        Session::Unauthenticated => HomeRender {
            view: HomeView::Redirect,
            intents: vec![NavIntent::entry()],
        },
        Session::Authenticated(_) => HomeRender {
            view: HomeView::Dashboard(Dashboard::for_display_name(session.display_name())),
            intents: Vec::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accordion::Accordion;
    use crate::routes;
    use crate::session::{SessionSnapshot, User};

    fn signed_in(name: Option<&str>) -> Session {
        Session::Authenticated(User {
            display_name: name.map(str::to_string),
        })
    }

    fn dashboard(session: &Session) -> Dashboard {
        match render(session).view {
            HomeView::Dashboard(dashboard) => dashboard,
            other => panic!("expected a dashboard, got {other:?}"),
        }
    }

    #[test]
    fn loading_shows_only_the_spinner() {
        for (is_authenticated, user) in [
            (false, None),
            (true, None),
            (true, Some(User::named("Asha"))),
        ] {
            let session = Session::from(SessionSnapshot {
                is_loading: true,
                is_authenticated,
                user,
            });
            let rendered = render(&session);
            assert_eq!(rendered.view, HomeView::Loading);
            assert!(rendered.intents.is_empty());
        }
    }

    #[test]
    fn signed_out_renders_nothing_and_redirects_once() {
        let rendered = render(&Session::Unauthenticated);
        assert_eq!(rendered.view, HomeView::Redirect);
        assert_eq!(rendered.intents.len(), 1);
        assert_eq!(rendered.intents[0].path(), routes::ENTRY);
    }

    #[test]
    fn greets_the_user_by_name() {
        let dashboard = dashboard(&signed_in(Some("Asha")));
        assert!(dashboard.greeting.contains("Welcome back, Asha!"));
    }

    #[test]
    fn greets_nameless_users_as_farmer() {
        assert!(dashboard(&signed_in(None)).greeting.contains("Farmer"));
        assert!(dashboard(&signed_in(Some(""))).greeting.contains("Welcome back, Farmer!"));
    }

    #[test]
    fn quick_action_clicks_target_only_their_route() {
        let dashboard = dashboard(&signed_in(Some("Asha")));
        assert_eq!(dashboard.quick_actions.len(), 3);

        let expected = [
            ("Crop Yield Prediction", routes::CROP_YIELD),
            ("Crop Recommendation", routes::CROP_RECOMMENDATION),
            ("Know Your Soil Data", routes::SOIL_DATA),
        ];
        for (action, (title, path)) in dashboard.quick_actions.iter().zip(expected) {
            assert_eq!(action.title, title);
            assert_eq!(action.intent(), NavIntent::to(path));
        }
    }

    #[test]
    fn faq_accordion_holds_five_entries_with_one_open_at_most() {
        let dashboard = dashboard(&signed_in(None));
        assert_eq!(dashboard.faqs.len(), 5);

        let mut accordion = Accordion::new(dashboard.faqs.len());
        for index in [0, 3, 3, 1] {
            accordion.toggle(index);
            let open = (0..accordion.len()).filter(|&i| accordion.is_open(i)).count();
            assert!(open <= 1);
        }
        assert_eq!(accordion.open(), Some(1));
        accordion.toggle(1);
        assert_eq!(accordion.open(), None);
    }

    #[test]
    fn rendering_is_repeatable() {
        let session = signed_in(Some("Asha"));
        assert_eq!(render(&session), render(&session));

        let other = dashboard(&signed_in(Some("Ravi")));
        let asha = dashboard(&session);
        assert_ne!(asha.greeting, other.greeting);
        assert_eq!(asha.quick_actions, other.quick_actions);
        assert_eq!(asha.faqs, other.faqs);
        assert_eq!(asha.about, other.about);
        assert_eq!(asha.contacts, other.contacts);
    }
}
