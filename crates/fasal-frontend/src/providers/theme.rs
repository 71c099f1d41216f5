use std::str::FromStr;

use gloo_storage::{LocalStorage, Storage};
use web_sys::window;
use yew::prelude::*;

use fasal::debug;

const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Stored preference first, then the OS color scheme.
    fn initial() -> Self {
        LocalStorage::get::<String>(THEME_KEY)
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(|| {
                let prefers_dark = window()
                    .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
                    .map(|mq| mq.matches())
                    .unwrap_or(false);
                if prefers_dark { Theme::Dark } else { Theme::Light }
            })
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            _ => Err(()),
        }
    }
}

/// Mirror the theme onto the `dark` class of `<html>`.
fn apply(theme: Theme) {
    let Some(html) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let class_list = html.class_list();
    match theme {
        Theme::Dark => class_list.add_1("dark").ok(),
        Theme::Light => class_list.remove_1("dark").ok(),
    };
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = use_state(Theme::initial);

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = theme.toggled();
            LocalStorage::set(THEME_KEY, next.as_str()).ok();
            debug!("Theme switched to {}", next.as_str());
            theme.set(next);
        })
    };

    use_effect_with(*theme, |theme| apply(*theme));

    let context = ThemeContext {
        theme: *theme,
        toggle,
    };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            {props.children.clone()}
        </ContextProvider<ThemeContext>>
    }
}

#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("use_theme must be used within a ThemeProvider")
}
