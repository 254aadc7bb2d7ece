use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use codee::string::FromToStringCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::{use_local_storage_with_options, UseStorageOptions};
#[cfg(feature = "hydrate")]
use leptos_use::use_preferred_dark;

use crate::theme::Theme;
#[cfg(feature = "hydrate")]
use crate::theme::THEME_STORAGE_KEY;

/// Scoped handle to the current theme, provided once at the app root.
/// On the client the backing signal writes through to local storage, so a
/// toggle persists and every subscriber re-renders off the same signal.
#[derive(Clone, Copy)]
pub struct ThemeStore {
    current: Signal<Theme>,
    set_current: WriteSignal<Theme>,
}

impl ThemeStore {
    pub fn theme(&self) -> Theme {
        self.current.get()
    }

    pub fn toggle(&self) {
        self.set_current.update(|theme| *theme = theme.toggled());
        log::debug!("theme toggled to {}", self.current.get_untracked());
    }
}

pub fn use_theme() -> ThemeStore {
    expect_context::<ThemeStore>()
}

#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let store = {
        let prefers_dark = use_preferred_dark();
        let fallback = Theme::for_system_preference(prefers_dark.get_untracked());
        let (current, set_current, _) = use_local_storage_with_options::<Theme, FromToStringCodec>(
            THEME_STORAGE_KEY,
            UseStorageOptions::default().initial_value(fallback),
        );
        ThemeStore {
            current,
            set_current,
        }
    };
    #[cfg(not(feature = "hydrate"))]
    let store = {
        let (current, set_current) = signal(Theme::default());
        ThemeStore {
            current: current.into(),
            set_current,
        }
    };
    provide_context(store);

    view! { <div class=move || store.theme().shell_class()>{children()}</div> }
}
