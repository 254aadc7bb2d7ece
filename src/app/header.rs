use leptos::prelude::*;
use leptos_use::use_window_scroll;

use super::theme::use_theme;
use crate::search::NavTarget;

/// Scroll offset past which the header picks up its glass background.
const SCROLLED_PX: f64 = 10.0;

#[component]
pub fn Header() -> impl IntoView {
    let theme = use_theme();
    let (_scroll_x, scroll_y) = use_window_scroll();
    let (menu_open, set_menu_open) = signal(false);

    let header_class = move || {
        if scroll_y.get() > SCROLLED_PX {
            "fixed top-0 left-0 w-full z-40 px-5 py-4 glass"
        } else {
            "fixed top-0 left-0 w-full z-40 px-5 py-4 bg-transparent"
        }
    };

    view! {
        <header class=header_class>
            <div class="container mx-auto flex justify-between items-center">
                <a href="#home" class="text-2xl font-bold tracking-tight accent-hover">
                    "Rajan"
                    <span class="text-accent">"."</span>
                </a>

                <nav class="hidden md:flex space-x-1">
                    {NavTarget::ALL
                        .into_iter()
                        .map(|target| {
                            view! {
                                <a
                                    href=target.href()
                                    class="px-4 py-2 rounded-full font-medium accent-hover"
                                >
                                    {target.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>

                <div class="flex items-center space-x-4">
                    <a
                        href="tel:+441234567890"
                        class="flex items-center gap-1.5 text-sm font-medium accent-hover"
                    >
                        "📞"
                        <span class="hidden sm:inline">"Call"</span>
                    </a>
                    <a
                        href="mailto:rajanchand48@gmail.com"
                        class="flex items-center gap-1.5 text-sm font-medium accent-hover"
                    >
                        "✉"
                        <span class="hidden sm:inline">"Email"</span>
                    </a>

                    <button
                        on:click=move |_| theme.toggle()
                        class="p-2 rounded-full surface-hover"
                        aria-label="Toggle theme"
                    >
                        {move || if theme.theme().is_dark() { "☀" } else { "🌙" }}
                    </button>

                    <button
                        class="md:hidden p-2 rounded-full surface-hover"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        aria-label="Toggle mobile menu"
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            {move || {
                menu_open
                    .get()
                    .then(|| {
                        view! {
                            <nav class="md:hidden py-2 absolute top-full left-0 w-full glass">
                                <div class="container mx-auto py-3 flex flex-col space-y-1">
                                    {NavTarget::ALL
                                        .into_iter()
                                        .map(|target| {
                                            view! {
                                                <a
                                                    href=target.href()
                                                    on:click=move |_| set_menu_open.set(false)
                                                    class="px-5 py-2.5 font-medium surface-hover rounded-lg"
                                                >
                                                    {target.label()}
                                                </a>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </nav>
                        }
                    })
            }}
        </header>
    }
}
