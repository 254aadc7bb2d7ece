use leptos::{html, prelude::*};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::search::{SearchPhase, SEARCH_DELAY_MS};

/// Full-screen search overlay shown on first load. A submitted query is
/// evaluated against the keyword table after a simulated delay, then the
/// page scrolls to the winning section via the location fragment and the
/// overlay dismisses itself. Skip dismisses without evaluating anything.
#[component]
pub fn AiSearch(#[prop(into)] on_dismiss: Callback<()>) -> impl IntoView {
    let input_ref = NodeRef::<html::Input>::new();
    let (phase, set_phase) = signal(SearchPhase::default());

    let UseTimeoutFnReturn { start, stop, .. } = use_timeout_fn(
        move |query: String| {
            let mut routed = None;
            set_phase.update(|p| routed = p.resolve(&query));
            if let Some(target) = routed {
                log::info!("search routed to #{}", target.fragment());
                window()
                    .location()
                    .set_hash(target.fragment())
                    .expect("should be able to set the location hash");
                on_dismiss.run(());
            }
        },
        SEARCH_DELAY_MS,
    );
    // dismissing the overlay cancels a pending resolution
    on_cleanup(move || stop());

    // focus the input as soon as it mounts
    Effect::new(move |_| {
        if let Some(el) = input_ref.get() {
            let _ = el.focus();
        }
    });

    let skip = move |_| {
        set_phase.update(|p| p.skip());
        on_dismiss.run(());
    };

    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center overlay-backdrop">
            <div class="w-full max-w-xl mx-4 glass p-8 rounded-2xl shadow-xl">
                <div class="flex justify-between items-center mb-6">
                    <h2 class="text-2xl font-bold">"AI Portfolio Search"</h2>
                    <button
                        on:click=skip
                        class="p-2 rounded-full surface-hover"
                        aria-label="Close search"
                    >
                        "✕"
                    </button>
                </div>

                <p class="text-soft mb-6">"What would you like to know about Rajan Prakash Chand?"</p>

                <form
                    class="mb-6"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        let el = if let Some(el) = input_ref.get_untracked() {
                            el
                        } else {
                            return;
                        };
                        let query = el.value();
                        let mut accepted = false;
                        set_phase.update(|p| accepted = p.submit(&query));
                        if accepted {
                            start(query);
                        }
                    }
                >
                    <div class="relative">
                        <span class="absolute left-3 top-3 text-soft">"🔍"</span>
                        <input
                            node_ref=input_ref
                            type="text"
                            placeholder="Type 'skills', 'experience', 'contact', etc."
                            class="w-full pl-10 pr-12 py-3 rounded-lg border field focus:outline-none focus:ring-1"
                        />
                        <button
                            type="submit"
                            disabled=move || phase.get().is_searching()
                            class="absolute right-3 top-3 text-accent accent-hover"
                            aria-label="Search"
                        >
                            "→"
                        </button>
                    </div>
                </form>

                <div class="flex justify-between items-center">
                    <div>
                        {move || {
                            phase
                                .get()
                                .is_searching()
                                .then(|| view! { <p class="text-sm text-soft">"Searching..."</p> })
                        }}
                    </div>
                    <button on:click=skip class="px-5 py-2 text-sm font-medium accent-hover">
                        "Skip to Portfolio"
                    </button>
                </div>
            </div>
        </div>
    }
}
