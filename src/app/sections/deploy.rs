use leptos::{html, prelude::*};

use super::super::reveal::use_reveal;
use super::SectionHeading;

struct DeployStep {
    title: &'static str,
    summary: &'static str,
    emblem: &'static str,
    details: &'static [&'static str],
}

static STEPS: [DeployStep; 5] = [
    DeployStep {
        title: "Set Up the Repository",
        summary: "Create a repository where the portfolio source will live.",
        emblem: "📦",
        details: &[
            "Sign in to your Git host or create an account",
            "Create a new public repository for the site",
            "Push the project source to the main branch",
        ],
    },
    DeployStep {
        title: "Install the Toolchain",
        summary: "The site builds with the Rust nightly toolchain and cargo-leptos.",
        emblem: "🦀",
        details: &[
            "Install rustup and the nightly toolchain",
            "Add the wasm32-unknown-unknown target",
            "Install cargo-leptos: cargo install cargo-leptos",
        ],
    },
    DeployStep {
        title: "Build the Release Bundle",
        summary: "Produce the optimized WASM bundle and static assets.",
        emblem: "🛠",
        details: &[
            "Run cargo leptos build --release",
            "The site output lands in target/site",
            "The WASM bundle is built with the size-optimized release profile",
        ],
    },
    DeployStep {
        title: "Publish to Static Hosting",
        summary: "Any static host can serve the generated site directory.",
        emblem: "🌍",
        details: &[
            "Copy target/site to your hosting branch or bucket",
            "Point the host's root at the copied directory",
            "Set the public path prefix if the site is served from a subpath",
        ],
    },
    DeployStep {
        title: "Verify the Deployment",
        summary: "Check that the published site behaves like the local build.",
        emblem: "✅",
        details: &[
            "Visit the published URL",
            "Walk every section anchor and the search overlay",
            "Toggle the theme and reload to confirm it persists",
        ],
    },
];

#[component]
pub fn DeployGuideSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref);

    view! {
        <section
            node_ref=section_ref
            id="deploy"
            class="py-20 px-4 relative overflow-hidden section-content"
            class:revealed=move || revealed.get()
        >
            <div class="container mx-auto">
                <SectionHeading
                    title="How This Site Ships"
                    lede="The steps behind building this portfolio and publishing it to static hosting."
                />

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {STEPS
                        .iter()
                        .enumerate()
                        .map(|(index, step)| {
                            view! {
                                <div class="card border divider rounded-2xl p-6 shadow-sm">
                                    <div class="flex items-center mb-4">
                                        <div class="p-2 rounded-full chip-accent mr-3">{step.emblem}</div>
                                        <div>
                                            <p class="text-xs text-soft">{format!("Step {}", index + 1)}</p>
                                            <h3 class="text-lg font-bold">{step.title}</h3>
                                        </div>
                                    </div>
                                    <p class="text-sm text-soft mb-4">{step.summary}</p>
                                    <ul class="space-y-2">
                                        {step
                                            .details
                                            .iter()
                                            .map(|detail| {
                                                view! {
                                                    <li class="flex items-start text-sm">
                                                        <span class="w-2 h-2 rounded-full bg-accent mr-2 mt-1.5 shrink-0"></span>
                                                        <span>{*detail}</span>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
