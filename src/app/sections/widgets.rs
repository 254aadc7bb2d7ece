use leptos::{html, prelude::*};

use super::super::reveal::use_reveal;
use super::SectionHeading;

#[component]
fn WidgetCard(emblem: &'static str, title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="card border divider rounded-2xl p-6 shadow-sm stagger-item">
            <div class="flex items-center mb-4">
                <div class="p-2 rounded-full chip-accent mr-3">{emblem}</div>
                <h3 class="text-xl font-bold">{title}</h3>
            </div>
            {children()}
        </div>
    }
}

#[component]
pub fn WidgetsSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref);

    view! {
        <section
            node_ref=section_ref
            id="widgets"
            class="py-20 px-4 relative overflow-hidden section-content"
            class:revealed=move || revealed.get()
        >
            <div class="container mx-auto">
                <SectionHeading
                    title="Discover More"
                    lede="Quick access to important information, useful links, and ways to connect."
                />

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                    <WidgetCard emblem="👤" title="About Me">
                        <div class="space-y-3 text-sm">
                            <div class="flex items-center">
                                <span class="mr-2 text-soft">"🎓"</span>
                                <span>"Master's in Computer Science"</span>
                            </div>
                            <div class="flex items-center">
                                <span class="mr-2 text-soft">"💼"</span>
                                <span>"5 Years of Experience"</span>
                            </div>
                            <div class="flex items-center">
                                <span class="mr-2 text-soft">"☕"</span>
                                <span>"Technical Support Specialist"</span>
                            </div>
                            <div class="flex items-center">
                                <span class="mr-2 text-soft">"🕒"</span>
                                <span>"Full-time Professional"</span>
                            </div>
                        </div>
                        <a href="#about" class="mt-4 text-sm text-accent flex items-center hover:underline">
                            "Learn more about me ›"
                        </a>
                    </WidgetCard>

                    <WidgetCard emblem="🔗" title="Useful Links">
                        <ul class="space-y-3 text-sm">
                            <li>
                                <a href="#resume" class="flex items-center accent-hover">
                                    <span class="mr-2 text-soft">"📄"</span>
                                    <span>"Download Resume"</span>
                                </a>
                            </li>
                            <li>
                                <a href="#skills" class="flex items-center accent-hover">
                                    <span class="mr-2 text-soft">"⌨"</span>
                                    <span>"Technical Skills"</span>
                                </a>
                            </li>
                            <li>
                                <a
                                    href="https://github.com/"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="flex items-center accent-hover"
                                >
                                    <i class="mr-2 text-soft devicon-github-plain"></i>
                                    <span>"GitHub Projects"</span>
                                </a>
                            </li>
                            <li>
                                <a
                                    href="https://linkedin.com/"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="flex items-center accent-hover"
                                >
                                    <i class="mr-2 text-soft devicon-linkedin-plain"></i>
                                    <span>"LinkedIn Profile"</span>
                                </a>
                            </li>
                        </ul>
                    </WidgetCard>

                    <WidgetCard emblem="✉" title="Contact Me">
                        <div class="space-y-3 text-sm">
                            <a href="mailto:rajanchand48@gmail.com" class="flex items-center accent-hover">
                                <span class="mr-2 text-soft">"✉"</span>
                                <span>"rajanchand48@gmail.com"</span>
                            </a>
                            <a href="tel:+441234567890" class="flex items-center accent-hover">
                                <span class="mr-2 text-soft">"📞"</span>
                                <span>"+44 123 456 7890"</span>
                            </a>
                            <div class="flex items-center">
                                <span class="mr-2 text-soft">"📍"</span>
                                <span>"Glasgow, Scotland, UK"</span>
                            </div>
                            <a
                                href="https://calendly.com/rajanchand48"
                                target="_blank"
                                rel="noopener noreferrer"
                                class="flex items-center accent-hover"
                            >
                                <span class="mr-2 text-soft">"🕒"</span>
                                <span>"Schedule a Meeting"</span>
                            </a>
                        </div>
                        <a href="#contact" class="mt-4 text-sm text-accent flex items-center hover:underline">
                            "Get in touch ›"
                        </a>
                    </WidgetCard>

                    <WidgetCard emblem="🏅" title="Memberships">
                        <div class="space-y-3 text-sm">
                            <div>
                                <p class="font-medium">"Marvel Worldwide Services UK Ltd."</p>
                                <p class="text-xs text-soft">"Director since May 15, 2024"</p>
                            </div>
                            <div>
                                <p class="font-medium">"Technical Support Professional Association"</p>
                                <p class="text-xs text-soft">"Member since 2022"</p>
                            </div>
                            <div>
                                <p class="font-medium">"Glasgow Tech Community"</p>
                                <p class="text-xs text-soft">"Active Participant"</p>
                            </div>
                        </div>
                        <div class="mt-4 flex gap-2">
                            <a
                                href="https://twitter.com/"
                                target="_blank"
                                rel="noopener noreferrer"
                                class="p-2 rounded-full surface-hover"
                                aria-label="Twitter"
                            >
                                <i class="devicon-twitter-original"></i>
                            </a>
                            <a
                                href="https://linkedin.com/"
                                target="_blank"
                                rel="noopener noreferrer"
                                class="p-2 rounded-full surface-hover"
                                aria-label="LinkedIn"
                            >
                                <i class="devicon-linkedin-plain"></i>
                            </a>
                            <a
                                href="https://github.com/"
                                target="_blank"
                                rel="noopener noreferrer"
                                class="p-2 rounded-full surface-hover"
                                aria-label="GitHub"
                            >
                                <i class="devicon-github-plain"></i>
                            </a>
                        </div>
                    </WidgetCard>
                </div>

                <div class="mt-12 text-center">
                    <p class="text-xl font-medium mb-4">"Thank You for Visiting My Portfolio"</p>
                    <p class="text-soft max-w-2xl mx-auto">
                        "I appreciate you taking the time to explore my professional journey. Whether you're interested in collaborating, hiring, or simply connecting, I'm always open to new opportunities and conversations."
                    </p>
                </div>
            </div>
        </section>
    }
}
