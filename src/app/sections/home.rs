use leptos::{html, prelude::*};
use leptos_use::use_interval_fn;

use super::super::reveal::use_reveal;

static ROLES: [&str; 4] = [
    "A Technical Engineer",
    "Specializing in DevOps",
    "Focused on Customer Support",
    "Passionate about Technology",
];
const ROLE_ROTATE_MS: u64 = 2500;

#[component]
pub fn HomeSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref);

    let (role, set_role) = signal(0usize);
    let _rotate = use_interval_fn(
        move || set_role.update(|i| *i = (*i + 1) % ROLES.len()),
        ROLE_ROTATE_MS,
    );

    view! {
        <section
            node_ref=section_ref
            id="home"
            class="min-h-screen flex items-center justify-center py-20 px-4 relative overflow-hidden section-content"
            class:revealed=move || revealed.get()
        >
            <div class="container mx-auto">
                <div class="flex flex-col md:flex-row items-center justify-between gap-10">
                    <div class="flex-1 order-2 md:order-1 text-center md:text-left">
                        <div class="surface text-sm py-1.5 px-3 rounded-full inline-flex items-center mb-6">
                            <span class="flex h-2 w-2 rounded-full bg-accent mr-2"></span>
                            "Available for new opportunities"
                        </div>

                        <h1 class="text-4xl sm:text-5xl md:text-6xl font-bold mb-4 tracking-tight">
                            "Hi, I'm " <span class="text-accent">"Rajan Prakash Chand"</span>
                        </h1>

                        <div class="text-lg sm:text-xl font-medium mb-6 h-8">
                            {move || ROLES[role.get()]}
                        </div>

                        <p class="text-soft mb-8 max-w-lg mx-auto md:mx-0">
                            "A technical engineer driven by curiosity and desire to push the boundaries of what is possible with technology. With over four years of experience in the IT industry."
                        </p>

                        <div class="flex flex-wrap gap-4 justify-center md:justify-start mb-8">
                            <a
                                href="#contact"
                                class="px-6 py-3 bg-accent text-white rounded-full font-medium hover:shadow-lg"
                            >
                                "Contact Me"
                            </a>
                            <a
                                href="#about"
                                class="px-6 py-3 border divider rounded-full font-medium surface-hover"
                            >
                                "More About Me"
                            </a>
                        </div>

                        <div class="flex gap-4 justify-center md:justify-start">
                            <a
                                href="https://github.com/"
                                target="_blank"
                                rel="noopener noreferrer"
                                class="p-2.5 rounded-full border divider surface-hover text-xl"
                                aria-label="GitHub"
                            >
                                <i class="devicon-github-plain"></i>
                            </a>
                            <a
                                href="https://linkedin.com/"
                                target="_blank"
                                rel="noopener noreferrer"
                                class="p-2.5 rounded-full border divider surface-hover text-xl"
                                aria-label="LinkedIn"
                            >
                                <i class="devicon-linkedin-plain"></i>
                            </a>
                            <a
                                href="https://twitter.com/"
                                target="_blank"
                                rel="noopener noreferrer"
                                class="p-2.5 rounded-full border divider surface-hover text-xl"
                                aria-label="Twitter"
                            >
                                <i class="devicon-twitter-original"></i>
                            </a>
                            <a
                                href="mailto:rajanchand48@gmail.com"
                                class="p-2.5 rounded-full border divider surface-hover text-xl"
                                aria-label="Email"
                            >
                                "✉"
                            </a>
                            <a
                                href="tel:+441234567890"
                                class="p-2.5 rounded-full border divider surface-hover text-xl"
                                aria-label="Phone"
                            >
                                "📞"
                            </a>
                        </div>
                    </div>

                    <div class="flex-1 order-1 md:order-2 flex justify-center">
                        <div class="relative">
                            <div class="w-64 h-64 sm:w-80 sm:h-80 rounded-full overflow-hidden border-4 portrait-frame shadow-xl relative">
                                <img
                                    src="https://via.placeholder.com/600/600?text=Rajan"
                                    alt="Rajan Prakash Chand"
                                    class="w-full h-full object-cover"
                                />
                            </div>
                            <div class="absolute -inset-4 rounded-full border accent-ring animate-pulse"></div>
                            <div class="absolute -top-4 -right-4 w-16 h-16 rounded-full card shadow-lg flex items-center justify-center">
                                <i class="devicon-linux-plain text-3xl"></i>
                            </div>
                            <div class="absolute top-1/2 -left-4 w-16 h-16 rounded-full card shadow-lg flex items-center justify-center">
                                <i class="devicon-amazonwebservices-plain-wordmark text-3xl"></i>
                            </div>
                            <div class="absolute -bottom-4 right-1/3 w-16 h-16 rounded-full card shadow-lg flex items-center justify-center">
                                <i class="devicon-docker-plain text-3xl"></i>
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            <div class="absolute bottom-8 left-1/2 -translate-x-1/2 flex flex-col items-center">
                <span class="text-sm font-medium mb-2 text-soft">"Scroll Down"</span>
                <span class="text-accent">"⌄"</span>
            </div>
        </section>
    }
}
