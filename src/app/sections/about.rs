use leptos::{html, prelude::*};

use super::super::reveal::use_reveal;
use super::SectionHeading;

#[component]
pub fn AboutSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref);

    view! {
        <section
            node_ref=section_ref
            id="about"
            class="py-20 px-4 relative overflow-hidden section-content"
            class:revealed=move || revealed.get()
        >
            <div class="container mx-auto">
                <SectionHeading
                    title="About Me"
                    lede="Get to know more about my background, interests, and professional journey."
                />

                <div class="flex flex-col lg:flex-row gap-12">
                    <div class="flex-1 order-2 lg:order-1">
                        <h3 class="text-2xl font-bold mb-6">"My Story"</h3>
                        <div class="space-y-4 text-base text-soft">
                            <p>
                                "Rajan Prakash Chand is a professional based in Glasgow, Scotland, with a background in customer service and technical fields. He has 2 years of experience in customer service and 3 years in technical roles, combining strong communication skills with technical expertise."
                            </p>
                            <p>
                                "In addition to his professional endeavors, Rajan maintains an active online presence. He has a GitHub profile where he shares his coding projects and interests. He also has a YouTube channel, though it currently has limited content."
                            </p>
                            <p>
                                "Furthermore, there is a \"Prakash Chand Rajan\" listed as a director of Marvel Worldwide Services UK Ltd., a company registered in Slough, United Kingdom. This individual was appointed on May 15, 2024."
                            </p>
                            <p>
                                "I believe that diversity is essential to creating truly innovative solutions, and I am committed to bringing my unique background and perspective to every project I work on."
                            </p>
                        </div>

                        <div class="mt-8 grid grid-cols-1 md:grid-cols-2 gap-4">
                            <div class="flex items-start">
                                <div class="p-2 rounded-full chip-accent mr-3 mt-1">"📍"</div>
                                <div>
                                    <h4 class="font-bold">"Location"</h4>
                                    <p class="text-sm text-soft">"Glasgow, Scotland, UK"</p>
                                </div>
                            </div>
                            <div class="flex items-start">
                                <div class="p-2 rounded-full chip-accent mr-3 mt-1">"📅"</div>
                                <div>
                                    <h4 class="font-bold">"Experience"</h4>
                                    <p class="text-sm text-soft">
                                        "5+ years (2 in Customer Service, 3 in Technical Roles)"
                                    </p>
                                </div>
                            </div>
                            <div class="flex items-start">
                                <div class="p-2 rounded-full chip-accent mr-3 mt-1">"🏢"</div>
                                <div>
                                    <h4 class="font-bold">"Company"</h4>
                                    <p class="text-sm text-soft">
                                        "Director at Marvel Worldwide Services UK Ltd."
                                    </p>
                                </div>
                            </div>
                        </div>

                        <div class="mt-8">
                            <h3 class="text-xl font-bold mb-4">"Find Me Online"</h3>
                            <div class="flex gap-4">
                                <a
                                    href="https://github.com/"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="flex items-center gap-2 px-4 py-2 rounded-lg border divider surface-hover"
                                >
                                    <i class="devicon-github-plain"></i>
                                    <span>"GitHub"</span>
                                </a>
                                <a
                                    href="https://linkedin.com/"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="flex items-center gap-2 px-4 py-2 rounded-lg border divider surface-hover"
                                >
                                    <i class="devicon-linkedin-plain"></i>
                                    <span>"LinkedIn"</span>
                                </a>
                                <a
                                    href="https://youtube.com/"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="flex items-center gap-2 px-4 py-2 rounded-lg border divider surface-hover"
                                >
                                    "▶ YouTube"
                                </a>
                            </div>
                        </div>
                    </div>

                    <div class="flex-1 order-1 lg:order-2 flex justify-center">
                        <div class="relative max-w-md w-full">
                            <div class="relative z-10 rounded-2xl overflow-hidden border-4 portrait-frame shadow-xl">
                                <img
                                    src="https://via.placeholder.com/600/800?text=Rajan"
                                    alt="Rajan Prakash Chand"
                                    class="w-full h-auto object-cover"
                                />
                            </div>
                            <div class="absolute -bottom-10 -left-10 card border divider p-4 rounded-lg shadow-lg z-20 w-40">
                                <div class="text-xl font-bold">"5+ Years"</div>
                                <div class="text-sm text-soft">"Experience"</div>
                            </div>
                            <div class="absolute top-10 -left-10 card border divider p-4 rounded-lg shadow-lg z-20">
                                <div class="text-xl font-bold">"Glasgow, UK"</div>
                                <div class="text-sm text-soft">"Based in"</div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
