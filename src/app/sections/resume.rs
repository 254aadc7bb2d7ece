use leptos::{html, prelude::*};

use super::super::reveal::use_reveal;
use super::SectionHeading;

struct SkillCategory {
    category: &'static str,
    emblem: &'static str,
    items: &'static [&'static str],
}

static CATEGORIES: [SkillCategory; 6] = [
    SkillCategory {
        category: "Programming Languages",
        emblem: "⌨",
        items: &["Bash", "PowerShell", "Python", "JavaScript", "SQL"],
    },
    SkillCategory {
        category: "Tools & Technologies",
        emblem: "🛠",
        items: &["Docker", "Kubernetes", "Jenkins", "Git", "AWS", "Azure"],
    },
    SkillCategory {
        category: "Infrastructure",
        emblem: "🗄",
        items: &[
            "Linux Systems",
            "Windows Server",
            "Networking",
            "Virtualization",
            "Cloud Services",
        ],
    },
    SkillCategory {
        category: "Languages",
        emblem: "🗣",
        items: &["English (Fluent)", "Nepali (Native)"],
    },
    SkillCategory {
        category: "Certifications",
        emblem: "🏅",
        items: &[
            "AWS Certified Solutions Architect",
            "Microsoft Certified: Azure Administrator",
            "CompTIA Network+",
        ],
    },
    SkillCategory {
        category: "Additional Skills",
        emblem: "🌍",
        items: &[
            "Technical Documentation",
            "Customer Communication",
            "Problem Solving",
            "Team Collaboration",
        ],
    },
];

#[component]
pub fn ResumeSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref);

    view! {
        <section
            node_ref=section_ref
            id="resume"
            class="py-20 px-4 relative overflow-hidden section-content"
            class:revealed=move || revealed.get()
        >
            <div class="container mx-auto">
                <SectionHeading
                    title="Resume & Skills"
                    lede="A detailed overview of my technical proficiencies, professional certifications, and key competencies."
                />

                <div class="flex flex-col md:flex-row gap-10 mb-16">
                    <div class="flex-1 order-2 md:order-1">
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                            {CATEGORIES
                                .iter()
                                .map(|group| {
                                    view! {
                                        <div class="p-6 rounded-xl border divider card hover:shadow-md">
                                            <div class="flex items-center mb-4">
                                                <div class="p-2 rounded-full chip-accent mr-3">
                                                    {group.emblem}
                                                </div>
                                                <h3 class="text-lg font-bold">{group.category}</h3>
                                            </div>
                                            <ul class="space-y-2">
                                                {group
                                                    .items
                                                    .iter()
                                                    .map(|item| {
                                                        view! {
                                                            <li class="flex items-center">
                                                                <span class="w-2 h-2 rounded-full bg-accent mr-2"></span>
                                                                <span class="text-sm">{*item}</span>
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

                    <div class="flex-1 max-w-md mx-auto order-1 md:order-2">
                        <div class="relative p-8 rounded-2xl card border divider h-full">
                            <div class="flex flex-col justify-between h-full relative">
                                <div>
                                    <div class="mb-6 flex items-center">
                                        <span class="text-accent text-2xl mr-3">"📄"</span>
                                        <h3 class="text-2xl font-bold">"My Resume"</h3>
                                    </div>

                                    <p class="text-soft mb-8">
                                        "Download my complete resume to get a detailed overview of my professional experience, educational background, and technical skills."
                                    </p>

                                    <div class="space-y-4 mb-8">
                                        <div class="flex items-center">
                                            <div class="w-3 h-3 rounded-full dot-green mr-3"></div>
                                            <span>"Updated May 2024"</span>
                                        </div>
                                        <div class="flex items-center">
                                            <div class="w-3 h-3 rounded-full dot-blue mr-3"></div>
                                            <span>"Comprehensive skill listing"</span>
                                        </div>
                                        <div class="flex items-center">
                                            <div class="w-3 h-3 rounded-full dot-purple mr-3"></div>
                                            <span>"Professional references available"</span>
                                        </div>
                                    </div>
                                </div>

                                <a
                                    href="/RajanChandResume.pdf"
                                    download="RajanChandResume.pdf"
                                    class="inline-flex items-center justify-center gap-2 px-6 py-3 bg-accent text-white rounded-lg font-medium w-full"
                                >
                                    "⬇ Download CV"
                                </a>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
