use leptos::{html, prelude::*};

use super::super::reveal::use_reveal;
use super::SectionHeading;

struct Skill {
    name: &'static str,
    emblem: &'static str,
    blurb: &'static str,
    accent: &'static str,
}

static SKILLS: [Skill; 8] = [
    Skill {
        name: "Networking",
        emblem: "🌐",
        blurb: "Expert in network configuration, troubleshooting, and maintenance.",
        accent: "chip-blue",
    },
    Skill {
        name: "Technical Support",
        emblem: "🎧",
        blurb: "Providing top-tier technical assistance to resolve complex issues.",
        accent: "chip-green",
    },
    Skill {
        name: "DevOps",
        emblem: "⚙",
        blurb: "Implementing CI/CD pipelines and automated deployment solutions.",
        accent: "chip-purple",
    },
    Skill {
        name: "Customer Support",
        emblem: "🤝",
        blurb: "Delivering exceptional customer experiences through clear communication.",
        accent: "chip-orange",
    },
    Skill {
        name: "Server Management",
        emblem: "🖥",
        blurb: "Configuring, optimizing, and maintaining server infrastructure.",
        accent: "chip-red",
    },
    Skill {
        name: "Cloud Services",
        emblem: "☁",
        blurb: "Experience with AWS, Azure, and GCP cloud platforms.",
        accent: "chip-sky",
    },
    Skill {
        name: "IT Security",
        emblem: "🛡",
        blurb: "Implementing security best practices and vulnerability assessments.",
        accent: "chip-emerald",
    },
    Skill {
        name: "Scripting",
        emblem: "⌨",
        blurb: "Proficient in Bash, PowerShell, and automation scripting.",
        accent: "chip-gray",
    },
];

#[component]
pub fn SkillsSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref);

    view! {
        <section
            node_ref=section_ref
            id="skills"
            class="py-20 px-4 relative overflow-hidden section-content"
            class:revealed=move || revealed.get()
        >
            <div class="container mx-auto">
                <SectionHeading
                    title="My Technical Skills"
                    lede="Over four years in the IT industry, I've developed expertise in various technical domains. Here are the key areas where I excel:"
                />

                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                    {SKILLS
                        .iter()
                        .enumerate()
                        .map(|(index, skill)| {
                            view! {
                                <div
                                    class="relative p-6 rounded-2xl card border divider hover:shadow-md stagger-item"
                                    style=format!("transition-delay: {}ms", index * 100)
                                >
                                    <div class=format!(
                                        "absolute -top-5 left-6 w-10 h-10 rounded-full {} flex items-center justify-center ring-1 shadow-sm",
                                        skill.accent,
                                    )>{skill.emblem}</div>
                                    <div class="pt-4">
                                        <h3 class="text-xl font-bold mb-3">{skill.name}</h3>
                                        <p class="text-soft text-sm">{skill.blurb}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="mt-16 text-center">
                    <p class="text-soft">
                        "I continuously enhance my skills through learning and practical application, staying updated with the latest industry trends and technologies."
                    </p>
                </div>
            </div>
        </section>
    }
}
