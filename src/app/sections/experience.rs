use leptos::{html, prelude::*};

use super::super::reveal::use_reveal;
use super::SectionHeading;

struct EducationEntry {
    level: &'static str,
    institution: &'static str,
    field: &'static str,
    years: &'static str,
    summary: &'static str,
}

static EDUCATION: [EducationEntry; 4] = [
    EducationEntry {
        level: "Master's Degree",
        institution: "University of Technology",
        field: "Computer Science",
        years: "2019 - 2021",
        summary: "Specialized in Network Security and Cloud Computing. Graduated with honors.",
    },
    EducationEntry {
        level: "Bachelor's Degree",
        institution: "Tech Institute",
        field: "Information Technology",
        years: "2015 - 2019",
        summary: "Focus on system administration and network infrastructure. Completed internship at leading IT company.",
    },
    EducationEntry {
        level: "HSEB Level",
        institution: "Higher Secondary Education Board",
        field: "Science & Mathematics",
        years: "2013 - 2015",
        summary: "Completed with distinction in Computer Science and Mathematics.",
    },
    EducationEntry {
        level: "School Level",
        institution: "Modern Secondary School",
        field: "General Education",
        years: "2001 - 2013",
        summary: "Participated in numerous technical competitions and coding projects.",
    },
];

struct WorkEntry {
    position: &'static str,
    company: &'static str,
    years: &'static str,
    summary: &'static str,
}

static WORK: [WorkEntry; 3] = [
    WorkEntry {
        position: "Senior Technical Support Engineer",
        company: "TechSolutions Inc.",
        years: "2022 - Present",
        summary: "Leading technical support for enterprise clients, managing server infrastructure, and implementing DevOps practices.",
    },
    WorkEntry {
        position: "IT Support Specialist",
        company: "Global Systems",
        years: "2020 - 2022",
        summary: "Provided comprehensive technical support, network configuration, and system maintenance for over 200 clients.",
    },
    WorkEntry {
        position: "Customer Support Representative",
        company: "Tech Assist",
        years: "2018 - 2020",
        summary: "Resolved customer inquiries and technical issues, maintaining high customer satisfaction rates.",
    },
];

#[component]
fn TimelineMarker() -> impl IntoView {
    view! {
        <div class="absolute -left-[31px] w-6 h-6 rounded-full card border-4 border-accent"></div>
    }
}

#[component]
pub fn ExperienceSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref);

    view! {
        <section
            node_ref=section_ref
            id="experience"
            class="py-20 px-4 relative overflow-hidden section-content"
            class:revealed=move || revealed.get()
        >
            <div class="container mx-auto">
                <SectionHeading
                    title="Experience & Education"
                    lede="My professional journey combines strong educational foundations with hands-on industry experience."
                />

                <div class="grid md:grid-cols-2 gap-16">
                    <div>
                        <div class="flex items-center mb-10">
                            <div class="p-3 rounded-full chip-accent mr-4">"🎓"</div>
                            <h3 class="text-2xl font-bold">"Education"</h3>
                        </div>

                        <div class="relative pl-6 border-l divider">
                            {EDUCATION
                                .iter()
                                .map(|entry| {
                                    view! {
                                        <div class="mb-10 relative">
                                            <TimelineMarker />
                                            <div class="pl-6">
                                                <span class="text-sm font-medium px-3 py-1 rounded-full chip-accent inline-block mb-2">
                                                    {entry.years}
                                                </span>
                                                <h4 class="text-xl font-bold mb-1">{entry.level}</h4>
                                                <p class="text-base font-medium mb-1">
                                                    {entry.institution}
                                                </p>
                                                <p class="text-sm text-soft mb-2">{entry.field}</p>
                                                <p class="text-sm text-soft">{entry.summary}</p>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div>
                        <div class="flex items-center mb-10">
                            <div class="p-3 rounded-full chip-accent mr-4">"💼"</div>
                            <h3 class="text-2xl font-bold">"Work Experience"</h3>
                        </div>

                        <div class="relative pl-6 border-l divider">
                            {WORK
                                .iter()
                                .map(|entry| {
                                    view! {
                                        <div class="mb-10 relative">
                                            <TimelineMarker />
                                            <div class="pl-6">
                                                <span class="text-sm font-medium px-3 py-1 rounded-full chip-accent inline-block mb-2">
                                                    {entry.years}
                                                </span>
                                                <h4 class="text-xl font-bold mb-1">{entry.position}</h4>
                                                <p class="text-base font-medium mb-2">{entry.company}</p>
                                                <p class="text-sm text-soft">{entry.summary}</p>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
