mod about;
mod contact;
mod deploy;
mod experience;
mod home;
mod resume;
mod skills;
mod widgets;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use deploy::DeployGuideSection;
pub use experience::ExperienceSection;
pub use home::HomeSection;
pub use resume::ResumeSection;
pub use skills::SkillsSection;
pub use widgets::WidgetsSection;

use leptos::prelude::*;

/// Shared heading block: title, accent bar, lede paragraph.
#[component]
fn SectionHeading(title: &'static str, lede: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <h2 class="text-4xl font-bold mb-6">{title}</h2>
            <div class="w-24 h-1 bg-accent mx-auto mb-6"></div>
            <p class="text-soft max-w-2xl mx-auto">{lede}</p>
        </div>
    }
}
