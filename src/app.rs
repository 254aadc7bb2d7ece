mod footer;
mod header;
mod reveal;
mod search;
mod sections;
mod theme;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use footer::Footer;
use header::Header;
use search::AiSearch;
use sections::{
    AboutSection, ContactSection, DeployGuideSection, ExperienceSection, HomeSection,
    ResumeSection, SkillsSection, WidgetsSection,
};
use theme::ThemeProvider;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // sets the document title
        <Title formatter=|title| format!("Rajan Prakash Chand - {title}") />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

/// Orders the page sections and mounts the search overlay until it is
/// skipped or a search completes.
#[component]
fn PortfolioPage() -> impl IntoView {
    let (show_search, set_show_search) = signal(true);

    view! {
        <Title text="Portfolio" />
        <ThemeProvider>
            {move || {
                show_search
                    .get()
                    .then(|| view! { <AiSearch on_dismiss=move |()| set_show_search(false) /> })
            }}
            <div class="min-h-screen flex flex-col">
                <Header />
                <main class="flex-grow">
                    <HomeSection />
                    <SkillsSection />
                    <ExperienceSection />
                    <ResumeSection />
                    <AboutSection />
                    <ContactSection />
                    <WidgetsSection />
                    <DeployGuideSection />
                </main>
                <Footer />
            </div>
        </ThemeProvider>
    }
}
