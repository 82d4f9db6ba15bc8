mod contact;
mod experience;
mod header;
mod hero;
mod loading;
mod motion;
mod projects;
mod resume;
mod sections;
mod social;
mod toast;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use contact::ContactSection;
use experience::ExperienceSection;
use header::Header;
use hero::HeroSection;
use loading::LoadingScreen;
use motion::provide_reduced_motion;
use projects::ProjectsSection;
use resume::ResumeSection;
use sections::{AboutSection, CertificationsSection, EducationSection, SkillsSection};
use toast::{provide_toaster, ToastViewport};

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_reduced_motion();
    provide_toaster();

    view! {
        // sets the document title
        <Title formatter=|title| format!("Babji Kilaru - {title}") />

        <Router>
            <a href="#main-content" class="skip-link">
                "Skip to content"
            </a>
            <ToastViewport />
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=IndexPage />
            </Routes>
        </Router>
    }
}

#[component]
fn IndexPage() -> impl IntoView {
    let (loaded, set_loaded) = signal(false);

    view! {
        <Title text="Home" />
        {move || {
            (!loaded()).then(|| view! { <LoadingScreen on_complete=move |_| set_loaded(true) /> })
        }}
        <Header />
        <main id="main-content" role="main" tabindex="-1">
            <HeroSection />
            <AboutSection />
            <SkillsSection />
            <ExperienceSection />
            <EducationSection />
            <CertificationsSection />
            <ProjectsSection />
            <ResumeSection />
            <ContactSection />
        </main>
        <footer role="contentinfo" class="py-8 text-center text-sm text-muted">
            <p>"© Babji Kilaru"</p>
            <p class="text-xs mt-1">"Last built " {env!("BUILD_TIME")}</p>
        </footer>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Title text="Not Found" />
        <main class="min-h-screen flex flex-col items-center justify-center gap-4">
            <h1 class="text-4xl font-bold text-foreground">"404"</h1>
            <p class="text-muted">"This page doesn't exist."</p>
            <a href="/" class="nav-link nav-link-active">
                "Back to the homepage"
            </a>
        </main>
    }
}
