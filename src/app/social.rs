use leptos::prelude::*;

#[component]
pub fn SocialLinks() -> impl IntoView {
    view! {
        <div class="flex items-center gap-3">
            <a
                href="https://www.linkedin.com/in/babjikilaru"
                target="_blank"
                rel="noopener noreferrer"
                class="social-icon text-blue hover:text-foreground text-2xl"
                aria-label="LinkedIn"
            >
                <i class="devicon-linkedin-plain"></i>
            </a>
            <a
                href="mailto:hello@babjikilaru.com"
                class="social-icon text-muted hover:text-foreground text-2xl"
                aria-label="Email"
            >
                "✉"
            </a>
            <a
                href="https://github.com/babjikilaru"
                target="_blank"
                rel="noopener noreferrer"
                class="social-icon text-foreground hover:text-muted text-2xl"
                aria-label="GitHub"
            >
                <i class="devicon-github-plain"></i>
            </a>
        </div>
    }
}
