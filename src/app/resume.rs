use leptos::prelude::*;

use super::sections::SectionHeader;
use super::toast::use_toaster;

const RESUME_URL: &str = "/resume.pdf";

const RESUME_PREVIEW: [&str; 4] = [
    "Microservices, APIs, and cloud deployments that improved reliability and throughput.",
    "Modern front-end work focused on accessibility and performance.",
    "Certifications across AWS, Java, and Kubernetes with hands-on implementations.",
    "Team leadership in code reviews, pairing, and playbooks for incident response.",
];

#[component]
pub fn ResumeSection() -> impl IntoView {
    let toaster = use_toaster();
    let notify_download = move |_| {
        toaster.toast(
            "Resume download started",
            "Opening resume.pdf with recent experience and certifications.",
        );
    };

    view! {
        <section id="resume" class="section-anchor py-16 lg:py-24 border-b border-muted/20 bg-card/40">
            <div class="container mx-auto px-6 lg:px-12">
                <SectionHeader
                    eyebrow="Resume"
                    title="Download my resume."
                    description="A concise, metrics-driven PDF with projects, experience, and certifications."
                />

                <div class="grid md:grid-cols-3 gap-6 items-start">
                    <div class="bg-card border border-muted/30 rounded-2xl p-6 shadow-sm">
                        <h3 class="text-lg font-semibold text-foreground mb-2">"One-click download"</h3>
                        <p class="text-sm text-muted mb-4">
                            "Save the PDF or keep browsing. The highlights below mirror what you'll find inside."
                        </p>
                        <a
                            href=RESUME_URL
                            download="BabjiKilaruResume.pdf"
                            class="inline-flex items-center gap-2 px-4 py-3 rounded-xl bg-primary text-background font-medium hover:-translate-y-0.5 transition-transform duration-200"
                            on:click=notify_download
                        >
                            "⬇ Download PDF"
                        </a>
                    </div>

                    <div class="md:col-span-2 bg-card border border-muted/30 rounded-2xl p-6 shadow-sm">
                        <h4 class="text-sm uppercase tracking-[0.12em] text-muted mb-3">"Preview"</h4>
                        <ul class="space-y-2 text-sm text-muted">
                            {RESUME_PREVIEW
                                .iter()
                                .map(|line| view! { <li>"• " {*line}</li> })
                                .collect_view()}
                        </ul>
                        <p class="text-xs text-muted mt-3">
                            "Prefer a quick view? Open the PDF inline in your browser and dive into the details."
                        </p>
                        <a
                            href=RESUME_URL
                            target="_blank"
                            rel="noreferrer"
                            class="mt-4 inline-flex items-center gap-2 text-sm text-foreground font-medium hover:text-primary"
                        >
                            "Open inline preview ↗"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
