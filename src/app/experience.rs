use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, use_window_scroll, UseIntersectionObserverOptions,
};

use super::motion::use_reduced_motion;
use super::sections::SectionHeader;

const BACK_TO_TOP_AT: f64 = 380.0;
const REVEAL_THRESHOLD: f64 = 0.25;

struct ExperienceItem {
    role: &'static str,
    company: &'static str,
    location: &'static str,
    dates: &'static str,
    is_current: bool,
    bullets: &'static [&'static str],
}

const EXPERIENCE: [ExperienceItem; 2] = [
    ExperienceItem {
        role: "Software Engineer II",
        company: "Wells Fargo",
        location: "Edison, NJ",
        dates: "May 2024 — Present",
        is_current: true,
        bullets: &[
            "Designed and implemented highly scalable microservices using Java Spring Boot and Hibernate, enhancing payment transaction reliability by 30% during peak load hours.",
            "Migrated on-prem workloads to AWS Lambda and ECS, reducing infrastructure costs by 22% and improving scalability.",
            "Built reusable front-end components using React.js, TypeScript, and Material UI, reducing UI development time by 35% and improving accessibility.",
            "Integrated Apache Kafka and AWS SQS for event-driven communication, improving responsiveness by 55% and supporting near real-time processing.",
            "Automated CI/CD with GitHub Actions, Docker, and Maven, improving release cycles by 45%.",
            "Improved performance via Redis caching and DB query optimization, reducing response times by 38%.",
        ],
    },
    ExperienceItem {
        role: "Software Engineer",
        company: "PwC",
        location: "Hyderabad, India",
        dates: "May 2020 — Jul 2022",
        is_current: false,
        bullets: &[
            "Designed and deployed Spring Boot + Hibernate claims-processing APIs, increasing throughput by 42% and supporting 60+ concurrent users.",
            "Implemented OAuth2, JWT, and RBAC policies; improved HIPAA-aligned controls across a healthcare claims environment processing 1.5B+ annual claim volume.",
            "Modernized a J2EE monolith into microservices; decreased complexity by 50% and improved release velocity by 30%.",
            "Built React dashboards and analytics for 6 business units; accelerated decision cycles by 30%.",
            "Optimized PostgreSQL via indexing, caching, and query tuning; reduced latency by 38%.",
            "Built CI/CD with Jenkins and GitHub Actions; reduced deployments from 3 days to under 6 hours.",
        ],
    },
];

/// Timeline of roles. Cards start hidden and reveal once a quarter of the
/// card intersects the viewport; the reveal is one-way. Reduced motion
/// shows everything immediately and skips the observers.
#[component]
pub fn ExperienceSection() -> impl IntoView {
    let reduced = use_reduced_motion().get_untracked();
    let (_, scroll_y) = use_window_scroll();
    let show_back_to_top = Memo::new(move |_| scroll_y.get() > BACK_TO_TOP_AT);

    let back_to_top = move |_| {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(if reduced {
            web_sys::ScrollBehavior::Auto
        } else {
            web_sys::ScrollBehavior::Smooth
        });
        window().scroll_to_with_scroll_to_options(&options);
    };

    let cards = EXPERIENCE
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let card_ref = NodeRef::<html::Div>::new();
            let visible = RwSignal::new(reduced);
            if !reduced {
                let _ = use_intersection_observer_with_options(
                    card_ref,
                    move |entries, _| {
                        if entries.iter().any(|entry| entry.is_intersecting()) {
                            visible.set(true);
                        }
                    },
                    UseIntersectionObserverOptions::default().thresholds(vec![REVEAL_THRESHOLD]),
                );
            }

            let is_left = index % 2 == 0;
            let card_class = move || {
                let motion = if reduced {
                    ""
                } else if visible.get() {
                    " opacity-100 translate-x-0"
                } else if is_left {
                    " opacity-0 -translate-x-8"
                } else {
                    " opacity-0 translate-x-8"
                };
                let side = if is_left {
                    "md:col-start-1 md:justify-self-end md:pr-8"
                } else {
                    "md:col-start-3 md:pl-8"
                };
                format!(
                    "col-start-2 w-full rounded-3xl border border-muted/30 bg-card p-6 shadow-sm md:max-w-2xl transition-all duration-700 ease-out {side}{motion}"
                )
            };
            let node_class = move || {
                let motion = if reduced {
                    ""
                } else if visible.get() {
                    " opacity-100 scale-100"
                } else {
                    " opacity-0 scale-75"
                };
                format!(
                    "z-10 flex h-14 w-14 items-center justify-center rounded-full bg-card shadow-md transition-all duration-500{motion}"
                )
            };

            view! {
                <div class="grid grid-cols-[auto_1fr] items-start gap-6 md:grid-cols-[1fr_auto_1fr] md:gap-10">
                    <div class="col-start-1 row-span-2 flex flex-col items-center md:col-start-2">
                        <div class=node_class>
                            <div class="flex h-11 w-11 items-center justify-center rounded-full border border-muted/40 bg-card text-muted text-xl">
                                "💼"
                            </div>
                        </div>
                    </div>

                    <div node_ref=card_ref class=card_class>
                        <div class="flex flex-wrap items-start justify-between gap-3">
                            <div>
                                <p class="text-sm font-medium text-muted">{item.company}</p>
                                <h3 class="text-2xl font-semibold text-foreground leading-tight">
                                    {item.role}
                                </h3>
                            </div>
                            {item
                                .is_current
                                .then(|| {
                                    view! {
                                        <span class="rounded-full border border-muted/40 bg-card px-3 py-1 text-sm font-semibold text-foreground shadow-sm">
                                            "Current"
                                        </span>
                                    }
                                })}
                        </div>

                        <div class="mt-4 flex flex-wrap gap-4 text-sm text-muted">
                            <span class="inline-flex items-center gap-2 rounded-full border border-muted/30 bg-card px-3 py-2 font-medium text-foreground">
                                "📅 " {item.dates}
                            </span>
                            <span class="inline-flex items-center gap-2">"📍 " {item.location}</span>
                        </div>

                        <ul class="mt-5 space-y-3 text-base text-muted">
                            {item
                                .bullets
                                .iter()
                                .map(|bullet| {
                                    view! {
                                        <li class="flex gap-3 leading-relaxed">
                                            <span class="mt-2 h-2.5 w-2.5 rounded-full bg-muted shrink-0"></span>
                                            <span>{*bullet}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="experience" class="section-anchor relative overflow-hidden py-16 lg:py-24 border-b border-muted/20 bg-card/40">
            <div class="container relative mx-auto px-6 lg:px-12">
                <SectionHeader
                    eyebrow="Experience"
                    title="Work Experience"
                    description="A chronicle of my professional journey, showcasing the roles and projects that have shaped my career."
                />

                <div class="relative mt-16">
                    <div class="absolute left-6 top-0 h-full w-[3px] rounded-full bg-muted/40 md:left-1/2 md:w-[4px] md:-translate-x-1/2"></div>
                    <div class="flex flex-col gap-12 sm:gap-16">{cards}</div>
                </div>
            </div>

            <button
                type="button"
                class=move || {
                    if show_back_to_top() {
                        "fixed bottom-6 right-6 z-30 flex h-12 w-12 items-center justify-center rounded-full bg-foreground text-background shadow-lg transition-all duration-300 translate-y-0 opacity-100"
                    } else {
                        "fixed bottom-6 right-6 z-30 flex h-12 w-12 items-center justify-center rounded-full bg-foreground text-background shadow-lg transition-all duration-300 translate-y-6 opacity-0 pointer-events-none"
                    }
                }
                aria-label="Back to top"
                on:click=back_to_top
            >
                <svg
                    class="h-5 w-5"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    viewBox="0 0 24 24"
                    aria-hidden="true"
                >
                    <path stroke-linecap="round" stroke-linejoin="round" d="M12 19V5m0 0-6 6m6-6 6 6" />
                </svg>
            </button>
        </section>
    }
}
