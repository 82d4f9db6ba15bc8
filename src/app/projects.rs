use leptos::prelude::*;

use super::motion::use_reduced_motion;
use super::sections::SectionHeader;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    All,
    Frontend,
    Backend,
    Cloud,
}

impl Category {
    const ALL: [Category; 4] = [
        Category::All,
        Category::Frontend,
        Category::Backend,
        Category::Cloud,
    ];

    fn label(self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Frontend => "Frontend",
            Category::Backend => "Backend",
            Category::Cloud => "Cloud",
        }
    }

    fn matches(self, other: Category) -> bool {
        self == Category::All || self == other
    }
}

struct Project {
    title: &'static str,
    description: &'static str,
    stack: &'static [&'static str],
    github_url: &'static str,
    live_url: &'static str,
    category: Category,
}

const PROJECTS: [Project; 4] = [
    Project {
        title: "Calm Canvas Portfolio",
        description: "A performant, accessible portfolio with motion controls, interactive navigation, and content-driven sections.",
        stack: &["Rust", "Leptos", "Tailwind", "Trunk"],
        github_url: "https://github.com/babjikilaru",
        live_url: "https://github.com/babjikilaru",
        category: Category::Frontend,
    },
    Project {
        title: "Streaming Analytics Pipeline",
        description: "Real-time ingestion with Kafka and Spark streaming, surfacing insights through REST and dashboards.",
        stack: &["Java", "Kafka", "Spark", "AWS"],
        github_url: "https://github.com/babjikilaru",
        live_url: "https://github.com/babjikilaru",
        category: Category::Backend,
    },
    Project {
        title: "Deployment Control Plane",
        description: "Infrastructure-as-code and GitOps workflows for multi-service deployments with automated checks.",
        stack: &["Terraform", "Kubernetes", "GitHub Actions", "Helm"],
        github_url: "https://github.com/babjikilaru",
        live_url: "https://github.com/babjikilaru",
        category: Category::Cloud,
    },
    Project {
        title: "Customer Insights Dashboard",
        description: "Full-stack analytics dashboard with role-based access and exportable reports.",
        stack: &["React", "Node.js", "PostgreSQL", "Redis"],
        github_url: "https://github.com/babjikilaru",
        live_url: "https://github.com/babjikilaru",
        category: Category::Frontend,
    },
];

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let reduced = use_reduced_motion().get_untracked();
    let (filter, set_filter) = signal(Category::All);

    view! {
        <section id="projects" class="section-anchor py-16 lg:py-24 border-b border-muted/20">
            <div class="container mx-auto px-6 lg:px-12">
                <SectionHeader
                    eyebrow="Projects"
                    title="Selected projects and experiments."
                    description="Hands-on builds across frontend, backend, and cloud. Filters help you jump to what matters."
                />

                <div class="flex flex-wrap gap-3 mb-6">
                    {Category::ALL
                        .iter()
                        .map(|&option| {
                            view! {
                                <button
                                    type="button"
                                    class=move || {
                                        let base = if filter() == option {
                                            "px-4 py-2 rounded-full border bg-primary text-background border-primary"
                                        } else {
                                            "px-4 py-2 rounded-full border bg-card text-foreground border-muted/40"
                                        };
                                        if reduced {
                                            base.to_string()
                                        } else {
                                            format!("{base} transition-colors duration-200")
                                        }
                                    }
                                    on:click=move |_| set_filter(option)
                                >
                                    {option.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="grid md:grid-cols-2 gap-6">
                    {move || {
                        PROJECTS
                            .iter()
                            .filter(|project| filter().matches(project.category))
                            .map(|project| {
                                view! {
                                    <article class="bg-card border border-muted/30 rounded-2xl p-6 shadow-sm flex flex-col gap-4">
                                        <div>
                                            <p class="text-xs uppercase tracking-[0.12em] text-muted">
                                                {project.category.label()}
                                            </p>
                                            <h3 class="text-xl font-semibold text-foreground">{project.title}</h3>
                                            <p class="text-sm text-muted mt-2">{project.description}</p>
                                        </div>

                                        <div class="flex flex-wrap gap-2">
                                            {project
                                                .stack
                                                .iter()
                                                .map(|tech| {
                                                    view! {
                                                        <span class="px-3 py-1.5 rounded-lg bg-card border border-muted/40 text-xs text-foreground/90">
                                                            {*tech}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>

                                        <div class="flex items-center gap-3 mt-auto">
                                            <a
                                                href=project.github_url
                                                target="_blank"
                                                rel="noreferrer"
                                                class="inline-flex items-center gap-2 text-sm font-medium text-foreground hover:text-primary"
                                            >
                                                <i class="devicon-github-plain"></i>
                                                "GitHub"
                                            </a>
                                            <a
                                                href=project.live_url
                                                target="_blank"
                                                rel="noreferrer"
                                                class="inline-flex items-center gap-2 text-sm font-medium text-foreground hover:text-primary"
                                            >
                                                "Live ↗"
                                            </a>
                                        </div>
                                    </article>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}
