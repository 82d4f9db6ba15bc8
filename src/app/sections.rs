use leptos::prelude::*;

use super::motion::use_reduced_motion;

#[component]
pub fn SectionHeader(
    eyebrow: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-2 mb-10">
            <p class="text-xs uppercase tracking-[0.18em] text-muted">{eyebrow}</p>
            <h2 class="text-3xl md:text-4xl font-bold text-foreground">{title}</h2>
            <p class="text-base md:text-lg text-muted max-w-4xl leading-relaxed">{description}</p>
        </div>
    }
}

struct AboutHighlight {
    period: &'static str,
    title: &'static str,
    detail: &'static str,
}

const ABOUT_HIGHLIGHTS: [AboutHighlight; 3] = [
    AboutHighlight {
        period: "Present",
        title: "Backend & APIs",
        detail: "Designing microservices, event-driven flows, and well-documented APIs that stay reliable at scale.",
    },
    AboutHighlight {
        period: "Recent",
        title: "Cloud & DevOps",
        detail: "Shipping containerized workloads to AWS with CI/CD, blue-green rollouts, and resilient observability.",
    },
    AboutHighlight {
        period: "Ongoing",
        title: "Product Mindset",
        detail: "Partnering with design and product to turn requirements into user-facing features and measurable wins.",
    },
];

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="section-anchor py-16 lg:py-24 border-b border-muted/20 bg-card/40">
            <div class="container mx-auto px-6 lg:px-12">
                <SectionHeader
                    eyebrow="About"
                    title="Engineer, builder, and curious collaborator."
                    description="I specialize in crafting resilient services and thoughtful UIs that make complex systems feel effortless. I love pairing with teams to ship reliable features, measure impact, and keep users delighted."
                />

                <div class="grid lg:grid-cols-3 gap-8">
                    <div class="lg:col-span-2 space-y-4 text-muted leading-relaxed">
                        <p>
                            "I bring a pragmatic mix of backend engineering, front-end experience, and cloud know-how. Whether it's designing a new service, improving an existing workflow, or mentoring teammates, I lean on strong fundamentals and hands-on delivery."
                        </p>
                        <p>
                            "Recent work includes modernizing Java/Spring Boot services, adding observability to distributed systems, and building React frontends that stay fast even as they grow. I enjoy joining product conversations early so we can de-risk ideas before the first line of code."
                        </p>
                    </div>

                    <div class="bg-card border border-muted/30 rounded-2xl p-6 shadow-sm">
                        <h3 class="text-lg font-semibold text-foreground mb-4">"Highlights"</h3>
                        <div class="space-y-4">
                            {ABOUT_HIGHLIGHTS
                                .iter()
                                .map(|item| {
                                    view! {
                                        <div class="flex gap-3">
                                            <span class="mt-2 w-2 h-2 rounded-full bg-primary shrink-0"></span>
                                            <div>
                                                <p class="text-sm uppercase tracking-[0.12em] text-muted">
                                                    {item.period}
                                                </p>
                                                <p class="text-foreground font-semibold">{item.title}</p>
                                                <p class="text-sm text-muted">{item.detail}</p>
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

struct SkillGroup {
    title: &'static str,
    items: &'static [&'static str],
}

const SKILL_GROUPS: [SkillGroup; 4] = [
    SkillGroup {
        title: "Languages",
        items: &["Java", "TypeScript", "JavaScript", "Python", "SQL"],
    },
    SkillGroup {
        title: "Frameworks",
        items: &["Spring Boot", "React", "Node.js", "FastAPI", "Express"],
    },
    SkillGroup {
        title: "Cloud & DevOps",
        items: &["AWS", "Docker", "Kubernetes", "Terraform", "GitHub Actions", "Jenkins"],
    },
    SkillGroup {
        title: "Databases",
        items: &["PostgreSQL", "MongoDB", "DynamoDB", "Redis"],
    },
];

#[component]
pub fn SkillsSection() -> impl IntoView {
    let reduced = use_reduced_motion().get_untracked();
    view! {
        <section id="skills" class="section-anchor py-16 lg:py-24 border-b border-muted/20">
            <div class="container mx-auto px-6 lg:px-12">
                <SectionHeader
                    eyebrow="Skills"
                    title="A toolkit for shipping production software."
                    description="The stacks I reach for when building resilient services, data flows, and clean user experiences."
                />

                <div class="grid md:grid-cols-2 xl:grid-cols-4 gap-6">
                    {SKILL_GROUPS
                        .iter()
                        .map(|group| {
                            view! {
                                <div class=if reduced {
                                    "bg-card border border-muted/30 rounded-2xl p-6 shadow-sm"
                                } else {
                                    "bg-card border border-muted/30 rounded-2xl p-6 shadow-sm animate-skill-fade"
                                }>
                                    <h3 class="text-lg font-semibold text-foreground mb-4">{group.title}</h3>
                                    <div class="flex flex-wrap gap-2">
                                        {group
                                            .items
                                            .iter()
                                            .map(|skill| {
                                                view! {
                                                    <span class="px-3 py-2 rounded-xl bg-card border border-muted/40 text-sm text-foreground/90">
                                                        {*skill}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

struct EducationEntry {
    dates: &'static str,
    degree: &'static str,
    school: &'static str,
    focus: &'static str,
}

const EDUCATION: [EducationEntry; 2] = [
    EducationEntry {
        dates: "2016 — 2018",
        degree: "Master of Science, Computer Science",
        school: "San Jose State University",
        focus: "Distributed systems, data engineering, and product delivery.",
    },
    EducationEntry {
        dates: "2012 — 2016",
        degree: "Bachelor of Technology, Computer Science",
        school: "JNTU Hyderabad",
        focus: "Algorithms, operating systems, and software engineering.",
    },
];

const CERTIFICATION_PREVIEW: [&str; 2] = [
    "AWS Certified Developer — Associate",
    "Oracle Certified Professional, Java",
];

#[component]
pub fn EducationSection() -> impl IntoView {
    view! {
        <section id="education" class="section-anchor py-16 lg:py-24 border-b border-muted/20">
            <div class="container mx-auto px-6 lg:px-12">
                <SectionHeader
                    eyebrow="Education"
                    title="Learning that shaped my engineering practice."
                    description="A formal foundation in computer science, reinforced by ongoing certifications and hands-on build cycles."
                />

                <div class="grid lg:grid-cols-3 gap-6">
                    <div class="lg:col-span-2 space-y-4">
                        {EDUCATION
                            .iter()
                            .map(|entry| {
                                view! {
                                    <div class="bg-card border border-muted/30 rounded-2xl p-5 shadow-sm">
                                        <p class="text-sm uppercase tracking-[0.12em] text-muted">{entry.dates}</p>
                                        <h3 class="text-lg font-semibold text-foreground">{entry.degree}</h3>
                                        <p class="text-muted font-medium">{entry.school}</p>
                                        <p class="text-sm text-muted mt-2">{entry.focus}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="bg-card/60 border border-muted/30 rounded-2xl p-6 shadow-sm">
                        <h3 class="text-lg font-semibold text-foreground mb-3">"Certifications Preview"</h3>
                        <ul class="space-y-2 text-sm text-muted">
                            {CERTIFICATION_PREVIEW
                                .iter()
                                .map(|cert| {
                                    view! {
                                        <li class="flex items-start gap-2">
                                            <span class="mt-1.5 w-2 h-2 rounded-full bg-primary shrink-0"></span>
                                            <span>{*cert}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </div>
            </div>
        </section>
    }
}

struct Certification {
    year: &'static str,
    name: &'static str,
    issuer: &'static str,
    credential_url: &'static str,
}

const CERTIFICATIONS: [Certification; 3] = [
    Certification {
        year: "2023",
        name: "AWS Certified Developer — Associate",
        issuer: "Amazon Web Services",
        credential_url: "https://aws.amazon.com/certification/",
    },
    Certification {
        year: "2022",
        name: "Oracle Certified Professional, Java SE",
        issuer: "Oracle",
        credential_url: "https://education.oracle.com/java",
    },
    Certification {
        year: "2021",
        name: "CKA: Certified Kubernetes Administrator",
        issuer: "CNCF",
        credential_url: "https://www.cncf.io/certification/cka/",
    },
];

#[component]
pub fn CertificationsSection() -> impl IntoView {
    view! {
        <section id="certifications" class="section-anchor py-16 lg:py-24 border-b border-muted/20 bg-card/40">
            <div class="container mx-auto px-6 lg:px-12">
                <SectionHeader
                    eyebrow="Certifications"
                    title="Credentials that back the work."
                    description="Formal proof points across cloud, backend, and orchestration."
                />

                <div class="grid md:grid-cols-3 gap-6">
                    {CERTIFICATIONS
                        .iter()
                        .map(|cert| {
                            view! {
                                <article class="bg-card border border-muted/30 rounded-2xl p-5 shadow-sm">
                                    <p class="text-sm uppercase tracking-[0.12em] text-muted">{cert.year}</p>
                                    <h3 class="text-lg font-semibold text-foreground">{cert.name}</h3>
                                    <p class="text-sm text-muted mb-4">{cert.issuer}</p>
                                    <a
                                        href=cert.credential_url
                                        target="_blank"
                                        rel="noreferrer"
                                        class="inline-flex items-center gap-2 text-sm text-foreground hover:text-primary font-medium"
                                    >
                                        "View credential ↗"
                                    </a>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
