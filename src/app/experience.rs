use leptos::prelude::*;
use leptos_meta::Title;

use super::components::{Badge, BadgeList, BulletList, Card, PageHeader};
use crate::portfolio::{Experience, PORTFOLIO};

#[component]
pub fn ExperiencePage() -> impl IntoView {
    let data = &*PORTFOLIO;

    view! {
        <Title text="Experience" />
        <div class="max-w-5xl mx-auto py-24 px-6 sm:px-8 lg:px-12 page-content">
            <PageHeader
                label="03 - Experience"
                title="Work Experience"
                subtitle="My professional journey and key achievements"
            />
            <div class="relative">
                <div class="absolute left-0 md:left-8 top-0 bottom-0 w-px bg-muted/30" />
                <div class="space-y-12">
                    {data
                        .experiences
                        .iter()
                        .map(|exp| view! { <TimelineEntry exp /> })
                        .collect_view()}
                </div>
            </div>
            <div class="mt-20 section-content">
                <Card class="p-12 text-center">
                    <h3 class="text-2xl font-semibold mb-3">"Want to work together?"</h3>
                    <p class="text-muted mb-8">
                        "I'm always open to discussing new opportunities and exciting projects."
                    </p>
                    <a
                        href=format!("mailto:{}", data.personal.email)
                        class="inline-flex items-center gap-2 px-8 py-4 bg-cyan/20 hover:bg-cyan/30 text-cyan rounded-md font-medium"
                    >
                        "Get In Touch →"
                    </a>
                </Card>
            </div>
        </div>
    }
}

#[component]
fn TimelineEntry(exp: &'static Experience) -> impl IntoView {
    // older data files only list technologies
    let skills = if exp.skills.is_empty() {
        exp.technologies.as_slice()
    } else {
        exp.skills.as_slice()
    };
    view! {
        <div class="relative pl-8 md:pl-20 section-content">
            <div class="absolute left-0 md:left-8 top-8 w-3 h-3 -translate-x-1/2 bg-foreground rounded-full z-10" />
            <Card>
                <div class="flex flex-col md:flex-row md:items-start md:justify-between gap-4">
                    <div class="flex items-start gap-4">
                        <div class="text-3xl">{exp.logo.as_str()}</div>
                        <div>
                            <h2 class="text-xl font-semibold">{exp.role.as_str()}</h2>
                            <h3 class="text-cyan font-medium">{exp.company.as_str()}</h3>
                        </div>
                    </div>
                    {exp.current.then(|| view! { <Badge text="Current" /> })}
                </div>
                <div class="flex flex-wrap gap-4 mt-4 mb-6 text-sm text-muted">
                    <span>"📍 " {exp.location.as_str()}</span>
                    <span>"📅 " {exp.period.as_str()}</span>
                </div>
                <h4 class="label-mono mb-3">"Key Responsibilities"</h4>
                <BulletList items=exp.responsibilities.as_slice() />
                <h4 class="label-mono mt-6 mb-3">"Technologies & Skills"</h4>
                <BadgeList items=skills />
            </Card>
        </div>
    }
}
