use leptos::prelude::*;
use leptos_meta::Title;

use super::components::{BadgeList, BulletList, Card, ExternalLink, IconView, PageHeader};
use crate::icons::Icon;
use crate::portfolio::PORTFOLIO;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let data = &*PORTFOLIO;

    view! {
        <Title text="Projects" />
        <div class="max-w-7xl mx-auto py-24 px-6 sm:px-8 lg:px-12 page-content">
            <PageHeader
                label="02 - Work"
                title="Featured Projects"
                subtitle="Showcasing my technical skills through real-world applications"
            />
            <div class="grid lg:grid-cols-2 gap-8 mb-20">
                {data
                    .projects
                    .iter()
                    .enumerate()
                    .map(|(i, project)| {
                        view! {
                            <div class="section-content">
                                <Card class="h-full space-y-6">
                                    <div class="flex items-start justify-between">
                                        <div class="text-4xl p-4 border border-muted/30 rounded-md">
                                            {project.icon.as_str()}
                                        </div>
                                        {project
                                            .link
                                            .as_deref()
                                            .map(|href| {
                                                view! {
                                                    <ExternalLink href>
                                                        <span class="p-3 border border-muted/30 rounded-md">"↗"</span>
                                                    </ExternalLink>
                                                }
                                            })}
                                    </div>
                                    <div>
                                        <span class="label-mono text-cyan">
                                            {format!("Project {:02}", i + 1)}
                                        </span>
                                        <h2 class="text-2xl font-semibold mt-2">{project.title.as_str()}</h2>
                                        <p class="text-sm text-muted mt-1">{project.period.as_str()}</p>
                                    </div>
                                    <p class="text-muted leading-relaxed">{project.description.as_str()}</p>
                                    <div>
                                        <h3 class="label-mono mb-3">"Key Features"</h3>
                                        <BulletList items=project.features.as_slice() />
                                    </div>
                                    <div>
                                        <h3 class="label-mono mb-3">"Tech Stack"</h3>
                                        <BadgeList items=project.technologies.as_slice() outline=true />
                                    </div>
                                </Card>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <Card class="p-12 text-center">
                <IconView icon=Icon::Github class="text-4xl mb-6" />
                <h3 class="text-2xl font-semibold mb-3">"More Projects on GitHub"</h3>
                <p class="text-muted mb-8 max-w-lg mx-auto">
                    "Check out my GitHub profile for more projects, open-source contributions, and code samples."
                </p>
                <ExternalLink href=data.personal.github.as_str()>
                    <span class="px-8 py-4 bg-cyan/20 hover:bg-cyan/30 text-cyan rounded-md font-medium">
                        "Visit GitHub ↗"
                    </span>
                </ExternalLink>
            </Card>
        </div>
    }
}
