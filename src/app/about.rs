use leptos::prelude::*;
use leptos_meta::Title;

use super::components::{Badge, Card, IconView, LevelBar, PageHeader};
use crate::icons::Icon;
use crate::portfolio::PORTFOLIO;

#[component]
pub fn AboutPage() -> impl IntoView {
    let data = &*PORTFOLIO;

    view! {
        <Title text="About" />
        <div class="max-w-7xl mx-auto py-24 px-6 sm:px-8 lg:px-12 page-content">
            <PageHeader
                label="01 - About"
                title="About Me"
                subtitle="Passionate about building applications, solving problems, and constantly learning"
            />

            <section class="mb-20 section-content">
                <Card>
                    <h2 class="text-2xl font-semibold mb-4">"My Story"</h2>
                    <div class="space-y-4 text-muted leading-relaxed">
                        {data
                            .personal
                            .bio
                            .iter()
                            .map(|p| view! { <p class="text-lg">{p.as_str()}</p> })
                            .collect_view()}
                    </div>
                </Card>
            </section>

            <section class="mb-20 section-content">
                <div class="label-mono mb-4">"Interests"</div>
                <h2 class="text-3xl font-bold mb-8">"What I'm About"</h2>
                <div class="grid md:grid-cols-3 gap-6">
                    {data
                        .interests
                        .iter()
                        .map(|interest| {
                            view! {
                                <Card class="h-full">
                                    <div class="flex items-start gap-4">
                                        <IconView
                                            icon=Icon::lookup(&interest.icon, Icon::Heart)
                                            class="text-cyan text-xl"
                                        />
                                        <div>
                                            <div class="label-mono mb-1">{interest.label.as_str()}</div>
                                            <div class="font-medium">{interest.value.as_str()}</div>
                                        </div>
                                    </div>
                                </Card>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="mb-20 section-content">
                <div class="label-mono mb-4">"Technical Skills"</div>
                <h2 class="text-3xl font-bold mb-8">"Programming Languages"</h2>
                <div class="grid md:grid-cols-2 gap-6">
                    {data
                        .languages
                        .iter()
                        .map(|lang| {
                            view! {
                                <Card>
                                    <div class="flex justify-between items-center mb-4">
                                        <div class="flex items-center gap-3">
                                            <span class="text-2xl">{lang.badge.as_str()}</span>
                                            <span class="font-medium text-lg">{lang.name.as_str()}</span>
                                        </div>
                                        <span class="text-cyan text-sm font-medium">
                                            {format!("{}%", lang.level)}
                                        </span>
                                    </div>
                                    <LevelBar level=lang.level />
                                </Card>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="mb-20 section-content">
                <div class="label-mono mb-4">"Frameworks"</div>
                <h2 class="text-3xl font-bold mb-8">"Frameworks & Libraries"</h2>
                <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-6">
                    {data
                        .frameworks
                        .iter()
                        .map(|framework| {
                            view! {
                                <Card>
                                    <h3 class="font-medium text-lg mb-2">{framework.name.as_str()}</h3>
                                    <Badge text=framework.category.as_str() />
                                </Card>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section-content">
                <div class="label-mono mb-4">"Tools"</div>
                <h2 class="text-3xl font-bold mb-8">"Development Tools"</h2>
                <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-6">
                    {data
                        .tools
                        .iter()
                        .map(|tool| {
                            view! {
                                <Card class="flex items-center gap-4">
                                    <IconView icon=Icon::lookup(&tool.icon, Icon::Code) class="text-muted" />
                                    <span class="font-medium">{tool.name.as_str()}</span>
                                </Card>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
