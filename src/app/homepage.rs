use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use super::components::{ExternalLink, IconView};
use crate::icons::Icon;
use crate::portfolio::PORTFOLIO;

#[component]
pub fn HomePage() -> impl IntoView {
    let data = &*PORTFOLIO;
    let subtitle = data
        .personal
        .subtitle
        .as_deref()
        .unwrap_or(data.personal.title.as_str());
    let stats = [
        (data.stats.experience.as_str(), "Years Experience"),
        (data.stats.projects.as_str(), "Projects"),
        (data.stats.certifications.as_str(), "Certifications"),
        (data.stats.commitment.as_str(), "Commitment"),
    ];

    view! {
        <Title text="Home" />
        <section class="min-h-[90vh] flex items-center px-6 sm:px-8 lg:px-12 border-b border-muted/30">
            <div class="max-w-7xl mx-auto w-full grid lg:grid-cols-12 gap-12 lg:gap-20 items-center">
                <div class="lg:col-span-7 space-y-8 section-content">
                    <div class="label-mono">
                        {format!("{} - Available for Work", data.personal.title)}
                    </div>
                    <div class="space-y-4">
                        <h1 class="text-4xl sm:text-5xl md:text-6xl lg:text-7xl font-bold leading-tight">
                            {data.personal.name.as_str()}
                        </h1>
                        <p class="text-xl md:text-2xl text-muted max-w-xl">{subtitle}</p>
                    </div>
                    <div class="flex flex-wrap gap-4 pt-4">
                        <A
                            href="/projects"
                            attr:class="bg-cyan/20 hover:bg-cyan/30 text-cyan px-8 py-4 rounded-md font-medium border border-cyan/30"
                        >
                            "View Projects →"
                        </A>
                        <A
                            href="/contact"
                            attr:class="px-8 py-4 rounded-md font-medium border border-muted hover:border-foreground"
                        >
                            "Contact Me"
                        </A>
                    </div>
                    <div class="flex items-center gap-4 pt-4">
                        <span class="label-mono">"Find me on"</span>
                        <ExternalLink href=data.personal.github.as_str()>
                            <IconView icon=Icon::Github class="text-2xl" />
                        </ExternalLink>
                        <ExternalLink href=data.personal.linkedin.as_str()>
                            <IconView icon=Icon::Linkedin class="text-2xl" />
                        </ExternalLink>
                        <a href=format!("mailto:{}", data.personal.email) aria-label="Email">
                            <IconView icon=Icon::Mail class="text-2xl" />
                        </a>
                    </div>
                </div>
                <div class="lg:col-span-5 hidden lg:block space-y-4">
                    <div class="label-mono mb-6">"Core Skills"</div>
                    {data
                        .skills
                        .iter()
                        .map(|skill| {
                            view! {
                                <div class="p-6 border border-muted/30 rounded-md hover:border-foreground flex items-center justify-between">
                                    <div class="flex items-center gap-4">
                                        <IconView icon=Icon::lookup(&skill.icon, Icon::Code2) />
                                        <span class="font-medium">{skill.label.as_str()}</span>
                                    </div>
                                    <span class="text-xs text-muted">
                                        {skill.level.as_deref().unwrap_or_default()}
                                    </span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
        <section class="py-24 px-6 sm:px-8 lg:px-12 border-b border-muted/30">
            <div class="max-w-7xl mx-auto">
                <div class="label-mono mb-4">"Currently Learning"</div>
                <h2 class="text-3xl md:text-4xl font-bold mb-12">"Exploring New Technologies"</h2>
                <div class="grid md:grid-cols-3 gap-6">
                    {data
                        .exploring
                        .iter()
                        .enumerate()
                        .map(|(i, tech)| {
                            view! {
                                <div class="p-8 border border-muted/30 rounded-md hover:border-cyan">
                                    <span class="label-mono text-cyan">{format!("{:02}", i + 1)}</span>
                                    <h3 class="text-xl font-medium mt-4">{tech.name.as_str()}</h3>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
        <section class="py-24 px-6 sm:px-8 lg:px-12 bg-black/40">
            <div class="max-w-7xl mx-auto grid grid-cols-2 md:grid-cols-4 gap-8 md:gap-12">
                {stats
                    .into_iter()
                    .map(|(value, label)| {
                        view! {
                            <div class="text-center">
                                <div class="text-4xl md:text-5xl lg:text-6xl font-bold mb-2">{value}</div>
                                <div class="text-xs text-muted uppercase tracking-widest">{label}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
