use leptos::prelude::*;

use crate::icons::Icon;

#[component]
pub fn PageHeader(label: &'static str, title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="mb-16 section-content">
            <div class="label-mono mb-4">{label}</div>
            <h1 class="text-4xl md:text-5xl lg:text-6xl font-bold mb-6">{title}</h1>
            <p class="text-xl text-muted max-w-2xl">{subtitle}</p>
        </div>
    }
}

#[component]
pub fn Card(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class=format!(
            "p-6 rounded-md border border-muted/30 bg-brightBlack/20 transition-colors duration-200 hover:border-foreground {class}",
        )>{children()}</div>
    }
}

#[component]
pub fn Badge(text: &'static str, #[prop(optional)] outline: bool) -> impl IntoView {
    let class = if outline {
        "rounded-md px-2 py-1 mr-2 mb-2 text-sm border border-muted"
    } else {
        "rounded-md px-2 py-1 mr-2 mb-2 text-sm bg-brightBlack"
    };
    view! { <span class=class>{text}</span> }
}

#[component]
pub fn BadgeList(items: &'static [String], #[prop(optional)] outline: bool) -> impl IntoView {
    view! {
        <div class="flex flex-wrap">
            {items
                .iter()
                .map(|s| view! { <Badge text=s.as_str() outline /> })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn BulletList(items: &'static [String]) -> impl IntoView {
    view! {
        <ul class="space-y-2">
            {items
                .iter()
                .map(|s| {
                    view! {
                        <li class="text-sm text-muted flex gap-3">
                            <span class="text-cyan">"▸"</span>
                            <span>{s.as_str()}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

/// Horizontal bar filled to `level` percent.
#[component]
pub fn LevelBar(level: f64) -> impl IntoView {
    view! {
        <div class="h-1 bg-brightBlack overflow-hidden">
            <div class="h-full bg-cyan" style=format!("width: {level}%") />
        </div>
    }
}

#[component]
pub fn IconView(icon: Icon, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! { <i class=format!("{} {class}", icon.class()) /> }
}

#[component]
pub fn ExternalLink(href: &'static str, children: Children) -> impl IntoView {
    view! {
        <a href=href target="_blank" rel="noopener noreferrer">
            {children()}
        </a>
    }
}
