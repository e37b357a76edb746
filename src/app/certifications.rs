use leptos::prelude::*;
use leptos_meta::Title;

use super::components::{BadgeList, Card, ExternalLink, PageHeader};
use crate::portfolio::PORTFOLIO;

#[component]
pub fn CertificationsPage() -> impl IntoView {
    let data = &*PORTFOLIO;

    view! {
        <Title text="Certifications" />
        <div class="max-w-6xl mx-auto py-24 px-6 sm:px-8 lg:px-12 page-content">
            <PageHeader
                label="05 - Certifications"
                title="Certifications & Learning"
                subtitle="Continuous learning and professional development achievements"
            />
            <div class="space-y-8">
                {data
                    .certifications
                    .iter()
                    .map(|cert| {
                        view! {
                            <div class="section-content">
                                <Card class="space-y-6">
                                    <div class="flex flex-col md:flex-row md:items-start justify-between gap-6">
                                        <div class="flex items-start gap-4 flex-1">
                                            <div class=format!(
                                                "p-4 rounded-md bg-gradient-to-br {} text-4xl flex-shrink-0",
                                                cert.gradient,
                                            )>{cert.icon.as_str()}</div>
                                            <div>
                                                <h2 class="text-2xl font-bold mb-2">{cert.title.as_str()}</h2>
                                                <div class="flex flex-wrap items-center gap-4 text-sm">
                                                    <span class="text-cyan font-semibold">{cert.provider.as_str()}</span>
                                                    <span class="text-muted">"📅 " {cert.date.as_str()}</span>
                                                </div>
                                            </div>
                                        </div>
                                        <ExternalLink href=cert.link.as_str()>
                                            <span class="flex items-center gap-2 px-4 py-2 rounded-md border-2 border-cyan text-sm font-medium">
                                                "View Certificate ↗"
                                            </span>
                                        </ExternalLink>
                                    </div>
                                    <p class="text-muted leading-relaxed">{cert.description.as_str()}</p>
                                    <div>
                                        <h3 class="font-semibold mb-3">"✓ Key Skills & Topics"</h3>
                                        <BadgeList items=cert.skills.as_slice() />
                                    </div>
                                </Card>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="mt-16 section-content">
                <Card class="p-8 grid grid-cols-1 md:grid-cols-2 gap-8 text-center">
                    <div>
                        <div class="text-4xl font-bold mb-2">{data.stats.certifications.as_str()}</div>
                        <div class="text-muted">"Certifications Earned"</div>
                    </div>
                    <div>
                        <div class="text-4xl font-bold mb-2">{data.stats.commitment.as_str()}</div>
                        <div class="text-muted">"Completion Rate"</div>
                    </div>
                </Card>
            </div>
        </div>
    }
}
