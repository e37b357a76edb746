use leptos::prelude::*;
use leptos_meta::Title;

use super::components::{BulletList, Card, PageHeader};
use crate::portfolio::PORTFOLIO;

#[component]
pub fn EducationPage() -> impl IntoView {
    view! {
        <Title text="Education" />
        <div class="max-w-4xl mx-auto py-24 px-6 sm:px-8 lg:px-12 page-content">
            <PageHeader
                label="04 - Education"
                title="Education"
                subtitle="Academic journey and achievements"
            />
            <div class="space-y-8">
                {PORTFOLIO
                    .education
                    .iter()
                    .map(|edu| {
                        view! {
                            <div class="section-content">
                                <Card>
                                    <div class="flex items-center gap-4 mb-6">
                                        <div class="p-4 rounded-md bg-cyan/20 text-2xl">"🎓"</div>
                                        <div>
                                            <h2 class="text-2xl font-bold">{edu.institution.as_str()}</h2>
                                            <p class="text-muted">{edu.location.as_str()}</p>
                                        </div>
                                    </div>
                                    <h3 class="text-xl font-semibold mb-2">{edu.degree.as_str()}</h3>
                                    <p class="text-muted">{edu.period.as_str()}</p>
                                    {(!edu.achievements.is_empty())
                                        .then(|| {
                                            view! {
                                                <div class="pt-6 mt-6 border-t border-muted/30">
                                                    <h4 class="text-lg font-semibold mb-4">
                                                        "🏆 Achievements & Highlights"
                                                    </h4>
                                                    <BulletList items=edu.achievements.as_slice() />
                                                </div>
                                            }
                                        })}
                                </Card>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
