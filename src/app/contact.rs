use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};
use leptos_meta::Title;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::components::{Card, ExternalLink, IconView, PageHeader};
use crate::contact::{
    ContactSubmission, DeliveryConfig, EmailJs, Field, Mailer, SubmissionStatus, SENT_RESET_DELAY,
};
use crate::icons::Icon;
use crate::portfolio::PORTFOLIO;

#[component]
pub fn ContactPage() -> impl IntoView {
    let data = &*PORTFOLIO;

    view! {
        <Title text="Contact" />
        <div class="max-w-4xl mx-auto py-24 px-6 sm:px-8 lg:px-12 page-content">
            <PageHeader
                label="06 - Contact"
                title="Get In Touch"
                subtitle="Have a question or want to work together? I'd love to hear from you!"
            />
            <div class="mb-12 section-content">
                <Card>
                    <h3 class="text-lg font-semibold mb-4">"Connect With Me"</h3>
                    <div class="flex gap-4">
                        <ExternalLink href=data.personal.github.as_str()>
                            <span class="flex flex-col items-center gap-3 p-6 border border-muted/30 rounded-md">
                                <IconView icon=Icon::Github class="text-xl" />
                                <span class="text-sm font-medium">"GitHub"</span>
                            </span>
                        </ExternalLink>
                        <ExternalLink href=data.personal.linkedin.as_str()>
                            <span class="flex flex-col items-center gap-3 p-6 border border-muted/30 rounded-md">
                                <IconView icon=Icon::Linkedin class="text-xl" />
                                <span class="text-sm font-medium">"LinkedIn"</span>
                            </span>
                        </ExternalLink>
                    </div>
                </Card>
            </div>
            <div class="section-content">
                <Card>
                    <h2 class="text-2xl font-semibold">"Send Me a Message"</h2>
                    <p class="text-muted text-sm mb-6">
                        "Fill out the form below and I'll get back to you as soon as possible"
                    </p>
                    <ContactForm />
                </Card>
            </div>
        </div>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let to_email = PORTFOLIO.personal.email.as_str();
    let config = DeliveryConfig::from_build_env();
    let form = RwSignal::new(ContactSubmission::new());

    // cleared automatically if the form is disposed before it fires
    let UseTimeoutFnReturn { start, stop, .. } = use_timeout_fn(
        move |_: ()| {
            _ = form.try_update(|f| f.expire_sent());
        },
        SENT_RESET_DELAY.as_millis() as f64,
    );

    let is_sent = Memo::new(move |_| form.with(|f| f.status == SubmissionStatus::Sent));
    let is_submitting = Memo::new(move |_| form.with(|f| f.is_submitting()));
    let failure = Memo::new(move |_| {
        form.with(|f| {
            f.error_message()
                .zip(f.fallback_email().map(str::to_string))
        })
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let outgoing = match form.try_update(|f| f.begin(config.as_ref(), to_email)) {
            Some(Ok(outgoing)) => outgoing,
            Some(Err(e)) => {
                log::debug!("contact form not sent: {e}");
                return;
            }
            None => return,
        };
        let start = start.clone();
        spawn_local(async move {
            let result = EmailJs::default().send(&outgoing).await;
            let sent = form.try_update(|f| {
                f.finish(&outgoing, result);
                f.status == SubmissionStatus::Sent
            });
            if sent == Some(true) {
                start(());
            }
        });
    };

    let on_edit = move || stop();

    view! {
        <Show when=move || is_sent.get()>
            <div class="text-center py-12">
                <div class="text-4xl mb-6 text-cyan">"✓"</div>
                <h3 class="text-2xl font-semibold mb-2">"Message Sent!"</h3>
                <p class="text-muted">"Thank you for reaching out. I'll get back to you soon."</p>
            </div>
        </Show>
        <div class:hidden=move || is_sent.get()>
            {move || {
                failure
                    .get()
                    .map(|(message, fallback)| {
                        view! {
                            <div class="mb-6 p-4 rounded-md bg-red/10 border border-red/40">
                                <p class="text-red text-sm">{message}</p>
                                <p class="text-red/80 text-xs mt-1">
                                    "You can also reach me at "
                                    <a href=format!("mailto:{fallback}") class="underline">
                                        {fallback.clone()}
                                    </a>
                                </p>
                            </div>
                        }
                    })
            }}
            <form class="space-y-6" on:submit=on_submit>
                <div class="grid md:grid-cols-2 gap-6">
                    <FieldInput
                        form
                        field=Field::Name
                        placeholder="Your name"
                        on_edit=on_edit.clone()
                    />
                    <FieldInput
                        form
                        field=Field::Email
                        input_type="email"
                        placeholder="your@email.com"
                        on_edit=on_edit.clone()
                    />
                </div>
                <FieldInput
                    form
                    field=Field::Subject
                    placeholder="What is this about?"
                    on_edit=on_edit.clone()
                />
                <FieldInput
                    form
                    field=Field::Message
                    placeholder="Your message..."
                    multiline=true
                    on_edit
                />
                <button
                    type="submit"
                    disabled=move || is_submitting.get()
                    class="w-full px-4 py-4 bg-cyan/20 hover:bg-cyan/30 text-cyan rounded-md border border-cyan/30 font-medium disabled:opacity-50"
                >
                    {move || if is_submitting.get() { "Sending..." } else { "Send Message →" }}
                </button>
            </form>
        </div>
    }
}

#[component]
fn FieldInput<F>(
    form: RwSignal<ContactSubmission>,
    field: Field,
    placeholder: &'static str,
    on_edit: F,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] multiline: bool,
) -> impl IntoView
where
    F: Fn() + Clone + 'static,
{
    let value = move || form.with(|f| f.fields.get(field).to_string());
    let on_input = move |ev: leptos::ev::Event| {
        on_edit();
        form.update(|f| f.edit(field, event_target_value(&ev)));
    };
    let class = "w-full px-4 py-2 rounded-md border border-muted focus:outline-none focus:ring-2 focus:ring-cyan bg-background text-foreground";
    let id = format!("contact_{}", field.label().to_lowercase());

    view! {
        <div>
            <label for=id.clone() class="label-mono mb-2 block">
                {field.label()}
            </label>
            {if multiline {
                view! {
                    <textarea
                        id=id
                        rows=6
                        placeholder=placeholder
                        required=true
                        class=format!("{class} resize-none")
                        prop:value=value
                        on:input=on_input
                    />
                }
                    .into_any()
            } else {
                view! {
                    <input
                        id=id
                        type=input_type
                        placeholder=placeholder
                        required=true
                        class=class
                        prop:value=value
                        on:input=on_input
                    />
                }
                    .into_any()
            }}
        </div>
    }
}
