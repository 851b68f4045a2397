use leptos::{either::Either, prelude::*, task::spawn_local};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::contact::ContactForm;
use crate::portfolio::Icon;
use crate::state::{PageState, ACK_WINDOW_MS};
use crate::theme::Theme;

/// Accepts a contact submission and forwards it to the email service and the
/// spreadsheet webhook. Delivery failures are logged on the server and do not
/// fail the call.
#[server]
pub async fn submit_contact(
    name: String,
    email: String,
    message: String,
    page_url: String,
) -> Result<(), ServerFnError> {
    use crate::contact::dispatch::{deliver, DELIVERY};

    let form = ContactForm {
        name,
        email,
        message,
    };
    let delivery = deliver(
        form,
        page_url,
        chrono::Utc::now(),
        DELIVERY.clone(),
        &*DELIVERY,
        |task| {
            tokio::spawn(task);
        },
    )
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(
        timestamp = %delivery.submission.timestamp,
        page_url = %delivery.submission.page_url,
        webhook_ok = delivery.webhook.is_ok(),
        "contact submission handled"
    );
    Ok(())
}

#[component]
pub fn ChatButton(state: RwSignal<PageState>) -> impl IntoView {
    view! {
        <div class="fixed bottom-6 right-6 z-50">
            <button
                on:click=move |_| state.update(PageState::toggle_chat)
                class="bg-green-400 p-3 rounded-full shadow-lg hover:bg-green-500 transition"
                aria-label="Open contact form"
            >
                <i class=format!("{} text-black text-xl", Icon::Comments.class())></i>
            </button>
        </div>
    }
}

#[component]
pub fn ContactPanel(state: RwSignal<PageState>, theme: Memo<Theme>) -> impl IntoView {
    let chat_open = Memo::new(move |_| state.with(|s| s.chat_open));
    let thank_you = Memo::new(move |_| state.with(|s| s.thank_you));

    // Restarting clears any pending reset; unmounting clears it too. The
    // sequence number keeps a late reset from hiding a newer acknowledgment.
    let UseTimeoutFnReturn {
        start: start_reset,
        ..
    } = use_timeout_fn(
        move |seq: u64| {
            state.update(|s| {
                s.expire_acknowledgment(seq);
            })
        },
        ACK_WINDOW_MS as f64,
    );

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = match state.with_untracked(PageState::submission_form) {
            Ok(form) => form,
            Err(e) => {
                log::warn!("contact form not submitted: {e}");
                return;
            }
        };
        let page_url = window().location().href().unwrap_or_default();
        let start_reset = start_reset.clone();
        spawn_local(async move {
            let result = submit_contact(form.name, form.email, form.message, page_url).await;
            let mut reset = None;
            state.update(|s| reset = Some(s.finish_submission(result)));
            if let Some(reset) = reset {
                start_reset(reset.seq);
            }
        });
    };

    let draft = move |field: fn(&ContactForm) -> &String| {
        move || state.with(|s| field(&s.draft).clone())
    };

    let field_class = move || {
        let b = theme.get().bundle();
        format!("w-full p-2 rounded {} {} {} text-sm", b.bg, b.border, b.text)
    };

    view! {
        {move || {
            chat_open
                .get()
                .then(|| {
                    let on_submit = on_submit.clone();
                    view! {
                        <div class=move || {
                            let b = theme.get().bundle();
                            format!(
                                "fixed bottom-20 right-6 {} {} rounded-lg p-4 w-72 z-50 shadow-lg panel-slide",
                                b.section,
                                b.border,
                            )
                        }>
                            {move || {
                                if thank_you.get() {
                                    Either::Left(
                                        view! {
                                            <div class="text-green-400 text-sm text-center">
                                                "Thank you! Your message was sent."
                                            </div>
                                        },
                                    )
                                } else {
                                    let on_submit = on_submit.clone();
                                    Either::Right(
                                        view! {
                                            <form on:submit=on_submit class="space-y-3">
                                                <input
                                                    prop:value=draft(|f| &f.name)
                                                    on:input=move |ev| {
                                                        state.update(|s| s.draft.name = event_target_value(&ev))
                                                    }
                                                    type="text"
                                                    name="name"
                                                    placeholder="Your Name"
                                                    required
                                                    class=field_class
                                                />
                                                <input
                                                    prop:value=draft(|f| &f.email)
                                                    on:input=move |ev| {
                                                        state.update(|s| s.draft.email = event_target_value(&ev))
                                                    }
                                                    type="email"
                                                    name="email"
                                                    placeholder="Your Email"
                                                    required
                                                    class=field_class
                                                />
                                                <textarea
                                                    prop:value=draft(|f| &f.message)
                                                    on:input=move |ev| {
                                                        state.update(|s| s.draft.message = event_target_value(&ev))
                                                    }
                                                    name="message"
                                                    placeholder="Your Message"
                                                    rows="3"
                                                    required
                                                    class=field_class
                                                ></textarea>
                                                <button
                                                    type="submit"
                                                    class=move || {
                                                        format!(
                                                            "{} px-4 py-1.5 rounded transition text-sm",
                                                            theme.get().bundle().button,
                                                        )
                                                    }
                                                >
                                                    "Send"
                                                </button>
                                            </form>
                                        },
                                    )
                                }
                            }}
                        </div>
                    }
                })
        }}
    }
}
