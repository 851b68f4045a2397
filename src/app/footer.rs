use chrono::{Datelike, Utc};
use leptos::prelude::*;

use crate::portfolio::{
    Icon, CONTACT_EMAIL, GITHUB_LABEL, GITHUB_URL, LINKEDIN_LABEL, LINKEDIN_URL, OWNER,
};
use crate::theme::Theme;

#[component]
pub fn Footer(theme: Memo<Theme>) -> impl IntoView {
    let year = Utc::now().year();

    view! {
        <footer class=move || format!("text-center mt-16 {}", theme.get().bundle().subtext)>
            <div class="space-y-3 text-sm">
                <p class="flex justify-center items-center gap-2">
                    <i class=format!("{} text-red-400", Icon::Envelope.class())></i>
                    {CONTACT_EMAIL}
                </p>
                <p class="flex justify-center items-center gap-2">
                    <i class=format!("{} text-blue-500", Icon::LinkedIn.class())></i>
                    <a
                        href=LINKEDIN_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hover:underline text-green-400"
                    >
                        {LINKEDIN_LABEL}
                    </a>
                </p>
                <p class="flex justify-center items-center gap-2">
                    <i class=Icon::GitHub.class()></i>
                    <a
                        href=GITHUB_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hover:underline text-green-400"
                    >
                        {GITHUB_LABEL}
                    </a>
                </p>
            </div>
            <div class="mt-6">{format!("© {year} {OWNER}")}</div>
        </footer>
    }
}
