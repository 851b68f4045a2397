use leptos::prelude::*;

use crate::portfolio::Icon;
use crate::state::PageState;
use crate::theme::Theme;

const ANCHORS: [(&str, &str); 3] = [
    ("#about", "About"),
    ("#skills", "Skills"),
    ("#projects", "Projects"),
];

#[component]
pub fn NavBar(state: RwSignal<PageState>, theme: Memo<Theme>) -> impl IntoView {
    let toggle_icon = move || {
        if theme.get().is_dark() {
            format!("{} text-yellow-300", Icon::Sun.class())
        } else {
            format!("{} text-gray-800", Icon::Moon.class())
        }
    };

    view! {
        <nav class=move || {
            let b = theme.get().bundle();
            format!("fixed top-0 left-0 w-full {} {} border-b z-50 py-3", b.bg, b.border)
        }>
            <div class="max-w-4xl mx-auto flex justify-between items-center px-4 text-sm">
                <div class="flex gap-6">
                    {ANCHORS
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <a
                                    href=href
                                    class=move || {
                                        let b = theme.get().bundle();
                                        format!("transition-colors {} {}", b.nav_text, b.link_hover)
                                    }
                                >
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <button
                    on:click=move |_| state.update(PageState::toggle_theme)
                    class="text-xl p-1"
                    aria-label="Toggle dark mode"
                >
                    <i class=toggle_icon></i>
                </button>
            </div>
        </nav>
    }
}
