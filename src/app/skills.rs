use leptos::prelude::*;

use crate::portfolio::SKILLS;
use crate::theme::Theme;

/// Per-tile delay of the entrance animation.
const STAGGER_MS: usize = 100;

#[component]
pub fn Skills(theme: Memo<Theme>) -> impl IntoView {
    view! {
        <section
            id="skills"
            class=move || format!("{} p-6 mb-10 rounded-lg shadow-md", theme.get().bundle().section)
        >
            <h2 class="text-2xl font-semibold mb-4 text-green-400">"Skills"</h2>
            <div class="grid grid-cols-3 sm:grid-cols-4 gap-6 text-center text-2xl">
                {SKILLS
                    .iter()
                    .enumerate()
                    .map(|(i, skill)| {
                        view! {
                            <div
                                class="flex flex-col items-center justify-center gap-1 skill-pop"
                                style=format!("animation-delay: {}ms", i * STAGGER_MS)
                            >
                                <i class=skill.icon.class()></i>
                                <span class="text-xs mt-1">{skill.name}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
