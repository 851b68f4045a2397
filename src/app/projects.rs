use leptos::prelude::*;

use crate::portfolio::CATEGORIES;
use crate::state::PageState;
use crate::theme::Theme;

#[component]
pub fn Projects(state: RwSignal<PageState>, theme: Memo<Theme>) -> impl IntoView {
    let filter = Memo::new(move |_| state.with(|s| s.filter));
    let visible = Memo::new(move |_| state.with(PageState::visible_projects));

    let select = move |category: &'static str| {
        state.update(|s| {
            if let Err(e) = s.set_filter(category) {
                log::warn!("{e}");
            }
        })
    };

    view! {
        <section
            id="projects"
            class=move || format!("{} p-6 mb-10 rounded-lg shadow-md", theme.get().bundle().section)
        >
            <h2 class="text-2xl font-semibold mb-4 text-green-400">"Projects"</h2>
            <div class="flex gap-3 mb-4 flex-wrap">
                {CATEGORIES
                    .iter()
                    .copied()
                    .map(|category| {
                        view! {
                            <button
                                on:click=move |_| select(category)
                                class=move || {
                                    let active = if filter.get() == category {
                                        "bg-green-400 text-black scale-105"
                                    } else {
                                        "border-gray-600 text-gray-300 hover:bg-gray-700"
                                    };
                                    format!(
                                        "px-4 py-1 border rounded-full text-sm font-medium transition duration-200 ease-in-out transform {active}",
                                    )
                                }
                            >
                                {category}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="grid gap-4 sm:grid-cols-2">
                {move || {
                    visible
                        .get()
                        .into_iter()
                        .map(|project| {
                            view! {
                                <div class=move || {
                                    format!(
                                        "{} p-4 rounded-lg hover:shadow-lg transition-transform transform hover:scale-105 card-pop",
                                        theme.get().bundle().project_card,
                                    )
                                }>
                                    <h3 class=format!(
                                        "text-xl font-semibold {}",
                                        project.accent,
                                    )>{project.title}</h3>
                                    <p class="text-gray-400 text-sm mt-2">{project.description}</p>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
