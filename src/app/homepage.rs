use leptos::prelude::*;
use leptos_meta::Title;
use leptos_use::use_interval_fn;

use super::contact::{ChatButton, ContactPanel};
use super::footer::Footer;
use super::nav::NavBar;
use super::projects::Projects;
use super::skills::Skills;
use crate::portfolio::{HERO_WORDS, RESUME_PATH, TAGLINE};
use crate::state::PageState;
use crate::theme::Theme;
use crate::typewriter::{Typewriter, TICK_MS};

#[component]
pub fn HomePage() -> impl IntoView {
    let state = RwSignal::new(PageState::default());
    let theme = Memo::new(move |_| state.with(|s| s.theme));

    view! {
        <Title text="Portfolio" />
        <div class=move || {
            let b = theme.get().bundle();
            format!(
                "min-h-screen {} {} font-mono scroll-smooth relative transition-all duration-500",
                b.bg,
                b.text,
            )
        }>
            <NavBar state theme />
            <div class="max-w-4xl mx-auto relative p-6 pt-24">
                <Hero theme />
                <About theme />
                <Skills theme />
                <Projects state theme />
                <Footer theme />
                <ChatButton state />
                <ContactPanel state theme />
            </div>
        </div>
    }
}

#[component]
fn Hero(theme: Memo<Theme>) -> impl IntoView {
    let typewriter = RwSignal::new(Typewriter::new(&HERO_WORDS));
    use_interval_fn(move || typewriter.update(Typewriter::tick), TICK_MS);

    view! {
        <div class="text-center pt-10 mb-16 fade-in">
            <h1 class="text-4xl font-bold text-green-400">
                "Hello, I'm "
                <span class=move || theme.get().bundle().text>
                    {move || typewriter.with(Typewriter::text)}
                    <span class="typewriter-cursor">"|"</span>
                </span>
            </h1>
            <p class=move || format!("{} mt-2 text-lg", theme.get().bundle().subtext)>{TAGLINE}</p>
            <a
                href=RESUME_PATH
                target="_blank"
                rel="noopener noreferrer"
                class="inline-block mt-4 px-6 py-2 border border-green-400 text-green-400 rounded-full hover:bg-green-400 hover:text-black hover:scale-105 transition"
            >
                "Download Resume"
            </a>
        </div>
    }
}

#[component]
fn About(theme: Memo<Theme>) -> impl IntoView {
    view! {
        <section
            id="about"
            class=move || format!("{} p-6 mb-10 rounded-lg shadow-md", theme.get().bundle().section)
        >
            <h2 class="text-2xl font-semibold mb-4 text-green-400">"About Me"</h2>
            <p class=move || format!("{} text-sm leading-6", theme.get().bundle().subtext)>
                "I am a passionate QA Automation Engineer with over 7 years of experience in software testing and automation. "
                "Currently pursuing a Master's in Data Science in the UK, I enjoy blending testing expertise with data analytics and automation skills to create scalable and intelligent systems. "
                "I thrive in fast-paced environments and am always looking to solve problems creatively with clean code and meaningful insights."
            </p>
        </section>
    }
}
