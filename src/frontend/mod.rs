mod contact;
mod effects;
mod lang_menu;
mod notify;
mod translate;

use web_sys::{
    window, Document, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    Storage,
};
use yew::prelude::*;

use crate::language::{Lang, LANGUAGE_STORAGE_KEY};
use crate::theme::{Theme, DARK_MODE_CLASS, DARK_MODE_CSS, DARK_MODE_STYLE_ID};
use contact::ContactForm;
use lang_menu::LanguageMenu;

const NAV_SECTIONS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

const SKILLS: [&str; 8] = [
    "Rust",
    "WebAssembly",
    "TypeScript",
    "React",
    "PostgreSQL",
    "Docker",
    "Linux",
    "Accessibility",
];

const PROJECTS: [(&str, &str, &str); 3] = [
    (
        "Atlas Notes",
        "Offline-first note keeper with conflict-free sync across devices.",
        "Rust · WebAssembly · IndexedDB",
    ),
    (
        "Souk Tracker",
        "Price history dashboard for local marketplaces, updated nightly.",
        "TypeScript · React · PostgreSQL",
    ),
    (
        "Caravane",
        "Trip planner that stitches regional bus timetables into one route.",
        "Rust · Axum · Leaflet",
    ),
];

const TESTIMONIALS: [(&str, &str); 3] = [
    (
        "Sami rebuilt our storefront and cut page load times in half.",
        "Lina M., shop owner",
    ),
    (
        "Clear communication, careful reviews, and the site simply works.",
        "Karim B., agency lead",
    ),
    (
        "The accessibility pass alone was worth the engagement.",
        "Nora T., product manager",
    ),
];

fn document() -> Option<Document> {
    window()?.document()
}

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

fn session_storage() -> Option<Storage> {
    window()?.session_storage().ok().flatten()
}

fn stored_language() -> Option<Lang> {
    let value = local_storage()?
        .get_item(LANGUAGE_STORAGE_KEY)
        .ok()
        .flatten()?;
    Lang::from_code(&value)
}

fn persist_language(lang: Lang) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(LANGUAGE_STORAGE_KEY, lang.code());
    }
}

// Unresolved targets are a silent no-op.
fn scroll_to_section(id: &str) {
    let Some(target) = document().and_then(|doc| doc.get_element_by_id(id)) else {
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

fn inject_stylesheet_once(document: &Document, id: &str, css: &str) {
    if document.get_element_by_id(id).is_some() {
        return;
    }

    let Ok(style) = document.create_element("style") else {
        return;
    };
    style.set_id(id);
    style.set_text_content(Some(css));

    if let Some(head) = document.head() {
        let _ = head.append_child(&style);
    }
}

fn apply_theme(theme: Theme) {
    let Some(document) = document() else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };

    let _ = match theme {
        Theme::Dark => body.class_list().add_1(DARK_MODE_CLASS),
        Theme::Light => body.class_list().remove_1(DARK_MODE_CLASS),
    };

    inject_stylesheet_once(&document, DARK_MODE_STYLE_ID, DARK_MODE_CSS);
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    title: AttrValue,
    summary: AttrValue,
    stack: AttrValue,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let (onmouseenter, onmouseleave) = effects::hover_lift(effects::PROJECT_LIFT);

    html! {
        <article class="project-card" {onmouseenter} {onmouseleave}>
            <h3>{props.title.clone()}</h3>
            <p>{props.summary.clone()}</p>
            <p class="project-stack">{props.stack.clone()}</p>
        </article>
    }
}

#[derive(Properties, PartialEq)]
struct TestimonialCardProps {
    quote: AttrValue,
    author: AttrValue,
}

#[function_component(TestimonialCard)]
fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let (onmouseenter, onmouseleave) = effects::hover_lift(effects::CARD_LIFT);

    html! {
        <figure class="testimonial-card" {onmouseenter} {onmouseleave}>
            <blockquote>{props.quote.clone()}</blockquote>
            <figcaption>{props.author.clone()}</figcaption>
        </figure>
    }
}

#[function_component(App)]
fn app() -> Html {
    let menu_open = use_state(|| false);
    let theme = use_state(|| Theme::Light);
    let hero_section = use_node_ref();
    let hero_heading = use_node_ref();

    {
        let hero_section = hero_section.clone();
        let hero_heading = hero_heading.clone();
        use_effect_with((), move |_| {
            effects::reveal_page();
            effects::start_typing_intro(&hero_heading);
            effects::start_parallax(&hero_section);
            effects::start_bounce_watcher();
            effects::start_fade_watcher();
            || ()
        });
    }

    let on_menu_toggle = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };

    let on_theme_toggle = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = (*theme).toggled();
            apply_theme(next);
            theme.set(next);
        })
    };

    let anchor_link = |id: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            menu_open.set(false);
            scroll_to_section(id);
        })
    };

    let (about_enter, about_leave) = effects::hover_lift(effects::CARD_LIFT);

    html! {
        <>
            <nav class="navbar" aria-label="Primary">
                <a class="brand" href="#home" onclick={anchor_link("home")}>{"Sami Benali"}</a>
                <button
                    id="menu-icon"
                    class="menu-icon"
                    type="button"
                    aria-label="Toggle navigation"
                    onclick={on_menu_toggle}
                >
                    {"☰"}
                </button>
                <ul class={classes!("nav-links", (*menu_open).then_some("active"))}>
                    { for NAV_SECTIONS.iter().copied().map(|(id, label)| html! {
                        <li><a href={format!("#{id}")} onclick={anchor_link(id)}>{label}</a></li>
                    }) }
                    <li><LanguageMenu /></li>
                </ul>
            </nav>

            <main>
                <section id="home" class="hero" ref={hero_section}>
                    <h1 ref={hero_heading}>{"Hi, I'm Sami. I build for the web."}</h1>
                    <p class="hero-tagline">
                        {"Full-stack developer crafting fast, accessible sites from Marseille."}
                    </p>
                    <a class="cta" href="#projects" onclick={anchor_link("projects")}>
                        {"View my work"}
                    </a>
                </section>

                <section id="about" class="section" aria-labelledby="about-heading">
                    <h2 id="about-heading">{"About"}</h2>
                    <div class="card-grid">
                        <div class="card" onmouseenter={about_enter.clone()} onmouseleave={about_leave.clone()}>
                            <h3>{"Eight years shipping"}</h3>
                            <p>{"From marketplace backends to design systems, always end to end."}</p>
                        </div>
                        <div class="card" onmouseenter={about_enter.clone()} onmouseleave={about_leave.clone()}>
                            <h3>{"Performance first"}</h3>
                            <p>{"Budgets in CI, measured on mid-range phones, not laptops."}</p>
                        </div>
                        <div class="card" onmouseenter={about_enter} onmouseleave={about_leave}>
                            <h3>{"Three languages"}</h3>
                            <p>{"Working across English, French, and Arabic teams and content."}</p>
                        </div>
                    </div>
                </section>

                <section id="skills" class="section" aria-labelledby="skills-heading">
                    <h2 id="skills-heading">{"Skills"}</h2>
                    <ul class="skill-grid">
                        { for SKILLS.iter().map(|skill| html! {
                            <li class="skill">{*skill}</li>
                        }) }
                    </ul>
                </section>

                <section id="projects" class="section" aria-labelledby="projects-heading">
                    <h2 id="projects-heading">{"Projects"}</h2>
                    <div class="card-grid">
                        { for PROJECTS.iter().copied().map(|(title, summary, stack)| html! {
                            <ProjectCard {title} {summary} {stack} />
                        }) }
                    </div>
                </section>

                <section class="section" aria-labelledby="testimonials-heading">
                    <h2 id="testimonials-heading">{"Kind words"}</h2>
                    <div class="card-grid">
                        { for TESTIMONIALS.iter().copied().map(|(quote, author)| html! {
                            <TestimonialCard {quote} {author} />
                        }) }
                    </div>
                </section>

                <section id="contact" class="section" aria-labelledby="contact-heading">
                    <h2 id="contact-heading">{"Contact"}</h2>
                    <ContactForm />
                </section>
            </main>

            <footer class="footer">
                <p>{"© 2025 Sami Benali"}</p>
            </footer>

            <button
                class="mode-toggle"
                type="button"
                aria-label={(*theme).toggle_label()}
                aria-pressed={(*theme).pressed().to_string()}
                onclick={on_theme_toggle}
            >
                <span aria-hidden="true">{(*theme).icon()}</span>
            </button>

            <div id={translate::WIDGET_CONTAINER_ID} class="translate-widget" style="display: none;"></div>
        </>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
