use crate::effects;
use web_sys::window;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
struct Skill {
    name: &'static str,
    progress: u8,
}

#[derive(Clone, PartialEq)]
struct Stat {
    label: &'static str,
    count: &'static str,
}

#[derive(Clone, PartialEq)]
struct Project {
    title: &'static str,
    summary: &'static str,
    href: &'static str,
}

const SKILLS: [Skill; 5] = [
    Skill { name: "Rust", progress: 90 },
    Skill { name: "TypeScript", progress: 85 },
    Skill { name: "Python", progress: 80 },
    Skill { name: "Flutter", progress: 70 },
    Skill { name: "SQL", progress: 75 },
];

const STATS: [Stat; 3] = [
    Stat { label: "Years of experience", count: "6" },
    Stat { label: "Shipped projects", count: "50" },
    Stat { label: "Average rating", count: "4.9" },
];

const PROJECTS: [Project; 3] = [
    Project {
        title: "Realtime Dashboard",
        summary: "Streaming metrics console with sub-second updates.",
        href: "https://github.com/",
    },
    Project {
        title: "Mobile Wallet",
        summary: "Cross-platform payments app with offline-first sync.",
        href: "https://github.com/",
    },
    Project {
        title: "Vision Pipeline",
        summary: "Image tagging service built on a custom inference stack.",
        href: "https://github.com/",
    },
];

const NAV_ITEMS: [(&str, &str); 5] = [
    ("#home", "Home"),
    ("#about", "About"),
    ("#skills", "Skills"),
    ("#projects", "Projects"),
    ("#contact", "Contact"),
];

#[function_component(Navbar)]
fn navbar() -> Html {
    html! {
        <nav class="glass-nav">
            <a class="logo" href="#home">{"<Dev />"}</a>
            <ul class="nav-links">
                { for NAV_ITEMS.iter().map(|(href, label)| html! {
                    <li><a class="nav-link" href={*href}>{*label}</a></li>
                }) }
            </ul>
            <button class="burger" type="button" aria-label="Toggle navigation">
                <span></span><span></span><span></span>
            </button>
        </nav>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section id="home" class="hero">
            <div class="hero-copy">
                <p class="eyebrow">{"Software engineer"}</p>
                <h1>{"I build "}<span class="dynamic-text"></span><span class="cursor">{"|"}</span></h1>
                <div class="hero-actions">
                    <a class="glow-btn" href="#projects">{"View work"}</a>
                    <a class="glow-btn ghost" href="#contact">{"Get in touch"}</a>
                </div>
            </div>
            <div id="codeWindow" class="code-window">
                <pre><code>{"fn main() {\n    println!(\"hello\");\n}"}</code></pre>
            </div>
        </section>
    }
}

#[function_component(About)]
fn about() -> Html {
    html! {
        <section id="about" class="about">
            <h2>{"About"}</h2>
            <p>{"Engineer focused on fast, reliable products across web and mobile."}</p>
            <div class="stats">
                { for STATS.iter().map(|stat| html! {
                    <div class="stat glass-card">
                        <span class="stat-number" data-count={stat.count}>{stat.count}</span>
                        <span class="stat-label">{stat.label}</span>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(Skills)]
fn skills() -> Html {
    html! {
        <section id="skills" class="skills">
            <h2>{"Skills"}</h2>
            <ul class="skill-list">
                { for SKILLS.iter().map(|skill| html! {
                    <li class="skill">
                        <span class="skill-name">{skill.name}</span>
                        <div class="skill-bar">
                            <div class="skill-progress" data-progress={skill.progress.to_string()}></div>
                        </div>
                    </li>
                }) }
            </ul>
        </section>
    }
}

#[function_component(Projects)]
fn projects() -> Html {
    html! {
        <section id="projects" class="projects">
            <h2>{"Projects"}</h2>
            <div class="project-grid">
                { for PROJECTS.iter().map(|project| html! {
                    <article class="glass-card" data-tilt="">
                        <h3>{project.title}</h3>
                        <p>{project.summary}</p>
                        <a class="link" href={project.href} target="_blank" rel="noopener noreferrer">
                            {"Source"}
                        </a>
                    </article>
                }) }
            </div>
        </section>
    }
}

#[function_component(Contact)]
fn contact() -> Html {
    html! {
        <section id="contact" class="contact">
            <h2>{"Contact"}</h2>
            <p>{"Open to freelance and full-time roles."}</p>
            <a class="glow-btn" href="mailto:hello@example.com">{"Say hello"}</a>
        </section>
    }
}

#[function_component(App)]
fn app() -> Html {
    use_effect_with((), move |_| {
        let installed = effects::install(effects::load_config());
        move || drop(installed)
    });

    html! {
        <>
            <div class="bg-animation" aria-hidden="true"></div>
            <div id="particles" aria-hidden="true"></div>
            <Navbar />
            <main>
                <Hero />
                <About />
                <Skills />
                <Projects />
                <Contact />
            </main>
        </>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();

    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
