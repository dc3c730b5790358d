//! Landing page, served at `/` and `/about`.

use leptos::prelude::*;

use crate::state::auth::AuthState;

const FEATURES: &[(&str, &str)] = &[
    ("Advanced Editing", "Professional-grade image editing tools with AI-powered enhancements and filters."),
    ("Lightning Fast", "Optimized performance with real-time processing and instant preview capabilities."),
    ("Team Collaboration", "Share projects, collaborate with team members, and manage workflows seamlessly."),
];

const HIGHLIGHTS: &[&str] = &[
    "AI-powered image enhancement",
    "Real-time collaborative editing",
    "Cloud-based project management",
    "Professional-grade output quality",
];

#[component]
pub fn AboutPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let signed_in = move || auth.get().user.is_some();

    view! {
        <div class="page">
            <nav class="nav-bar">
                <div class="nav-bar__brand">
                    <span class="brand-mark"></span>
                    <span class="nav-bar__name nav-bar__name--large">"ImagePro"</span>
                </div>
                <div class="nav-bar__actions">
                    <Show
                        when=signed_in
                        fallback=|| view! { <a href="/auth" class="btn btn--primary">"Get Started"</a> }
                    >
                        <a href="/profile" class="btn btn--ghost">"Profile"</a>
                        <a href="/settings" class="btn btn--ghost">"Settings"</a>
                        <a href="/editor" class="btn btn--primary">"Image Editor"</a>
                    </Show>
                </div>
            </nav>

            <main class="container">
                <section class="hero">
                    <h1 class="hero__title">"ImagePro"</h1>
                    <p class="hero__lead">
                        "Professional AI-powered image processing and editing platform designed for modern creators. "
                        "Transform your visuals with cutting-edge technology and intuitive design."
                    </p>
                </section>

                <section class="grid grid--3">
                    {FEATURES
                        .iter()
                        .map(|(title, body)| view! {
                            <div class="card">
                                <h3 class="card__title">{*title}</h3>
                                <p class="muted">{*body}</p>
                            </div>
                        })
                        .collect_view()}
                </section>

                <section class="grid grid--2">
                    <div>
                        <h2>"Built for Professionals"</h2>
                        <p class="muted">
                            "ImagePro combines the power of artificial intelligence with professional image editing tools "
                            "to create the ultimate creative platform."
                        </p>
                        <ul class="highlights">
                            {HIGHLIGHTS.iter().map(|h| view! { <li>{*h}</li> }).collect_view()}
                        </ul>
                    </div>
                    <div class="card card--cta">
                        <h2 class="card__title">"Ready to Get Started?"</h2>
                        <p class="muted">"Join thousands of creators using ImagePro to transform their workflows."</p>
                        <Show
                            when=signed_in
                            fallback=|| view! { <a href="/auth" class="btn btn--primary btn--block">"Create Free Account"</a> }
                        >
                            <a href="/editor" class="btn btn--primary btn--block">"Open Image Editor"</a>
                            <a href="/profile" class="btn btn--outline btn--block">"View Profile"</a>
                        </Show>
                    </div>
                </section>
            </main>

            <footer class="footer">
                <span class="nav-bar__name">"ImagePro"</span>
                <p class="muted">"© 2026 ImagePro."</p>
            </footer>
        </div>
    }
}
