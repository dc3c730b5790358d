//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` is the only place shared state is created: the auth session starts
//! in the loading state and is settled by a single `/api/auth/me` lookup on
//! hydrate. Preferences live here too, bound to whichever user is signed in,
//! so pending settings writes outlive the page that made them. Pages read
//! both through `expect_context`.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_host::ToastHost;
use crate::pages::{about::AboutPage, auth::AuthPage, editor::EditorPage, profile::ProfilePage, settings::SettingsPage};
use crate::state::auth::AuthState;
use crate::state::preferences::PreferencesState;
use crate::state::toast::ToastState;
use crate::util::auth::refresh_session;
use crate::util::preferences::install_preferences_sync;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::loading());
    let toasts = RwSignal::new(ToastState::default());
    let prefs = RwSignal::new(PreferencesState::default());

    provide_context(auth);
    provide_context(toasts);
    provide_context(prefs);

    refresh_session(auth);
    install_preferences_sync(auth, prefs);

    view! {
        <Stylesheet id="leptos" href="/pkg/imagepro.css"/>
        <Title text="ImagePro"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=AboutPage/>
                <Route path=StaticSegment("about") view=AboutPage/>
                <Route path=StaticSegment("auth") view=AuthPage/>
                <Route path=StaticSegment("editor") view=EditorPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
                <Route path=StaticSegment("settings") view=SettingsPage/>
            </Routes>
        </Router>
        <ToastHost/>
    }
}
