//! Editor workspace: sidebar, canvas placeholder, mini toolbar.

use leptos::prelude::*;

use crate::components::auth_gate::AuthGate;
use crate::components::image_canvas::ImageCanvas;
use crate::components::main_sidebar::MainSidebar;
use crate::components::mini_toolbar::MiniToolbar;
use crate::state::editor::EditorState;

#[component]
pub fn EditorPage() -> impl IntoView {
    view! {
        <AuthGate loading_label="Loading editor...">
            <EditorLayout/>
        </AuthGate>
    }
}

#[component]
fn EditorLayout() -> impl IntoView {
    provide_context(RwSignal::new(EditorState::default()));

    view! {
        <div class="editor-layout">
            <div class="editor-layout__sidebar">
                <MainSidebar/>
            </div>
            <ImageCanvas/>
            <MiniToolbar/>
        </div>
    }
}
