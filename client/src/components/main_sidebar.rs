//! Left pane of the editor: brand header, collapsible tool sections, quick actions.
//!
//! DESIGN
//! ======
//! Sections and tools are static data from `state::editor`; selecting a tool
//! only highlights it.

use leptos::prelude::*;

use crate::state::editor::{EditorState, TOOL_SECTIONS, ToolSection};

fn section_class(active: bool) -> &'static str {
    if active { "sidebar-section sidebar-section--active" } else { "sidebar-section" }
}

fn tool_class(active: bool) -> &'static str {
    if active { "sidebar-tool sidebar-tool--active" } else { "sidebar-tool" }
}

#[component]
pub fn MainSidebar() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();

    let render_section = move |section: &'static ToolSection| {
        let title = section.title;
        let is_open = move || editor.get().active_section == Some(title);
        let tools = section
            .tools
            .iter()
            .copied()
            .map(|tool| {
                let is_active = move || editor.get().active_tool == Some(tool);
                view! {
                    <button
                        class=move || tool_class(is_active())
                        on:click=move |_| editor.update(|e| e.select_tool(tool))
                    >
                        {tool}
                    </button>
                }
            })
            .collect_view();

        view! {
            <div>
                <button
                    class=move || section_class(is_open())
                    on:click=move |_| editor.update(|e| e.toggle_section(title))
                >
                    {title}
                </button>
                <div class="sidebar-section__tools" class:hidden=move || !is_open()>
                    {tools}
                </div>
            </div>
        }
    };

    view! {
        <aside class="main-sidebar">
            <header class="main-sidebar__header">
                <span class="brand-mark brand-mark--large"></span>
                <div>
                    <h1 class="main-sidebar__title">"ImagePro"</h1>
                    <p class="muted">"Real-time Processing"</p>
                </div>
            </header>
            <div class="main-sidebar__sections">
                {TOOL_SECTIONS.iter().map(render_section).collect_view()}
            </div>
            <footer class="main-sidebar__actions">
                <button class="btn btn--primary btn--block" on:click=move |_| editor.update(EditorState::load_placeholder_image)>
                    "Upload New Image"
                </button>
                <button class="btn btn--outline btn--block">"AI Quick Fix"</button>
            </footer>
        </aside>
    }
}
