//! Right pane of the editor: narrow icon toolbar.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::editor::ToolbarAction;

fn glyph(action: ToolbarAction) -> &'static str {
    match action {
        ToolbarAction::Home => "⌂",
        ToolbarAction::About => "i",
        ToolbarAction::QuickActions => "⚡",
        ToolbarAction::Profile => "◉",
        ToolbarAction::Settings => "⚙",
        ToolbarAction::Help => "?",
    }
}

#[component]
pub fn MiniToolbar() -> impl IntoView {
    let navigate = use_navigate();

    let items = ToolbarAction::ALL
        .into_iter()
        .map(|action| {
            let navigate = navigate.clone();
            let on_click = move |_| {
                log::info!("toolbar action: {}", action.key());
                if let Some(route) = action.route() {
                    navigate(route, NavigateOptions::default());
                }
            };
            view! {
                <button class="mini-toolbar__item" title=action.label() aria-label=action.label() on:click=on_click>
                    {glyph(action)}
                </button>
            }
        })
        .collect_view();

    view! {
        <aside class="mini-toolbar">
            <span class="brand-mark"></span>
            <div class="mini-toolbar__items">{items}</div>
            <span class="mini-toolbar__status"></span>
        </aside>
    }
}
