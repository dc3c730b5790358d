//! Center pane of the editor: upload prompt or the placeholder frame with zoom controls.

use leptos::prelude::*;

use crate::state::editor::EditorState;

#[component]
pub fn ImageCanvas() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();

    let has_image = move || editor.get().has_image;
    let frame_style = move || {
        let (w, h) = editor.get().frame_size();
        format!("width: {w}px; height: {h}px;")
    };

    view! {
        <section class="image-canvas">
            <header class="image-canvas__header">
                <div class="image-canvas__heading">
                    <h2>"Canvas"</h2>
                    <Show when=has_image>
                        <span class="muted">{move || editor.get().header_caption()}</span>
                    </Show>
                </div>
                <Show when=has_image>
                    <div class="image-canvas__controls">
                        <button class="btn btn--ghost" title="Zoom out" on:click=move |_| editor.update(EditorState::zoom_out)>
                            "−"
                        </button>
                        <button class="btn btn--ghost" title="Zoom in" on:click=move |_| editor.update(EditorState::zoom_in)>
                            "+"
                        </button>
                        <button class="btn btn--ghost" title="Rotate">"⟳"</button>
                        <button class="btn btn--ghost" title="Fit">"⤢"</button>
                    </div>
                </Show>
            </header>
            <div class="image-canvas__stage">
                <Show
                    when=has_image
                    fallback=move || view! {
                        <div class="upload-card">
                            <div class="upload-card__icon">"⇪"</div>
                            <h3>"Upload an Image"</h3>
                            <p class="muted">
                                "Drag and drop your image here, or click the button below to start processing"
                            </p>
                            <button class="btn btn--primary" on:click=move |_| editor.update(EditorState::load_placeholder_image)>
                                "Choose Image"
                            </button>
                        </div>
                    }
                >
                    <div class="sample-frame" style=frame_style>
                        <div class="sample-frame__inner">
                            <div class="sample-frame__glyph">"🎨"</div>
                            <div>"Sample Image"</div>
                        </div>
                    </div>
                </Show>
            </div>
        </section>
    }
}
