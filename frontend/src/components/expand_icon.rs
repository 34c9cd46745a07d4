use accordion_shared::motion::icon_stroke_style;
use leptos::*;

/// Plus glyph whose vertical stroke rotates flat while the panel is open.
#[component]
pub fn ExpandIcon(#[prop(into)] expanded: Signal<bool>) -> impl IntoView {
    view! {
        <svg
            class="expand-icon"
            width="32"
            height="32"
            viewBox="0 0 24 24"
            aria-hidden="true"
        >
            <line x1="5" y1="12" x2="19" y2="12" stroke="currentColor" stroke-width="1.5" />
            <line
                x1="12"
                y1="5"
                x2="12"
                y2="19"
                stroke="currentColor"
                stroke-width="1.5"
                style=move || icon_stroke_style(expanded.get())
            />
        </svg>
    }
}
