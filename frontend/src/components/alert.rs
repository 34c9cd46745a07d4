use leptos::*;

/// Error banner shown in place of a section that could not be rendered.
#[component]
pub fn Alert(children: Children) -> impl IntoView {
    view! {
        <div class="alert alert-error" role="alert">
            {children()}
        </div>
    }
}
