use accordion_shared::motion::{body_style, BodyPhase};
use accordion_shared::{panel_dom_id, AccordionController, AccordionError};
use leptos::*;

/// Reactive handle over one accordion's expansion state.
///
/// Each rendered accordion owns its own handle, so two accordions on the
/// same page expand independently.
#[derive(Clone, Copy)]
pub struct AccordionHandle {
    controller: RwSignal<AccordionController>,
}

impl AccordionHandle {
    pub fn new(panel_count: usize) -> Self {
        Self {
            controller: create_rw_signal(AccordionController::new(panel_count)),
        }
    }

    /// Toggle one panel. Subscribers are only notified when the index is
    /// accepted.
    pub fn toggle(&self, index: usize) -> Result<bool, AccordionError> {
        let mut controller = self.controller.get_untracked();
        let expanded = controller.toggle(index)?;
        self.controller.set(controller);
        Ok(expanded)
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.controller.with(|controller| {
            controller.is_expanded(index).unwrap_or_else(|e| {
                log::error!("Rendering unknown panel: {}", e);
                false
            })
        })
    }

    pub fn expanded_signal(self, index: usize) -> Signal<bool> {
        Signal::derive(move || self.is_expanded(index))
    }
}

/// Title and subtitle above the rows, followed by a rule.
#[component]
pub fn AccordionHeading(
    #[prop(into)] subtitle: String,
    #[prop(optional)] heading_ref: Option<NodeRef<html::Div>>,
    children: Children,
) -> impl IntoView {
    let heading_ref = heading_ref.unwrap_or_else(create_node_ref::<html::Div>);

    view! {
        <div class="accordion-heading" node_ref=heading_ref>
            <h1 class="accordion-title">{children()}</h1>
            <span class="accordion-subtitle">{subtitle}</span>
        </div>
        <hr class="accordion-divider" />
    }
}

/// Clickable header of one panel. Clicking toggles the panel.
#[component]
pub fn PanelHeader(index: usize, handle: AccordionHandle, children: Children) -> impl IntoView {
    view! {
        <div
            class="accordion-header"
            aria-expanded=move || handle.is_expanded(index).to_string()
            aria-controls=panel_dom_id(index)
            on:click=move |_| {
                handle.toggle(index).ok();
            }
        >
            {children()}
        </div>
    }
}

/// Body region of one panel; height and opacity follow `expanded`.
///
/// An open body rests at `height: auto` so it keeps fitting its text when
/// the layout reflows. Pixel heights are only used while a transition runs.
#[component]
pub fn PanelBody(
    index: usize,
    #[prop(into)] body: String,
    #[prop(into)] expanded: Signal<bool>,
) -> impl IntoView {
    let content_ref = create_node_ref::<html::Div>();
    let phase = create_rw_signal(BodyPhase::settled(expanded.get_untracked()));

    create_effect(move |_| {
        let open = expanded.get();
        let current = phase.get_untracked();
        let next = current.on_toggle(open);
        if next == current {
            return;
        }
        phase.set(next);
        if next == BodyPhase::Closing {
            // one frame to commit the pinned height, one to release it
            request_animation_frame(move || {
                request_animation_frame(move || phase.update(|p| *p = p.on_frame()));
            });
        }
    });

    let on_transition_end = move |ev: web_sys::TransitionEvent| {
        if ev.property_name() == "height" {
            phase.update(|p| *p = p.on_transition_end());
        }
    };

    let style = move || {
        let measured = content_ref.get().map(|content| content.scroll_height());
        body_style(phase.get(), measured)
    };

    view! {
        <div
            id=panel_dom_id(index)
            class="accordion-body"
            style=style
            on:transitionend=on_transition_end
        >
            <div class="accordion-body-content" node_ref=content_ref>
                <p>{body}</p>
            </div>
        </div>
    }
}
