use accordion_shared::hover::{label_style, underline_style, underline_track_style};
use accordion_shared::motion::letter_poses;
use accordion_shared::reveal::DEFAULT_THRESHOLD;
use accordion_shared::{index_label, ContentConfig, HoverState, Panel, RevealTrigger, SwapOffsets};
use leptos::*;

use crate::components::accordion::{AccordionHandle, AccordionHeading, PanelBody, PanelHeader};
use crate::components::expand_icon::ExpandIcon;
use crate::hooks::use_in_view;

/// Feed one viewport reading into the latch; returns whether the entrance
/// animation started on this reading.
fn latch_reveal(trigger: StoredValue<RevealTrigger>, revealed: RwSignal<bool>, visible: bool) -> bool {
    let fired = trigger
        .try_update_value(|trigger| trigger.observe(visible))
        .unwrap_or(false);
    if fired {
        revealed.set(true);
    }
    fired
}

/// Accordion with a staggered title entrance, hover label swap and a
/// rotating expand icon. Expansion behaves exactly like [`AccordionBasic`].
///
/// [`AccordionBasic`]: crate::components::AccordionBasic
#[component]
pub fn AccordionAnimated(content: ContentConfig) -> impl IntoView {
    let handle = AccordionHandle::new(content.panels.len());

    let heading_ref = create_node_ref::<html::Div>();
    let in_view = use_in_view(heading_ref, DEFAULT_THRESHOLD);
    let trigger = store_value(RevealTrigger::new());
    let revealed = create_rw_signal(false);

    create_effect(move |_| {
        latch_reveal(trigger, revealed, in_view.get());
    });

    let letters = letter_poses(&content.title, false)
        .into_iter()
        .zip(letter_poses(&content.title, true))
        .map(|(hidden, shown)| {
            view! {
                <span
                    class="accordion-letter"
                    style=move || {
                        if revealed.get() { shown.style() } else { hidden.style() }
                    }
                >
                    {shown.glyph.to_string()}
                </span>
            }
        })
        .collect_view();

    let rows = content
        .panels
        .iter()
        .cloned()
        .enumerate()
        .map(|(index, panel)| view! { <AnimatedRow index=index panel=panel handle=handle /> })
        .collect_view();

    view! {
        <section class="accordion accordion-animated">
            <div class="accordion-container">
                <AccordionHeading subtitle=content.subtitle heading_ref=heading_ref>
                    {letters}
                </AccordionHeading>
                <div class="accordion-rows">{rows}</div>
            </div>
        </section>
    }
}

#[component]
fn AnimatedRow(index: usize, panel: Panel, handle: AccordionHandle) -> impl IntoView {
    let hover = create_rw_signal(HoverState::Rest);
    let offsets = move || SwapOffsets::for_state(hover.get());

    let Panel { title, body } = panel;
    let hidden_title = title.clone();
    let label = index_label(index);
    let hidden_label = label.clone();

    view! {
        <div
            class="accordion-row accordion-row-animated"
            on:mouseenter=move |_| hover.update(|state| state.enter())
            on:mouseleave=move |_| hover.update(|state| state.leave())
        >
            <PanelHeader index=index handle=handle>
                <div class="accordion-labels">
                    <div class="accordion-swap">
                        <span class="accordion-index" style=move || label_style(offsets().index)>
                            {label}
                        </span>
                        <span
                            class="accordion-index accordion-swap-hidden"
                            aria-hidden="true"
                            style=move || label_style(offsets().hidden_index)
                        >
                            {hidden_label}
                        </span>
                    </div>
                    <div class="accordion-swap">
                        <span class="accordion-panel-title" style=move || label_style(offsets().title)>
                            {title}
                        </span>
                        <span
                            class="accordion-panel-title accordion-swap-hidden"
                            aria-hidden="true"
                            style=move || label_style(offsets().hidden_title)
                        >
                            {hidden_title}
                        </span>
                    </div>
                </div>
                <ExpandIcon expanded=handle.expanded_signal(index) />
            </PanelHeader>
            <PanelBody index=index body=body expanded=handle.expanded_signal(index) />
            <div class="accordion-underline" style=move || underline_track_style(hover.get())>
                <div class="accordion-underline-bar" style=move || underline_style(hover.get())></div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_reveal_starts_once_despite_flicker() {
        let runtime = create_runtime();
        let trigger = store_value(RevealTrigger::new());
        let revealed = create_rw_signal(false);

        let readings = [false, true, false, true, false, true];
        let starts = readings
            .iter()
            .filter(|&&visible| latch_reveal(trigger, revealed, visible))
            .count();

        assert_eq!(starts, 1);
        assert!(revealed.get());

        runtime.dispose();
    }

    #[wasm_bindgen_test]
    fn test_reveal_waits_for_viewport() {
        let runtime = create_runtime();
        let trigger = store_value(RevealTrigger::new());
        let revealed = create_rw_signal(false);

        assert!(!latch_reveal(trigger, revealed, false));
        assert!(!revealed.get());

        runtime.dispose();
    }
}
