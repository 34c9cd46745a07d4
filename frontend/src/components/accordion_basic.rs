use accordion_shared::{index_label, ContentConfig};
use leptos::*;

use crate::components::accordion::{AccordionHandle, AccordionHeading, PanelBody, PanelHeader};

/// Accordion without motion beyond the body height transition.
#[component]
pub fn AccordionBasic(content: ContentConfig) -> impl IntoView {
    let handle = AccordionHandle::new(content.panels.len());

    let rows = content
        .panels
        .iter()
        .enumerate()
        .map(|(index, panel)| {
            let title = panel.title.clone();
            let body = panel.body.clone();
            view! {
                <div class="accordion-row">
                    <PanelHeader index=index handle=handle>
                        <div class="accordion-labels">
                            <span class="accordion-index">{index_label(index)}</span>
                            <span class="accordion-panel-title">{title}</span>
                        </div>
                    </PanelHeader>
                    <PanelBody index=index body=body expanded=handle.expanded_signal(index) />
                </div>
            }
        })
        .collect_view();

    let ContentConfig { title, subtitle, .. } = content;

    view! {
        <section class="accordion accordion-basic">
            <div class="accordion-container">
                <AccordionHeading subtitle=subtitle>{title}</AccordionHeading>
                <div class="accordion-rows">{rows}</div>
            </div>
        </section>
    }
}
