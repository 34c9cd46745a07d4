use accordion_shared::ContentConfig;
use leptos::*;

use crate::components::alert::Alert;
use crate::components::{AccordionAnimated, AccordionBasic};

#[component]
pub fn App() -> impl IntoView {
    match ContentConfig::bundled() {
        Ok(content) => {
            log::info!(
                "Mounting accordions with {} panels",
                content.panels.len()
            );
            view! {
                <main>
                    <AccordionBasic content=content.clone() />
                    <AccordionAnimated content=content />
                </main>
            }
            .into_view()
        }
        Err(e) => {
            log::error!("Failed to load accordion content: {}", e);
            let message = format!("Content could not be loaded: {}", e);
            view! {
                <main>
                    <Alert>{message}</Alert>
                </main>
            }
            .into_view()
        }
    }
}
