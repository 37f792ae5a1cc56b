use dioxus::prelude::*;
use dioxus_primitives::dialog;

pub use dioxus_primitives::dialog::{DialogDescription, DialogTitle};

use crate::icons::FaXmark;
use crate::Icon;

/// Modal dialog that is open for as long as it is mounted. Escape, a click on
/// the backdrop and the corner button all call `on_close`.
///
/// Clicks never propagate past the dialog, so it can live inside a clickable
/// card.
#[component]
pub fn Dialog(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "dialog-layer",
            onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
            dialog::DialogRoot {
                class: "dialog-backdrop",
                open: Some(true),
                on_open_change: move |open: bool| {
                    if !open {
                        on_close.call(());
                    }
                },
                dialog::DialogContent {
                    class: "dialog",
                    button {
                        class: "dialog-close",
                        r#type: "button",
                        "aria-label": "Close",
                        onclick: move |_| on_close.call(()),
                        Icon { icon: FaXmark, width: 16, height: 16 }
                    }
                    {children}
                }
            }
        }
    }
}
