use dioxus::prelude::*;

use crate::vm::OverviewVm;

#[component]
pub fn ProgressOverviewBar(overview: OverviewVm) -> Element {
    rsx! {
        div { class: "progress-overview",
            div {
                class: "progress-bar",
                role: "progressbar",
                "aria-valuemin": "0",
                "aria-valuemax": "100",
                "aria-valuenow": "{overview.percent}",
                span { style: "width: {overview.bar_width}" }
            }
            div { class: "progress-text", "{overview.label}" }
            div { class: "progress-meta muted", "{overview.done_label}" }
            if let Some(label) = overview.synced_label.as_ref() {
                div { class: "progress-synced muted", "{label}" }
            }
        }
    }
}
