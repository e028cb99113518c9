use dioxus::prelude::*;

use crate::vm::LessonRowVm;

/// Syllabus with a shortcut back to the first lesson.
#[component]
pub fn CatalogInfo(rows: Vec<LessonRowVm>, on_start: EventHandler<()>) -> Element {
    rsx! {
        div { class: "panel catalog-info",
            div { class: "panel-title", "Temario" }
            ol { class: "muted",
                for row in rows {
                    li { key: "{row.id}",
                        "{row.title} "
                        small { class: "muted", "({row.duration})" }
                    }
                }
            }
            button {
                class: "primary",
                r#type: "button",
                onclick: move |_| on_start.call(()),
                "Comenzar desde el inicio"
            }
        }
    }
}

#[component]
pub fn AboutPanel() -> Element {
    rsx! {
        div { class: "panel about",
            div { class: "panel-title", "Acerca del curso" }
            p { class: "muted",
                "Aprende fundamentos, tipografía, color y composición con ejemplos prácticos y un reto final para tu portafolio."
            }
        }
    }
}
