use course_core::model::LessonId;
use dioxus::prelude::*;

use crate::vm::{LessonDetailVm, LessonRowVm};

#[component]
pub fn LessonList(rows: Vec<LessonRowVm>, on_open: EventHandler<LessonId>) -> Element {
    rsx! {
        div { class: "lessons", id: "lessonsList",
            if rows.is_empty() {
                p { class: "muted", "No hay lecciones." }
            }
            for row in rows {
                LessonRow { key: "{row.id}", row: row.clone(), on_open }
            }
        }
    }
}

#[component]
fn LessonRow(row: LessonRowVm, on_open: EventHandler<LessonId>) -> Element {
    let id = row.id;
    let class = if row.completed {
        "lesson lesson--done"
    } else {
        "lesson"
    };

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            onclick: move |_| on_open.call(id),
            div { class: "thumb", "aria-hidden": "true", "{row.thumb}" }
            div { class: "meta",
                div { class: "name", "{row.title}" }
                div { class: "desc", "{row.description}" }
            }
            div { class: "time", "{row.duration}" }
        }
    }
}

#[component]
pub fn LessonDetail(
    lesson: LessonDetailVm,
    syncing: bool,
    on_back: EventHandler<()>,
    on_sync: EventHandler<LessonId>,
) -> Element {
    let id = lesson.id;
    let status_class = if lesson.completed {
        "lesson-status lesson-status--done"
    } else {
        "lesson-status"
    };

    rsx! {
        div { class: "lesson-detail",
            div { class: "detail-top",
                button {
                    class: "ghost",
                    r#type: "button",
                    onclick: move |_| on_back.call(()),
                    "Atrás"
                }
                div { class: "detail-title", "{lesson.title}" }
            }
            div { class: "detail-hero",
                div { class: "detail-thumb", "{id}" }
                div { class: "detail-meta",
                    div { class: "name", "{lesson.title}" }
                    div { class: "desc", "{lesson.description}" }
                    div { class: "time", "{lesson.duration}" }
                }
            }
            div { class: "detail-status",
                div { class: "detail-label", "Estado" }
                div { class: "{status_class}", id: "lessonStatus", "{lesson.status_label}" }
            }
            div { class: "detail-actions",
                button {
                    class: "primary",
                    r#type: "button",
                    disabled: syncing,
                    onclick: move |_| on_sync.call(id),
                    if syncing {
                        "Sincronizando..."
                    } else {
                        "Sincronizar estado"
                    }
                }
            }
            div { class: "detail-content muted",
                strong { "Contenido:" }
                ul {
                    li { "Teoría clave" }
                    li { "Ejemplos visuales" }
                    li { "Ejercicio práctico" }
                }
            }
        }
    }
}
