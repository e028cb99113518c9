use course_core::model::LessonId;
use dioxus::prelude::*;

use crate::context::AppContext;
use crate::screen::Screen;
use crate::views::{
    AboutPanel, CatalogInfo, LessonDetail, LessonList, LessonSyncs, ProgressOverviewBar,
    use_catalog_revision,
};
use crate::vm::{LessonDetailVm, OverviewVm, map_lesson_rows};

/// Course shell: header actions, progress overview and the active screen.
///
/// Renders whatever progress the store holds (zero before the first sync),
/// starts the launch sync once, and re-renders on every store revision.
/// Lesson syncs are spawned here rather than in the detail panel so they
/// still land in the catalog after the panel closes. Which lessons are in
/// flight comes from the [`LessonSyncs`] the app root provides.
#[component]
pub fn CourseView(#[props(default)] initial: Screen) -> Element {
    let ctx = use_context::<AppContext>();
    let revision = use_catalog_revision(&ctx);
    let mut screen = use_signal(move || initial);
    let lesson_syncs = use_context::<LessonSyncs>();

    let launch = ctx.clone();
    use_hook(move || {
        if launch.take_sync_on_launch() {
            let sync = launch.progress_sync();
            spawn(async move {
                sync.sync_all().await;
            });
        }
    });

    // Subscribe to store changes.
    let _ = revision();

    let catalog = ctx.catalog();
    let lessons = catalog.lessons();
    let rows = map_lesson_rows(&lessons);
    let overview = OverviewVm::new(catalog.overview(), catalog.last_synced_at());
    let resume_target = catalog.next_incomplete().map(|lesson| lesson.id());
    let first_lesson = lessons.first().map(|lesson| lesson.id());
    let sync = ctx.progress_sync();

    rsx! {
        div { class: "course",
            header { class: "course-header",
                div { class: "course-heading",
                    h1 { "Curso de Diseño" }
                    p { class: "muted", "{lessons.len()} lecciones" }
                }
                nav { class: "course-actions",
                    button {
                        class: "primary",
                        r#type: "button",
                        onclick: move |_| {
                            if let Some(id) = resume_target {
                                screen.set(screen().open_lesson(id));
                            }
                        },
                        "Continuar"
                    }
                    button {
                        class: "ghost",
                        r#type: "button",
                        onclick: move |_| screen.set(screen().show_catalog_info()),
                        "Temario"
                    }
                    button {
                        class: "ghost",
                        r#type: "button",
                        onclick: move |_| screen.set(screen().toggle_about()),
                        "Info"
                    }
                }
            }

            ProgressOverviewBar { overview }

            section { class: "course-body",
                match screen() {
                    Screen::List => rsx! {
                        LessonList {
                            rows: rows.clone(),
                            on_open: move |id: LessonId| screen.set(screen().open_lesson(id)),
                        }
                    },
                    Screen::Detail(id) => match lessons.iter().find(|lesson| lesson.id() == id) {
                        Some(lesson) => rsx! {
                            LessonDetail {
                                lesson: LessonDetailVm::from(lesson),
                                syncing: lesson_syncs.is_syncing(id),
                                on_back: move |_| screen.set(screen().back()),
                                on_sync: move |id: LessonId| lesson_syncs.start(sync.clone(), id),
                            }
                        },
                        None => rsx! {
                            p { class: "muted", "Lección no encontrada." }
                            button {
                                class: "ghost",
                                r#type: "button",
                                onclick: move |_| screen.set(screen().back()),
                                "Atrás"
                            }
                        },
                    },
                    Screen::CatalogInfo => rsx! {
                        CatalogInfo {
                            rows: rows.clone(),
                            on_start: move |_| {
                                if let Some(id) = first_lesson {
                                    screen.set(screen().open_lesson(id));
                                }
                            },
                        }
                    },
                    Screen::About => rsx! {
                        AboutPanel {}
                    },
                }
            }
        }
    }
}
