use dioxus::prelude::*;

use crate::context::AppContext;
use crate::splash::{SplashOverlay, use_splash};
use crate::theme::Theme;
use crate::views::{CourseView, use_lesson_syncs};

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let mut theme = use_signal(Theme::default);
    let splash = use_splash(ctx.splash_duration());
    let lesson_syncs = use_lesson_syncs();
    use_context_provider(|| lesson_syncs);

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Curso de Diseño" }

        div { class: "app-root", "data-theme": theme().attr(),
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Algo salió mal" }
                        pre { "{errors:?}" }
                    }
                },
                if splash().is_shown() {
                    SplashOverlay { phase: splash }
                } else {
                    div { class: "app",
                        button {
                            class: "ghost theme-toggle",
                            r#type: "button",
                            "aria-label": "Cambiar tema",
                            onclick: move |_| theme.set(theme().toggled()),
                            "Tema"
                        }
                        CourseView {}
                    }
                }
            }
        }
    }
}
