use std::time::Duration;

use dioxus::prelude::*;

/// How long the intro overlay stays up before it starts leaving.
pub const DEFAULT_SPLASH_DURATION: Duration = Duration::from_secs(10);
/// Exit animation budget; the overlay is removed even if the animation never reports back.
pub const EXIT_FALLBACK: Duration = Duration::from_millis(700);
/// Extra time after the visible duration before the overlay is force-removed.
pub const HARD_FALLBACK_GRACE: Duration = Duration::from_secs(3);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplashPhase {
    Visible,
    Exiting,
    Hidden,
}

impl SplashPhase {
    /// Skip button or visible-duration timeout.
    #[must_use]
    pub fn begin_exit(self) -> Self {
        match self {
            Self::Visible => Self::Exiting,
            other => other,
        }
    }

    /// Exit animation ended or a fallback timer fired.
    #[must_use]
    pub fn finish(self) -> Self {
        Self::Hidden
    }

    #[must_use]
    pub fn is_shown(self) -> bool {
        !matches!(self, Self::Hidden)
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Visible => "splash splash-in",
            Self::Exiting => "splash splash-out",
            Self::Hidden => "splash",
        }
    }
}

/// Drive the splash timers. `None` skips the overlay entirely.
pub fn use_splash(duration: Option<Duration>) -> Signal<SplashPhase> {
    let mut phase = use_signal(|| match duration {
        Some(_) => SplashPhase::Visible,
        None => SplashPhase::Hidden,
    });

    use_future(move || async move {
        let Some(duration) = duration else {
            return;
        };
        tokio::time::sleep(duration).await;
        if phase() == SplashPhase::Visible {
            phase.set(SplashPhase::Exiting);
        }
        tokio::time::sleep(EXIT_FALLBACK).await;
        phase.set(phase().finish());
    });

    use_future(move || async move {
        let Some(duration) = duration else {
            return;
        };
        tokio::time::sleep(duration + HARD_FALLBACK_GRACE).await;
        if phase().is_shown() {
            tracing::debug!("splash hard fallback fired");
            phase.set(SplashPhase::Hidden);
        }
    });

    phase
}

#[component]
pub fn SplashOverlay(phase: Signal<SplashPhase>) -> Element {
    let mut phase = phase;
    let current = phase();

    rsx! {
        div {
            class: current.class(),
            role: "dialog",
            "aria-hidden": "false",
            onanimationend: move |_| {
                if phase() == SplashPhase::Exiting {
                    phase.set(SplashPhase::Hidden);
                }
            },
            div { class: "splash-brand",
                h1 { "Curso de Diseño" }
                p { "Fundamentos, tipografía, color y composición" }
            }
            button {
                class: "ghost splash-skip",
                r#type: "button",
                onclick: move |_| {
                    phase.set(phase().begin_exit());
                    spawn(async move {
                        tokio::time::sleep(EXIT_FALLBACK).await;
                        phase.set(SplashPhase::Hidden);
                    });
                },
                "Saltar"
            }
        }
    }
}
