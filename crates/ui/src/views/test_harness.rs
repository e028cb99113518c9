use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use course_core::model::{CompletionSet, LessonId};
use course_core::time::fixed_clock;
use dioxus::core::{NoOpMutations, ScopeId, consume_context};
use dioxus::prelude::*;
use services::{CatalogStore, FetchError, ProgressSource, ProgressSync};
use tokio::sync::Semaphore;

use crate::context::{UiApp, build_app_context};
use crate::screen::Screen;
use crate::views::{CourseView, LessonSyncs, use_lesson_syncs};

/// Progress source whose answer can be changed between syncs.
/// `None` simulates a network failure. A gated source holds every fetch
/// until `release` hands out a permit.
pub struct FakeSource {
    completed: Mutex<Option<Vec<u64>>>,
    gate: Option<Semaphore>,
}

impl FakeSource {
    pub fn completed(ids: &[u64]) -> Arc<Self> {
        Arc::new(Self {
            completed: Mutex::new(Some(ids.to_vec())),
            gate: None,
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            completed: Mutex::new(None),
            gate: None,
        })
    }

    pub fn gated(ids: &[u64]) -> Arc<Self> {
        Arc::new(Self {
            completed: Mutex::new(Some(ids.to_vec())),
            gate: Some(Semaphore::new(0)),
        })
    }

    pub fn release(&self, fetches: usize) {
        if let Some(gate) = &self.gate {
            gate.add_permits(fetches);
        }
    }

    pub fn set_completed(&self, ids: &[u64]) {
        *self.completed.lock().unwrap() = Some(ids.to_vec());
    }
}

#[async_trait]
impl ProgressSource for FakeSource {
    async fn fetch_completed(&self) -> Result<CompletionSet, FetchError> {
        if let Some(gate) = &self.gate {
            gate.acquire().await.unwrap().forget();
        }
        match self.completed.lock().unwrap().clone() {
            Some(ids) => Ok(ids
                .into_iter()
                .map(|id| LessonId::new(id).unwrap())
                .collect()),
            None => Err(FetchError::Unavailable("simulated network error".into())),
        }
    }
}

struct TestApp {
    sync: Arc<ProgressSync>,
    sync_on_launch: bool,
}

impl UiApp for TestApp {
    fn progress_sync(&self) -> Arc<ProgressSync> {
        Arc::clone(&self.sync)
    }

    fn splash_duration(&self) -> Option<Duration> {
        None
    }

    fn sync_on_launch(&self) -> bool {
        self.sync_on_launch
    }
}

#[derive(Props, Clone)]
struct CourseHarnessProps {
    app: Arc<TestApp>,
    screen: Screen,
}

impl PartialEq for CourseHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn CourseHarness(props: CourseHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    let lesson_syncs = use_lesson_syncs();
    use_context_provider(|| lesson_syncs);
    rsx! { CourseView { initial: props.screen } }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub store: Arc<CatalogStore>,
    pub sync: Arc<ProgressSync>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Let spawned tasks and store subscriptions run, then render what changed.
    pub async fn drive_async(&mut self) {
        for _ in 0..3 {
            let _ =
                tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
            self.dom.render_immediate(&mut NoOpMutations);
            self.dom.process_events();
        }
    }

    /// Start a lesson re-sync through the mounted view's shared sync state.
    pub fn start_lesson_sync(&self, id: LessonId) {
        let sync = Arc::clone(&self.sync);
        self.dom.in_scope(ScopeId::APP, || {
            consume_context::<LessonSyncs>().start(sync, id);
        });
    }

    pub fn is_syncing(&self, id: LessonId) -> bool {
        self.dom
            .in_scope(ScopeId::APP, || consume_context::<LessonSyncs>().is_syncing(id))
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(screen: Screen, source: Arc<FakeSource>) -> ViewHarness {
    build_harness(screen, source, false)
}

pub fn setup_view_harness_with_launch_sync(screen: Screen, source: Arc<FakeSource>) -> ViewHarness {
    build_harness(screen, source, true)
}

fn build_harness(screen: Screen, source: Arc<FakeSource>, sync_on_launch: bool) -> ViewHarness {
    let store = Arc::new(CatalogStore::seeded());
    let sync = Arc::new(ProgressSync::new(fixed_clock(), source, Arc::clone(&store)));
    let app = Arc::new(TestApp {
        sync: Arc::clone(&sync),
        sync_on_launch,
    });
    let dom = VirtualDom::new_with_props(CourseHarness, CourseHarnessProps { app, screen });

    ViewHarness {
        dom,
        store,
        sync,
    }
}
