use course_core::model::{CompletionSet, LessonId};
use course_core::time::fixed_now;

use super::test_harness::{FakeSource, setup_view_harness, setup_view_harness_with_launch_sync};
use crate::screen::Screen;
use crate::vm::{COMPLETED_LABEL, NOT_COMPLETED_LABEL};

fn id(value: u64) -> LessonId {
    LessonId::new(value).unwrap()
}

fn set(values: &[u64]) -> CompletionSet {
    values.iter().map(|v| id(*v)).collect()
}

#[tokio::test(flavor = "current_thread")]
async fn list_renders_seed_with_zero_progress() {
    let mut harness = setup_view_harness(Screen::List, FakeSource::completed(&[]));
    harness.rebuild();
    let html = harness.render();

    for title in ["Introducción al Diseño", "Tipografía", "Reto práctico"] {
        assert!(html.contains(title), "missing {title} in {html}");
    }
    assert!(html.contains("0% completado"), "missing overview in {html}");
    assert!(!html.contains("lesson--done"), "unexpected completed row in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn sync_marks_lessons_and_overview() {
    let mut harness = setup_view_harness(Screen::List, FakeSource::completed(&[1, 3]));
    harness.sync.sync_all().await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("33% completado"), "missing 33% in {html}");
    assert!(html.contains("2 de 6 lecciones"), "missing done count in {html}");
    assert_eq!(html.matches("lesson--done").count(), 2, "{html}");
    assert!(html.contains("Sincronizado:"), "missing sync time in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn failed_sync_renders_zero_progress() {
    let mut harness = setup_view_harness(Screen::List, FakeSource::failing());
    harness.store.apply_completion_set(&set(&[1, 2]), fixed_now());
    harness.sync.sync_all().await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("0% completado"), "missing 0% in {html}");
    assert!(!html.contains("lesson--done"), "unexpected completed row in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn mounted_list_follows_store_revisions() {
    let mut harness = setup_view_harness(Screen::List, FakeSource::completed(&[1, 3]));
    harness.rebuild();
    assert!(harness.render().contains("0% completado"));

    harness.sync.sync_all().await;
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("33% completado"), "missing 33% in {html}");
    assert_eq!(html.matches("lesson--done").count(), 2, "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn launch_sync_fills_mounted_list() {
    let mut harness =
        setup_view_harness_with_launch_sync(Screen::List, FakeSource::completed(&[1, 3]));
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("33% completado"), "missing 33% in {html}");
    assert!(harness.store.last_synced_at().is_some());
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_resync_flips_completed_label() {
    let source = FakeSource::completed(&[1]);
    let mut harness = setup_view_harness(Screen::Detail(id(1)), source.clone());
    harness.rebuild();
    harness.sync.sync_all().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains(COMPLETED_LABEL), "missing completed label in {html}");
    assert!(html.contains("17% completado"), "missing 17% in {html}");

    source.set_completed(&[]);
    harness.start_lesson_sync(id(1));
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains(NOT_COMPLETED_LABEL), "missing not-completed label in {html}");
    assert!(html.contains("0% completado"), "missing 0% in {html}");
    assert!(html.contains("Sincronizar estado"), "button still busy in {html}");
    assert!(!harness.is_syncing(id(1)));
}

#[tokio::test(flavor = "current_thread")]
async fn pending_lesson_syncs_are_tracked_per_lesson() {
    let source = FakeSource::gated(&[1, 2]);
    let mut harness = setup_view_harness(Screen::Detail(id(1)), source.clone());
    harness.rebuild();

    harness.start_lesson_sync(id(1));
    harness.drive_async().await;
    assert!(harness.render().contains("Sincronizando..."));

    harness.start_lesson_sync(id(2));
    harness.drive_async().await;
    assert!(harness.is_syncing(id(1)));
    assert!(harness.is_syncing(id(2)));
    let html = harness.render();
    assert!(html.contains("Sincronizando..."), "lesson 1 lost its busy state in {html}");

    source.release(2);
    harness.drive_async().await;
    assert!(!harness.is_syncing(id(1)));
    assert!(!harness.is_syncing(id(2)));
    let html = harness.render();
    assert!(html.contains("Sincronizar estado"), "button still busy in {html}");
    assert!(html.contains(COMPLETED_LABEL), "missing completed label in {html}");
    assert!(html.contains("33% completado"), "missing 33% in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn detail_shows_sync_button_and_content() {
    let mut harness = setup_view_harness(Screen::Detail(id(3)), FakeSource::completed(&[]));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Color y Teoría"), "missing title in {html}");
    assert!(html.contains("Sincronizar estado"), "missing sync button in {html}");
    assert!(html.contains("Atrás"), "missing back button in {html}");
    assert!(html.contains(NOT_COMPLETED_LABEL), "missing status in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn detail_for_unknown_lesson_offers_back() {
    let mut harness = setup_view_harness(Screen::Detail(id(42)), FakeSource::completed(&[]));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Lección no encontrada"), "missing not-found in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn catalog_info_lists_syllabus() {
    let mut harness = setup_view_harness(Screen::CatalogInfo, FakeSource::completed(&[]));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Temario"), "missing title in {html}");
    assert!(html.contains("(52m)"), "missing duration in {html}");
    assert!(html.contains("Comenzar desde el inicio"), "missing start button in {html}");
    assert!(!html.contains("lessonsList"), "list should be hidden in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn about_panel_replaces_list() {
    let mut harness = setup_view_harness(Screen::About, FakeSource::completed(&[]));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Acerca del curso"), "missing about title in {html}");
    assert!(!html.contains("lessonsList"), "list should be hidden in {html}");
}
