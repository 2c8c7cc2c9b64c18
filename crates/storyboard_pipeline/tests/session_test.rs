//! Tests for the presentation session.

mod test_utils;

use std::sync::Arc;
use storyboard_core::{ImageData, ParsedScene, StoryboardFrame};
use storyboard_error::PipelineErrorKind;
use storyboard_pipeline::{SessionState, StoryboardPipeline, StoryboardSession};
use test_utils::{
    MockImageModel, MockImageResponse, MockStructuringModel, bad_request, scene_value,
    scenes_json,
};

fn frame(scene: u32, action: &str) -> StoryboardFrame {
    let scene = ParsedScene::builder()
        .scene(scene)
        .setting("Set")
        .action(action)
        .build()
        .unwrap();
    StoryboardFrame::from_scene(&scene, &ImageData::new("image/png", "AAAA"))
}

#[test]
fn test_new_session_is_idle() {
    let session = StoryboardSession::new();
    assert_eq!(session.state(), &SessionState::Idle);
    assert!(session.frames().is_empty());
    assert_eq!(session.error(), None);
}

#[test]
fn test_blank_script_keeps_previous_frames() {
    let mut session = StoryboardSession::new();
    session.begin("SCENE 1").unwrap();
    session.push_frame(frame(1, "kept"));
    session.finish(&Ok(()));

    let err = session.begin(" \n\t ").unwrap_err();

    assert_eq!(err.pipeline_kind(), Some(&PipelineErrorKind::EmptyScript));
    assert_eq!(session.error(), Some("Script cannot be empty."));
    assert_eq!(session.frames().len(), 1);
}

#[test]
fn test_begin_clears_previous_run() {
    let mut session = StoryboardSession::new();
    session.begin("SCENE 1").unwrap();
    session.push_frame(frame(1, "old"));
    session.finish(&Ok(()));

    session.begin("SCENE 1 again").unwrap();

    assert!(session.is_generating());
    assert!(session.frames().is_empty());
    assert_eq!(session.error(), None);
}

#[test]
fn test_frames_sorted_by_scene_number() {
    let mut session = StoryboardSession::new();
    session.begin("script").unwrap();
    session.push_frame(frame(3, "c"));
    session.push_frame(frame(1, "a"));
    session.push_frame(frame(2, "first two"));
    session.push_frame(frame(2, "second two"));

    let actions: Vec<&str> = session
        .frames()
        .iter()
        .map(|f| f.description().trim_start_matches("Setting: Set. Action: "))
        .collect();
    assert_eq!(actions, vec!["a", "first two", "second two", "c"]);
}

#[tokio::test(start_paused = true)]
async fn test_generate_completes_with_sorted_frames() -> anyhow::Result<()> {
    let pipeline = StoryboardPipeline::new(
        MockStructuringModel::new_success(scenes_json(vec![
            scene_value(2, "Street", &[], "Leo runs."),
            scene_value(1, "Diner", &[], "Rachel sips coffee."),
        ])),
        MockImageModel::new_success(),
    );
    let mut session = StoryboardSession::new();

    session.generate(&pipeline, "SCENE 2 ... SCENE 1 ...", "Manga").await?;

    assert_eq!(session.state(), &SessionState::Complete);
    let scenes: Vec<u32> = session.frames().iter().map(|f| *f.scene()).collect();
    assert_eq!(scenes, vec![1, 2]);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_generate_failure_keeps_received_frames() {
    let pipeline = StoryboardPipeline::new(
        MockStructuringModel::new_success(scenes_json(vec![
            scene_value(1, "Diner", &[], "Rachel sips coffee."),
            scene_value(2, "Street", &[], "Leo runs."),
        ])),
        Arc::new(MockImageModel::new_sequence(
            vec![MockImageResponse::png()],
            MockImageResponse::Error(bad_request()),
        )),
    );
    let mut session = StoryboardSession::new();

    let result = session.generate(&pipeline, "script", "Manga").await;

    assert!(result.is_err());
    assert_eq!(session.frames().len(), 1);
    let message = session.error().unwrap_or_default();
    assert!(message.starts_with("Failed to generate an image for Scene 2:"));
}

#[tokio::test]
async fn test_generate_rejects_blank_script_without_calling_models() {
    let structuring = Arc::new(MockStructuringModel::new_success("[]"));
    let pipeline = StoryboardPipeline::new(structuring.clone(), MockImageModel::new_success());
    let mut session = StoryboardSession::new();

    assert!(session.generate(&pipeline, "", "Manga").await.is_err());
    assert_eq!(structuring.call_count(), 0);
}
