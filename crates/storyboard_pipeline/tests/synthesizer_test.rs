//! Tests for per-scene image synthesis and its retry policy.

mod test_utils;

use std::sync::Arc;
use std::time::Duration;
use storyboard_core::{ImageData, ParsedScene};
use storyboard_error::PipelineErrorKind;
use storyboard_pipeline::{ImageSynthesizer, NO_IMAGE_DATA};
use test_utils::{MockImageModel, MockImageResponse, bad_request, rate_limited};

fn scene(number: u32, characters: &[&str]) -> ParsedScene {
    ParsedScene::builder()
        .scene(number)
        .setting("Rooftop at dusk")
        .characters(characters.iter().map(|c| c.to_string()).collect::<Vec<_>>())
        .action("Two agents trade a briefcase.")
        .build()
        .unwrap()
}

#[tokio::test(start_paused = true)]
async fn test_success_returns_first_image() -> anyhow::Result<()> {
    let model = Arc::new(MockImageModel::new_success());
    let synthesizer = ImageSynthesizer::new(model.clone());

    let image = synthesizer.synthesize(&scene(1, &["Ada", "Bo"]), "Cyberpunk neon noir").await?;

    assert_eq!(image.to_data_uri(), "data:image/png;base64,iVBORw0KGgo=");
    assert_eq!(model.call_count(), 1);

    let request = &model.requests()[0];
    assert_eq!(*request.number_of_images(), 1);
    assert_eq!(request.output_mime_type(), "image/png");
    assert_eq!(request.aspect_ratio(), "16:9");
    assert!(request.prompt().starts_with("Storyboard panel in a \"Cyberpunk neon noir\" style."));
    assert!(request.prompt().contains("- Setting: Rooftop at dusk"));
    assert!(request.prompt().contains("- Characters: Ada, Bo"));
    assert!(request.prompt().contains("- Action: Two agents trade a briefcase."));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_declared_mime_type_is_kept() -> anyhow::Result<()> {
    let model = MockImageModel::new_always(MockImageResponse::Image(ImageData::new(
        "image/jpeg",
        "/9j/4AAQ",
    )));
    let image = ImageSynthesizer::new(model).synthesize(&scene(1, &[]), "Watercolor").await?;
    assert_eq!(image.to_data_uri(), "data:image/jpeg;base64,/9j/4AAQ");
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_exhausts_five_attempts_on_persistent_throttling() {
    let model = Arc::new(MockImageModel::new_always(MockImageResponse::Error(rate_limited())));
    let synthesizer = ImageSynthesizer::new(model.clone());

    let err = synthesizer.synthesize(&scene(4, &[]), "Manga").await.unwrap_err();

    assert_eq!(
        err.pipeline_kind(),
        Some(&PipelineErrorKind::RateLimitExceeded {
            scene: 4,
            attempts: 5
        })
    );
    assert_eq!(
        err.user_message(),
        "Rate limit exceeded after 5 attempts for Scene 4. Please try again later."
    );
    assert_eq!(model.call_count(), 5);
}

#[tokio::test(start_paused = true)]
async fn test_backoff_delays_stay_within_bounds() {
    let model = Arc::new(MockImageModel::new_always(MockImageResponse::Error(rate_limited())));
    let synthesizer = ImageSynthesizer::new(model.clone());

    let _ = synthesizer.synthesize(&scene(1, &[]), "Manga").await;

    let times = model.call_times();
    assert_eq!(times.len(), 5);
    for (index, pair) in times.windows(2).enumerate() {
        let attempt = index as u32 + 1;
        let floor = Duration::from_millis(2u64.pow(attempt) * 3_000);
        let gap = pair[1] - pair[0];
        assert!(gap >= floor, "attempt {attempt} waited {gap:?}");
        assert!(gap < floor + Duration::from_millis(1_000), "attempt {attempt} waited {gap:?}");
    }
}

#[tokio::test(start_paused = true)]
async fn test_recovers_when_throttling_clears() -> anyhow::Result<()> {
    let model = Arc::new(MockImageModel::new_sequence(
        vec![
            MockImageResponse::Error(rate_limited()),
            MockImageResponse::Error(rate_limited()),
        ],
        MockImageResponse::png(),
    ));
    let synthesizer = ImageSynthesizer::new(model.clone());

    synthesizer.synthesize(&scene(1, &[]), "Manga").await?;

    assert_eq!(model.call_count(), 3);
    let prompts = model.prompts();
    assert!(prompts.iter().all(|p| p == &prompts[0]));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_non_throttling_error_fails_after_one_attempt() {
    let model = Arc::new(MockImageModel::new_always(MockImageResponse::Error(bad_request())));
    let synthesizer = ImageSynthesizer::new(model.clone());

    let err = synthesizer.synthesize(&scene(3, &[]), "Manga").await.unwrap_err();

    match err.pipeline_kind() {
        Some(PipelineErrorKind::ImageGeneration { scene, message }) => {
            assert_eq!(*scene, 3);
            assert!(message.contains("INVALID_ARGUMENT"));
        }
        other => panic!("expected ImageGeneration, got {other:?}"),
    }
    assert_eq!(model.call_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_empty_response_is_generation_error() {
    let model = Arc::new(MockImageModel::new_always(MockImageResponse::Empty));
    let synthesizer = ImageSynthesizer::new(model.clone());

    let err = synthesizer.synthesize(&scene(2, &[]), "Manga").await.unwrap_err();

    assert_eq!(
        err.pipeline_kind(),
        Some(&PipelineErrorKind::ImageGeneration {
            scene: 2,
            message: NO_IMAGE_DATA.to_string()
        })
    );
    assert_eq!(
        err.user_message(),
        "Failed to generate an image for Scene 2: No image data was returned by the API"
    );
    assert_eq!(model.call_count(), 1);
}
