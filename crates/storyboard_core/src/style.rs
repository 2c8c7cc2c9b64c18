//! Art style presets and the sample script.

use strum::IntoEnumIterator;

/// Art style presets offered to users.
///
/// Any free-text label is accepted by the pipeline; these are the curated
/// choices, with [`ArtStyle::CinematicSketch`] as the default.
///
/// # Examples
///
/// ```
/// use storyboard_core::ArtStyle;
///
/// assert_eq!(ArtStyle::default().to_string(), "Cinematic black and white sketch");
/// assert_eq!(ArtStyle::presets().len(), 8);
/// assert_eq!(
///     "Gritty comic book style, dark shadows".parse::<ArtStyle>().unwrap(),
///     ArtStyle::GrittyComic
/// );
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    strum::EnumIter,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
pub enum ArtStyle {
    /// Cinematic black and white sketch
    #[default]
    #[strum(to_string = "Cinematic black and white sketch")]
    CinematicSketch,
    /// Japanese Manga style, vibrant colors
    #[strum(to_string = "Japanese Manga style, vibrant colors")]
    Manga,
    /// 3D animated movie style, Pixar look
    #[strum(to_string = "3D animated movie style, Pixar look")]
    Animated3d,
    /// Gritty comic book style, dark shadows
    #[strum(to_string = "Gritty comic book style, dark shadows")]
    GrittyComic,
    /// Photorealistic, 8K, cinematic lighting
    #[strum(to_string = "Photorealistic, 8K, cinematic lighting")]
    Photorealistic,
    /// Impressionistic watercolor painting
    #[strum(to_string = "Impressionistic watercolor painting")]
    Watercolor,
    /// Cyberpunk neon noir
    #[strum(to_string = "Cyberpunk neon noir")]
    CyberpunkNoir,
    /// Vintage 1950s cartoon style
    #[strum(to_string = "Vintage 1950s cartoon style")]
    VintageCartoon,
}

impl ArtStyle {
    /// All presets in display order.
    pub fn presets() -> Vec<ArtStyle> {
        ArtStyle::iter().collect()
    }

    /// Label passed to the image prompt.
    pub fn label(self) -> &'static str {
        self.into()
    }
}

/// Two-scene script used when the user has not supplied one.
pub const SAMPLE_SCRIPT: &str = "SCENE 1
INT. COFFEE SHOP - DAY

JANE (30s), a determined journalist, types furiously on her laptop. Across from her sits MARK (40s), a weary detective, nursing a cold coffee.

MARK
You're chasing a ghost. This case went cold five years ago.

JANE
(Without looking up)
Ghosts leave trails. And this one left a big one.

---

SCENE 2
EXT. ALLEYWAY - NIGHT

Rain pours down. A single flickering streetlamp illuminates a shadowy FIGURE dropping a small, metallic object into a drain before disappearing into the darkness.
";
