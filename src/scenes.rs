use once_cell::sync::Lazy;
use regex::Regex;

use crate::api::models::Scene;

pub const SCENE_COUNT: usize = 4;
/// Paragraphs shorter than this (in characters, after trimming) are ignored.
pub const MIN_PARAGRAPH_CHARS: usize = 30;

static BLANK_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n").expect("Failed to compile blank line pattern"));

/// Splits generated text into exactly four scene texts.
///
/// Blank-line paragraphs are used when at least four of them are long enough;
/// extra paragraphs are dropped. Otherwise the text is cut into four runs of
/// `ceil(len / 4)` characters, ignoring sentence and word boundaries.
pub fn split_scenes(story: &str) -> Vec<String> {
    let mut parts: Vec<String> = BLANK_LINE
        .split(story)
        .map(str::trim)
        .filter(|part| part.chars().count() >= MIN_PARAGRAPH_CHARS)
        .map(str::to_string)
        .collect();

    if parts.len() < SCENE_COUNT {
        parts = mechanical_split(story);
    }

    parts.truncate(SCENE_COUNT);
    parts
}

fn mechanical_split(story: &str) -> Vec<String> {
    let chars: Vec<char> = story.chars().collect();
    let len = chars.len();
    let chunk = len.div_ceil(SCENE_COUNT);

    (0..SCENE_COUNT)
        .map(|i| {
            let start = (i * chunk).min(len);
            let end = if i + 1 == SCENE_COUNT {
                len
            } else {
                ((i + 1) * chunk).min(len)
            };
            chars[start..end].iter().collect()
        })
        .collect()
}

/// Pairs each text with the image at the same position, falling back to the
/// first image and then to an empty URL.
pub fn assemble_scenes(texts: Vec<String>, images: &[String]) -> Vec<Scene> {
    let first = images.first().filter(|url| !url.is_empty());

    texts
        .into_iter()
        .enumerate()
        .map(|(i, text)| {
            let image = images
                .get(i)
                .filter(|url| !url.is_empty())
                .or(first)
                .cloned()
                .unwrap_or_default();
            Scene { text, image }
        })
        .collect()
}
