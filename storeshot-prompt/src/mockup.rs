//! Raw app screen prompts, produced when there are no real screenshots yet.
//!
//! The generated screens carry no device frame and no headline; they are meant
//! to be fed back as input screenshots for the marketing prompts.

use serde::{Deserialize, Serialize};
use storeshot_utils::trimmed_or_none;
use tracing::debug;

use crate::catalog::{DEFAULT_COUNT, NO_DEVICE_KEY, aspect_frame, screen_suggestions};
use crate::platform::{Orientation, PlatformChoice, detect_platform};

#[derive(Debug, Clone)]
pub struct MockupRequest {
    pub app_name: String,
    pub category: String,
    pub usp: String,
    pub count: usize,
    pub screen_descriptions: Vec<String>,
    pub app_colors: Option<String>,
    pub platform: PlatformChoice,
    /// Only consulted to detect the platform.
    pub device: String,
}

impl MockupRequest {
    pub fn new(
        app_name: impl Into<String>,
        category: impl Into<String>,
        usp: impl Into<String>,
    ) -> Self {
        Self {
            app_name: app_name.into(),
            category: category.into(),
            usp: usp.into(),
            count: DEFAULT_COUNT,
            screen_descriptions: Vec::new(),
            app_colors: None,
            platform: PlatformChoice::default(),
            device: NO_DEVICE_KEY.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockupRecord {
    pub index: usize,
    pub screen_description: String,
    pub prompt: String,
}

/// Extend `descriptions` to `count` entries with the category's suggested
/// screens. Padding continues the suggestion cycle from the current length,
/// so a caller who supplied two screens gets the third suggestion next.
pub fn pad_screen_descriptions(
    descriptions: &[String],
    category: &str,
    count: usize,
) -> Vec<String> {
    let suggestions = screen_suggestions(category);
    let mut padded: Vec<String> = descriptions.iter().take(count).cloned().collect();

    while padded.len() < count && !suggestions.is_empty() {
        let next = suggestions[padded.len() % suggestions.len()];
        padded.push(next.to_string());
    }

    padded
}

pub fn generate_screen_mockup_prompts(request: &MockupRequest) -> Vec<MockupRecord> {
    let descriptions =
        pad_screen_descriptions(&request.screen_descriptions, &request.category, request.count);
    let platform = detect_platform(&request.device, request.platform);
    let frame = aspect_frame(platform, Orientation::Portrait);
    let color_directive =
        trimmed_or_none(request.app_colors.as_deref()).map(color_scheme_directive);

    debug!(
        count = descriptions.len(),
        %platform,
        category = %request.category,
        "composing mockup prompts"
    );

    descriptions
        .into_iter()
        .enumerate()
        .map(|(offset, screen_description)| {
            let mut parts: Vec<String> = vec![
                frame.prefix.to_string(),
                format!(
                    "Generate a realistic, production-quality mobile app UI screenshot for '{}' — a {} app.",
                    request.app_name, request.category
                ),
                format!("SCREEN: {screen_description}."),
                ui_requirements(&request.category),
            ];
            parts.extend(color_directive.clone());
            parts.push(FULL_BLEED_COMPOSITION.to_string());
            parts.push(RENDER_QUALITY.to_string());
            parts.push(format!("The overall app USP is: {}.", request.usp));
            parts.push(frame.suffix.to_string());

            let prompt = parts
                .iter()
                .map(|part| part.trim())
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join(" ");

            MockupRecord {
                index: offset + 1,
                screen_description,
                prompt,
            }
        })
        .collect()
}

fn ui_requirements(category: &str) -> String {
    format!(
        "UI REQUIREMENTS: \
         This must look like an ACTUAL app screenshot — NOT a wireframe, NOT a mockup, NOT a design concept. \
         Use real-looking UI components: proper navigation bars, tab bars, cards, buttons, text, icons, \
         avatars, charts, and spacing that follow modern mobile design guidelines (Material Design or iOS HIG). \
         All text must be legible and realistic (not lorem ipsum). Use plausible data, names, and numbers. \
         The UI should be polished, pixel-perfect, and look like it belongs in a top-100 {category} app."
    )
}

fn color_scheme_directive(app_colors: &str) -> String {
    format!(
        "COLOR SCHEME: Use these brand colors throughout the UI: {app_colors}. \
         The primary color should be used for buttons, headers, and active elements. \
         The secondary color for accents and highlights. White or near-white for backgrounds \
         unless the app explicitly uses a dark theme."
    )
}

const FULL_BLEED_COMPOSITION: &str = "CRITICAL COMPOSITION: This is a FULL-SCREEN mobile UI. \
    The UI must fill the ENTIRE image from edge to edge — no bezels, no device frame, no background visible. \
    Include a status bar at the top (time, battery, signal icons) and a bottom navigation bar. \
    The layout must be vertically composed — content flows top to bottom.";

const RENDER_QUALITY: &str = "QUALITY: Clean vector rendering, crisp text, sharp icons, anti-aliased edges, \
    consistent spacing, professional typography (Inter, SF Pro, or Roboto).";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_continues_the_suggestion_cycle() {
        let supplied = vec!["Onboarding carousel".to_string(), "Paywall".to_string()];
        let padded = pad_screen_descriptions(&supplied, "Health", 4);
        let suggestions = screen_suggestions("Health");

        assert_eq!(padded.len(), 4);
        assert_eq!(padded[0], "Onboarding carousel");
        assert_eq!(padded[2], suggestions[2]);
        assert_eq!(padded[3], suggestions[3]);
    }

    #[test]
    fn padding_wraps_past_the_suggestion_list() {
        let padded = pad_screen_descriptions(&[], "Finance", 7);
        let suggestions = screen_suggestions("Finance");
        assert_eq!(padded[5], suggestions[0]);
        assert_eq!(padded[6], suggestions[1]);
    }

    #[test]
    fn extra_descriptions_are_cut_to_count() {
        let supplied: Vec<String> = (1..=4).map(|n| format!("Screen {n}")).collect();
        let padded = pad_screen_descriptions(&supplied, "Travel", 2);
        assert_eq!(padded, vec!["Screen 1", "Screen 2"]);
    }

    #[test]
    fn mockup_prompts_are_full_bleed_without_headline() {
        let mut request = MockupRequest::new("Ledger", "Finance", "budgets that balance themselves");
        request.count = 2;

        let records = generate_screen_mockup_prompts(&request);
        assert_eq!(records.len(), 2);

        let first = &records[0];
        assert_eq!(first.index, 1);
        assert!(first.prompt.starts_with("Create a 9:16 portrait image."));
        assert!(first.prompt.contains("NOT a wireframe"));
        assert!(first.prompt.contains("no device frame"));
        assert!(first.prompt.contains(&format!("SCREEN: {}.", first.screen_description)));
        assert!(first.prompt.ends_with("The overall app USP is: budgets that balance themselves."));
        assert!(!first.prompt.contains("COLOR SCHEME"));
        assert!(!first.prompt.contains("headline"));
    }

    #[test]
    fn brand_colors_and_platform_shape_the_prompt() {
        let mut request = MockupRequest::new("Ledger", "Finance", "budgets");
        request.count = 1;
        request.app_colors = Some("Navy, Gold".to_string());
        request.device = "iphone_16_pro".to_string();

        let records = generate_screen_mockup_prompts(&request);
        let prompt = &records[0].prompt;
        assert!(prompt.starts_with("Create a 9:19.5 portrait image."));
        assert!(prompt.contains("brand colors throughout the UI: Navy, Gold."));
    }
}
