//! Read-only tables the prompt builders draw from: devices, framings, story
//! arcs, composition guardrails and screen suggestions.

use tracing::debug;

use crate::platform::{Orientation, Platform, Resolution};

pub const DEFAULT_DEVICE_KEY: &str = "iphone_16_pro";
pub const NO_DEVICE_KEY: &str = "no_device";
pub const CUSTOM_DEVICE_KEY: &str = "custom";
pub const DEFAULT_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DevicePreset {
    pub display_name: &'static str,
    pub portrait: Resolution,
    pub landscape: Resolution,
}

impl DevicePreset {
    const fn new(display_name: &'static str, width: u32, height: u32) -> Self {
        Self {
            display_name,
            portrait: Resolution::new(width, height),
            landscape: Resolution::new(height, width),
        }
    }
}

pub const DEVICE_PRESETS: &[(&str, DevicePreset)] = &[
    ("iphone_16_pro", DevicePreset::new("iPhone 16 Pro", 1290, 2796)),
    ("iphone_16_pro_max", DevicePreset::new("iPhone 16 Pro Max", 1320, 2868)),
    ("iphone_15_pro", DevicePreset::new("iPhone 15 Pro", 1179, 2556)),
    ("iphone_15_pro_max", DevicePreset::new("iPhone 15 Pro Max", 1290, 2796)),
    ("samsung_s24_ultra", DevicePreset::new("Samsung Galaxy S24 Ultra", 1440, 3120)),
    ("samsung_s24", DevicePreset::new("Samsung Galaxy S24", 1080, 2340)),
    ("pixel_9_pro", DevicePreset::new("Google Pixel 9 Pro", 1280, 2856)),
    ("pixel_9", DevicePreset::new("Google Pixel 9", 1080, 2424)),
    ("oneplus_12", DevicePreset::new("OnePlus 12", 1440, 3168)),
    ("generic_android", DevicePreset::new("modern Android smartphone", 1080, 2400)),
    ("ipad_pro", DevicePreset::new("iPad Pro 12.9-inch", 2048, 2732)),
    (NO_DEVICE_KEY, DevicePreset::new("No Device", 1080, 1920)),
];

/// Device keys that target the App Store when no platform is forced.
pub const APPLE_DEVICE_KEYS: &[&str] = &[
    "iphone_16_pro",
    "iphone_16_pro_max",
    "iphone_15_pro",
    "iphone_15_pro_max",
    "ipad_pro",
];

pub fn device_keys() -> impl Iterator<Item = &'static str> {
    DEVICE_PRESETS.iter().map(|(key, _)| *key)
}

pub fn find_device_preset(key: &str) -> Option<&'static DevicePreset> {
    DEVICE_PRESETS
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, preset)| preset)
}

/// Preset for `key`, falling back to [`DEFAULT_DEVICE_KEY`].
pub fn device_preset(key: &str) -> &'static DevicePreset {
    find_device_preset(key).unwrap_or_else(|| {
        debug!(device = key, fallback = DEFAULT_DEVICE_KEY, "unknown device, using fallback");
        &DEVICE_PRESETS[0].1
    })
}

/// Store resolutions are fixed per platform, whatever device is drawn.
pub const fn platform_resolutions(platform: Platform) -> (Resolution, Resolution) {
    match platform {
        Platform::AppStore => (Resolution::new(1320, 2868), Resolution::new(2868, 1320)),
        Platform::PlayStore => (Resolution::new(1080, 1920), Resolution::new(1920, 1080)),
    }
}

pub mod framing {
    pub const HERO: &str = "floating at a dynamic 8-degree rightward tilt in 3D perspective, \
        casting a soft diffused shadow beneath, as if suspended in mid-air";
    pub const DUAL_HERO: &str = "TWO devices side by side: a LARGE foreground device tilted 15 degrees \
        to the left in 3D perspective (occupying 55% of the frame width, positioned left-of-center), \
        and a SMALLER background device upright and slightly behind it (occupying 35% of the frame \
        width, positioned right-of-center, overlapping the foreground device by 15%). Both share a \
        unified shadow beneath them. The foreground device is the primary focus";
    pub const FEATURE_A: &str = "angled 12 degrees to the left with dramatic 3D perspective, \
        a sharp contact shadow grounding it, slight reflection on the surface below";
    pub const FEATURE_B: &str = "angled 12 degrees to the right with dramatic 3D perspective, \
        a sharp contact shadow grounding it, slight reflection on the surface below";
    pub const SUPPORTING: &str =
        "tilted 6 degrees to the left with gentle 3D depth, floating with a soft ambient shadow beneath";
    pub const CTA: &str = "floating at a dynamic 8-degree leftward tilt in 3D perspective, \
        casting a soft diffused shadow beneath, as if suspended in mid-air";
}

pub const HERO_SHOT_ROLE: &str = "HERO SHOT";
pub const CALL_TO_ACTION_ROLE: &str = "CALL TO ACTION";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleFraming {
    pub role: &'static str,
    pub framing: &'static str,
}

impl RoleFraming {
    pub const fn new(role: &'static str, framing: &'static str) -> Self {
        Self { role, framing }
    }
}

pub const STORY_ARCS: &[(&str, &[RoleFraming])] = &[
    (
        "feature_dive",
        &[
            RoleFraming::new(HERO_SHOT_ROLE, framing::DUAL_HERO),
            RoleFraming::new("KEY FEATURE A", framing::FEATURE_A),
            RoleFraming::new("KEY FEATURE B", framing::FEATURE_B),
            RoleFraming::new("INTEGRATION", framing::SUPPORTING),
            RoleFraming::new("SOCIAL PROOF + CTA", framing::CTA),
        ],
    ),
    (
        "lifestyle_flow",
        &[
            RoleFraming::new("THE DREAM", framing::DUAL_HERO),
            RoleFraming::new("PROBLEM SOLVER", framing::FEATURE_A),
            RoleFraming::new("DATA & PROGRESS", framing::FEATURE_B),
            RoleFraming::new("COMMUNITY", framing::SUPPORTING),
            RoleFraming::new("START YOUR JOURNEY", framing::CTA),
        ],
    ),
    (
        "game_hype",
        &[
            RoleFraming::new("KEY ART", framing::HERO),
            RoleFraming::new("GAMEPLAY ACTION", framing::FEATURE_A),
            RoleFraming::new("PROGRESSION & LOOT", framing::FEATURE_B),
            RoleFraming::new("MULTIPLAYER", framing::SUPPORTING),
            RoleFraming::new("PLAY NOW", framing::CTA),
        ],
    ),
    (
        "ai_magic",
        &[
            RoleFraming::new("INPUT → OUTPUT", framing::HERO),
            RoleFraming::new("VARIETY", framing::FEATURE_A),
            RoleFraming::new("ADVANCED CONTROL", framing::FEATURE_B),
            RoleFraming::new("USE CASES", framing::CTA),
        ],
    ),
];

pub const DEFAULT_MIDDLE_ROLES: &[RoleFraming] = &[
    RoleFraming::new("FEATURE HIGHLIGHT", framing::FEATURE_A),
    RoleFraming::new("DATA & INSIGHTS", framing::FEATURE_B),
    RoleFraming::new("SOCIAL PROOF", framing::SUPPORTING),
    RoleFraming::new("INTEGRATION", framing::SUPPORTING),
    RoleFraming::new("PERSONALIZATION", framing::FEATURE_A),
];

pub fn story_arc_keys() -> impl Iterator<Item = &'static str> {
    STORY_ARCS.iter().map(|(key, _)| *key)
}

pub fn story_arc(name: &str) -> Option<&'static [RoleFraming]> {
    STORY_ARCS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, arc)| *arc)
}

/// Headline used when the caller supplies none for a position.
pub fn default_headline(role: &str, app_name: &str) -> Option<String> {
    match role {
        HERO_SHOT_ROLE | "THE DREAM" | "KEY ART" | "INPUT → OUTPUT" => {
            Some(format!("Discover {app_name}"))
        }
        CALL_TO_ACTION_ROLE | "SOCIAL PROOF + CTA" => Some("Download Now".to_string()),
        "START YOUR JOURNEY" => Some("Start Your Journey".to_string()),
        "PLAY NOW" => Some("Play Now".to_string()),
        _ => None,
    }
}

/// Aspect-ratio text placed at the start and end of a prompt, plus an optional
/// reminder appended to the composition rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AspectFrame {
    pub prefix: &'static str,
    pub suffix: &'static str,
    pub reminder: &'static str,
}

impl AspectFrame {
    const fn prefix_only(prefix: &'static str) -> Self {
        Self {
            prefix,
            suffix: "",
            reminder: "",
        }
    }
}

const PLAY_STORE_PORTRAIT: AspectFrame = AspectFrame::prefix_only("Create a 9:16 portrait image.");
const PLAY_STORE_LANDSCAPE: AspectFrame = AspectFrame::prefix_only("Create a 16:9 landscape image.");
const APP_STORE_PORTRAIT: AspectFrame = AspectFrame::prefix_only("Create a 9:19.5 portrait image.");
const APP_STORE_LANDSCAPE: AspectFrame =
    AspectFrame::prefix_only("Create a 19.5:9 landscape image.");

pub const fn aspect_frame(platform: Platform, orientation: Orientation) -> &'static AspectFrame {
    match (platform, orientation) {
        (Platform::PlayStore, Orientation::Portrait) => &PLAY_STORE_PORTRAIT,
        (Platform::PlayStore, Orientation::Landscape) => &PLAY_STORE_LANDSCAPE,
        (Platform::AppStore, Orientation::Portrait) => &APP_STORE_PORTRAIT,
        (Platform::AppStore, Orientation::Landscape) => &APP_STORE_LANDSCAPE,
    }
}

pub const COMPOSITION_RULES: &str = "COMPOSITION RULES: \
    1) DEVICE/CONTENT SIZING (CRITICAL): The device (or floating UI plane) must fill approximately \
    55-60% of the total screenshot HEIGHT and approximately 90% of the total screenshot WIDTH. \
    It is the hero subject — large and prominent. \
    Leave a 20-25% text zone at the top or bottom for the headline. \
    The remaining space is clean breathing room around the subject. \
    2) TEXT PLACEMENT: The headline text MUST be placed ABOVE the subject (in the top 20-25% of the image) \
    or BELOW the subject (in the bottom 20-25% of the image). \
    The text must NEVER overlap, cover, or obstruct ANY part of the UI screen. \
    The headline should be on the background area only. \
    3) CLEAN BACKGROUND: The background should be clean and minimal. \
    No random floating objects unless the style (e.g. 3d_playful, immersive_scene) explicitly calls for them. \
    The focus is: background + subject + headline text. \
    4) MATERIALITY (CRITICAL): Every surface must have a defined texture (glass, metal, plastic, liquid). \
    NOTHING should look flat or unrendered. All materials must react to light.";

pub const QUALITY_BOOSTERS: &str = "Octane Render, Unreal Engine 5 render, global illumination, \
    ray tracing, 8k resolution, highly detailed, photorealistic, \
    masterpiece, professional color grading, depth of field, \
    sharp focus, cinematic lighting, award-winning design";

pub const DEFAULT_SUGGESTION_CATEGORY: &str = "default";

pub const SCREEN_SUGGESTIONS: &[(&str, &[&str])] = &[
    (
        "Education",
        &[
            "Home dashboard showing learning progress, streaks, and recommended courses",
            "Course content view with lesson cards, video previews, and progress bars",
            "Quiz/Practice screen with interactive coding challenges or quiz questions",
            "Achievement/Leaderboard screen showing badges, rankings, and milestones",
            "Profile screen with learning statistics, completed courses, and certificates",
        ],
    ),
    (
        "Finance",
        &[
            "Dashboard with account balance, spending chart, and recent transactions",
            "Transaction list with categories, amounts, and date/time grouping",
            "Budget tracker with category breakdown pie chart and spending limits",
            "Investment portfolio view with stock/crypto charts and gains/losses",
            "Profile with savings goals, credit score, and account settings",
        ],
    ),
    (
        "Health",
        &[
            "Dashboard with daily steps, heart rate, calories burned, and sleep score",
            "Workout tracking screen with exercise list, sets, reps, and timer",
            "Nutrition log with meal cards, calorie counter, and macro breakdown",
            "Progress charts showing weight, body measurements over time",
            "Profile screen with health goals, achievements, and connected devices",
        ],
    ),
    (
        "Social",
        &[
            "Feed/Timeline showing posts with images, likes, comments, shares",
            "Chat/Messaging view with conversation bubbles and media attachments",
            "Stories/Reels grid with user-generated content thumbnails",
            "Profile page with bio, follower count, photo grid, and highlights",
            "Discover/Explore screen with trending topics and suggested accounts",
        ],
    ),
    (
        "Productivity",
        &[
            "Dashboard with today's tasks, calendar events, and quick actions",
            "Task list view with categories, due dates, priorities, and checkboxes",
            "Project board (Kanban style) with columns and draggable cards",
            "Note editor with rich text formatting, checklists, and attachments",
            "Settings screen with theme options, notifications, and integrations",
        ],
    ),
    (
        DEFAULT_SUGGESTION_CATEGORY,
        &[
            "Home screen / main dashboard showing the app's primary feature",
            "Detail view or content screen with the app's core functionality",
            "List or collection view with items, cards, or entries",
            "User profile or settings screen with account information",
            "Action screen showing a key workflow (e.g., creation, search, or interaction)",
        ],
    ),
];

/// Suggested screens for a category; categories match exactly, anything else gets the generic list.
pub fn screen_suggestions(category: &str) -> &'static [&'static str] {
    let lookup = |name: &str| {
        SCREEN_SUGGESTIONS
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, suggestions)| *suggestions)
    };

    lookup(category)
        .or_else(|| lookup(DEFAULT_SUGGESTION_CATEGORY))
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_preset_falls_back_to_iphone_16_pro() {
        assert_eq!(device_preset("nokia_3310").display_name, "iPhone 16 Pro");
        assert_eq!(device_preset("pixel_9").display_name, "Google Pixel 9");
    }

    #[test]
    fn landscape_preset_resolution_swaps_axes() {
        let preset = device_preset("samsung_s24_ultra");
        assert_eq!(preset.portrait.to_string(), "1440x3120");
        assert_eq!(preset.landscape.to_string(), "3120x1440");
    }

    #[test]
    fn apple_keys_are_all_known_presets() {
        for key in APPLE_DEVICE_KEYS {
            assert!(find_device_preset(key).is_some(), "{key} missing from presets");
        }
    }

    #[test]
    fn story_arcs_have_fixed_lengths() {
        let lengths: Vec<(&str, usize)> = STORY_ARCS
            .iter()
            .map(|(key, arc)| (*key, arc.len()))
            .collect();
        assert_eq!(
            lengths,
            vec![
                ("feature_dive", 5),
                ("lifestyle_flow", 5),
                ("game_hype", 5),
                ("ai_magic", 4),
            ]
        );
        assert!(story_arc("heist").is_none());
    }

    #[test]
    fn default_headlines_cover_opening_and_closing_roles() {
        assert_eq!(
            default_headline(HERO_SHOT_ROLE, "Zen").as_deref(),
            Some("Discover Zen")
        );
        assert_eq!(
            default_headline(CALL_TO_ACTION_ROLE, "Zen").as_deref(),
            Some("Download Now")
        );
        assert_eq!(default_headline("PLAY NOW", "Zen").as_deref(), Some("Play Now"));
        assert!(default_headline("FEATURE HIGHLIGHT", "Zen").is_none());
    }

    #[test]
    fn aspect_frames_depend_on_platform_and_orientation() {
        assert_eq!(
            aspect_frame(Platform::PlayStore, Orientation::Portrait).prefix,
            "Create a 9:16 portrait image."
        );
        assert_eq!(
            aspect_frame(Platform::AppStore, Orientation::Landscape).prefix,
            "Create a 19.5:9 landscape image."
        );
    }

    #[test]
    fn unknown_category_uses_default_suggestions() {
        assert_eq!(screen_suggestions("Travel"), screen_suggestions("default"));
        assert!(screen_suggestions("Finance")[0].contains("account balance"));
    }
}
