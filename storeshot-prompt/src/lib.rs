//! Prompt assembly for app store screenshots.
//!
//! Everything here is a pure function over the static catalog: the platform
//! and device resolver, the role and framing assigner, and the marketing and
//! mockup prompt composers.

pub mod catalog;
pub mod compose;
pub mod error;
pub mod mockup;
pub mod platform;
pub mod roles;
pub mod styles;

pub use catalog::{
    CUSTOM_DEVICE_KEY, DEFAULT_COUNT, DEFAULT_DEVICE_KEY, NO_DEVICE_KEY, RoleFraming,
    device_keys, story_arc_keys,
};
pub use compose::{
    Composer, Generation, GenerationWarning, PromptRecord, PromptRequest, PromptSegments,
    SegmentKind, generate_prompts, resolve_count,
};
pub use error::ParseError;
pub use mockup::{MockupRecord, MockupRequest, generate_screen_mockup_prompts};
pub use platform::{
    AspectRatio, Orientation, Platform, PlatformChoice, Resolution, ResolvedDevice,
    detect_platform, resolve_device,
};
pub use roles::get_role_and_framing;
pub use styles::{DEFAULT_STYLE_KEY, style_keys};
