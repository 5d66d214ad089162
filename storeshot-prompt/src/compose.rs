use std::fmt;

use serde::{Deserialize, Serialize};
use storeshot_utils::trimmed_or_none;
use tracing::debug;

use crate::catalog::{
    AspectFrame, COMPOSITION_RULES, DEFAULT_COUNT, DEFAULT_DEVICE_KEY, NO_DEVICE_KEY,
    QUALITY_BOOSTERS, RoleFraming, aspect_frame, default_headline,
};
use crate::platform::{
    AspectRatio, Orientation, PlatformChoice, Resolution, ResolvedDevice, resolve_device,
};
use crate::roles::get_role_and_framing;
use crate::styles::{DEFAULT_STYLE_KEY, style_text};

/// Parameters for one marketing screenshot run.
#[derive(Debug, Clone)]
pub struct PromptRequest {
    pub app_name: String,
    pub category: String,
    pub usp: String,
    pub count: Option<usize>,
    pub style_mode: String,
    pub screenshots: Vec<String>,
    pub headlines: Vec<String>,
    pub aspect_ratio: AspectRatio,
    pub story_arc: Option<String>,
    pub device: String,
    pub custom_device_name: Option<String>,
    pub app_colors: Option<String>,
    pub platform: PlatformChoice,
}

impl PromptRequest {
    pub fn new(
        app_name: impl Into<String>,
        category: impl Into<String>,
        usp: impl Into<String>,
    ) -> Self {
        Self {
            app_name: app_name.into(),
            category: category.into(),
            usp: usp.into(),
            count: None,
            style_mode: DEFAULT_STYLE_KEY.to_string(),
            screenshots: Vec::new(),
            headlines: Vec::new(),
            aspect_ratio: AspectRatio::default(),
            story_arc: None,
            device: DEFAULT_DEVICE_KEY.to_string(),
            custom_device_name: None,
            app_colors: None,
            platform: PlatformChoice::default(),
        }
    }
}

/// One generated marketing screenshot prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptRecord {
    pub index: usize,
    pub role: String,
    pub headline: String,
    pub prompt: String,
    pub input_file: Option<String>,
    pub device: String,
    pub aspect_ratio: AspectRatio,
    pub resolution: Resolution,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationWarning {
    /// The requested count disagreed with the screenshots supplied; the
    /// screenshot count was used instead.
    CountMismatch { requested: usize, screenshots: usize },
}

impl fmt::Display for GenerationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CountMismatch {
                requested,
                screenshots,
            } => write!(
                f,
                "WARNING: count={requested} but {screenshots} screenshots provided. \
                 Some images will NOT be used!"
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generation {
    pub records: Vec<PromptRecord>,
    pub warnings: Vec<GenerationWarning>,
}

/// Settle the number of images to generate.
///
/// Supplied screenshots always win over an explicit count so none of them is
/// dropped; a disagreement is reported back as a warning.
pub fn resolve_count(
    count: Option<usize>,
    screenshots: usize,
) -> (usize, Option<GenerationWarning>) {
    match count {
        None if screenshots > 0 => (screenshots, None),
        None => (DEFAULT_COUNT, None),
        Some(requested) if screenshots > 0 && requested != screenshots => (
            screenshots,
            Some(GenerationWarning::CountMismatch {
                requested,
                screenshots,
            }),
        ),
        Some(requested) => (requested, None),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    AspectPrefix,
    SequenceLabel,
    Style,
    ColorOverride,
    CompositionRules,
    Quality,
    Subject,
    SequenceReminder,
    AspectSuffix,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub text: String,
}

/// Ordered prompt sections. Blank sections are skipped when rendering and the
/// rest are joined with a single space.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptSegments {
    segments: Vec<Segment>,
}

impl PromptSegments {
    pub fn push(&mut self, kind: SegmentKind, text: impl Into<String>) {
        self.segments.push(Segment {
            kind,
            text: text.into(),
        });
    }

    pub fn get(&self, kind: SegmentKind) -> Option<&str> {
        self.segments
            .iter()
            .find(|segment| segment.kind == kind)
            .map(|segment| segment.text.as_str())
    }

    /// Kinds of the sections that will appear in the rendered prompt, in order.
    pub fn rendered_kinds(&self) -> Vec<SegmentKind> {
        self.non_blank().map(|segment| segment.kind).collect()
    }

    pub fn render(&self) -> String {
        self.non_blank()
            .map(|segment| segment.text.trim())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn non_blank(&self) -> impl Iterator<Item = &Segment> {
        self.segments
            .iter()
            .filter(|segment| !segment.text.trim().is_empty())
    }
}

/// A single composed screen before it is flattened into a [`PromptRecord`].
#[derive(Debug, Clone)]
pub struct ComposedScreen {
    pub index: usize,
    pub role_framing: RoleFraming,
    pub headline: String,
    pub input_file: Option<String>,
    pub segments: PromptSegments,
}

/// Request-wide values resolved once and shared by every index.
#[derive(Debug)]
pub struct Composer<'a> {
    request: &'a PromptRequest,
    count: usize,
    device: ResolvedDevice,
    orientation: Orientation,
    frame: &'static AspectFrame,
    style: &'static str,
    color_override: Option<String>,
}

impl<'a> Composer<'a> {
    pub fn new(request: &'a PromptRequest, count: usize) -> Self {
        let device = resolve_device(
            &request.device,
            request.custom_device_name.as_deref(),
            request.platform,
        );
        let orientation = request.aspect_ratio.orientation();
        let frame = aspect_frame(device.platform, orientation);
        let style = style_text(&request.style_mode);
        let color_override =
            trimmed_or_none(request.app_colors.as_deref()).map(color_override_text);

        Self {
            request,
            count,
            device,
            orientation,
            frame,
            style,
            color_override,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn device(&self) -> &ResolvedDevice {
        &self.device
    }

    pub fn resolution(&self) -> Resolution {
        self.device.resolution(self.orientation)
    }

    pub fn compose(&self, index: usize) -> ComposedScreen {
        let request = self.request;
        let position = index.saturating_sub(1);
        let role_framing = get_role_and_framing(index, self.count, request.story_arc.as_deref());

        let headline = request
            .headlines
            .get(position)
            .cloned()
            .or_else(|| default_headline(role_framing.role, &request.app_name))
            .unwrap_or_else(|| format!("{} — {}", request.app_name, request.usp));

        let input_file = request.screenshots.get(position).cloned();

        let mut segments = PromptSegments::default();
        segments.push(SegmentKind::AspectPrefix, self.frame.prefix);
        segments.push(
            SegmentKind::SequenceLabel,
            format!("Image {index} of {} ({}).", self.count, role_framing.role),
        );
        segments.push(SegmentKind::Style, self.style);
        if let Some(text) = &self.color_override {
            segments.push(SegmentKind::ColorOverride, text.clone());
        }
        segments.push(
            SegmentKind::CompositionRules,
            format!("{COMPOSITION_RULES} {}", self.frame.reminder),
        );
        segments.push(SegmentKind::Quality, format!("QUALITY: {QUALITY_BOOSTERS}."));
        segments.push(
            SegmentKind::Subject,
            format!(
                "SUBJECT: {}",
                self.visual_focus(role_framing.framing, &headline, input_file.is_some())
            ),
        );
        segments.push(
            SegmentKind::SequenceReminder,
            format!(
                "SEQUENCE: This is screenshot {index} in a {}-image panoramic sequence. \
                 Maintain consistent background gradient direction and color palette across all images.",
                self.count
            ),
        );
        segments.push(SegmentKind::AspectSuffix, self.frame.suffix);

        ComposedScreen {
            index,
            role_framing,
            headline,
            input_file,
            segments,
        }
    }

    fn visual_focus(&self, framing: &str, headline: &str, has_input: bool) -> String {
        let request = self.request;
        let orientation = self.orientation;

        if request.device == NO_DEVICE_KEY {
            let content = if has_input {
                format!("displaying the provided screen content. {EXACT_REFERENCE}")
            } else {
                format!(
                    "displaying the {} app's screens for {}, showcasing: {}.",
                    request.app_name, request.category, request.usp
                )
            };
            return format!(
                "A frameless, floating UI plane in {orientation} orientation, {content} \
                 The UI plane is {}. \
                 The headline text '{headline}' is placed ABOVE or BELOW the UI plane, \
                 integrated into the scene composition — NOT overlapping the UI content.",
                framing.replace("device", "UI plane")
            );
        }

        let device_name = &self.device.display_name;
        if has_input {
            format!(
                "A {device_name} device in {orientation} orientation displaying the provided input image. \
                 {EXACT_REFERENCE} \
                 The device is {framing}. \
                 The headline text '{headline}' is placed ABOVE or BELOW the device, \
                 on the background — NOT on the device screen."
            )
        } else {
            format!(
                "A {device_name} device in {orientation} orientation running the {} app. \
                 The device is {framing}. \
                 The screen displays content relevant to {}, showcasing: {}. \
                 The headline text '{headline}' is placed ABOVE or BELOW the device, \
                 on the background — NOT on the device screen.",
                request.app_name, request.category, request.usp
            )
        }
    }
}

const EXACT_REFERENCE: &str = "The screen content must EXACTLY match the input reference image. \
    Do NOT generate, hallucinate, or invent new UI elements.";

fn color_override_text(app_colors: &str) -> String {
    format!(
        "COLOR PALETTE OVERRIDE (CRITICAL): Ignore the default colors mentioned in the style above. \
         Instead, adapt ALL background gradients, accent colors, rim lights, and decorative elements \
         to harmonize with the app's brand colors: {app_colors}. \
         The style's lighting, materials, and composition remain the same — only the colors change."
    )
}

/// Build one prompt record per screenshot position.
///
/// Never fails: unknown style and device keys fall back to defaults, and a
/// count that disagrees with the supplied screenshots is corrected and
/// reported in [`Generation::warnings`].
pub fn generate_prompts(request: &PromptRequest) -> Generation {
    let (count, mismatch) = resolve_count(request.count, request.screenshots.len());
    let mut warnings = Vec::new();
    if let Some(warning) = mismatch {
        debug!(%warning, "adjusted screenshot count");
        warnings.push(warning);
    }

    let composer = Composer::new(request, count);
    let resolution = composer.resolution();
    debug!(
        count,
        platform = %composer.device().platform,
        %resolution,
        "composing marketing prompts"
    );

    let records = (1..=composer.count())
        .map(|index| {
            let screen = composer.compose(index);
            PromptRecord {
                index,
                role: screen.role_framing.role.to_string(),
                headline: screen.headline,
                prompt: screen.segments.render(),
                input_file: screen.input_file,
                device: composer.device().display_name.clone(),
                aspect_ratio: request.aspect_ratio,
                resolution,
            }
        })
        .collect();

    Generation { records, warnings }
}
