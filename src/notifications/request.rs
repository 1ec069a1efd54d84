// SPDX-License-Identifier: MPL-2.0
//! Caller-supplied notification requests.
//!
//! A [`NotificationRequest`] describes what to show and how it should behave.
//! It is consumed by the manager's `show`, which wraps it in a record with an
//! identity and a countdown. Helper constructors pre-fill the kind.

use super::position::Position;
use super::record::{CloseReason, NotificationId};
use crate::domain::notification::DisplayDuration;
use crate::ui::design_tokens::palette;
use iced::Color;
use log::warn;
use std::fmt;
use std::rc::Rc;

/// Semantic kind; determines accent colour and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Kind {
    #[default]
    Default,
    Success,
    Info,
    Warning,
    Error,
}

impl Kind {
    /// Returns the accent color for this kind.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Kind::Default => palette::GRAY_400,
            Kind::Success => palette::SUCCESS_500,
            Kind::Info => palette::INFO_500,
            Kind::Warning => palette::WARNING_500,
            Kind::Error => palette::ERROR_500,
        }
    }

    /// Returns the glyph shown when the request does not supply its own icon.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Kind::Default => "•",
            Kind::Success => "✓",
            Kind::Info => "i",
            Kind::Warning => "!",
            Kind::Error => "×",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    #[default]
    Filled,
    Outlined,
    Soft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Size {
    Small,
    #[default]
    Medium,
    Large,
}

/// How remaining time is visualised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProgressStyle {
    #[default]
    Linear,
    Circular,
    None,
}

/// Screen reader announcement level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Politeness {
    #[default]
    Polite,
    Assertive,
    Off,
}

/// Notification body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Text(String),
    /// Structured body rendered one line per entry.
    Lines(Vec<String>),
}

impl Content {
    /// Flattens the body to plain text.
    #[must_use]
    pub fn to_plain_text(&self) -> String {
        match self {
            Content::Text(text) => text.clone(),
            Content::Lines(lines) => lines.join("\n"),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Content::Text(text) => text.trim().is_empty(),
            Content::Lines(lines) => lines.iter().all(|line| line.trim().is_empty()),
        }
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

impl From<Vec<String>> for Content {
    fn from(lines: Vec<String>) -> Self {
        Content::Lines(lines)
    }
}

/// Per-request colour overrides; unset fields use the kind's palette.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColorOverrides {
    pub background: Option<Color>,
    pub text: Option<Color>,
    pub accent: Option<Color>,
}

/// Callback fired once when a notification leaves the screen.
pub type OnClose = Box<dyn FnOnce(CloseReason)>;

/// A button rendered inside the notification.
#[derive(Clone)]
pub struct Action {
    label: String,
    variant: Variant,
    on_click: Rc<dyn Fn(NotificationId)>,
    dismiss: bool,
}

impl Action {
    /// Creates an action that closes its notification after running.
    pub fn new(label: impl Into<String>, on_click: impl Fn(NotificationId) + 'static) -> Self {
        Self {
            label: label.into(),
            variant: Variant::default(),
            on_click: Rc::new(on_click),
            dismiss: true,
        }
    }

    #[must_use]
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Keeps the notification open after the action runs.
    #[must_use]
    pub fn keep_open(mut self) -> Self {
        self.dismiss = false;
        self
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn style(&self) -> Variant {
        self.variant
    }

    #[must_use]
    pub fn dismisses(&self) -> bool {
        self.dismiss
    }

    pub(crate) fn callback(&self) -> Rc<dyn Fn(NotificationId)> {
        Rc::clone(&self.on_click)
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("label", &self.label)
            .field("variant", &self.variant)
            .field("dismiss", &self.dismiss)
            .finish_non_exhaustive()
    }
}

/// A request to display one notification.
pub struct NotificationRequest {
    content: Content,
    title: Option<String>,
    kind: Kind,
    variant: Variant,
    size: Size,
    position: Option<Position>,
    duration: Option<DisplayDuration>,
    progress: ProgressStyle,
    pause_on_hover: bool,
    closable: bool,
    show_icon: bool,
    icon: Option<String>,
    colors: ColorOverrides,
    aria_live: Politeness,
    actions: Vec<Action>,
    on_close: Option<OnClose>,
}

impl NotificationRequest {
    /// Creates a request of the default kind.
    pub fn new(content: impl Into<Content>) -> Self {
        Self {
            content: content.into(),
            title: None,
            kind: Kind::default(),
            variant: Variant::default(),
            size: Size::default(),
            position: None,
            duration: None,
            progress: ProgressStyle::default(),
            pause_on_hover: true,
            closable: true,
            show_icon: true,
            icon: None,
            colors: ColorOverrides::default(),
            aria_live: Politeness::default(),
            actions: Vec::new(),
            on_close: None,
        }
    }

    /// Creates a success notification.
    pub fn success(content: impl Into<Content>) -> Self {
        Self::new(content).with_kind(Kind::Success)
    }

    /// Creates an info notification.
    pub fn info(content: impl Into<Content>) -> Self {
        Self::new(content).with_kind(Kind::Info)
    }

    /// Creates a warning notification.
    pub fn warning(content: impl Into<Content>) -> Self {
        Self::new(content).with_kind(Kind::Warning)
    }

    /// Creates an error notification.
    pub fn error(content: impl Into<Content>) -> Self {
        Self::new(content).with_kind(Kind::Error)
    }

    #[must_use]
    pub fn with_kind(mut self, kind: Kind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Sets the position by name.
    ///
    /// Unknown names leave the position unset so the manager default applies.
    #[must_use]
    pub fn with_position_named(mut self, name: &str) -> Self {
        match name.parse() {
            Ok(position) => self.position = Some(position),
            Err(err) => {
                warn!("{err}, using the manager default");
                self.position = None;
            }
        }
        self
    }

    /// Sets the auto-dismiss duration. [`DisplayDuration::PERSISTENT`] disables it.
    #[must_use]
    pub fn with_duration(mut self, duration: DisplayDuration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Sets the auto-dismiss duration in milliseconds; `0` means persistent.
    #[must_use]
    pub fn with_duration_ms(self, ms: u64) -> Self {
        self.with_duration(DisplayDuration::from_millis(ms))
    }

    #[must_use]
    pub fn persistent(self) -> Self {
        self.with_duration(DisplayDuration::PERSISTENT)
    }

    #[must_use]
    pub fn with_progress(mut self, progress: ProgressStyle) -> Self {
        self.progress = progress;
        self
    }

    #[must_use]
    pub fn pause_on_hover(mut self, pause: bool) -> Self {
        self.pause_on_hover = pause;
        self
    }

    #[must_use]
    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }

    #[must_use]
    pub fn show_icon(mut self, show: bool) -> Self {
        self.show_icon = show;
        self
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: ColorOverrides) -> Self {
        self.colors = colors;
        self
    }

    #[must_use]
    pub fn with_aria_live(mut self, politeness: Politeness) -> Self {
        self.aria_live = politeness;
        self
    }

    #[must_use]
    pub fn with_action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    #[must_use]
    pub fn on_close(mut self, callback: impl FnOnce(CloseReason) + 'static) -> Self {
        self.on_close = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn content(&self) -> &Content {
        &self.content
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// The requested position, if any valid one was given.
    #[must_use]
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// The requested duration, if the caller set one.
    #[must_use]
    pub fn duration(&self) -> Option<DisplayDuration> {
        self.duration
    }

    #[must_use]
    pub fn progress(&self) -> ProgressStyle {
        self.progress
    }

    #[must_use]
    pub fn pauses_on_hover(&self) -> bool {
        self.pause_on_hover
    }

    #[must_use]
    pub fn is_closable(&self) -> bool {
        self.closable
    }

    #[must_use]
    pub fn shows_icon(&self) -> bool {
        self.show_icon
    }

    /// Icon to display: the custom one, else the kind's glyph.
    #[must_use]
    pub fn icon_glyph(&self) -> &str {
        self.icon.as_deref().unwrap_or_else(|| self.kind.glyph())
    }

    #[must_use]
    pub fn colors(&self) -> ColorOverrides {
        self.colors
    }

    /// Accent colour after applying overrides.
    #[must_use]
    pub fn accent_color(&self) -> Color {
        self.colors.accent.unwrap_or_else(|| self.kind.color())
    }

    #[must_use]
    pub fn aria_live(&self) -> Politeness {
        self.aria_live
    }

    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    #[must_use]
    pub fn has_on_close(&self) -> bool {
        self.on_close.is_some()
    }

    pub(crate) fn take_on_close(&mut self) -> Option<OnClose> {
        self.on_close.take()
    }
}

impl fmt::Debug for NotificationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationRequest")
            .field("content", &self.content)
            .field("title", &self.title)
            .field("kind", &self.kind)
            .field("variant", &self.variant)
            .field("size", &self.size)
            .field("position", &self.position)
            .field("duration", &self.duration)
            .field("progress", &self.progress)
            .field("pause_on_hover", &self.pause_on_hover)
            .field("closable", &self.closable)
            .field("show_icon", &self.show_icon)
            .field("icon", &self.icon)
            .field("colors", &self.colors)
            .field("aria_live", &self.aria_live)
            .field("actions", &self.actions)
            .field("on_close", &self.on_close.is_some())
            .finish()
    }
}

/// Partial request applied on top of a preset.
///
/// Every field that is set replaces the preset's value, so overrides always
/// win over what a helper such as `success` pre-fills.
#[derive(Default)]
pub struct Overrides {
    pub kind: Option<Kind>,
    pub title: Option<String>,
    pub variant: Option<Variant>,
    pub size: Option<Size>,
    pub position: Option<Position>,
    pub duration: Option<DisplayDuration>,
    pub progress: Option<ProgressStyle>,
    pub pause_on_hover: Option<bool>,
    pub closable: Option<bool>,
    pub show_icon: Option<bool>,
    pub icon: Option<String>,
    pub colors: Option<ColorOverrides>,
    pub aria_live: Option<Politeness>,
    pub actions: Vec<Action>,
    pub on_close: Option<OnClose>,
}

impl Overrides {
    #[must_use]
    pub fn apply(self, mut request: NotificationRequest) -> NotificationRequest {
        if let Some(kind) = self.kind {
            request.kind = kind;
        }
        if self.title.is_some() {
            request.title = self.title;
        }
        if let Some(variant) = self.variant {
            request.variant = variant;
        }
        if let Some(size) = self.size {
            request.size = size;
        }
        if self.position.is_some() {
            request.position = self.position;
        }
        if self.duration.is_some() {
            request.duration = self.duration;
        }
        if let Some(progress) = self.progress {
            request.progress = progress;
        }
        if let Some(pause) = self.pause_on_hover {
            request.pause_on_hover = pause;
        }
        if let Some(closable) = self.closable {
            request.closable = closable;
        }
        if let Some(show) = self.show_icon {
            request.show_icon = show;
        }
        if self.icon.is_some() {
            request.icon = self.icon;
        }
        if let Some(colors) = self.colors {
            request.colors = colors;
        }
        if let Some(politeness) = self.aria_live {
            request.aria_live = politeness;
        }
        request.actions.extend(self.actions);
        if self.on_close.is_some() {
            request.on_close = self.on_close;
        }
        request
    }
}

impl fmt::Debug for Overrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Overrides")
            .field("kind", &self.kind)
            .field("title", &self.title)
            .field("position", &self.position)
            .field("duration", &self.duration)
            .field("actions", &self.actions.len())
            .field("on_close", &self.on_close.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let request = NotificationRequest::new("hello");
        assert_eq!(request.kind(), Kind::Default);
        assert!(request.pauses_on_hover());
        assert!(request.is_closable());
        assert_eq!(request.aria_live(), Politeness::Polite);
        assert_eq!(request.progress(), ProgressStyle::Linear);
        assert!(request.duration().is_none());
        assert!(request.position().is_none());
    }

    #[test]
    fn helper_constructors_set_correct_kind() {
        assert_eq!(NotificationRequest::success("").kind(), Kind::Success);
        assert_eq!(NotificationRequest::info("").kind(), Kind::Info);
        assert_eq!(NotificationRequest::warning("").kind(), Kind::Warning);
        assert_eq!(NotificationRequest::error("").kind(), Kind::Error);
    }

    #[test]
    fn kind_colors_are_distinct() {
        let colors = [
            Kind::Success.color(),
            Kind::Info.color(),
            Kind::Warning.color(),
            Kind::Error.color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn unknown_position_name_leaves_position_unset() {
        let request = NotificationRequest::new("x")
            .with_position(Position::TopLeft)
            .with_position_named("nowhere");
        assert!(request.position().is_none());

        let request = NotificationRequest::new("x").with_position_named("top-right");
        assert_eq!(request.position(), Some(Position::TopRight));
    }

    #[test]
    fn overrides_win_over_preset() {
        let overrides = Overrides {
            kind: Some(Kind::Warning),
            variant: Some(Variant::Outlined),
            closable: Some(false),
            ..Overrides::default()
        };
        let request = overrides.apply(NotificationRequest::success("saved"));
        assert_eq!(request.kind(), Kind::Warning);
        assert_eq!(request.variant(), Variant::Outlined);
        assert!(!request.is_closable());
        assert!(request.pauses_on_hover());
    }

    #[test]
    fn accent_override_replaces_kind_color() {
        let request = NotificationRequest::error("boom").with_colors(ColorOverrides {
            accent: Some(Color::WHITE),
            ..ColorOverrides::default()
        });
        assert_eq!(request.accent_color(), Color::WHITE);
    }

    #[test]
    fn custom_icon_replaces_glyph() {
        assert_eq!(NotificationRequest::success("").icon_glyph(), "✓");
        assert_eq!(NotificationRequest::success("").with_icon("★").icon_glyph(), "★");
    }

    #[test]
    fn structured_content_flattens_to_lines() {
        let content = Content::from(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(content.to_plain_text(), "a\nb");
        assert!(Content::from("   ").is_empty());
    }
}
