use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{TimelineError, TimelineResult};

/// Store-assigned identifier. Never reused after deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(u64);

impl ItemId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Event,
    Period,
    ArtistSpan,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Event => "event",
            Self::Period => "period",
            Self::ArtistSpan => "artist span",
        };
        f.write_str(label)
    }
}

/// Address of one record in the item store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemRef {
    pub kind: ItemKind,
    pub id: ItemId,
}

impl ItemRef {
    #[must_use]
    pub const fn new(kind: ItemKind, id: ItemId) -> Self {
        Self { kind, id }
    }

    #[must_use]
    pub fn not_found(self) -> TimelineError {
        TimelineError::NotFound {
            kind: self.kind,
            id: self.id,
        }
    }
}

/// Opaque in-memory image payload (already decoded from the user's file by
/// the host). Clones share the same buffer.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageRef(Arc<[u8]>);

impl ImageRef {
    #[must_use]
    pub fn new(bytes: impl Into<Arc<[u8]>>) -> Self {
        Self(bytes.into())
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn shares_buffer_with(&self, other: &ImageRef) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ImageRef({} bytes)", self.0.len())
    }
}

const NAMED_COLORS: &[(&str, (u8, u8, u8))] = &[
    ("black", (0, 0, 0)),
    ("silver", (192, 192, 192)),
    ("gray", (128, 128, 128)),
    ("grey", (128, 128, 128)),
    ("white", (255, 255, 255)),
    ("maroon", (128, 0, 0)),
    ("red", (255, 0, 0)),
    ("purple", (128, 0, 128)),
    ("fuchsia", (255, 0, 255)),
    ("magenta", (255, 0, 255)),
    ("green", (0, 128, 0)),
    ("lime", (0, 255, 0)),
    ("olive", (128, 128, 0)),
    ("yellow", (255, 255, 0)),
    ("navy", (0, 0, 128)),
    ("blue", (0, 0, 255)),
    ("teal", (0, 128, 128)),
    ("aqua", (0, 255, 255)),
    ("cyan", (0, 255, 255)),
    ("orange", (255, 165, 0)),
    ("gold", (255, 215, 0)),
    ("brown", (165, 42, 42)),
    ("pink", (255, 192, 203)),
    ("crimson", (220, 20, 60)),
    ("indigo", (75, 0, 130)),
    ("violet", (238, 130, 238)),
    ("salmon", (250, 128, 114)),
    ("coral", (255, 127, 80)),
    ("khaki", (240, 230, 140)),
    ("tan", (210, 180, 140)),
    ("steelblue", (70, 130, 180)),
    ("skyblue", (135, 206, 235)),
    ("seagreen", (46, 139, 87)),
    ("lightgray", (211, 211, 211)),
    ("lightgrey", (211, 211, 211)),
];

/// Period fill color, as entered in the form: hex RGB or a CSS color name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemColor {
    Rgb(u8, u8, u8),
    Named(String),
}

impl ItemColor {
    /// Parses `#rgb`, `#rrggbb` or a known CSS color name (case-insensitive).
    pub fn parse(input: &str) -> TimelineResult<Self> {
        let trimmed = input.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex)
                .map(|(r, g, b)| Self::Rgb(r, g, b))
                .ok_or_else(|| TimelineError::InvalidData(format!("invalid hex color `{input}`")));
        }

        let name = trimmed.to_ascii_lowercase();
        if lookup_named(&name).is_some() {
            return Ok(Self::Named(name));
        }
        Err(TimelineError::InvalidData(format!(
            "unknown color name `{input}`"
        )))
    }

    /// Resolves the color to 8-bit channels.
    ///
    /// Names that were not produced by `parse` resolve to gray.
    #[must_use]
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        match self {
            Self::Rgb(r, g, b) => (*r, *g, *b),
            Self::Named(name) => lookup_named(name).unwrap_or((128, 128, 128)),
        }
    }
}

impl fmt::Display for ItemColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
            Self::Named(name) => f.write_str(name),
        }
    }
}

fn lookup_named(name: &str) -> Option<(u8, u8, u8)> {
    NAMED_COLORS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, rgb)| *rgb)
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let mut channels = hex.chars().map(|c| {
                let digit = c.to_digit(16).unwrap_or(0) as u8;
                digit * 16 + digit
            });
            Some((channels.next()?, channels.next()?, channels.next()?))
        }
        6 => Some((
            u8::from_str_radix(&hex[0..2], 16).ok()?,
            u8::from_str_radix(&hex[2..4], 16).ok()?,
            u8::from_str_radix(&hex[4..6], 16).ok()?,
        )),
        _ => None,
    }
}

/// Dated image with a caption. Its x position is always derived from `year`.
#[derive(Debug, Clone, PartialEq)]
pub struct EventItem {
    pub name: String,
    pub year: i64,
    pub image: ImageRef,
    pub position_y: f64,
    pub width: f64,
    pub height: f64,
}

/// Colored bar spanning `[start_year, end_year]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodItem {
    pub name: String,
    pub start_year: i64,
    pub end_year: i64,
    pub color: ItemColor,
    pub position_y: f64,
    pub height: f64,
}

impl PeriodItem {
    /// Saturates for spans wider than `i64` can hold.
    #[must_use]
    pub fn duration_years(&self) -> i64 {
        self.end_year.saturating_sub(self.start_year)
    }
}

/// Birth–death range of a person, drawn as a dashed line.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistSpanItem {
    pub name: String,
    pub birth_year: i64,
    pub death_year: i64,
    pub position_y: f64,
}

impl ArtistSpanItem {
    #[must_use]
    pub fn lifespan_years(&self) -> i64 {
        self.death_year.saturating_sub(self.birth_year)
    }
}

/// One record of any kind, as handed to and returned from the store.
#[derive(Debug, Clone, PartialEq)]
pub enum TimelineItem {
    Event(EventItem),
    Period(PeriodItem),
    ArtistSpan(ArtistSpanItem),
}

impl TimelineItem {
    #[must_use]
    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Event(_) => ItemKind::Event,
            Self::Period(_) => ItemKind::Period,
            Self::ArtistSpan(_) => ItemKind::ArtistSpan,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Event(item) => &item.name,
            Self::Period(item) => &item.name,
            Self::ArtistSpan(item) => &item.name,
        }
    }

    #[must_use]
    pub fn position_y(&self) -> f64 {
        match self {
            Self::Event(item) => item.position_y,
            Self::Period(item) => item.position_y,
            Self::ArtistSpan(item) => item.position_y,
        }
    }

    /// Year that anchors the item horizontally.
    #[must_use]
    pub fn anchor_year(&self) -> i64 {
        match self {
            Self::Event(item) => item.year,
            Self::Period(item) => item.start_year,
            Self::ArtistSpan(item) => item.birth_year,
        }
    }
}
