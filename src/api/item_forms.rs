//! Form drafts exchanged with the host's data-entry dialogs.
//!
//! A draft holds raw, possibly incomplete field values. `validate` turns it
//! into a store record or reports the first offending field; nothing is
//! written to the store until validation succeeds.

use crate::core::{
    ArtistSpanItem, EventItem, ImageRef, ItemColor, ItemKind, ItemRef, PeriodItem, TimelineItem,
};
use crate::error::{TimelineError, TimelineResult};
use crate::interaction::{MIN_EVENT_HEIGHT, MIN_PERIOD_HEIGHT, MIN_PROPORTIONAL_SIZE};

pub const DEFAULT_EVENT_SIZE: f64 = 120.0;
pub const DEFAULT_PERIOD_HEIGHT: f64 = 40.0;
pub const DEFAULT_POSITION_Y: f64 = 100.0;
pub const DEFAULT_PERIOD_COLOR: &str = "#4682b4";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventDraft {
    pub name: String,
    pub year: Option<i64>,
    pub image: Option<ImageRef>,
    pub position_y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl EventDraft {
    #[must_use]
    pub fn new(name: impl Into<String>, year: i64, image: ImageRef) -> Self {
        Self {
            name: name.into(),
            year: Some(year),
            image: Some(image),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn from_item(item: &EventItem) -> Self {
        Self {
            name: item.name.clone(),
            year: Some(item.year),
            image: Some(item.image.clone()),
            position_y: Some(item.position_y),
            width: Some(item.width),
            height: Some(item.height),
        }
    }

    pub fn validate(&self) -> TimelineResult<EventItem> {
        let kind = ItemKind::Event;
        let name = required_name(kind, &self.name)?;
        let year = self.year.ok_or_else(|| invalid(kind, "year"))?;
        let image = self
            .image
            .clone()
            .filter(|image| !image.is_empty())
            .ok_or_else(|| invalid(kind, "image"))?;
        let position_y = position_or_default(kind, self.position_y)?;
        let width = dimension_or_default(
            kind,
            "width",
            self.width,
            DEFAULT_EVENT_SIZE,
            MIN_PROPORTIONAL_SIZE,
        )?;
        let height = dimension_or_default(
            kind,
            "height",
            self.height,
            DEFAULT_EVENT_SIZE,
            MIN_EVENT_HEIGHT,
        )?;

        Ok(EventItem {
            name,
            year,
            image,
            position_y,
            width,
            height,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PeriodDraft {
    pub name: String,
    pub start_year: Option<i64>,
    pub end_year: Option<i64>,
    /// Raw color input: `#rrggbb`, `#rgb` or a CSS color name.
    pub color: String,
    pub position_y: Option<f64>,
    pub height: Option<f64>,
}

impl PeriodDraft {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        start_year: i64,
        end_year: i64,
        color: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            start_year: Some(start_year),
            end_year: Some(end_year),
            color: color.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn from_item(item: &PeriodItem) -> Self {
        Self {
            name: item.name.clone(),
            start_year: Some(item.start_year),
            end_year: Some(item.end_year),
            color: item.color.to_string(),
            position_y: Some(item.position_y),
            height: Some(item.height),
        }
    }

    /// An end year before the start year is accepted; the bar renders with
    /// zero width.
    pub fn validate(&self) -> TimelineResult<PeriodItem> {
        let kind = ItemKind::Period;
        let name = required_name(kind, &self.name)?;
        let start_year = self.start_year.ok_or_else(|| invalid(kind, "start_year"))?;
        let end_year = self.end_year.ok_or_else(|| invalid(kind, "end_year"))?;
        if self.color.trim().is_empty() {
            return Err(invalid(kind, "color"));
        }
        let color = ItemColor::parse(&self.color).map_err(|_| invalid(kind, "color"))?;
        let position_y = position_or_default(kind, self.position_y)?;
        let height = dimension_or_default(
            kind,
            "height",
            self.height,
            DEFAULT_PERIOD_HEIGHT,
            MIN_PERIOD_HEIGHT,
        )?;

        Ok(PeriodItem {
            name,
            start_year,
            end_year,
            color,
            position_y,
            height,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArtistSpanDraft {
    pub name: String,
    pub birth_year: Option<i64>,
    pub death_year: Option<i64>,
    pub position_y: Option<f64>,
}

impl ArtistSpanDraft {
    #[must_use]
    pub fn new(name: impl Into<String>, birth_year: i64, death_year: i64) -> Self {
        Self {
            name: name.into(),
            birth_year: Some(birth_year),
            death_year: Some(death_year),
            position_y: None,
        }
    }

    #[must_use]
    pub fn from_item(item: &ArtistSpanItem) -> Self {
        Self {
            name: item.name.clone(),
            birth_year: Some(item.birth_year),
            death_year: Some(item.death_year),
            position_y: Some(item.position_y),
        }
    }

    pub fn validate(&self) -> TimelineResult<ArtistSpanItem> {
        let kind = ItemKind::ArtistSpan;
        Ok(ArtistSpanItem {
            name: required_name(kind, &self.name)?,
            birth_year: self.birth_year.ok_or_else(|| invalid(kind, "birth_year"))?,
            death_year: self.death_year.ok_or_else(|| invalid(kind, "death_year"))?,
            position_y: position_or_default(kind, self.position_y)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ItemDraft {
    Event(EventDraft),
    Period(PeriodDraft),
    ArtistSpan(ArtistSpanDraft),
}

impl ItemDraft {
    /// Blank draft for the "add new" toolbar command.
    #[must_use]
    pub fn empty(kind: ItemKind) -> Self {
        match kind {
            ItemKind::Event => Self::Event(EventDraft::default()),
            ItemKind::Period => Self::Period(PeriodDraft {
                color: DEFAULT_PERIOD_COLOR.to_owned(),
                ..PeriodDraft::default()
            }),
            ItemKind::ArtistSpan => Self::ArtistSpan(ArtistSpanDraft::default()),
        }
    }

    #[must_use]
    pub fn from_item(item: &TimelineItem) -> Self {
        match item {
            TimelineItem::Event(event) => Self::Event(EventDraft::from_item(event)),
            TimelineItem::Period(period) => Self::Period(PeriodDraft::from_item(period)),
            TimelineItem::ArtistSpan(span) => Self::ArtistSpan(ArtistSpanDraft::from_item(span)),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Event(_) => ItemKind::Event,
            Self::Period(_) => ItemKind::Period,
            Self::ArtistSpan(_) => ItemKind::ArtistSpan,
        }
    }

    pub fn validate(&self) -> TimelineResult<TimelineItem> {
        match self {
            Self::Event(draft) => draft.validate().map(TimelineItem::Event),
            Self::Period(draft) => draft.validate().map(TimelineItem::Period),
            Self::ArtistSpan(draft) => draft.validate().map(TimelineItem::ArtistSpan),
        }
    }
}

/// Draft handed to the host form. `target` is set when editing an existing
/// item, in which case committing updates it instead of inserting.
#[derive(Debug, Clone, PartialEq)]
pub struct FormRequest {
    pub target: Option<ItemRef>,
    pub draft: ItemDraft,
}

impl FormRequest {
    #[must_use]
    pub fn create(draft: ItemDraft) -> Self {
        Self {
            target: None,
            draft,
        }
    }

    #[must_use]
    pub fn edit(target: ItemRef, draft: ItemDraft) -> Self {
        Self {
            target: Some(target),
            draft,
        }
    }

    #[must_use]
    pub fn is_edit(&self) -> bool {
        self.target.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    Inserted(ItemRef),
    Updated(ItemRef),
    /// The edited item was deleted while the form was open.
    Discarded(ItemRef),
}

impl FormOutcome {
    #[must_use]
    pub fn item(self) -> ItemRef {
        match self {
            Self::Inserted(item) | Self::Updated(item) | Self::Discarded(item) => item,
        }
    }
}

fn invalid(kind: ItemKind, field: &'static str) -> TimelineError {
    TimelineError::InvalidItemFields { kind, field }
}

fn required_name(kind: ItemKind, raw: &str) -> TimelineResult<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(invalid(kind, "name"));
    }
    Ok(name.to_owned())
}

fn position_or_default(kind: ItemKind, value: Option<f64>) -> TimelineResult<f64> {
    let position_y = value.unwrap_or(DEFAULT_POSITION_Y);
    if !position_y.is_finite() || position_y < 0.0 {
        return Err(invalid(kind, "position_y"));
    }
    Ok(position_y)
}

fn dimension_or_default(
    kind: ItemKind,
    field: &'static str,
    value: Option<f64>,
    default: f64,
    min: f64,
) -> TimelineResult<f64> {
    let dimension = value.unwrap_or(default);
    if !dimension.is_finite() || dimension < min {
        return Err(invalid(kind, field));
    }
    Ok(dimension)
}
