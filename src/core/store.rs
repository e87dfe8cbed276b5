use indexmap::IndexMap;
use tracing::debug;

use crate::core::{
    ArtistSpanItem, EventItem, ItemId, ItemKind, ItemRef, PeriodItem, TimelineItem,
};
use crate::error::{TimelineError, TimelineResult};

/// Owner of every timeline record.
///
/// Each kind lives in its own insertion-ordered collection; iteration order is
/// draw order, so later inserts render on top. Updates replace whole records.
#[derive(Debug, Clone)]
pub struct ItemStore {
    next_id: u64,
    events: IndexMap<ItemId, EventItem>,
    periods: IndexMap<ItemId, PeriodItem>,
    artist_spans: IndexMap<ItemId, ArtistSpanItem>,
}

impl Default for ItemStore {
    fn default() -> Self {
        Self {
            next_id: 1,
            events: IndexMap::new(),
            periods: IndexMap::new(),
            artist_spans: IndexMap::new(),
        }
    }
}

impl ItemStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, item: TimelineItem) -> ItemRef {
        let id = ItemId::new(self.next_id);
        self.next_id += 1;
        let kind = item.kind();
        match item {
            TimelineItem::Event(event) => {
                self.events.insert(id, event);
            }
            TimelineItem::Period(period) => {
                self.periods.insert(id, period);
            }
            TimelineItem::ArtistSpan(span) => {
                self.artist_spans.insert(id, span);
            }
        }
        debug!(%kind, %id, "item inserted");
        ItemRef::new(kind, id)
    }

    /// Replaces the record at `target` with `item`.
    pub fn update(&mut self, target: ItemRef, item: TimelineItem) -> TimelineResult<()> {
        if item.kind() != target.kind {
            return Err(TimelineError::InvalidData(format!(
                "cannot store a {} record under {} `{}`",
                item.kind(),
                target.kind,
                target.id
            )));
        }

        let slot_found = match item {
            TimelineItem::Event(event) => replace(&mut self.events, target.id, event),
            TimelineItem::Period(period) => replace(&mut self.periods, target.id, period),
            TimelineItem::ArtistSpan(span) => replace(&mut self.artist_spans, target.id, span),
        };
        if !slot_found {
            return Err(target.not_found());
        }
        Ok(())
    }

    /// Removes `target`, preserving the order of the remaining records.
    pub fn delete(&mut self, target: ItemRef) -> TimelineResult<TimelineItem> {
        let removed = match target.kind {
            ItemKind::Event => self.events.shift_remove(&target.id).map(TimelineItem::Event),
            ItemKind::Period => self.periods.shift_remove(&target.id).map(TimelineItem::Period),
            ItemKind::ArtistSpan => self
                .artist_spans
                .shift_remove(&target.id)
                .map(TimelineItem::ArtistSpan),
        };
        let removed = removed.ok_or_else(|| target.not_found())?;
        debug!(kind = %target.kind, id = %target.id, "item deleted");
        Ok(removed)
    }

    /// Returns a copy of the record at `target`.
    #[must_use]
    pub fn get(&self, target: ItemRef) -> Option<TimelineItem> {
        match target.kind {
            ItemKind::Event => self.event(target.id).cloned().map(TimelineItem::Event),
            ItemKind::Period => self.period(target.id).cloned().map(TimelineItem::Period),
            ItemKind::ArtistSpan => self
                .artist_span(target.id)
                .cloned()
                .map(TimelineItem::ArtistSpan),
        }
    }

    #[must_use]
    pub fn contains(&self, target: ItemRef) -> bool {
        match target.kind {
            ItemKind::Event => self.events.contains_key(&target.id),
            ItemKind::Period => self.periods.contains_key(&target.id),
            ItemKind::ArtistSpan => self.artist_spans.contains_key(&target.id),
        }
    }

    #[must_use]
    pub fn event(&self, id: ItemId) -> Option<&EventItem> {
        self.events.get(&id)
    }

    #[must_use]
    pub fn period(&self, id: ItemId) -> Option<&PeriodItem> {
        self.periods.get(&id)
    }

    #[must_use]
    pub fn artist_span(&self, id: ItemId) -> Option<&ArtistSpanItem> {
        self.artist_spans.get(&id)
    }

    pub fn events(&self) -> impl DoubleEndedIterator<Item = (ItemId, &EventItem)> {
        self.events.iter().map(|(id, item)| (*id, item))
    }

    pub fn periods(&self) -> impl DoubleEndedIterator<Item = (ItemId, &PeriodItem)> {
        self.periods.iter().map(|(id, item)| (*id, item))
    }

    pub fn artist_spans(&self) -> impl DoubleEndedIterator<Item = (ItemId, &ArtistSpanItem)> {
        self.artist_spans.iter().map(|(id, item)| (*id, item))
    }

    #[must_use]
    pub fn len(&self, kind: ItemKind) -> usize {
        match kind {
            ItemKind::Event => self.events.len(),
            ItemKind::Period => self.periods.len(),
            ItemKind::ArtistSpan => self.artist_spans.len(),
        }
    }

    #[must_use]
    pub fn total_len(&self) -> usize {
        self.events.len() + self.periods.len() + self.artist_spans.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_len() == 0
    }
}

fn replace<T>(collection: &mut IndexMap<ItemId, T>, id: ItemId, record: T) -> bool {
    match collection.get_mut(&id) {
        Some(slot) => {
            *slot = record;
            true
        }
        None => false,
    }
}
