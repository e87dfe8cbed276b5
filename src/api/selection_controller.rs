use tracing::{debug, warn};

use crate::core::{ItemKind, ItemRef, TimelineItem};
use crate::error::{TimelineError, TimelineResult};
use crate::render::Renderer;

use super::{FormOutcome, FormRequest, ItemDraft, PluginEvent, TimelineEditor};

impl<R: Renderer> TimelineEditor<R> {
    #[must_use]
    pub fn selected_item(&self) -> Option<ItemRef> {
        self.selection
    }

    /// Makes `target` the sole selection.
    pub fn select(&mut self, target: ItemRef) -> TimelineResult<()> {
        if !self.store.contains(target) {
            return Err(target.not_found());
        }
        self.set_selection(Some(target));
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.set_selection(None);
    }

    fn set_selection(&mut self, selection: Option<ItemRef>) {
        if self.selection == selection {
            return;
        }
        self.selection = selection;
        self.emit_plugin_event(PluginEvent::SelectionChanged { selection });
    }

    /// Inserts an already validated record.
    pub fn insert_item(&mut self, item: TimelineItem) -> ItemRef {
        let target = self.store.insert(item);
        self.emit_plugin_event(PluginEvent::ItemInserted { item: target });
        target
    }

    /// Replaces the record at `target`.
    pub fn update_item(&mut self, target: ItemRef, item: TimelineItem) -> TimelineResult<()> {
        self.store.update(target, item)?;
        self.emit_plugin_event(PluginEvent::ItemUpdated { item: target });
        Ok(())
    }

    /// Removes `target`. Returns `false` when it was already gone.
    ///
    /// The selection is cleared only when it pointed at `target`.
    pub fn delete_item(&mut self, target: ItemRef) -> bool {
        match self.store.delete(target) {
            Ok(_) => {
                if self.selection == Some(target) {
                    self.clear_selection();
                }
                self.emit_plugin_event(PluginEvent::ItemDeleted { item: target });
                true
            }
            Err(err) => {
                debug!(error = %err, "delete ignored");
                false
            }
        }
    }

    /// Toolbar "delete" command.
    pub fn delete_selected(&mut self) -> bool {
        match self.selection {
            Some(target) => self.delete_item(target),
            None => false,
        }
    }

    /// Toolbar "edit" command: the selected item's values, keyed by its id.
    #[must_use]
    pub fn edit_selected(&self) -> Option<FormRequest> {
        let target = self.selection?;
        let item = self.store.get(target)?;
        Some(FormRequest::edit(target, ItemDraft::from_item(&item)))
    }

    /// Toolbar "add new" command: a blank draft of `kind`.
    #[must_use]
    pub fn add_new(&self, kind: ItemKind) -> FormRequest {
        FormRequest::create(ItemDraft::empty(kind))
    }

    /// Commits a form: validates the draft, then inserts or updates.
    ///
    /// Invalid drafts leave the store untouched. Committing an edit whose
    /// item was deleted meanwhile is reported as `Discarded`.
    pub fn submit_form(&mut self, request: FormRequest) -> TimelineResult<FormOutcome> {
        let item = match request.draft.validate() {
            Ok(item) => item,
            Err(err) => {
                warn!(error = %err, "form submission rejected");
                return Err(err);
            }
        };

        let Some(target) = request.target else {
            return Ok(FormOutcome::Inserted(self.insert_item(item)));
        };

        if target.kind != item.kind() {
            return Err(TimelineError::InvalidData(format!(
                "cannot edit {} `{}` with a {} form",
                target.kind,
                target.id,
                item.kind()
            )));
        }

        match self.update_item(target, item) {
            Ok(()) => Ok(FormOutcome::Updated(target)),
            Err(TimelineError::NotFound { .. }) => {
                debug!(kind = %target.kind, id = %target.id, "edited item no longer exists");
                Ok(FormOutcome::Discarded(target))
            }
            Err(err) => Err(err),
        }
    }
}
