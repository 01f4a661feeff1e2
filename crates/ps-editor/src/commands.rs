//! Undo/Redo command stack for committed resizes.
//!
//! A resize gesture produces many snapped frames but only one command: the
//! rect before the pointer went down and the rect when it came up. Undo and
//! redo hand back the rect the host should write to the element's style.

use ps_core::Rect;
use serde::{Deserialize, Serialize};

/// One committed resize of one element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResizeCommand {
    /// Host-side element identifier (selector, data attribute, ...).
    pub element: String,
    pub before: Rect,
    pub after: Rect,
    pub description: String,
}

impl ResizeCommand {
    pub fn is_noop(&self) -> bool {
        self.before == self.after
    }
}

/// A rect to write back to an element after undo or redo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleChange {
    pub element: String,
    pub rect: Rect,
    pub description: String,
}

/// Bounded undo/redo stacks of resize commands.
pub struct CommandStack {
    undo_stack: Vec<ResizeCommand>,
    redo_stack: Vec<ResizeCommand>,
    /// Maximum undo depth.
    max_depth: usize,
}

impl Default for CommandStack {
    fn default() -> Self {
        Self::new(200)
    }
}

impl CommandStack {
    pub fn new(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::new(),
            max_depth,
        }
    }

    /// Record a committed resize. Returns `false` if it changed nothing.
    pub fn push(&mut self, command: ResizeCommand) -> bool {
        if command.is_noop() {
            log::trace!("skipping no-op resize of {}", command.element);
            return false;
        }
        self.undo_stack.push(command);
        if self.undo_stack.len() > self.max_depth {
            self.undo_stack.remove(0);
        }

        // Clear redo stack on new action
        self.redo_stack.clear();
        true
    }

    /// Undo the last command, returning the rect to restore.
    pub fn undo(&mut self) -> Option<StyleChange> {
        let cmd = self.undo_stack.pop()?;
        let change = StyleChange {
            element: cmd.element.clone(),
            rect: cmd.before,
            description: cmd.description.clone(),
        };
        self.redo_stack.push(cmd);
        Some(change)
    }

    /// Redo the last undone command, returning the rect to re-apply.
    pub fn redo(&mut self) -> Option<StyleChange> {
        let cmd = self.redo_stack.pop()?;
        let change = StyleChange {
            element: cmd.element.clone(),
            rect: cmd.after,
            description: cmd.description.clone(),
        };
        self.undo_stack.push(cmd);
        Some(change)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.undo_stack.is_empty()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
