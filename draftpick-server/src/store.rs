//! Saved drafts, scoped to their owner
//!
//! Every read and write is filtered by user id; a draft owned by someone
//! else behaves exactly like a missing one.

use chrono::{DateTime, Utc};
use draftpick_core::DraftState;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_NAME: &str = "Untitled Draft";
pub const DEFAULT_SIDE: &str = "both";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedDraft {
    pub id: Uuid,
    pub user_id: String,
    pub name: String,
    pub side: String,
    pub notes: String,
    pub state: DraftState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for a new draft; absent text fields take their defaults
#[derive(Clone, Debug, Default)]
pub struct NewDraft {
    pub name: Option<String>,
    pub side: Option<String>,
    pub notes: Option<String>,
    pub state: DraftState,
}

/// Partial update; `None` keeps the stored value
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub side: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub state: Option<DraftState>,
}

#[derive(Debug, Default)]
pub struct DraftStore {
    drafts: Vec<SavedDraft>,
}

impl DraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Owner's drafts, most recently updated first
    pub fn list_for(&self, user_id: &str) -> Vec<SavedDraft> {
        let mut drafts: Vec<SavedDraft> = self
            .drafts
            .iter()
            .filter(|d| d.user_id == user_id)
            .cloned()
            .collect();
        drafts.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        drafts
    }

    pub fn create(&mut self, user_id: &str, new: NewDraft) -> SavedDraft {
        let now = Utc::now();
        let draft = SavedDraft {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            name: new
                .name
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_NAME.to_string()),
            side: new.side.unwrap_or_else(|| DEFAULT_SIDE.to_string()),
            notes: new.notes.unwrap_or_default(),
            state: new.state,
            created_at: now,
            updated_at: now,
        };
        self.drafts.push(draft.clone());
        draft
    }

    pub fn update(&mut self, user_id: &str, id: Uuid, patch: DraftPatch) -> Option<SavedDraft> {
        let draft = self
            .drafts
            .iter_mut()
            .find(|d| d.id == id && d.user_id == user_id)?;

        if let Some(name) = patch.name.filter(|n| !n.trim().is_empty()) {
            draft.name = name;
        }
        if let Some(side) = patch.side {
            draft.side = side;
        }
        if let Some(notes) = patch.notes {
            draft.notes = notes;
        }
        if let Some(state) = patch.state {
            draft.state = state;
        }
        draft.updated_at = Utc::now().max(draft.updated_at);

        Some(draft.clone())
    }

    /// `false` when absent or owned by someone else
    pub fn delete(&mut self, user_id: &str, id: Uuid) -> bool {
        let before = self.drafts.len();
        self.drafts.retain(|d| !(d.id == id && d.user_id == user_id));
        self.drafts.len() != before
    }

    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }
}
