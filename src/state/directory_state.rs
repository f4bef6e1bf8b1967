// ============================================================================
// DIRECTORY STATE - Local snapshot of the server's activities
// ============================================================================

use crate::models::activity::ActivityDirectory;

#[derive(Clone, Debug, PartialEq, Default)]
pub enum DirectoryState {
    /// Nothing received yet
    #[default]
    Loading,
    Loaded(ActivityDirectory),
    /// Last refresh failed; the previous snapshot is gone
    Failed,
}

impl DirectoryState {
    pub fn directory(&self) -> Option<&ActivityDirectory> {
        match self {
            DirectoryState::Loaded(directory) => Some(directory),
            _ => None,
        }
    }

    /// Wholesale replacement, never a patch
    pub fn replace(&mut self, directory: ActivityDirectory) {
        for activity in directory.iter().filter(|a| a.is_over_capacity()) {
            log::warn!(
                "⚠️ [SYNC] {} is over capacity ({} participants for {} places)",
                activity.name,
                activity.participants.len(),
                activity.max_participants
            );
        }
        *self = DirectoryState::Loaded(directory);
    }

    pub fn fail(&mut self) {
        *self = DirectoryState::Failed;
    }
}
