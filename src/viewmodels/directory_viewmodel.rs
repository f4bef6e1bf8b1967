// ============================================================================
// DIRECTORY VIEWMODEL - refresh() and applying its result
// ============================================================================

use crate::error::ClientError;
use crate::services::requests::ApiRequest;
use crate::services::responses::{parse_directory, RawResponse};
use crate::state::app_state::AppState;
use crate::state::sequence::{Channel, RequestTag};
use crate::utils::storage::KeyValueStore;
use crate::viewmodels::commands::{Effect, RenderScope};

/// Full refetch of `GET /activities`; no retry, no diffing
pub fn on_refresh<S: KeyValueStore>(state: &mut AppState<S>) -> Vec<Effect> {
    let tag = state.sequencer.issue(Channel::Directory);
    log::debug!("🔄 [SYNC] Refresh #{} requested", tag.seq);
    vec![Effect::Send {
        tag,
        request: ApiRequest::list_activities(),
    }]
}

pub fn on_refresh_completed<S: KeyValueStore>(
    state: &mut AppState<S>,
    tag: RequestTag,
    outcome: Result<RawResponse, ClientError>,
) -> Vec<Effect> {
    if !state.sequencer.accept(tag) {
        return Vec::new();
    }

    match outcome.and_then(parse_directory) {
        Ok(directory) => {
            log::info!("✅ [SYNC] {} activities loaded (refresh #{})", directory.len(), tag.seq);
            state.directory.replace(directory);
        }
        Err(e) => {
            log::error!("❌ [SYNC] Error fetching activities: {}", e);
            state.directory.fail();
        }
    }
    vec![Effect::Render(RenderScope::Directory)]
}
