// ============================================================================
// REQUEST SEQUENCER - Last issued wins, stale completions are dropped
// ============================================================================

/// Requests whose completions compete for the same piece of state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// `GET /activities` refreshes
    Directory,
    /// login / signup / unregister (they all write the notification)
    Feedback,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTag {
    pub channel: Channel,
    pub seq: u64,
}

#[derive(Clone, Debug, Default)]
pub struct RequestSequencer {
    next_seq: u64,
    last_directory: u64,
    last_feedback: u64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self, channel: Channel) -> RequestTag {
        self.next_seq += 1;
        RequestTag { channel, seq: self.next_seq }
    }

    /// True if the completion is newer than anything applied on its channel; records it.
    pub fn accept(&mut self, tag: RequestTag) -> bool {
        let last = match tag.channel {
            Channel::Directory => &mut self.last_directory,
            Channel::Feedback => &mut self.last_feedback,
        };
        if tag.seq <= *last {
            log::debug!("⏭️ [SEQ] Dropping stale {:?} completion #{} (applied #{})", tag.channel, tag.seq, last);
            return false;
        }
        *last = tag.seq;
        true
    }
}
