//! The mock chat room.
//!
//! Sending a message schedules a simulated reply: the peer starts "typing"
//! after a short delay and answers with a canned line a little later. Each
//! reply runs as a tokio task owned by the room. Tasks are aborted by
//! `cancel_pending` and when the room is dropped, so leaving the chat screen
//! never lets a stale reply land.

use std::time::Duration;

use chrono::Utc;
use rand::seq::SliceRandom;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::models::{Message, MessageKind};
use crate::storage::{SharedStore, MESSAGE_LOG_KEY};

// ============================================================================
// Constants
// ============================================================================

/// Buffer size for the reply event channel.
const CHANNEL_BUFFER_SIZE: usize = 32;

/// Maximum length for the message draft.
const MAX_DRAFT_LENGTH: usize = 1000;

/// Delay between sending and the peer starting to type.
pub const TYPING_DELAY: Duration = Duration::from_millis(500);

/// How long the peer "types" before the reply lands.
pub const REPLY_DELAY: Duration = Duration::from_millis(2000);

/// Draft prefix that attaches a file instead of sending text.
pub const ATTACH_COMMAND: &str = "/attach ";

pub const AUTO_REPLIES: [&str; 5] = [
    "That's interesting!",
    "I agree with you.",
    "Let me think about that.",
    "Good point!",
    "Thanks for sharing!",
];

pub const QUICK_REPLIES: [&str; 5] = [
    "That's awesome! 👍",
    "Sounds good to me 😊",
    "Let's do it! 🎉",
    "Can we call later? 📞",
    "Sure thing! ✅",
];

/// Events delivered by scheduled reply tasks.
#[derive(Debug)]
pub enum ChatEvent {
    TypingStarted,
    Reply(Message),
}

pub struct ChatRoom {
    me: String,
    peer: String,
    messages: Vec<Message>,
    pub draft: String,
    peer_typing: bool,
    quick_reply_index: Option<usize>,
    next_seq: u64,
    store: SharedStore,
    events_tx: mpsc::Sender<ChatEvent>,
    events_rx: mpsc::Receiver<ChatEvent>,
    pending: Vec<JoinHandle<()>>,
}

impl ChatRoom {
    /// Open the room for `me` talking to `peer`, restoring the transcript
    /// from storage when there is one.
    pub fn open(me: impl Into<String>, peer: impl Into<String>, store: SharedStore) -> Self {
        let me = me.into();
        let peer = peer.into();

        let stored = match store.load::<Vec<Message>>(MESSAGE_LOG_KEY) {
            Ok(stored) => stored.filter(|messages| !messages.is_empty()),
            Err(e) => {
                debug!(error = %e, "Ignoring unreadable message log");
                None
            }
        };
        let messages = stored.unwrap_or_else(|| Self::seed_messages(&me, &peer));

        let (events_tx, events_rx) = mpsc::channel(CHANNEL_BUFFER_SIZE);

        Self {
            me,
            peer,
            messages,
            draft: String::new(),
            peer_typing: false,
            quick_reply_index: None,
            next_seq: 0,
            store,
            events_tx,
            events_rx,
            pending: Vec::new(),
        }
    }

    fn seed_messages(me: &str, peer: &str) -> Vec<Message> {
        let now = Utc::now();
        vec![
            Message::new(
                "1",
                peer,
                "Hey! How are you doing?",
                MessageKind::Text,
                now - chrono::Duration::hours(1),
            ),
            Message::new(
                "2",
                me,
                "I'm doing great! Just working on some projects.",
                MessageKind::Text,
                now - chrono::Duration::minutes(30),
            ),
        ]
    }

    pub fn me(&self) -> &str {
        &self.me
    }

    pub fn peer(&self) -> &str {
        &self.peer
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_peer_typing(&self) -> bool {
        self.peer_typing
    }

    pub fn pending_replies(&self) -> usize {
        self.pending.iter().filter(|h| !h.is_finished()).count()
    }

    // =========================================================================
    // Draft editing
    // =========================================================================

    pub fn push_char(&mut self, c: char) {
        if self.draft.chars().count() < MAX_DRAFT_LENGTH && !c.is_control() {
            self.draft.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        self.draft.pop();
    }

    /// Replace the draft with the next quick reply.
    pub fn cycle_quick_reply(&mut self) {
        let next = self
            .quick_reply_index
            .map(|i| (i + 1) % QUICK_REPLIES.len())
            .unwrap_or(0);
        self.quick_reply_index = Some(next);
        self.draft = QUICK_REPLIES[next].to_string();
    }

    /// Send the draft, or attach a file if it starts with `/attach `.
    /// Returns false if nothing was sent.
    pub fn submit(&mut self) -> bool {
        if let Some(name) = self.draft.strip_prefix(ATTACH_COMMAND) {
            let name = name.trim().to_string();
            if self.attach(&name) {
                self.draft.clear();
                return true;
            }
            return false;
        }
        self.send()
    }

    // =========================================================================
    // Sending
    // =========================================================================

    /// Send the draft as a text message. Blank drafts are ignored.
    pub fn send(&mut self) -> bool {
        if self.draft.trim().is_empty() {
            return false;
        }

        let content = std::mem::take(&mut self.draft);
        self.quick_reply_index = None;
        let id = self.next_id();
        self.messages
            .push(Message::new(id, self.me.clone(), content, MessageKind::Text, Utc::now()));
        self.persist();
        self.schedule_reply();
        true
    }

    /// Post a file message. Nothing is uploaded; only the name is shown.
    pub fn attach(&mut self, file_name: &str) -> bool {
        let file_name = file_name.trim();
        if file_name.is_empty() {
            return false;
        }

        let id = self.next_id();
        self.messages.push(Message::new(
            id,
            self.me.clone(),
            format!("📎 {}", file_name),
            MessageKind::File,
            Utc::now(),
        ));
        self.persist();
        true
    }

    fn schedule_reply(&mut self) {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!("No async runtime, skipping simulated reply");
            return;
        };

        let content = AUTO_REPLIES
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(AUTO_REPLIES[0]);
        let reply = Message::new(
            self.next_id(),
            self.peer.clone(),
            content,
            MessageKind::Text,
            Utc::now(),
        );

        let tx = self.events_tx.clone();
        let handle = runtime.spawn(async move {
            tokio::time::sleep(TYPING_DELAY).await;
            if tx.send(ChatEvent::TypingStarted).await.is_err() {
                return;
            }
            tokio::time::sleep(REPLY_DELAY).await;
            let _ = tx.send(ChatEvent::Reply(reply)).await;
        });

        self.pending.retain(|h| !h.is_finished());
        self.pending.push(handle);
    }

    // =========================================================================
    // Event delivery
    // =========================================================================

    /// Apply any events delivered by reply tasks. Never blocks.
    /// Returns true if anything changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.events_rx.try_recv() {
            changed = true;
            match event {
                ChatEvent::TypingStarted => self.peer_typing = true,
                ChatEvent::Reply(mut message) => {
                    self.peer_typing = false;
                    message.timestamp = Utc::now();
                    debug!(id = %message.id, "Simulated reply delivered");
                    self.messages.push(message);
                    self.persist();
                }
            }
        }
        self.pending.retain(|h| !h.is_finished());
        changed
    }

    /// Abort every scheduled reply and drop anything already queued.
    pub fn cancel_pending(&mut self) {
        if !self.pending.is_empty() {
            debug!(count = self.pending.len(), "Cancelling scheduled replies");
        }
        for handle in self.pending.drain(..) {
            handle.abort();
        }
        while self.events_rx.try_recv().is_ok() {}
        self.peer_typing = false;
    }

    fn next_id(&mut self) -> String {
        self.next_seq += 1;
        format!("{}-{}", Utc::now().timestamp_millis(), self.next_seq)
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(MESSAGE_LOG_KEY, &self.messages) {
            warn!(error = %e, "Failed to save message log");
        }
    }
}

impl Drop for ChatRoom {
    fn drop(&mut self) {
        for handle in &self.pending {
            handle.abort();
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn open_room(store: &SharedStore) -> ChatRoom {
        ChatRoom::open("Rachit_14", "Banku", store.clone())
    }

    #[test]
    fn test_new_room_is_seeded() {
        let room = open_room(&MemoryStore::shared());
        assert_eq!(room.messages().len(), 2);
        assert!(room.messages()[0].is_from("Banku"));
        assert!(room.messages()[1].is_from("Rachit_14"));
        assert!(room.messages()[0].timestamp < room.messages()[1].timestamp);
    }

    #[test]
    fn test_blank_draft_is_ignored() {
        let mut room = open_room(&MemoryStore::shared());
        room.draft = "   ".to_string();
        assert!(!room.submit());
        assert_eq!(room.messages().len(), 2);
        assert_eq!(room.draft, "   ");
    }

    #[test]
    fn test_send_without_runtime_still_posts() {
        let mut room = open_room(&MemoryStore::shared());
        room.draft = "hello".to_string();
        assert!(room.submit());
        assert!(room.draft.is_empty());
        assert_eq!(room.messages().last().unwrap().content, "hello");
        assert_eq!(room.pending_replies(), 0);
    }

    #[test]
    fn test_attach_command() {
        let mut room = open_room(&MemoryStore::shared());
        room.draft = "/attach notes.pdf".to_string();
        assert!(room.submit());

        let last = room.messages().last().unwrap();
        assert_eq!(last.kind, MessageKind::File);
        assert_eq!(last.content, "📎 notes.pdf");

        room.draft = "/attach   ".to_string();
        assert!(!room.submit());
    }

    #[test]
    fn test_quick_replies_cycle() {
        let mut room = open_room(&MemoryStore::shared());
        room.cycle_quick_reply();
        assert_eq!(room.draft, QUICK_REPLIES[0]);
        for _ in 0..QUICK_REPLIES.len() {
            room.cycle_quick_reply();
        }
        assert_eq!(room.draft, QUICK_REPLIES[0]);
    }

    #[test]
    fn test_transcript_persists_between_opens() {
        let store = MemoryStore::shared();
        {
            let mut room = open_room(&store);
            room.attach("photo.jpg");
        }
        let room = open_room(&store);
        assert_eq!(room.messages().len(), 3);
        assert_eq!(room.messages()[2].content, "📎 photo.jpg");
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_arrives_after_typing() {
        let mut room = open_room(&MemoryStore::shared());
        room.draft = "hello".to_string();
        assert!(room.submit());
        assert_eq!(room.pending_replies(), 1);

        tokio::time::sleep(TYPING_DELAY + Duration::from_millis(10)).await;
        assert!(room.poll());
        assert!(room.is_peer_typing());
        assert_eq!(room.messages().len(), 3);

        tokio::time::sleep(REPLY_DELAY).await;
        assert!(room.poll());
        assert!(!room.is_peer_typing());

        let reply = room.messages().last().unwrap();
        assert!(reply.is_from("Banku"));
        assert!(AUTO_REPLIES.contains(&reply.content.as_str()));
        assert_eq!(room.pending_replies(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_pending_stops_reply() {
        let mut room = open_room(&MemoryStore::shared());
        room.draft = "hello".to_string();
        room.submit();

        tokio::time::sleep(TYPING_DELAY + Duration::from_millis(10)).await;
        room.cancel_pending();
        assert!(!room.is_peer_typing());

        tokio::time::sleep(REPLY_DELAY * 2).await;
        assert!(!room.poll());
        assert_eq!(room.messages().len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_room_cancels_reply() {
        let mut room = open_room(&MemoryStore::shared());
        room.draft = "bye".to_string();
        assert!(room.submit());
        let reply_task = room.pending[0].abort_handle();
        assert!(!reply_task.is_finished());

        drop(room);
        // Well short of the typing delay, so only an abort can finish the task
        tokio::time::sleep(TYPING_DELAY / 5).await;
        assert!(reply_task.is_finished());
    }
}
