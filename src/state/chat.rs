//! Conversation-session state: turn history and the query lifecycle.
//!
//! DESIGN
//! ======
//! `ChatState` is the whole session: history, draft buffer, in-flight
//! flag, and last error. `begin_query` is the only way a request starts,
//! and it enforces the one-in-flight rule itself, so the invariant holds
//! for any caller rather than relying on a disabled submit button. Every
//! settlement (`complete_query` or `fail_query`) clears `busy`, so the
//! panel can never be left stuck mid-request.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::ChatReply;

/// Author of a [`Turn`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// Typed locally by the user.
    User,
    /// Returned by the assistant backend.
    Bot,
}

/// One exchange unit in the conversation history.
#[derive(Clone, Debug, PartialEq)]
pub struct Turn {
    /// Who authored this turn.
    pub role: Role,
    /// Message text: the trimmed query for user turns, the answer text
    /// for bot turns.
    pub content: String,
    /// Citation identifiers backing a bot answer. Always empty for user
    /// turns, and never contains the wire format's null placeholders.
    pub sources: Vec<String>,
}

impl Turn {
    /// A turn typed by the user.
    #[must_use]
    pub fn user(content: String) -> Self {
        Self {
            role: Role::User,
            content,
            sources: Vec::new(),
        }
    }

    /// A turn answered by the backend, keeping only real citations.
    #[must_use]
    pub fn bot(content: String, sources: Vec<Option<String>>) -> Self {
        Self {
            role: Role::Bot,
            content,
            sources: sources.into_iter().flatten().collect(),
        }
    }
}

/// Conversation-session state for one page lifetime.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    /// Append-only history, oldest first.
    pub turns: Vec<Turn>,
    /// Unsent input buffer. Cleared only by a successful send.
    pub draft: String,
    /// True exactly while a chat request is outstanding.
    pub busy: bool,
    /// Message from the most recent failed attempt, cleared when the
    /// next attempt starts.
    pub error: Option<String>,
}

impl ChatState {
    /// Start a query from the current draft.
    ///
    /// Returns the trimmed query text to send, or `None` without any
    /// state change when the draft is blank or a request is already in
    /// flight. On acceptance the user turn is appended immediately and
    /// stays in history even if the request later fails.
    #[must_use]
    pub fn begin_query(&mut self) -> Option<String> {
        if self.busy {
            return None;
        }
        let query = self.draft.trim().to_owned();
        if query.is_empty() {
            return None;
        }
        self.error = None;
        self.busy = true;
        self.turns.push(Turn::user(query.clone()));
        Some(query)
    }

    /// Settle the in-flight query with the backend's answer.
    pub fn complete_query(&mut self, reply: ChatReply) {
        self.turns.push(Turn::bot(reply.response, reply.sources));
        self.draft.clear();
        self.busy = false;
    }

    /// Settle the in-flight query as failed. The draft and the already
    /// appended user turn are left intact so the user can retry.
    pub fn fail_query(&mut self, message: String) {
        self.error = Some(message);
        self.busy = false;
    }
}
