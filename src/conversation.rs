// src/conversation.rs

use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// One entry in the conversation. Created on submit or on settle of the
/// request, never mutated afterwards, never deleted.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: u64,
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Local>,
}

/// Append-only, in-memory conversation store. Insertion order is display
/// order; the store lives for the session and is discarded on exit.
#[derive(Debug, Default)]
pub struct Conversation {
    messages: Vec<Message>,
    next_id: u64,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, text: String) -> u64 {
        self.push(Sender::User, text)
    }

    pub fn push_bot(&mut self, text: String) -> u64 {
        self.push(Sender::Bot, text)
    }

    fn push(&mut self, sender: Sender, text: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(Message {
            id,
            sender,
            text,
            timestamp: Local::now(),
        });
        id
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_keep_insertion_order() {
        let mut conv = Conversation::new();
        conv.push_user("primeira".to_string());
        conv.push_bot("resposta".to_string());
        conv.push_user("segunda".to_string());

        let senders: Vec<Sender> = conv.messages().iter().map(|m| m.sender).collect();
        assert_eq!(senders, vec![Sender::User, Sender::Bot, Sender::User]);
        assert_eq!(conv.len(), 3);
    }

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut conv = Conversation::new();
        let a = conv.push_user("a".to_string());
        let b = conv.push_bot("b".to_string());
        let c = conv.push_user("c".to_string());
        assert!(a < b && b < c);
    }
}
