#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Who authored a chat log entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// One entry in the chatbot conversation log.
#[derive(Clone, Debug)]
pub struct ChatMessage {
    pub id: String,
    pub sender: Sender,
    pub text: String,
    /// Milliseconds since the epoch, for the HH:MM stamp in the log.
    pub timestamp: f64,
    /// Match confidence (percent) the bot attaches to real answers.
    pub confidence: Option<f64>,
}

/// Append-only chatbot conversation state.
#[derive(Clone, Debug)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
}

impl Default for ChatState {
    /// A new conversation opens with the bot's greeting.
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage {
                id: uuid::Uuid::new_v4().to_string(),
                sender: Sender::Bot,
                text: "Hello! I am the CareLink bot. How can I help you today?".to_owned(),
                timestamp: 0.0,
                confidence: None,
            }],
        }
    }
}

impl ChatState {
    /// Append the user's outgoing message.
    pub fn push_user(&mut self, text: &str, timestamp: f64) {
        self.messages.push(ChatMessage {
            id: uuid::Uuid::new_v4().to_string(),
            sender: Sender::User,
            text: text.to_owned(),
            timestamp,
            confidence: None,
        });
    }

    /// Append the bot's reply. Error-derived fallback text arrives here
    /// too, with no confidence attached.
    pub fn push_bot(&mut self, text: &str, confidence: Option<f64>, timestamp: f64) {
        self.messages.push(ChatMessage {
            id: uuid::Uuid::new_v4().to_string(),
            sender: Sender::Bot,
            text: text.to_owned(),
            timestamp,
            confidence,
        });
    }
}
