// src/dialogue/event.rs — Inbound events and outbound replies
//
// The transport maps Telegram updates into `Event`s and renders `Reply`s
// back out; nothing in this module knows about the wire format.

/// An inbound event, already stripped of transport details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The `/start` command.
    Start,
    /// An inline-keyboard button tap with its opaque callback payload.
    ButtonTap { data: String },
    /// Non-command free text.
    Text { text: String },
}

/// One inline-keyboard button: display label plus opaque callback payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub data: String,
}

impl Button {
    pub fn new(label: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            data: data.into(),
        }
    }
}

/// An outbound reply: text plus an optional inline keyboard (rows of
/// buttons). An empty keyboard means a plain text message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub keyboard: Vec<Vec<Button>>,
}

impl Reply {
    /// Create a plain text reply.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: Vec::new(),
        }
    }

    /// Builder: attach an inline keyboard.
    pub fn with_keyboard(mut self, rows: Vec<Vec<Button>>) -> Self {
        self.keyboard = rows;
        self
    }
}
