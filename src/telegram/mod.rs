// src/telegram/mod.rs — Telegram Bot API adapter
//
// Raw Bot API over reqwest (https://core.telegram.org/bots/api); long
// polling only, no webhook mode.

pub mod poller;
pub mod types;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::dialogue::Reply;
use crate::infra::errors::BotError;
use types::{ApiResponse, BotUser, InlineKeyboardButton, InlineKeyboardMarkup, Update};

const API_BASE: &str = "https://api.telegram.org";

/// Seconds the server holds a getUpdates call open before answering empty.
const POLL_TIMEOUT_SECS: u64 = 30;

pub struct TelegramBot {
    client: Client,
    token: String,
}

impl TelegramBot {
    pub fn new(token: String) -> Self {
        Self {
            client: Client::new(),
            token,
        }
    }

    fn api_url(&self, method: &str) -> String {
        format!("{API_BASE}/bot{}/{method}", self.token)
    }

    /// POST one method call and unwrap the `{ok, result}` envelope.
    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        body: &serde_json::Value,
    ) -> Result<T, BotError> {
        let resp: ApiResponse<T> = self
            .client
            .post(self.api_url(method))
            .json(body)
            .send()
            .await?
            .json()
            .await?;

        if !resp.ok {
            return Err(BotError::Api {
                method: method.to_string(),
                message: resp.description.unwrap_or_else(|| "unknown".into()),
            });
        }
        resp.result.ok_or_else(|| BotError::Api {
            method: method.to_string(),
            message: "empty result".into(),
        })
    }

    /// Validate the token by calling getMe; returns the bot's username.
    pub async fn validate(&self) -> Result<String, BotError> {
        let me: BotUser = self.call("getMe", &serde_json::json!({})).await?;
        Ok(me
            .username
            .unwrap_or_else(|| me.first_name.unwrap_or_default()))
    }

    /// Long-poll for updates with ids at or past `offset`.
    pub async fn get_updates(&self, offset: i64) -> Result<Vec<Update>, BotError> {
        let body = serde_json::json!({
            "offset": offset,
            "timeout": POLL_TIMEOUT_SECS,
            "allowed_updates": ["message", "callback_query"],
        });
        self.call("getUpdates", &body).await
    }

    /// Send a fresh message, with the reply's keyboard if it has one.
    pub async fn send_message(&self, chat_id: i64, reply: &Reply) -> Result<(), BotError> {
        let mut body = serde_json::json!({
            "chat_id": chat_id,
            "text": reply.text,
        });
        if let Some(markup) = keyboard_markup(reply) {
            body["reply_markup"] = serde_json::to_value(markup)?;
        }
        let _sent: types::Message = self.call("sendMessage", &body).await?;
        Ok(())
    }

    /// Replace the text (and keyboard) of a message the bot sent earlier.
    pub async fn edit_message_text(
        &self,
        chat_id: i64,
        message_id: i64,
        reply: &Reply,
    ) -> Result<(), BotError> {
        let mut body = serde_json::json!({
            "chat_id": chat_id,
            "message_id": message_id,
            "text": reply.text,
        });
        if let Some(markup) = keyboard_markup(reply) {
            body["reply_markup"] = serde_json::to_value(markup)?;
        }
        // The API returns the edited Message, or `true` for inline ones.
        let _edited: serde_json::Value = self.call("editMessageText", &body).await?;
        Ok(())
    }

    /// Acknowledge a callback query so the client stops its spinner.
    pub async fn answer_callback_query(&self, callback_id: &str) -> Result<(), BotError> {
        let body = serde_json::json!({ "callback_query_id": callback_id });
        let _ok: bool = self.call("answerCallbackQuery", &body).await?;
        Ok(())
    }
}

/// Convert a reply's button rows into the wire keyboard, if any.
fn keyboard_markup(reply: &Reply) -> Option<InlineKeyboardMarkup> {
    if reply.keyboard.is_empty() {
        return None;
    }
    Some(InlineKeyboardMarkup {
        inline_keyboard: reply
            .keyboard
            .iter()
            .map(|row| {
                row.iter()
                    .map(|b| InlineKeyboardButton {
                        text: b.label.clone(),
                        callback_data: b.data.clone(),
                    })
                    .collect()
            })
            .collect(),
    })
}
