// src/telegram/poller.rs — Long-poll dispatch loop
//
// Pulls updates, maps each one to a dialogue event, runs it through the
// controller, and delivers the reply. Button-tap replies edit the message
// that carried the keyboard; everything else goes out as a fresh message.

use std::time::Duration;

use crate::dialogue::{Controller, Event, Reply};
use crate::infra::errors::BotError;
use crate::telegram::types::Update;
use crate::telegram::TelegramBot;

/// Pause after a failed getUpdates call before retrying.
const POLL_RETRY_DELAY: Duration = Duration::from_secs(5);

/// Where a reply should land: a fresh message, or an edit of the message
/// whose button was tapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Send {
        chat_id: i64,
    },
    Edit {
        chat_id: i64,
        message_id: i64,
        callback_id: String,
    },
}

impl Delivery {
    pub fn chat_id(&self) -> i64 {
        match self {
            Delivery::Send { chat_id } | Delivery::Edit { chat_id, .. } => *chat_id,
        }
    }
}

/// Map one Telegram update to a dialogue event plus its delivery target.
///
/// Returns `None` for updates the bot does not react to: commands other
/// than /start, messages without text, callback queries missing their
/// data or source message.
pub fn event_from_update(update: &Update) -> Option<(Event, Delivery)> {
    if let Some(msg) = &update.message {
        let text = msg.text.as_deref()?;
        let delivery = Delivery::Send {
            chat_id: msg.chat.id,
        };
        return if text == "/start" || text.starts_with("/start ") {
            Some((Event::Start, delivery))
        } else if text.starts_with('/') {
            None
        } else {
            Some((
                Event::Text {
                    text: text.to_string(),
                },
                delivery,
            ))
        };
    }

    if let Some(query) = &update.callback_query {
        let data = query.data.clone()?;
        let msg = query.message.as_ref()?;
        return Some((
            Event::ButtonTap { data },
            Delivery::Edit {
                chat_id: msg.chat.id,
                message_id: msg.message_id,
                callback_id: query.id.clone(),
            },
        ));
    }

    None
}

/// Run the polling loop until ctrl-c.
pub async fn run(bot: &TelegramBot, controller: &mut Controller) {
    let mut offset = 0i64;
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Shutting down");
                break;
            }
            polled = bot.get_updates(offset) => match polled {
                Ok(updates) => {
                    for update in updates {
                        offset = offset.max(update.update_id + 1);
                        dispatch(bot, controller, &update).await;
                    }
                }
                Err(e) => {
                    tracing::warn!("getUpdates failed: {e}");
                    tokio::time::sleep(POLL_RETRY_DELAY).await;
                }
            },
        }
    }
}

/// Run one update through the controller and deliver the reply, if any.
async fn dispatch(bot: &TelegramBot, controller: &mut Controller, update: &Update) {
    let Some((event, delivery)) = event_from_update(update) else {
        return;
    };

    let chat_id = delivery.chat_id();
    let Some(reply) = controller.handle(chat_id, event) else {
        return;
    };

    // Fire and forget: delivery failures are logged, never retried here.
    if let Err(e) = deliver(bot, &delivery, &reply).await {
        tracing::warn!("Reply delivery to chat {chat_id} failed: {e}");
    }
}

async fn deliver(bot: &TelegramBot, delivery: &Delivery, reply: &Reply) -> Result<(), BotError> {
    match delivery {
        Delivery::Send { chat_id } => bot.send_message(*chat_id, reply).await,
        Delivery::Edit {
            chat_id,
            message_id,
            callback_id,
        } => {
            // Ack first so the client drops its spinner even if the edit
            // fails; an ack failure alone is not worth surfacing.
            if let Err(e) = bot.answer_callback_query(callback_id).await {
                tracing::debug!("answerCallbackQuery failed: {e}");
            }
            bot.edit_message_text(*chat_id, *message_id, reply).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telegram::types::{CallbackQuery, Chat, Message};

    fn text_update(chat_id: i64, text: &str) -> Update {
        Update {
            update_id: 1,
            message: Some(Message {
                message_id: 10,
                chat: Chat { id: chat_id },
                text: Some(text.to_string()),
            }),
            callback_query: None,
        }
    }

    fn callback_update(chat_id: i64, data: Option<&str>) -> Update {
        Update {
            update_id: 2,
            message: None,
            callback_query: Some(CallbackQuery {
                id: "cb1".into(),
                data: data.map(String::from),
                message: Some(Message {
                    message_id: 11,
                    chat: Chat { id: chat_id },
                    text: None,
                }),
            }),
        }
    }

    #[test]
    fn test_start_command_maps_to_start() {
        let (event, delivery) = event_from_update(&text_update(42, "/start")).unwrap();
        assert_eq!(event, Event::Start);
        assert_eq!(delivery, Delivery::Send { chat_id: 42 });
    }

    #[test]
    fn test_start_with_payload_still_maps_to_start() {
        let (event, _) = event_from_update(&text_update(42, "/start ref123")).unwrap();
        assert_eq!(event, Event::Start);
    }

    #[test]
    fn test_other_commands_are_ignored() {
        assert_eq!(event_from_update(&text_update(42, "/help")), None);
        assert_eq!(event_from_update(&text_update(42, "/startle")), None);
    }

    #[test]
    fn test_plain_text_maps_to_text() {
        let (event, _) = event_from_update(&text_update(42, "30000")).unwrap();
        assert_eq!(
            event,
            Event::Text {
                text: "30000".into()
            }
        );
    }

    #[test]
    fn test_non_text_message_is_ignored() {
        let update = Update {
            update_id: 3,
            message: Some(Message {
                message_id: 12,
                chat: Chat { id: 42 },
                text: None,
            }),
            callback_query: None,
        };
        assert_eq!(event_from_update(&update), None);
    }

    #[test]
    fn test_callback_maps_to_button_tap_with_edit_delivery() {
        let (event, delivery) =
            event_from_update(&callback_update(42, Some("intent_impulse"))).unwrap();
        assert_eq!(
            event,
            Event::ButtonTap {
                data: "intent_impulse".into()
            }
        );
        assert_eq!(
            delivery,
            Delivery::Edit {
                chat_id: 42,
                message_id: 11,
                callback_id: "cb1".into(),
            }
        );
    }

    #[test]
    fn test_callback_without_data_is_ignored() {
        assert_eq!(event_from_update(&callback_update(42, None)), None);
    }

    #[test]
    fn test_empty_update_is_ignored() {
        let update = Update {
            update_id: 4,
            message: None,
            callback_query: None,
        };
        assert_eq!(event_from_update(&update), None);
    }
}
