// src/dialogue/controller.rs — Dialogue dispatch
//
// Linear three-step flow: /start offers the "buy" entry point, a button
// tap picks the intent, a free-text message supplies the amount. The
// reply to the amount is the verdict, after which the chat's session is
// dropped.

use crate::dialogue::event::{Button, Event, Reply};
use crate::dialogue::session::SessionStore;
use crate::engine::{self, Assessment, Intent};

const CALLBACK_BUY: &str = "buy";
const CALLBACK_INTENT_PREFIX: &str = "intent_";

/// Owns all per-chat state and turns inbound events into replies.
///
/// Dispatch is synchronous: one event in, at most one reply out. Events
/// that arrive out of sequence (free text before an intent is stored,
/// unknown callback payloads) produce no reply and change no state.
#[derive(Debug, Default)]
pub struct Controller {
    sessions: SessionStore,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatch one event for one chat.
    pub fn handle(&mut self, chat_id: i64, event: Event) -> Option<Reply> {
        match event {
            Event::Start => Some(self.greeting()),
            Event::ButtonTap { data } => self.on_button(chat_id, &data),
            Event::Text { text } => self.on_text(chat_id, &text),
        }
    }

    fn greeting(&self) -> Reply {
        Reply::text("👋 Hi! I help you think before you decide.\n\nTap an option below 👇")
            .with_keyboard(vec![vec![Button::new("🛒 Buying something", CALLBACK_BUY)]])
    }

    fn on_button(&mut self, chat_id: i64, data: &str) -> Option<Reply> {
        if data == CALLBACK_BUY {
            return Some(
                Reply::text("What kind of purchase is this?").with_keyboard(vec![
                    vec![
                        Button::new("🔁 Replacement", "intent_replacement"),
                        Button::new("✨ Upgrade", "intent_upgrade"),
                    ],
                    vec![Button::new("😶 Impulse / Desire", "intent_impulse")],
                ]),
            );
        }

        if let Some(slug) = data.strip_prefix(CALLBACK_INTENT_PREFIX) {
            if let Some(intent) = Intent::from_slug(slug) {
                self.sessions.entry(chat_id).intent = Some(intent);
                return Some(Reply::text("💰 Enter approximate amount (numbers only):"));
            }
        }

        None
    }

    fn on_text(&mut self, chat_id: i64, text: &str) -> Option<Reply> {
        // No intent on record: the message is not part of a dialogue.
        let intent = self.sessions.intent(chat_id)?;

        let amount: i64 = match text.trim().parse() {
            Ok(n) => n,
            // Session survives so the user can retry without reselecting.
            Err(_) => return Some(Reply::text("❌ Please enter numbers only.")),
        };

        let assessment = engine::assess(amount, intent);
        self.sessions.clear(chat_id);
        Some(Reply::text(render_insight(intent, amount, &assessment)))
    }
}

/// The "Decision Insight" block sent with every verdict.
fn render_insight(intent: Intent, amount: i64, assessment: &Assessment) -> String {
    format!(
        "📊 Decision Insight\n\
         ------------------\n\
         Intent : {}\n\
         Amount : ₹{}\n\
         Cost   : {}\n\n\
         Verdict: {}\n\
         Advice : {}",
        intent.label(),
        amount,
        assessment.tier.label(),
        assessment.verdict.label(),
        assessment.advice,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tap(data: &str) -> Event {
        Event::ButtonTap { data: data.into() }
    }

    fn text(t: &str) -> Event {
        Event::Text { text: t.into() }
    }

    #[test]
    fn test_start_offers_the_buy_button() {
        let mut ctl = Controller::new();
        let reply = ctl.handle(1, Event::Start).unwrap();
        assert!(reply.text.contains("think before you decide"));
        assert_eq!(reply.keyboard.len(), 1);
        assert_eq!(reply.keyboard[0].len(), 1);
        assert_eq!(reply.keyboard[0][0].data, "buy");
    }

    #[test]
    fn test_buy_tap_offers_three_intents() {
        let mut ctl = Controller::new();
        let reply = ctl.handle(1, tap("buy")).unwrap();
        assert_eq!(reply.text, "What kind of purchase is this?");
        let payloads: Vec<&str> = reply
            .keyboard
            .iter()
            .flatten()
            .map(|b| b.data.as_str())
            .collect();
        assert_eq!(
            payloads,
            ["intent_replacement", "intent_upgrade", "intent_impulse"]
        );
    }

    #[test]
    fn test_intent_tap_stores_intent_and_prompts_for_amount() {
        let mut ctl = Controller::new();
        let reply = ctl.handle(1, tap("intent_upgrade")).unwrap();
        assert!(reply.text.contains("amount"));
        assert!(reply.keyboard.is_empty());

        // The amount that follows is classified against the stored intent.
        let verdict = ctl.handle(1, text("60000")).unwrap();
        assert!(verdict.text.contains("⚠️ Wait"));
    }

    #[test]
    fn test_unknown_callback_payload_is_ignored() {
        let mut ctl = Controller::new();
        assert_eq!(ctl.handle(1, tap("intent_groceries")), None);
        assert_eq!(ctl.handle(1, tap("sell")), None);
        // Nothing was stored, so an amount is still ignored.
        assert_eq!(ctl.handle(1, text("1000")), None);
    }

    #[test]
    fn test_invalid_amount_keeps_the_session() {
        let mut ctl = Controller::new();
        ctl.handle(1, tap("intent_impulse")).unwrap();

        let err = ctl.handle(1, text("abc")).unwrap();
        assert_eq!(err.text, "❌ Please enter numbers only.");

        // Intent survived: a valid retry completes the flow.
        let verdict = ctl.handle(1, text("30000")).unwrap();
        assert!(verdict.text.contains("⚠️ Pause"));
    }

    #[test]
    fn test_verdict_renders_the_insight_block() {
        let mut ctl = Controller::new();
        ctl.handle(1, tap("intent_replacement")).unwrap();
        let reply = ctl.handle(1, text("55000")).unwrap();
        assert!(reply.text.starts_with("📊 Decision Insight"));
        assert!(reply.text.contains("Intent : Replacement"));
        assert!(reply.text.contains("Amount : ₹55000"));
        assert!(reply.text.contains("Cost   : High"));
        assert!(reply.text.contains("Verdict: 🟡 Careful"));
        assert!(reply.text.contains("Advice : Necessary but expensive."));
    }

    #[test]
    fn test_amount_text_tolerates_whitespace_and_sign() {
        let mut ctl = Controller::new();
        ctl.handle(1, tap("intent_replacement")).unwrap();
        let reply = ctl.handle(1, text("  -250 ")).unwrap();
        assert!(reply.text.contains("Amount : ₹-250"));
        assert!(reply.text.contains("Cost   : Low"));
    }
}
