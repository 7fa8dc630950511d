//! Scripted legal FAQ assistant for clients.
//!
//! Replies come from an ordered keyword table; the first topic with a keyword
//! found in the message answers it. Keywords match whole words, ignoring case.
//! A keyword ending in `*` also matches longer words that start with it.

use std::sync::LazyLock;

use entity::sea_orm_active_enums::ChatBotRole;
use regex::Regex;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::chat_bot_message::ChatBotMessageRepository, error::AppError,
    model::chatbot::ChatBotMessage, util::validate,
};

/// Messages kept per client; older ones are pruned when the history is read.
pub const HISTORY_LIMIT: u64 = 40;

pub const CLOSING_LINE: &str =
    "Let me know if you'd like further information or to consult with one of our lawyers.";

struct Topic {
    keywords: &'static [&'static str],
    answer: &'static str,
}

const TOPICS: &[Topic] = &[
    Topic {
        keywords: &["cancel*", "reschedul*"],
        answer: "You can cancel an appointment from your appointments page before the session starts. Paid bookings are refunded to the original payment method within 10 working days.",
    },
    Topic {
        keywords: &["refund*", "payment*", "pay", "paid", "fee", "fees", "price*", "cost*", "charge*"],
        answer: "Each consultation costs INR 300 and is paid through a secure checkout when you book. If an appointment is cancelled, the payment is refunded within 10 working days.",
    },
    Topic {
        keywords: &["appointment*", "book*", "schedul*", "slot*"],
        answer: "To book a consultation, open a lawyer's profile, choose a date and one of the available time slots, describe your reason and complete the payment. Could you tell me more about the legal issue you would like to discuss?",
    },
    Topic {
        keywords: &["video*", "online", "call*", "meeting*", "room*"],
        answer: "Video consultations take place in a private room that opens at the scheduled time. You can join it from your appointments page once the lawyer has accepted the booking.",
    },
    Topic {
        keywords: &["lawyer*", "advocate*", "attorney*", "speciali*", "expert*"],
        answer: "Our verified lawyers cover family, property, criminal, employment and consumer law, among other areas. You can browse their profiles, qualifications and experience on the lawyers page.",
    },
    Topic {
        keywords: &["document*", "evidence", "paper*", "record*", "proof*"],
        answer: "Bring any contracts, notices, receipts or correspondence related to your matter to the consultation. Are there any documents or evidence related to this situation that you already have?",
    },
    Topic {
        keywords: &["divorce*", "custody", "marriage*", "family", "alimony", "child*"],
        answer: "Family matters such as divorce, custody and maintenance depend closely on the facts of each case. Could you tell me when this issue started and whether any legal action has been taken so far?",
    },
    Topic {
        keywords: &["propert*", "land", "rent*", "tenant*", "landlord*", "lease*"],
        answer: "Property and tenancy disputes usually turn on the written agreements and the payment history. Have you consulted with any legal professionals about this before?",
    },
    Topic {
        keywords: &["criminal", "police", "arrest*", "bail", "fir", "theft"],
        answer: "For criminal matters it is important to speak with a lawyer as early as possible, especially before giving statements. What specific aspects of the situation concern you most?",
    },
    Topic {
        keywords: &["employ*", "job", "jobs", "salary", "fired", "workplace", "termination"],
        answer: "Employment issues such as unpaid wages or wrongful termination depend on your contract and the applicable labour laws. Do you have your appointment letter or contract available?",
    },
    Topic {
        keywords: &["consumer*", "contract*", "agreement*", "product*", "warranty", "service*"],
        answer: "Consumer and contract disputes often start with a written notice to the other party. What was agreed, and when did the problem begin?",
    },
    Topic {
        keywords: &["contact*", "location*", "address*", "office*", "email*", "phone*"],
        answer: "You can reach our support team through the contact page. Many of our lawyers also list their office address on their profile for in-person consultations.",
    },
    Topic {
        keywords: &["hello", "hi", "hey", "good morning", "good evening", "thank*"],
        answer: "Hello! I can help with questions about our legal consultations, appointments, payments and the areas of law our lawyers cover.",
    },
];

const FALLBACK: &str = "I can help with questions about legal consultations, appointments, payments and our lawyers. Could you describe your legal question in a little more detail?";

/// One case-insensitive pattern per topic, in table order.
static TOPIC_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    TOPICS
        .iter()
        .map(|topic| {
            let alternatives: Vec<String> = topic
                .keywords
                .iter()
                .map(|keyword| match keyword.strip_suffix('*') {
                    Some(stem) => format!(r"\b{}\w*", regex::escape(stem)),
                    None => format!(r"\b{}\b", regex::escape(keyword)),
                })
                .collect();

            Regex::new(&format!("(?i){}", alternatives.join("|"))).expect("valid topic pattern")
        })
        .collect()
});

/// Picks the scripted reply for a client message.
pub fn reply_to(message: &str) -> String {
    let answer = TOPICS
        .iter()
        .zip(TOPIC_PATTERNS.iter())
        .find(|(_, pattern)| pattern.is_match(message))
        .map_or(FALLBACK, |(topic, _)| topic.answer);

    format!("{} {}", answer, CLOSING_LINE)
}

pub struct ChatBotService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChatBotService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores the client's message and the bot's reply, returning the reply.
    pub async fn send(&self, client_id: &str, message: Option<&str>) -> Result<Vec<ChatBotMessage>, AppError> {
        validate::required(&[("message", message)])?;
        let message = message.unwrap_or_default().trim();
        validate::length("message", message, 1, 1000)?;

        let repo = ChatBotMessageRepository::new(self.db);
        repo.create(client_id, ChatBotRole::User, message).await?;
        let reply = repo
            .create(client_id, ChatBotRole::Bot, &reply_to(message))
            .await?;

        Ok(vec![reply])
    }

    /// The latest messages of the client, oldest first; older ones are deleted.
    pub async fn history(&self, client_id: &str) -> Result<Vec<ChatBotMessage>, AppError> {
        let repo = ChatBotMessageRepository::new(self.db);
        let messages = repo.get_latest(client_id, HISTORY_LIMIT).await?;

        if messages.len() as u64 == HISTORY_LIMIT {
            if let Some(oldest) = messages.first() {
                let pruned = repo.delete_before(client_id, oldest.id).await?;
                if pruned > 0 {
                    tracing::debug!("Pruned {} chatbot messages of client {}", pruned, client_id);
                }
            }
        }

        Ok(messages)
    }
}
