//! Synthetic message batches.
//!
//! Backs the "send more messages" affordance: a small random batch of
//! random-length text messages, handy for exercising bulk insertion and
//! scroll behavior without typing.

use std::ops::RangeInclusive;

use chatpane_core::ChatMessage;
use rand::Rng;

/// Messages per batch.
const BATCH_SIZE: RangeInclusive<usize> = 3..=5;

/// Characters per message.
const MESSAGE_LEN: RangeInclusive<usize> = 50..=300;

/// Alphabet the messages are drawn from.
const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz1234567890";

/// Generate a filler batch: 3-5 text messages of 50-300 characters each.
pub fn generate(rng: &mut impl Rng) -> Vec<ChatMessage> {
    let count = rng.random_range(BATCH_SIZE);
    (0..count)
        .map(|_| {
            let len = rng.random_range(MESSAGE_LEN);
            let text: String = (0..len)
                .map(|_| char::from(ALPHABET[rng.random_range(0..ALPHABET.len())]))
                .collect();
            ChatMessage::text(text)
        })
        .collect()
}
