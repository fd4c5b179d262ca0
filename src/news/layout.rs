//! Bounded layout for the news panel.
//!
//! The panel has a fixed number of rows. Feeds rarely fill them exactly, so
//! the layout clips long titles and closes a short feed with a single
//! placeholder row instead of leaving blank rows or overflowing.

use crate::news::model::{Headline, Placeholder, Slot};

/// Number of rows in the news panel.
pub const MAX_HEADLINES: usize = 11;

/// Maximum title length, in characters, before clipping.
pub const TITLE_LIMIT: usize = 65;

/// Lays out feed entries into at most `max_slots` render slots.
///
/// Entries are taken in feed order. Titles longer than `title_limit`
/// characters are clipped to the limit and suffixed with `"..."`. When the
/// feed runs out before the panel is full, exactly one placeholder slot ends
/// the sequence: [`Placeholder::NoResults`] if the feed was empty,
/// [`Placeholder::NoMoreEntries`] otherwise. Entries past `max_slots` are
/// ignored, so the output never exceeds `max_slots` slots.
#[must_use]
pub fn layout(entries: &[Headline], max_slots: usize, title_limit: usize) -> Vec<Slot> {
    let mut slots = Vec::with_capacity(entries.len().min(max_slots));
    for i in 0..max_slots {
        match entries.get(i) {
            Some(entry) => slots.push(Slot::Article {
                title: clip_title(&entry.title, title_limit),
                link: entry.link.clone(),
            }),
            None => {
                slots.push(Slot::Placeholder(if i == 0 {
                    Placeholder::NoResults
                } else {
                    Placeholder::NoMoreEntries
                }));
                break;
            }
        }
    }
    slots
}

fn clip_title(title: &str, limit: usize) -> String {
    // Counts characters, not bytes, so multi-byte titles never split mid-char.
    match title.char_indices().nth(limit) {
        Some((byte_end, _)) => {
            let mut clipped = title[..byte_end].to_string();
            clipped.push_str("...");
            clipped
        }
        None => title.to_string(),
    }
}
