use super::*;
use crate::state::conversation::{Sender, TODAY_LABEL};

fn message(id: usize, sender: Sender, date: &str) -> Message {
    Message {
        id,
        sender,
        sender_name: "nome".to_owned(),
        avatar: "/placeholder.svg".to_owned(),
        body: "corpo".to_owned(),
        timestamp: "10:30".to_owned(),
        date: date.to_owned(),
    }
}

// =============================================================
// Date separators
// =============================================================

#[test]
fn first_message_always_gets_a_separator() {
    let messages = vec![message(1, Sender::Company, TODAY_LABEL)];
    assert!(shows_date_separator(&messages, 0));
}

#[test]
fn same_label_run_shows_a_single_separator() {
    let messages = vec![
        message(1, Sender::Company, TODAY_LABEL),
        message(2, Sender::Researcher, TODAY_LABEL),
        message(3, Sender::Company, TODAY_LABEL),
        message(4, Sender::Researcher, TODAY_LABEL),
        message(5, Sender::Company, TODAY_LABEL),
    ];
    let separators = (0..messages.len())
        .filter(|&i| shows_date_separator(&messages, i))
        .count();
    assert_eq!(separators, 1);
    assert!(shows_date_separator(&messages, 0));
}

#[test]
fn separator_appears_on_every_label_change() {
    let messages = vec![
        message(1, Sender::Company, "Ontem"),
        message(2, Sender::Researcher, "Ontem"),
        message(3, Sender::Company, TODAY_LABEL),
        message(4, Sender::Researcher, TODAY_LABEL),
    ];
    assert!(shows_date_separator(&messages, 0));
    assert!(!shows_date_separator(&messages, 1));
    assert!(shows_date_separator(&messages, 2));
    assert!(!shows_date_separator(&messages, 3));
}

#[test]
fn repeated_label_after_a_change_retriggers_the_separator() {
    // Adjacency comparison only: A, B, A yields three separators, not two.
    let messages = vec![
        message(1, Sender::Company, "Ontem"),
        message(2, Sender::Company, TODAY_LABEL),
        message(3, Sender::Company, "Ontem"),
    ];
    assert!(shows_date_separator(&messages, 0));
    assert!(shows_date_separator(&messages, 1));
    assert!(shows_date_separator(&messages, 2));
}

#[test]
fn out_of_range_index_shows_nothing() {
    let messages = vec![message(1, Sender::Company, TODAY_LABEL)];
    assert!(!shows_date_separator(&messages, 5));
}

// =============================================================
// Alignment
// =============================================================

#[test]
fn only_researcher_messages_align_right() {
    let messages = vec![
        message(1, Sender::Company, TODAY_LABEL),
        message(2, Sender::Researcher, TODAY_LABEL),
    ];
    let alignments: Vec<bool> = messages.iter().map(|m| m.sender.is_local()).collect();
    assert_eq!(alignments, vec![false, true]);
}
