use super::*;

fn message(id: usize, sender: Sender, body: &str, date: &str) -> Message {
    Message {
        id,
        sender,
        sender_name: match sender {
            Sender::Company => "AgroBrasil Pecuária".to_owned(),
            Sender::Researcher => "Dr. João Silva".to_owned(),
        },
        avatar: "/placeholder.svg".to_owned(),
        body: body.to_owned(),
        timestamp: "10:30".to_owned(),
        date: date.to_owned(),
    }
}

// =============================================================
// Sender
// =============================================================

#[test]
fn researcher_is_the_local_party() {
    assert!(Sender::Researcher.is_local());
    assert!(!Sender::Company.is_local());
}

#[test]
fn sender_variants_are_distinct() {
    assert_ne!(Sender::Company, Sender::Researcher);
}

// =============================================================
// Conversation
// =============================================================

#[test]
fn default_conversation_is_empty() {
    let conversation = Conversation::default();
    assert!(conversation.is_empty());
    assert_eq!(conversation.len(), 0);
    assert_eq!(conversation.next_id(), 1);
}

#[test]
fn seeded_preserves_insertion_order() {
    let conversation = Conversation::seeded(vec![
        message(1, Sender::Company, "Olá!", TODAY_LABEL),
        message(2, Sender::Researcher, "Oi!", TODAY_LABEL),
    ]);
    assert_eq!(conversation.len(), 2);
    assert_eq!(conversation.messages()[0].id, 1);
    assert_eq!(conversation.messages()[1].id, 2);
}

#[test]
fn next_id_is_length_plus_one() {
    let mut conversation = Conversation::seeded(vec![
        message(1, Sender::Company, "Olá!", TODAY_LABEL),
    ]);
    assert_eq!(conversation.next_id(), 2);
    conversation.append(message(2, Sender::Researcher, "Oi!", TODAY_LABEL));
    assert_eq!(conversation.next_id(), 3);
}

#[test]
fn append_places_message_last() {
    let mut conversation = Conversation::seeded(vec![
        message(1, Sender::Company, "Olá!", TODAY_LABEL),
    ]);
    conversation.append(message(2, Sender::Researcher, "Oi!", TODAY_LABEL));
    let last = conversation.messages().last().expect("non-empty");
    assert_eq!(last.id, 2);
    assert_eq!(last.body, "Oi!");
}

#[test]
fn length_is_monotonically_non_decreasing_across_appends() {
    let mut conversation = Conversation::default();
    let mut previous = conversation.len();
    for id in 1..=10 {
        conversation.append(message(id, Sender::Researcher, "mensagem", TODAY_LABEL));
        assert!(conversation.len() >= previous);
        previous = conversation.len();
    }
    assert_eq!(conversation.len(), 10);
}
