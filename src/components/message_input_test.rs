use super::*;

#[test]
fn non_empty_draft_can_submit() {
    assert!(can_submit("Posso agendar para quinta-feira."));
}

#[test]
fn surrounding_whitespace_does_not_block_submission() {
    assert!(can_submit("  olá  "));
}

#[test]
fn empty_draft_cannot_submit() {
    assert!(!can_submit(""));
}

#[test]
fn whitespace_only_draft_cannot_submit() {
    assert!(!can_submit("   "));
    assert!(!can_submit("\n\t "));
}
