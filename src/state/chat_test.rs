use super::*;

#[test]
fn new_conversation_opens_with_bot_greeting() {
    let state = ChatState::default();
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].sender, Sender::Bot);
    assert!(state.messages[0].text.contains("How can I help you"));
    assert_eq!(state.messages[0].confidence, None);
}

#[test]
fn push_user_then_bot_keeps_append_order() {
    let mut state = ChatState::default();
    state.push_user("What services do you offer?", 1_000.0);
    state.push_bot("We offer patient support and volunteering.", Some(88.0), 2_000.0);

    assert_eq!(state.messages.len(), 3);
    assert_eq!(state.messages[1].sender, Sender::User);
    assert_eq!(state.messages[1].text, "What services do you offer?");
    assert_eq!(state.messages[2].sender, Sender::Bot);
    assert_eq!(state.messages[2].confidence, Some(88.0));
}

#[test]
fn message_ids_are_unique() {
    let mut state = ChatState::default();
    state.push_user("hello bot", 0.0);
    state.push_bot("hello user", None, 0.0);
    let ids: Vec<&str> = state.messages.iter().map(|m| m.id.as_str()).collect();
    let mut deduped = ids.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(ids.len(), deduped.len());
}
