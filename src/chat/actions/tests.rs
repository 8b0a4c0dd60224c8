use super::*;

#[test]
fn booking_phrase_in_response_emits_book_calendar() {
    let actions = classify("Let's book a call", "ok");
    assert!(actions.contains(&ACTION_BOOK_CALENDAR.to_string()));
}

#[test]
fn booking_terms_in_user_message_emit_book_calendar() {
    for message in ["can we book something", "I'd like a meeting"] {
        let actions = classify("Sure.", message);
        assert!(actions.contains(&ACTION_BOOK_CALENDAR.to_string()));
    }
}

#[test]
fn case_study_reference_emits_send_case_study() {
    let actions = classify("Check out our case study (cs-001)", "ok");
    assert!(actions.contains(&ACTION_SEND_CASE_STUDY.to_string()));

    let actions = classify("Sure.", "do you have proof this works?");
    assert!(actions.contains(&ACTION_SEND_CASE_STUDY.to_string()));
}

#[test]
fn email_in_response_emits_request_email() {
    let actions = classify("What is your email address?", "ok");
    assert_eq!(actions, vec![ACTION_REQUEST_EMAIL.to_string()]);
}

#[test]
fn contact_without_booking_emits_request_email() {
    let actions = classify("Could you share your contact details?", "ok");
    assert_eq!(actions, vec![ACTION_REQUEST_EMAIL.to_string()]);
}

#[test]
fn contact_with_booking_suppresses_email_fallback() {
    // "schedule" emits book_calendar first, so "contact" alone is not
    // enough for request_email.
    let actions = classify("Let's schedule a call; I'll need a contact person.", "ok");
    assert_eq!(actions, vec![ACTION_BOOK_CALENDAR.to_string()]);
}

#[test]
fn explicit_email_is_not_suppressed_by_booking() {
    let actions = classify("Let's schedule a call; what's your email?", "ok");
    assert_eq!(
        actions,
        vec![
            ACTION_BOOK_CALENDAR.to_string(),
            ACTION_REQUEST_EMAIL.to_string(),
        ]
    );
}

#[test]
fn matching_is_case_insensitive() {
    let actions = classify("BOOK a CALL and see our CASE STUDY", "ok");
    assert!(actions.contains(&ACTION_BOOK_CALENDAR.to_string()));
    assert!(actions.contains(&ACTION_SEND_CASE_STUDY.to_string()));
}

#[test]
fn output_preserves_rule_order_without_duplicates() {
    let actions = classify(
        "Book a slot, read the case study, and send your email.",
        "book a meeting about the case study",
    );

    assert_eq!(
        actions,
        vec![
            ACTION_BOOK_CALENDAR.to_string(),
            ACTION_SEND_CASE_STUDY.to_string(),
            ACTION_REQUEST_EMAIL.to_string(),
        ]
    );
}

#[test]
fn classify_is_deterministic() {
    let first = classify("book now via email", "show me an example");
    let second = classify("book now via email", "show me an example");
    assert_eq!(first, second);
}

#[test]
fn unrelated_text_emits_nothing() {
    let actions = classify("We build growth engines.", "tell me more");
    assert!(actions.is_empty());
}
