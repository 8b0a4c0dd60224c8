use super::SYSTEM_PROMPT;

#[test]
fn contains_booking_logic() {
    assert!(SYSTEM_PROMPT.contains("book"));
    assert!(SYSTEM_PROMPT.contains("Quick Audit"));
}

#[test]
fn offers_three_opening_options() {
    assert!(SYSTEM_PROMPT.contains("offer 3 options"));
    assert!(SYSTEM_PROMPT.contains("Quick Audit (book 15-min)"));
    assert!(SYSTEM_PROMPT.contains("Send Case Study"));
    assert!(SYSTEM_PROMPT.contains("Ask a question"));
}

#[test]
fn contains_qualification_requirements_in_order() {
    assert!(SYSTEM_PROMPT.contains("Qualify in 3 questions maximum"));

    let company = SYSTEM_PROMPT.find("Company size").expect("company size");
    let goal = SYSTEM_PROMPT.find("Primary goal").expect("primary goal");
    let timeline = SYSTEM_PROMPT.find("Timeline").expect("timeline");
    assert!(company < goal && goal < timeline);
}

#[test]
fn requires_email_and_phone_capture() {
    assert!(SYSTEM_PROMPT.contains("capture email and phone"));
    assert!(SYSTEM_PROMPT.contains("one-page audit"));
    assert!(SYSTEM_PROMPT.contains("permission"));
}

#[test]
fn contains_exact_pricing_phrasing() {
    assert!(SYSTEM_PROMPT.contains("Packages start at $5,000/mo"));
    assert!(SYSTEM_PROMPT.contains("enterprise quotes start at $25,000"));
}

#[test]
fn references_verbatim_retrieval_usage() {
    assert!(SYSTEM_PROMPT.contains("retrieval results"));
    assert!(SYSTEM_PROMPT.contains("verbatim"));
}

#[test]
fn requires_voice_consent_before_recording() {
    assert!(SYSTEM_PROMPT.contains("voice"));
    assert!(SYSTEM_PROMPT.contains("consent before recording"));
}

#[test]
fn enforces_outcome_focused_tone() {
    assert!(SYSTEM_PROMPT.contains("outcome-focused"));
    assert!(SYSTEM_PROMPT.contains("No generic marketing copy"));
}

#[test]
fn does_not_leak_internal_endpoints() {
    assert!(!SYSTEM_PROMPT.contains("/api/"));
    assert!(!SYSTEM_PROMPT.contains("POST"));
}
