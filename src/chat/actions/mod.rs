#[cfg(test)]
mod tests;

pub const ACTION_BOOK_CALENDAR: &str = "book_calendar";
pub const ACTION_SEND_CASE_STUDY: &str = "send_case_study_cs-001";
pub const ACTION_REQUEST_EMAIL: &str = "request_email";

/// One entry of the versioned rule table. A rule fires when any of its
/// response terms appears in the model response, any of its user terms in
/// the user message, or any guarded response term appears while the
/// `suppressed_by` action has not been emitted.
struct ActionRule {
    action: &'static str,
    response_terms: &'static [&'static str],
    user_terms: &'static [&'static str],
    guarded_response_terms: &'static [&'static str],
    suppressed_by: Option<&'static str>,
}

/// Evaluation order is fixed; the output preserves it. This is an explicit
/// rule table rather than a learned intent model: action suggestions are
/// advisory UI hints, and the table can be swapped for a real classifier
/// without touching the orchestrator contract.
const RULES: &[ActionRule] = &[
    ActionRule {
        action: ACTION_BOOK_CALENDAR,
        response_terms: &["book", "schedule", "calendar"],
        user_terms: &["book", "meeting"],
        guarded_response_terms: &[],
        suppressed_by: None,
    },
    ActionRule {
        action: ACTION_SEND_CASE_STUDY,
        response_terms: &["case study", "cs-001"],
        user_terms: &["case study", "example", "proof"],
        guarded_response_terms: &[],
        suppressed_by: None,
    },
    ActionRule {
        action: ACTION_REQUEST_EMAIL,
        response_terms: &["email"],
        user_terms: &[],
        // "contact" only suggests an email request when no booking was
        // already suggested.
        guarded_response_terms: &["contact"],
        suppressed_by: Some(ACTION_BOOK_CALENDAR),
    },
];

/// Derive suggested next actions from a model response and the original
/// user message. Pure, deterministic, case-insensitive substring matching;
/// the result contains no duplicates.
#[inline]
pub fn classify(model_response: &str, user_message: &str) -> Vec<String> {
    let response = model_response.to_lowercase();
    let user = user_message.to_lowercase();

    let mut actions: Vec<String> = Vec::new();

    for rule in RULES {
        let emitted = |action: &str| actions.iter().any(|a| a == action);

        let matched = rule.response_terms.iter().any(|t| response.contains(t))
            || rule.user_terms.iter().any(|t| user.contains(t))
            || (rule
                .guarded_response_terms
                .iter()
                .any(|t| response.contains(t))
                && !rule.suppressed_by.is_some_and(emitted));

        if matched && !emitted(rule.action) {
            actions.push(rule.action.to_string());
        }
    }

    actions
}
