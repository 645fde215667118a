//! Display-name resolution for participant rows

use meetline_domain::constants::{ANONYMOUS_LABEL, PHONE_LABEL, UNKNOWN_LABEL};
use meetline_domain::{Participant, ParticipantIdentity};

/// Derive the label shown for a participant.
///
/// Precedence, first non-empty value wins:
/// 1. signed-in user: display name, then user key
/// 2. anonymous user: display name, then `"Anonymous"`
/// 3. phone user: display name, then `"Phone"`
/// 4. last segment of the resource name
/// 5. `"Unknown"`
///
/// Never returns an empty string.
pub fn resolve_display_name(participant: &Participant) -> String {
    identity_label(&participant.identity)
        .or_else(|| participant.short_id())
        .unwrap_or(UNKNOWN_LABEL)
        .to_string()
}

fn identity_label(identity: &ParticipantIdentity) -> Option<&str> {
    match identity {
        ParticipantIdentity::SignedIn { display_name, user_key } => {
            non_blank(display_name).or_else(|| non_blank(user_key))
        }
        ParticipantIdentity::Anonymous { display_name } => {
            Some(non_blank(display_name).unwrap_or(ANONYMOUS_LABEL))
        }
        ParticipantIdentity::Phone { display_name } => {
            Some(non_blank(display_name).unwrap_or(PHONE_LABEL))
        }
        ParticipantIdentity::Unidentified => None,
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
