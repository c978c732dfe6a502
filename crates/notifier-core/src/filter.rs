//! Relevance Filter
//!
//! Decides whether a message's declared type is allowed to trigger a
//! notification.

use crate::envelope::{Attributes, TYPE_URL_ATTRIBUTE};
use crate::error::Result;

/// Schema identifier published with node-pool auto-upgrade events.
/// External contract with the upstream publisher; must match
/// byte-for-byte.
pub const UPGRADE_EVENT_TYPE_URL: &str =
    "type.googleapis.com/google.container.v1beta1.UpgradeEvent";

/// Whether the message's declared type permits notification.
///
/// An empty allow-list permits everything. With a non-empty list the
/// message must carry a `type_url` attribute; absence propagates as an
/// error instead of a silent drop so publisher misconfiguration stays
/// visible.
pub fn is_allowed(attributes: &Attributes, allow_list: &[String]) -> Result<bool> {
    if allow_list.is_empty() {
        return Ok(true);
    }

    let type_url = attributes.get_or_missing(TYPE_URL_ATTRIBUTE)?;
    Ok(allow_list.iter().any(|allowed| allowed == type_url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotifierError;

    fn attributes_with_type(type_url: &str) -> Attributes {
        let mut attributes = Attributes::new();
        attributes.insert(TYPE_URL_ATTRIBUTE, type_url);
        attributes
    }

    #[test]
    fn empty_allow_list_permits_everything() {
        assert!(is_allowed(&Attributes::new(), &[]).unwrap());
        assert!(is_allowed(&attributes_with_type("any.Event"), &[]).unwrap());
    }

    #[test]
    fn matching_type_url_is_allowed() {
        let allow_list = vec![UPGRADE_EVENT_TYPE_URL.to_string()];
        let attributes = attributes_with_type(UPGRADE_EVENT_TYPE_URL);
        assert!(is_allowed(&attributes, &allow_list).unwrap());
    }

    #[test]
    fn non_matching_type_url_is_filtered() {
        let allow_list = vec![UPGRADE_EVENT_TYPE_URL.to_string()];
        let attributes = attributes_with_type("some.other.Event");
        assert!(!is_allowed(&attributes, &allow_list).unwrap());
    }

    #[test]
    fn match_is_case_sensitive() {
        let allow_list = vec![UPGRADE_EVENT_TYPE_URL.to_string()];
        let attributes = attributes_with_type(&UPGRADE_EVENT_TYPE_URL.to_uppercase());
        assert!(!is_allowed(&attributes, &allow_list).unwrap());
    }

    #[test]
    fn any_member_of_allow_list_matches() {
        let allow_list = vec![
            "first.Event".to_string(),
            "second.Event".to_string(),
        ];
        assert!(is_allowed(&attributes_with_type("second.Event"), &allow_list).unwrap());
    }

    #[test]
    fn missing_type_url_with_allow_list_is_error() {
        let allow_list = vec![UPGRADE_EVENT_TYPE_URL.to_string()];
        let err = is_allowed(&Attributes::new(), &allow_list).unwrap_err();
        assert!(matches!(err, NotifierError::MissingAttribute { ref key } if key == "type_url"));
    }
}
