//! Dummy account directory backing the `get_account_info` tool.
//!
//! Returns fixed demo data for any user ID. There is no real lookup and no
//! failure path; validity of the ID is the remote service's concern.

use serde::{Deserialize, Serialize};

/// Account record returned to the model as a tool result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountInfo {
    /// The user ID the caller asked about, echoed back verbatim.
    pub user_id: String,
    /// Account holder name.
    pub name: String,
    /// Current balance, formatted for display.
    pub account_balance: String,
    /// Membership tier.
    pub membership_status: String,
}

/// Return dummy account info for a given user.
pub fn get_account_info(user_id: &str) -> AccountInfo {
    AccountInfo {
        user_id: user_id.to_string(),
        name: "Bugs Bunny".to_string(),
        account_balance: "£72.50".to_string(),
        membership_status: "Gold Executive".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_fields_for_any_user() {
        for user_id in ["1234567890", "", "not-a-real-id"] {
            let info = get_account_info(user_id);
            assert_eq!(info.user_id, user_id);
            assert_eq!(info.name, "Bugs Bunny");
            assert_eq!(info.account_balance, "£72.50");
            assert_eq!(info.membership_status, "Gold Executive");
        }
    }

    #[test]
    fn test_serializes_to_exactly_four_fields() {
        let info = get_account_info("1234567890");
        let value = serde_json::to_value(&info).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 4);
        assert!(object.contains_key("user_id"));
        assert!(object.contains_key("name"));
        assert!(object.contains_key("account_balance"));
        assert!(object.contains_key("membership_status"));
    }
}
