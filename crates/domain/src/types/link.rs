//! Transient request bodies for the account-linking endpoints

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkRequest {
    pub uuid: Uuid,
    pub player_name: String,
    pub link_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlinkRequest {
    pub uuid: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_request_uses_camel_case_keys() {
        let request = LinkRequest {
            uuid: Uuid::nil(),
            player_name: "Alice".into(),
            link_code: "AB12CD".into(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(
            json,
            r#"{"uuid":"00000000-0000-0000-0000-000000000000","playerName":"Alice","linkCode":"AB12CD"}"#
        );
    }

    #[test]
    fn unlink_request_carries_only_uuid() {
        let json = serde_json::to_value(UnlinkRequest { uuid: Uuid::nil() }).unwrap();
        assert_eq!(json, serde_json::json!({ "uuid": "00000000-0000-0000-0000-000000000000" }));
    }
}
