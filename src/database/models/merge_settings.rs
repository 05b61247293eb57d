//! Typed document for the `mergeSettings` collection.
//!
//! Mirrors the per-user settings document the bot reads and writes.
//! Documents stay schema-free on the database side: fields this binary
//! does not model are carried through `extra` untouched.

use mongodb::bson::Document;
use serde::{Deserialize, Serialize};

/// Per-user merge preferences, keyed by the user's Telegram ID.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeSettings {
    /// Telegram user ID.
    #[serde(rename = "_id")]
    pub user_id: i64,
    /// Display name of the user.
    pub name: String,
    /// Nested preference block.
    #[serde(default)]
    pub user_settings: UserPreferences,
    /// Whether the user has been granted access to the bot.
    #[serde(rename = "isAllowed", default)]
    pub is_allowed: bool,
    /// Whether the user is banned.
    #[serde(rename = "isBanned", default)]
    pub is_banned: bool,
    /// Custom thumbnail reference, if the user uploaded one.
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Unmodeled fields, preserved across round-trips.
    #[serde(flatten)]
    pub extra: Document,
}

/// User-tunable merge preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Selected merge mode (1 = video-video).
    #[serde(default = "default_merge_mode")]
    pub merge_mode: i32,
    /// Whether to rewrite stream metadata on upload.
    #[serde(default)]
    pub edit_metadata: bool,
}

fn default_merge_mode() -> i32 {
    1
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            merge_mode: default_merge_mode(),
            edit_metadata: false,
        }
    }
}

impl MergeSettings {
    /// New-user defaults, matching what the bot persists on first contact.
    #[allow(dead_code)]
    pub fn new(user_id: i64, name: impl Into<String>) -> Self {
        Self {
            user_id,
            name: name.into(),
            user_settings: UserPreferences::default(),
            is_allowed: false,
            is_banned: false,
            thumbnail: None,
            extra: Document::new(),
        }
    }

    /// A user may use the bot only when allowed and not banned.
    #[allow(dead_code)]
    pub fn has_access(&self) -> bool {
        self.is_allowed && !self.is_banned
    }
}

#[cfg(test)]
mod tests {
    use mongodb::bson::doc;

    use super::*;

    #[test]
    fn json_shape_matches_the_documented_sample() {
        let settings = MergeSettings::new(123456789, "Sample User");
        let value = serde_json::to_value(&settings).expect("serialization failed");

        assert_eq!(
            value,
            serde_json::json!({
                "_id": 123456789,
                "name": "Sample User",
                "user_settings": { "merge_mode": 1, "edit_metadata": false },
                "isAllowed": false,
                "isBanned": false,
                "thumbnail": null,
            })
        );
    }

    #[test]
    fn sparse_documents_deserialize_with_defaults() {
        let doc = doc! { "_id": 42_i64, "name": "Someone" };
        let settings: MergeSettings =
            mongodb::bson::from_document(doc).expect("deserialization failed");

        assert_eq!(settings.user_id, 42);
        assert_eq!(settings.user_settings.merge_mode, 1);
        assert!(!settings.user_settings.edit_metadata);
        assert!(!settings.is_allowed);
        assert!(!settings.is_banned);
        assert!(settings.thumbnail.is_none());
        assert!(!settings.has_access());
    }

    #[test]
    fn access_requires_allowed_and_not_banned() {
        let mut settings = MergeSettings::new(1, "User");
        assert!(!settings.has_access());

        settings.is_allowed = true;
        assert!(settings.has_access());

        settings.is_banned = true;
        assert!(!settings.has_access());
    }

    #[test]
    fn unknown_fields_survive_a_round_trip() {
        let original = doc! {
            "_id": 7_i64,
            "name": "Legacy",
            "legacy_flag": true,
        };
        let settings: MergeSettings =
            mongodb::bson::from_document(original).expect("deserialization failed");
        assert!(settings.extra.get_bool("legacy_flag").expect("flag missing"));

        let out = mongodb::bson::to_document(&settings).expect("serialization failed");
        assert!(out.get_bool("legacy_flag").expect("flag lost in round-trip"));
    }
}
