//! REST contract types
//!
//! Mirrors the backend serializers:
//! - PhotoRecord / PhotosPage: paginated photo list responses
//! - TagRecord / TagsPage: tag suggestion lookups
//! - AuthStatus: login / logout / password-change responses
//! - ProcessReply: batch-job acknowledgements

use serde::{Deserialize, Serialize};

/// One photo record as serialized by the backend.
///
/// `uuid` changes on every server-side rewrite of the processed image and is
/// appended to thumbnail URLs so stale browser caches are bypassed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhotoRecord {
    pub id: i64,
    pub owner: String,
    pub file_name: String,
    pub file_format: String,
    pub processed_url: String,
    pub original_url: String,
    pub public_img_url: String,
    pub public_img_tn_url: String,
    pub tags: Vec<String>,
    pub record_updated: String,
    /// Set server-side after a failed write; locked records are not editable.
    pub mod_lock: bool,
    pub user_is_admin: bool,
    pub uuid: String,
}

impl PhotoRecord {
    /// Thumbnail URL with the cache-busting uuid appended.
    pub fn thumbnail_url(&self) -> String {
        let base = format!(
            "{}/{}-215_215{}",
            self.public_img_tn_url, self.file_name, self.file_format
        );
        if self.uuid.is_empty() {
            base
        } else {
            format!("{}?v={}", base, self.uuid)
        }
    }

    /// Full-size processed image URL with the cache-busting uuid appended.
    pub fn image_url(&self) -> String {
        let base = format!(
            "{}/{}{}",
            self.public_img_url, self.file_name, self.file_format
        );
        if self.uuid.is_empty() {
            base
        } else {
            format!("{}?v={}", base, self.uuid)
        }
    }
}

/// One page of photo records (DRF page envelope).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PhotosPage {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<PhotoRecord>,
}

/// One tag record from the suggestion endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TagRecord {
    pub id: i64,
    pub tag: String,
    pub owner: String,
}

/// One page of tag records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TagsPage {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<TagRecord>,
}

impl TagsPage {
    /// Plain tag strings, in server order, for the suggestion dropdown.
    pub fn suggestions(&self) -> Vec<String> {
        self.results.iter().map(|t| t.tag.clone()).collect()
    }
}

/// Flag payload returned by the auth endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthStatus {
    pub success: bool,
    pub logged_in: bool,
    pub error: Option<String>,
    pub user_is_admin: bool,
}

/// Acknowledgement payload from the batch-job endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessReply {
    #[serde(rename = "Status", default)]
    pub status: String,
}

/// Tag update modes accepted by the record update endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateMode {
    AddTags,
    RemoveTag,
    RotateImage,
}

impl UpdateMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateMode::AddTags => "add_tags",
            UpdateMode::RemoveTag => "remove_tag",
            UpdateMode::RotateImage => "rotate_image",
        }
    }
}

/// Orderings accepted by the list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderBy {
    #[default]
    Id,
    IdDesc,
    RecordUpdated,
    RecordUpdatedDesc,
    Owner,
    OwnerDesc,
}

impl OrderBy {
    /// Query value, Django style: descending orders carry a `-` prefix.
    pub fn as_query(&self) -> &'static str {
        match self {
            OrderBy::Id => "id",
            OrderBy::IdDesc => "-id",
            OrderBy::RecordUpdated => "record_updated",
            OrderBy::RecordUpdatedDesc => "-record_updated",
            OrderBy::Owner => "owner",
            OrderBy::OwnerDesc => "-owner",
        }
    }

    /// Flip between ascending and descending on the same column,
    /// for click-to-sort table headers.
    pub fn toggled(&self) -> Self {
        match self {
            OrderBy::Id => OrderBy::IdDesc,
            OrderBy::IdDesc => OrderBy::Id,
            OrderBy::RecordUpdated => OrderBy::RecordUpdatedDesc,
            OrderBy::RecordUpdatedDesc => OrderBy::RecordUpdated,
            OrderBy::Owner => OrderBy::OwnerDesc,
            OrderBy::OwnerDesc => OrderBy::Owner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // Backend payload deserialization
    // =============================================

    #[test]
    fn test_photo_record_deserialize() {
        let json = r#"{
            "id": 42,
            "owner": "admin",
            "file_name": "a1b2c3",
            "file_format": ".jpg",
            "processed_url": "/media/processed/a1b2c3.jpg",
            "original_url": "/originals/holiday/IMG_1001.CR2",
            "public_img_url": "/media/processed",
            "public_img_tn_url": "/media/processed/tn",
            "tags": ["DATE: 1974", "PLACE: The Moon"],
            "record_updated": "2024-11-02T10:15:00Z",
            "mod_lock": false,
            "user_is_admin": true,
            "uuid": "0f3a"
        }"#;

        let record: PhotoRecord = serde_json::from_str(json).expect("deserialize failed");
        assert_eq!(record.id, 42);
        assert_eq!(record.tags.len(), 2);
        assert!(record.user_is_admin);
        assert!(!record.mod_lock);
    }

    #[test]
    fn test_photo_record_missing_fields_default() {
        // older backends omit mod_lock and uuid
        let json = r#"{"id": 7, "file_name": "x", "file_format": ".jpg"}"#;
        let record: PhotoRecord = serde_json::from_str(json).expect("deserialize failed");
        assert!(!record.mod_lock);
        assert!(record.uuid.is_empty());
        assert!(record.tags.is_empty());
    }

    #[test]
    fn test_photos_page_deserialize() {
        let json = r#"{
            "count": 51,
            "next": "http://host/api/v1/photos/?page=3",
            "previous": "http://host/api/v1/photos/?page=1",
            "results": [{"id": 1}, {"id": 2}]
        }"#;
        let page: PhotosPage = serde_json::from_str(json).expect("deserialize failed");
        assert_eq!(page.count, 51);
        assert_eq!(page.results.len(), 2);
        assert!(page.next.is_some());
    }

    #[test]
    fn test_auth_status_deserialize() {
        let json = r#"{"success": true, "logged_in": false, "error": null, "user_is_admin": false}"#;
        let status: AuthStatus = serde_json::from_str(json).expect("deserialize failed");
        assert!(status.success);
        assert!(!status.logged_in);
        assert!(status.error.is_none());
    }

    #[test]
    fn test_process_reply_deserialize() {
        let json = r#"{"Status": "Processing ......."}"#;
        let reply: ProcessReply = serde_json::from_str(json).expect("deserialize failed");
        assert!(reply.status.starts_with("Processing"));
    }

    #[test]
    fn test_tags_page_suggestions() {
        let json = r#"{
            "count": 2,
            "results": [
                {"id": 1, "tag": "PLACE: The Moon", "owner": "admin"},
                {"id": 2, "tag": "PLACE: Mare Imbrium", "owner": "admin"}
            ]
        }"#;
        let page: TagsPage = serde_json::from_str(json).expect("deserialize failed");
        assert_eq!(
            page.suggestions(),
            vec!["PLACE: The Moon", "PLACE: Mare Imbrium"]
        );
    }

    // =============================================
    // URL helpers
    // =============================================

    #[test]
    fn test_thumbnail_url_with_uuid() {
        let record = PhotoRecord {
            file_name: "a1b2c3".to_string(),
            file_format: ".jpg".to_string(),
            public_img_tn_url: "/media/tn".to_string(),
            uuid: "beef".to_string(),
            ..Default::default()
        };
        assert_eq!(record.thumbnail_url(), "/media/tn/a1b2c3-215_215.jpg?v=beef");
    }

    #[test]
    fn test_image_url_without_uuid() {
        let record = PhotoRecord {
            file_name: "a1b2c3".to_string(),
            file_format: ".jpg".to_string(),
            public_img_url: "/media/processed".to_string(),
            ..Default::default()
        };
        assert_eq!(record.image_url(), "/media/processed/a1b2c3.jpg");
    }

    // =============================================
    // Enums
    // =============================================

    #[test]
    fn test_update_mode_as_str() {
        assert_eq!(UpdateMode::AddTags.as_str(), "add_tags");
        assert_eq!(UpdateMode::RemoveTag.as_str(), "remove_tag");
        assert_eq!(UpdateMode::RotateImage.as_str(), "rotate_image");
    }

    #[test]
    fn test_order_by_query_values() {
        assert_eq!(OrderBy::Id.as_query(), "id");
        assert_eq!(OrderBy::RecordUpdatedDesc.as_query(), "-record_updated");
        assert_eq!(OrderBy::Owner.as_query(), "owner");
    }

    #[test]
    fn test_order_by_toggled() {
        assert_eq!(OrderBy::Id.toggled(), OrderBy::IdDesc);
        assert_eq!(OrderBy::IdDesc.toggled(), OrderBy::Id);
        assert_eq!(OrderBy::OwnerDesc.toggled(), OrderBy::Owner);
    }
}
