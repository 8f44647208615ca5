//! Symbolic request descriptors
//!
//! Every interaction with the backend is described by one [`ApiRequest`]
//! variant. The dispatch helper in the web client turns a descriptor into a
//! fetch call; nothing else in the client builds URLs or bodies. Keeping the
//! table here means the whole REST contract is unit-testable natively.

use serde_json::{json, Value};

use crate::types::{OrderBy, UpdateMode};

/// HTTP methods used by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
        }
    }

    /// Non-GET requests mutate state and must carry the CSRF token.
    pub fn needs_csrf(&self) -> bool {
        !matches!(self, Method::Get)
    }
}

/// Server-side batch jobs reachable from the admin toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessAction {
    /// Scan origin directories for new files, create web copies, copy tags.
    Scan,
    /// Re-copy tags from origin images onto existing processed copies.
    Retag,
    /// Purge database records whose image files no longer exist.
    CleanDb,
}

impl ProcessAction {
    fn query_key(&self) -> &'static str {
        match self {
            ProcessAction::Scan => "scan",
            ProcessAction::Retag => "retag",
            ProcessAction::CleanDb => "clean_db",
        }
    }
}

/// One backend interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiRequest {
    /// Paginated photo list. `term` empty means "untagged records only"
    /// (the backend's default view of work still to be done).
    FetchPhotos {
        page: u32,
        limit: u32,
        order_by: OrderBy,
        term: String,
    },
    /// Tag suggestion lookup for the add-tag input.
    FetchTags { term: String },
    /// Add or remove tags on one record.
    UpdateTags {
        record_id: i64,
        tags: Vec<String>,
        mode: UpdateMode,
    },
    /// Rotate the processed image of one record.
    RotateImage { record_id: i64, degrees: i32 },
    /// Kick off a server-side batch job.
    Process(ProcessAction),
    /// Delete tags no longer referenced by any record.
    PruneTags,
    /// Bulk tag substitution across all matching records.
    /// An empty `replace` removes the searched tag everywhere.
    SearchReplaceTags { search: String, replace: String },
    Login { username: String, password: String },
    Logout,
    ChangePassword {
        username: String,
        old_password: String,
        new_password: String,
    },
}

impl ApiRequest {
    pub fn method(&self) -> Method {
        match self {
            ApiRequest::FetchPhotos { .. }
            | ApiRequest::FetchTags { .. }
            | ApiRequest::Process(_)
            | ApiRequest::PruneTags => Method::Get,
            ApiRequest::UpdateTags { .. }
            | ApiRequest::RotateImage { .. }
            | ApiRequest::ChangePassword { .. } => Method::Patch,
            ApiRequest::SearchReplaceTags { .. }
            | ApiRequest::Login { .. }
            | ApiRequest::Logout => Method::Post,
        }
    }

    /// Path relative to the API base, with a trailing slash (Django style).
    pub fn path(&self) -> String {
        match self {
            ApiRequest::FetchPhotos { .. } => "/photos/".to_string(),
            ApiRequest::FetchTags { .. } => "/tags/".to_string(),
            ApiRequest::UpdateTags { record_id, .. }
            | ApiRequest::RotateImage { record_id, .. } => {
                format!("/photos/{}/", record_id)
            }
            ApiRequest::Process(_) => "/process-photos/".to_string(),
            ApiRequest::PruneTags => "/prune-tags/".to_string(),
            ApiRequest::SearchReplaceTags { .. } => "/search-replace/".to_string(),
            ApiRequest::Login { .. } => "/login/".to_string(),
            ApiRequest::Logout => "/logout/".to_string(),
            ApiRequest::ChangePassword { username, .. } => {
                format!("/password-update/{}/", username)
            }
        }
    }

    /// Query pairs, unencoded.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            ApiRequest::FetchPhotos {
                page,
                limit,
                order_by,
                term,
            } => {
                let mut pairs = vec![
                    ("page", page.to_string()),
                    ("limit", limit.to_string()),
                    ("order_by", order_by.as_query().to_string()),
                ];
                if !term.is_empty() {
                    pairs.push(("tag", term.clone()));
                }
                pairs
            }
            ApiRequest::FetchTags { term } => vec![("term", term.clone())],
            ApiRequest::Process(action) => vec![(action.query_key(), "true".to_string())],
            _ => Vec::new(),
        }
    }

    /// JSON body, if the request carries one.
    pub fn body(&self) -> Option<Value> {
        match self {
            ApiRequest::UpdateTags { tags, mode, .. } => Some(json!({
                "tags": tags,
                "update_mode": mode.as_str(),
            })),
            ApiRequest::RotateImage { degrees, .. } => Some(json!({
                "tags": [],
                "update_mode": UpdateMode::RotateImage.as_str(),
                "update_params": { "rotation_degrees": degrees },
            })),
            ApiRequest::SearchReplaceTags { search, replace } => Some(json!({
                "search": search,
                "replace": replace,
            })),
            ApiRequest::Login { username, password } => Some(json!({
                "username": username,
                "password": password,
            })),
            ApiRequest::ChangePassword {
                old_password,
                new_password,
                ..
            } => Some(json!({
                "old_password": old_password,
                "new_password": new_password,
            })),
            _ => None,
        }
    }

    /// Full URL against the given API base (no trailing slash on the base).
    pub fn url(&self, base: &str) -> String {
        let mut url = format!("{}{}", base, self.path());
        let query = self.query();
        if !query.is_empty() {
            let encoded: Vec<String> = query
                .iter()
                .map(|(k, v)| format!("{}={}", k, encode_component(v)))
                .collect();
            url.push('?');
            url.push_str(&encoded.join("&"));
        }
        url
    }
}

/// Percent-encode one query component.
///
/// Validation upstream already restricts the character set, so only the
/// reserved few ever get escaped, but encoding over the full byte range keeps
/// this safe for un-validated values such as passwords.
fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // Method / path mapping
    // =============================================

    #[test]
    fn test_fetch_photos_is_get() {
        let req = ApiRequest::FetchPhotos {
            page: 1,
            limit: 25,
            order_by: OrderBy::Id,
            term: String::new(),
        };
        assert_eq!(req.method(), Method::Get);
        assert_eq!(req.path(), "/photos/");
        assert!(req.body().is_none());
    }

    #[test]
    fn test_update_tags_is_patch_on_detail_path() {
        let req = ApiRequest::UpdateTags {
            record_id: 42,
            tags: vec!["moon".to_string()],
            mode: UpdateMode::AddTags,
        };
        assert_eq!(req.method(), Method::Patch);
        assert_eq!(req.path(), "/photos/42/");
    }

    #[test]
    fn test_login_logout_are_post() {
        let login = ApiRequest::Login {
            username: "u".to_string(),
            password: "p".to_string(),
        };
        assert_eq!(login.method(), Method::Post);
        assert_eq!(login.path(), "/login/");
        assert_eq!(ApiRequest::Logout.method(), Method::Post);
        assert!(ApiRequest::Logout.body().is_none());
    }

    #[test]
    fn test_change_password_path_carries_username() {
        let req = ApiRequest::ChangePassword {
            username: "alex".to_string(),
            old_password: "old".to_string(),
            new_password: "new".to_string(),
        };
        assert_eq!(req.method(), Method::Patch);
        assert_eq!(req.path(), "/password-update/alex/");
    }

    #[test]
    fn test_csrf_only_on_mutations() {
        assert!(!Method::Get.needs_csrf());
        assert!(Method::Post.needs_csrf());
        assert!(Method::Patch.needs_csrf());
    }

    // =============================================
    // Query building
    // =============================================

    #[test]
    fn test_fetch_photos_query_without_term() {
        let req = ApiRequest::FetchPhotos {
            page: 3,
            limit: 10,
            order_by: OrderBy::RecordUpdatedDesc,
            term: String::new(),
        };
        assert_eq!(
            req.url("/api/v1"),
            "/api/v1/photos/?page=3&limit=10&order_by=-record_updated"
        );
    }

    #[test]
    fn test_fetch_photos_query_with_term() {
        let req = ApiRequest::FetchPhotos {
            page: 1,
            limit: 25,
            order_by: OrderBy::Id,
            term: "The Moon".to_string(),
        };
        assert_eq!(
            req.url("/api/v1"),
            "/api/v1/photos/?page=1&limit=25&order_by=id&tag=The%20Moon"
        );
    }

    #[test]
    fn test_fetch_tags_query() {
        let req = ApiRequest::FetchTags {
            term: "DATE:".to_string(),
        };
        assert_eq!(req.url(""), "/tags/?term=DATE%3A");
    }

    #[test]
    fn test_process_action_queries() {
        assert_eq!(
            ApiRequest::Process(ProcessAction::Scan).url("/api/v1"),
            "/api/v1/process-photos/?scan=true"
        );
        assert_eq!(
            ApiRequest::Process(ProcessAction::Retag).url("/api/v1"),
            "/api/v1/process-photos/?retag=true"
        );
        assert_eq!(
            ApiRequest::Process(ProcessAction::CleanDb).url("/api/v1"),
            "/api/v1/process-photos/?clean_db=true"
        );
    }

    #[test]
    fn test_prune_tags_has_no_query() {
        assert_eq!(ApiRequest::PruneTags.url("/api/v1"), "/api/v1/prune-tags/");
    }

    // =============================================
    // Bodies
    // =============================================

    #[test]
    fn test_update_tags_body() {
        let req = ApiRequest::UpdateTags {
            record_id: 1,
            tags: vec!["a".to_string(), "b".to_string()],
            mode: UpdateMode::RemoveTag,
        };
        let body = req.body().unwrap();
        assert_eq!(body["update_mode"], "remove_tag");
        assert_eq!(body["tags"][1], "b");
    }

    #[test]
    fn test_rotate_image_body() {
        let req = ApiRequest::RotateImage {
            record_id: 5,
            degrees: 270,
        };
        let body = req.body().unwrap();
        assert_eq!(body["update_mode"], "rotate_image");
        assert_eq!(body["update_params"]["rotation_degrees"], 270);
    }

    #[test]
    fn test_search_replace_body_allows_empty_replace() {
        let req = ApiRequest::SearchReplaceTags {
            search: "PLAACE: typo".to_string(),
            replace: String::new(),
        };
        let body = req.body().unwrap();
        assert_eq!(body["search"], "PLAACE: typo");
        assert_eq!(body["replace"], "");
    }

    #[test]
    fn test_login_body() {
        let req = ApiRequest::Login {
            username: "alex".to_string(),
            password: "hunter2".to_string(),
        };
        let body = req.body().unwrap();
        assert_eq!(body["username"], "alex");
        assert_eq!(body["password"], "hunter2");
    }

    // =============================================
    // Encoding
    // =============================================

    #[test]
    fn test_encode_component_reserved() {
        assert_eq!(encode_component("a b/c"), "a%20b%2Fc");
        assert_eq!(encode_component("plain-term_1.2~"), "plain-term_1.2~");
    }
}
