//! Paginated view-model state
//!
//! `RecordMeta` is the client's cache of "which page of what am I looking
//! at"; `SessionFlags` is its cache of the last server-asserted auth state.
//! Both are replaced wholesale on every successful response and only ever
//! clamp or mirror, never trust, what the UI asks for.

use crate::types::{AuthStatus, OrderBy, PhotoRecord, PhotosPage};

/// Metadata half of the photo record view-model.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordMeta {
    page: u32,
    limit: u32,
    pub order_by: OrderBy,
    pub search_term: String,
    /// Total matching records as last asserted by the server.
    pub count: u32,
    /// When set, the next fetch bypasses the browser HTTP cache. Used after
    /// mutations so refreshed thumbnails are not served stale.
    pub cache_bust: bool,
}

impl RecordMeta {
    pub fn new(limit: u32) -> Self {
        Self {
            page: 1,
            limit: limit.max(1),
            order_by: OrderBy::default(),
            search_term: String::new(),
            count: 0,
            cache_bust: false,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    /// Records per page, always ≥ 1.
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Last page for the current count, never below 1.
    pub fn max_page(&self) -> u32 {
        if self.count == 0 {
            1
        } else {
            self.count.div_ceil(self.limit)
        }
    }

    /// Set the page, clamped to `1..=max_page`.
    pub fn set_page(&mut self, page: u32) {
        self.page = page.clamp(1, self.max_page());
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page.saturating_add(1));
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    /// New search resets to the first page.
    pub fn set_search_term(&mut self, term: String) {
        self.search_term = term;
        self.page = 1;
    }

    /// Changing the page size keeps the current position valid.
    pub fn set_limit(&mut self, limit: u32) {
        self.limit = limit.max(1);
        self.set_page(self.page);
    }

    /// Merge a successful photos response: adopt the server count, then
    /// re-clamp the page in case records vanished underneath us.
    pub fn apply_page(&mut self, page: &PhotosPage) {
        self.count = page.count;
        self.set_page(self.page);
        self.cache_bust = false;
    }
}

/// Auth half of the view-model: mirrors the most recent server-asserted
/// session state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionFlags {
    pub logged_in: bool,
    pub user_is_admin: bool,
    /// Username as submitted at login, kept for the password-change path.
    pub username: String,
}

impl SessionFlags {
    /// Merge a login (or password-change) response. The username is only
    /// retained when the server confirms the session.
    pub fn apply_login(&mut self, username: String, status: &AuthStatus) {
        self.logged_in = status.logged_in;
        self.user_is_admin = status.user_is_admin;
        self.username = if status.logged_in {
            username
        } else {
            String::new()
        };
    }

    /// Merge a successful records response: data implies a live session, and
    /// the serializer asserts the requester's admin state on every record.
    pub fn note_records(&mut self, page: &PhotosPage) {
        self.logged_in = true;
        if let Some(first) = page.results.first() {
            self.user_is_admin = first.user_is_admin;
        }
    }

    /// Logout: everything reverts to the anonymous default.
    pub fn clear(&mut self) {
        *self = SessionFlags::default();
    }
}

/// Replace the record matching `updated.id` in place, used after a
/// single-record update response. Returns whether a slot was found.
pub fn merge_updated_record(records: &mut [PhotoRecord], updated: PhotoRecord) -> bool {
    match records.iter_mut().find(|r| r.id == updated.id) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}
