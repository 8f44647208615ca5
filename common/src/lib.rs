//! Simple Photo Management Common Library
//!
//! Types and logic shared between the browser client and native test builds:
//! - REST contract types mirroring the backend serializers
//! - the symbolic request descriptor table
//! - input validation for search terms, tags and rotation
//! - the paginated view-model state

pub mod error;
pub mod request;
pub mod state;
pub mod types;
pub mod validation;

pub use error::{Error, Result};
pub use request::{ApiRequest, Method, ProcessAction};
pub use state::{merge_updated_record, RecordMeta, SessionFlags};
pub use types::{
    AuthStatus, OrderBy, PhotoRecord, PhotosPage, ProcessReply, TagRecord, TagsPage, UpdateMode,
};
pub use validation::{
    parse_tag_input, validate_rotation_degrees, validate_search, validate_tags,
};
