pub mod archive;
pub mod archive_id;
pub mod content;
