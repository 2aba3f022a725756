pub mod filter_group;
pub mod header;
pub mod job_item;
pub mod jobs;
pub mod loader;
pub mod profile_card;
