pub mod group_id;
pub mod validation;

pub use group_id::GroupId;
