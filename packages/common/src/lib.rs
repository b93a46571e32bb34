pub mod config;
pub mod delete_policy;
pub mod id;

pub use delete_policy::DeletePolicy;
pub use id::generate_id;
