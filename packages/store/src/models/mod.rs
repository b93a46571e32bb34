pub mod exercise;
pub mod hackathon;
pub mod profile;
pub mod project;
pub mod shared;
