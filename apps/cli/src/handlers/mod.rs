pub mod context;
pub mod platforms;
pub mod profile;
