pub mod id;
pub mod merge;
pub mod model;
pub mod validate;
