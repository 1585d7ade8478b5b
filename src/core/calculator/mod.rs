pub mod duration;
pub mod limits;
pub mod status;
pub mod weekly;
