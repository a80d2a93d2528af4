pub mod bone;
pub mod model;
pub mod pose;
pub mod report;
pub mod skeleton;
pub mod traverse;
