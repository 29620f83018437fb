pub mod airplanes;
pub mod service;
