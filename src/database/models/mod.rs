pub mod airplane;

pub use airplane::{label, Airplane, NewAirplane};
