pub mod openapi;
pub mod response;
