pub mod driver;
pub mod responder;
