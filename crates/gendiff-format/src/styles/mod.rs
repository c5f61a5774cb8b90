pub mod stylish;

pub use stylish::StylishFormatter;
