pub mod api;
pub mod category;
pub mod rows;

pub use api::*;
pub use category::Category;
pub use rows::*;
