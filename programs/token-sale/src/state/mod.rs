pub mod token_sale;
pub mod whitelist;

pub use token_sale::*;
pub use whitelist::*;
