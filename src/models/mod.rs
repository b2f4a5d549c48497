pub mod element;
pub mod script;
pub mod conf;

pub use element::{ElementType, ScriptElement};
pub use script::Script;
pub use conf::{ConfError, ConfResult, ParserConf};
