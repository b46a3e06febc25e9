//! Interactive prompts
//!
//! The module is structured in layers:
//! - `interface`: Pure abstract interfaces independent of any UI library
//! - `dialoguer`: Concrete implementation using the dialoguer library
//! - `scripted`: Implementation answering from a script, for automation and tests

pub mod dialoguer;
pub mod interface;
pub mod scripted;

pub use self::dialoguer::DialoguerPrompter;
pub use interface::*;
pub use scripted::ScriptedPrompter;
