//! hello_world-core: the greeting function and its debug printer
pub mod debug;
mod greeting;

pub use greeting::{say_hello, TEMPLATE_PREFIX, TEMPLATE_SUFFIX};
