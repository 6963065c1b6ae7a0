#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # hello_world
//!
//! Say hello to someone by name.
//!
//! ```
//! assert_eq!(hello_world::say_hello("Sue"), "Hello Sue!");
//! ```

pub use hello_world_core::{say_hello, TEMPLATE_PREFIX, TEMPLATE_SUFFIX};

#[cfg(test)]
mod tests {
    use super::say_hello;

    #[test]
    fn test_say_hello() {
        assert_eq!(say_hello("Sue"), "Hello Sue!");
    }
}
