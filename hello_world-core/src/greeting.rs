/// Text placed before the name in every greeting.
pub const TEMPLATE_PREFIX: &str = "Hello ";

/// Text placed after the name in every greeting.
pub const TEMPLATE_SUFFIX: &str = "!";

/// Greet `name` using the fixed `"Hello {name}!"` template.
///
/// The name is inserted verbatim: no trimming, escaping or case changes.
///
/// ```
/// assert_eq!(hello_world_core::say_hello("Sue"), "Hello Sue!");
/// ```
pub fn say_hello(name: &str) -> String {
    format!("{TEMPLATE_PREFIX}{name}{TEMPLATE_SUFFIX}")
}
