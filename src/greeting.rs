use crate::greeter_log;

/// Build a greeting for `name`.
///
/// ```
/// assert_eq!(greeter::greeting::hello("Tim"), "Hello Tim!");
/// assert_eq!(greeter::greeting::hello(""), "Hello!");
/// ```
pub fn hello(name: &str) -> String {
    greeter_log!("greeting::hello called");

    if name.is_empty() {
        return "Hello!".to_string();
    }
    format!("Hello {}!", name)
}
