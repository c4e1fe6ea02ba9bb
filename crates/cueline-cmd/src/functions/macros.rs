//! Macro input placeholders
//!
//! Inside a macro line the `@` character is a placeholder for user input.
//! It has nothing to do with the at keyword.

/// User input follows the command: `Load @`
pub fn macro_input_after(command: &str) -> String {
    format!("{} @", command)
}

/// User input precedes the command: `@ Fade 20`
///
/// The console only substitutes leading input when the command line
/// interaction is disabled for the macro.
pub fn macro_input_before(command: &str) -> String {
    format!("@ {}", command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_after() {
        assert_eq!(macro_input_after("Load"), "Load @");
        assert_eq!(macro_input_after("Attribute Pan At"), "Attribute Pan At @");
    }

    #[test]
    fn test_input_before() {
        assert_eq!(macro_input_before("Fade 20"), "@ Fade 20");
    }
}
