//! Variable function keywords
//!
//! Setvar writes global show variables, setuservar writes variables local to
//! the current user profile. The add variants extend existing content: added
//! numbers sum, added text concatenates. Variable names carry the `$` sigil.

use crate::options::OptionValue;

fn var_value(value: &OptionValue) -> String {
    match value {
        // text is always quoted on the wire
        OptionValue::Text(t) => format!("\"{}\"", t),
        other => other.to_string(),
    }
}

fn set(keyword: &str, name: &str, value: Option<OptionValue>) -> String {
    match value {
        Some(value) => format!("{} {} = {}", keyword, name, var_value(&value)),
        // assigning nothing deletes the variable
        None => format!("{} {} =", keyword, name),
    }
}

/// Set a global show variable, or delete it with `None`
///
/// ```
/// use cueline_cmd::functions::set_var;
///
/// assert_eq!(set_var("$mycounter", Some(5.into())), "setvar $mycounter = 5");
/// assert_eq!(set_var("$myname", Some("John".into())), "setvar $myname = \"John\"");
/// assert_eq!(set_var("$mycounter", None), "setvar $mycounter =");
/// ```
pub fn set_var(name: &str, value: Option<OptionValue>) -> String {
    set("setvar", name, value)
}

/// Set a user profile variable, or delete it with `None`
pub fn set_user_var(name: &str, value: Option<OptionValue>) -> String {
    set("setuservar", name, value)
}

/// Set a show variable from an input dialog: `setvar $x = ("prompt")`
pub fn set_var_dialog(name: &str, prompt: &str) -> String {
    format!("setvar {} = (\"{}\")", name, prompt)
}

/// Set a user profile variable from an input dialog
pub fn set_user_var_dialog(name: &str, prompt: &str) -> String {
    format!("setuservar {} = (\"{}\")", name, prompt)
}

/// Extend a show variable: numbers add, text concatenates
pub fn add_var(name: &str, value: OptionValue) -> String {
    format!("addvar {} = {}", name, var_value(&value))
}

/// Extend a user profile variable: numbers add, text concatenates
pub fn add_user_var(name: &str, value: OptionValue) -> String {
    format!("adduservar {} = {}", name, var_value(&value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_var_numeric() {
        assert_eq!(set_var("$mycounter", Some(5.into())), "setvar $mycounter = 5");
    }

    #[test]
    fn test_set_var_text_is_quoted() {
        assert_eq!(
            set_var("$myname", Some("John".into())),
            "setvar $myname = \"John\""
        );
    }

    #[test]
    fn test_set_var_none_deletes() {
        assert_eq!(set_var("$CueNumber", None), "setvar $CueNumber =");
        assert_eq!(set_user_var("$CueNumber", None), "setuservar $CueNumber =");
    }

    #[test]
    fn test_set_user_var() {
        assert_eq!(
            set_user_var("$mycounter", Some(5.into())),
            "setuservar $mycounter = 5"
        );
    }

    #[test]
    fn test_input_dialogs() {
        assert_eq!(
            set_var_dialog("$Songname", "Which song?"),
            "setvar $Songname = (\"Which song?\")"
        );
        assert_eq!(
            set_user_var_dialog("$CueNumber", "Cue number to store?"),
            "setuservar $CueNumber = (\"Cue number to store?\")"
        );
    }

    #[test]
    fn test_add_var() {
        assert_eq!(add_var("$mycounter", 6.into()), "addvar $mycounter = 6");
        assert_eq!(
            add_var("$myname", " Doe".into()),
            "addvar $myname = \" Doe\""
        );
    }

    #[test]
    fn test_add_user_var() {
        assert_eq!(
            add_user_var("$mycounter", 6.into()),
            "adduservar $mycounter = 6"
        );
    }
}
