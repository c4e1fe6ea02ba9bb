//! Call function keyword

use crate::options::{serialize_options, Options};
use crate::registry::CALL_OPTIONS;

/// Load an object's content into the programmer without selecting fixtures
///
/// ```
/// use cueline_cmd::functions::call;
/// use cueline_cmd::Options;
///
/// assert_eq!(call("preset 3.1", &Options::new()), "call preset 3.1");
/// assert_eq!(
///     call("cue 3", &Options::new().with("status", true)),
///     "call cue 3 /status=true"
/// );
/// ```
pub fn call(target: &str, options: &Options) -> String {
    format!("call {}{}", target, serialize_options(options, &CALL_OPTIONS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call() {
        assert_eq!(call("preset 3.1", &Options::new()), "call preset 3.1");
        assert_eq!(call("sequence 1", &Options::new()), "call sequence 1");
    }

    #[test]
    fn test_call_status() {
        assert_eq!(
            call("cue 3", &Options::new().with("status", true)),
            "call cue 3 /status=true"
        );
        assert_eq!(
            call("cue 3", &Options::new().with("status", false)),
            "call cue 3 /status=false"
        );
    }

    #[test]
    fn test_call_flags() {
        let opts = Options::new()
            .with("status", true)
            .with("layer", true)
            .with("toggle_activation", true);
        assert_eq!(
            call("cue 5", &opts),
            "call cue 5 /status=true /layer /toggle_activation"
        );
    }

    #[test]
    fn test_call_composes_with_object_encoders() {
        let target = crate::objects::preset_typed("color", 1).unwrap();
        assert_eq!(call(&target, &Options::new()), "call preset 2.1");
    }
}
