//! Public macros
//!
//! Exported at crate root via `#[macro_export]`.

/// Builds a [`PlaceholderBindings`](crate::prompt::PlaceholderBindings) map.
///
/// ```rust,ignore
/// let values = bindings! {
///     "explain_role" => "R",
///     "question" => "Q",
///     "explanation" => "E",
/// };
/// ```
#[macro_export]
macro_rules! bindings {
    () => {
        $crate::prompt::PlaceholderBindings::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut values = $crate::prompt::PlaceholderBindings::new();
        $( values.insert($name, $value); )+
        values
    }};
}

/// Creates a system message
#[macro_export]
macro_rules! system {
    ($content:expr) => {
        $crate::types::ChatMessage::system($content)
    };
}

/// Creates a human message
#[macro_export]
macro_rules! human {
    ($content:expr) => {
        $crate::types::ChatMessage::human($content)
    };
}

/// Creates an AI message
#[macro_export]
macro_rules! ai {
    ($content:expr) => {
        $crate::types::ChatMessage::ai($content)
    };
}
