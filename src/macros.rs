/// Lazily compiled `regex::Regex` stored in a function-local static.
#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Build a `PatternSet` from built-in `pattern => tag` literals.
///
/// Built-in tables are fixed at compile time, so a pattern that fails to
/// compile is a programming error and panics on first use, the same way
/// `regex!` does.
#[macro_export]
macro_rules! pattern_set {
    ( $( $pat:expr => $tag:expr ),* $(,)? ) => {{
        let mut set = $crate::PatternSet::new();
        $(
            set.push($pat, $tag).unwrap();
        )*
        set
    }};
}
