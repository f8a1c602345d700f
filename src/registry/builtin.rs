use super::term::TermEntry;

/// Terms shipped with the plugin, used when the config declares none.
pub fn builtin_terms() -> Vec<TermEntry> {
    vec![
        TermEntry::new("Point", "Point", "class", "A point in a 2D space"),
        TermEntry::new("Vector", "Vector", "class", "A vector in a 2D space"),
        TermEntry::new("add", "add", "method", "Adds two numbers together"),
        TermEntry::new("subtract", "subtract", "method", "Subtracts two numbers"),
    ]
}
