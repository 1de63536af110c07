// Balanced-bracket scan over `(){}[]`.
//
// Single left-to-right pass with a Vec of unmatched openers. O(len) time,
// O(len) auxiliary space. Characters outside the six brackets are ignored:
// they are neither pushed nor matched against.

/// True iff every opener is closed by the same-type closer in nested order
/// and nothing is left open. The empty string is balanced.
pub fn is_valid(input: &str) -> bool {
    let mut open = Vec::new();
    for ch in input.chars() {
        if is_opener(ch) {
            open.push(ch);
        } else if let Some(expected) = opener_for(ch) {
            if open.pop() != Some(expected) {
                return false;
            }
        }
    }
    open.is_empty()
}

fn is_opener(ch: char) -> bool {
    matches!(ch, '(' | '[' | '{')
}

/// The opener a closing bracket must match, None for non-closers.
fn opener_for(ch: char) -> Option<char> {
    match ch {
        ')' => Some('('),
        ']' => Some('['),
        '}' => Some('{'),
        _ => None,
    }
}
