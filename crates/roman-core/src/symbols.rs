//! The numeral symbol table.
//!
//! ```text
//!  1000  900  500  400  100  90  50  40  10  9  5  4  1
//!   M    CM    D   CD    C   XC   L  XL   X  IX  V  IV  I
//! ```
//!
//! Entries are strictly descending by value. Every subtractive pair sits
//! above the single character it starts with, so the first entry that is a
//! prefix of some text is also the longest one.

/// One row of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    pub value: i64,
    pub text: &'static str,
}

const fn sym(value: i64, text: &'static str) -> Symbol {
    Symbol { value, text }
}

/// Ordered largest to smallest. Encode and decode both rely on this order.
pub static SYMBOLS: [Symbol; 13] = [
    sym(1000, "M"),
    sym(900, "CM"),
    sym(500, "D"),
    sym(400, "CD"),
    sym(100, "C"),
    sym(90, "XC"),
    sym(50, "L"),
    sym(40, "XL"),
    sym(10, "X"),
    sym(9, "IX"),
    sym(5, "V"),
    sym(4, "IV"),
    sym(1, "I"),
];

/// Larger than any table value; seeds the descending-order scan.
pub(crate) const ORDER_SENTINEL: i64 = 20_000;

/// Maximum consecutive occurrences of a base character, or `None` when the
/// character is not a numeral at all.
pub fn max_repeats(c: char) -> Option<usize> {
    match c {
        'I' | 'X' | 'C' | 'M' => Some(3),
        'V' | 'L' | 'D' => Some(1),
        _ => None,
    }
}

/// Returns the longest table entry that prefixes `rest`.
pub fn next_symbol(rest: &str) -> Option<&'static Symbol> {
    SYMBOLS.iter().find(|s| rest.starts_with(s.text))
}
