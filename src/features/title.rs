//! Honorific lookup for the title feature.

/// Honorific tokens and their codes, scanned in order.
///
/// Tokens are matched as literal, case-sensitive substrings including the
/// trailing period, so `"Mr."` never matches inside `"Mrs."`.
pub const HONORIFICS: [(&str, u8); 17] = [
    ("Mr.", 1),
    ("Mrs.", 2),
    ("Miss.", 3),
    ("Ms.", 4),
    ("Master.", 5),
    ("Dr.", 6),
    ("Rev.", 7),
    ("Col.", 8),
    ("Major.", 9),
    ("Capt.", 10),
    ("Mlle.", 11),
    ("Mme.", 12),
    ("Sir.", 13),
    ("Lady.", 14),
    ("Countess.", 15),
    ("Jonkheer.", 16),
    ("Don.", 17),
];

/// Code of the first honorific contained in `name`, or `None`.
pub fn title_code(name: &str) -> Option<u8> {
    HONORIFICS
        .iter()
        .find(|(token, _)| name.contains(token))
        .map(|&(_, code)| code)
}
