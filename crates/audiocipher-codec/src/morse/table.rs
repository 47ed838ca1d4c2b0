//! International Morse code for letters, digits and the word space.

const TABLE: [(char, &str); 37] = [
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    (' ', " "),
];

/// Morse code for `c` (case-insensitive).
pub fn code_for(c: char) -> Option<&'static str> {
    let c = c.to_ascii_uppercase();
    TABLE.iter().find(|&&(k, _)| k == c).map(|&(_, code)| code)
}

/// Character for a dot/dash `code`.
pub fn char_for(code: &str) -> Option<char> {
    TABLE.iter().find(|&&(_, v)| v == code).map(|&(k, _)| k)
}

/// Render text as Morse: letters separated by one space, words by three.
///
/// Characters outside the table are dropped.
pub fn to_morse(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            word.chars()
                .filter_map(code_for)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join("   ")
}

/// Inverse of [`to_morse`]. Unknown letters and empty words are dropped;
/// words are rejoined with single spaces.
pub fn from_morse(morse: &str) -> String {
    morse
        .split("   ")
        .map(|word| {
            word.split(' ')
                .filter(|code| !code.is_empty())
                .filter_map(char_for)
                .collect::<String>()
        })
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
