//! Arabic to Latin transliteration
//!
//! A very rough, character-by-character approximation used to make Arabic
//! output readable for people who do not read the script. It is not a
//! linguistic transcription standard: short vowels are not recovered and
//! several letters collapse onto the same Latin letter.

/// Latin replacement for a single character, if it has one
fn latin_for(c: char) -> Option<&'static str> {
    let latin = match c {
        'ا' => "a",
        'ب' => "b",
        'ت' => "t",
        'ث' => "th",
        'ج' => "j",
        'ح' => "h",
        'خ' => "kh",
        'د' => "d",
        'ذ' => "dh",
        'ر' => "r",
        'ز' => "z",
        'س' => "s",
        'ش' => "sh",
        'ص' => "s",
        'ض' => "d",
        'ط' => "t",
        'ظ' => "z",
        'ع' => "a",
        'غ' => "gh",
        'ف' => "f",
        'ق' => "q",
        'ك' => "k",
        'ل' => "l",
        'م' => "m",
        'ن' => "n",
        'ه' => "h",
        'و' => "w",
        'ي' => "y",
        'ء' => "'",
        'ى' => "a",
        'ة' => "h",
        'أ' => "a",
        'إ' => "i",
        'آ' => "aa",
        'ؤ' => "u",
        'ئ' => "y",
        // Arabic punctuation
        '؟' => "?",
        '،' => ",",
        _ => return None,
    };
    Some(latin)
}

/// Transliterate Arabic script into Latin characters
///
/// Characters outside the table (whitespace, digits, other scripts) are
/// copied through unchanged, so this never fails.
///
/// # Example
///
/// ```
/// use quicktranslate::transliterate;
///
/// assert_eq!(transliterate("مرحبا"), "mrhba");
/// assert_eq!(transliterate("hello"), "hello");
/// ```
pub fn transliterate(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match latin_for(c) {
            Some(latin) => out.push_str(latin),
            None => out.push(c),
        }
    }
    out
}
