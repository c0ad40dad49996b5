//! Script classification helpers.


#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
enum Class {
    // Upper kana.
    U,
    // Lower kana used for composite kana and sokuon.
    L,
    // Iteration marks and other punctuation in the kana blocks.
    P,
    // Unassigned.
    X,
}

/// The prolonged sound mark.
pub const LONG_VOWEL_MARK: char = 'ー';

/// Test if a character is hiragana.
pub fn is_hiragana(c: char) -> bool {
    matches!(get_hiragana(c), Some(Class::U | Class::L))
}

/// Test if a character is a kanji.
pub fn is_kanji(c: char) -> bool {
    matches!(c, '々' | '\u{3400}'..='\u{4dbf}' | '\u{4e00}'..='\u{9fff}' | '\u{f900}'..='\u{faff}')
}

/// Test if a string contains any kanji.
pub fn contains_kanji(s: &str) -> bool {
    s.chars().any(is_kanji)
}

/// Test if a character is one of the bare hiragana vowels.
#[inline]
pub fn is_hiragana_vowel(c: char) -> bool {
    matches!(c, 'あ' | 'い' | 'う' | 'え' | 'お')
}

/// Test if a character is a romaji consonant which is written doubled
/// where kana would use a sokuon.
#[inline]
pub fn is_romaji_consonant(c: char) -> bool {
    matches!(
        c,
        'k' | 's' | 't' | 'p' | 'c' | 'g' | 'z' | 'j' | 'd' | 'b' | 'f' | 'r'
    )
}

/// Map a katakana character onto its hiragana counterpart.
pub fn katakana_to_hiragana(c: char) -> Option<char> {
    let c = (c as u32).checked_sub(tables::KATAKANA_OFFSET)?;
    let c = char::from_u32(c)?;

    if is_hiragana(c) {
        Some(c)
    } else {
        None
    }
}

fn get_hiragana(c: char) -> Option<Class> {
    let c = usize::try_from(c as u32).ok()?;
    let c = c.checked_sub(tables::HIRA_B)?;
    Some(*tables::HIRA_T.get(c)?)
}

mod tables {
    use super::Class::*;

    pub(super) static HIRA_B: usize = 0x3040;

    pub(super) static KATAKANA_OFFSET: u32 = 0x60;

    #[rustfmt::skip]
    pub(super) static HIRA_T: [super::Class; 0x60] = [
        /*U+304x*/
        /*　*/ X, /*ぁ*/ L, /*あ*/ U, /*ぃ*/ L, /*い*/ U, /*ぅ*/ L, /*う*/ U, /*ぇ*/ L,
        /*え*/ U, /*ぉ*/ L, /*お*/ U, /*か*/ U, /*が*/ U, /*き*/ U, /*ぎ*/ U, /*く*/ U,
        /*U+305x*/
        /*ぐ*/ U, /*け*/ U, /*げ*/ U, /*こ*/ U, /*ご*/ U, /*さ*/ U, /*ざ*/ U, /*し*/ U,
        /*じ*/ U, /*す*/ U, /*ず*/ U, /*せ*/ U, /*ぜ*/ U, /*そ*/ U, /*ぞ*/ U, /*た*/ U,
        /*U+306x*/
        /*だ*/ U, /*ち*/ U, /*ぢ*/ U, /*っ*/ L, /*つ*/ U, /*づ*/ U, /*て*/ U, /*で*/ U,
        /*と*/ U, /*ど*/ U, /*な*/ U, /*に*/ U, /*ぬ*/ U, /*ね*/ U, /*の*/ U, /*は*/ U,
        /*U+307x*/
        /*ば*/ U, /*ぱ*/ U, /*ひ*/ U, /*び*/ U, /*ぴ*/ U, /*ふ*/ U, /*ぶ*/ U, /*ぷ*/ U,
        /*へ*/ U, /*べ*/ U, /*ぺ*/ U, /*ほ*/ U, /*ぼ*/ U, /*ぽ*/ U, /*ま*/ U, /*み*/ U,
        /*U+308x*/
        /*む*/ U, /*め*/ U, /*も*/ U, /*ゃ*/ L, /*や*/ U, /*ゅ*/ L, /*ゆ*/ U, /*ょ*/ L,
        /*よ*/ U, /*ら*/ U, /*り*/ U, /*る*/ U, /*れ*/ U, /*ろ*/ U, /*ゎ*/ L, /*わ*/ U,
        /*U+309x*/
        /*ゐ*/ U, /*ゑ*/ U, /*を*/ U, /*ん*/ U, /*ゔ*/ U, /*ゕ*/ L, /*ゖ*/ L, /*　*/ X,
        /*　*/ X, /*　*/ P, /*　*/ P, /*　*/ P, /*　*/ P, /*ゝ*/ P, /*ゞ*/ P, /*ゟ*/ P,
    ];
}
