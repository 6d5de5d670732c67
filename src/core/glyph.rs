//! 호환용 자모 분류 (초성/중성/종성)
//!
//! 세 분류는 각각 고정된 정렬 테이블을 가지며, 인덱스는 테이블 내 위치이다.
//! 초성 집합은 종성 집합의 부분집합이므로 `classify`는 겹치는 자음을 초성으로
//! 보고한다. 특정 자리 기준의 분류가 필요하면 `classify_in`을 사용한다.

/// 초성 19자
pub const CHOSEONG: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ',
    'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 중성 21자
pub const JUNGSEONG: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ',
    'ㅝ', 'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// 종성 27자 (종성 없음 제외)
pub const JONGSEONG: [char; 27] = [
    'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ', 'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ',
    'ㅀ', 'ㅁ', 'ㅂ', 'ㅄ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 음절 내 자리
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// 초성
    Leading,
    /// 중성
    Vowel,
    /// 종성
    Trailing,
}

/// 자모 분류 결과 (인덱스는 각 테이블 내 위치)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphClass {
    LeadingConsonant(u32),
    Vowel(u32),
    TrailingConsonant(u32),
    Unclassified,
}

impl GlyphClass {
    /// 분류된 자리 (미분류면 None)
    pub fn slot(&self) -> Option<Slot> {
        match self {
            GlyphClass::LeadingConsonant(_) => Some(Slot::Leading),
            GlyphClass::Vowel(_) => Some(Slot::Vowel),
            GlyphClass::TrailingConsonant(_) => Some(Slot::Trailing),
            GlyphClass::Unclassified => None,
        }
    }
}

fn position(table: &[char], glyph: char) -> Option<u32> {
    table.iter().position(|&c| c == glyph).map(|i| i as u32)
}

/// 초성 인덱스 (0~18)
pub fn index_of_leading(glyph: char) -> Option<u32> {
    position(&CHOSEONG, glyph)
}

/// 중성 인덱스 (0~20)
pub fn index_of_vowel(glyph: char) -> Option<u32> {
    position(&JUNGSEONG, glyph)
}

/// 종성 테이블 내 위치 (0~26)
/// 음절 조합 시에는 +1 해야 함 (0 = 종성 없음)
pub fn index_of_trailing(glyph: char) -> Option<u32> {
    position(&JONGSEONG, glyph)
}

/// 자모 하나를 분류
/// 초성 > 중성 > 종성 순으로 확인하므로 종성 전용 자모(겹받침)만 종성으로 분류됨
pub fn classify(glyph: char) -> GlyphClass {
    if let Some(i) = index_of_leading(glyph) {
        GlyphClass::LeadingConsonant(i)
    } else if let Some(i) = index_of_vowel(glyph) {
        GlyphClass::Vowel(i)
    } else if let Some(i) = index_of_trailing(glyph) {
        GlyphClass::TrailingConsonant(i)
    } else {
        GlyphClass::Unclassified
    }
}

/// 특정 자리의 테이블 기준으로 분류
pub fn classify_in(glyph: char, slot: Slot) -> GlyphClass {
    let found = match slot {
        Slot::Leading => index_of_leading(glyph).map(GlyphClass::LeadingConsonant),
        Slot::Vowel => index_of_vowel(glyph).map(GlyphClass::Vowel),
        Slot::Trailing => index_of_trailing(glyph).map(GlyphClass::TrailingConsonant),
    };
    found.unwrap_or(GlyphClass::Unclassified)
}

/// 자리와 인덱스로 자모 문자 반환
pub fn jamo_for(slot: Slot, index: u32) -> Option<char> {
    let table: &[char] = match slot {
        Slot::Leading => &CHOSEONG,
        Slot::Vowel => &JUNGSEONG,
        Slot::Trailing => &JONGSEONG,
    };
    table.get(index as usize).copied()
}
