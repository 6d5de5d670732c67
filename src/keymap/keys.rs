//! 세벌식 12키 자판의 키 정의와 제스처별 출력 테이블
//!
//! 키 식별자와 출력은 정적 테이블로 명시한다.

use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// 자판 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    Korean,
    English,
    Special,
}

/// 물리 키 식별자
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyId {
    #[serde(rename = "key_01")]
    K01,
    #[serde(rename = "key_02")]
    K02,
    #[serde(rename = "key_03")]
    K03,
    #[serde(rename = "key_04")]
    K04,
    #[serde(rename = "key_05")]
    K05,
    #[serde(rename = "key_06")]
    K06,
    #[serde(rename = "key_07")]
    K07,
    #[serde(rename = "key_08")]
    K08,
    #[serde(rename = "key_09")]
    K09,
    #[serde(rename = "key_10")]
    K10,
    #[serde(rename = "key_11")]
    K11,
    #[serde(rename = "key_12")]
    K12,
    #[serde(rename = "key_space")]
    Space,
    #[serde(rename = "key_backspace")]
    Backspace,
    #[serde(rename = "key_enter")]
    Enter,
    #[serde(rename = "key_exclamation")]
    Exclamation,
    #[serde(rename = "key_question")]
    Question,
    #[serde(rename = "key_comma")]
    Comma,
    #[serde(rename = "key_dot")]
    Dot,
    #[serde(rename = "key_semicolon")]
    Semicolon,
    #[serde(rename = "key_paren_open")]
    ParenOpen,
    #[serde(rename = "key_paren_close")]
    ParenClose,
    #[serde(rename = "key_korean")]
    Korean,
    #[serde(rename = "key_english")]
    English,
    #[serde(rename = "key_special")]
    Special,
}

/// 명령 키
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Space,
    Backspace,
    Enter,
    /// 문장 부호 (그대로 확정 입력)
    Punctuation(char),
    SwitchLayout(Layout),
}

/// 한글 키 하나의 제스처별 출력
///
/// 모드별 배열은 [초성, 중성, 종성] 순서.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GestureEntry {
    pub tap: [Option<char>; 3],
    pub left: Option<char>,
    pub right: Option<char>,
    pub up: Option<char>,
    pub down: [Option<char>; 3],
}

/// 키 바인딩
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyBinding {
    Hangul(GestureEntry),
    Command(Command),
}

/// 아래 스와이프는 세 모드 모두 같은 출력 (종성 테이블은 초성 테이블과 동일)
/// 위/오른쪽 스와이프는 같은 기호
fn hangul(
    tap: [Option<char>; 3],
    left: Option<char>,
    symbol: char,
    down: Option<char>,
) -> KeyBinding {
    KeyBinding::Hangul(GestureEntry {
        tap,
        left,
        right: Some(symbol),
        up: Some(symbol),
        down: [down, down, down],
    })
}

lazy_static! {
    /// 키 식별자 -> 바인딩
    pub static ref KEY_TABLE: HashMap<KeyId, KeyBinding> = {
        let mut m = HashMap::new();

        //                     탭 [초성, 중성, 종성]             왼쪽       위/오른쪽 아래
        m.insert(KeyId::K01, hangul([Some('ㅇ'), None, None], None, '1', Some('ㅎ')));
        m.insert(KeyId::K02, hangul([Some('ㄱ'), Some('ㅗ'), None], Some('ㄲ'), '2', Some('ㅋ')));
        m.insert(KeyId::K03, hangul([None, Some('ㅏ'), Some('ㅇ')], None, '3', None));
        m.insert(KeyId::K04, hangul([Some('ㄴ'), None, None], None, '4', Some('ㅁ')));
        m.insert(KeyId::K05, hangul([Some('ㄷ'), Some('ㅜ'), None], Some('ㄸ'), '5', Some('ㅌ')));
        m.insert(KeyId::K06, hangul([None, Some('ㅓ'), Some('ㄴ')], None, '6', None));
        m.insert(KeyId::K07, hangul([Some('ㅁ'), None, None], None, '7', None));
        m.insert(KeyId::K08, hangul([Some('ㅂ'), Some('ㅐ'), None], Some('ㅃ'), '8', Some('ㅍ')));
        m.insert(KeyId::K09, hangul([Some('ㅅ'), Some('ㅣ'), Some('ㄹ')], Some('ㅆ'), '9', None));
        m.insert(KeyId::K10, hangul([Some('ㅈ'), None, None], Some('ㅉ'), '@', None));
        m.insert(KeyId::K11, hangul([None, Some('ㅔ'), None], None, '0', Some('ㅊ')));
        m.insert(KeyId::K12, hangul([None, Some('ㅡ'), Some('ㅅ')], None, '.', None));

        m.insert(KeyId::Space, KeyBinding::Command(Command::Space));
        m.insert(KeyId::Backspace, KeyBinding::Command(Command::Backspace));
        m.insert(KeyId::Enter, KeyBinding::Command(Command::Enter));
        m.insert(KeyId::Exclamation, KeyBinding::Command(Command::Punctuation('!')));
        m.insert(KeyId::Question, KeyBinding::Command(Command::Punctuation('?')));
        m.insert(KeyId::Comma, KeyBinding::Command(Command::Punctuation(',')));
        m.insert(KeyId::Dot, KeyBinding::Command(Command::Punctuation('.')));
        m.insert(KeyId::Semicolon, KeyBinding::Command(Command::Punctuation(';')));
        m.insert(KeyId::ParenOpen, KeyBinding::Command(Command::Punctuation('(')));
        m.insert(KeyId::ParenClose, KeyBinding::Command(Command::Punctuation(')')));
        m.insert(KeyId::Korean, KeyBinding::Command(Command::SwitchLayout(Layout::Korean)));
        m.insert(KeyId::English, KeyBinding::Command(Command::SwitchLayout(Layout::English)));
        m.insert(KeyId::Special, KeyBinding::Command(Command::SwitchLayout(Layout::Special)));

        m
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_is_bound() {
        assert_eq!(KEY_TABLE.len(), 25);
        assert!(matches!(KEY_TABLE.get(&KeyId::K01), Some(KeyBinding::Hangul(_))));
        assert_eq!(
            KEY_TABLE.get(&KeyId::Question),
            Some(&KeyBinding::Command(Command::Punctuation('?')))
        );
    }

    #[test]
    fn test_trailing_down_table_duplicates_leading() {
        for binding in KEY_TABLE.values() {
            if let KeyBinding::Hangul(entry) = binding {
                assert_eq!(entry.down[0], entry.down[2]);
            }
        }
    }

    #[test]
    fn test_up_swipe_matches_right_swipe() {
        for binding in KEY_TABLE.values() {
            if let KeyBinding::Hangul(entry) = binding {
                assert_eq!(entry.up, entry.right);
            }
        }
    }

    #[test]
    fn test_key_id_serde_names() {
        let key: KeyId = serde_json::from_str("\"key_01\"").unwrap();
        assert_eq!(key, KeyId::K01);
        let key: KeyId = serde_json::from_str("\"key_paren_close\"").unwrap();
        assert_eq!(key, KeyId::ParenClose);
        assert_eq!(serde_json::to_string(&KeyId::Space).unwrap(), "\"key_space\"");
    }
}
