//! 한글 음절 조합기
//!
//! 조합 중인 음절을 최대 하나만 가진다. 자모가 기대하는 다음 자리에 맞으면
//! 음절을 확장하고, 맞지 않으면 상태를 바꾸지 않고 그대로 통과시킨다.

use crate::core::glyph::{index_of_leading, index_of_trailing, index_of_vowel, jamo_for, Slot};
use crate::core::unicode::compose_syllable;

/// 조합 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// 아무것도 없음
    Empty,
    /// 초성만 입력됨
    Choseong(u32),
    /// 초성+중성
    ChoseongJungseong(u32, u32),
}

/// `accept` 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeResult {
    /// 조합 중 (단독 초성 또는 초성+중성 음절)
    Partial(char),
    /// 종성까지 채워진 완성 음절, 조합기는 비워짐
    Complete(char),
    /// 순서에 맞지 않는 자모나 비한글 문자, 상태 변화 없음
    Passthrough(char),
}

impl ComposeResult {
    pub fn glyph(&self) -> char {
        match *self {
            ComposeResult::Partial(c)
            | ComposeResult::Complete(c)
            | ComposeResult::Passthrough(c) => c,
        }
    }
}

/// 한글 음절 조합기
#[derive(Debug, Clone)]
pub struct SyllableComposer {
    state: State,
}

impl SyllableComposer {
    pub fn new() -> Self {
        Self { state: State::Empty }
    }

    /// 자모 하나를 입력
    pub fn accept(&mut self, jamo: char) -> ComposeResult {
        match self.state {
            State::Empty => {
                if let Some(cho) = index_of_leading(jamo) {
                    self.state = State::Choseong(cho);
                    return ComposeResult::Partial(jamo);
                }
            }
            State::Choseong(cho) => {
                if let Some(jung) = index_of_vowel(jamo) {
                    if let Some(c) = compose_syllable(cho, jung, 0) {
                        self.state = State::ChoseongJungseong(cho, jung);
                        return ComposeResult::Partial(c);
                    }
                }
            }
            State::ChoseongJungseong(cho, jung) => {
                if let Some(jong) = index_of_trailing(jamo) {
                    if let Some(c) = compose_syllable(cho, jung, jong + 1) {
                        self.reset();
                        return ComposeResult::Complete(c);
                    }
                }
            }
        }
        ComposeResult::Passthrough(jamo)
    }

    /// 조합 중인 음절 폐기
    pub fn reset(&mut self) {
        self.state = State::Empty;
    }

    /// 마지막으로 채운 자리를 지움 (백스페이스)
    /// 반환: 남은 조합 텍스트
    pub fn retreat(&mut self) -> Option<char> {
        self.state = match self.state {
            State::Empty | State::Choseong(_) => State::Empty,
            State::ChoseongJungseong(cho, _) => State::Choseong(cho),
        };
        self.pending()
    }

    /// 현재 조합 중인 텍스트 (비어 있으면 None)
    pub fn pending(&self) -> Option<char> {
        match self.state {
            State::Empty => None,
            State::Choseong(cho) => jamo_for(Slot::Leading, cho),
            State::ChoseongJungseong(cho, jung) => compose_syllable(cho, jung, 0),
        }
    }

    /// 다음 자모가 채울 자리
    pub fn expected_slot(&self) -> Slot {
        match self.state {
            State::Empty => Slot::Leading,
            State::Choseong(_) => Slot::Vowel,
            State::ChoseongJungseong(..) => Slot::Trailing,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.state == State::Empty
    }
}

impl Default for SyllableComposer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_part_syllable() {
        let mut composer = SyllableComposer::new();
        assert_eq!(composer.accept('ㅇ'), ComposeResult::Partial('ㅇ'));
        assert_eq!(composer.accept('ㅏ'), ComposeResult::Partial('\u{C544}'));
        assert_eq!(composer.pending(), Some('아'));
        assert_eq!(composer.expected_slot(), Slot::Trailing);
    }

    #[test]
    fn test_three_part_syllable_resets() {
        let mut composer = SyllableComposer::new();
        composer.accept('ㅇ');
        composer.accept('ㅏ');
        assert_eq!(composer.accept('ㄴ'), ComposeResult::Complete('\u{C548}'));
        assert!(composer.is_empty());
        assert_eq!(composer.pending(), None);
        assert_eq!(composer.expected_slot(), Slot::Leading);
    }

    #[test]
    fn test_compound_final() {
        let mut composer = SyllableComposer::new();
        composer.accept('ㅇ');
        composer.accept('ㅣ');
        assert_eq!(composer.accept('ㄺ'), ComposeResult::Complete('읽'));
    }

    #[test]
    fn test_vowel_first_passthrough() {
        let mut composer = SyllableComposer::new();
        assert_eq!(composer.accept('ㅏ'), ComposeResult::Passthrough('ㅏ'));
        assert!(composer.is_empty());
    }

    #[test]
    fn test_out_of_sequence_keeps_state() {
        let mut composer = SyllableComposer::new();
        composer.accept('ㄱ');
        // 중성 자리에 자음
        assert_eq!(composer.accept('ㄴ'), ComposeResult::Passthrough('ㄴ'));
        assert_eq!(composer.pending(), Some('ㄱ'));
        // 종성 불가 자음
        composer.accept('ㅏ');
        assert_eq!(composer.accept('ㄸ'), ComposeResult::Passthrough('ㄸ'));
        assert_eq!(composer.pending(), Some('가'));
        // 비한글 문자
        assert_eq!(composer.accept('1'), ComposeResult::Passthrough('1'));
        assert_eq!(composer.pending(), Some('가'));
    }

    #[test]
    fn test_reset_behaves_like_new() {
        let mut composer = SyllableComposer::new();
        composer.accept('ㄱ');
        composer.accept('ㅏ');
        composer.reset();
        assert_eq!(composer.accept('ㅎ'), SyllableComposer::new().accept('ㅎ'));

        let mut composer = SyllableComposer::new();
        composer.accept('ㄱ');
        composer.accept('ㅏ');
        composer.accept('ㄱ');
        assert_eq!(composer.accept('ㅎ'), ComposeResult::Partial('ㅎ'));
    }

    #[test]
    fn test_retreat() {
        let mut composer = SyllableComposer::new();
        composer.accept('ㅎ');
        composer.accept('ㅏ');
        assert_eq!(composer.retreat(), Some('ㅎ'));
        assert_eq!(composer.expected_slot(), Slot::Vowel);
        assert_eq!(composer.retreat(), None);
        assert!(composer.is_empty());
        assert_eq!(composer.retreat(), None);
    }
}
