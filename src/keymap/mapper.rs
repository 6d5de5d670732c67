//! (키, 제스처, 조합 모드) -> 출력 결정

use std::collections::HashMap;

use crate::core::glyph::classify;
use crate::core::mode::{CompositionMode, ModeShift};
use crate::keymap::gesture::Gesture;
use crate::keymap::keys::{Command, KeyBinding, KeyId, KEY_TABLE};

/// 키 해석 결과의 출력
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutput {
    /// 한글 자모 (조합기로 전달)
    Jamo(char),
    /// 숫자/기호 (그대로 확정)
    Symbol(char),
    Command(Command),
    /// 매핑 없음
    Empty,
}

/// 키 해석 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub output: KeyOutput,
    /// 아래 스와이프 출력이면 조합 단계 이후 모드를 한 번 더 움직인다 (`down_swipe_shift`)
    pub cycles_mode: bool,
}

impl Resolution {
    fn empty() -> Self {
        Self {
            output: KeyOutput::Empty,
            cycles_mode: false,
        }
    }
}

/// 제스처 키 매퍼
#[derive(Debug, Clone, Copy)]
pub struct GestureKeyMapper {
    table: &'static HashMap<KeyId, KeyBinding>,
}

impl GestureKeyMapper {
    pub fn new() -> Self {
        Self { table: &KEY_TABLE }
    }

    /// 키와 제스처를 현재 모드 기준으로 해석
    pub fn resolve(&self, key: KeyId, gesture: Gesture, mode: CompositionMode) -> Resolution {
        let entry = match self.table.get(&key) {
            Some(KeyBinding::Hangul(entry)) => entry,
            Some(KeyBinding::Command(command)) => {
                // 명령 키는 탭에만 반응
                return match gesture {
                    Gesture::Tap => Resolution {
                        output: KeyOutput::Command(*command),
                        cycles_mode: false,
                    },
                    _ => Resolution::empty(),
                };
            }
            None => return Resolution::empty(),
        };

        let slot = mode_index(mode);
        let glyph = match gesture {
            Gesture::Tap => entry.tap[slot],
            Gesture::SwipeLeft => entry.left,
            Gesture::SwipeRight => entry.right,
            Gesture::SwipeUp => entry.up,
            Gesture::SwipeDown => entry.down[slot],
        };

        let Some(glyph) = glyph else {
            return Resolution::empty();
        };

        Resolution {
            output: to_output(glyph),
            cycles_mode: gesture == Gesture::SwipeDown,
        }
    }
}

impl Default for GestureKeyMapper {
    fn default() -> Self {
        Self::new()
    }
}

fn mode_index(mode: CompositionMode) -> usize {
    match mode {
        CompositionMode::LeadingExpected => 0,
        CompositionMode::VowelExpected => 1,
        CompositionMode::TrailingExpected => 2,
    }
}

/// 아래 스와이프가 조합 단계 이후 모드에 주는 부수 효과
///
/// `mode`는 조합기가 자모를 받아 모드를 진행시킨 뒤의 값이다.
/// 기본은 한 칸 진행, 단 중성 모드의 ㅇ/ㅎ 키(K01)는 초성 모드로 돌아간다.
/// 따라서 음절 첫머리에서 ㅎ을 아래로 밀면 초성 모드로 끝난다.
pub fn down_swipe_shift(key: KeyId, mode: CompositionMode) -> ModeShift {
    match (mode, key) {
        (CompositionMode::VowelExpected, KeyId::K01) => ModeShift::Restart,
        _ => ModeShift::Advance,
    }
}

fn to_output(glyph: char) -> KeyOutput {
    match classify(glyph).slot() {
        Some(_) => KeyOutput::Jamo(glyph),
        None => KeyOutput::Symbol(glyph),
    }
}
