//! 조합 모드 (다음 키 입력이 채울 자리) 관리

use crate::core::glyph::Slot;

/// 다음 키 입력이 채울 것으로 기대되는 자리
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompositionMode {
    LeadingExpected,
    VowelExpected,
    TrailingExpected,
}

impl CompositionMode {
    pub fn slot(&self) -> Slot {
        match self {
            CompositionMode::LeadingExpected => Slot::Leading,
            CompositionMode::VowelExpected => Slot::Vowel,
            CompositionMode::TrailingExpected => Slot::Trailing,
        }
    }

    fn next(self) -> Self {
        match self {
            CompositionMode::LeadingExpected => CompositionMode::VowelExpected,
            CompositionMode::VowelExpected => CompositionMode::TrailingExpected,
            CompositionMode::TrailingExpected => CompositionMode::LeadingExpected,
        }
    }
}

/// 아래 스와이프가 모드에 주는 부수 효과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeShift {
    /// (mode + 1) mod 3
    Advance,
    /// 초성 모드로 복귀
    Restart,
}

/// 조합 모드 컨트롤러
/// 종료 상태 없이 초성 -> 중성 -> 종성 -> 초성으로 순환한다.
#[derive(Debug, Clone)]
pub struct CompositionModeController {
    mode: CompositionMode,
}

impl CompositionModeController {
    pub fn new() -> Self {
        Self {
            mode: CompositionMode::LeadingExpected,
        }
    }

    pub fn mode(&self) -> CompositionMode {
        self.mode
    }

    /// 조합기가 현재 자리를 채웠을 때 호출
    pub fn advance(&mut self) {
        self.mode = self.mode.next();
    }

    /// 조합기가 다음에 채울 자리로 모드를 맞춤 (백스페이스)
    pub fn follow(&mut self, slot: Slot) {
        self.mode = match slot {
            Slot::Leading => CompositionMode::LeadingExpected,
            Slot::Vowel => CompositionMode::VowelExpected,
            Slot::Trailing => CompositionMode::TrailingExpected,
        };
    }

    pub fn reset(&mut self) {
        self.mode = CompositionMode::LeadingExpected;
    }

    pub fn apply(&mut self, shift: ModeShift) {
        match shift {
            ModeShift::Advance => self.advance(),
            ModeShift::Restart => self.reset(),
        }
    }
}

impl Default for CompositionModeController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_mode() {
        let controller = CompositionModeController::new();
        assert_eq!(controller.mode(), CompositionMode::LeadingExpected);
        assert_eq!(controller.mode().slot(), Slot::Leading);
    }

    #[test]
    fn test_advance_cycles() {
        let mut controller = CompositionModeController::new();
        controller.advance();
        assert_eq!(controller.mode(), CompositionMode::VowelExpected);
        controller.advance();
        assert_eq!(controller.mode(), CompositionMode::TrailingExpected);
        controller.advance();
        assert_eq!(controller.mode(), CompositionMode::LeadingExpected);
    }

    #[test]
    fn test_follow_and_reset() {
        let mut controller = CompositionModeController::new();
        controller.follow(Slot::Trailing);
        assert_eq!(controller.mode(), CompositionMode::TrailingExpected);
        controller.follow(Slot::Vowel);
        assert_eq!(controller.mode(), CompositionMode::VowelExpected);
        for slot in [Slot::Leading, Slot::Vowel, Slot::Trailing] {
            controller.follow(slot);
            assert_eq!(controller.mode().slot(), slot);
        }

        controller.advance();
        controller.reset();
        assert_eq!(controller.mode(), CompositionMode::LeadingExpected);
    }

    #[test]
    fn test_apply_shift() {
        let mut controller = CompositionModeController::new();
        controller.apply(ModeShift::Advance);
        assert_eq!(controller.mode(), CompositionMode::VowelExpected);
        controller.apply(ModeShift::Restart);
        assert_eq!(controller.mode(), CompositionMode::LeadingExpected);
    }
}
