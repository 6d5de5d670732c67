//! 입력 세션: 키 이벤트 하나를 받아 호스트에 적용할 효과 하나를 돌려준다.
//!
//! 조합기와 모드 컨트롤러는 세션이 단독으로 소유하며 항상 함께 갱신된다.
//! 포커스 변경이나 자판 전환 시 `reset`으로 조합을 버린다.

use serde::{Deserialize, Serialize};

use crate::config::KyboardConfig;
use crate::core::composer::{ComposeResult, SyllableComposer};
use crate::core::mode::{CompositionMode, CompositionModeController};
use crate::host::TextHost;
use crate::keymap::gesture::{classify_drag, DEFAULT_DEADZONE};
use crate::keymap::keys::{Command, KeyId, Layout};
use crate::keymap::{down_swipe_shift, GestureKeyMapper, KeyOutput};

/// 입력 이벤트
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputEvent {
    /// 키를 누른 뒤 뗌. (dx, dy)는 누른 위치 기준 이동량.
    Key {
        key: KeyId,
        #[serde(default)]
        dx: f32,
        #[serde(default)]
        dy: f32,
    },
    /// 한글 이외 자판에서 입력된 문자
    Text(char),
    /// 포커스 변경 등으로 조합 종료
    Reset,
}

impl InputEvent {
    /// 제자리 탭
    pub fn tap(key: KeyId) -> Self {
        InputEvent::Key { key, dx: 0.0, dy: 0.0 }
    }
}

/// 호스트에 적용할 효과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// 조합 영역 교체
    SetComposing(String),
    /// 확정 입력
    Commit(String),
    /// 이전 음절 확정 후 새 조합 시작 (commit -> set composing 순서)
    CommitThenCompose { commit: String, composing: String },
    /// 커서 앞 글자 삭제
    Delete(usize),
    NoOp,
}

impl Effect {
    /// 효과를 호스트에 적용
    pub fn apply<H: TextHost + ?Sized>(&self, host: &mut H) {
        match self {
            Effect::SetComposing(text) => host.set_composing_span(text),
            Effect::Commit(text) => host.commit(text),
            Effect::CommitThenCompose { commit, composing } => {
                host.commit(commit);
                host.set_composing_span(composing);
            }
            Effect::Delete(count) => host.delete_backward(*count),
            Effect::NoOp => {}
        }
    }
}

/// 한글 입력 세션
#[derive(Debug, Clone)]
pub struct InputSession {
    composer: SyllableComposer,
    mode: CompositionModeController,
    mapper: GestureKeyMapper,
    layout: Layout,
    deadzone: f32,
}

impl InputSession {
    pub fn new() -> Self {
        Self {
            composer: SyllableComposer::new(),
            mode: CompositionModeController::new(),
            mapper: GestureKeyMapper::new(),
            layout: Layout::Korean,
            deadzone: DEFAULT_DEADZONE,
        }
    }

    pub fn with_config(config: &KyboardConfig) -> Self {
        Self {
            layout: config.initial_layout,
            deadzone: config.swipe_deadzone,
            ..Self::new()
        }
    }

    pub fn mode(&self) -> CompositionMode {
        self.mode.mode()
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// 조합 중인 텍스트
    pub fn composing(&self) -> Option<char> {
        self.composer.pending()
    }

    /// 조합 중인 음절을 버리고 초기 상태로
    pub fn reset(&mut self) {
        self.composer.reset();
        self.mode.reset();
    }

    /// 입력 이벤트 처리
    pub fn handle_input_event(&mut self, event: InputEvent) -> Effect {
        let effect = match event {
            InputEvent::Key { key, dx, dy } => self.handle_key(key, dx, dy),
            InputEvent::Text(c) => self.commit_with(c),
            InputEvent::Reset => self.finish_composing(),
        };
        log::debug!("{:?} -> {:?} (mode {:?})", event, effect, self.mode.mode());
        effect
    }

    fn handle_key(&mut self, key: KeyId, dx: f32, dy: f32) -> Effect {
        let Some(gesture) = classify_drag(dx, dy, self.deadzone) else {
            return Effect::NoOp;
        };
        let resolution = self.mapper.resolve(key, gesture, self.mode.mode());

        // 한글 자판이 아니면 한글 키는 무시 (해당 자판은 Text 이벤트를 보냄)
        if self.layout != Layout::Korean && !matches!(resolution.output, KeyOutput::Command(_)) {
            return Effect::NoOp;
        }

        let effect = match resolution.output {
            KeyOutput::Jamo(jamo) => self.feed_jamo(jamo),
            KeyOutput::Symbol(c) => self.commit_with(c),
            KeyOutput::Command(command) => self.handle_command(command),
            KeyOutput::Empty => return Effect::NoOp,
        };

        // 아래 스와이프 부수 효과는 조합기가 모드를 진행시킨 뒤의 모드로 판단
        if resolution.cycles_mode {
            self.mode.apply(down_swipe_shift(key, self.mode.mode()));
        }
        effect
    }

    fn feed_jamo(&mut self, jamo: char) -> Effect {
        match self.composer.accept(jamo) {
            ComposeResult::Partial(c) => {
                self.mode.advance();
                Effect::SetComposing(c.to_string())
            }
            ComposeResult::Complete(c) => {
                self.mode.advance();
                Effect::Commit(c.to_string())
            }
            ComposeResult::Passthrough(c) => {
                // 현재 음절을 확정하고 빈 조합기에서 다시 시도
                let pending = self.take_pending();
                match self.composer.accept(c) {
                    ComposeResult::Partial(started) if pending.is_empty() => {
                        self.mode.advance();
                        Effect::SetComposing(started.to_string())
                    }
                    ComposeResult::Partial(started) => {
                        self.mode.advance();
                        Effect::CommitThenCompose {
                            commit: pending,
                            composing: started.to_string(),
                        }
                    }
                    other => {
                        let mut text = pending;
                        text.push(other.glyph());
                        Effect::Commit(text)
                    }
                }
            }
        }
    }

    fn handle_command(&mut self, command: Command) -> Effect {
        match command {
            Command::Space => {
                // 조합 중이면 조합만 끝내고 공백은 넣지 않음
                let pending = self.take_pending();
                if pending.is_empty() {
                    Effect::Commit(" ".to_string())
                } else {
                    Effect::Commit(pending)
                }
            }
            Command::Backspace => self.backspace(),
            Command::Enter => self.commit_with('\n'),
            Command::Punctuation(c) => self.commit_with(c),
            Command::SwitchLayout(layout) => {
                self.layout = layout;
                self.finish_composing()
            }
        }
    }

    fn backspace(&mut self) -> Effect {
        if self.composer.is_empty() {
            return Effect::Delete(1);
        }
        match self.composer.retreat() {
            Some(rest) => {
                self.mode.follow(self.composer.expected_slot());
                Effect::SetComposing(rest.to_string())
            }
            None => {
                self.reset();
                Effect::SetComposing(String::new())
            }
        }
    }

    /// 조합 중인 음절 확정 (없으면 NoOp)
    fn finish_composing(&mut self) -> Effect {
        let pending = self.take_pending();
        if pending.is_empty() {
            Effect::NoOp
        } else {
            Effect::Commit(pending)
        }
    }

    /// 조합 중인 음절 뒤에 문자를 붙여 확정
    fn commit_with(&mut self, c: char) -> Effect {
        let mut text = self.take_pending();
        text.push(c);
        Effect::Commit(text)
    }

    fn take_pending(&mut self) -> String {
        let pending = self.composer.pending().map(String::from).unwrap_or_default();
        self.reset();
        pending
    }
}

impl Default for InputSession {
    fn default() -> Self {
        Self::new()
    }
}
