//! JSON 이벤트 스크립트 재생
//!
//! # 스크립트 형식
//! ```json
//! [
//!   { "key": { "key": "key_01" } },
//!   { "key": { "key": "key_02", "dx": -20.0, "dy": 0.0 } },
//!   { "text": "a" },
//!   "reset"
//! ]
//! ```

use crate::error::KyboardError;
use crate::host::TextHost;
use crate::session::{InputEvent, InputSession};

/// JSON 문자열을 이벤트 목록으로 파싱
pub fn parse_script(json: &str) -> Result<Vec<InputEvent>, KyboardError> {
    Ok(serde_json::from_str(json)?)
}

/// 이벤트를 순서대로 세션에 넣고 효과를 호스트에 적용
pub fn replay<H: TextHost + ?Sized>(
    session: &mut InputSession,
    events: &[InputEvent],
    host: &mut H,
) {
    for event in events {
        session.handle_input_event(*event).apply(host);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryHost;
    use crate::keymap::KeyId;

    #[test]
    fn test_parse_script() {
        let json = r#"[
            {"key": {"key": "key_01"}},
            {"key": {"key": "key_02", "dx": -20.0, "dy": 1.5}},
            {"text": "a"},
            "reset"
        ]"#;
        let events = parse_script(json).unwrap();
        assert_eq!(
            events,
            vec![
                InputEvent::tap(KeyId::K01),
                InputEvent::Key {
                    key: KeyId::K02,
                    dx: -20.0,
                    dy: 1.5
                },
                InputEvent::Text('a'),
                InputEvent::Reset,
            ]
        );
    }

    #[test]
    fn test_parse_script_rejects_unknown_key() {
        let result = parse_script(r#"[{"key": {"key": "key_99"}}]"#);
        assert!(matches!(result, Err(KyboardError::ParseError(_))));
    }

    #[test]
    fn test_replay() {
        let events = [
            InputEvent::tap(KeyId::K01),
            InputEvent::tap(KeyId::K03),
            InputEvent::tap(KeyId::K06),
            InputEvent::tap(KeyId::Space),
        ];
        let mut session = InputSession::new();
        let mut host = MemoryHost::new();
        replay(&mut session, &events, &mut host);
        assert_eq!(host.text(), "안 ");
    }
}
