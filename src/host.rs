//! 텍스트 입력 대상 (호스트 편집기) 인터페이스

/// 조합기 출력을 받는 호스트
pub trait TextHost {
    /// 조합 중(미확정) 영역을 `text`로 교체. 빈 문자열이면 조합 영역 제거.
    fn set_composing_span(&mut self, text: &str);

    /// `text`를 커서 위치에 확정 입력하고 조합 영역을 비움
    fn commit(&mut self, text: &str);

    /// 커서 앞 `count` 글자 삭제 (조합 영역이 있으면 조합 영역을 한 글자 줄임)
    fn delete_backward(&mut self, count: usize);
}

/// 메모리 내 문서 버퍼
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    committed: String,
    composing: String,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// 확정된 텍스트
    pub fn committed(&self) -> &str {
        &self.committed
    }

    /// 조합 중인 텍스트
    pub fn composing(&self) -> &str {
        &self.composing
    }

    /// 화면에 보이는 전체 텍스트 (확정 + 조합 중)
    pub fn text(&self) -> String {
        format!("{}{}", self.committed, self.composing)
    }
}

impl TextHost for MemoryHost {
    fn set_composing_span(&mut self, text: &str) {
        self.composing.clear();
        self.composing.push_str(text);
    }

    fn commit(&mut self, text: &str) {
        self.composing.clear();
        self.committed.push_str(text);
    }

    fn delete_backward(&mut self, count: usize) {
        if !self.composing.is_empty() {
            self.composing.pop();
            return;
        }
        for _ in 0..count {
            if self.committed.pop().is_none() {
                break;
            }
        }
    }
}
