//! 설정/이벤트 스크립트 입출력 에러

/// kyboard 에러
#[derive(Debug)]
pub enum KyboardError {
    /// 파일 읽기/쓰기 실패
    IoError(std::io::Error),
    /// JSON 파싱/직렬화 실패
    ParseError(String),
}

impl std::fmt::Display for KyboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KyboardError::IoError(e) => write!(f, "파일 입출력 오류: {}", e),
            KyboardError::ParseError(s) => write!(f, "JSON 파싱 오류: {}", s),
        }
    }
}

impl std::error::Error for KyboardError {}

impl From<std::io::Error> for KyboardError {
    fn from(e: std::io::Error) -> Self {
        KyboardError::IoError(e)
    }
}

impl From<serde_json::Error> for KyboardError {
    fn from(e: serde_json::Error) -> Self {
        KyboardError::ParseError(e.to_string())
    }
}
