//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::KyboardError;
use crate::keymap::gesture::DEFAULT_DEADZONE;
use crate::keymap::keys::Layout;

/// kyboard 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct KyboardConfig {
    /// 탭과 스와이프를 구분하는 데드존 (논리 픽셀)
    #[serde(default = "default_swipe_deadzone")]
    pub swipe_deadzone: f32,
    /// 세션 시작 시 자판
    #[serde(default = "default_initial_layout")]
    pub initial_layout: Layout,
}

fn default_swipe_deadzone() -> f32 {
    DEFAULT_DEADZONE
}

fn default_initial_layout() -> Layout {
    Layout::Korean
}

impl Default for KyboardConfig {
    fn default() -> Self {
        Self {
            swipe_deadzone: default_swipe_deadzone(),
            initial_layout: default_initial_layout(),
        }
    }
}

/// 설정 파일 경로: ~/.config/kyboard/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| PathBuf::from("/var/tmp"));
    home.join(".config").join("kyboard").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> KyboardConfig {
    let path = config_path();
    match load_config_from(&path) {
        Ok(config) => config,
        Err(KyboardError::IoError(_)) => KyboardConfig::default(),
        Err(e) => {
            log::warn!("설정 파일 무시 ({}): {}", path.display(), e);
            KyboardConfig::default()
        }
    }
}

/// 지정한 경로에서 설정 로드
pub fn load_config_from(path: &Path) -> Result<KyboardConfig, KyboardError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// 지정한 경로에 설정 저장
pub fn save_config_to(config: &KyboardConfig, path: &Path) -> Result<(), KyboardError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}
