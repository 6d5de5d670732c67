//! kyboard - 제스처 한글 자판 이벤트 스크립트 재생기
//!
//! 사용법: kyboard [script.json]  (인자가 없으면 표준 입력에서 읽음)

use std::fs;
use std::io::{self, Read};

use kyboard::config::load_config;
use kyboard::replay::{parse_script, replay};
use kyboard::{InputSession, KyboardError, MemoryHost};

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        log::error!("{}", e);
        eprintln!("kyboard: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), KyboardError> {
    let config = load_config();

    let script = match std::env::args().nth(1) {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let events = parse_script(&script)?;

    let mut session = InputSession::with_config(&config);
    let mut host = MemoryHost::new();
    replay(&mut session, &events, &mut host);

    println!("{}", host.text());
    Ok(())
}
