use clap::Parser;
use engine_performance_toolbox::{app, config, i18n};

/// 명령행 옵션.
#[derive(Debug, Parser)]
#[command(name = "engine_performance_toolbox_cli")]
#[command(about = "내연기관 정상상태 성능 계산 CLI")]
struct Cli {
    /// 언어 코드 (auto/ko/en)
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
    /// VE/BSFC 조회 테이블 CSV 경로 (설정 파일 값 대신 사용)
    #[arg(long)]
    maps: Option<String>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    if let Some(maps) = cli.maps {
        cfg.maps_path = maps;
    }
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new(&lang);
    app::run(&mut cfg, &tr)?;
    Ok(())
}
