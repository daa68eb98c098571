use clap::Parser;

use hydrosanitary_toolbox::{app, config, i18n};

/// 커맨드라인 인자.
#[derive(Parser, Debug)]
#[command(name = "hydrosanitary_toolbox_cli")]
#[command(about = "수리/위생 관경 설계 계산기 CLI")]
struct Cli {
    /// UI 언어 (auto/ko-kr/en-us/es-es)
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
    /// 언어팩 디렉터리 (기본: locales/)
    #[arg(long)]
    pack_dir: Option<String>,
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
    let pack_dir = cli
        .pack_dir
        .clone()
        .or_else(|| cfg.language_pack_dir.clone());
    let resolved = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&resolved, pack_dir.as_deref());
    app::run(&mut cfg, &tr)?;
    Ok(())
}
