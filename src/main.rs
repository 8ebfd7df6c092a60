use std::path::PathBuf;

use clap::Parser;

use fabia_unit_service::{config, server};

/// 물리량을 Škoda Fabia 1.2 HTP 단위로 변환해 주는 웹 서비스.
#[derive(Debug, Parser)]
#[command(name = "fabia_unit_service", version)]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
    /// 설정 파일 대신 사용할 바인드 주소
    #[arg(long)]
    bind: Option<String>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 서버를 실행한다.
#[tokio::main]
async fn main() {
    env_logger::init();
    if let Err(err) = try_run().await {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

async fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default(&cli.config)?;
    if let Some(bind) = cli.bind {
        cfg.bind = bind;
    }
    server::serve(&cfg).await?;
    Ok(())
}
