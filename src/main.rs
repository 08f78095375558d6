use clap::Parser;
use coin_tender::utils::logger;
use coin_tender::{app, CliConfig, TenderError};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    match app::run(&config) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            if let Some(tender_err) = e.downcast_ref::<TenderError>() {
                tracing::error!("❌ {}", tender_err);
                eprintln!("❌ {}", tender_err.user_friendly_message());
                eprintln!("💡 {}", tender_err.recovery_suggestion());
            } else {
                eprintln!("❌ {:#}", e);
            }
            std::process::exit(1);
        }
    }
}
