use clap::Parser;
use colored::Colorize;

use emasmetal::cli::{Cli, Commands};
use emasmetal::config::{get_config, init_config, validate_static_config};
use emasmetal::runtime::modes::{run_cli, run_server};
use emasmetal::system::init_logging;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_config(cli.config.as_deref());
    let config = get_config();

    if let Err(problems) = validate_static_config(&config) {
        eprintln!("{}", "Invalid configuration:".red().bold());
        for problem in problems {
            eprintln!("  {} {}", "-".red(), problem);
        }
        std::process::exit(1);
    }

    match cli.command {
        None | Some(Commands::Serve) => {
            // 日志 guard 需要活到进程退出
            let _guard = init_logging(&config.logging)?;
            run_server(&config).await
        }
        Some(cmd) => {
            if let Err(e) = run_cli(cmd).await {
                eprintln!("{}", e.format_colored());
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
