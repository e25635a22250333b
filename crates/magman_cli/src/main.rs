//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `magman_content` linkage with deterministic output.
//! - Optionally bring up file logging from `MAGMAN_LOG_DIR`/`MAGMAN_LOG_LEVEL`.

use log::info;
use magman_content::{Article, Comment};
use std::process::ExitCode;

const LOG_DIR_ENV: &str = "MAGMAN_LOG_DIR";
const LOG_LEVEL_ENV: &str = "MAGMAN_LOG_LEVEL";

fn main() -> ExitCode {
    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        let level = std::env::var(LOG_LEVEL_ENV)
            .unwrap_or_else(|_| magman_content::default_log_level().to_string());
        if let Err(err) = magman_content::init_logging(&level, &log_dir) {
            eprintln!("magman_cli: {err}");
            return ExitCode::FAILURE;
        }
    }

    let article = Article::with_comments(
        "Hello, magman",
        "First issue of the magazine.",
        "editor",
        vec![
            Comment::new("reader-1", "Looking forward to it."),
            Comment::new("reader-2", "Subscribed."),
        ],
    );
    info!(
        "event=cli_probe module=cli status=ok comments={}",
        article.comments().len()
    );

    println!("magman_content ping={}", magman_content::ping());
    println!("magman_content version={}", magman_content::core_version());
    println!("sample {article}");
    ExitCode::SUCCESS
}
