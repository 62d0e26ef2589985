//! Startup banner printed once the listener is bound.

use owo_colors::OwoColorize;

use crate::config::ServerConfig;

const RULE_WIDTH: usize = 50;

/// Horizontal rule matching the banner width
fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Prints the startup banner to stdout
///
/// Purely informational: the backend URL is a reminder for the
/// developer and is never contacted by this process.
pub fn print_banner(config: &ServerConfig) {
    let rule = rule();
    println!("{}", rule.cyan());
    println!("Frontend dev server ready");
    println!("{}", rule.cyan());
    println!("Serving:  {}", config.static_root.display());
    println!("Frontend: {}", format!("http://{}", config.bind).green());
    println!("Backend:  {} (run it separately)", config.backend_url.yellow());
    println!("{}", rule.cyan());
}
