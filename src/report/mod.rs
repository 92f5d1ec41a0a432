use colored::Colorize;

use crate::analysis::ChatResponse;

const RULE_WIDTH: usize = 80;

/// Print the critique for one file, or a notice when the response carries
/// no usable analysis. A malformed response is a degraded print path, never
/// a panic.
pub fn present(filename: &str, response: &ChatResponse) {
    match analysis_text(response) {
        Some(analysis) => {
            println!();
            println!("{}", format!("Code Analysis Results for {}:", filename).bold());
            println!("{}", rule());
            println!("{}", analysis);
            println!("{}", rule());
        }
        None => {
            println!(
                "{}",
                format!("No analysis results available for {}.", filename).yellow()
            );
        }
    }
}

/// Pull the free-text message body out of the response, if present.
fn analysis_text(response: &ChatResponse) -> Option<&str> {
    let message = response.choices.first()?.message.as_ref()?;
    if message.content.is_empty() {
        return None;
    }
    Some(&message.content)
}

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}
