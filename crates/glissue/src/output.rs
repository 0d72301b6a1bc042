use colored::Colorize;

pub fn output_created(kind: &str, web_url: &str) {
    println!("{} created: {}", kind, web_url.cyan());
}

pub fn output_error(err: &anyhow::Error) {
    eprintln!("{}: {:#}", "Error".red().bold(), err);
}
