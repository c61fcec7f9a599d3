use colored::Colorize;

fn main() {
    if let Err(e) = o2dq_workflows::run() {
        eprintln!("{} {:#}", "Error:".red(), e);
        std::process::exit(1);
    }
}
