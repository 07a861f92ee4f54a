use std::{env, fs::read_to_string, path::Path, process::ExitCode, time::Instant};

use frontend::{ast::statements::Stmt, display_error, type_check_source};
use tracing::info;

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        let binary = args.first().map(String::as_str).unwrap_or("frontend");
        eprintln!("Usage: {} <file>", binary);
        return ExitCode::FAILURE;
    }

    let file_path: &str = &args[1];
    let file_name = Path::new(file_path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(file_path)
        .to_string();

    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_path, error);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();
    let checked = match type_check_source(source.clone(), Some(file_name.clone())) {
        Ok(checked) => checked,
        Err(error) => {
            display_error(&error, &source, &file_name);
            return ExitCode::FAILURE;
        }
    };

    info!(elapsed = ?start.elapsed(), file = %file_name, "type checked");

    for stmt in &checked.program.body {
        if let Stmt::Declare(declare) = stmt {
            if let Some(type_signature) = checked.type_checker.fetch_variable_type(&declare.identifier) {
                println!("{}: {}", declare.identifier, type_signature);
            }
        }
    }

    if let Some(return_type) = checked.return_types.first() {
        println!("returns {}", return_type);
    }

    ExitCode::SUCCESS
}
