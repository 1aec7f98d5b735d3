use std::{env, fs::read_to_string, process::exit, time::Instant};

use soulite::{
    ast::ast::Stmt,
    errors::errors::ConsoleSink,
    lexer::lexer::{tokenize, Lexer},
    parser::parser::Parser,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <file> [--tokens]", args[0]);
        exit(1);
    }

    let file_path: &str = &args[1];
    let dump_tokens = match args.get(2).map(String::as_str) {
        None => false,
        Some("--tokens") => true,
        Some(other) => {
            eprintln!("Unknown option: {}", other);
            exit(1);
        }
    };

    let file_name = file_path.rsplit('/').next().unwrap_or(file_path);

    let file_contents = match read_to_string(file_path) {
        Ok(contents) => contents,
        Err(err) => {
            eprintln!("Failed to read {}: {}", file_path, err);
            exit(1);
        }
    };

    let start = Instant::now();

    if dump_tokens {
        let (tokens, errors) = tokenize(&file_contents, Some(String::from(file_name)));
        for token in tokens.iter() {
            token.debug();
        }

        println!("Tokenized in {:?}", start.elapsed());

        for error in errors.iter() {
            soulite::display_error(error, &file_contents);
        }
        if !errors.is_empty() {
            exit(1);
        }
        return;
    }

    let lexer = Lexer::new(
        file_contents.chars(),
        Some(String::from(file_name)),
        ConsoleSink::new(file_contents.clone()),
    );
    let mut parser = Parser::new(lexer);

    parser.parse_program(|stmt| match stmt {
        Stmt::Import(import) => println!("Parsed import: ${}", import),
        Stmt::Function(function) if function.is_anonymous() => {
            println!("Parsed top-level expression: {}", function.body)
        }
        Stmt::Function(function) => println!("Parsed function: {}", function),
    });

    println!("Parsed in {:?}", start.elapsed());

    if parser.sink().reported() > 0 {
        exit(1);
    }
}
