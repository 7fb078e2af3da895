// py2cpp: miniature Python-subset to C++ translator

use std::fs;
use std::path::Path;

use py2cpp::translate;

fn main() {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        let program_name = args.first().map(|s| s.as_str()).unwrap_or("py2cpp");
        eprintln!("Error: No input file provided");
        eprintln!();
        eprintln!("Usage: {} <file.py>", program_name);
        eprintln!();
        eprintln!("The input may contain `def name(param):` definitions with an");
        eprintln!("optional `print(\"text\" + param)` body, and top-level calls");
        eprintln!("such as `name(\"argument\")`.");
        std::process::exit(1);
    }

    let input_file = &args[1];

    if !Path::new(input_file).exists() {
        eprintln!("Error: File '{}' not found", input_file);
        std::process::exit(1);
    }

    let source = match fs::read_to_string(input_file) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: Failed to read '{}': {}", input_file, e);
            std::process::exit(1);
        }
    };

    let result = match translate(&source) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Translation error: {}", e);
            std::process::exit(1);
        }
    };

    println!("=== Tokens ===");
    for token in &result.tokens {
        println!("{}", token);
    }

    println!();
    println!("=== AST ===");
    println!("{:#?}", result.program);

    println!();
    println!("=== Intermediate code ===");
    println!("{}", result.ir);

    println!();
    println!("=== C++ ===");
    println!("{}", result.cpp);
}
