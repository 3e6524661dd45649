//! End-to-end parsing example.
//!
//! Declares a small specification, parses the process arguments, and
//! prints the decoded values or the failure.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p argot-parser --example copytool -- a.txt b.txt c.txt --count 2
//! cargo run -p argot-parser --example copytool -- --help
//! ```

use argot_core::{ArgumentSpec, Arity, TypedValues, ValueKind};
use argot_parser::Parser;

fn main() {
    let mut parser = Parser::new("copytool")
        .with_description("Copies every input file to the destination layout.")
        .with_epilog("Inputs are consumed in the order given.");

    parser
        .declare(ArgumentSpec::flag(Some("v"), Some("verbose")).with_help("Chatty output."))
        .unwrap();
    parser
        .declare(
            ArgumentSpec::named(Some("c"), Some("count"), ValueKind::Int32)
                .optional()
                .with_default(TypedValues::Int32(vec![1]))
                .with_help("How many copies of each input to make."),
        )
        .unwrap();
    parser
        .declare(
            ArgumentSpec::named(None, Some("layout"), ValueKind::String)
                .optional()
                .with_choices(TypedValues::String(vec!["flat".into(), "tree".into()]))
                .with_default(TypedValues::String(vec!["flat".into()]))
                .with_help("Destination directory layout."),
        )
        .unwrap();
    parser
        .declare(
            ArgumentSpec::positional("src", ValueKind::String).with_help("First input file."),
        )
        .unwrap();
    parser
        .declare(
            ArgumentSpec::positional("files", ValueKind::String)
                .with_arity(Arity::AtLeastOne)
                .with_help("Further input files."),
        )
        .unwrap();

    let result = match parser.parse_from_env() {
        Ok(result) => result,
        Err(err) => {
            eprintln!("{err}");
            eprint!("{}", parser.help());
            std::process::exit(2);
        }
    };

    if result.lookup("help").exists {
        print!("{}", parser.help());
        return;
    }

    if !result.is_valid() {
        eprintln!("error: {}", result.error_message());
        std::process::exit(1);
    }

    println!("verbose: {}", result.lookup("verbose").exists);
    println!("count:   {}", result.lookup("count").first_i32().unwrap());
    println!(
        "layout:  {}",
        result.lookup("layout").first_string().unwrap()
    );
    println!("src:     {}", result.lookup("src").first_string().unwrap());
    println!("files:   {:?}", result.lookup("files").as_strings());
}
