//! Demo driver: tokenizes a source file (or a built-in sample program)
//! and prints the token stream.
//!
//! Usage: `tagscript [--json] [FILE]`

use std::env;
use std::fs;
use std::process;

use tagscript::{tokenize, Result};

const SAMPLE_PROGRAM: &str = r#"
// sample tagscript program
<let name="count" type="number">0</let>
<const name="limit" type="number">10</const>

<while condition="count">
    <counter name="count" from="0" to="10" />
    <if condition="count">
        <return>{count + 1}</return>
    </if>
</while>
"#;

fn run(path: Option<&str>, json: bool) -> Result<()> {
    let source = match path {
        Some(path) => fs::read_to_string(path)?,
        None => SAMPLE_PROGRAM.to_string(),
    };

    let tokens = tokenize(&source);

    if json {
        println!("{}", serde_json::to_string_pretty(&tokens)?);
    } else {
        for token in &tokens {
            println!("{:<20} {:?}", token.kind.to_string(), token.lexeme);
        }
    }

    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    let path = args.iter().find(|a| !a.starts_with("--")).map(String::as_str);

    if let Err(err) = run(path, json) {
        eprintln!("tagscript: {}", err);
        process::exit(1);
    }
}
