//! Reads a relaxed JSON document on stdin and writes the result on stdout.
//!
//! A successful parse prints the document as compact standard JSON and exits
//! 0. A failed parse prints the error instead, on stdout as part of the
//! output contract, and exits 2. Exit 1 is reserved for stdin read failures,
//! reported on stderr.

use std::io::Read;

fn main() {
    let mut input = Vec::new();
    if let Err(error) = std::io::stdin().read_to_end(&mut input) {
        eprintln!("error: failed to read stdin: {error}");
        std::process::exit(1);
    }
    let text = String::from_utf8_lossy(&input);
    let (output, exit_code) = run(&text);
    println!("{output}");
    std::process::exit(exit_code);
}

/// Renders the document, or its parse error, along with the exit status.
fn run(text: &str) -> (String, i32) {
    match jsonlax::parse(text) {
        Ok(value) => (jsonlax::stringify(&value), 0),
        Err(error) => (error.to_string(), 2),
    }
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn renders_compact_json_on_success() {
        let (output, exit_code) = run("{a: 1, b: [true false,], }");
        assert_eq!(output, "{\"a\":1, \"b\":[true, false]}");
        assert_eq!(exit_code, 0);
    }

    #[test]
    fn renders_the_error_on_failure() {
        let (output, exit_code) = run("[1,");
        assert_eq!(output, "unexpected end of input at line 1, column 3");
        assert_eq!(exit_code, 2);
    }

    #[test]
    fn empty_input_is_an_error() {
        let (output, exit_code) = run("");
        assert_eq!(output, "unexpected end of input at line 1, column 0");
        assert_eq!(exit_code, 2);
    }
}
