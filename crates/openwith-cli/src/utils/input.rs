//! User input utilities for interactive command-line prompts.

use std::io;
use std::io::Write;

/// Prompt the user for a string input.
///
/// The input is read from stdin and returned with whitespace trimmed.
pub fn prompt_string(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Prompt the user to pick one item from a numbered list.
///
/// Re-prompts until a number in range is entered; returns the zero-based
/// index of the chosen item.
pub fn prompt_select(prompt: &str, items: &[String]) -> io::Result<usize> {
    println!("{prompt}");
    for (i, item) in items.iter().enumerate() {
        println!("  {:>3}. {item}", i + 1);
    }
    loop {
        let input = prompt_string("Enter a number")?;
        match input.parse::<usize>() {
            Ok(n) if (1..=items.len()).contains(&n) => return Ok(n - 1),
            _ => eprintln!("Please enter a number between 1 and {}.", items.len()),
        }
    }
}
