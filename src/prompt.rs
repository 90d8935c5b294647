use std::io::{self, BufRead, Write};

pub const ACCOUNT_PROMPT: &str = "Enter GitHub username: ";

/// Prints the prompt and returns the first whitespace-delimited token of the
/// reply. A blank reply yields an empty string; the provider decides whether
/// that is acceptable.
pub fn prompt_account<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<String> {
    output.write_all(ACCOUNT_PROMPT.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.split_whitespace().next().unwrap_or_default().to_string())
}
