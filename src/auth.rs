//! Password input for `pbkdf2` when the password is not given as an argument.

use anyhow::{Result, bail};
use std::io::{self, IsTerminal};
use zeroize::Zeroizing;

const PASSWORD_ENV: &str = "SIMPLE_CRYPTO_PASSWORD";

/// Takes the password from [`PASSWORD_ENV`], else from the first line of
/// piped stdin, else from a hidden prompt on the terminal.
pub fn read_password() -> Result<Zeroizing<String>> {
    if let Some(pw) = std::env::var(PASSWORD_ENV).ok().filter(|pw| !pw.is_empty()) {
        return Ok(Zeroizing::new(pw));
    }

    let stdin = io::stdin();
    let password = if stdin.is_terminal() {
        Zeroizing::new(rpassword::prompt_password("PBKDF2 password: ")?)
    } else {
        let mut line = Zeroizing::new(String::new());
        stdin.read_line(&mut line)?;
        trim_line_ending(&mut line);
        line
    };

    if password.is_empty() {
        bail!("no password: pass it as an argument, set {PASSWORD_ENV} or pipe it on stdin");
    }
    Ok(password)
}

fn trim_line_ending(s: &mut String) {
    let kept = s.trim_end_matches(['\n', '\r']).len();
    s.truncate(kept);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_unix_and_windows_line_endings() {
        for (input, expected) in [("pw\n", "pw"), ("pw\r\n", "pw"), ("pw", "pw"), ("\n", "")] {
            let mut s = input.to_string();
            trim_line_ending(&mut s);
            assert_eq!(s, expected);
        }
    }

    #[test]
    fn keeps_interior_whitespace() {
        let mut s = "pass phrase \n".to_string();
        trim_line_ending(&mut s);
        assert_eq!(s, "pass phrase ");
    }
}
