use crate::error::{Error, Result};
use crate::types::Service;
use colored::Colorize;
use std::io::{BufRead, Write};

enum Answer<T> {
    Validated(T),
    Reprompt(&'static str),
}

fn ask<R, W, T, F>(input: &mut R, output: &mut W, prompt: &str, mut validate: F) -> Result<T>
where
    R: BufRead,
    W: Write,
    F: FnMut(&str) -> Answer<T>,
{
    loop {
        write!(output, "{}", prompt.cyan())?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(Error::InvalidInput("No input received".to_string()));
        }

        match validate(line.trim()) {
            Answer::Validated(value) => return Ok(value),
            Answer::Reprompt(reason) => writeln!(output, "{}", reason.red())?,
        }
    }
}

pub fn select_index<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    count: usize,
) -> Result<usize> {
    if count == 0 {
        return Err(Error::InvalidInput("Nothing to select from".to_string()));
    }

    ask(input, output, prompt, |answer| match answer.parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Answer::Validated(n - 1),
        Ok(_) => Answer::Reprompt("Invalid selection. Please enter a valid number."),
        Err(_) => Answer::Reprompt("Invalid input. Please enter a number."),
    })
}

pub fn select_service<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Service> {
    ask(
        input,
        output,
        "Select the service type (1 for smtp, 2 for http): ",
        |answer| match answer.parse::<u8>() {
            Ok(code) => match Service::try_from(code) {
                Ok(service) => Answer::Validated(service),
                Err(_) => Answer::Reprompt("Invalid selection. Please enter either 1 or 2."),
            },
            Err(_) => Answer::Reprompt("Invalid input. Please enter either 1 or 2."),
        },
    )
}

pub fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<bool> {
    write!(output, "{} (y/n): ", question)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().eq_ignore_ascii_case("y"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run<T>(
        answers: &str,
        f: impl FnOnce(&mut Cursor<Vec<u8>>, &mut Vec<u8>) -> Result<T>,
    ) -> (Result<T>, String) {
        colored::control::set_override(false);
        let mut input = Cursor::new(answers.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = f(&mut input, &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_select_index_first_try() {
        let (result, _) = run("2\n", |i, o| select_index(i, o, "Pick: ", 3));
        assert_eq!(result.unwrap(), 1);
    }

    #[test]
    fn test_select_index_reprompts() {
        let (result, out) = run("abc\n0\n4\n3\n", |i, o| select_index(i, o, "Pick: ", 3));
        assert_eq!(result.unwrap(), 2);
        assert_eq!(out.matches("Pick: ").count(), 4);
        assert!(out.contains("Invalid input. Please enter a number."));
        assert_eq!(out.matches("Invalid selection.").count(), 2);
    }

    #[test]
    fn test_select_index_eof() {
        let (result, _) = run("7\n", |i, o| select_index(i, o, "Pick: ", 3));
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_select_index_nothing_to_select() {
        let (result, _) = run("1\n", |i, o| select_index(i, o, "Pick: ", 0));
        assert!(result.is_err());
    }

    #[test]
    fn test_select_service() {
        let (result, out) = run("x\n3\n1\n", select_service);
        assert_eq!(result.unwrap(), Service::Smtp);
        assert!(out.contains("Please enter either 1 or 2."));

        let (result, _) = run("2\n", select_service);
        assert_eq!(result.unwrap(), Service::Http);
    }

    #[test]
    fn test_confirm() {
        assert!(run("y\n", |i, o| confirm(i, o, "Continue?")).0.unwrap());
        assert!(run("Y\n", |i, o| confirm(i, o, "Continue?")).0.unwrap());
        assert!(!run("yes\n", |i, o| confirm(i, o, "Continue?")).0.unwrap());
        assert!(!run("", |i, o| confirm(i, o, "Continue?")).0.unwrap());
    }
}
