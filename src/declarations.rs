use std::io::Write;

use anyhow::{Context, Result};
use tracing::{debug, instrument, trace};

use crate::employee::Employee;
use crate::number_text::FloatText;

/// Runs the declarations walkthrough once and returns the lines it prints, in order.
///
/// Nothing here can fail and nothing is read from outside, so every call
/// yields the same four lines.
#[instrument(level = "trace")]
#[allow(unused_assignments, unused_variables)]
pub fn run() -> Vec<String> {
    let mut lines = Vec::with_capacity(4);

    let mut number: i32;
    number = 10;
    number = 20;

    let mut employee1 = Employee::new("Lynn Jones", 500);
    debug!("Created {employee1}");
    employee1.name = "Lynn Smith".into();
    debug!("Renamed to {:?}", employee1.name);

    lines.push(employee1.to_string());

    let change = 4.22;
    // change is never interpolated into the line
    lines.push("Your change is $".to_string());

    let numerator = 10.99;
    let denominator = 20.00;
    let quotient = numerator / denominator;
    trace!(numerator, denominator, quotient, "Divided");
    lines.push(format!(
        "The value of {} divided by {} is {}",
        FloatText(numerator),
        FloatText(denominator),
        FloatText(quotient)
    ));

    lines.push(format!("The employee's id is {}", employee1.id()));
    lines
}

/// Writes each line followed by a newline and flushes.
pub fn write_transcript<S: AsRef<str>>(out: &mut impl Write, lines: &[S]) -> Result<()> {
    for line in lines {
        writeln!(out, "{}", line.as_ref()).context("Failed to write output line")?;
    }
    out.flush().context("Failed to flush output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_lines() {
        assert_eq!(
            run(),
            [
                "Employee(name=Lynn Smith, id=500)",
                "Your change is $",
                "The value of 10.99 divided by 20.0 is 0.5495",
                "The employee's id is 500",
            ]
        );
    }

    #[test]
    fn test_name_is_post_mutation() {
        let lines = run();
        assert!(lines[0].contains("Lynn Smith"));
        assert!(lines.iter().all(|l| !l.contains("Lynn Jones")));
    }

    #[test]
    fn test_change_not_interpolated() {
        let lines = run();
        assert_eq!(lines[1], "Your change is $");
        assert!(!lines[1].contains("4.22"));
    }

    #[test]
    fn test_write_transcript() {
        let mut out = Vec::new();
        write_transcript(&mut out, &["a", "b c"][..]).unwrap();
        assert_eq!(out, b"a\nb c\n");
    }

    #[test]
    fn test_write_transcript_error() {
        struct Closed;
        impl Write for Closed {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::ErrorKind::BrokenPipe.into())
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }
        let err = write_transcript(&mut Closed, run().as_slice()).unwrap_err();
        assert!(err.to_string().contains("Failed to write output line"));
    }
}
