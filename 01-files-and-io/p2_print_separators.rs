// Pattern 2: Printing with Separators and Line Terminators
use std::io::{self, Write};

// Join already-formatted fields with an arbitrary separator
fn format_fields(fields: &[String], sep: &str) -> String {
    fields.join(sep)
}

// Print one record with a configurable separator and line terminator.
// The default behavior is sep = " " and end = "\n"; both can be swapped
// out without touching the fields themselves.
fn print_record<W: Write>(out: &mut W, fields: &[String], sep: &str, end: &str) -> io::Result<()> {
    write!(out, "{}{}", format_fields(fields, sep), end)
}

fn main() -> io::Result<()> {
    // Heterogeneous values become fields once formatted
    let fields = vec!["ACME".to_string(), 50.to_string(), 90.5.to_string()];

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Usage: Default separator and terminator
    writeln!(out, "=== default sep/end ===")?;
    print_record(&mut out, &fields, " ", "\n")?;

    // Usage: CSV-style output
    writeln!(out, "\n=== comma separator ===")?;
    print_record(&mut out, &fields, ",", "\n")?;

    // Usage: Custom terminator instead of a bare newline
    writeln!(out, "\n=== comma separator, \"!!\" terminator ===")?;
    print_record(&mut out, &fields, ",", "!!\n")?;

    writeln!(out, "\nSeparator examples completed")?;
    Ok(())
}
