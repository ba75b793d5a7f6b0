// Pattern 1: Writing Text and Binary Data
use std::fs::{File, OpenOptions};
use std::io::{self, Write};

// Overwrite a file with a string
fn write_string(path: &str, content: &str) -> io::Result<()> {
    std::fs::write(path, content)
    // Creates the file if missing, truncates existing content
}

// Write raw bytes
fn write_bytes(path: &str, content: &[u8]) -> io::Result<()> {
    std::fs::write(path, content)
}

// Redirect line-oriented output into a file handle.
// The handle is dropped at the end of the function, so the file is
// closed on every exit path, including early returns on error.
fn print_to_file(path: &str) -> io::Result<()> {
    let mut file = File::create(path)?;

    writeln!(file, "hello world...")?;
    writeln!(file, "how are you ??")?;
    Ok(())
}

// Append to a file, creating it on first use
fn append_line(path: &str, content: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().append(true).create(true).open(path)?;

    writeln!(file, "{}", content)?;
    Ok(())
}

fn main() -> io::Result<()> {
    let text_file = "somefile.txt";
    let binary_file = "somefile.bin";
    let log_file = "somelog.txt";

    // Usage: Replace a file's contents wholesale
    println!("=== write_string ===");
    write_string(text_file, "hello world.")?;
    println!("Content: {}", std::fs::read_to_string(text_file)?);

    // Usage: Write a binary header
    println!("\n=== write_bytes ===");
    write_bytes(binary_file, &[0x89, 0x50, 0x4E, 0x47])?;
    println!("Content: {:?}", std::fs::read(binary_file)?);

    // Usage: Redirect what would be println! output into a file
    println!("\n=== print_to_file ===");
    print_to_file(text_file)?;
    print!("{}", std::fs::read_to_string(text_file)?);

    // Usage: Accumulate a log
    println!("\n=== append_line ===");
    append_line(log_file, "first entry")?;
    append_line(log_file, "second entry")?;
    print!("{}", std::fs::read_to_string(log_file)?);

    // Cleanup
    std::fs::remove_file(text_file)?;
    std::fs::remove_file(binary_file)?;
    std::fs::remove_file(log_file)?;

    println!("\nFile writing examples completed");
    Ok(())
}
