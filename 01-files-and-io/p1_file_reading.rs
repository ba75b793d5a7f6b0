// Pattern 1: Reading Text Data
use std::fs::File;
use std::io::{self, BufRead, BufReader};

// Read the entire file as a single string
fn read_whole_file(path: &str) -> io::Result<String> {
    std::fs::read_to_string(path)
    // Returns Err if the file is missing, unreadable, or not valid UTF-8
}

// Iterate over the lines of a file
fn read_lines(path: &str) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    reader.lines().collect()
    // collect() on an iterator of Results stops at the first I/O error
}

// Read a file that may contain non-UTF-8 bytes
fn read_lossy(path: &str) -> io::Result<String> {
    let bytes = std::fs::read(path)?;

    // Bad sequences become U+FFFD instead of failing the whole read
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn main() -> io::Result<()> {
    let test_file = "somefile.txt";
    std::fs::write(test_file, "hello world.\nhow are you ??\n")?;

    // Usage: Slurp a small config or data file
    println!("=== read_whole_file ===");
    let data = read_whole_file(test_file)?;
    println!("{} bytes:", data.len());
    print!("{}", data);

    // Usage: Process a file line by line
    println!("\n=== read_lines ===");
    for (index, line) in read_lines(test_file)?.iter().enumerate() {
        println!("Line {}: {}", index + 1, line);
    }

    // Usage: Tolerate a file with a broken encoding
    println!("\n=== read_lossy ===");
    let mixed_file = "mixed.txt";
    std::fs::write(mixed_file, b"Spicy Jalape\xf1o!")?; // latin-1 byte, not UTF-8
    let text = read_lossy(mixed_file)?;
    println!("Decoded: {}", text);

    // Cleanup
    std::fs::remove_file(test_file)?;
    std::fs::remove_file(mixed_file)?;

    println!("\nFile reading examples completed");
    Ok(())
}
