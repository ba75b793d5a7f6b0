// Pattern 4: Bzip2-Compressed Text Files
use bzip2::read::BzDecoder;
use bzip2::write::BzEncoder;
use bzip2::Compression;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};

// Same shape as the gzip version; only the codec differs
fn write_bzip2_text(path: &str, text: &str) -> io::Result<()> {
    let file = File::create(path)?;
    let mut encoder = BzEncoder::new(file, Compression::best());

    encoder.write_all(text.as_bytes())?;
    encoder.finish()?;
    Ok(())
}

fn read_bzip2_text(path: &str) -> io::Result<String> {
    let file = File::open(path)?;
    let mut decoder = BzDecoder::new(file);

    let mut text = String::new();
    decoder.read_to_string(&mut text)?;
    Ok(text)
}

fn read_bzip2_lines(path: &str) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(BzDecoder::new(file));

    reader.lines().collect()
}

fn main() -> io::Result<()> {
    let archive = "somefile.bz2";
    let payload = "hello compressed world\nsecond line\nthird line\n";

    // Usage: Store text with the stronger (slower) codec
    println!("=== write_bzip2_text ===");
    write_bzip2_text(archive, payload)?;
    let on_disk = std::fs::metadata(archive)?.len();
    println!("{} raw bytes -> {} on disk", payload.len(), on_disk);

    // Usage: Read it back whole
    println!("\n=== read_bzip2_text ===");
    let text = read_bzip2_text(archive)?;
    print!("{}", text);
    println!("Round trip intact: {}", text == payload);

    // Usage: Transparent line iteration
    println!("\n=== read_bzip2_lines ===");
    for (index, line) in read_bzip2_lines(archive)?.iter().enumerate() {
        println!("Line {}: {}", index + 1, line);
    }

    // Cleanup
    std::fs::remove_file(archive)?;

    println!("\nBzip2 examples completed");
    Ok(())
}
