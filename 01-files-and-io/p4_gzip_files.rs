// Pattern 4: Gzip-Compressed Text Files
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};

// Write text through a gzip encoder; bytes hit the disk compressed.
// finish() flushes the trailer, so the archive is invalid without it.
fn write_gzip_text(path: &str, text: &str) -> io::Result<()> {
    let file = File::create(path)?;
    let mut encoder = GzEncoder::new(file, Compression::default());

    encoder.write_all(text.as_bytes())?;
    encoder.finish()?;
    Ok(())
}

// Read the whole archive back as text; decompression is transparent
fn read_gzip_text(path: &str) -> io::Result<String> {
    let file = File::open(path)?;
    let mut decoder = GzDecoder::new(file);

    let mut text = String::new();
    decoder.read_to_string(&mut text)?;
    Ok(text)
}

// Iterate a compressed file line by line, like an uncompressed one
fn read_gzip_lines(path: &str) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(GzDecoder::new(file));

    reader.lines().collect()
}

fn main() -> io::Result<()> {
    let archive = "somefile.gz";
    let payload = "hello compressed world\nsecond line\nthird line\n";

    // Usage: Store text compressed
    println!("=== write_gzip_text ===");
    write_gzip_text(archive, payload)?;
    let on_disk = std::fs::metadata(archive)?.len();
    println!("{} raw bytes -> {} on disk", payload.len(), on_disk);

    // Usage: Read it back whole
    println!("\n=== read_gzip_text ===");
    let text = read_gzip_text(archive)?;
    print!("{}", text);
    println!("Round trip intact: {}", text == payload);

    // Usage: Line-by-line access without decompressing to a temp file
    println!("\n=== read_gzip_lines ===");
    for (index, line) in read_gzip_lines(archive)?.iter().enumerate() {
        println!("Line {}: {}", index + 1, line);
    }

    // Cleanup
    std::fs::remove_file(archive)?;

    println!("\nGzip examples completed");
    Ok(())
}
