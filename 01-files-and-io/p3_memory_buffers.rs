// Pattern 3: String- and Byte-Backed In-Memory Streams
use std::fmt::Write as FmtWrite;
use std::io::{self, Cursor, Read, Write};

// Build up text in memory, then hand back the full contents.
// A String plus fmt::Write is the in-memory text stream: anything
// that can write to a formatter can write here.
fn build_text_buffer() -> Result<String, std::fmt::Error> {
    let mut buffer = String::new();

    writeln!(buffer, "This is a test")?;
    write!(buffer, "Second line, no terminator")?;
    Ok(buffer)
}

// Read a fixed number of bytes from a pre-populated text stream.
// The payloads here are ASCII, so byte count and character count agree;
// for multi-byte text a char-aware slice would be needed instead.
fn read_prefix<R: Read>(reader: &mut R, count: u64) -> io::Result<String> {
    let mut prefix = String::new();
    reader.take(count).read_to_string(&mut prefix)?;
    Ok(prefix)
}

// Read everything remaining in the stream
fn read_rest<R: Read>(reader: &mut R) -> io::Result<String> {
    let mut rest = String::new();
    reader.read_to_string(&mut rest)?;
    Ok(rest)
}

fn main() -> io::Result<()> {
    // Usage: Capture output that would otherwise go to a file
    println!("=== build_text_buffer ===");
    match build_text_buffer() {
        Ok(buffer) => println!("Captured {} bytes:\n{}", buffer.len(), buffer),
        Err(e) => eprintln!("formatting failed: {}", e),
    }

    // Usage: Consume a text stream in two reads
    println!("\n=== read_prefix / read_rest ===");
    let mut stream = Cursor::new("Hello World\nHello Everybody\n");
    let prefix = read_prefix(&mut stream, 4)?;
    println!("First 4 chars: {:?}", prefix);
    let rest = read_rest(&mut stream)?;
    println!("Remainder:     {:?}", rest);

    // Usage: A writable byte stream, then read it back
    println!("\n=== byte buffer round trip ===");
    let mut sink = Cursor::new(Vec::new());
    sink.write_all(b"binary ")?;
    sink.write_all(&[0xde, 0xad, 0xbe, 0xef])?;
    let bytes = sink.into_inner();
    println!("Wrote {} bytes: {:?}", bytes.len(), bytes);

    println!("\nMemory buffer examples completed");
    Ok(())
}
