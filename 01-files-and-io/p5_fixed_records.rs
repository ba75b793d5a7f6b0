// Pattern 5: Iterating Over Fixed-Sized Records
use std::fs::File;
use std::io::{self, BufReader, Read};

const RECORD_SIZE: usize = 32;

// Read a stream as fixed-size records instead of lines.
// The last record may be shorter than RECORD_SIZE when the stream
// length is not an exact multiple of the record size.
fn read_records<R: Read>(reader: &mut R, size: usize) -> io::Result<Vec<Vec<u8>>> {
    let mut records = Vec::new();

    loop {
        let mut record = Vec::with_capacity(size);
        let n = reader.by_ref().take(size as u64).read_to_end(&mut record)?;
        if n == 0 {
            break; // end of stream
        }
        records.push(record);
    }
    Ok(records)
}

fn main() -> io::Result<()> {
    let data_file = "somefile.data";

    // 100 bytes: three full 32-byte records plus a 4-byte tail
    let payload: Vec<u8> = (0u8..100).collect();
    std::fs::write(data_file, &payload)?;

    println!("=== read_records ===");
    let file = File::open(data_file)?;
    let mut reader = BufReader::new(file);

    for (index, record) in read_records(&mut reader, RECORD_SIZE)?.iter().enumerate() {
        println!(
            "Record {}: {} bytes, starts with {:?}",
            index,
            record.len(),
            &record[..4.min(record.len())]
        );
    }

    // Cleanup
    std::fs::remove_file(data_file)?;

    println!("\nFixed-size record examples completed");
    Ok(())
}
