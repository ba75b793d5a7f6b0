// Pattern 5: Serializing Structs to Files and Byte Streams
use serde::{Deserialize, Serialize};
use std::error::Error;

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
struct Measurement {
    sensor: String,
    reading: f64,
    samples: Vec<u32>,
}

// Human-readable on disk: JSON via serde_json
fn save_json(path: &str, value: &Measurement) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json)?;
    Ok(())
}

fn load_json(path: &str) -> Result<Measurement, Box<dyn Error>> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

// Compact binary: bincode, for when nobody needs to read the bytes
fn to_binary(value: &Measurement) -> Result<Vec<u8>, Box<dyn Error>> {
    Ok(bincode::serialize(value)?)
}

fn from_binary(bytes: &[u8]) -> Result<Measurement, Box<dyn Error>> {
    Ok(bincode::deserialize(bytes)?)
}

fn main() -> Result<(), Box<dyn Error>> {
    let json_file = "measurement.json";

    let value = Measurement {
        sensor: "thermocouple-7".to_string(),
        reading: 23.75,
        samples: vec![23, 24, 24, 23],
    };

    // Usage: Store a record where humans may inspect it
    println!("=== save_json / load_json ===");
    save_json(json_file, &value)?;
    println!("On disk:\n{}", std::fs::read_to_string(json_file)?);
    let restored = load_json(json_file)?;
    println!("Restored: {:?}", restored);
    println!("Round trip intact: {}", restored == value);

    // Usage: Pack the same record for a wire or cache
    println!("\n=== to_binary / from_binary ===");
    let bytes = to_binary(&value)?;
    println!("Binary form: {} bytes", bytes.len());
    let restored = from_binary(&bytes)?;
    println!("Restored: {:?}", restored);

    // Cleanup
    std::fs::remove_file(json_file)?;

    println!("\nSerialization examples completed");
    Ok(())
}
