//! RGB color walk-through for enum-registry.
//!
//! Demonstrates:
//! - Declaring an enum type with `enum_type!`
//! - Looking values up by name and by ordinal
//! - Singleton identity across repeated lookups
//! - Iterating all values in ordinal order
//! - The typed lookup errors
//!
//! Run with: `cargo run --example colors`

use enum_registry::{enum_type, EnumType};

pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

enum_type! {
    Color: (u8, u8, u8) {
        "RED" => (255, 0, 0),
        "GREEN" => (0, 255, 0),
        "BLUE" => (0, 0, 255),
    }
    populate(rgb) { Color { r: rgb.0, g: rgb.1, b: rgb.2 } }
}

fn main() {
    println!("=== enum-registry: RGB colors ===\n");

    // -------------------------------------------------------------------------
    // 1. Lookup by name
    // -------------------------------------------------------------------------
    println!("1. Lookup by name...");

    let green = Color::by_name("GREEN").expect("GREEN is defined");
    println!("   {} -> ordinal {}, {}", green, green.ordinal(), green.hex());

    // -------------------------------------------------------------------------
    // 2. Lookup by ordinal
    // -------------------------------------------------------------------------
    println!("\n2. Lookup by ordinal...");

    let blue = Color::by_ordinal(2).expect("ordinal 2 is in range");
    println!("   ordinal 2 -> {} ({})", blue, blue.hex());

    // -------------------------------------------------------------------------
    // 3. Singleton identity
    // -------------------------------------------------------------------------
    println!("\n3. Singleton identity...");

    let red_one = Color::by_name("RED").expect("RED is defined");
    let red_two = Color::by_name("RED").expect("RED is defined");
    println!("   two RED lookups, same instance: {}", red_one.ptr_eq(&red_two));

    // -------------------------------------------------------------------------
    // 4. Iterating all values
    // -------------------------------------------------------------------------
    println!("\n4. All values in ordinal order...");

    for color in Color::values() {
        println!("   [{}] {} = {}", color.ordinal(), color, color.hex());
    }

    // -------------------------------------------------------------------------
    // 5. Lookup errors
    // -------------------------------------------------------------------------
    println!("\n5. Lookup errors...");

    if let Err(err) = Color::by_name("YELLOW") {
        println!("   by_name(\"YELLOW\"): {err}");
    }
    if let Err(err) = Color::by_ordinal(5) {
        println!("   by_ordinal(5): {err}");
    }
}
