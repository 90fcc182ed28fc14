//! Example demonstrating the serde_with_unit helper module.
//!
//! This shows how to use #[serde(with = "mensura::serde_with_unit")] to preserve
//! unit information in serialized data on a per-field basis.
//!
//! Run with: cargo run --example serde_with_unit --features serde

#[cfg(feature = "serde")]
fn main() {
    use mensura::{Kilograms, Kilometers, Meters};
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug)]
    struct SurveyLeg {
        station: String,

        // This field serializes as { "value": …, "unit": "km" } and the unit
        // symbol is checked on the way back in.
        #[serde(with = "mensura::serde_with_unit")]
        length: Kilometers,

        #[serde(with = "mensura::serde_with_unit")]
        equipment_mass: Kilograms,

        // Default serialization is the bare number.
        elevation_gain: Meters,
    }

    let leg = SurveyLeg {
        station: "B7".to_string(),
        length: Kilometers::new(12.5),
        equipment_mass: Kilograms::new(18.0),
        elevation_gain: Meters::new(340.0),
    };

    let json = serde_json::to_string_pretty(&leg).unwrap();
    println!("Serialized:\n{}\n", json);

    let restored: SurveyLeg = serde_json::from_str(&json).unwrap();
    println!("Restored: {} is {}", restored.station, restored.length);

    // A missing unit field is accepted for backwards compatibility.
    let bare = r#"{"station": "A1", "length": {"value": 3.0}, "equipment_mass": {"value": 20.0, "unit": "kg"}, "elevation_gain": 10.0}"#;
    let short: SurveyLeg = serde_json::from_str(bare).unwrap();
    assert_eq!(short.length.value(), 3.0);

    // A wrong unit symbol is rejected.
    let wrong = r#"{"station": "A1", "length": {"value": 3.0, "unit": "kg"}, "equipment_mass": {"value": 20.0, "unit": "kg"}, "elevation_gain": 10.0}"#;
    match serde_json::from_str::<SurveyLeg>(wrong) {
        Ok(_) => println!("unexpected success with wrong unit"),
        Err(e) => println!("rejected wrong unit: {}", e),
    }
}

#[cfg(not(feature = "serde"))]
fn main() {
    println!("This example requires the 'serde' feature.");
    println!("Run with: cargo run --example serde_with_unit --features serde");
}
