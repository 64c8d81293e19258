// Integration tests test your crate's public API. They only have access to items
// in your crate that are marked pub. See the Cargo Targets page of the Cargo Book
// for more information.
//
//   https://doc.rust-lang.org/cargo/reference/cargo-targets.html#integration-tests
//

use waste_sort_simulator::*;


#[test]
fn test_run_id_type() {
    let run_id = RunId::new();

    // Test that IDs are unique
    assert_ne!(run_id, RunId::new());

    // Test string formatting
    assert!(run_id.to_string().starts_with("RUN_"));
}

#[test]
fn test_waste_category_table() {
    // Six categories, four of them recyclable
    assert_eq!(WasteCategory::ALL.len(), 6);

    let recyclable_count = WasteCategory::ALL
        .iter()
        .filter(|category| category.is_recyclable())
        .count();
    assert_eq!(recyclable_count, 4);

    for category in &WasteCategory::ALL {
        assert!(!category.to_string().is_empty());
    }

    assert!(WasteCategory::Paper.is_recyclable());
    assert!(WasteCategory::Plastic.is_recyclable());
    assert!(WasteCategory::Glass.is_recyclable());
    assert!(WasteCategory::Metal.is_recyclable());
    assert!(!WasteCategory::Organic.is_recyclable());
    assert!(!WasteCategory::NonRecyclable.is_recyclable());
}

#[test]
fn test_waste_item_api() {
    let item = WasteItem::new(WasteCategory::Glass);
    assert_eq!(item.category(), WasteCategory::Glass);
    assert!(item.is_recyclable());
    assert_eq!(item.to_string(), "Waste item: Glass");

    let scraps = WasteItem::new(WasteCategory::Organic);
    assert_eq!(scraps.category(), WasteCategory::Organic);
    assert!(!scraps.is_recyclable());
}

#[test]
fn test_default_configuration_values() {
    let config = SimulationConfig::default();

    assert_eq!(config.generator_count, 3);
    assert_eq!(config.simulation_duration_ms, 180_000);
    assert_eq!(config.min_generation_pause_ms, 200);
    assert_eq!(config.max_generation_pause_ms, 1_000);
    assert_eq!(config.dequeue_timeout_ms, 500);
    assert!(config.seed.is_none());
    assert!(config.report_path.is_none());

    assert!(config.validate().is_ok());
}

#[test]
fn test_serialization_roundtrip() {
    let run_id = RunId::new();
    let json = serde_json::to_string(&run_id).unwrap();
    let deserialized: RunId = serde_json::from_str(&json).unwrap();
    assert_eq!(run_id, deserialized);

    let category = WasteCategory::NonRecyclable;
    let json = serde_json::to_string(&category).unwrap();
    let deserialized: WasteCategory = serde_json::from_str(&json).unwrap();
    assert_eq!(category, deserialized);

    let config = SimulationConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    let deserialized: SimulationConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized.generator_count, config.generator_count);
    assert_eq!(deserialized.simulation_duration_ms, config.simulation_duration_ms);
    assert_eq!(deserialized.dequeue_timeout_ms, config.dequeue_timeout_ms);
}

#[test]
fn test_run_id_json_output_has_prefix() {
    let run_id = RunId::new();
    let json = serde_json::to_string(&run_id).unwrap();

    println!("Run ID JSON: {}", json);

    assert!(json.contains("RUN_"));
}
