use sector_core::Sector;

/// Print one block per sector: every event with its expected beacon count,
/// per-beacon chance and chance to meet it on a run.
pub fn print_sectors(batch_name: &str, traversal_length: u32, sectors: &[&Sector]) {
    println!(
        "\n=== {} ({} sectors, {}-jump runs) ===",
        batch_name,
        sectors.len(),
        traversal_length
    );
    for sector in sectors {
        println!("\n{} [{}]", sector.display_name, sector.key);
        println!(
            "{:<30} {:>8} {:>8} {:>8}",
            "Event", "Beacons", "Beacon%", "Run%"
        );
        println!("{}", "-".repeat(57));
        for event in sorted_by_traversal(sector) {
            let p = event.probability;
            println!(
                "{:<30} {:>8.2} {:>7.1}% {:>7.1}%",
                event.key,
                p.expected_slots,
                p.slot_probability * 100.0,
                p.traversal_probability * 100.0
            );
        }
    }
}

/// Most likely to be met first; ties keep declaration order.
fn sorted_by_traversal(sector: &Sector) -> Vec<&sector_core::SectorEventResult> {
    let mut events: Vec<_> = sector.events.iter().collect();
    events.sort_by(|a, b| {
        b.probability
            .traversal_probability
            .total_cmp(&a.probability.traversal_probability)
    });
    events
}
