use rand::Rng;
use std::time::Duration;

use crate::cli::SeedArgs;
use crate::models::VehicleRecord;

const PLATE_LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

const OWNERS: &[&str] = &[
    "John Doe",
    "Jane Roe",
    "Carlos Silva",
    "Maria Souza",
    "Wei Chen",
    "Aisha Khan",
    "Lena Novak",
    "Tom Becker",
];

const MODELS: &[&str] = &[
    "Tesla",
    "Corolla",
    "Civic",
    "Gol",
    "Uno",
    "F-150",
    "Model 3",
    "Kwid",
];

pub async fn exec(args: &SeedArgs) -> anyhow::Result<()> {
    let client = reqwest::Client::new();

    for cycle in 0..args.cycles {
        if cycle > 0 {
            tokio::time::sleep(Duration::from_secs(args.interval)).await;
        }

        let fleet = generate_fleet(args.count);
        let response: serde_json::Value = client
            .post(format!("{}/updateData", args.url))
            .json(&fleet)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if !args.silent {
            println!(
                "cycle {}: pushed {} records, server said {}",
                cycle,
                fleet.len(),
                response
            );
        }
    }
    Ok(())
}

/// A random fleet snapshot in the dashboard's loose string format.
pub fn generate_fleet(count: usize) -> Vec<VehicleRecord> {
    (0..count).map(|_| generate_record()).collect()
}

fn generate_record() -> VehicleRecord {
    let mut rng = rand::thread_rng();
    VehicleRecord {
        plate: generate_plate(&mut rng),
        gps: format!(
            "{:.4},{:.4}",
            rng.gen_range(-90.0..90.0),
            rng.gen_range(-180.0..180.0)
        ),
        speed: rng.gen_range(0..=160).to_string(),
        acceleration: rng.gen_range(-3..=3).to_string(),
        risk: format!("{:.2}", rng.gen_range(0.0..1.0)),
        name: OWNERS[rng.gen_range(0..OWNERS.len())].to_string(),
        model: MODELS[rng.gen_range(0..MODELS.len())].to_string(),
        year: rng.gen_range(1990..=2024).to_string(),
    }
}

fn generate_plate(rng: &mut impl Rng) -> String {
    let letters: String = (0..3)
        .map(|_| PLATE_LETTERS[rng.gen_range(0..PLATE_LETTERS.len())] as char)
        .collect();
    format!("{}-{:03}", letters, rng.gen_range(0..1000))
}
