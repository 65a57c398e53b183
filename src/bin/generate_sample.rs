use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

/// One CSV line, in the column layout the browser reads.
#[derive(Debug, Serialize)]
struct Listing {
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Price")]
    price: String,
    #[serde(rename = "Fuel_Type")]
    fuel_type: &'static str,
    #[serde(rename = "Manufactured_Year")]
    manufactured_year: Option<i64>,
    #[serde(rename = "Imported_Year")]
    imported_year: Option<i64>,
    #[serde(rename = "Mileage")]
    mileage: String,
    #[serde(rename = "Link")]
    link: String,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform integer in `lo..=hi`.
    fn range(&mut self, lo: i64, hi: i64) -> i64 {
        lo + (self.next_u64() % (hi - lo + 1) as u64) as i64
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.next_u64() as usize % items.len()]
    }
}

/// Brand, relative weight, models.
const CATALOGUE: &[(&str, u32, &[&str])] = &[
    ("Toyota", 9, &["Corolla GLi", "Corolla Altis", "Vitz", "Aqua", "Prius", "Yaris", "Hilux Revo"]),
    ("Suzuki", 8, &["Alto VXR", "Wagon R VXL", "Cultus", "Swift", "Every", "Mehran VX"]),
    ("Honda", 7, &["Civic Oriel", "City Aspire", "Vezel Hybrid Z", "Fit", "N-Wgn"]),
    ("Nissan", 4, &["Dayz Highway Star", "Note e-Power", "Sunny", "Leaf"]),
    ("Daihatsu", 4, &["Mira", "Move", "Tanto Custom"]),
    ("Mitsubishi", 2, &["Lancer", "eK Wagon", "Pajero Mini"]),
    ("Kia", 2, &["Sportage AWD", "Picanto", "Stonic"]),
    ("Hyundai", 2, &["Tucson", "Elantra", "Sonata Hybrid"]),
    ("Mercedes", 1, &["Benz C200", "Benz E200"]),
    ("BMW", 1, &["320i", "X1 sDrive18i"]),
    ("Audi", 1, &["A4", "A6", "Q3"]),
    ("Mazda", 1, &["Axela", "CX-5"]),
    ("Subaru", 1, &["Impreza", "Forester"]),
    ("Lexus", 1, &["NX 300h", "CT200h"]),
    ("Changan", 1, &["Alsvin", "Karvaan"]),
    ("MG", 1, &["HS", "ZS EV"]),
    ("Proton", 1, &["Saga"]),
    ("Isuzu", 1, &["D-Max V-Cross"]),
];

const FUEL_TYPES: &[&str] = &["Petrol", "Petrol", "Petrol", "Hybrid", "Diesel", "CNG", "Electric"];

fn main() -> Result<()> {
    let output_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("updated_file.csv"));

    let mut rng = SimpleRng::new(42);

    let weighted: Vec<usize> = CATALOGUE
        .iter()
        .enumerate()
        .flat_map(|(i, (_, weight, _))| std::iter::repeat(i).take(*weight as usize))
        .collect();

    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;

    let n_rows = 600;
    for id in 0..n_rows {
        let (brand, _, models) = CATALOGUE[*rng.pick(&weighted)];
        let model = rng.pick(models);
        let manufactured = rng.range(2005, 2024);

        // Locally assembled cars carry no import year; a few listings omit everything.
        let (manufactured_year, imported_year) = match rng.range(0, 9) {
            0 => (None, None),
            1..=4 => (Some(manufactured), None),
            _ => (Some(manufactured), Some(manufactured + rng.range(0, 3))),
        };

        let title = match (id % 25, manufactured_year) {
            (0, _) => brand.to_string(),
            (_, Some(year)) => format!("{brand} {model}, {year}"),
            (_, None) => format!("{brand} {model}"),
        };

        let lacs = rng.range(8, 250);
        let price = if id % 7 == 0 {
            format!("Rs {lacs} lacs")
        } else {
            (lacs * 100_000).to_string()
        };

        let km = rng.range(1, 180) * 1_000;
        let mileage = if id % 5 == 0 {
            format!("{km} km")
        } else {
            km.to_string()
        };

        writer
            .serialize(Listing {
                title,
                price,
                fuel_type: *rng.pick(FUEL_TYPES),
                manufactured_year,
                imported_year,
                mileage,
                link: format!("https://listings.example.com/cars/{id}"),
            })
            .with_context(|| format!("writing listing {id}"))?;
    }

    writer.flush().context("flushing CSV writer")?;

    println!("Wrote {n_rows} listings to {}", output_path.display());
    Ok(())
}
