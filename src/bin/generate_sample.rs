use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

/// Write a synthetic catalog CSV that the dashboard can open.
#[derive(Debug, Parser)]
#[command(name = "generate_sample")]
struct Args {
    /// Output file
    #[arg(short, long, default_value = "sample_catalog.csv")]
    output: PathBuf,

    /// Number of titles to generate
    #[arg(short, long, default_value_t = 500)]
    count: usize,

    /// PRNG seed; the same seed always yields the same file
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

/// One CSV row, columns named as in the real catalog export.
#[derive(Debug, Serialize)]
struct Row {
    show_id: String,
    #[serde(rename = "type")]
    kind: &'static str,
    title: String,
    description: String,
    listed_in: String,
    rating: &'static str,
    duration: String,
    release_year: i32,
    country: String,
}

/// Small deterministic PRNG (splitmix64).
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        SimpleRng { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_f64() * n as f64) as usize % n.max(1)
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.below(items.len())]
    }

    /// `k` distinct items, in table order.
    fn pick_distinct<T: Copy>(&mut self, items: &[T], k: usize) -> Vec<T> {
        let mut chosen: Vec<usize> = Vec::new();
        while chosen.len() < k.min(items.len()) {
            let i = self.below(items.len());
            if !chosen.contains(&i) {
                chosen.push(i);
            }
        }
        chosen.sort_unstable();
        chosen.into_iter().map(|i| items[i]).collect()
    }
}

const MOVIE_GENRES: &[&str] = &[
    "Dramas",
    "Comedies",
    "Action & Adventure",
    "Documentaries",
    "International Movies",
    "Thrillers",
    "Horror Movies",
    "Romantic Movies",
    "Children & Family Movies",
    "Sci-Fi & Fantasy",
];
const SHOW_GENRES: &[&str] = &[
    "International TV Shows",
    "TV Dramas",
    "TV Comedies",
    "Crime TV Shows",
    "Kids' TV",
    "Docuseries",
    "Reality TV",
    "Anime Series",
];
const COUNTRIES: &[&str] = &[
    "United States",
    "India",
    "United Kingdom",
    "Japan",
    "South Korea",
    "Canada",
    "Spain",
    "France",
    "Mexico",
    "Egypt",
    "Nigeria",
    "Brazil",
];
const RATINGS: &[&str] = &["TV-MA", "TV-14", "TV-PG", "R", "PG-13", "TV-Y7", "PG", "TV-G"];
const ADJECTIVES: &[&str] = &["Silent", "Golden", "Broken", "Hidden", "Last", "Crimson", "Endless"];
const NOUNS: &[&str] = &["River", "Empire", "Summer", "Signal", "Harbor", "Witness", "Garden"];

fn generate(rng: &mut SimpleRng, id: usize) -> Row {
    let is_movie = rng.next_f64() < 0.7;
    let (kind, genres) = if is_movie {
        ("Movie", MOVIE_GENRES)
    } else {
        ("TV Show", SHOW_GENRES)
    };

    let title = format!("{} {}", rng.pick(ADJECTIVES), rng.pick(NOUNS));
    let n_genres = 1 + rng.below(3);
    let listed_in = rng.pick_distinct(genres, n_genres).join(", ");

    // Roughly one title in ten has no country, as in the real export.
    let country = if rng.next_f64() < 0.1 {
        String::new()
    } else {
        let n = 1 + rng.below(2);
        rng.pick_distinct(COUNTRIES, n).join(", ")
    };

    let duration = if is_movie {
        format!("{} min", 70 + rng.below(80))
    } else {
        match 1 + rng.below(5) {
            1 => "1 Season".to_string(),
            n => format!("{n} Seasons"),
        }
    };

    // Skewed toward recent years.
    let release_year = 2021 - (rng.next_f64().powi(2) * 40.0) as i32;

    Row {
        show_id: format!("s{}", id + 1),
        kind,
        description: format!("A {} story about {}.", kind.to_lowercase(), title.to_lowercase()),
        title,
        listed_in,
        rating: *rng.pick(RATINGS),
        duration,
        release_year,
        country,
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut rng = SimpleRng::new(args.seed);

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    for id in 0..args.count {
        writer
            .serialize(generate(&mut rng, id))
            .with_context(|| format!("writing row {id}"))?;
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {} titles to {}", args.count, args.output.display());
    Ok(())
}
