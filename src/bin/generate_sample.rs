use std::collections::BTreeSet;

// (town, local authority, postcode district, centre latitude, centre longitude)
const TOWNS: [(&str, &str, &str, f64, f64); 10] = [
    ("Wrexham", "Wrexham", "LL13", 53.046, -2.993),
    ("Westminster", "City of Westminster", "SW1A", 51.4975, -0.1357),
    ("Camden", "Camden", "NW1", 51.5390, -0.1426),
    ("Hackney", "Hackney", "E8", 51.5450, -0.0553),
    ("Manchester", "Manchester", "M2", 53.4794, -2.2453),
    ("Leeds", "Leeds", "LS1", 53.7997, -1.5492),
    ("Cardiff", "Cardiff", "CF10", 51.4816, -3.1791),
    ("Edinburgh", "City of Edinburgh", "EH1", 55.9533, -3.1883),
    ("York", "York", "YO1", 53.9600, -1.0873),
    ("Bristol", "Bristol, City of", "BS1", 51.4545, -2.5879),
];

const NAME_FIRST: [&str; 12] = [
    "Red", "White", "Black", "Golden", "Royal", "Old", "Grey", "Silver", "Crooked", "Jolly",
    "Wandering", "Thirsty",
];

const NAME_SECOND: [&str; 12] = [
    "Lion", "Hart", "Horse", "Swan", "Oak", "Anchor", "Bell", "Castle", "Fox", "Crown", "Griffin",
    "Barrel",
];

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

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }

    fn digit(&mut self) -> u64 {
        self.next_u64() % 10
    }

    fn letter(&mut self) -> char {
        (b'A' + (self.next_u64() % 26) as u8) as char
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let pubs_per_town = 25;
    let output_path = "sample_pubs.csv";

    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record(["name", "postcode", "local_authority", "latitude", "longitude"])
        .expect("Failed to write header");

    let mut authorities = BTreeSet::new();
    let mut rows = 0usize;

    for (_town, authority, district, latitude, longitude) in TOWNS {
        authorities.insert(authority);

        for _ in 0..pubs_per_town {
            let name = format!("The {} {}", rng.pick(&NAME_FIRST), rng.pick(&NAME_SECOND));
            let postcode = format!("{district} {}{}{}", rng.digit(), rng.letter(), rng.letter());

            // Scatter around the town centre; 0.02 degrees is a couple of km.
            let lat = format!("{:.5}", latitude + rng.gauss(0.0, 0.02));
            let lon = format!("{:.5}", longitude + rng.gauss(0.0, 0.02));

            writer
                .write_record([
                    name.as_str(),
                    postcode.as_str(),
                    authority,
                    lat.as_str(),
                    lon.as_str(),
                ])
                .expect("Failed to write row");
            rows += 1;
        }
    }

    writer.flush().expect("Failed to flush output");

    println!(
        "Wrote {rows} pubs across {} local authorities to {output_path}",
        authorities.len()
    );
}
