//! Synthetic enterprise dataset for trying out the renderer without input files

use parcoords::common::table::Table;
use parcoords::common::value::Scalar;
use parcoords::PlotConfig;
use rand::distributions::{Distribution, Uniform, WeightedIndex};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Beta, Gamma, LogNormal, Normal};

pub const INDUSTRIES: [&str; 4] = ["manufacturing", "services", "technology", "finance"];
const INDUSTRY_WEIGHTS: [f64; 4] = [0.4, 0.3, 0.2, 0.1];

/// Company size codes, large to small
const SIZES: [f32; 3] = [3.0, 2.0, 1.0];
const SIZE_WEIGHTS: [f64; 3] = [0.2, 0.5, 0.3];

/// Bottom to top on the industry axis
pub const INDUSTRY_ORDER: [&str; 4] = ["finance", "technology", "manufacturing", "services"];

pub const INDUSTRY_COLORS: [(&str, &str); 4] = [
    ("finance", "#66B2FF"),
    ("technology", "#99CC99"),
    ("manufacturing", "#FF9999"),
    ("services", "#FFCC99"),
];

pub fn demo_table(rows: usize, seed: u64) -> anyhow::Result<Table> {
    let mut rng = StdRng::seed_from_u64(seed);

    let revenue = LogNormal::new(8.0, 1.5)?;
    let employees = LogNormal::new(5.0, 1.0)?;
    let rd_ratio = Beta::new(2.0, 5.0)?;
    let satisfaction = Normal::new(8.5, 1.2)?;
    let market_share = Gamma::new(2.0, 2.0)?;
    let csr_score = Uniform::new(60.0, 95.0);
    let industry = WeightedIndex::new(INDUSTRY_WEIGHTS)?;
    let size = WeightedIndex::new(SIZE_WEIGHTS)?;
    let overall = Normal::new(75.0, 12.0)?;

    let columns = vec![
        ("revenue", numeric(&revenue, 1.0, rows, &mut rng)),
        ("employees", numeric(&employees, 1.0, rows, &mut rng)),
        ("rd_ratio", numeric(&rd_ratio, 15.0, rows, &mut rng)),
        ("satisfaction", numeric(&satisfaction, 1.0, rows, &mut rng)),
        ("market_share", numeric(&market_share, 1.0, rows, &mut rng)),
        ("csr_score", numeric(&csr_score, 1.0, rows, &mut rng)),
        (
            "industry",
            (0..rows)
                .map(|_| Scalar::from(INDUSTRIES[industry.sample(&mut rng)]))
                .collect(),
        ),
        (
            "size",
            (0..rows)
                .map(|_| Scalar::Number(SIZES[size.sample(&mut rng)]))
                .collect(),
        ),
        ("overall_score", numeric(&overall, 1.0, rows, &mut rng)),
    ];

    Ok(Table::try_new(columns)?)
}

fn numeric<D: Distribution<f64>>(
    dist: &D,
    factor: f64,
    rows: usize,
    rng: &mut StdRng,
) -> Vec<Scalar> {
    (0..rows)
        .map(|_| Scalar::Number((dist.sample(rng) * factor) as f32))
        .collect()
}

/// Category coloring by industry with log axes for the heavy tailed columns
pub fn demo_config(seed: u64) -> PlotConfig {
    PlotConfig::new(["revenue", "employees", "rd_ratio", "overall_score", "size"])
        .with_category("industry")
        .with_category_order("industry", INDUSTRY_ORDER)
        .with_color_map(INDUSTRY_COLORS)
        .with_column_transform("revenue", Some("log"))
        .with_column_transform("employees", Some("log"))
        .with_twin_axis(true)
        .with_curved(true)
        .with_spread(true)
        .with_alpha(0.6)
        .with_seed(Some(seed))
        .with_title("Enterprise profile")
}
