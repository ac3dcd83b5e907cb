//! Command line wrapper: draft patterns from default measurements and write
//! the SVG/PDF sheets to disk.

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use couture::catalog::AVAILABLE_SIZES;
use couture::measurements::{default_measurements, individual_measurements, FullMeasurements, Person};
use couture::pattern::baby_dress::{BabyDressParams, BabyDressPattern};
use couture::pattern::corset::{CorsetControl, CorsetMeasurements, CorsetPattern};
use couture::pattern::skirt::{SkirtMeasurements, SkirtPattern};
use couture::pattern::sleeve::{SleeveControl, SleeveMeasurements, SleevePattern};
use couture::pattern::{Pattern, Variant};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "couture", version, about = "Generate sewing patterns from body measurements.")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a corset / bodice block pattern
    Corset(DraftArgs),
    /// Generate a jersey set-in sleeve pattern
    Sleeve(DraftArgs),
    /// Generate a straight skirt pattern
    Skirt(SkirtArgs),
    /// Generate the baby dress pattern
    BabyDress(OutputArgs),
    /// Print default measurements for a size
    Measurements(MeasurementsArgs),
}

#[derive(Args)]
struct DraftArgs {
    /// French size
    #[arg(long, default_value_t = 38, value_parser = parse_size)]
    size: i32,

    /// Use a saved individual's measurements instead of a standard size
    #[arg(long)]
    person: Option<String>,

    /// Horizontal and vertical stretch factors (e.g. 0.2 0.1)
    #[arg(long, num_args = 2, value_names = ["H", "V"])]
    stretch: Option<Vec<f64>>,

    /// Fraction of the stretch capacity to use
    #[arg(long, default_value_t = 1.0)]
    usage: f64,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args)]
struct SkirtArgs {
    #[command(flatten)]
    draft: DraftArgs,

    /// Skirt length in cm
    #[arg(long, default_value_t = 65.0)]
    length: f64,
}

#[derive(Args)]
struct OutputArgs {
    /// Output directory
    #[arg(long, default_value = "output")]
    output: PathBuf,
}

#[derive(Args)]
struct MeasurementsArgs {
    /// French size (omit to list all sizes)
    #[arg(long, value_parser = parse_size)]
    size: Option<i32>,

    /// Show a saved individual's measurements
    #[arg(long)]
    person: Option<String>,
}

fn parse_size(value: &str) -> Result<i32, String> {
    let size: i32 = value.parse().map_err(|_| format!("invalid size: {value}"))?;
    if AVAILABLE_SIZES.contains(&size) {
        Ok(size)
    } else {
        let supported: Vec<String> = AVAILABLE_SIZES.iter().map(i32::to_string).collect();
        Err(format!(
            "size {size} not supported. Choose from: {}",
            supported.join(", ")
        ))
    }
}

fn main() -> Result<()> {
    env_logger::init();
    match Cli::parse().command {
        Command::Corset(args) => corset(args),
        Command::Sleeve(args) => sleeve(args),
        Command::Skirt(args) => skirt(args),
        Command::BabyDress(args) => baby_dress(args),
        Command::Measurements(args) => measurements(args),
    }
}

impl DraftArgs {
    /// The measurement record and name stem this draft works from.
    fn resolve(&self) -> Result<(FullMeasurements, String)> {
        match &self.person {
            Some(name) => {
                let person = Person::parse(name)
                    .ok_or_else(|| anyhow!("unknown measurement preset: {name}"))?;
                Ok((individual_measurements(person), person.name().to_string()))
            }
            None => Ok((default_measurements(self.size), self.size.to_string())),
        }
    }

    fn apply_stretch<F>(&self, stretch: F) -> Result<()>
    where
        F: FnOnce(f64, f64, f64) -> Result<(), couture::DraftError>,
    {
        if let Some(factors) = &self.stretch {
            let (h, v) = (factors[0], factors[1]);
            stretch(h, v, self.usage)?;
            println!("Applied stretch: horizontal={h}, vertical={v}, usage={}", self.usage);
        }
        Ok(())
    }
}

/// Write both variants in both formats, returning the written paths.
fn write_pattern(pattern: &dyn Pattern, name: &str, dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let mut written = Vec::new();
    let mut reported = Vec::new();

    for variant in [Variant::Construction, Variant::Printable] {
        let svg = pattern.render_svg(variant);
        let svg_path = dir.join(format!("{name}_{}.svg", variant.suffix()));
        fs::write(&svg_path, svg.output).with_context(|| format!("writing {}", svg_path.display()))?;
        written.push(svg_path);

        let pdf = pattern.render_pdf(variant);
        let pdf_path = dir.join(format!("{name}_{}.pdf", variant.suffix()));
        fs::write(&pdf_path, pdf.output).with_context(|| format!("writing {}", pdf_path.display()))?;
        written.push(pdf_path);

        for warning in svg.warnings {
            if !reported.contains(&warning) {
                reported.push(warning);
            }
        }
    }

    for warning in &reported {
        println!("warning: {warning}");
    }

    Ok(written)
}

fn print_written(written: &[PathBuf]) {
    println!("Files:");
    for path in written {
        println!("  {}", path.display());
    }
}

fn corset(args: DraftArgs) -> Result<()> {
    let (fm, stem) = args.resolve()?;
    let mut pattern =
        CorsetPattern::new(CorsetMeasurements::from_full(&fm), CorsetControl::default());
    args.apply_stretch(|h, v, u| pattern.stretch(h, v, u))?;

    let written = write_pattern(&pattern, &format!("corset_{stem}"), &args.output.output)?;
    println!("Generated corset pattern ({stem}):");
    println!("  Full bust:  {} cm", fm.full_bust);
    println!("  Full waist: {} cm", fm.full_waist);
    println!("  Full hip:   {} cm", fm.full_hip);
    print_written(&written);
    Ok(())
}

fn sleeve(args: DraftArgs) -> Result<()> {
    let (fm, stem) = args.resolve()?;
    let mut pattern = SleevePattern::new(SleeveMeasurements::from_full(&fm), SleeveControl::default());
    args.apply_stretch(|h, v, u| pattern.stretch(h, v, u))?;

    let written = write_pattern(&pattern, &format!("sleeve_{stem}"), &args.output.output)?;
    println!("Generated sleeve pattern ({stem}):");
    println!("  Armhole circumference: {} cm", fm.armhole_circumference);
    println!("  Arm length:            {} cm", fm.arm_length);
    println!("  Upper arm:             {} cm", fm.upper_arm);
    print_written(&written);
    Ok(())
}

fn skirt(args: SkirtArgs) -> Result<()> {
    let (fm, stem) = args.draft.resolve()?;
    let mut pattern = SkirtPattern::new(SkirtMeasurements::from_full(&fm, args.length));
    args.draft.apply_stretch(|h, v, u| pattern.stretch(h, v, u))?;

    let written = write_pattern(&pattern, &format!("skirt_{stem}"), &args.draft.output.output)?;
    println!("Generated skirt pattern ({stem}):");
    println!("  Full waist:   {} cm", fm.full_waist);
    println!("  Full hip:     {} cm", fm.full_hip);
    println!("  Skirt length: {} cm", args.length);
    print_written(&written);
    Ok(())
}

fn baby_dress(args: OutputArgs) -> Result<()> {
    let pattern = BabyDressPattern::new(BabyDressParams::default());
    let written = write_pattern(&pattern, "baby_dress", &args.output)?;
    println!("Generated baby dress pattern (18 months).");
    print_written(&written);
    Ok(())
}

fn measurements(args: MeasurementsArgs) -> Result<()> {
    let fm = match (&args.person, args.size) {
        (Some(name), _) => {
            let person =
                Person::parse(name).ok_or_else(|| anyhow!("unknown measurement preset: {name}"))?;
            individual_measurements(person)
        }
        (None, Some(size)) => default_measurements(size),
        (None, None) => {
            let sizes: Vec<String> = AVAILABLE_SIZES.iter().map(i32::to_string).collect();
            println!("Available sizes: {}", sizes.join(", "));
            let presets: Vec<&str> = Person::ALL.iter().map(|p| p.name()).collect();
            println!("Saved presets:   {}", presets.join(", "));
            println!("Use --size SIZE or --person NAME to see the measurements.");
            return Ok(());
        }
    };

    println!("{:<30} {:>10}", "Measurement", "Value (cm)");
    println!("{}", "-".repeat(42));
    // serde keeps the struct's field order, so the table reads like the
    // standard measurement chart.
    let table = serde_json::to_value(&fm)?;
    let table = table
        .as_object()
        .ok_or_else(|| anyhow!("measurements did not serialize to a map"))?;
    for (name, value) in table {
        let label: Vec<String> = name
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            })
            .collect();
        println!(
            "{:<30} {:>10.2}",
            label.join(" "),
            value.as_f64().unwrap_or_default()
        );
    }
    Ok(())
}
