// main.rs
//
// Command line front end: collects the gear options, normalizes them and
// writes the generated drawing as SVG or JSON.

use clap::{Parser, ValueEnum};
use gearrs::config::{GearConfig, PitchSystem, Units};
use gearrs::gear::GearDrawing;
use gearrs::io::svg::{SvgOptions, write_svg};
use gearrs::io::{IoError, load_config};
use gearrs::float_types::Real;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Svg,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "gearrs", about = "Involute spur gear, ring gear and rack outlines")]
struct Cli {
    /// Read all gear options from a JSON file; the geometry flags below are ignored
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Svg)]
    format: OutputFormat,

    /// Number of teeth
    #[arg(short, long, default_value_t = 24)]
    teeth: usize,

    /// Tooth size system: CP (circular pitch), DP (diametral pitch), MM (metric module)
    #[arg(short, long, default_value = "CP")]
    system: PitchSystem,

    /// Tooth size, depending on system
    #[arg(short, long, default_value_t = 1.0)]
    dimension: Real,

    /// Pressure angle in degrees (common values: 14.5, 20, 25)
    #[arg(short, long, default_value_t = 20.0)]
    angle: Real,

    /// Units the lengths are given in: mm, cm, in
    #[arg(short, long, default_value = "mm")]
    units: Units,

    /// Points per involute flank; 0 picks 5..20 from the tooth count
    #[arg(short = 'A', long, default_value_t = 0)]
    accuracy: usize,

    /// Clearance between bottom of gap of this gear and top of tooth of another
    #[arg(long, default_value_t = 0.0)]
    clearance: Real,

    /// Profile-shift factor used by the undercut check
    #[arg(short = 'k', long, default_value_t = 1.0)]
    profile_shift: Real,

    /// Draw annotation text
    #[arg(long)]
    annotation: bool,

    /// Ring gear style (default: normal spur gear)
    #[arg(short = 'R', long)]
    ring: bool,

    /// Mount hole diameter
    #[arg(long, default_value_t = 5.0)]
    mount_hole: Real,

    /// Mount support diameter
    #[arg(long, default_value_t = 15.0)]
    mount_diameter: Real,

    #[arg(long, default_value_t = 3)]
    spoke_count: usize,

    #[arg(long, default_value_t = 5.0)]
    spoke_width: Real,

    /// Draw cross in center
    #[arg(short = 'x', long)]
    center_cross: bool,

    /// Draw pitch circle (for mating)
    #[arg(short = 'c', long)]
    pitch_circle: bool,

    /// Draw a rack gear meshing below the spur gear
    #[arg(short = 'r', long)]
    draw_rack: bool,

    /// Length (in teeth) of rack
    #[arg(long, default_value_t = 12)]
    rack_teeth: usize,

    /// Height of base of rack
    #[arg(long, default_value_t = 8.0)]
    rack_base_height: Real,

    /// Length of tabs on ends of rack
    #[arg(long, default_value_t = 14.0)]
    rack_base_tab: Real,
}

impl Cli {
    fn gear_config(&self) -> Result<GearConfig, IoError> {
        if let Some(path) = &self.config {
            info!("reading options from {}", path.display());
            return load_config(path);
        }
        Ok(GearConfig {
            teeth: self.teeth,
            system: self.system,
            dimension: self.dimension,
            angle: self.angle,
            units: self.units,
            accuracy: self.accuracy,
            clearance: self.clearance,
            profile_shift: self.profile_shift,
            annotation: self.annotation,
            ring: self.ring,
            mount_hole: self.mount_hole,
            mount_diameter: self.mount_diameter,
            spoke_count: self.spoke_count,
            spoke_width: self.spoke_width,
            center_cross: self.center_cross,
            pitch_circle: self.pitch_circle,
            draw_rack: self.draw_rack,
            rack_teeth: self.rack_teeth,
            rack_base_height: self.rack_base_height,
            rack_base_tab: self.rack_base_tab,
        })
    }
}

fn run(cli: &Cli) -> Result<(), IoError> {
    let config = cli.gear_config()?;
    let request = config.resolve()?;
    let drawing = GearDrawing::generate(&request)?;

    for warning in &drawing.warnings {
        eprintln!("{warning}");
    }

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(std::io::stdout().lock()),
    };

    match cli.format {
        OutputFormat::Svg => {
            let annotations = if config.annotation {
                drawing.annotations(config.units.name(), config.units.scale())
            } else {
                Vec::new()
            };
            let options = SvgOptions {
                annotations,
                ..SvgOptions::default()
            };
            write_svg(&drawing, &options, &mut out)?;
        },
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &drawing)?;
            writeln!(out)?;
        },
    }
    out.flush()?;

    if let Some(path) = &cli.output {
        info!("written to {}", path.display());
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
