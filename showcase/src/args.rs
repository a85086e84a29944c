use std::path::PathBuf;

use anyhow::{bail, Result};

pub const HELP: &str = "\
showcase

USAGE:
  showcase [OPTIONS]

OPTIONS:
  -h, --help                Prints help information
  --config PATH             Reads shapes from a TOML file
  --visitor                 Dispatches through the visitor instead of a match
  --rectangle HW,HH         Adds a rectangle with the given half extents
  --circle R                Adds a circle with the given radius
";

#[derive(Debug, Default, PartialEq)]
pub struct Args {
    pub help: bool,
    pub config: Option<PathBuf>,
    pub visitor: bool,
    pub rectangles: Vec<(f32, f32)>,
    pub circles: Vec<f32>,
}

impl Args {
    pub fn parse(mut args: pico_args::Arguments) -> Result<Args> {
        let parsed = Args {
            help: args.contains(["-h", "--help"]),
            config: args.opt_value_from_str("--config")?,
            visitor: args.contains("--visitor"),
            rectangles: args.values_from_fn("--rectangle", half_extents)?,
            circles: args.values_from_str("--circle")?,
        };

        let rest = args.finish();
        if !rest.is_empty() {
            bail!("unexpected arguments: {:?}", rest);
        }

        Ok(parsed)
    }
}

fn half_extents(s: &str) -> Result<(f32, f32), String> {
    let (w, h) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `HW,HH`, got `{}`", s))?;
    let w = w.trim().parse::<f32>().map_err(|e| e.to_string())?;
    let h = h.trim().parse::<f32>().map_err(|e| e.to_string())?;
    Ok((w, h))
}
