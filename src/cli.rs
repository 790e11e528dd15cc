// SPDX-License-Identifier: MPL-2.0
//! Command-line front end: relocate an image file and write the result.

use crate::config::{self, Config};
use crate::error::{Error, Result};
use crate::image::Image;
use crate::raster;
use crate::relocate::Relocated;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::{info, warn};

pub const HELP: &str = "\
image-relocate: move an image into a shifted coordinate frame

USAGE:
  image-relocate [OPTIONS] INPUT [OUTPUT]

OPTIONS:
  --config PATH   Read settings from PATH instead of the default location
  --dx N          Horizontal offset (overrides [offset] dx)
  --dy N          Vertical offset (overrides [offset] dy)
  --canvas WxH    Output canvas size, anchored at (0,0)
  --string        Print the image string of the relocated image
  -h, --help      Print this help

The relocated image is rendered onto a canvas whose top-left corner is the
origin; pixels moved to negative coordinates are clipped.
";

/// Parsed command-line arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flags {
    pub help: bool,
    pub config_path: Option<PathBuf>,
    pub dx: Option<i32>,
    pub dy: Option<i32>,
    pub canvas: Option<(u32, u32)>,
    pub print_string: bool,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

impl Flags {
    pub fn from_env() -> Result<Self> {
        Self::parse(pico_args::Arguments::from_env())
    }

    pub fn from_vec(args: Vec<OsString>) -> Result<Self> {
        Self::parse(pico_args::Arguments::from_vec(args))
    }

    fn parse(mut args: pico_args::Arguments) -> Result<Self> {
        let help = args.contains(["-h", "--help"]);
        let print_string = args.contains("--string");
        let config_path = args.opt_value_from_str("--config")?;
        let dx = args.opt_value_from_str("--dx")?;
        let dy = args.opt_value_from_str("--dy")?;
        let canvas = args.opt_value_from_fn("--canvas", parse_canvas)?;
        let input = args.opt_free_from_str()?;
        let output = args.opt_free_from_str()?;

        let rest = args.finish();
        if !rest.is_empty() {
            return Err(Error::Argument(format!(
                "unexpected arguments: {:?}",
                rest
            )));
        }

        Ok(Self {
            help,
            config_path,
            dx,
            dy,
            canvas,
            print_string,
            input,
            output,
        })
    }

    /// Applies command-line overrides on top of file settings.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(dx) = self.dx {
            config.offset.dx = dx;
        }
        if let Some(dy) = self.dy {
            config.offset.dy = dy;
        }
        if let Some((width, height)) = self.canvas {
            config.output.canvas_width = Some(width);
            config.output.canvas_height = Some(height);
        }
    }
}

fn parse_canvas(value: &str) -> std::result::Result<(u32, u32), String> {
    let (width, height) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got '{value}'"))?;
    let width = width.parse().map_err(|e| format!("bad canvas width: {e}"))?;
    let height = height.parse().map_err(|e| format!("bad canvas height: {e}"))?;
    Ok((width, height))
}

fn load_config(flags: &Flags) -> Result<Config> {
    let mut config = match &flags.config_path {
        Some(path) => config::load_from_path(path)?,
        None => {
            let (config, warning) = config::load();
            if let Some(warning) = warning {
                warn!("using default settings: {warning}");
            }
            config
        }
    };
    flags.apply_to(&mut config);
    Ok(config)
}

/// Whether the usage text should follow `err`; only argument mistakes do.
#[must_use]
pub fn wants_usage(err: &Error) -> bool {
    matches!(err, Error::Argument(_))
}

/// Executes the command described by `flags`.
pub fn run(flags: &Flags) -> Result<()> {
    if flags.help {
        print!("{HELP}");
        return Ok(());
    }

    let input = flags
        .input
        .as_ref()
        .ok_or_else(|| Error::Argument("missing INPUT".to_string()))?;
    if flags.output.is_none() && !flags.print_string {
        return Err(Error::Argument(
            "nothing to do: pass OUTPUT or --string".to_string(),
        ));
    }

    let config = load_config(flags)?;
    let source = raster::load(input)?;
    let offset = config.offset.as_point();
    if source.bounds().checked_translate(offset).is_none() {
        return Err(Error::Argument(format!(
            "offset {offset} moves {} outside the coordinate range",
            source.bounds()
        )));
    }
    let view = Relocated::new(offset, &source);
    info!(
        offset = %view.offset(),
        from = %source.bounds(),
        to = %view.bounds(),
        "relocated image"
    );

    if flags.print_string {
        println!("{}", raster::image_string(&view)?);
    }

    if let Some(output) = &flags.output {
        let canvas = config.output.canvas(view.bounds())?;
        let buffer = raster::render_onto(&view, canvas, config.output.background());
        raster::save_buffer(&buffer, output)?;
        info!(path = %output.display(), %canvas, "wrote output");
    }

    Ok(())
}
