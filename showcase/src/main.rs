mod args;
mod config;

use std::io::{self, Write};

use anyhow::{Context, Result};
use shapes::Shape;

use args::{Args, HELP};
use config::Config;

fn default_shapes() -> Result<Vec<Shape>> {
    Ok(vec![Shape::rectangle(2.0, 3.0)?, Shape::circle(5.0)?])
}

fn shapes_from(args: &Args, config: &Config) -> Result<Vec<Shape>> {
    if !args.rectangles.is_empty() || !args.circles.is_empty() {
        let rectangles = args
            .rectangles
            .iter()
            .map(|&(w, h)| Shape::rectangle(w, h).context("bad --rectangle"));
        let circles = args
            .circles
            .iter()
            .map(|&r| Shape::circle(r).context("bad --circle"));
        return rectangles.chain(circles).collect();
    }
    if !config.shapes.is_empty() {
        return Ok(config.shapes.clone());
    }
    default_shapes()
}

fn report(shapes: &[Shape], visitor: bool, out: &mut impl Write) -> io::Result<()> {
    for shape in shapes {
        if visitor {
            shapes::write_info_using_visitor(shape, out)?;
        } else {
            shapes::write_info(shape, out)?;
        }
        log::info!(
            "{}: width x2 = {}, passes screen = {}",
            shape.designator(),
            shapes::width_x2(shape),
            shapes::screen(shape)
        );
    }
    Ok(())
}

fn run() -> Result<()> {
    let args = Args::parse(pico_args::Arguments::from_env()).context("invalid arguments")?;
    if args.help {
        print!("{}", HELP);
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let shapes = shapes_from(&args, &config)?;
    let visitor = args.visitor || config.visitor;
    log::debug!("printing {} shapes, visitor: {}", shapes.len(), visitor);

    report(&shapes, visitor, &mut io::stdout().lock()).context("failed to write output")?;
    Ok(())
}

fn main() {
    let _ = env_logger::try_init();

    if let Err(e) = run() {
        eprintln!("{:?}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(shapes: &[Shape], visitor: bool) -> String {
        let mut out = Vec::new();
        report(shapes, visitor, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn defaults() {
        let shapes = shapes_from(&Args::default(), &Config::default()).unwrap();
        assert_eq!(output(&shapes, false), "width: 4; height: 6\nradius: 5;\n");
        assert_eq!(output(&shapes, true), output(&shapes, false));
    }

    #[test]
    fn arguments_take_priority() {
        let args = Args {
            circles: vec![1.0],
            ..Args::default()
        };
        let config = Config::parse(
            r#"
            [[shapes]]
            designator = "Circle"
            radius = 9.0
            "#,
        )
        .unwrap();
        let shapes = shapes_from(&args, &config).unwrap();
        assert_eq!(shapes, vec![Shape::circle(1.0).unwrap()]);

        let shapes = shapes_from(&Args::default(), &config).unwrap();
        assert_eq!(shapes, vec![Shape::circle(9.0).unwrap()]);
    }

    #[test]
    fn invalid_dimensions_from_arguments() {
        let args = Args {
            rectangles: vec![(-1.0, 2.0)],
            ..Args::default()
        };
        assert!(shapes_from(&args, &Config::default()).is_err());
    }
}
