use anyhow::{bail, Context};
use env_logger::Env;
use log::{info, warn};
use maze_pathfinding::prelude::*;
use std::time::Instant;

const DEFAULT_BRUSH_RADIUS: usize = 0;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} <input> <output> [--brush <radius>] [--max-expansions <n>]\n\n<input> is a maze image: black walls, one red entry pixel and one green exit pixel.\n<output> receives a copy of <input> with the shortest path drawn in blue.\n\n--brush widens the drawn path to a square of (2 * radius + 1) pixels (default {DEFAULT_BRUSH_RADIUS}).\n--max-expansions gives up after that many pixels were explored.\n\nSet MAZE_LOG to change the log level (default info)."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    input: String,
    output: String,
    brush_radius: Option<usize>,
    max_expansions: Option<usize>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut input = None;
    let mut output = None;
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--brush" => {
                if options.brush_radius.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.brush_radius = Some(raw.parse().map_err(|_| ())?);
            }
            "--max-expansions" => {
                if options.max_expansions.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.max_expansions = Some(raw.parse().map_err(|_| ())?);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if input.is_none() {
                    input = Some(arg);
                } else if output.is_none() {
                    output = Some(arg);
                } else {
                    return Err(());
                }
            }
        }
    }

    options.input = input.ok_or(())?;
    options.output = output.ok_or(())?;
    Ok(options)
}

fn run(options: CliOptions) -> anyhow::Result<()> {
    let image = image::open(&options.input)
        .with_context(|| format!("failed to read maze image {}", options.input))?
        .to_rgba8();
    info!("loaded {} ({}x{})", options.input, image.width(), image.height());

    let palette = Palette::default();
    let mut grid = ImageGrid::new(image, palette).context("invalid maze image")?;

    let start_time = Instant::now();
    let graph = Graph::build_parallel(&grid).context("invalid maze")?;
    info!(
        "built graph with {} links in {:?}",
        graph.link_count(),
        start_time.elapsed()
    );

    let config = SearchConfig {
        max_expansions: options.max_expansions,
    };
    let start_time = Instant::now();
    let path = match dijkstra_search(&graph, &config) {
        Ok(path) => path,
        Err(err @ Error::Unreachable { .. }) => {
            let reachable = graph.reachable_from(graph.entry())?.len();
            warn!("only {} pixels can be reached from the entry", reachable);
            bail!(err);
        }
        Err(err) => return Err(err).context("search failed"),
    };
    info!(
        "found path with {} pixels and cost {:.3} in {:?}",
        path.len(),
        path.cost(),
        start_time.elapsed()
    );

    grid.plot_path(
        &path,
        options.brush_radius.unwrap_or(DEFAULT_BRUSH_RADIUS),
        palette.path,
    );
    grid.into_image()
        .save(&options.output)
        .with_context(|| format!("failed to write solution to {}", options.output))?;
    info!("wrote {}", options.output);

    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(Env::default().filter_or("MAZE_LOG", "info"));

    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "maze-solve".to_owned());

    let options = match parse_options(args) {
        Ok(options) => options,
        Err(()) => {
            print_usage(&program);
            std::process::exit(2);
        }
    };

    run(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliOptions, ()> {
        parse_options(args.iter().map(|arg| arg.to_string()))
    }

    #[test]
    fn positional_and_flags() {
        assert_eq!(
            parse(&["in.png", "--brush", "2", "out.png"]),
            Ok(CliOptions {
                input: "in.png".to_owned(),
                output: "out.png".to_owned(),
                brush_radius: Some(2),
                max_expansions: None,
            })
        );
        assert_eq!(
            parse(&["--max-expansions", "100", "in.png", "out.png"])
                .unwrap()
                .max_expansions,
            Some(100)
        );
    }

    #[test]
    fn usage_errors() {
        assert_eq!(parse(&[]), Err(()));
        assert_eq!(parse(&["in.png"]), Err(()));
        assert_eq!(parse(&["a", "b", "c"]), Err(()));
        assert_eq!(parse(&["a", "b", "--brush"]), Err(()));
        assert_eq!(parse(&["a", "b", "--brush", "x"]), Err(()));
        assert_eq!(parse(&["a", "b", "--brush", "1", "--brush", "2"]), Err(()));
        assert_eq!(parse(&["a", "b", "--verbose"]), Err(()));
    }
}
