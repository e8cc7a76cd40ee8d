use rubiks_search::prelude::*;

use anyhow::{bail, Context};

const USAGE: &str = "usage: rubiks-search <astar|ida> [--random N | --facelets STICKERS | MOVES...]";

fn main() -> anyhow::Result<()> {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()?;

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let (solver_name, rest) = match args.split_first() {
        Some((name, rest)) => (name.as_str(), rest),
        None => bail!("{}", USAGE),
    };

    let solver: Box<dyn Solver> = match solver_name {
        "astar" => Box::new(AStar::default()),
        "ida" => Box::new(IdaStar::default()),
        other => bail!("Unknown solver {:?}\n{}", other, USAGE),
    };

    let mut cube = Cube::solved();
    match rest.first().map(String::as_str) {
        Some("--random") => {
            let count = rest
                .get(1)
                .context("--random needs a move count")?
                .parse::<usize>()
                .context("Parsing move count")?;
            let scramble = cube.scramble(count);
            log::info!("Scramble: {}", Move::format_sequence(&scramble));
        }
        Some("--facelets") => {
            cube = rest
                .get(1)
                .context("--facelets needs a sticker string")?
                .parse::<Cube>()
                .context("Parsing facelets")?;
        }
        _ => {
            let scramble = Move::parse_sequence(&rest.join(" ")).context("Parsing scramble")?;
            log::info!("Scramble: {}", Move::format_sequence(&scramble));
            cube = cube.apply_all(scramble);
        }
    }
    log::info!("Cube: {}", cube);

    match solver.solve(&cube) {
        Solution::AlreadySolved => log::info!("Cube is already solved"),
        Solution::Exhausted => bail!("No solution found within limits"),
        Solution::Found(moves) => {
            println!("{}", Move::format_sequence(&moves));

            if !cube.apply_all(moves).is_solved() {
                bail!("Solution does not solve the cube");
            }
        }
    }

    Ok(())
}
