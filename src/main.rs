use std::env;
use std::process;

use clap::{App, Arg};

use mice_and_meows::comparison::Comparison;
use mice_and_meows::config::{Heuristic, Strategy};
use mice_and_meows::{LoadProblem, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("mice-and-meows")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Finds a path for the cat through all the mice to the exit")
        .arg(
            Arg::with_name("strategy")
                .short("s")
                .long("strategy")
                .takes_value(true)
                .default_value("astar")
                .help("bfs, dfs, ucs, greedy or astar"),
        )
        .arg(
            Arg::with_name("heuristic")
                .short("H")
                .long("heuristic")
                .takes_value(true)
                .default_value("none")
                .help("none, manhattan, euclidean, mice-remaining, totalDistance or closestMice"),
        )
        .arg(
            Arg::with_name("compare")
                .short("c")
                .long("compare")
                .help("run the strategy with every heuristic and print a table"),
        )
        .arg(
            Arg::with_name("progress")
                .short("p")
                .long("progress")
                .help("print stats whenever a new depth is expanded"),
        )
        .arg(Arg::with_name("file").required(true))
        .get_matches();

    // clap fills in the defaults and requires the file
    let strategy: Strategy = matches
        .value_of("strategy")
        .unwrap_or_default()
        .parse()
        .unwrap_or_else(|err| {
            eprintln!("{}", err);
            process::exit(1);
        });
    let heuristic: Heuristic = matches
        .value_of("heuristic")
        .unwrap_or_default()
        .parse()
        .unwrap_or_else(|err| {
            eprintln!("{}", err);
            process::exit(1);
        });
    let path = matches.value_of("file").unwrap_or_default();

    let problem = path.load_problem(heuristic).unwrap_or_else(|err| {
        match env::current_dir() {
            Ok(dir) => eprintln!("Can't load board {} in {}: {}", path, dir.display(), err),
            Err(_) => eprintln!("Can't load board {}: {}", path, err),
        }
        process::exit(1);
    });

    println!("Heuristic: {}", problem.heuristic());
    println!("Starting state:");
    print!("{}", problem.board().underscored());
    println!();

    if matches.is_present("compare") {
        let comparison = Comparison::run(&problem, strategy).unwrap_or_else(|err| {
            eprintln!("{}", err);
            process::exit(1);
        });
        print!("{}", comparison);
    } else {
        let solver_ok = problem.solve(strategy, matches.is_present("progress"));
        print!("{}", solver_ok);
    }
}
