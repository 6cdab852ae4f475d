use clap::{
    crate_description, crate_name, crate_version, App, AppSettings, Arg, ArgMatches, SubCommand,
};
use fsgm::{
    data_graph::{load_graph, load_graph_sqlite, vlabel_histogram, DataGraph, GraphInfo},
    miner::{Miner, MiningOptions},
};
use rusqlite::OpenFlags;
use std::error::Error;

fn open_data_graph(matches: &ArgMatches, directed: bool) -> Result<DataGraph, Box<dyn Error>> {
    let path = matches.value_of("GRAPH").unwrap();
    if matches.is_present("sqlite") {
        let conn = rusqlite::Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(load_graph_sqlite(&conn, directed)?)
    } else {
        Ok(load_graph(path)?)
    }
}

fn handle_info(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let data_graph = open_data_graph(matches, matches.is_present("directed"))?;
    println!("{}", GraphInfo::new(&data_graph));
    for (label, count) in vlabel_histogram(&data_graph) {
        println!("{}: {}", label, count);
    }
    Ok(())
}

fn handle_mine(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let start_time = std::time::Instant::now();
    let directed = matches.is_present("directed");
    let data_graph = open_data_graph(matches, directed)?;
    let options = MiningOptions {
        min_support: matches.value_of("min-support").unwrap().parse()?,
        directed,
        approximate: matches.is_present("approx-error"),
        approx_error: matches
            .value_of("approx-error")
            .map_or(Ok(0.0), |e| e.parse())?,
        max_pattern_size: matches.value_of("max-size").unwrap().parse()?,
        max_distance: matches.value_of("max-distance").unwrap().parse()?,
    };
    let mut miner = Miner::new(&data_graph, options);
    if matches.is_present("progress") {
        miner.set_progress_callback(|progress| {
            eprintln!("progress: {:.1}%", progress * 100.0);
        });
    }
    let time_now = std::time::Instant::now();
    let results = match matches.value_of("mode").unwrap() {
        "pattern" => miner.mine_frequent_patterns(),
        _ => miner.mine_frequent_subgraphs(),
    };
    eprintln!(
        "mine_time: {}",
        (std::time::Instant::now() - time_now).as_millis()
    );
    println!("num_patterns: {}", results.len());
    for (i, pattern) in results.iter().enumerate() {
        println!(
            "pattern {}: num_vertices={} num_edges={} support={}",
            i + 1,
            pattern.vertex_count(),
            pattern.edge_count(),
            pattern.calculate_support(&data_graph)
        );
    }
    eprintln!(
        "total_time: {}",
        (std::time::Instant::now() - start_time).as_millis()
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let matches = App::new(crate_name!())
        .about(crate_description!())
        .version(crate_version!())
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("info")
                .about("Displays information about the data graph")
                .arg(Arg::with_name("GRAPH").required(true))
                .arg(
                    Arg::with_name("sqlite")
                        .help("Treats GRAPH as a SQLite3 database")
                        .long("sqlite")
                        .takes_value(false),
                )
                .arg(
                    Arg::with_name("directed")
                        .long("directed")
                        .takes_value(false),
                ),
        )
        .subcommand(
            SubCommand::with_name("mine")
                .about("Mines frequent patterns in the data graph")
                .after_help(
                    r"A SQLite3 input (--sqlite) must contain the following schema:

  CREATE TABLE vertices (vid INT, vlabel TEXT);
  CREATE TABLE edges (src INT, dst INT, elabel TEXT);
",
                )
                .arg(Arg::with_name("GRAPH").required(true))
                .arg(
                    Arg::with_name("min-support")
                        .help("Minimum support a pattern must reach")
                        .short("s")
                        .long("min-support")
                        .takes_value(true)
                        .default_value("0"),
                )
                .arg(
                    Arg::with_name("directed")
                        .help("Extends patterns with forward arcs only")
                        .short("t")
                        .long("directed")
                        .takes_value(false),
                )
                .arg(
                    Arg::with_name("mode")
                        .help("Extension rule during mining")
                        .short("p")
                        .long("mode")
                        .takes_value(true)
                        .default_value("subgraph")
                        .possible_values(&["subgraph", "pattern"]),
                )
                .arg(
                    Arg::with_name("max-size")
                        .help("Maximum pattern vertex count")
                        .long("max-size")
                        .takes_value(true)
                        .default_value("10"),
                )
                .arg(
                    Arg::with_name("max-distance")
                        .short("d")
                        .long("max-distance")
                        .takes_value(true)
                        .default_value("0"),
                )
                .arg(
                    Arg::with_name("approx-error")
                        .help("Enables approximate mode with the given error")
                        .long("approx-error")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("sqlite")
                        .help("Treats GRAPH as a SQLite3 database")
                        .long("sqlite")
                        .takes_value(false),
                )
                .arg(
                    Arg::with_name("progress")
                        .help("Reports per-seed progress on stderr")
                        .long("progress")
                        .takes_value(false),
                ),
        )
        .get_matches();
    if let Some(matches) = matches.subcommand_matches("info") {
        handle_info(matches)?;
    } else if let Some(matches) = matches.subcommand_matches("mine") {
        handle_mine(matches)?;
    }
    Ok(())
}
