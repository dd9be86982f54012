use clap::{App, Arg};
use labgraph::task;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let matches = App::new("arbitrage")
        .arg(
            Arg::with_name("input")
                .long("input")
                .takes_value(true)
                .default_value("tasas.txt"),
        )
        .get_matches();
    println!("{}", task::arbitrage(matches.value_of("input").unwrap())?);
    Ok(())
}
