use clap::{crate_authors, crate_version, App, AppSettings, Arg, ArgMatches, SubCommand};
use labgraph::task;
use std::error::Error;

fn handle_separation(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    println!(
        "{}",
        task::separation(
            matches.value_of("INPUT").unwrap(),
            matches.value_of("NAME1").unwrap(),
            matches.value_of("NAME2").unwrap(),
        )?
    );
    Ok(())
}

fn handle_deliveries(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    println!("{}", task::deliveries(matches.value_of("INPUT").unwrap())?);
    Ok(())
}

fn handle_arbitrage(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    println!("{}", task::arbitrage(matches.value_of("INPUT").unwrap())?);
    Ok(())
}

fn handle_flooding(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    println!("{}", task::flooding(matches.value_of("INPUT").unwrap())?);
    Ok(())
}

fn input_arg<'a, 'b>(help: &'b str) -> Arg<'a, 'b> {
    Arg::with_name("INPUT").required(true).help(help)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let matches = App::new("labgraph")
        .version(crate_version!())
        .author(crate_authors!())
        .about("Classic graph exercises")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("separation")
                .about("Degrees of separation between two people")
                .arg(input_arg("Lines of two acquainted names"))
                .arg(Arg::with_name("NAME1").required(true))
                .arg(Arg::with_name("NAME2").required(true)),
        )
        .subcommand(
            SubCommand::with_name("deliveries")
                .about("Deliveries needed by the localities of a street graph")
                .arg(input_arg("Lines of `from, to` streets")),
        )
        .subcommand(
            SubCommand::with_name("arbitrage")
                .about("Look for a profitable cycle of exchange rates")
                .arg(input_arg("Lines of `FROM TO RATE`")),
        )
        .subcommand(
            SubCommand::with_name("flooding")
                .about("Water trapped by a height map")
                .arg(input_arg("Rows of heights")),
        )
        .get_matches();
    if let Some(matches) = matches.subcommand_matches("separation") {
        handle_separation(matches)?;
    } else if let Some(matches) = matches.subcommand_matches("deliveries") {
        handle_deliveries(matches)?;
    } else if let Some(matches) = matches.subcommand_matches("arbitrage") {
        handle_arbitrage(matches)?;
    } else if let Some(matches) = matches.subcommand_matches("flooding") {
        handle_flooding(matches)?;
    }
    Ok(())
}
