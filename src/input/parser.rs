use super::error::{Error, Result};
use crate::{
    algo::HeightMap,
    types::{Height, Name},
};
use pest::{iterators::Pair, Parser};
use pest_derive::Parser;
use std::str::FromStr;

pub type InputRule = Rule;

#[derive(Parser)]
#[grammar = "input/grammar.pest"]
struct InputParser;

/// Parse lines of two whitespace separated names.
pub fn parse_pairs(input: &str) -> Result<Vec<(Name, Name)>> {
    let mut pairs = vec![];
    for pair in InputParser::parse(Rule::pairs, input)? {
        match pair.as_rule() {
            Rule::pair => {
                let mut words = pair.into_inner();
                pairs.push((next_str(&mut words), next_str(&mut words)));
            }
            Rule::EOI => {}
            _ => unreachable!(),
        }
    }
    Ok(pairs)
}

/// Parse lines of two comma separated places. Places are trimmed.
pub fn parse_streets(input: &str) -> Result<Vec<(Name, Name)>> {
    let mut streets = vec![];
    for pair in InputParser::parse(Rule::streets, input)? {
        match pair.as_rule() {
            Rule::street => {
                let mut places = pair.into_inner();
                let src = next_str(&mut places).trim().to_owned();
                let dst = next_str(&mut places).trim().to_owned();
                streets.push((src, dst));
            }
            Rule::EOI => {}
            _ => unreachable!(),
        }
    }
    Ok(streets)
}

/// Parse lines of `FROM TO RATE`.
pub fn parse_rates(input: &str) -> Result<Vec<(Name, Name, f64)>> {
    let mut rates = vec![];
    for pair in InputParser::parse(Rule::rates, input)? {
        match pair.as_rule() {
            Rule::rate => {
                let mut fields = pair.into_inner();
                let src = next_str(&mut fields);
                let dst = next_str(&mut fields);
                let rate = parse_value(fields.next().unwrap())?;
                rates.push((src, dst, rate));
            }
            Rule::EOI => {}
            _ => unreachable!(),
        }
    }
    Ok(rates)
}

/// Parse a rectangular grid of heights.
pub fn parse_grid(input: &str) -> Result<HeightMap> {
    let mut rows = vec![];
    for pair in InputParser::parse(Rule::grid, input)? {
        match pair.as_rule() {
            Rule::row => {
                rows.push(
                    pair.into_inner()
                        .map(parse_value::<Height>)
                        .collect::<Result<Vec<_>>>()?,
                );
            }
            Rule::EOI => {}
            _ => unreachable!(),
        }
    }
    Ok(HeightMap::from_rows(rows)?)
}

fn next_str(pairs: &mut pest::iterators::Pairs<Rule>) -> String {
    pairs.next().unwrap().as_str().to_owned()
}

fn parse_value<T: FromStr>(pair: Pair<Rule>) -> Result<T> {
    pair.as_str().parse().map_err(|_| {
        Error::Parse(pest::error::Error::new_from_span(
            pest::error::ErrorVariant::CustomError {
                message: String::from("value out of range"),
            },
            pair.as_span(),
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(pairs: &[(&str, &str)]) -> Vec<(Name, Name)> {
        pairs
            .iter()
            .map(|&(a, b)| (a.to_owned(), b.to_owned()))
            .collect()
    }

    #[test]
    fn test_pairs() {
        assert_eq!(
            parse_pairs("Ana Luis\nLuis  Marta\n\n  Marta\tAna  \n").unwrap(),
            names(&[("Ana", "Luis"), ("Luis", "Marta"), ("Marta", "Ana")])
        );
        assert_eq!(parse_pairs("").unwrap(), vec![]);
        assert_eq!(parse_pairs("a b").unwrap(), names(&[("a", "b")]));
        assert!(parse_pairs("a b c\n").is_err());
        assert!(parse_pairs("a\nb c\n").is_err());
    }

    #[test]
    fn test_streets() {
        assert_eq!(
            parse_streets("Plaza Venezuela, Chacaito\r\n\n  \t\nChacaito,Altamira \n\n").unwrap(),
            names(&[("Plaza Venezuela", "Chacaito"), ("Chacaito", "Altamira")])
        );
        assert!(parse_streets("Chacaito\n").is_err());
        assert!(parse_streets("a, b, c\n").is_err());
    }

    #[test]
    fn test_rates() {
        assert_eq!(
            parse_rates("USD EUR 0.9\n\n   \nEUR USD 1.2\n\n").unwrap(),
            vec![
                ("USD".to_owned(), "EUR".to_owned(), 0.9),
                ("EUR".to_owned(), "USD".to_owned(), 1.2)
            ]
        );
        assert_eq!(
            parse_rates("A B 2").unwrap(),
            vec![("A".to_owned(), "B".to_owned(), 2.0)]
        );
        assert!(parse_rates("USD EUR\n").is_err());
        assert!(parse_rates("USD EUR abc\n").is_err());
    }

    #[test]
    fn test_grid() {
        let map = parse_grid("1 2 3\n4  5 6\n").unwrap();
        assert_eq!((map.rows(), map.columns()), (2, 3));
        assert_eq!(map.height(1, 1), 5);
        assert_eq!(parse_grid("0 0 0\n0 -1 0\n0 0 0\n").unwrap().height(1, 1), -1);
        assert!(parse_grid("1 - 2\n").is_err());
        assert!(parse_grid("1 2\n3\n").is_err());
        assert!(parse_grid("99999999999\n").is_err());
    }
}
