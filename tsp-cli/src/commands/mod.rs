use clap::{Arg, ArgAction, ArgMatches, Command};

pub mod bench;

use std::fs::File;
use std::process;
use std::str::FromStr;

fn open_file(path: &str, description: &str) -> File {
    File::open(path).unwrap_or_else(|err| {
        eprintln!("cannot open {description} file '{path}': '{err}'");
        process::exit(1);
    })
}

fn create_file(path: &str, description: &str) -> File {
    File::create(path).unwrap_or_else(|err| {
        eprintln!("cannot create {description} file '{path}': '{err}'");
        process::exit(1);
    })
}

fn parse_int_value<T: FromStr<Err = std::num::ParseIntError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>().map_err(|err| format!("cannot get integer value, error: '{err}': '{arg_desc}'")).map(Some)
        })
        .unwrap_or(Ok(None))
}

fn parse_int_list_value<T: FromStr<Err = std::num::ParseIntError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<Vec<T>>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.split(',')
                .map(|value| value.trim().parse::<T>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|err| format!("cannot get list of integer values, error: '{err}': '{arg_desc}'"))
                .map(Some)
        })
        .unwrap_or(Ok(None))
}
