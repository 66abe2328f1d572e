//! Compares two clustering solutions stored in csv files with the Grand Index.
//!
//! usage : gricmp --u file1.csv --v file2.csv \[--format matrix|labels|sets\] \[--adjusted\]
//!
//! See [io](gricmp::io) for the csv layouts.

use std::path::PathBuf;

use cpu_time::ProcessTime;
use std::time::{Duration, SystemTime};

use clap::{Arg, ArgAction, ArgMatches, Command};

use gri::prelude::*;
use gricmp::io::*;

struct CmpParams {
    u_file: PathBuf,
    v_file: PathBuf,
    format: CsvFormat,
    adjusted: bool,
}

fn parse_cmd(matches: &ArgMatches) -> Result<CmpParams, anyhow::Error> {
    log::debug!("in parse_cmd");
    let u_file = matches
        .get_one::<String>("u")
        .ok_or_else(|| anyhow::anyhow!("missing u file"))?;
    let v_file = matches
        .get_one::<String>("v")
        .ok_or_else(|| anyhow::anyhow!("missing v file"))?;
    let format = match matches.get_one::<String>("format") {
        Some(name) => name.parse::<CsvFormat>()?,
        None => CsvFormat::Matrix,
    };
    let adjusted = matches.get_flag("adjusted");
    log::debug!(
        " got u : {:?}, v : {:?}, format : {:?}, adjusted : {}",
        u_file,
        v_file,
        format,
        adjusted
    );
    //
    Ok(CmpParams {
        u_file: PathBuf::from(u_file),
        v_file: PathBuf::from(v_file),
        format,
        adjusted,
    })
} // end of parse_cmd

//=============================================================================================

pub fn main() {
    //
    let _ = env_logger::builder().is_test(true).try_init();
    //
    log::info!("\n\n running gricmp");
    //
    let matches = Command::new("gricmp")
        .arg_required_else_help(true)
        .arg(
            Arg::new("u")
                .required(true)
                .long("u")
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(String))
                .help("csv file of first clustering"),
        )
        .arg(
            Arg::new("v")
                .required(true)
                .long("v")
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(String))
                .help("csv file of second clustering"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .action(ArgAction::Set)
                .value_parser(["matrix", "labels", "sets"])
                .default_value("matrix")
                .help("layout of csv files : matrix, labels or sets"),
        )
        .arg(
            Arg::new("adjusted")
                .long("adjusted")
                .action(ArgAction::SetTrue)
                .help("compute also the adjusted index"),
        )
        .get_matches();
    //
    let params = match parse_cmd(&matches) {
        Ok(params) => params,
        Err(e) => {
            log::error!("bad command : {}", e);
            std::process::exit(1);
        }
    };
    //
    let cpu_start = ProcessTime::now();
    let sys_now = SystemTime::now();
    //
    if let Err(e) = compare(&params) {
        log::error!("comparison failed : {}", e);
        eprintln!("gricmp failed : {}", e);
        std::process::exit(1);
    }
    //
    let cpu_time: Duration = cpu_start.elapsed();
    println!(
        "  sys time(ms) {:?} cpu time(ms) {:?}",
        sys_now.elapsed().map(|d| d.as_millis()).unwrap_or(0),
        cpu_time.as_millis()
    );
} // end of main

fn compare(params: &CmpParams) -> anyhow::Result<()> {
    let u = membership_from_file(&params.u_file, params.format)?;
    let v = membership_from_file(&params.v_file, params.format)?;
    log::info!(
        "nb clusters u : {}, v : {}, nb objects : {}",
        u.get_nb_clusters(),
        v.get_nb_clusters(),
        u.get_nb_objects()
    );
    //
    let grand = GrandIndex::new(&u, &v)?;
    grand.dump();
    println!("gri : {:.6}", grand.get_gri());
    if params.adjusted {
        let expectation = grand.get_gri_expectation();
        log::info!(" gri expectation : {:.5e}", expectation);
        println!("agri : {:.6}", adjust(grand.get_gri(), expectation));
    }
    if !grand.get_gri().is_finite() {
        log::warn!("index is not finite, clusterings carry no pair information");
    }
    Ok(())
} // end of compare
