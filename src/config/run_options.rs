use std::{env, path::PathBuf};

use getopts::Options;
use tracing::warn;

#[derive(Clone, Debug, Default)]
pub struct Args {
    pub cfg_file: Option<PathBuf>,
    // test helper
    pub cfg_str: Option<String>,
}

pub fn print_usage(program: &str, opts: Options) {
    let brief = format!("Usage: {} [options] [config_file]", program);
    print!("{}", opts.usage(&brief));
}

fn options() -> Options {
    let mut opts = Options::new();
    opts.optflag("h", "help", "print this help menu");
    opts
}

pub fn get_args() -> Option<Args> {
    let args: Vec<String> = env::args().collect();
    let program = args.first().cloned().unwrap_or_else(|| "agrinode".to_owned());
    parse_args(&program, args.get(1..).unwrap_or_default())
}

/// Returns None when only help was requested.
pub fn parse_args(program: &str, args: &[String]) -> Option<Args> {
    let opts = options();
    let matches = match opts.parse(args) {
        Ok(m) => m,
        Err(f) => {
            warn!("Error parsing arguments: {}", f);
            warn!("Proceeding with defaults.");
            print_usage(program, opts);
            return Some(Args::default());
        }
    };
    if matches.opt_present("h") {
        print_usage(program, opts);
        return None;
    }

    let Some(config_file_path) = matches.free.first() else {
        return Some(Args::default());
    };
    let path = PathBuf::from(config_file_path);

    // Attempt to load the config file, but proceed with default if it fails
    if !path.exists() {
        warn!("Config file '{}' does not exist. Proceeding with defaults.", config_file_path);
        return Some(Args::default());
    }

    Some(Args { cfg_file: Some(path), cfg_str: None })
}

pub fn default_cfg_file() -> Option<PathBuf> {
    let path = env::current_dir().ok()?.join(super::CONFIG_FILE);
    path.exists().then_some(path)
}
