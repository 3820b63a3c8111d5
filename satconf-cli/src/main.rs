use std::env;
use std::fs;
use std::io::{Read, Write};

use anyhow::{bail, Error};
use clap::{values_t, App, AppSettings, Arg};
use env_logger::{fmt, Builder, Target};
use log::{error, info};
use log::{Level, LevelFilter, Record};

use satconf::sat_params::SimplifierParams;
use satconf::schema::ParamSchema;
use satconf::{ParamDescrs, Params, SatConfig};

fn main() {
    let exit_code = match main_with_err() {
        Err(err) => {
            error!("{}", err);
            1
        }
        Ok(exit_code) => exit_code,
    };
    std::process::exit(exit_code);
}

fn init_logging() {
    let format = |buf: &mut fmt::Formatter, record: &Record| {
        if record.level() == Level::Info {
            writeln!(buf, "c {}", record.args())
        } else {
            writeln!(buf, "c {}: {}", record.level(), record.args())
        }
    };

    let mut builder = Builder::new();
    builder
        .target(Target::Stdout)
        .format(format)
        .filter(None, LevelFilter::Info);

    if let Ok(ref env_var) = env::var("SATCONF_LOG") {
        builder.parse_filters(env_var);
    }

    builder.init();
}

fn banner() {
    info!("This is satconf {}", env!("SATCONF_VERSION"));
    info!(
        "  {} build - {}",
        env!("SATCONF_PROFILE"),
        env!("SATCONF_RUSTC_VERSION")
    );
}

/// Parse a single `-C name=value` option.
///
/// The option is read as a one line TOML document. Unquoted values that are not valid TOML are
/// taken as symbols, so `-C restart=geometric` works as well as `-C restart="geometric"`.
fn parse_config_option(option: &str) -> Result<Params, Error> {
    match toml::from_str(option) {
        Ok(params) => Ok(params),
        Err(err) => {
            let mut parts = option.splitn(2, '=');
            match (parts.next().map(str::trim), parts.next().map(str::trim)) {
                (Some(name), Some(value)) if !name.is_empty() && !value.is_empty() => {
                    let mut params = Params::new();
                    params.set_symbol(name, value);
                    Ok(params)
                }
                _ => bail!("invalid config option '{}': {}", option, err),
            }
        }
    }
}

/// Descriptions of every option read while resolving a configuration.
fn strict_descrs() -> ParamDescrs {
    let mut descrs = ParamDescrs::new();
    SatConfig::collect_param_descrs(&mut descrs);
    SimplifierParams::collect_param_descrs(&mut descrs);
    descrs
}

/// Whether proof logging was requested but is disabled by the thread count.
fn proof_logging_dropped(config: &SatConfig) -> bool {
    let requested =
        config.drat_check_unsat || config.drat_check_sat || !config.drat_file.is_empty();
    requested && !config.drat
}

fn main_with_err() -> Result<i32, Error> {
    let matches = App::new("satconf")
        .version(env!("SATCONF_VERSION"))
        .about("Resolves SAT solver parameters into a validated configuration")
        .setting(AppSettings::DisableHelpSubcommand)
        .arg_from_usage("[config-file] --config=[FILE] 'Read parameters from configuration file'")
        .arg(
            Arg::from_usage("[config-option] -C --config-option")
                .value_name("OPTION>=<VALUE")
                .help(
                    "Specify a single config option, see 'satconf -C help' for a list of options.",
                )
                .multiple(true)
                .number_of_values(1),
        )
        .arg_from_usage("--strict 'Reject unknown options and values of the wrong type'")
        .get_matches();

    let config_options = values_t!(matches, "config-option", String).unwrap_or(vec![]);

    let mut descrs = ParamDescrs::new();
    SatConfig::collect_param_descrs(&mut descrs);

    if config_options.iter().any(|option| option == "help") {
        print!("{}", descrs.help());
        return Ok(0);
    }

    init_logging();
    banner();

    let mut params = Params::new();

    if let Some(config_path) = matches.value_of("config-file") {
        info!("Reading parameters from '{}'", config_path);
        let mut config_contents = String::new();
        fs::File::open(config_path)?.read_to_string(&mut config_contents)?;

        params.merge(&toml::from_str(&config_contents)?);
    }

    for config_option in config_options.iter() {
        params.merge(&parse_config_option(config_option)?);
    }

    if matches.is_present("strict") {
        strict_descrs().validate(&params)?;
    }

    let config = SatConfig::new(&params)?;

    if proof_logging_dropped(&config) {
        log::warn!("Proof logging is only available when solving with a single thread");
    }

    println!("{:#?}", config);

    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use satconf::Value;

    #[test]
    fn toml_option() {
        let params = parse_config_option("threads = 4").unwrap();
        assert_eq!(params.get("threads"), Some(&Value::UInt(4)));

        let params = parse_config_option("restart=\"geometric\"").unwrap();
        assert_eq!(params.get("restart"), Some(&Value::from("geometric")));
    }

    #[test]
    fn bare_symbol_option() {
        let params = parse_config_option("sat.gc = dyn_psm").unwrap();
        assert_eq!(params.get("sat.gc"), Some(&Value::from("dyn_psm")));
    }

    #[test]
    fn strict_accepts_simplifier_options() {
        let params = parse_config_option("elim_vars = false").unwrap();
        assert_eq!(strict_descrs().validate(&params), Ok(()));

        let mut descrs = ParamDescrs::new();
        SatConfig::collect_param_descrs(&mut descrs);
        assert!(!descrs.contains("elim_vars"));
    }

    #[test]
    fn dropped_proof_logging() {
        let mut params = Params::new();
        params.set_symbol("drat_file", "out.drat").set_uint("threads", 4);
        assert!(proof_logging_dropped(&SatConfig::new(&params).unwrap()));

        params.set_uint("threads", 1);
        assert!(!proof_logging_dropped(&SatConfig::new(&params).unwrap()));

        let mut params = Params::new();
        params.set_uint("threads", 4);
        assert!(!proof_logging_dropped(&SatConfig::new(&params).unwrap()));
    }

    #[test]
    fn malformed_option() {
        assert!(parse_config_option("restart").is_err());
        assert!(parse_config_option("=luby").is_err());
    }
}
