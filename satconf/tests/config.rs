//! Resolving configurations from parameter sets as a client of the library would.

use satconf::config::{
    BranchingHeuristic, GcStrategy, PbSolver, PhaseSelection, RestartStrategy, RewardType,
};
use satconf::{ParamDescrs, Params, ParamsError, SatConfig, SatParamError, Value};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn tuned_params(threads: u32) -> Params {
    let mut params = Params::new();
    params
        .set_symbol("restart", "geometric")
        .set_symbol("phase", "caching")
        .set_symbol("gc", "glue")
        .set_symbol("lookahead_reward", "unit")
        .set_symbol("branching_heuristic", "lrb")
        .set_symbol("pb_solver", "sorting")
        .set_uint("threads", threads)
        .set_bool("drat_check_unsat", true);
    params
}

#[test]
fn single_threaded_proof_logging() {
    init_logging();

    let config = SatConfig::new(&tuned_params(1)).unwrap();

    assert_eq!(config.restart, RestartStrategy::Geometric);
    assert_eq!(config.phase, PhaseSelection::Caching);
    assert_eq!(config.gc_strategy, GcStrategy::Glue);
    assert_eq!(config.lookahead_reward, RewardType::UnitLiteral);
    assert_eq!(config.branching_heuristic, BranchingHeuristic::Lrb);
    assert_eq!(config.pb_solver, PbSolver::Sorting);
    assert!(config.drat);
}

#[test]
fn multi_threaded_disables_proof_logging() {
    init_logging();

    let single = SatConfig::new(&tuned_params(1)).unwrap();
    let multi = SatConfig::new(&tuned_params(4)).unwrap();

    assert!(!multi.drat);
    assert_eq!(multi.num_threads, 4);

    let mut expected = single;
    expected.drat = false;
    expected.num_threads = 4;
    assert_eq!(multi, expected);
}

#[test]
fn bogus_restart() {
    init_logging();

    let mut params = Params::new();
    params.set_symbol("restart", "bogus");

    let err = SatConfig::new(&params).unwrap_err();

    let SatParamError::InvalidValue {
        param, accepted, ..
    } = &err;
    assert_eq!(*param, "restart");
    assert_eq!(*accepted, &["luby", "geometric"]);

    let message = err.to_string();
    assert!(message.contains("'restart'"));
    assert!(message.contains("'luby', 'geometric'"));
}

#[test]
fn retune_between_runs() {
    init_logging();

    let mut config = SatConfig::new(&tuned_params(1)).unwrap();

    let mut retune = tuned_params(1);
    retune
        .set_symbol("branching_heuristic", "chb")
        .set_uint("gc_k", 300)
        .set_bool("elim_vars", false);
    config.update(&retune).unwrap();

    assert_eq!(config.branching_heuristic, BranchingHeuristic::Chb);
    assert_eq!(config.gc_k, 255);
    assert!(!config.elim_vars);
    assert_eq!(config.restart, RestartStrategy::Geometric);
}

#[test]
fn params_from_toml() {
    let params: Params = toml::from_str(
        r#"
        threads = 2
        restart_factor = 2
        random_freq = 0.05
        drat_file = "out.drat"
        minimize_lemmas = false

        [sat]
        restart = "geometric"
        "#,
    )
    .unwrap();

    assert_eq!(params.get("threads"), Some(&Value::UInt(2)));
    assert_eq!(params.get("restart_factor"), Some(&Value::UInt(2)));
    assert_eq!(params.get("random_freq"), Some(&Value::Double(0.05)));
    assert_eq!(params.get("sat.restart"), Some(&Value::from("geometric")));

    let config = SatConfig::new(&params).unwrap();

    assert_eq!(config.num_threads, 2);
    assert_eq!(config.restart_factor, 2.0);
    assert_eq!(config.random_freq, 0.05);
    assert_eq!(config.restart, RestartStrategy::Geometric);
    assert_eq!(config.drat_file, "out.drat");
    assert!(!config.minimize_lemmas);
    assert!(!config.drat);
}

#[test]
fn negative_numbers_are_not_uint() {
    let params: Params = toml::from_str("gc_k = -3").unwrap();

    assert_eq!(params.get("gc_k"), Some(&Value::Double(-3.0)));
    assert_eq!(SatConfig::new(&params).unwrap().gc_k, 7);

    let mut descrs = ParamDescrs::new();
    SatConfig::collect_param_descrs(&mut descrs);

    match descrs.validate(&params) {
        Err(ParamsError::KindMismatch { name, .. }) => assert_eq!(name, "gc_k"),
        other => panic!("unexpected validation result {:?}", other),
    }
}

#[test]
fn arrays_are_rejected() {
    assert!(toml::from_str::<Params>("restart = [\"luby\"]").is_err());
}

#[test]
fn validate_against_descriptions() {
    let mut descrs = ParamDescrs::new();
    SatConfig::collect_param_descrs(&mut descrs);

    let mut params = tuned_params(1);
    params.set_uint("sat.gc_k", 20);
    assert_eq!(descrs.validate(&params), Ok(()));

    // Unexposed options are not described.
    params.set_uint("simplify_mult1", 100);
    assert_eq!(
        descrs.validate(&params),
        Err(ParamsError::UnknownParam {
            name: "simplify_mult1".to_owned()
        })
    );
}

#[test]
fn help_lists_all_options() {
    let mut descrs = ParamDescrs::new();
    SatConfig::collect_param_descrs(&mut descrs);

    let help = descrs.help();

    assert!(help.contains("restart: symbol (default: \"luby\")\n    Restart strategy: luby or geometric.\n"));
    assert!(help.contains("gc_k: uint (default: 7)\n"));
    assert!(help.contains("restart_factor: double (default: 1.5)\n"));
    assert!(help.contains("minimize_lemmas: bool (default: true)\n"));
    assert_eq!(help.lines().filter(|line| !line.starts_with(' ')).count(), 38);
}
