//! Resolved solver configuration.
use log::debug;
use thiserror::Error;

use crate::descrs::ParamDescrs;
use crate::params::Params;
use crate::sat_params::{SatParams, SimplifierParams};
use crate::schema::ParamSchema;
use crate::util::megabytes_to_bytes;

mod choice;

pub use choice::{
    BranchingHeuristic, GcStrategy, PbSolver, PhaseSelection, RestartStrategy, RewardType,
};

/// Possible errors while resolving a configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SatParamError {
    #[error(
        "invalid value '{}' for parameter '{}': accepted values are '{}'",
        value,
        param,
        accepted.join("', '")
    )]
    InvalidValue {
        param: &'static str,
        value: String,
        accepted: &'static [&'static str],
    },
}

/// Configuration of the SAT solver.
///
/// Built from a [`Params`] store by [`SatConfig::new`] and retuned in place by
/// [`SatConfig::update`].
#[derive(Clone, Debug, PartialEq)]
pub struct SatConfig {
    /// Memory limit in bytes, `usize::MAX` if unlimited.
    pub max_memory: usize,
    /// Conflict limit, `u32::MAX` if unbounded.
    pub max_conflicts: u32,
    pub random_seed: u32,
    pub random_freq: f64,
    pub burst_search: u32,
    pub num_threads: u32,
    pub local_search: bool,
    pub local_search_threads: u32,

    pub restart: RestartStrategy,
    pub restart_initial: u32,
    pub restart_factor: f64,
    pub restart_max: u32,
    /// Number of inprocessing passes after which periodic simplification stops.
    pub inprocess_max: u32,

    pub phase: PhaseSelection,
    pub phase_caching_on: u32,
    pub phase_caching_off: u32,

    pub lookahead_simplify: bool,
    /// Add learned binary clauses during lookahead simplification.
    pub lookahead_simplify_bca: bool,
    pub lookahead_reward: RewardType,
    pub lookahead_cube_fraction: f64,
    pub lookahead_cube_cutoff: u32,
    pub lookahead_global_autarky: bool,

    // Not part of the public options.
    pub simplify_mult1: u32,
    pub simplify_mult2: f64,
    pub simplify_max: u32,
    pub elim_vars: bool,

    pub gc_strategy: GcStrategy,
    pub gc_initial: u32,
    pub gc_increment: u32,
    pub gc_small_lbd: u32,
    pub gc_k: u8,

    pub minimize_lemmas: bool,
    pub core_minimize: bool,
    pub core_minimize_partial: bool,
    pub dyn_sub_res: bool,

    pub drat_check_unsat: bool,
    pub drat_check_sat: bool,
    pub drat_file: String,
    /// Whether proof logging is active.
    ///
    /// Requested by any of the `drat_*` options, but only honored when solving single threaded.
    pub drat: bool,

    pub branching_heuristic: BranchingHeuristic,
    pub anti_exploration: bool,
    pub step_size_init: f64,
    pub step_size_dec: f64,
    pub step_size_min: f64,
    pub reward_multiplier: f64,
    pub reward_offset: f64,

    /// VSIDS activity increment multiplier, in percent.
    pub variable_decay: u32,

    pub pb_solver: PbSolver,

    /// Set when the solver is used incrementally. Never changed by [`update`](SatConfig::update).
    pub incremental: bool,
}

impl SatConfig {
    /// Resolve a configuration from the given parameters.
    pub fn new(params: &Params) -> Result<SatConfig, SatParamError> {
        let mut config = SatConfig::with_defaults();
        config.incremental = false;
        config.update(params)?;
        Ok(config)
    }

    /// Starting point before the first update.
    fn with_defaults() -> SatConfig {
        SatConfig {
            max_memory: usize::MAX,
            max_conflicts: u32::MAX,
            random_seed: 0,
            random_freq: 0.0,
            burst_search: 0,
            num_threads: 1,
            local_search: false,
            local_search_threads: 0,
            restart: RestartStrategy::Luby,
            restart_initial: 0,
            restart_factor: 0.0,
            restart_max: 0,
            inprocess_max: 0,
            phase: PhaseSelection::Caching,
            phase_caching_on: 0,
            phase_caching_off: 0,
            lookahead_simplify: false,
            lookahead_simplify_bca: false,
            lookahead_reward: RewardType::MarchCu,
            lookahead_cube_fraction: 0.0,
            lookahead_cube_cutoff: 0,
            lookahead_global_autarky: false,
            simplify_mult1: 0,
            simplify_mult2: 0.0,
            simplify_max: 0,
            elim_vars: false,
            gc_strategy: GcStrategy::GluePsm,
            gc_initial: 0,
            gc_increment: 0,
            gc_small_lbd: 0,
            gc_k: 0,
            minimize_lemmas: false,
            core_minimize: false,
            core_minimize_partial: false,
            dyn_sub_res: false,
            drat_check_unsat: false,
            drat_check_sat: false,
            drat_file: String::new(),
            drat: false,
            branching_heuristic: BranchingHeuristic::Vsids,
            anti_exploration: false,
            step_size_init: 0.0,
            step_size_dec: 0.0,
            step_size_min: 0.0,
            reward_multiplier: 0.0,
            reward_offset: 0.0,
            variable_decay: 0,
            pb_solver: PbSolver::Circuit,
            incremental: false,
        }
    }

    /// Re-resolve every option from the given parameters.
    ///
    /// Options absent from `params` take their default value, not their previous one. Fields are
    /// written in order and the first invalid strategy selection aborts the update, leaving that
    /// field and all fields after it unchanged.
    pub fn update(&mut self, params: &Params) -> Result<(), SatParamError> {
        let p = SatParams::from_params(params);

        self.max_memory = megabytes_to_bytes(p.max_memory);

        self.restart = RestartStrategy::parse(&p.restart)?;
        self.phase = PhaseSelection::parse(&p.phase)?;
        self.phase_caching_on = p.phase_caching_on;
        self.phase_caching_off = p.phase_caching_off;

        self.restart_initial = p.restart_initial;
        self.restart_factor = p.restart_factor;
        self.restart_max = p.restart_max;
        self.inprocess_max = p.inprocess_max;

        self.random_freq = p.random_freq;
        self.random_seed = p.random_seed;
        if self.random_seed == 0 {
            self.random_seed = params.get_uint("random_seed", 0);
        }

        self.burst_search = p.burst_search;

        self.max_conflicts = p.max_conflicts;
        self.num_threads = p.threads;
        self.local_search = p.local_search;
        self.local_search_threads = p.local_search_threads;
        self.lookahead_simplify = p.lookahead_simplify;
        self.lookahead_simplify_bca = p.lookahead_simplify_bca;
        self.lookahead_reward = RewardType::parse(&p.lookahead_reward)?;
        self.lookahead_cube_fraction = p.lookahead_cube_fraction;
        self.lookahead_cube_cutoff = p.lookahead_cube_cutoff;
        self.lookahead_global_autarky = p.lookahead_global_autarky;

        self.simplify_mult1 = params.get_uint("simplify_mult1", 300);
        self.simplify_mult2 = params.get_double("simplify_mult2", 1.5);
        self.simplify_max = params.get_uint("simplify_max", 500_000);

        self.gc_strategy = GcStrategy::parse(&p.gc)?;
        self.gc_initial = p.gc_initial;
        self.gc_increment = p.gc_increment;
        self.gc_small_lbd = p.gc_small_lbd;
        self.gc_k = clamp_gc_k(p.gc_k);

        self.minimize_lemmas = p.minimize_lemmas;
        self.core_minimize = p.core_minimize;
        self.core_minimize_partial = p.core_minimize_partial;
        self.drat_check_unsat = p.drat_check_unsat;
        self.drat_check_sat = p.drat_check_sat;
        self.drat_file = p.drat_file.to_string();
        self.drat = proof_logging_active(&p);
        self.dyn_sub_res = p.dyn_sub_res;

        // An empty selection keeps the default, anything else must be a known heuristic.
        self.branching_heuristic = BranchingHeuristic::Vsids;
        if !p.branching_heuristic.is_empty() {
            self.branching_heuristic = BranchingHeuristic::parse(&p.branching_heuristic)?;
        }

        // Step size and reward settings of the CHB and LRB heuristics are fixed, following Liang,
        // Ganesh, Poupart and Czarnecki (AAAI 2016).
        self.anti_exploration = p.branching_anti_exploration;
        self.step_size_init = 0.40;
        self.step_size_dec = 0.000_001;
        self.step_size_min = 0.06;
        self.reward_multiplier = 0.9;
        self.reward_offset = 1_000_000.0;

        self.variable_decay = p.variable_decay;

        self.pb_solver = PbSolver::parse(&p.pb_solver)?;

        self.elim_vars = SimplifierParams::from_params(params).elim_vars;

        debug!(
            "sat config: restart={} phase={} gc={} lookahead_reward={} branching={} pb_solver={} \
             threads={} drat={}",
            self.restart,
            self.phase,
            self.gc_strategy,
            self.lookahead_reward,
            self.branching_heuristic,
            self.pb_solver,
            self.num_threads,
            self.drat,
        );

        Ok(())
    }

    /// Add descriptions of all public options.
    pub fn collect_param_descrs(descrs: &mut ParamDescrs) {
        SatParams::collect_param_descrs(descrs);
    }
}

fn clamp_gc_k(gc_k: u32) -> u8 {
    if gc_k > u32::from(u8::MAX) {
        debug!("gc_k {} exceeds {}, clamping", gc_k, u8::MAX);
        u8::MAX
    } else {
        gc_k as u8
    }
}

fn proof_logging_active(p: &SatParams) -> bool {
    let requested = p.drat_check_unsat || !p.drat_file.is_empty() || p.drat_check_sat;
    if requested && p.threads != 1 {
        debug!(
            "proof logging disabled, it requires a single thread but {} are configured",
            p.threads
        );
    }
    requested && p.threads == 1
}
