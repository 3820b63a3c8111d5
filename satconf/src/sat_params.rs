//! Option schemas of the SAT solver.
use crate::schema::{DocDefault, ParamSchema};
use crate::symbol::Symbol;

/// Public options of the SAT solver.
///
/// Every option can be given under its bare name or qualified as `sat.<name>`.
#[derive(Clone, Debug, PartialEq, DocDefault, ParamSchema)]
#[param_module = "sat"]
pub struct SatParams {
    /// Maximum amount of memory in megabytes. (Default: u32::MAX)
    pub max_memory: u32,

    /// Phase selection strategy: always_false, always_true, caching or random.
    /// (Default: "caching".into())
    pub phase: Symbol,

    /// Phase caching on period (in number of conflicts). (Default: 400)
    pub phase_caching_on: u32,

    /// Phase caching off period (in number of conflicts). (Default: 100)
    pub phase_caching_off: u32,

    /// Restart strategy: luby or geometric. (Default: "luby".into())
    pub restart: Symbol,

    /// Initial restart bound (number of conflicts). (Default: 100)
    pub restart_initial: u32,

    /// Restart increment factor for the geometric strategy. (Default: 1.5)
    pub restart_factor: f64,

    /// Maximal number of restarts. (Default: u32::MAX)
    pub restart_max: u32,

    /// Maximal number of inprocessing passes. (Default: u32::MAX)
    pub inprocess_max: u32,

    /// Frequency of random case splits. (Default: 0.01)
    pub random_freq: f64,

    /// Random seed. (Default: 0)
    pub random_seed: u32,

    /// Number of conflicts before the first global simplification. (Default: 100)
    pub burst_search: u32,

    /// Maximum number of conflicts. (Default: u32::MAX)
    pub max_conflicts: u32,

    /// Number of parallel threads to use. (Default: 1)
    pub threads: u32,

    /// Use local search instead of CDCL. (Default: false)
    pub local_search: bool,

    /// Number of local search threads used to find a satisfying assignment. (Default: 0)
    pub local_search_threads: u32,

    /// Use the lookahead solver during simplification. (Default: false)
    pub lookahead_simplify: bool,

    /// Add learned binary clauses as part of lookahead simplification. (Default: false)
    pub lookahead_simplify_bca: bool,

    /// Lookahead heuristic: ternary, heule_schur, heuleu, unit or march_cu.
    /// (Default: "march_cu".into())
    pub lookahead_reward: Symbol,

    /// Adaptive fraction used to create lookahead cubes when lookahead_cube_cutoff is 0.
    /// (Default: 0.4)
    pub lookahead_cube_fraction: f64,

    /// Cut-off depth to create cubes, only enabled when non-zero. (Default: 10)
    pub lookahead_cube_cutoff: u32,

    /// Prefer to branch on variables that occur in reduced clauses. (Default: false)
    pub lookahead_global_autarky: bool,

    /// Garbage collection strategy: psm, glue, glue_psm, psm_glue or dyn_psm.
    /// (Default: "glue_psm".into())
    pub gc: Symbol,

    /// Learned clause garbage collection frequency. (Default: 20000)
    pub gc_initial: u32,

    /// Increment of the garbage collection threshold. (Default: 500)
    pub gc_increment: u32,

    /// Learned clauses with a smaller LBD are never deleted (dyn_psm only). (Default: 3)
    pub gc_small_lbd: u32,

    /// Learned clauses inactive for k gc rounds are deleted (dyn_psm only, at most 255).
    /// (Default: 7)
    pub gc_k: u32,

    /// Minimize learned clauses. (Default: true)
    pub minimize_lemmas: bool,

    /// Minimize computed cores. (Default: false)
    pub core_minimize: bool,

    /// Apply partial (cheap) core minimization. (Default: false)
    pub core_minimize_partial: bool,

    /// Build up an internal proof and check it. (Default: false)
    pub drat_check_unsat: bool,

    /// Build up an internal trace and check the satisfying assignment. (Default: false)
    pub drat_check_sat: bool,

    /// File to dump DRAT proofs to. (Default: Symbol::default())
    pub drat_file: Symbol,

    /// Dynamic subsumption resolution for minimizing learned clauses. (Default: true)
    pub dyn_sub_res: bool,

    /// Branching heuristic: vsids, chb or lrb. (Default: "vsids".into())
    pub branching_heuristic: Symbol,

    /// Apply the anti-exploration heuristic for branch selection. (Default: false)
    pub branching_anti_exploration: bool,

    /// Multiplier (divided by 100) for the VSIDS activity increment. (Default: 120)
    pub variable_decay: u32,

    /// Handling of pseudo-boolean constraints: circuit, sorting, totalizer or solver.
    /// (Default: "circuit".into())
    pub pb_solver: Symbol,
}

/// Options of the SAT simplifier.
#[derive(Clone, Debug, PartialEq, DocDefault, ParamSchema)]
#[param_module = "sat"]
pub struct SimplifierParams {
    /// Enable variable elimination during simplification. (Default: true)
    pub elim_vars: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::descrs::{ParamDescrs, ParamKind};
    use crate::params::Params;

    #[test]
    fn defaults() {
        let params = SatParams::from_params(&Params::new());

        assert_eq!(params, SatParams::default());
        assert_eq!(params.restart, "luby");
        assert_eq!(params.phase, "caching");
        assert_eq!(params.gc, "glue_psm");
        assert_eq!(params.lookahead_reward, "march_cu");
        assert_eq!(params.branching_heuristic, "vsids");
        assert_eq!(params.pb_solver, "circuit");
        assert_eq!(params.threads, 1);
        assert_eq!(params.gc_k, 7);
        assert_eq!(params.max_conflicts, u32::MAX);
        assert!(params.drat_file.is_empty());

        assert!(SimplifierParams::from_params(&Params::new()).elim_vars);
    }

    #[test]
    fn descriptions() {
        let mut descrs = ParamDescrs::new();
        SatParams::collect_param_descrs(&mut descrs);

        assert_eq!(descrs.len(), 38);
        assert!(!descrs.contains("elim_vars"));
        assert!(!descrs.contains("simplify_mult1"));

        let gc = descrs.get("gc").unwrap();
        assert_eq!(gc.kind, ParamKind::Symbol);
        assert_eq!(gc.module, "sat");
        assert_eq!(gc.default, "\"glue_psm\"");
        assert_eq!(
            gc.description,
            "Garbage collection strategy: psm, glue, glue_psm, psm_glue or dyn_psm."
        );

        for descr in descrs.iter() {
            assert!(!descr.description.is_empty(), "{} undocumented", descr.name);
            assert!(!descr.description.contains("Default"), "{}", descr.name);
        }
    }
}
