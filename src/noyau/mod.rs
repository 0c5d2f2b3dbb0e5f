//! Noyau NPI
//!
//! Organisation interne :
//! - erreurs.rs   : taxonomie des erreurs (thiserror)
//! - normalise.rs : espaces + alphabet + moins unaire
//! - jetons.rs    : table d'opérateurs (fermée) + tokenisation
//! - rpn.rs       : shunting-yard (infixe -> postfixe)
//! - eval.rs      : évaluation par pile + pipeline complet

pub mod erreurs;
pub mod eval;
pub mod jetons;
pub mod normalise;
pub mod rpn;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreurs::ErreurCalc;
pub use eval::{eval_expression, Evaluation, MSG_DIVISION_PAR_ZERO};
