// src/lib.rs
//
// Calculatrice NPI — évaluation d'expressions arithmétiques en f64.
// ------------------------------------------------------------------
// Pipeline (tout est local à l'appel, aucun état entre deux appels):
//
//   normalise -> jetons -> NPI (shunting-yard) -> évaluation par pile
//
// Point d'entrée unique: `eval_expression`. Il rend un nombre, la
// sentinelle division-par-zéro, ou une erreur de parse typée.

pub mod noyau;

pub use noyau::erreurs::ErreurCalc;
pub use noyau::eval::{
    eval_avec_demarche, eval_expression, DemarcheNoyau, Evaluation, MSG_DIVISION_PAR_ZERO,
};
