// src/noyau/erreurs.rs
//
// Taxonomie des erreurs du noyau.
// - CaractereInvalide / NombreMalForme : erreurs de parse => abort de l'appel
// - ExpressionInvalide : formule vide ou postfixe dégénéré (pile à sec)
//
// La division par zéro n'est PAS ici : c'est un soft-fail, rendu comme
// valeur sentinelle par l'évaluateur (voir eval.rs).

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurCalc {
    /// Symbole hors alphabet {0-9 . + - * / ( )}. Message verbatim imposé.
    #[error("DO NOT UNDERSTAND YOUR QUERY! PLEASE USE APPROPRIATE SYMBOLS")]
    CaractereInvalide(char),

    /// Littéral numérique illisible en f64 (ex: deux points décimaux).
    #[error("nombre mal formé: {0:?}")]
    NombreMalForme(String),

    /// Formule vide, ou pile d'évaluation à sec / non réduite.
    #[error("expression invalide")]
    ExpressionInvalide,
}
