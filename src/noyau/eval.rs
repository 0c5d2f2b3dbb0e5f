//! Noyau — évaluation (pipeline réel)
//!
//! normalise -> jetons -> NPI (shunting-yard) -> évaluation par pile
//!
//! Remarque : la division par zéro est un soft-fail. Elle est rattrapée
//! ICI et rendue comme valeur sentinelle (`Evaluation::DivisionParZero`),
//! jamais propagée en `ErreurCalc` — les erreurs de parse, elles,
//! avortent l'appel sans résultat partiel.

use std::fmt;

use super::erreurs::ErreurCalc;
use super::jetons::{format_jetons, tokenize, Jeton};
use super::normalise::normalise;
use super::rpn::vers_npi;

/// Message verbatim rendu (pas levé) quand une division par zéro survient.
pub const MSG_DIVISION_PAR_ZERO: &str = "DO NOT DIVIDE BY ZERO! IT IS FORBIDDEN, STUPIDO!";

/// Résultat terminal d'une évaluation réussie côté parse:
/// un nombre, ou la sentinelle division-par-zéro.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Evaluation {
    Nombre(f64),
    DivisionParZero,
}

impl Evaluation {
    pub fn nombre(self) -> Option<f64> {
        match self {
            Self::Nombre(n) => Some(n),
            Self::DivisionParZero => None,
        }
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nombre(n) => write!(f, "{n}"),
            Self::DivisionParZero => f.write_str(MSG_DIVISION_PAR_ZERO),
        }
    }
}

/// Formes intermédiaires du pipeline (affichage “démarche”).
#[derive(Default, Clone, Debug)]
pub struct DemarcheNoyau {
    pub normalisee: String,
    pub jetons: String,
    pub npi: String,
}

/// API publique : évalue une expression arithmétique et retourne:
/// - `Evaluation::Nombre(f64)` pour toute arithmétique valide
/// - `Evaluation::DivisionParZero` (sentinelle) si un x/0 survient
/// - `Err(ErreurCalc)` pour une entrée invalide (caractère, nombre, vide)
///
/// Chaque appel est indépendant et sans état: tout est local à l'appel,
/// seul l'ensemble fermé d'opérateurs est partagé (immuable).
pub fn eval_expression(formule: &str) -> Result<Evaluation, ErreurCalc> {
    let (resultat, _d) = eval_avec_demarche(formule)?;
    Ok(resultat)
}

/// Comme [`eval_expression`], mais rend aussi les formes intermédiaires.
pub fn eval_avec_demarche(
    formule: &str,
) -> Result<(Evaluation, DemarcheNoyau), ErreurCalc> {
    // 1) Normalisation (espaces, alphabet, moins unaire)
    let normalisee = normalise(formule)?;
    if normalisee.is_empty() {
        return Err(ErreurCalc::ExpressionInvalide);
    }

    // 2) Jetons
    let jetons = tokenize(&normalisee)?;
    let jetons_txt = format_jetons(&jetons);

    // 3) NPI
    let npi = vers_npi(&jetons);
    let npi_txt = format_jetons(&npi);

    // 4) Évaluation par pile
    let resultat = calc_npi(&npi)?;

    let d = DemarcheNoyau {
        normalisee,
        jetons: jetons_txt,
        npi: npi_txt,
    };

    Ok((resultat, d))
}

/// Évalue une suite postfixe avec une pile d'opérandes.
///
/// - Num : empile
/// - Op  : dépile y puis x (x = opérande gauche), empile f(x, y)
/// - parenthèses orphelines (pile non équilibrée en amont) : ignorées
///
/// En fin de suite, le résultat est le FOND de la pile: une '(' jamais
/// fermée peut laisser des résidus au-dessus, le premier opérande réduit
/// reste le résultat (politique d'absorption silencieuse, voir rpn.rs).
fn calc_npi(npi: &[Jeton]) -> Result<Evaluation, ErreurCalc> {
    let mut pile: Vec<f64> = Vec::new();

    for &jeton in npi {
        match jeton {
            Jeton::Num(n) => pile.push(n),

            Jeton::Op(op) => {
                let y = pile.pop().ok_or(ErreurCalc::ExpressionInvalide)?;
                let x = pile.pop().ok_or(ErreurCalc::ExpressionInvalide)?;
                if op.divise_par_zero(y) {
                    return Ok(Evaluation::DivisionParZero);
                }
                pile.push(op.applique(x, y));
            }

            Jeton::LPar | Jeton::RPar => {}
        }
    }

    match pile.first() {
        Some(&n) => Ok(Evaluation::Nombre(n)),
        None => Err(ErreurCalc::ExpressionInvalide),
    }
}
