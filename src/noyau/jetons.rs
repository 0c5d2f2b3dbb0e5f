// src/noyau/jetons.rs

use num_traits::Zero;

use super::erreurs::ErreurCalc;

/// Table des opérateurs: ensemble fermé, précédence + fonction binaire.
/// * et / (rang 2) lient plus fort que + et - (rang 1).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Division,
}

impl Operateur {
    pub fn depuis_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Moins),
            '*' => Some(Self::Fois),
            '/' => Some(Self::Division),
            _ => None,
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            Self::Plus | Self::Moins => 1,
            Self::Fois | Self::Division => 2,
        }
    }

    /// Applique l'opération binaire: x = opérande gauche, y = droite.
    /// La garde division par zéro vit dans l'évaluateur (soft-fail), pas ici.
    pub fn applique(self, x: f64, y: f64) -> f64 {
        match self {
            Self::Plus => x + y,
            Self::Moins => x - y,
            Self::Fois => x * y,
            Self::Division => x / y,
        }
    }

    /// Vrai ssi appliquer `self` avec `y` à droite diviserait par zéro.
    pub fn divise_par_zero(self, y: f64) -> bool {
        self == Self::Division && y.is_zero()
    }

    pub fn symbole(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Moins => '-',
            Self::Fois => '*',
            Self::Division => '/',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Jeton {
    Num(f64),
    Op(Operateur),
    LPar,
    RPar,
}

/// Tokenize une chaîne normalisée en jetons.
/// - chiffres et '.' s'accumulent dans un littéral en cours
/// - tout autre caractère vide d'abord le littéral (parse f64),
///   puis est émis comme opérateur ou parenthèse
/// - littéral illisible (ex: "1.2.3") => NombreMalForme au moment du flush
pub fn tokenize(s: &str) -> Result<Vec<Jeton>, ErreurCalc> {
    let mut out = Vec::new();
    let mut litteral = String::new();

    for c in s.chars() {
        if c.is_ascii_digit() || c == '.' {
            litteral.push(c);
            continue;
        }

        if !litteral.is_empty() {
            out.push(flush_litteral(&mut litteral)?);
        }

        if let Some(op) = Operateur::depuis_char(c) {
            out.push(Jeton::Op(op));
        } else if c == '(' {
            out.push(Jeton::LPar);
        } else if c == ')' {
            out.push(Jeton::RPar);
        }
        // rien d'autre possible: la normalisation a déjà validé l'alphabet
    }

    if !litteral.is_empty() {
        out.push(flush_litteral(&mut litteral)?);
    }

    Ok(out)
}

fn flush_litteral(litteral: &mut String) -> Result<Jeton, ErreurCalc> {
    let n: f64 = litteral
        .parse()
        .map_err(|_| ErreurCalc::NombreMalForme(litteral.clone()))?;
    litteral.clear();
    Ok(Jeton::Num(n))
}

/// Format utilitaire (démarche/debug) : liste de jetons en texte.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    let mut out = Vec::new();
    for j in jetons {
        let s = match j {
            Jeton::Num(n) => format!("{n}"),
            Jeton::Op(op) => op.symbole().to_string(),
            Jeton::LPar => "(".to_string(),
            Jeton::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
