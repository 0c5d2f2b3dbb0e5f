// src/noyau/rpn.rs
//
// Shunting-yard -> NPI (postfixe)
//
// Règles:
// - Num : sortie directe
// - Op  : dépile tant que le sommet est un opérateur de précédence >=
//         (associativité gauche stricte: égalité => on dépile aussi),
//         puis empile
// - '(' : empile
// - ')' : dépile vers la sortie jusqu'à la '(' correspondante (la '('
//         est jetée, pas émise); pile vide sans '(' => on s'arrête en
//         silence (parenthèses non équilibrées: cas limite documenté,
//         pas une erreur dure — voir DESIGN.md)
// - fin : vide la pile dans la sortie, '(' orphelines comprises
//         (l'évaluateur les ignore)

use super::jetons::Jeton;

/// Convertit une suite de jetons en NPI (notation polonaise inversée).
///
/// Exemple:
///   jetons: [2, +, 3, *, 4]
///   npi:    [2, 3, 4, *, +]
pub fn vers_npi(jetons: &[Jeton]) -> Vec<Jeton> {
    let mut sortie: Vec<Jeton> = Vec::with_capacity(jetons.len());
    let mut pile: Vec<Jeton> = Vec::new();

    for &jeton in jetons {
        match jeton {
            Jeton::Num(_) => sortie.push(jeton),

            Jeton::Op(op) => {
                while let Some(&sommet) = pile.last() {
                    match sommet {
                        Jeton::Op(haut) if haut.precedence() >= op.precedence() => {
                            pile.pop();
                            sortie.push(sommet);
                        }
                        _ => break,
                    }
                }
                pile.push(jeton);
            }

            Jeton::LPar => pile.push(jeton),

            Jeton::RPar => {
                // dépile jusqu'à '(' ; une ')' en trop vide simplement la pile
                while let Some(sommet) = pile.pop() {
                    if matches!(sommet, Jeton::LPar) {
                        break;
                    }
                    sortie.push(sommet);
                }
            }
        }
    }

    while let Some(sommet) = pile.pop() {
        sortie.push(sommet);
    }

    sortie
}
