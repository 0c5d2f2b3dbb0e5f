// src/noyau/normalise.rs
//
// Pré-analyse de la formule, en une seule passe avant:
// - retire les espaces (seulement ' ', pas les autres blancs)
// - vérifie l'alphabet autorisé {0-9 . + - * / ( )}
// - réécrit le moins unaire en soustraction depuis zéro, parenthésée:
//     "-X"  =>  "(0-X)"
//
// Un '-' est unaire ssi c'est le premier caractère, ou si le caractère
// précédent (dans le flux AVANT réécriture) est un opérateur ou '('.
// La parenthèse fermante injectée est émise quand l'opérande se termine:
// fin du littéral numérique, ou fermeture du groupe parenthésé.
//
// NOTE: la réécriture plate "0-" (sans parenthèses) casse la précédence
// pour "3*-2" ; voir DESIGN.md.

use super::erreurs::ErreurCalc;

fn est_autorise(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | '*' | '/' | '(' | ')')
}

/// Ferme les "(0-" dont l'opérande vient de se terminer à la profondeur
/// courante (cascade pour les moins unaires imbriqués, ex: "--5").
fn ferme_echues(sortie: &mut String, fermetures: &mut Vec<i32>, profondeur: &mut i32) {
    while fermetures.last().copied() == Some(*profondeur) {
        sortie.push(')');
        fermetures.pop();
        *profondeur -= 1;
    }
}

/// Normalise une formule brute. Échoue (et avorte tout l'appel) au premier
/// caractère hors alphabet.
pub fn normalise(formule: &str) -> Result<String, ErreurCalc> {
    let brut: Vec<char> = formule.chars().filter(|&c| c != ' ').collect();

    let mut sortie = String::with_capacity(brut.len() + 8);
    // profondeurs (parenthèses injectées comprises) où une ')' est due
    let mut fermetures: Vec<i32> = Vec::new();
    let mut profondeur: i32 = 0;

    for (i, &c) in brut.iter().enumerate() {
        if !est_autorise(c) {
            return Err(ErreurCalc::CaractereInvalide(c));
        }

        let unaire =
            c == '-' && (i == 0 || matches!(brut[i - 1], '+' | '-' | '*' | '/' | '('));

        if unaire {
            sortie.push_str("(0-");
            profondeur += 1;
            fermetures.push(profondeur);
            continue;
        }

        // un opérateur ou une ')' clôt l'opérande du moins unaire en cours
        if matches!(c, '+' | '-' | '*' | '/' | ')') {
            ferme_echues(&mut sortie, &mut fermetures, &mut profondeur);
        }

        sortie.push(c);
        match c {
            '(' => profondeur += 1,
            ')' => profondeur -= 1,
            _ => {}
        }
    }

    // fin d'entrée: tout moins unaire encore ouvert se referme ici
    while fermetures.pop().is_some() {
        sortie.push(')');
    }

    Ok(sortie)
}
