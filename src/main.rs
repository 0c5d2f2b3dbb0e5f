// src/main.rs
//
// Calculatrice NPI — point d'entrée CLI
// --------------------------------------
// Usage:
//   calculatrice_npi              REPL interactif
//   calculatrice_npi "2+3*4"      évalue une expression et sort
//   calculatrice_npi -d "2+3*4"   idem, avec la démarche (jetons, NPI)
//
// Politique d'erreurs côté CLI:
// - erreur de parse  => message sur stderr, code de sortie 1 (one-shot)
//                       ou simple ligne d'erreur (REPL, on continue)
// - division par zéro => ce n'est PAS une erreur: la sentinelle s'affiche
//                        comme un résultat normal

use std::env;
use std::process::ExitCode;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use calculatrice_npi::{eval_avec_demarche, eval_expression, DemarcheNoyau};

const USAGE: &str = "usage: calculatrice_npi [-d|--demarche] [expression]";

fn affiche_demarche(d: &DemarcheNoyau) {
    println!("  normalisée : {}", d.normalisee);
    println!("  jetons     : {}", d.jetons);
    println!("  npi        : {}", d.npi);
}

fn evalue_une(expr: &str, demarche: bool) -> ExitCode {
    if demarche {
        match eval_avec_demarche(expr) {
            Ok((resultat, d)) => {
                affiche_demarche(&d);
                println!("{resultat}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            }
        }
    } else {
        match eval_expression(expr) {
            Ok(resultat) => {
                println!("{resultat}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            }
        }
    }
}

/// REPL: une expression par ligne. `:demarche` bascule la trace,
/// `quit` ou Ctrl-D pour sortir, Ctrl-C efface la ligne en cours.
fn repl() -> ExitCode {
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("terminal indisponible: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut demarche = false;

    loop {
        match rl.readline("npi> ") {
            Ok(ligne) => {
                let ligne = ligne.trim();
                if ligne.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(ligne);

                match ligne {
                    "quit" | "exit" => break,
                    ":demarche" => {
                        demarche = !demarche;
                        println!(
                            "démarche {}",
                            if demarche { "activée" } else { "désactivée" }
                        );
                        continue;
                    }
                    _ => {}
                }

                match eval_avec_demarche(ligne) {
                    Ok((resultat, d)) => {
                        if demarche {
                            affiche_demarche(&d);
                        }
                        println!("{resultat}");
                    }
                    Err(e) => eprintln!("{e}"),
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("erreur de lecture: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    let (demarche, reste): (bool, &[String]) = match args.first().map(String::as_str) {
        Some("-d") | Some("--demarche") => (true, &args[1..]),
        Some("-h") | Some("--help") => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        _ => (false, &args[..]),
    };

    if reste.is_empty() {
        if demarche {
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
        repl()
    } else {
        // plusieurs arguments => une seule expression (le shell a coupé
        // sur les espaces, l'évaluateur les ignore de toute façon)
        evalue_une(&reste.join(" "), demarche)
    }
}
