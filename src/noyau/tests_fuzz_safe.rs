//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - chaque expression générée porte sa valeur attendue (calculée en
//!   parallèle de la génération, parenthésage total => pas d'ambiguïté)
//! - invariant clé : jamais de panique, même sur entrée bruitée

use std::time::{Duration, Instant};

use super::erreurs::ErreurCalc;
use super::eval::{eval_expression, Evaluation};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération (expr, valeur attendue) ------------------------ */

fn gen_atome(rng: &mut Rng) -> (String, f64) {
    if rng.coin() {
        let n = rng.pick(100);
        (format!("{n}"), n as f64)
    } else {
        // décimal à une décimale, ex: 7.5
        let ent = rng.pick(50);
        let dec = rng.pick(10);
        let v = ent as f64 + dec as f64 / 10.0;
        (format!("{ent}.{dec}"), v)
    }
}

/// Génère une expression totalement parenthésée et sa valeur f64 attendue
/// (mêmes opérations flottantes dans le même ordre => tolérance serrée).
fn gen_expr(rng: &mut Rng, profondeur: usize) -> (String, f64) {
    if profondeur == 0 {
        return gen_atome(rng);
    }

    let (sg, vg) = gen_expr(rng, profondeur - 1);
    let (sd, vd) = gen_expr(rng, profondeur - 1);

    match rng.pick(5) {
        0 => (format!("({sg}+{sd})"), vg + vd),
        1 => (format!("({sg}-{sd})"), vg - vd),
        2 => (format!("({sg}*{sd})"), vg * vd),
        3 => {
            // pas de division par des quasi-zéros dans le fuzz nominal:
            // la sentinelle a ses propres tests
            if vd.abs() < 1e-6 {
                (format!("({sg}+{sd})"), vg + vd)
            } else {
                (format!("({sg}/{sd})"), vg / vd)
            }
        }
        // moins unaire devant un groupe: "-(x)+y" => "(0-(x))+y"
        _ => (format!("(-({sg})+{sd})"), (0.0 - vg) + vd),
    }
}

fn insere_espaces(rng: &mut Rng, s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 2);
    for c in s.chars() {
        if rng.pick(4) == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_valeurs_attendues() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // Même seed => mêmes expressions => mêmes sorties (déterminisme)
    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..300 {
        budget(t0, max);

        let (expr, attendu) = gen_expr(&mut rng, 4);
        match eval_expression(&expr) {
            Ok(Evaluation::Nombre(obtenu)) => {
                let tol = 1e-9 * attendu.abs().max(1.0);
                assert!(
                    (obtenu - attendu).abs() <= tol,
                    "expr={expr:?} obtenu={obtenu} attendu={attendu}"
                );
            }
            autre => panic!("expr={expr:?} => {autre:?}"),
        }
    }
}

#[test]
fn fuzz_safe_espaces_sans_effet() {
    let t0 = Instant::now();
    let max = Duration::from_millis(400);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..150 {
        budget(t0, max);

        let (expr, _attendu) = gen_expr(&mut rng, 3);
        let espacee = insere_espaces(&mut rng, &expr);
        assert_eq!(
            eval_expression(&expr),
            eval_expression(&espacee),
            "expr={expr:?} espacée={espacee:?}"
        );
    }
}

#[test]
fn fuzz_safe_bruit_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(400);

    let mut rng = Rng::new(0xDEAD_BEEF_u64);
    let alphabet: &[char] = &[
        '0', '1', '9', '.', '+', '-', '*', '/', '(', ')', ' ', 'a', '^',
    ];

    for _ in 0..500 {
        budget(t0, max);

        let long = 1 + rng.pick(24) as usize;
        let bruit: String = (0..long)
            .map(|_| alphabet[rng.pick(alphabet.len() as u32) as usize])
            .collect();

        // tout est accepté SAUF une panique: nombre, sentinelle, ou erreur typée
        match eval_expression(&bruit) {
            Ok(_) => {}
            Err(
                ErreurCalc::CaractereInvalide(_)
                | ErreurCalc::NombreMalForme(_)
                | ErreurCalc::ExpressionInvalide,
            ) => {}
        }
    }
}

#[test]
fn fuzz_safe_determinisme_seed() {
    // même seed, deux passes: sorties identiques terme à terme
    let gen = |seed: u64| -> Vec<Result<Evaluation, ErreurCalc>> {
        let mut rng = Rng::new(seed);
        (0..60)
            .map(|_| {
                let (expr, _v) = gen_expr(&mut rng, 3);
                eval_expression(&expr)
            })
            .collect()
    };

    assert_eq!(gen(42), gen(42));
}
