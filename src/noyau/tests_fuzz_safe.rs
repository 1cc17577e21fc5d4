//! Tests fuzz safe : flux de touches aléatoires sur l’accumulateur.
//!
//! - RNG déterministe (seed fixe)
//! - budget temps global
//! - invariants vérifiés après CHAQUE commande :
//!   * alternance Fragment / Op, premier jeton = Fragment, longueur <= 3
//!   * affichage = "0" si vide, INDICATEUR_ERREUR si erreur, sinon concaténation
//!   * au plus un point par fragment, aucun fragment vide
//!   * en erreur => séquence vide

use std::time::{Duration, Instant};

use super::accumulateur::{Accumulateur, INDICATEUR_ERREUR};
use super::commande::Commande;
use super::jetons::{format_jetons, Jeton, Saisie};
use super::operation::Operateur;

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
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération de commandes ------------------------ */

fn gen_commande(rng: &mut Rng) -> Commande {
    // pondération : beaucoup de chiffres, quelques opérateurs, rares effacements
    match rng.pick(20) {
        0..=9 => {
            let d = char::from_digit(rng.pick(10), 10).unwrap_or('0');
            Commande::Saisie(Saisie::Chiffre(d))
        }
        10 => Commande::Saisie(Saisie::Point),
        11..=14 => {
            let op = Operateur::TOUS[rng.pick(4) as usize];
            Commande::Saisie(Saisie::Op(op))
        }
        15 | 16 => Commande::Evaluer,
        17 | 18 => Commande::EffacerEntree,
        _ => Commande::ToutEffacer,
    }
}

/* ------------------------ Invariants ------------------------ */

fn check_invariants(acc: &Accumulateur, trace: &[Commande]) {
    let jetons = acc.jetons();

    assert!(jetons.len() <= 3, "séquence trop longue: {jetons:?} trace={trace:?}");

    for (i, j) in jetons.iter().enumerate() {
        let attendu_op = i % 2 == 1;
        assert_eq!(
            j.est_operateur(),
            attendu_op,
            "alternance rompue à {i}: {jetons:?} trace={trace:?}"
        );
        if let Jeton::Fragment(f) = j {
            assert!(!f.is_empty(), "fragment vide: {jetons:?}");
            assert!(f.matches('.').count() <= 1, "double point: {f:?}");
        }
    }

    let aff = acc.affichage();
    if acc.en_erreur() {
        assert_eq!(aff, INDICATEUR_ERREUR);
        assert!(jetons.is_empty(), "erreur avec jetons: {jetons:?}");
    } else if jetons.is_empty() {
        assert_eq!(aff, "0");
    } else {
        assert_eq!(aff, format_jetons(jetons));
    }
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_invariants_flux_aleatoires() {
    let start = Instant::now();
    let max = Duration::from_secs(5);

    let mut rng = Rng::new(0xC0FFEE);

    for _partie in 0..300 {
        budget(start, max);

        let mut acc = Accumulateur::new();
        let mut trace = Vec::with_capacity(64);

        for _ in 0..64 {
            let c = gen_commande(&mut rng);
            trace.push(c);
            c.appliquer(&mut acc);
            check_invariants(&acc, &trace);
        }
    }
}

#[test]
fn fuzz_determinisme() {
    // même seed => même affichage final, commande par commande
    let jouer = |seed: u64| -> Vec<String> {
        let mut rng = Rng::new(seed);
        let mut acc = Accumulateur::new();
        (0..200)
            .map(|_| {
                gen_commande(&mut rng).appliquer(&mut acc);
                acc.affichage()
            })
            .collect()
    };

    for seed in [1u64, 42, 2024] {
        assert_eq!(jouer(seed), jouer(seed), "seed={seed}");
    }
}

#[test]
fn fuzz_tout_effacer_toujours_canonique() {
    let start = Instant::now();
    let max = Duration::from_secs(3);

    let mut rng = Rng::new(7);

    for _ in 0..200 {
        budget(start, max);

        let mut acc = Accumulateur::new();
        let n = rng.pick(40);
        for _ in 0..n {
            gen_commande(&mut rng).appliquer(&mut acc);
        }
        Commande::ToutEffacer.appliquer(&mut acc);
        assert_eq!(acc, Accumulateur::new());
    }
}
