//! Noyau — accumulateur / évaluateur (machine à états)
//!
//! Séquence de jetons alternés : opérande, opérateur, opérande.
//! - `soumettre`      : chiffre / point / opérateur
//! - `effacer_entree` : retire un caractère (ou un opérateur) en fin de séquence
//! - `tout_effacer`   : retour à l’état initial
//! - `evaluer`        : réduit la séquence à un seul résultat (+ “=” répété)
//!
//! Contrats :
//! - Les jetons alternent strictement Fragment / Op, en commençant par un Fragment.
//! - Aucune erreur ne sort d’ici : un résultat non fini passe en état d’erreur
//!   (affichage = INDICATEUR_ERREUR) et vide la séquence.

use log::{info, warn};

use super::jetons::{format_jetons, Jeton, Saisie};
use super::nombre::{ecrire, lire};
use super::operation::{ErreurCalcul, Operateur};

/// Texte affiché après un résultat non fini.
pub const INDICATEUR_ERREUR: &str = "Error";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Accumulateur {
    jetons: Vec<Jeton>,

    // (dernier opérateur, dernier second opérande) pour “=” répété
    memoire: Option<(Operateur, f64)>,

    // vrai tant que l’affichage n’a pas été recalculé depuis l’erreur
    erreur: bool,
}

impl Accumulateur {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn jetons(&self) -> &[Jeton] {
        &self.jetons
    }

    pub fn memoire(&self) -> Option<(Operateur, f64)> {
        self.memoire
    }

    pub fn en_erreur(&self) -> bool {
        self.erreur
    }

    /// Projection d’affichage : "0" si vide, sinon la concaténation des jetons.
    pub fn affichage(&self) -> String {
        if self.erreur {
            return INDICATEUR_ERREUR.to_string();
        }
        if self.jetons.is_empty() {
            return "0".to_string();
        }
        format_jetons(&self.jetons)
    }

    /// L’affichage est recalculé : l’indicateur d’erreur disparaît.
    fn rafraichir(&mut self) {
        self.erreur = false;
    }

    fn dernier_est_operateur(&self) -> bool {
        self.jetons.last().is_some_and(Jeton::est_operateur)
    }

    /* ------------------------ Saisie ------------------------ */

    pub fn soumettre(&mut self, saisie: Saisie) {
        match saisie {
            Saisie::Chiffre(c) => self.soumettre_chiffre(Some(c)),
            Saisie::Point => self.soumettre_chiffre(None),
            Saisie::Op(op) => self.soumettre_operateur(op),
        }
    }

    /// `None` = point décimal.
    fn soumettre_chiffre(&mut self, chiffre: Option<char>) {
        match self.jetons.last_mut() {
            Some(Jeton::Fragment(f)) => match chiffre {
                // un seul point par opérande
                None if f.contains('.') => {}
                None => f.push('.'),
                Some(c) => f.push(c),
            },
            // vide ou opérateur en fin : nouvel opérande
            _ => {
                let f = match chiffre {
                    None => "0.".to_string(),
                    Some(c) => c.to_string(),
                };
                self.jetons.push(Jeton::Fragment(f));
            }
        }
        self.rafraichir();
    }

    fn soumettre_operateur(&mut self, op: Operateur) {
        if self.jetons.is_empty() {
            self.jetons.push(Jeton::Fragment("0".to_string()));
        }

        if self.dernier_est_operateur() {
            // substitution : seul le dernier opérateur tapé compte
            if let Some(dernier) = self.jetons.last_mut() {
                *dernier = Jeton::Op(op);
            }
        } else if self.jetons.len() >= 3 {
            // enchaînement : on réduit d’abord a op b
            self.evaluer();
            if self.erreur {
                // opérateur abandonné, l’erreur reste visible
                return;
            }
            self.jetons.push(Jeton::Op(op));
        } else {
            self.jetons.push(Jeton::Op(op));
        }

        self.rafraichir();
    }

    /* ------------------------ Effacements ------------------------ */

    /// CE : retire le dernier caractère (ou l’opérateur final en entier).
    /// Ne touche pas à la mémoire.
    pub fn effacer_entree(&mut self) {
        let Some(dernier) = self.jetons.last_mut() else {
            return;
        };

        let vide = match dernier {
            Jeton::Op(_) => true,
            Jeton::Fragment(f) => {
                f.pop();
                f.is_empty()
            }
        };
        if vide {
            self.jetons.pop();
        }

        self.rafraichir();
    }

    /// C : séquence vide + mémoire effacée.
    pub fn tout_effacer(&mut self) {
        self.jetons.clear();
        self.memoire = None;
        self.rafraichir();
    }

    /* ------------------------ Évaluation ------------------------ */

    pub fn evaluer(&mut self) {
        if self.jetons.len() >= 3 {
            self.evaluer_triplet();
            return;
        }

        let repetition = match (self.jetons.as_slice(), self.memoire) {
            ([Jeton::Fragment(f)], Some((op, b))) => Some((lire(f), op, b)),
            _ => None,
        };

        if let Some((a, op, b)) = repetition {
            match op.appliquer(a, b) {
                Ok(r) => {
                    info!("répétition: {a} {} {b} = {r}", op.symbole());
                    self.poser_resultat(r);
                }
                Err(e) => {
                    // mémoire conservée ici (contrairement au cas triplet)
                    self.jetons.clear();
                    self.signaler(e);
                }
            }
        }
    }

    fn evaluer_triplet(&mut self) {
        let Jeton::Op(op) = self.jetons[1] else {
            return;
        };
        let a = lire(&self.jetons[0].texte());
        let b = lire(&format_jetons(&self.jetons[2..]));

        match op.appliquer(a, b) {
            Ok(r) => {
                info!("évaluation: {a} {} {b} = {r}", op.symbole());
                self.memoire = Some((op, b));
                self.poser_resultat(r);
            }
            Err(e) => {
                self.jetons.clear();
                self.memoire = None;
                self.signaler(e);
            }
        }
    }

    fn poser_resultat(&mut self, r: f64) {
        self.jetons = vec![Jeton::Fragment(ecrire(r))];
        self.rafraichir();
    }

    fn signaler(&mut self, e: ErreurCalcul) {
        warn!("{e}");
        self.erreur = true;
    }
}
