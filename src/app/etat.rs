//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder L’accumulateur de l’application (une instance, créée avec l’app)
//! et offrir un seul point d’entrée pour toutes les commandes (boutons + clavier).
//!
//! Contrats :
//! - Aucune arithmétique ici : tout passe par le noyau.
//! - L’affichage est recalculé après chaque commande.

use log::debug;

use crate::noyau::{Accumulateur, Commande};

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- noyau ---
    pub acc: Accumulateur,

    // --- sortie ---
    pub ecran: String, // dernière projection d’affichage
}

impl Default for AppCalc {
    fn default() -> Self {
        let acc = Accumulateur::new();
        let ecran = acc.affichage();
        Self { acc, ecran }
    }
}

impl AppCalc {
    /// Applique une commande puis relit l’affichage.
    pub fn executer(&mut self, cmd: Commande) {
        cmd.appliquer(&mut self.acc);
        self.ecran = self.acc.affichage();
        debug!("{cmd:?} -> {:?} {:?}", self.ecran, self.acc.jetons());
    }

    /// Touche clavier (nom de touche : "7", "+", "Enter"...). Touche inconnue : ignorée.
    /// Renvoie true si la touche a été consommée.
    pub fn touche(&mut self, nom: &str) -> bool {
        match Commande::depuis_touche(nom) {
            Some(cmd) => {
                self.executer(cmd);
                true
            }
            None => false,
        }
    }

    /// Texte saisi (un événement peut porter plusieurs caractères).
    pub fn texte(&mut self, s: &str) {
        let mut buf = [0u8; 4];
        for c in s.chars() {
            self.touche(c.encode_utf8(&mut buf));
        }
    }

    /// C : remise à zéro totale.
    pub fn reset_total(&mut self) {
        self.executer(Commande::ToutEffacer);
    }
}
