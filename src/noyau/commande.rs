// src/noyau/commande.rs
//
// Événements d’entrée abstraits (touches clavier ou boutons) -> accumulateur.

use super::accumulateur::Accumulateur;
use super::jetons::Saisie;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commande {
    Saisie(Saisie),
    Evaluer,
    ToutEffacer,
    EffacerEntree,
}

impl Commande {
    /// Nom de touche -> commande.
    /// - "0".."9", "+", "-", "*", "/", "x", "X", "." : saisie
    /// - "Enter" ou "=" : évaluer
    /// - "Escape"       : tout effacer
    /// - "Backspace"    : effacer l’entrée
    /// Toute autre touche est ignorée (None).
    pub fn depuis_touche(nom: &str) -> Option<Self> {
        match nom {
            "Enter" | "=" => return Some(Commande::Evaluer),
            "Escape" => return Some(Commande::ToutEffacer),
            "Backspace" => return Some(Commande::EffacerEntree),
            _ => {}
        }

        let mut chars = nom.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Saisie::depuis_char(c).map(Commande::Saisie),
            _ => None,
        }
    }

    pub fn appliquer(self, acc: &mut Accumulateur) {
        match self {
            Commande::Saisie(s) => acc.soumettre(s),
            Commande::Evaluer => acc.evaluer(),
            Commande::ToutEffacer => acc.tout_effacer(),
            Commande::EffacerEntree => acc.effacer_entree(),
        }
    }
}
