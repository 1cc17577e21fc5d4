// src/noyau/jetons.rs

use super::operation::Operateur;

/// Jeton de la séquence en cours.
#[derive(Clone, Debug, PartialEq)]
pub enum Jeton {
    /// Opérande en cours de frappe, gardé en texte (conserve "0." etc.).
    Fragment(String),
    Op(Operateur),
}

impl Jeton {
    pub fn est_operateur(&self) -> bool {
        matches!(self, Jeton::Op(_))
    }

    /// Texte d’affichage du jeton (tel quel).
    pub fn texte(&self) -> String {
        match self {
            Jeton::Fragment(f) => f.clone(),
            Jeton::Op(op) => op.symbole().to_string(),
        }
    }
}

/// Saisie élémentaire, déjà classée.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Saisie {
    Chiffre(char),
    Point,
    Op(Operateur),
}

impl Saisie {
    /// Classe un caractère brut. None si ce n’est ni chiffre, ni point, ni opérateur.
    pub fn depuis_char(c: char) -> Option<Self> {
        if c.is_ascii_digit() {
            return Some(Saisie::Chiffre(c));
        }
        if c == '.' {
            return Some(Saisie::Point);
        }
        Operateur::depuis_symbole(c).map(Saisie::Op)
    }
}

/// Concatène les jetons (projection d’affichage brute).
pub fn format_jetons(jetons: &[Jeton]) -> String {
    jetons.iter().map(Jeton::texte).collect()
}
