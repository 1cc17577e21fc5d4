// src/noyau/operation.rs
//
// Opérateurs binaires + table de dispatch (symbole -> fonction).

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

/// Seule erreur du noyau : résultat non fini (division par zéro, dépassement, NaN).
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ErreurCalcul {
    #[error("résultat non fini: {resultat}")]
    NonFini { resultat: f64 },
}

type FnBinaire = fn(f64, f64) -> f64;

fn addition(a: f64, b: f64) -> f64 {
    a + b
}
fn soustraction(a: f64, b: f64) -> f64 {
    a - b
}
fn multiplication(a: f64, b: f64) -> f64 {
    a * b
}
fn division(a: f64, b: f64) -> f64 {
    a / b
}
fn gauche(a: f64, _b: f64) -> f64 {
    a
}

/// Table de dispatch. `x`/`X` sont des alias de `*`.
const TABLE: [(char, Operateur, FnBinaire); 6] = [
    ('+', Operateur::Plus, addition),
    ('-', Operateur::Moins, soustraction),
    ('*', Operateur::Fois, multiplication),
    ('x', Operateur::Fois, multiplication),
    ('X', Operateur::Fois, multiplication),
    ('/', Operateur::Divise, division),
];

impl Operateur {
    pub const TOUS: [Operateur; 4] = [
        Operateur::Plus,
        Operateur::Moins,
        Operateur::Fois,
        Operateur::Divise,
    ];

    /// Reconnaît un symbole (alias compris). None si inconnu.
    pub fn depuis_symbole(c: char) -> Option<Self> {
        TABLE.iter().find(|(s, _, _)| *s == c).map(|(_, op, _)| *op)
    }

    /// Symbole canonique (affichage).
    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
        }
    }

    /// Application vérifiée : Err si le résultat n’est pas fini.
    pub fn appliquer(self, a: f64, b: f64) -> Result<f64, ErreurCalcul> {
        let resultat = effectuer(a, b, self);
        if resultat.is_finite() {
            Ok(resultat)
        } else {
            Err(ErreurCalcul::NonFini { resultat })
        }
    }
}

/// Fonction pure : a (op) b, arithmétique flottante standard.
pub fn effectuer(a: f64, b: f64, op: Operateur) -> f64 {
    effectuer_symbole(a, b, op.symbole())
}

/// Variante par symbole : un symbole inconnu renvoie `a` tel quel.
pub fn effectuer_symbole(a: f64, b: f64, symbole: char) -> f64 {
    let f = TABLE
        .iter()
        .find(|(s, _, _)| *s == symbole)
        .map_or(gauche as FnBinaire, |(_, _, f)| *f);
    f(a, b)
}
