//! Noyau de la calculette à touches (sans UI)
//!
//! Organisation interne :
//! - operation.rs    : opérateurs + table de dispatch (symbole -> fonction)
//! - jetons.rs       : jetons (fragment / opérateur) + classement des saisies
//! - nombre.rs       : lecture / écriture des nombres (f64)
//! - accumulateur.rs : machine à états (saisie, CE, C, =)
//! - commande.rs     : touches / boutons -> commandes

pub mod accumulateur;
pub mod commande;
pub mod jetons;
pub mod nombre;
pub mod operation;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use accumulateur::Accumulateur;
pub use commande::Commande;
pub use jetons::Saisie;
pub use operation::Operateur;
