// src/noyau/nombre.rs
//
// Lecture / écriture des nombres du noyau (f64).
// - lecture : préfixe numérique le plus long (sinon NaN)
// - écriture : plus courte décimale aller-retour, exposant hors [1e-6, 1e21)

/// Longueur (en octets) du plus long préfixe numérique valide de `s`.
/// Forme acceptée : [+-]? chiffres* ('.' chiffres*)? ([eE] [+-]? chiffres+)?
/// avec au moins un chiffre dans la mantisse.
fn prefixe_numerique(s: &str) -> Option<usize> {
    let b = s.as_bytes();
    let mut i = 0;

    if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
        i += 1;
    }

    let debut_mantisse = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    let mut chiffres = i - debut_mantisse;

    if i < b.len() && b[i] == b'.' {
        i += 1;
        let debut_frac = i;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        chiffres += i - debut_frac;
    }

    if chiffres == 0 {
        return None;
    }

    // exposant : seulement s’il est complet
    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let debut_exp = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > debut_exp {
            i = j;
        }
    }

    Some(i)
}

/// Lit un fragment numérique. Rien d’exploitable => NaN.
pub fn lire(fragment: &str) -> f64 {
    let s = fragment.trim_start();
    match prefixe_numerique(s) {
        Some(n) => s[..n].parse::<f64>().unwrap_or(f64::NAN),
        None => f64::NAN,
    }
}

/// Texte d’affichage d’un résultat fini.
pub fn ecrire(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if x == 0.0 {
        // -0 s’affiche 0
        return "0".to_string();
    }

    let a = x.abs();
    if (1e-6..1e21).contains(&a) {
        return format!("{x}");
    }

    // 1e21 -> "1e+21", 1.5e-7 -> "1.5e-7"
    let e = format!("{x:e}");
    match e.split_once('e') {
        Some((mantisse, exp)) if !exp.starts_with('-') => format!("{mantisse}e+{exp}"),
        _ => e,
    }
}
