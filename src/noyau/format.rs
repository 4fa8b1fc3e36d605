// src/noyau/format.rs
//
// Affichage d’un résultat numérique :
// - valeur entière            => "14", "-3", "100000000000000000000"
// - |x| > 1e12 ou |x| < 1e-6  => 4 chiffres significatifs, notation scientifique ("1.235e-07")
// - sinon                     => arrondi à 8 décimales, sans zéros parasites ("0.3")

const GRAND: f64 = 1e12;
const PETIT: f64 = 1e-6;

pub fn formater_resultat(x: f64) -> String {
    if x == x.trunc() {
        // -0.0 s’affiche "0"
        return format!("{}", x + 0.0);
    }

    let a = x.abs();
    if a > GRAND || (a < PETIT && x != 0.0) {
        return scientifique_4(x);
    }

    // arrondi décimal exact de la valeur binaire (pas de x * 1e8)
    let fixe = format!("{x:.8}");
    fixe.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Équivalent de `%.4g` hors plage fixe : mantisse à 4 chiffres significatifs
/// (zéros finaux retirés) et exposant signé sur au moins 2 chiffres.
fn scientifique_4(x: f64) -> String {
    let brut = format!("{x:.3e}");
    let Some((mantisse, exposant)) = brut.split_once('e') else {
        return brut;
    };

    let mantisse = if mantisse.contains('.') {
        mantisse.trim_end_matches('0').trim_end_matches('.')
    } else {
        mantisse
    };

    let (signe, chiffres) = match exposant.strip_prefix('-') {
        Some(c) => ('-', c),
        None => ('+', exposant),
    };

    format!("{mantisse}e{signe}{chiffres:0>2}")
}
