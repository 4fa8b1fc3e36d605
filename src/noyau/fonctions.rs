// src/noyau/fonctions.rs
//
// Fonctions unaires reconnues : sin cos tan log ln sqrt
// Une seule table de dispatch (`apply`) ; le mode d’angle est passé en argument.

use super::erreurs::ErreurEval;

/// En dessous de ce seuil, un résultat de fonction est ramené à 0
/// (ex: sin(180°) = 1.2e-16).
const SEUIL_ZERO: f64 = 1e-15;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Log, // base 10
    Ln,
    Sqrt,
}

impl Fonction {
    pub const TOUTES: [Fonction; 6] = [
        Fonction::Sin,
        Fonction::Cos,
        Fonction::Tan,
        Fonction::Log,
        Fonction::Ln,
        Fonction::Sqrt,
    ];

    pub fn depuis_nom(nom: &str) -> Option<Self> {
        Self::TOUTES.into_iter().find(|f| f.nom() == nom)
    }

    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Log => "log",
            Fonction::Ln => "ln",
            Fonction::Sqrt => "sqrt",
        }
    }

    /// Applique la fonction.
    ///
    /// - sin/cos/tan : argument en degrés si `use_degrees`, sinon en radians
    /// - log/ln/sqrt : hors domaine => `MathDomain`
    /// - |résultat| < 1e-15 => 0.0
    pub fn apply(self, x: f64, use_degrees: bool) -> Result<f64, ErreurEval> {
        let angle = || if use_degrees { x.to_radians() } else { x };

        let res = match self {
            Fonction::Sin => angle().sin(),
            Fonction::Cos => angle().cos(),
            Fonction::Tan => angle().tan(),
            Fonction::Log | Fonction::Ln if x <= 0.0 => return Err(ErreurEval::MathDomain),
            Fonction::Log => x.log10(),
            Fonction::Ln => x.ln(),
            Fonction::Sqrt if x < 0.0 => return Err(ErreurEval::MathDomain),
            Fonction::Sqrt => x.sqrt(),
        };

        Ok(if res.abs() < SEUIL_ZERO { 0.0 } else { res })
    }
}
