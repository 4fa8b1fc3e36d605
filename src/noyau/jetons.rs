// src/noyau/jetons.rs

use std::fmt;

/// Opérateurs binaires (tous associatifs à gauche, `^` compris).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Modulo,
    Puissance, // ^
}

impl Operateur {
    pub fn depuis_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Moins),
            '*' => Some(Self::Fois),
            '/' => Some(Self::Divise),
            '%' => Some(Self::Modulo),
            '^' => Some(Self::Puissance),
            _ => None,
        }
    }

    /// Rang de précédence : + - = 1 ; * / % = 2 ; ^ = 3.
    pub fn rang(self) -> u8 {
        match self {
            Self::Plus | Self::Moins => 1,
            Self::Fois | Self::Divise | Self::Modulo => 2,
            Self::Puissance => 3,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Moins => '-',
            Self::Fois => '*',
            Self::Divise => '/',
            Self::Modulo => '%',
            Self::Puissance => '^',
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Jeton {
    /// Littéral déjà converti (une seule conversion, ici).
    Nombre(f64),

    // Fonction, variable connue ou inconnue : la traduction RPN décide.
    Ident(String),

    Op(Operateur),

    LPar,
    RPar,

    Egal, // =
}

impl fmt::Display for Jeton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Jeton::Nombre(x) => write!(f, "{x}"),
            Jeton::Ident(nom) => f.write_str(nom),
            Jeton::Op(op) => write!(f, "{}", op.symbole()),
            Jeton::LPar => f.write_str("("),
            Jeton::RPar => f.write_str(")"),
            Jeton::Egal => f.write_str("="),
        }
    }
}

/// Tokenize une chaîne en jetons.
///
/// Reconnaît:
/// - nombres `\d*\.?\d+` (ex: 12, 3.5, .5 ; "5." donne 5 et le point est ignoré)
/// - identifiants `[a-z]+` (minuscules seulement)
/// - opérateurs + - * / % ^, parenthèses, `=`
///
/// Tout autre caractère (espaces compris) est ignoré sans erreur :
/// un nom inconnu sera signalé plus tard, par la traduction RPN.
pub fn tokenize(s: &str) -> Vec<Jeton> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if let Some(fin) = fin_de_nombre(&chars, i) {
            let texte: String = chars[i..fin].iter().collect();
            // `\d*\.?\d+` est toujours un f64 valide
            if let Ok(x) = texte.parse::<f64>() {
                out.push(Jeton::Nombre(x));
            }
            i = fin;
            continue;
        }

        if c.is_ascii_lowercase() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_lowercase() {
                i += 1;
            }
            out.push(Jeton::Ident(chars[start..i].iter().collect()));
            continue;
        }

        if let Some(op) = Operateur::depuis_char(c) {
            out.push(Jeton::Op(op));
        } else {
            match c {
                '(' => out.push(Jeton::LPar),
                ')' => out.push(Jeton::RPar),
                '=' => out.push(Jeton::Egal),
                _ => {} // ignoré
            }
        }
        i += 1;
    }

    out
}

/// Fin (exclue) du nombre qui commence en `i`, s’il y en a un.
///
/// Chiffres, puis au plus un point suivi d’au moins un chiffre.
fn fin_de_nombre(chars: &[char], i: usize) -> Option<usize> {
    let mut j = i;
    while j < chars.len() && chars[j].is_ascii_digit() {
        j += 1;
    }

    if j < chars.len() && chars[j] == '.' && chars.get(j + 1).is_some_and(char::is_ascii_digit) {
        j += 1;
        while j < chars.len() && chars[j].is_ascii_digit() {
            j += 1;
        }
    }

    (j > i && chars[j - 1].is_ascii_digit()).then_some(j)
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    jetons
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
